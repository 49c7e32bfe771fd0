#![allow(dead_code)]

use reverse_dns_domain::{CaaConfig, SoaConfig, ZoneConfig};

pub const APEX: &str = "polisystems.cloud";

pub fn test_zone() -> ZoneConfig {
    ZoneConfig {
        apex: APEX.to_string(),
        ipv4: "203.0.113.10".parse().unwrap(),
        ipv6: "2001:db8::10".parse().unwrap(),
        ttl: 604_800,
        nameservers: vec![
            "ns1.polisystems.cloud".to_string(),
            "ns2.polisystems.cloud".to_string(),
            "ns3.polisystems.cloud".to_string(),
        ],
        soa: SoaConfig {
            mname: "ns1.polisystems.cloud".to_string(),
            rname: "hostmaster.polisystems.cloud".to_string(),
            refresh: 3600,
            retry: 1800,
            expire: 1_209_600,
            minimum: 86_400,
        },
        caa: CaaConfig {
            flags: 0,
            tag: "issue".to_string(),
            value: "letsencrypt.org".to_string(),
        },
    }
}
