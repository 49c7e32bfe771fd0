#![allow(dead_code)]

pub const FULL_CONFIG: &str = r#"
[server]
dns_port = 5353
bind_address = "127.0.0.1"

[zone]
apex = "PoliSystems.Cloud."
ipv4 = "203.0.113.10"
ipv6 = "2001:db8::10"
ttl = 3600
nameservers = ["NS1.polisystems.cloud.", "ns2.polisystems.cloud"]

[zone.soa]
mname = "ns1.polisystems.cloud"
rname = "hostmaster.polisystems.cloud"
refresh = 7200

[zone.caa]
flags = 128
tag = "issuewild"
value = "letsencrypt.org"

[stats]
path = "/var/lib/reverse-dns/stats.txt"

[logging]
level = "debug"
"#;

pub const MINIMAL_CONFIG: &str = r#"
[zone]
apex = "polisystems.cloud"
ipv4 = "203.0.113.10"
ipv6 = "2001:db8::10"
nameservers = ["ns1.polisystems.cloud"]

[zone.soa]
mname = "ns1.polisystems.cloud"
rname = "hostmaster.polisystems.cloud"
"#;

pub fn write_config(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
