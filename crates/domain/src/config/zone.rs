use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

use super::errors::ConfigError;
use crate::dns_query::normalize_domain;

/// The single zone this server is authoritative for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Apex domain, e.g. `polisystems.cloud`
    pub apex: String,

    /// Address answered for `A` at the apex
    pub ipv4: Ipv4Addr,

    /// Address answered for `AAAA` at the apex
    pub ipv6: Ipv6Addr,

    /// TTL applied to every synthesized record
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// NS records, answered in this order
    pub nameservers: Vec<String>,

    pub soa: SoaConfig,

    #[serde(default)]
    pub caa: CaaConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoaConfig {
    pub mname: String,

    pub rname: String,

    #[serde(default = "default_soa_refresh")]
    pub refresh: u32,

    #[serde(default = "default_soa_retry")]
    pub retry: u32,

    #[serde(default = "default_soa_expire")]
    pub expire: u32,

    #[serde(default = "default_soa_minimum")]
    pub minimum: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaaConfig {
    #[serde(default)]
    pub flags: u8,

    #[serde(default = "default_caa_tag")]
    pub tag: String,

    #[serde(default = "default_caa_value")]
    pub value: String,
}

impl Default for CaaConfig {
    fn default() -> Self {
        Self {
            flags: 0,
            tag: default_caa_tag(),
            value: default_caa_value(),
        }
    }
}

impl ZoneConfig {
    /// Lower-cases every configured name and drops trailing dots.
    pub fn normalize(&mut self) {
        self.apex = normalize_domain(&self.apex);
        self.soa.mname = normalize_domain(&self.soa.mname);
        self.soa.rname = normalize_domain(&self.soa.rname);
        for ns in &mut self.nameservers {
            *ns = normalize_domain(ns);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name("zone.apex", &self.apex)?;
        validate_name("zone.soa.mname", &self.soa.mname)?;
        validate_name("zone.soa.rname", &self.soa.rname)?;

        if self.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "zone.nameservers must list at least one server".to_string(),
            ));
        }
        for ns in &self.nameservers {
            validate_name("zone.nameservers", ns)?;
        }

        if self.ttl > i32::MAX as u32 {
            return Err(ConfigError::Validation(format!(
                "zone.ttl {} exceeds {}",
                self.ttl,
                i32::MAX
            )));
        }

        for (field, value) in [
            ("refresh", self.soa.refresh),
            ("retry", self.soa.retry),
            ("expire", self.soa.expire),
        ] {
            if value > i32::MAX as u32 {
                return Err(ConfigError::Validation(format!(
                    "zone.soa.{} {} exceeds {}",
                    field,
                    value,
                    i32::MAX
                )));
            }
        }

        if self.caa.tag.is_empty() || !self.caa.tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "zone.caa.tag '{}' must be non-empty ASCII alphanumeric",
                self.caa.tag
            )));
        }
        if self.caa.tag.len() > 255 {
            return Err(ConfigError::Validation(
                "zone.caa.tag is longer than 255 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Checks hostname syntax: 1..=253 octets, labels of 1..=63 letters, digits, `-` or `_`.
pub fn is_valid_hostname(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    })
}

fn validate_name(field: &str, name: &str) -> Result<(), ConfigError> {
    if is_valid_hostname(name) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{} '{}' is not a valid domain name",
            field, name
        )))
    }
}

fn default_ttl() -> u32 {
    604_800
}

fn default_soa_refresh() -> u32 {
    3600
}

fn default_soa_retry() -> u32 {
    1800
}

fn default_soa_expire() -> u32 {
    1_209_600
}

fn default_soa_minimum() -> u32 {
    86_400
}

fn default_caa_tag() -> String {
    "issue".to_string()
}

fn default_caa_value() -> String {
    "letsencrypt.org".to_string()
}
