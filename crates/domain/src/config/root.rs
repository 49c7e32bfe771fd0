use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::stats::StatsConfig;
use super::zone::ZoneConfig;

const LOCAL_CONFIG_PATH: &str = "reverse-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/reverse-dns/config.toml";

/// Main configuration structure for Reverse DNS
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// The zone to synthesize records for
    pub zone: ZoneConfig,

    /// Query counter persistence
    #[serde(default)]
    pub stats: StatsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. reverse-dns.toml in current directory
    /// 3. /etc/reverse-dns/config.toml
    ///
    /// There is no built-in zone, so a missing file is an error.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_string(),
            None => Self::get_config_path().ok_or(ConfigError::NotFound)?,
        };

        let mut config = Self::from_file(&path)?;
        config.apply_cli_overrides(cli_overrides);
        config.zone.normalize();
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(stats) = overrides.stats_path {
            self.stats.path = stats;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Bind address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        if self.stats.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Stats file path cannot be empty".to_string(),
            ));
        }

        self.zone.validate()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub stats_path: Option<String>,
    pub log_level: Option<String>,
}
