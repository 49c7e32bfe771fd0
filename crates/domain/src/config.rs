pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod stats;
pub mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use stats::StatsConfig;
pub use zone::{CaaConfig, SoaConfig, ZoneConfig};
