//! Reverse DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod encoded_address;
pub mod errors;
pub mod soa_serial;

pub use config::{CaaConfig, CliOverrides, Config, ConfigError, SoaConfig, ZoneConfig};
pub use dns_query::{normalize_domain, DnsQuery};
pub use dns_record::{CaaData, DnsRecord, RecordData, RecordType, SoaData};
pub use encoded_address::{AddressEncoding, EncodedAddress};
pub use errors::DomainError;
pub use soa_serial::SoaSerial;
