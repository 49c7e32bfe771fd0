pub mod record;
pub mod record_type;

pub use record::{CaaData, DnsRecord, RecordData, SoaData};
pub use record_type::RecordType;
