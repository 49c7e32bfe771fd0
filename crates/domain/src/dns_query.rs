use super::RecordType;
use std::sync::Arc;

/// A question as the resolver sees it: the name is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: normalize_domain(domain).into(),
            record_type,
        }
    }
}

/// Strips trailing dots and lower-cases the name.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}
