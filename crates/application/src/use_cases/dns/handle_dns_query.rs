use crate::ports::{Clock, QueryCounterRepository};
use crate::services::ZoneResolver;
use reverse_dns_domain::{DnsQuery, DnsRecord};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct HandleDnsQueryUseCase {
    resolver: Arc<ZoneResolver>,
    counter: Arc<dyn QueryCounterRepository>,
    clock: Arc<dyn Clock>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        resolver: Arc<ZoneResolver>,
        counter: Arc<dyn QueryCounterRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            counter,
            clock,
        }
    }

    /// Counts the query, then answers it.
    ///
    /// A failure to persist the counter is logged and never affects the answer.
    pub async fn execute(&self, query: &DnsQuery) -> Vec<DnsRecord> {
        match self.counter.record_query().await {
            Ok(total) => debug!(total, "Query counted"),
            Err(e) => warn!(error = %e, domain = %query.domain, "Failed to persist query counter"),
        }

        let records = self.resolver.resolve(query, self.clock.now());

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            answers = records.len(),
            "Query resolved"
        );

        records
    }
}
