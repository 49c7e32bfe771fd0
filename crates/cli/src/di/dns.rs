use super::Repositories;
use reverse_dns_application::services::ZoneResolver;
use reverse_dns_application::use_cases::HandleDnsQueryUseCase;
use reverse_dns_domain::Config;
use reverse_dns_infrastructure::dns::DnsServerHandler;
use reverse_dns_infrastructure::system::SystemClock;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, repos: &Repositories) -> Self {
        let resolver = Arc::new(ZoneResolver::new(&config.zone));

        info!(
            apex = resolver.apex(),
            nameservers = config.zone.nameservers.len(),
            ttl = config.zone.ttl,
            "Zone loaded"
        );

        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(
            resolver,
            repos.query_counter.clone(),
            Arc::new(SystemClock),
        ));

        Self { handler_use_case }
    }

    pub fn handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.handler_use_case.clone())
    }
}
