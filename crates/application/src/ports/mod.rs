mod clock;
mod query_counter_repository;

pub use clock::Clock;
pub use query_counter_repository::QueryCounterRepository;

pub use reverse_dns_domain::DnsQuery;
