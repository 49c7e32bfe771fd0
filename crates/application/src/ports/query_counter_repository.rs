use async_trait::async_trait;
use reverse_dns_domain::DomainError;

/// Process-wide count of queries served, persisted across restarts.
#[async_trait]
pub trait QueryCounterRepository: Send + Sync {
    /// Increments the counter and persists it, returning the new total.
    ///
    /// The in-memory total is incremented even when persisting fails.
    async fn record_query(&self) -> Result<u64, DomainError>;

    async fn current(&self) -> u64;
}
