use reverse_dns_domain::Config;
use reverse_dns_infrastructure::repositories::FileQueryCounterRepository;
use std::sync::Arc;

pub struct Repositories {
    pub query_counter: Arc<FileQueryCounterRepository>,
}

impl Repositories {
    pub async fn new(config: &Config) -> Self {
        Self {
            query_counter: Arc::new(FileQueryCounterRepository::load(&config.stats.path).await),
        }
    }
}
