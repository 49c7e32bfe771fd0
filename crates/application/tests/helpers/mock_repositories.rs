#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reverse_dns_application::ports::{Clock, QueryCounterRepository};
use reverse_dns_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

pub struct MockQueryCounterRepository {
    count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockQueryCounterRepository {
    pub fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for MockQueryCounterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryCounterRepository for MockQueryCounterRepository {
    async fn record_query(&self) -> Result<u64, DomainError> {
        let total = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        Ok(total)
    }

    async fn current(&self) -> u64 {
        self.count()
    }
}

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
