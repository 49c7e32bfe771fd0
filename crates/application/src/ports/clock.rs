use chrono::{DateTime, Utc};

/// Source of wall-clock time for serial generation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
