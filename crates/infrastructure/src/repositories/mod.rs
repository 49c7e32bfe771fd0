pub mod query_counter_repository;

pub use query_counter_repository::{FileQueryCounterRepository, COUNTER_LABEL};
