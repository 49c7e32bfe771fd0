//! Reverse DNS Infrastructure Layer
pub mod dns;
pub mod repositories;
pub mod system;
