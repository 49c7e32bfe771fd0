use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
