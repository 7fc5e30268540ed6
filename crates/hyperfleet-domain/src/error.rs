use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid adapter name: {0}")]
    InvalidAdapterName(String),
}
