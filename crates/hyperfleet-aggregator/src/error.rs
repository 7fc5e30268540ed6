use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] hyperfleet_store::StoreError),
}
