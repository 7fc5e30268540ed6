use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("storage error: {0}")]
    Storage(#[from] hyperfleet_store::StoreError),
}
