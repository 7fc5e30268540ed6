use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("ingest error: {0}")]
    Ingest(#[from] hyperfleet_ingest::IngestError),

    #[error("store error: {0}")]
    Store(#[from] hyperfleet_store::StoreError),
}
