mod error;
mod ingest;

pub use error::IngestError;
pub use ingest::{ingest, IngestOutcome};
