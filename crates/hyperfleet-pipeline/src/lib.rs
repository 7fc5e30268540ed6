mod error;
mod process;

pub use error::PipelineError;
pub use process::process_adapter_status;
