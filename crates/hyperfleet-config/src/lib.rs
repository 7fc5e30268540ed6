mod raw;
mod loader;
pub mod error;

pub use loader::{load_core_config, validate_adapter_name, CoreConfig};
pub use error::ConfigError;
