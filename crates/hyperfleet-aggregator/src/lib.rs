mod aggregate;
mod error;
mod mapper;
mod merger;

pub use aggregate::aggregate;
pub use error::AggregateError;
pub use mapper::adapter_condition_type;
pub use merger::merge_condition_timestamps;
