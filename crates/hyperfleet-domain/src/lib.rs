pub mod error;
pub mod types;

pub use error::DomainError;
pub use types::{
    AdapterCondition, AdapterStatus, ConditionStatus, Kind, Resource, ResourceCondition,
    ResourceId, APPLIED, AVAILABLE, HEALTH, MANDATORY_CONDITIONS, READY,
};
