use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw YAML representation of the core's configuration file.
///
/// Mirrors §6 "Configuration consumed by the core" exactly: the
/// per-kind required-adapter lists and the adapter→suffix override
/// table. Everything else (HTTP bind address, database URL) is owned
/// by CLI flags / env vars, not this file.
#[derive(Debug, Deserialize, Serialize)]
pub struct RawCoreConfig {
    #[serde(default)]
    pub required_cluster_adapters: Vec<String>,
    #[serde(default)]
    pub required_nodepool_adapters: Vec<String>,
    #[serde(default)]
    pub adapter_condition_suffix_override: HashMap<String, String>,
}
