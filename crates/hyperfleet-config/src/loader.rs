use std::path::Path;

use hyperfleet_domain::{DomainError, Kind};
use tracing::debug;

use crate::error::ConfigError;
use crate::raw::RawCoreConfig;

/// The configuration the core consumes, resolved from YAML (§6).
///
/// `required_adapters_for` is the only way callers should read the
/// per-kind list — it keeps the Cluster/NodePool branching in one
/// place instead of scattered across the pipeline and aggregator.
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    pub required_cluster_adapters: Vec<String>,
    pub required_nodepool_adapters: Vec<String>,
    pub adapter_condition_suffix_override: std::collections::HashMap<String, String>,
}

impl CoreConfig {
    pub fn required_adapters_for(&self, kind: Kind) -> &[String] {
        match kind {
            Kind::Cluster => &self.required_cluster_adapters,
            Kind::NodePool => &self.required_nodepool_adapters,
        }
    }
}

/// Load the core configuration from a YAML file at `path`.
pub fn load_core_config(path: &Path) -> Result<CoreConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let raw: RawCoreConfig = serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!(path = %path.display(), "loaded core config");
    convert(raw, path)
}

fn convert(raw: RawCoreConfig, path: &Path) -> Result<CoreConfig, ConfigError> {
    for adapter in raw
        .required_cluster_adapters
        .iter()
        .chain(raw.required_nodepool_adapters.iter())
    {
        if adapter.trim().is_empty() {
            return Err(ConfigError::Conversion {
                path: path.display().to_string(),
                message: "required adapter name cannot be blank".into(),
            });
        }
    }
    Ok(CoreConfig {
        required_cluster_adapters: raw.required_cluster_adapters,
        required_nodepool_adapters: raw.required_nodepool_adapters,
        adapter_condition_suffix_override: raw.adapter_condition_suffix_override,
    })
}

/// Validate a single adapter name used at the HTTP boundary — §7's
/// ValidationRejection for `adapter` empty.
pub fn validate_adapter_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidAdapterName("adapter name is empty".into()));
    }
    Ok(())
}
