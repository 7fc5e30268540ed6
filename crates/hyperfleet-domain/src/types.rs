use serde::{Deserialize, Serialize};

// ── Identifiers ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn new(s: impl Into<String>) -> Self {
        ResourceId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Kind ──────────────────────────────────────────────────────────────────────

/// The two resource kinds HyperFleet manages. A NodePool is always owned by
/// exactly one Cluster; a Cluster has no owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Cluster,
    NodePool,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Cluster => write!(f, "Cluster"),
            Kind::NodePool => write!(f, "NodePool"),
        }
    }
}

impl Kind {
    /// The string used as `resource_type` in the AdapterStatus unique key and
    /// in storage — lowercased so it reads naturally in table rows and URLs.
    pub fn as_resource_type(&self) -> &'static str {
        match self {
            Kind::Cluster => "cluster",
            Kind::NodePool => "nodepool",
        }
    }
}

// ── Condition status ─────────────────────────────────────────────────────────

/// Tri-state status shared by AdapterCondition and ResourceCondition.
///
/// Synthetic conditions (Available, Ready) never produce `Unknown` — that is
/// an invariant enforced by the aggregator, not by this type, so the same
/// enum can represent both condition flavors (invariant 5 in spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionStatus::True => write!(f, "True"),
            ConditionStatus::False => write!(f, "False"),
            ConditionStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

// ── AdapterCondition ──────────────────────────────────────────────────────────

/// One condition inside an AdapterStatus report's `conditions` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: ConditionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<chrono::DateTime<chrono::Utc>>,
}

// ── ResourceCondition ─────────────────────────────────────────────────────────

/// One condition inside Resource.status_conditions — either a synthetic
/// `Available`/`Ready` condition or an adapter-derived condition mapped
/// through the Mapper (§4.5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: ConditionStatus,
    pub observed_generation: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_time: chrono::DateTime<chrono::Utc>,
    pub last_transition_time: chrono::DateTime<chrono::Utc>,
    pub last_updated_time: chrono::DateTime<chrono::Utc>,
}

pub const AVAILABLE: &str = "Available";
pub const READY: &str = "Ready";
pub const APPLIED: &str = "Applied";
pub const HEALTH: &str = "Health";

/// The three condition types every AdapterStatus report must carry with a
/// non-Unknown status (glossary: Mandatory conditions).
pub const MANDATORY_CONDITIONS: [&str; 3] = [AVAILABLE, APPLIED, HEALTH];

// ── AdapterStatus ─────────────────────────────────────────────────────────────

/// One row per (resource_type, resource_id, adapter) — unique on that triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterStatus {
    pub resource_type: Kind,
    pub resource_id: ResourceId,
    pub adapter: String,
    pub observed_generation: i64,
    pub conditions: Vec<AdapterCondition>,
    #[serde(default)]
    pub data: serde_json::Value,
    pub created_time: chrono::DateTime<chrono::Utc>,
    pub last_report_time: chrono::DateTime<chrono::Utc>,
}

impl AdapterStatus {
    /// The named condition's effective status, folding duplicates per
    /// §4.2 step 3: Unknown wins over any other occurrence; otherwise the
    /// last occurrence of the type wins.
    pub fn effective_condition(&self, condition_type: &str) -> Option<&AdapterCondition> {
        let mut last: Option<&AdapterCondition> = None;
        for c in &self.conditions {
            if c.condition_type != condition_type {
                continue;
            }
            if c.status == ConditionStatus::Unknown {
                return Some(c);
            }
            last = Some(c);
        }
        last
    }
}

// ── Resource ──────────────────────────────────────────────────────────────────

/// A Cluster or NodePool — the top-level resource HyperFleet tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub kind: Kind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_kind: Option<Kind>,
    /// Opaque JSON blob, stored as raw bytes. Compared byte-for-byte on
    /// replace to decide whether `generation` should bump (§4.1).
    pub spec: Vec<u8>,
    pub generation: u64,
    pub status_conditions: Vec<ResourceCondition>,
    pub created_time: chrono::DateTime<chrono::Utc>,
    pub updated_time: chrono::DateTime<chrono::Utc>,
    pub created_by: String,
    pub updated_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Resource {
    pub fn find_condition(&self, condition_type: &str) -> Option<&ResourceCondition> {
        self.status_conditions
            .iter()
            .find(|c| c.condition_type == condition_type)
    }
}
