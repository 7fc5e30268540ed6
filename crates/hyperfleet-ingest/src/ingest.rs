use hyperfleet_domain::{AdapterStatus, Kind, ResourceId, MANDATORY_CONDITIONS};
use hyperfleet_domain::ConditionStatus;
use hyperfleet_store::ResourceStore;
use tracing::debug;

use crate::error::IngestError;

/// Result of [`ingest`]. `NoOp` covers every silent-rejection path in the
/// validation order below — stale report, missing mandatory condition, or a
/// mandatory condition stuck at Unknown. Callers surface it as 204.
#[derive(Debug)]
pub enum IngestOutcome {
    Accepted(AdapterStatus),
    NoOp,
}

/// Validate and upsert an incoming AdapterStatus report.
///
/// Rules are applied in order and the first one that fires short-circuits
/// the rest: staleness, then missing mandatory conditions, then Unknown
/// mandatory conditions. Equal `observed_generation` is NOT stale — it is
/// accepted and upserts the row, matching the operational choice this
/// system makes for concurrent reports at the same generation.
pub async fn ingest(
    store: &dyn ResourceStore,
    kind: Kind,
    resource_id: &ResourceId,
    mut incoming: AdapterStatus,
) -> Result<IngestOutcome, IngestError> {
    let existing = store
        .find_adapter_status(kind, resource_id, &incoming.adapter)
        .await?;

    if let Some(existing) = &existing {
        if incoming.observed_generation < existing.observed_generation {
            debug!(
                adapter = %incoming.adapter,
                incoming_gen = incoming.observed_generation,
                stored_gen = existing.observed_generation,
                "rejecting stale adapter status report"
            );
            return Ok(IngestOutcome::NoOp);
        }
    }

    for condition_type in MANDATORY_CONDITIONS {
        match incoming.effective_condition(condition_type) {
            None => {
                debug!(adapter = %incoming.adapter, condition_type, "missing mandatory condition, discarding report");
                return Ok(IngestOutcome::NoOp);
            }
            Some(c) if c.status == ConditionStatus::Unknown => {
                debug!(adapter = %incoming.adapter, condition_type, "mandatory condition is Unknown, discarding report");
                return Ok(IngestOutcome::NoOp);
            }
            Some(_) => {}
        }
    }

    if let Some(existing) = &existing {
        incoming.created_time = existing.created_time;
    }

    let stored = store.upsert_adapter_status(incoming).await?;
    Ok(IngestOutcome::Accepted(stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hyperfleet_domain::{AdapterCondition, Resource, AVAILABLE, APPLIED, HEALTH};
    use hyperfleet_store::InMemoryStore;

    fn cond(condition_type: &str, status: ConditionStatus) -> AdapterCondition {
        AdapterCondition {
            condition_type: condition_type.to_string(),
            status,
            reason: None,
            message: None,
            last_transition_time: Some(Utc::now()),
        }
    }

    fn all_mandatory_true() -> Vec<AdapterCondition> {
        vec![
            cond(AVAILABLE, ConditionStatus::True),
            cond(APPLIED, ConditionStatus::True),
            cond(HEALTH, ConditionStatus::True),
        ]
    }

    fn status(adapter: &str, gen: i64, conditions: Vec<AdapterCondition>) -> AdapterStatus {
        AdapterStatus {
            resource_type: Kind::Cluster,
            resource_id: ResourceId::new("c1"),
            adapter: adapter.into(),
            observed_generation: gen,
            conditions,
            data: serde_json::Value::Null,
            created_time: Utc::now(),
            last_report_time: Utc::now(),
        }
    }

    async fn seed_resource(store: &InMemoryStore) {
        let r = Resource {
            id: ResourceId::new("c1"),
            kind: Kind::Cluster,
            name: "c1".into(),
            owner_id: None,
            owner_kind: None,
            spec: b"{}".to_vec(),
            generation: 0,
            status_conditions: vec![],
            created_time: Utc::now(),
            updated_time: Utc::now(),
            created_by: "tester".into(),
            updated_by: "tester".into(),
            deleted_at: None,
        };
        store.create_resource(r).await.unwrap();
    }

    #[tokio::test]
    async fn accepts_full_mandatory_report() {
        let store = InMemoryStore::new();
        seed_resource(&store).await;

        let outcome = ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("validation", 1, all_mandatory_true()))
            .await
            .unwrap();
        assert!(matches!(outcome, IngestOutcome::Accepted(_)));
    }

    #[tokio::test]
    async fn rejects_stale_report_s5() {
        let store = InMemoryStore::new();
        seed_resource(&store).await;
        ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("validation", 2, all_mandatory_true()))
            .await
            .unwrap();

        let outcome = ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("validation", 1, all_mandatory_true()))
            .await
            .unwrap();
        assert!(matches!(outcome, IngestOutcome::NoOp));

        let stored = store.find_adapter_status(Kind::Cluster, &ResourceId::new("c1"), "validation").await.unwrap().unwrap();
        assert_eq!(stored.observed_generation, 2, "stale report must not overwrite");
    }

    #[tokio::test]
    async fn equal_generation_is_accepted_not_stale() {
        let store = InMemoryStore::new();
        seed_resource(&store).await;
        ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("validation", 1, all_mandatory_true()))
            .await
            .unwrap();

        let outcome = ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("validation", 1, all_mandatory_true()))
            .await
            .unwrap();
        assert!(matches!(outcome, IngestOutcome::Accepted(_)), "equal observed_generation must upsert, not be treated as stale");
    }

    #[tokio::test]
    async fn rejects_mandatory_unknown_s6() {
        let store = InMemoryStore::new();
        seed_resource(&store).await;

        let conditions = vec![
            cond(AVAILABLE, ConditionStatus::Unknown),
            cond(APPLIED, ConditionStatus::True),
            cond(HEALTH, ConditionStatus::True),
        ];
        let outcome = ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("validation", 1, conditions))
            .await
            .unwrap();
        assert!(matches!(outcome, IngestOutcome::NoOp));
        assert!(store.find_adapter_status(Kind::Cluster, &ResourceId::new("c1"), "validation").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_missing_mandatory_s7() {
        let store = InMemoryStore::new();
        seed_resource(&store).await;
        ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("dns", 1, all_mandatory_true()))
            .await
            .unwrap();

        let partial = status("dns", 2, vec![cond(HEALTH, ConditionStatus::True)]);
        let outcome = ingest(&store, Kind::Cluster, &ResourceId::new("c1"), partial).await.unwrap();
        assert!(matches!(outcome, IngestOutcome::NoOp));

        let stored = store.find_adapter_status(Kind::Cluster, &ResourceId::new("c1"), "dns").await.unwrap().unwrap();
        assert_eq!(stored.observed_generation, 1, "previously stored row must be preserved byte-identically");
    }

    #[tokio::test]
    async fn duplicate_conflicting_non_unknown_last_occurrence_wins() {
        let store = InMemoryStore::new();
        seed_resource(&store).await;

        let conditions = vec![
            cond(AVAILABLE, ConditionStatus::True),
            cond(AVAILABLE, ConditionStatus::False),
            cond(APPLIED, ConditionStatus::True),
            cond(HEALTH, ConditionStatus::True),
        ];
        let outcome = ingest(&store, Kind::Cluster, &ResourceId::new("c1"), status("validation", 1, conditions))
            .await
            .unwrap();
        // Last occurrence (False) is non-Unknown, so mandatory check passes and the
        // report is accepted — the open question on non-Unknown tie-break is
        // resolved as last-occurrence-wins, consistent with AdapterStatus::effective_condition.
        assert!(matches!(outcome, IngestOutcome::Accepted(_)));
    }
}
