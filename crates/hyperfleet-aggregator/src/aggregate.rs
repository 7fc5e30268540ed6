use std::collections::HashMap;

use chrono::Utc;
use hyperfleet_domain::{
    ConditionStatus, Kind, Resource, ResourceCondition, ResourceId, AVAILABLE, READY,
};
use hyperfleet_store::ResourceStore;

use crate::error::AggregateError;
use crate::mapper::adapter_condition_type;
use crate::merger::merge_condition_timestamps;

/// Recompute the synthetic `Available`/`Ready` conditions for a resource and
/// the adapter-derived conditions alongside them, then persist (§4.3).
///
/// `required_adapters` and `suffix_overrides` come from configuration,
/// injected per kind by the caller.
pub async fn aggregate(
    store: &dyn ResourceStore,
    kind: Kind,
    resource_id: &ResourceId,
    required_adapters: &[String],
    suffix_overrides: &HashMap<String, String>,
) -> Result<Resource, AggregateError> {
    let r = store
        .get_resource(kind, resource_id)
        .await?
        .ok_or_else(|| AggregateError::ResourceNotFound(resource_id.to_string()))?;

    let statuses = store.find_adapter_statuses_by_resource(kind, resource_id).await?;

    let now = Utc::now();

    // Step 3: adapter-derived conditions, and step 4's lookup map built together.
    let mut adapter_conditions = Vec::with_capacity(statuses.len());
    let mut available_by_adapter: HashMap<&str, (bool, i64)> = HashMap::new();

    for status in &statuses {
        let Some(available) = status.effective_condition(AVAILABLE) else {
            continue;
        };
        let is_true = available.status == ConditionStatus::True;
        available_by_adapter.insert(status.adapter.as_str(), (is_true, status.observed_generation));

        adapter_conditions.push(ResourceCondition {
            condition_type: adapter_condition_type(&status.adapter, suffix_overrides),
            status: available.status,
            observed_generation: status.observed_generation,
            reason: available.reason.clone(),
            message: available.message.clone(),
            created_time: status.created_time,
            last_transition_time: available.last_transition_time.unwrap_or(status.created_time),
            last_updated_time: status.last_report_time,
        });
    }

    // Step 4: synthetic Available.
    let available_true_gens: Vec<i64> = required_adapters
        .iter()
        .filter_map(|a| available_by_adapter.get(a.as_str()))
        .filter(|(is_true, _)| *is_true)
        .map(|(_, gen)| *gen)
        .collect();

    let (available_status, available_gen) =
        if !required_adapters.is_empty() && available_true_gens.len() == required_adapters.len() {
            (ConditionStatus::True, available_true_gens.into_iter().min().unwrap_or(0))
        } else {
            (ConditionStatus::False, 0)
        };

    // Step 5: synthetic Ready.
    let ready_count = required_adapters
        .iter()
        .filter_map(|a| available_by_adapter.get(a.as_str()))
        .filter(|(is_true, gen)| *is_true && (r.generation == 0 || *gen == r.generation as i64))
        .count();

    let ready_status = if !required_adapters.is_empty() && ready_count == required_adapters.len() {
        ConditionStatus::True
    } else {
        ConditionStatus::False
    };

    let mut synthetic_available = ResourceCondition {
        condition_type: AVAILABLE.to_string(),
        status: available_status,
        observed_generation: available_gen,
        reason: None,
        message: None,
        created_time: now,
        last_transition_time: now,
        last_updated_time: now,
    };
    let mut synthetic_ready = ResourceCondition {
        condition_type: READY.to_string(),
        status: ready_status,
        observed_generation: r.generation as i64,
        reason: None,
        message: None,
        created_time: now,
        last_transition_time: now,
        last_updated_time: now,
    };

    // Step 6: merge timestamps against whatever was previously stored.
    let existing_available = r.find_condition(AVAILABLE).cloned();
    let existing_ready = r.find_condition(READY).cloned();
    merge_condition_timestamps(&mut synthetic_available, existing_available.as_ref(), now);
    merge_condition_timestamps(&mut synthetic_ready, existing_ready.as_ref(), now);

    // Step 7: persist. Synthetic conditions first, spec untouched. Goes
    // through the status-only write so a spec PATCH racing this aggregation
    // can't be reverted by a stale compare-and-bump.
    let mut status_conditions = Vec::with_capacity(2 + adapter_conditions.len());
    status_conditions.push(synthetic_available);
    status_conditions.push(synthetic_ready);
    status_conditions.extend(adapter_conditions);

    let persisted = store.update_status_conditions(kind, resource_id, status_conditions).await?;
    Ok(persisted)
}
