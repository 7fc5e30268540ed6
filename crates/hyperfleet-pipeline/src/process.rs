use std::collections::HashMap;

use hyperfleet_aggregator::aggregate;
use hyperfleet_domain::{AdapterStatus, Kind, ResourceId};
use hyperfleet_ingest::{ingest, IngestOutcome};
use hyperfleet_store::ResourceStore;
use tracing::warn;

use crate::error::PipelineError;

/// Orchestrates the Ingestor then the Aggregator for one incoming report
/// (§4.6). Verifies the owning resource exists, upserts via `ingest`, and —
/// only when the upsert was accepted — runs `aggregate`. An aggregation
/// failure is logged and swallowed: the upsert already succeeded and is
/// durable, so the next report (from any adapter) will recompute.
pub async fn process_adapter_status(
    store: &dyn ResourceStore,
    kind: Kind,
    resource_id: &ResourceId,
    required_adapters: &[String],
    suffix_overrides: &HashMap<String, String>,
    incoming: AdapterStatus,
) -> Result<Option<AdapterStatus>, PipelineError> {
    if store.get_resource(kind, resource_id).await?.is_none() {
        return Err(PipelineError::ResourceNotFound(resource_id.to_string()));
    }

    let outcome = ingest(store, kind, resource_id, incoming).await?;

    let stored = match outcome {
        IngestOutcome::NoOp => return Ok(None),
        IngestOutcome::Accepted(stored) => stored,
    };

    if let Err(e) = aggregate(store, kind, resource_id, required_adapters, suffix_overrides).await {
        warn!(resource_id = %resource_id, error = %e, "aggregation failed after accepted upsert; next report will reconcile");
    }

    Ok(Some(stored))
}
