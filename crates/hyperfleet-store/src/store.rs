use async_trait::async_trait;
use hyperfleet_domain::{AdapterStatus, Kind, Resource, ResourceId};

use crate::error::StoreError;

/// Persistence for Resources and their AdapterStatus rows (component A, §4.1).
///
/// Implementations must uphold two contracts the aggregator/ingestor rely on
/// without re-checking:
/// - `replace_resource` compares the stored spec bytes to the incoming spec
///   and bumps `generation` iff they differ, inside the same write.
/// - `upsert_adapter_status` is atomic on the (resource_type, resource_id,
///   adapter) key — last writer wins, no partial row updates are visible.
#[async_trait]
pub trait ResourceStore: Send + Sync + 'static {
    async fn get_resource(&self, kind: Kind, id: &ResourceId) -> Result<Option<Resource>, StoreError>;

    async fn list_resources(&self, kind: Kind) -> Result<Vec<Resource>, StoreError>;

    /// Insert a brand-new resource. `generation` is forced to 1 regardless of
    /// what the caller set — generation is the store's bookkeeping, not the
    /// client's.
    async fn create_resource(&self, resource: Resource) -> Result<Resource, StoreError>;

    /// Compare-and-bump per §4.1: if `resource.spec` differs byte-for-byte
    /// from the stored spec, `generation` becomes `stored.generation + 1`;
    /// otherwise the stored generation is preserved. Returns `ResourceNotFound`
    /// if no resource with this (kind, id) exists.
    async fn replace_resource(&self, resource: Resource) -> Result<Resource, StoreError>;

    /// Overwrite `status_conditions` only. Never reads or writes `spec`, so it
    /// cannot interact with `replace_resource`'s compare-and-bump — a
    /// concurrent spec PATCH and an aggregator write can never clobber each
    /// other's field. `generation` is left untouched. Returns
    /// `ResourceNotFound` if no resource with this (kind, id) exists.
    async fn update_status_conditions(
        &self,
        kind: Kind,
        id: &ResourceId,
        status_conditions: Vec<hyperfleet_domain::ResourceCondition>,
    ) -> Result<Resource, StoreError>;

    async fn delete_resource(&self, kind: Kind, id: &ResourceId) -> Result<(), StoreError>;

    async fn find_adapter_status(
        &self,
        kind: Kind,
        resource_id: &ResourceId,
        adapter: &str,
    ) -> Result<Option<AdapterStatus>, StoreError>;

    async fn find_adapter_statuses_by_resource(
        &self,
        kind: Kind,
        resource_id: &ResourceId,
    ) -> Result<Vec<AdapterStatus>, StoreError>;

    /// Atomic upsert keyed on (resource_type, resource_id, adapter).
    async fn upsert_adapter_status(&self, status: AdapterStatus) -> Result<AdapterStatus, StoreError>;
}
