use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use hyperfleet_domain::{AdapterStatus, Kind, Resource, ResourceCondition, ResourceId};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::ResourceStore;

type ResourceKey = (Kind, ResourceId);
type AdapterKey = (Kind, ResourceId, String);

#[derive(Debug, Default)]
struct Inner {
    resources: HashMap<ResourceKey, Resource>,
    adapter_statuses: HashMap<AdapterKey, AdapterStatus>,
}

/// In-memory implementation of [`ResourceStore`].
///
/// All data is lost on process exit. The single write lock over `Inner` is
/// the serialization point for both `replace_resource`'s compare-and-bump and
/// `upsert_adapter_status`'s atomicity — stricter than the per-row atomicity
/// §4.1/§5 require, so it still satisfies the contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceStore for InMemoryStore {
    async fn get_resource(&self, kind: Kind, id: &ResourceId) -> Result<Option<Resource>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard
            .resources
            .get(&(kind, id.clone()))
            .filter(|r| r.deleted_at.is_none())
            .cloned())
    }

    async fn list_resources(&self, kind: Kind) -> Result<Vec<Resource>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard
            .resources
            .values()
            .filter(|r| r.kind == kind && r.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn create_resource(&self, mut resource: Resource) -> Result<Resource, StoreError> {
        resource.generation = 1;
        let mut guard = self.inner.write().await;
        guard
            .resources
            .insert((resource.kind, resource.id.clone()), resource.clone());
        Ok(resource)
    }

    async fn replace_resource(&self, mut resource: Resource) -> Result<Resource, StoreError> {
        let mut guard = self.inner.write().await;
        let key = (resource.kind, resource.id.clone());
        let stored = guard
            .resources
            .get(&key)
            .filter(|r| r.deleted_at.is_none())
            .ok_or_else(|| StoreError::ResourceNotFound(resource.id.to_string()))?;

        resource.generation = if stored.spec != resource.spec {
            stored.generation + 1
        } else {
            stored.generation
        };

        guard.resources.insert(key, resource.clone());
        Ok(resource)
    }

    async fn update_status_conditions(
        &self,
        kind: Kind,
        id: &ResourceId,
        status_conditions: Vec<ResourceCondition>,
    ) -> Result<Resource, StoreError> {
        let mut guard = self.inner.write().await;
        let key = (kind, id.clone());
        let resource = guard
            .resources
            .get_mut(&key)
            .filter(|r| r.deleted_at.is_none())
            .ok_or_else(|| StoreError::ResourceNotFound(id.to_string()))?;
        resource.status_conditions = status_conditions;
        Ok(resource.clone())
    }

    async fn delete_resource(&self, kind: Kind, id: &ResourceId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        let now = chrono::Utc::now();
        if let Some(r) = guard.resources.get_mut(&(kind, id.clone())) {
            r.deleted_at = Some(now);
        }
        guard
            .adapter_statuses
            .retain(|(k, rid, _), _| !(*k == kind && rid == id));
        Ok(())
    }

    async fn find_adapter_status(
        &self,
        kind: Kind,
        resource_id: &ResourceId,
        adapter: &str,
    ) -> Result<Option<AdapterStatus>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard
            .adapter_statuses
            .get(&(kind, resource_id.clone(), adapter.to_string()))
            .cloned())
    }

    async fn find_adapter_statuses_by_resource(
        &self,
        kind: Kind,
        resource_id: &ResourceId,
    ) -> Result<Vec<AdapterStatus>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard
            .adapter_statuses
            .values()
            .filter(|a| a.resource_type == kind && &a.resource_id == resource_id)
            .cloned()
            .collect())
    }

    async fn upsert_adapter_status(&self, status: AdapterStatus) -> Result<AdapterStatus, StoreError> {
        let mut guard = self.inner.write().await;
        let key = (status.resource_type, status.resource_id.clone(), status.adapter.clone());
        guard.adapter_statuses.insert(key, status.clone());
        Ok(status)
    }
}
