use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use hyperfleet_domain::{AdapterCondition, AdapterStatus, Kind, Resource, ResourceId};
use hyperfleet_pipeline::process_adapter_status;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

// ── Health ────────────────────────────────────────────────────────────────────

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn ready(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.list_resources(Kind::Cluster).await?;
    Ok(StatusCode::OK)
}

// ── Resource CRUD ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateResourceBody {
    pub name: String,
    #[serde(default)]
    pub spec: Value,
}

#[derive(Debug, Deserialize)]
pub struct PatchResourceBody {
    pub spec: Value,
}

fn spec_bytes(spec: &Value) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(spec).map_err(|e| ApiError::bad_request(format!("invalid spec: {e}")))
}

pub async fn create_cluster(
    State(state): State<AppState>,
    Json(body): Json<CreateResourceBody>,
) -> Result<impl IntoResponse, ApiError> {
    let resource = create_resource(Kind::Cluster, body, None)?;
    let stored = state.store.create_resource(resource).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn list_clusters(State(state): State<AppState>) -> Result<Json<Vec<Resource>>, ApiError> {
    Ok(Json(state.store.list_resources(Kind::Cluster).await?))
}

pub async fn get_cluster(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, ApiError> {
    get_resource(&state, Kind::Cluster, &id).await.map(Json)
}

pub async fn patch_cluster(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PatchResourceBody>,
) -> Result<Json<Resource>, ApiError> {
    patch_resource(&state, Kind::Cluster, &id, body).await.map(Json)
}

pub async fn delete_cluster(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_resource(Kind::Cluster, &ResourceId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_nodepool(
    State(state): State<AppState>,
    Path(cluster_id): Path<String>,
    Json(body): Json<CreateResourceBody>,
) -> Result<impl IntoResponse, ApiError> {
    let resource = create_resource(Kind::NodePool, body, Some(ResourceId::new(cluster_id)))?;
    let stored = state.store.create_resource(resource).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn get_nodepool(
    State(state): State<AppState>,
    Path((_cluster_id, nodepool_id)): Path<(String, String)>,
) -> Result<Json<Resource>, ApiError> {
    get_resource(&state, Kind::NodePool, &nodepool_id).await.map(Json)
}

pub async fn patch_nodepool(
    State(state): State<AppState>,
    Path((_cluster_id, nodepool_id)): Path<(String, String)>,
    Json(body): Json<PatchResourceBody>,
) -> Result<Json<Resource>, ApiError> {
    patch_resource(&state, Kind::NodePool, &nodepool_id, body).await.map(Json)
}

pub async fn delete_nodepool(
    State(state): State<AppState>,
    Path((_cluster_id, nodepool_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete_resource(Kind::NodePool, &ResourceId::new(nodepool_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn create_resource(kind: Kind, body: CreateResourceBody, owner_id: Option<ResourceId>) -> Result<Resource, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    let now = Utc::now();
    let owner_kind = owner_id.as_ref().map(|_| Kind::Cluster);
    Ok(Resource {
        id: ResourceId::new(Uuid::new_v4().to_string()),
        kind,
        name: body.name,
        owner_id,
        owner_kind,
        spec: spec_bytes(&body.spec)?,
        generation: 0,
        status_conditions: vec![],
        created_time: now,
        updated_time: now,
        created_by: "api".into(),
        updated_by: "api".into(),
        deleted_at: None,
    })
}

async fn get_resource(state: &AppState, kind: Kind, id: &str) -> Result<Resource, ApiError> {
    state
        .store
        .get_resource(kind, &ResourceId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{kind} {id} not found")))
}

async fn patch_resource(
    state: &AppState,
    kind: Kind,
    id: &str,
    body: PatchResourceBody,
) -> Result<Resource, ApiError> {
    let mut resource = get_resource(state, kind, id).await?;
    resource.spec = spec_bytes(&body.spec)?;
    resource.updated_time = Utc::now();
    resource.updated_by = "api".into();
    Ok(state.store.replace_resource(resource).await?)
}

// ── Status ingestion ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusReportBody {
    pub adapter: String,
    pub observed_generation: i64,
    #[serde(default)]
    pub observed_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conditions: Vec<AdapterCondition>,
    #[serde(default)]
    pub data: Value,
}

pub async fn post_cluster_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusReportBody>,
) -> Result<impl IntoResponse, ApiError> {
    post_status(&state, Kind::Cluster, &id, body).await
}

pub async fn post_nodepool_status(
    State(state): State<AppState>,
    Path((_cluster_id, nodepool_id)): Path<(String, String)>,
    Json(body): Json<StatusReportBody>,
) -> Result<impl IntoResponse, ApiError> {
    post_status(&state, Kind::NodePool, &nodepool_id, body).await
}

async fn post_status(
    state: &AppState,
    kind: Kind,
    id: &str,
    body: StatusReportBody,
) -> Result<impl IntoResponse, ApiError> {
    if body.adapter.trim().is_empty() {
        return Err(ApiError::bad_request("adapter must not be empty"));
    }
    let now = Utc::now();
    let resource_id = ResourceId::new(id);
    let incoming = AdapterStatus {
        resource_type: kind,
        resource_id: resource_id.clone(),
        adapter: body.adapter,
        observed_generation: body.observed_generation,
        conditions: body.conditions,
        data: body.data,
        created_time: body.observed_time.unwrap_or(now),
        last_report_time: body.observed_time.unwrap_or(now),
    };

    let required = state.config.required_adapters_for(kind).to_vec();
    let outcome = process_adapter_status(
        state.store.as_ref(),
        kind,
        &resource_id,
        &required,
        &state.config.adapter_condition_suffix_override,
        incoming,
    )
    .await?;

    Ok(match outcome {
        Some(stored) => (StatusCode::CREATED, Json(json!(stored))).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
