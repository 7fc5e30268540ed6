use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use hyperfleet_config::CoreConfig;
use hyperfleet_store::ResourceStore;
use tower_http::trace::TraceLayer;

use crate::auth::require_bearer_token;
use crate::handlers;
use crate::state::AppState;

pub fn build_app(store: Arc<dyn ResourceStore>, config: Arc<CoreConfig>, auth_token: Arc<String>) -> Router {
    let state = AppState { store, config, auth_token };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route(
            "/api/hyperfleet/v1/clusters",
            get(handlers::list_clusters).post(handlers::create_cluster),
        )
        .route(
            "/api/hyperfleet/v1/clusters/:id",
            get(handlers::get_cluster)
                .patch(handlers::patch_cluster)
                .delete(handlers::delete_cluster),
        )
        .route(
            "/api/hyperfleet/v1/clusters/:id/nodepools",
            post(handlers::create_nodepool),
        )
        .route(
            "/api/hyperfleet/v1/clusters/:id/nodepools/:nodepool_id",
            get(handlers::get_nodepool)
                .patch(handlers::patch_nodepool)
                .delete(handlers::delete_nodepool),
        )
        .route(
            "/api/hyperfleet/v1/clusters/:id/statuses",
            post(handlers::post_cluster_status),
        )
        .route(
            "/api/hyperfleet/v1/clusters/:id/nodepools/:nodepool_id/statuses",
            post(handlers::post_nodepool_status),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer_token))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
