use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// RFC 9457 Problem Details. `type` defaults to "about:blank" — none of
/// these errors have a dereferenceable problem-type URI of their own yet.
pub struct ApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError { status: StatusCode::BAD_REQUEST, title: "Bad Request".into(), detail: detail.into() }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            title: "Unprocessable Entity".into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError { status: StatusCode::NOT_FOUND, title: "Not Found".into(), detail: detail.into() }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Internal Server Error".into(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "type": "about:blank",
            "title": self.title,
            "status": self.status.as_u16(),
            "detail": self.detail,
        }));
        let mut response = (self.status, body).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// §7 taxonomy: ResourceNotFound -> NotFound, ingest/domain validation ->
/// ValidationRejection, everything else storage-shaped -> TransientStorage.
impl From<hyperfleet_pipeline::PipelineError> for ApiError {
    fn from(e: hyperfleet_pipeline::PipelineError) -> Self {
        use hyperfleet_pipeline::PipelineError;
        match e {
            PipelineError::ResourceNotFound(id) => ApiError::not_found(format!("resource not found: {id}")),
            PipelineError::Ingest(_) => ApiError::internal(e.to_string()),
            PipelineError::Store(store_err) => ApiError::from(store_err),
        }
    }
}

impl From<hyperfleet_store::StoreError> for ApiError {
    fn from(e: hyperfleet_store::StoreError) -> Self {
        use hyperfleet_store::StoreError;
        match e {
            StoreError::ResourceNotFound(id) => ApiError::not_found(format!("resource not found: {id}")),
            StoreError::Serialization(_) | StoreError::Internal(_) => ApiError::internal(e.to_string()),
        }
    }
}

impl From<hyperfleet_domain::DomainError> for ApiError {
    fn from(e: hyperfleet_domain::DomainError) -> Self {
        ApiError::bad_request(e.to_string())
    }
}
