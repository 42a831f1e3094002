use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api_error::ApiError;
use crate::response_types::{ReadinessResponse, VersionResponse};
use crate::AppState;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn readiness(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, ApiError> {
    let storage = state.school_service.storage_kind();
    match state.school_service.ready().await {
        Ok(()) => Ok(Json(ReadinessResponse { status: "ready", storage })),
        Err(e) => {
            tracing::warn!(error = %e, storage, "readiness check failed");
            Err(ApiError::ServiceUnavailable(format!("{storage} store unavailable")))
        },
    }
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
