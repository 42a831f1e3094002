use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use school_locator_core::{AddSchoolInput, SCHOOL_ADDED_MESSAGE};

use crate::api_error::ApiError;
use crate::query_types::ListSchoolsQuery;
use crate::response_types::{AddSchoolResponse, ListSchoolsResponse};
use crate::AppState;

pub async fn add_school(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddSchoolInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AddSchoolResponse>), ApiError> {
    let Json(input) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected addSchool body");
        ApiError::BadRequest(e.body_text())
    })?;

    let school = state
        .school_service
        .add_school(input)
        .await
        .map_err(|e| ApiError::adding(e, state.disclosure))?;

    let body = AddSchoolResponse { message: SCHOOL_ADDED_MESSAGE, id: school.id };
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn list_schools(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListSchoolsResponse>, ApiError> {
    let query = ListSchoolsQuery::from_pairs(pairs);
    let list = state
        .school_service
        .list_by_distance(query.reference_point())
        .await
        .map_err(|e| ApiError::listing(e, state.disclosure))?;
    Ok(Json(list.into()))
}
