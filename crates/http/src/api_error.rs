//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status
//! code. `/addSchool` and `/listSchools` use different failure bodies, so
//! store failures carry the endpoint shape they should render with.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use school_locator_core::{
    ValidationErrors, INTERNAL_ERROR_MESSAGE, SCHOOL_EXISTS_MESSAGE, SERVER_ERROR_MESSAGE,
};
use school_locator_service::ServiceError;
use school_locator_storage::StorageError;
use serde_json::json;

/// Whether store failure text is sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDisclosure {
    /// Pass the database's own message through unchanged.
    #[default]
    Verbatim,
    /// Replace it with a static message. The real error is still logged.
    Redacted,
}

impl ErrorDisclosure {
    #[must_use]
    pub const fn from_flag(expose: bool) -> Self {
        if expose { Self::Verbatim } else { Self::Redacted }
    }

    fn client_message(self, err: &StorageError) -> String {
        tracing::error!(error = ?err, "store failure");
        match self {
            Self::Verbatim => err.client_message(),
            Self::Redacted => INTERNAL_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// API error with HTTP status code and JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// 400 `{"errors": [...]}`: per-field validation failures.
    Validation(ValidationErrors),
    /// 400 `{"error": msg}`: unreadable request body.
    BadRequest(String),
    /// 400 `{"error": "School already exists"}`.
    Duplicate,
    /// 500 `{"error": msg}`: store failure while adding.
    Store(String),
    /// 500 `{"success": false, "message": "Server error", "error": msg}`: store failure while listing.
    ListFailed(String),
    /// 503 `{"status": "unavailable", "message": msg}`: store not reachable.
    ServiceUnavailable(String),
}

impl ApiError {
    /// Map a failure from the add path.
    #[must_use]
    pub fn adding(err: ServiceError, disclosure: ErrorDisclosure) -> Self {
        match err {
            ServiceError::Validation(v) => Self::Validation(v),
            ServiceError::Duplicate => Self::Duplicate,
            ServiceError::Storage(e) => Self::Store(disclosure.client_message(&e)),
        }
    }

    /// Map a failure from the listing path.
    #[must_use]
    pub fn listing(err: ServiceError, disclosure: ErrorDisclosure) -> Self {
        match err {
            ServiceError::Storage(e) => Self::ListFailed(disclosure.client_message(&e)),
            other => Self::ListFailed(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(v) => (StatusCode::BAD_REQUEST, json!({ "errors": v.errors })),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Self::Duplicate => (StatusCode::BAD_REQUEST, json!({ "error": SCHOOL_EXISTS_MESSAGE })),
            Self::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
            Self::ListFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "message": SERVER_ERROR_MESSAGE, "error": msg }),
            ),
            Self::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "status": "unavailable", "message": msg }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_maps_to_bad_request() {
        let resp = ApiError::adding(ServiceError::Duplicate, ErrorDisclosure::Verbatim);
        assert!(matches!(resp, ApiError::Duplicate));
        assert_eq!(resp.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_message_passes_through_when_verbatim() {
        let err = ServiceError::Storage(StorageError::Migration("relation missing".to_owned()));
        match ApiError::adding(err, ErrorDisclosure::Verbatim) {
            ApiError::Store(msg) => assert_eq!(msg, "relation missing"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn store_message_hidden_when_redacted() {
        let err = ServiceError::Storage(StorageError::Migration("relation missing".to_owned()));
        match ApiError::listing(err, ErrorDisclosure::Redacted) {
            ApiError::ListFailed(msg) => assert_eq!(msg, INTERNAL_ERROR_MESSAGE),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn listing_failure_is_server_error() {
        let err = ServiceError::Storage(StorageError::Migration("boom".to_owned()));
        let resp = ApiError::listing(err, ErrorDisclosure::Verbatim).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn disclosure_flag_mapping() {
        assert_eq!(ErrorDisclosure::from_flag(true), ErrorDisclosure::Verbatim);
        assert_eq!(ErrorDisclosure::from_flag(false), ErrorDisclosure::Redacted);
    }
}
