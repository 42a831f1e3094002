//! HTTP API server for school-locator.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use school_locator_service::SchoolService;

pub use api_error::{ApiError, ErrorDisclosure};
pub use query_types::ListSchoolsQuery;
pub use response_types::{
    AddSchoolResponse, ListSchoolsResponse, ReadinessResponse, VersionResponse,
};

/// Shared application state for all HTTP handlers.
///
/// Built once at start-up and handed to the router wrapped in `Arc`.
pub struct AppState {
    /// Service for adding and ranking schools
    pub school_service: Arc<SchoolService>,
    /// Whether store error text reaches clients
    pub disclosure: ErrorDisclosure,
}

impl AppState {
    #[must_use]
    pub fn new(school_service: Arc<SchoolService>, disclosure: ErrorDisclosure) -> Self {
        Self { school_service, disclosure }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/readiness", get(handlers::health::readiness))
        .route("/api/version", get(handlers::health::version))
        .route("/addSchool", post(handlers::schools::add_school))
        .route("/listSchools", get(handlers::schools::list_schools))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
