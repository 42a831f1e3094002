//! Shared constants for school-locator.
//!
//! Centralizes magic numbers and client-facing messages used across crates.

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Number of decimal places kept on `distance_km`.
pub const DISTANCE_DECIMALS: i32 = 4;

/// Valid latitude range for stored schools (inclusive).
pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;

/// Valid longitude range for stored schools (inclusive).
pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Default HTTP listen port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Response message for a successful insert.
pub const SCHOOL_ADDED_MESSAGE: &str = "School added successfully";

/// Response message when `(name, address)` already exists.
pub const SCHOOL_EXISTS_MESSAGE: &str = "School already exists";

/// Generic message returned by `/listSchools` on store failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Message sent instead of the store's own text when disclosure is disabled.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
