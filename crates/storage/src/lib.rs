//! Storage layer for school-locator
//!
//! PostgreSQL-backed record store (sqlx) with an in-process alternative,
//! both exposed through the `SchoolStore` trait and `StorageBackend` dispatch.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::{PgPoolConfig, PgStorage};
pub use traits::SchoolStore;
