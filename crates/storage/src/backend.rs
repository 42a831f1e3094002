//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use school_locator_core::{NewSchool, School};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::{PgPoolConfig, PgStorage};
use crate::traits::SchoolStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as SchoolStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as SchoolStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(
        database_url: &str,
        config: PgPoolConfig,
    ) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url, config).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Drain connections on shutdown. No-op for the in-process backend.
    pub async fn close(&self) {
        if let Self::Postgres(pg) = self {
            pg.close().await;
        }
    }
}

#[async_trait]
impl SchoolStore for StorageBackend {
    async fn find_by_name_address_ci(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Option<School>, StorageError> {
        dispatch!(self, find_by_name_address_ci(name, address))
    }

    async fn insert_school(&self, school: &NewSchool) -> Result<School, StorageError> {
        dispatch!(self, insert_school(school))
    }

    async fn scan_all(&self) -> Result<Vec<School>, StorageError> {
        dispatch!(self, scan_all())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        dispatch!(self, ping())
    }
}
