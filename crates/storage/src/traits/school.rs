use async_trait::async_trait;
use school_locator_core::{NewSchool, School};

use crate::error::StorageError;

/// CRUD operations on school records.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Find a school whose name and address both match, ignoring case.
    async fn find_by_name_address_ci(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Option<School>, StorageError>;

    /// Insert a school and return it with its assigned id.
    ///
    /// Fails with `StorageError::Duplicate` if the backend's uniqueness
    /// constraint rejects the row.
    async fn insert_school(&self, school: &NewSchool) -> Result<School, StorageError>;

    /// Every stored school, in insertion order.
    async fn scan_all(&self) -> Result<Vec<School>, StorageError>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StorageError>;
}
