use std::sync::Arc;

use school_locator_core::{rank_schools, AddSchoolInput, Coordinate, RankedList, School};
use school_locator_storage::{SchoolStore, StorageBackend};

use crate::ServiceError;

pub struct SchoolService {
    storage: Arc<StorageBackend>,
}

impl SchoolService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Validate, reject case-insensitive duplicates, then insert.
    ///
    /// The lookup and the insert are separate store calls. A concurrent insert
    /// of the same pair that slips between them is caught by the store's
    /// uniqueness constraint and reported as `Duplicate` as well.
    pub async fn add_school(&self, input: AddSchoolInput) -> Result<School, ServiceError> {
        let new_school = input.validate()?;

        if let Some(existing) =
            self.storage.find_by_name_address_ci(&new_school.name, &new_school.address).await?
        {
            tracing::warn!(
                existing_id = existing.id,
                name = %new_school.name,
                "duplicate school rejected"
            );
            return Err(ServiceError::Duplicate);
        }

        match self.storage.insert_school(&new_school).await {
            Ok(school) => {
                tracing::info!(id = school.id, name = %school.name, "school added");
                Ok(school)
            },
            Err(e) if e.is_duplicate() => {
                tracing::warn!(
                    name = %new_school.name,
                    "duplicate school rejected by store constraint"
                );
                Err(ServiceError::Duplicate)
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Scan every school and rank it by distance from the resolved reference point.
    pub async fn list_by_distance(
        &self,
        requested: Option<Coordinate>,
    ) -> Result<RankedList, ServiceError> {
        let schools = self.storage.scan_all().await?;
        let scanned = schools.len();
        let list = rank_schools(requested, schools);
        tracing::debug!(
            scanned,
            caller_point = requested.is_some(),
            base = ?list.base_coords,
            "ranked schools by distance"
        );
        Ok(list)
    }

    /// Round-trips to the store for readiness checks.
    pub async fn ready(&self) -> Result<(), ServiceError> {
        Ok(self.storage.ping().await?)
    }

    #[must_use]
    pub fn storage_kind(&self) -> &'static str {
        self.storage.kind()
    }
}
