//! Typed error enum for the service layer.

use school_locator_core::ValidationErrors;
use school_locator_storage::StorageError;
use thiserror::Error;

/// Service-layer error: rejected input, duplicate school, or store failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A school with the same name and address (any case) already exists.
    #[error("School already exists")]
    Duplicate,

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether this error represents a duplicate school.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate)
    }
}
