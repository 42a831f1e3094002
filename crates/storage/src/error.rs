//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (duplicate, database
//! failure, undecodable rows) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation on `(lower(name), lower(address))`.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be decoded into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// The underlying failure text without the variant prefix.
    ///
    /// For server-reported errors this is the database's own message.
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.message().to_owned(),
            Self::Database(err) => err.to_string(),
            Self::Duplicate(msg) | Self::Migration(msg) => msg.clone(),
            Self::DataCorruption { source, .. } => source.to_string(),
        }
    }
}

/// Custom `From<sqlx::Error>` rather than a blanket `#[from]`.
///
/// - SQLSTATE 23505 → `Duplicate`
/// - `ColumnDecode` → `DataCorruption`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::ColumnDecode { index, source } => {
                Self::DataCorruption { context: format!("decoding column {index}"), source }
            },
            other => Self::Database(other),
        }
    }
}
