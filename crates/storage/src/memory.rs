//! In-process storage backend.
//!
//! Holds rows in a `Vec` behind a tokio `RwLock`. The duplicate check and the
//! push happen under one write guard, so uniqueness holds under concurrency.

use async_trait::async_trait;
use chrono::Utc;
use school_locator_core::{NewSchool, School};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::SchoolStore;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    rows: RwLock<Vec<School>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed rows verbatim, including coordinates the API would reject.
    ///
    /// Ids are taken as given; later inserts continue after the largest one.
    #[must_use]
    pub fn with_rows(rows: Vec<School>) -> Self {
        Self { rows: RwLock::new(rows) }
    }
}

fn matches_ci(school: &School, name: &str, address: &str) -> bool {
    school.name.to_lowercase() == name.to_lowercase()
        && school.address.to_lowercase() == address.to_lowercase()
}

#[async_trait]
impl SchoolStore for MemoryStorage {
    async fn find_by_name_address_ci(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Option<School>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|s| matches_ci(s, name, address)).cloned())
    }

    async fn insert_school(&self, school: &NewSchool) -> Result<School, StorageError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|s| matches_ci(s, &school.name, &school.address)) {
            return Err(StorageError::Duplicate(format!(
                "school with name '{}' and address '{}' already exists",
                school.name, school.address
            )));
        }
        let id = rows.iter().map(|s| s.id).max().unwrap_or(0).saturating_add(1);
        let row = School {
            id,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: Some(school.latitude),
            longitude: Some(school.longitude),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn scan_all(&self) -> Result<Vec<School>, StorageError> {
        Ok(self.rows.read().await.clone())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_school(name: &str, address: &str) -> NewSchool {
        NewSchool { name: name.to_owned(), address: address.to_owned(), latitude: 1.0, longitude: 2.0 }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryStorage::new();
        let a = store.insert_school(&new_school("A", "x")).await.unwrap();
        let b = store.insert_school(&new_school("B", "y")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.latitude, Some(1.0));
    }

    #[tokio::test]
    async fn find_ignores_case() {
        let store = MemoryStorage::new();
        store.insert_school(&new_school("St. Mary's", "1 High St")).await.unwrap();
        let found = store.find_by_name_address_ci("ST. MARY'S", "1 high st").await.unwrap();
        assert!(found.is_some());
        let missing = store.find_by_name_address_ci("St. Mary's", "2 High St").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn insert_rejects_case_insensitive_duplicate() {
        let store = MemoryStorage::new();
        store.insert_school(&new_school("Oak", "Elm Rd")).await.unwrap();
        let err = store.insert_school(&new_school("OAK", "elm rd")).await.unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.scan_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn scan_preserves_insertion_order() {
        let store = MemoryStorage::new();
        for name in ["c", "a", "b"] {
            store.insert_school(&new_school(name, "addr")).await.unwrap();
        }
        let names: Vec<String> = store.scan_all().await.unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn seeded_rows_keep_ids_and_next_id_follows() {
        let seeded = School {
            id: 41,
            name: "Seed".to_owned(),
            address: "Nowhere".to_owned(),
            latitude: Some(f64::NAN),
            longitude: None,
            created_at: Utc::now(),
        };
        let store = MemoryStorage::with_rows(vec![seeded]);
        let next = store.insert_school(&new_school("Next", "Somewhere")).await.unwrap();
        assert_eq!(next.id, 42);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_inserts_yield_one_row() {
        let store = Arc::new(MemoryStorage::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.insert_school(&new_school("Race", "Track")).await })
            })
            .collect();
        let mut ok = 0;
        for h in handles {
            if h.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.scan_all().await.unwrap().len(), 1);
    }
}
