//! SchoolStore implementation for PgStorage.

use async_trait::async_trait;
use school_locator_core::{NewSchool, School};

use super::{PgStorage, SCHOOL_COLUMNS};
use crate::error::StorageError;
use crate::traits::SchoolStore;

#[async_trait]
impl SchoolStore for PgStorage {
    async fn find_by_name_address_ci(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Option<School>, StorageError> {
        let school = sqlx::query_as::<_, School>(&format!(
            "SELECT {SCHOOL_COLUMNS} FROM schools
             WHERE LOWER(name) = LOWER($1) AND LOWER(address) = LOWER($2)
             LIMIT 1"
        ))
        .bind(name)
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;
        Ok(school)
    }

    async fn insert_school(&self, school: &NewSchool) -> Result<School, StorageError> {
        let row = sqlx::query_as::<_, School>(&format!(
            "INSERT INTO schools (name, address, latitude, longitude)
             VALUES ($1, $2, $3, $4)
             RETURNING {SCHOOL_COLUMNS}"
        ))
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn scan_all(&self) -> Result<Vec<School>, StorageError> {
        let rows =
            sqlx::query_as::<_, School>(&format!("SELECT {SCHOOL_COLUMNS} FROM schools ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
