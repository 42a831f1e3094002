use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A persisted school row.
///
/// `latitude`/`longitude` are nullable in the store. A `None` or non-finite
/// value makes the row unrankable (`distance_km = null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl School {
    /// The stored position, if both components are finite.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.latitude, self.longitude)
    }
}

/// A validated school awaiting insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A school annotated with its distance from the request's reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: School,
    pub distance_km: Option<f64>,
}

/// Result of ranking a full store scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedList {
    /// `None` only when the store was empty.
    pub base_coords: Option<Coordinate>,
    pub schools: Vec<RankedSchool>,
}

impl RankedList {
    #[must_use]
    pub fn count(&self) -> usize {
        self.schools.len()
    }
}
