//! Response types (Serialize)

use school_locator_core::{Coordinate, RankedList, RankedSchool};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddSchoolResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ListSchoolsResponse {
    pub success: bool,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_coords: Option<Coordinate>,
    pub data: Vec<RankedSchool>,
}

impl From<RankedList> for ListSchoolsResponse {
    fn from(list: RankedList) -> Self {
        Self { success: true, count: list.count(), base_coords: list.base_coords, data: list.schools }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub storage: &'static str,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
