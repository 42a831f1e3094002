//! Core types and ranking logic for school-locator
//!
//! This crate contains domain types shared across all other crates, plus the
//! haversine distance and the reference-point / ordering policy used by the
//! listing endpoint.

mod constants;
mod env_config;
mod error;
mod geo;
mod ranking;
mod school;
mod validation;

pub use constants::*;
pub use env_config::{env_flag_with_default, env_parse_with_default};
pub use error::{FieldError, ValidationErrors};
pub use geo::{haversine_km, round_to_decimals, Coordinate};
pub use ranking::{
    parse_coordinate_component, rank_by_distance, rank_schools, resolve_reference_point,
};
pub use school::{NewSchool, RankedList, RankedSchool, School};
pub use validation::AddSchoolInput;
