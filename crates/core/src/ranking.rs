//! Reference-point resolution and distance ordering for `/listSchools`.

use std::cmp::Ordering;

use crate::geo::{rounded_distance, Coordinate};
use crate::school::{RankedList, RankedSchool, School};

/// Parse one raw query value into a finite float.
///
/// Absent, empty, unparseable and non-finite inputs all yield `None`.
#[must_use]
pub fn parse_coordinate_component(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Pick the point distances are measured from.
///
/// 1. `requested`, when the caller supplied a usable pair.
/// 2. The first scanned school's coordinates.
/// 3. `(0, 0)` when that school's coordinates are unusable.
///
/// An empty scan resolves to `None` regardless of `requested`.
#[must_use]
pub fn resolve_reference_point(requested: Option<Coordinate>, schools: &[School]) -> Option<Coordinate> {
    let first = schools.first()?;
    Some(requested.unwrap_or_else(|| first.coordinate().unwrap_or(Coordinate::ORIGIN)))
}

/// Annotate each school with its rounded distance and sort ascending.
///
/// Schools without usable coordinates go last, in scan order.
#[must_use]
pub fn rank_by_distance(reference: Coordinate, schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance_km = school.coordinate().map(|c| rounded_distance(&reference, &c));
            RankedSchool { school, distance_km }
        })
        .collect();
    ranked.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
    ranked
}

/// Full listing policy over one store scan.
#[must_use]
pub fn rank_schools(requested: Option<Coordinate>, schools: Vec<School>) -> RankedList {
    match resolve_reference_point(requested, &schools) {
        Some(base) => RankedList { base_coords: Some(base), schools: rank_by_distance(base, schools) },
        None => RankedList { base_coords: None, schools: Vec::new() },
    }
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn school(id: i64, lat: Option<f64>, lng: Option<f64>) -> School {
        School {
            id,
            name: format!("School {id}"),
            address: format!("{id} Main St"),
            latitude: lat,
            longitude: lng,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn parse_component_accepts_plain_floats() {
        assert_eq!(parse_coordinate_component(Some("12.5")), Some(12.5));
        assert_eq!(parse_coordinate_component(Some(" -7 ")), Some(-7.0));
    }

    #[test]
    fn parse_component_rejects_garbage() {
        assert_eq!(parse_coordinate_component(None), None);
        assert_eq!(parse_coordinate_component(Some("")), None);
        assert_eq!(parse_coordinate_component(Some("abc")), None);
        assert_eq!(parse_coordinate_component(Some("NaN")), None);
        assert_eq!(parse_coordinate_component(Some("inf")), None);
    }

    #[test]
    fn requested_point_wins_even_out_of_range() {
        let schools = vec![school(1, Some(10.0), Some(10.0))];
        let requested = Coordinate::new(95.0, 200.0);
        assert_eq!(resolve_reference_point(Some(requested), &schools), Some(requested));
    }

    #[test]
    fn falls_back_to_first_scanned_school() {
        let schools = vec![school(1, Some(10.0), Some(10.0)), school(2, Some(0.0), Some(0.0))];
        assert_eq!(resolve_reference_point(None, &schools), Some(Coordinate::new(10.0, 10.0)));
    }

    #[test]
    fn falls_back_to_origin_when_first_school_unusable() {
        let schools = vec![school(1, Some(f64::NAN), Some(10.0)), school(2, Some(5.0), Some(5.0))];
        assert_eq!(resolve_reference_point(None, &schools), Some(Coordinate::ORIGIN));
    }

    #[test]
    fn empty_scan_has_no_reference_point() {
        assert_eq!(resolve_reference_point(Some(Coordinate::new(1.0, 1.0)), &[]), None);
        let list = rank_schools(None, Vec::new());
        assert_eq!(list.count(), 0);
        assert!(list.base_coords.is_none());
    }

    #[test]
    fn single_school_is_zero_from_itself() {
        let list = rank_schools(None, vec![school(1, Some(10.0), Some(10.0))]);
        assert_eq!(list.base_coords, Some(Coordinate::new(10.0, 10.0)));
        assert_eq!(list.schools[0].distance_km, Some(0.0));
    }

    #[test]
    fn sorts_ascending_by_distance() {
        let schools = vec![
            school(1, Some(20.0), Some(20.0)),
            school(2, Some(1.0), Some(1.0)),
            school(3, Some(10.0), Some(10.0)),
        ];
        let list = rank_schools(Some(Coordinate::ORIGIN), schools);
        let ids: Vec<i64> = list.schools.iter().map(|r| r.school.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        let d: Vec<f64> = list.schools.iter().filter_map(|r| r.distance_km).collect();
        assert!(d.windows(2).all(|w| w[0] <= w[1]), "not ascending: {d:?}");
    }

    #[test]
    fn unusable_coordinates_sort_last_with_null_distance() {
        let schools = vec![
            school(1, None, Some(0.0)),
            school(2, Some(50.0), Some(50.0)),
            school(3, Some(f64::INFINITY), Some(1.0)),
            school(4, Some(0.1), Some(0.1)),
        ];
        let list = rank_schools(Some(Coordinate::ORIGIN), schools);
        let ids: Vec<i64> = list.schools.iter().map(|r| r.school.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
        assert!(list.schools[2].distance_km.is_none());
        assert!(list.schools[3].distance_km.is_none());
    }

    #[test]
    fn distances_are_rounded_to_four_places() {
        let list = rank_schools(Some(Coordinate::ORIGIN), vec![school(1, Some(10.0), Some(10.0))]);
        let d = list.schools[0].distance_km.unwrap_or_default();
        let scaled = d * 10_000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "not rounded: {d}");
        assert!((d - 1568.5206).abs() < 1e-9, "got {d}");
    }
}
