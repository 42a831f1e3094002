//! Request/query types

use school_locator_core::{parse_coordinate_component, Coordinate};

/// One query key as it appeared in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QueryValue {
    Single(String),
    /// The key was given more than once; never parses as a number.
    Repeated,
}

impl QueryValue {
    fn push(slot: &mut Option<Self>, value: String) {
        *slot = Some(if slot.is_some() { Self::Repeated } else { Self::Single(value) });
    }

    fn component(value: Option<&Self>) -> Option<f64> {
        match value {
            None => None,
            Some(Self::Single(raw)) => parse_coordinate_component(Some(raw.as_str())),
            Some(Self::Repeated) => None,
        }
    }
}

/// `GET /listSchools` query string.
///
/// Each component accepts several spellings; the first one present wins,
/// even if its value turns out to be unusable.
#[derive(Debug, Default)]
pub struct ListSchoolsQuery {
    lat: Option<QueryValue>,
    latitude: Option<QueryValue>,
    lng: Option<QueryValue>,
    longitude: Option<QueryValue>,
    lon: Option<QueryValue>,
}

impl ListSchoolsQuery {
    /// Builds the query from decoded `key=value` pairs. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut query.lat,
                "latitude" => &mut query.latitude,
                "lng" => &mut query.lng,
                "longitude" => &mut query.longitude,
                "lon" => &mut query.lon,
                _ => continue,
            };
            QueryValue::push(slot, value);
        }
        query
    }

    fn raw_lat(&self) -> Option<&QueryValue> {
        self.lat.as_ref().or(self.latitude.as_ref())
    }

    fn raw_lng(&self) -> Option<&QueryValue> {
        self.lng.as_ref().or(self.longitude.as_ref()).or(self.lon.as_ref())
    }

    /// The caller's reference point, if both components parse as finite numbers.
    pub fn reference_point(&self) -> Option<Coordinate> {
        Coordinate::from_parts(
            QueryValue::component(self.raw_lat()),
            QueryValue::component(self.raw_lng()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ListSchoolsQuery {
        ListSchoolsQuery::from_pairs(pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())))
    }

    #[test]
    fn short_names() {
        let q = query(&[("lat", "12.5"), ("lng", "77.1")]);
        assert_eq!(q.reference_point(), Some(Coordinate::new(12.5, 77.1)));
    }

    #[test]
    fn long_names_and_lon() {
        assert_eq!(
            query(&[("latitude", "1"), ("longitude", "2")]).reference_point(),
            Some(Coordinate::new(1.0, 2.0))
        );
        assert_eq!(
            query(&[("latitude", "1"), ("lon", "3")]).reference_point(),
            Some(Coordinate::new(1.0, 3.0))
        );
    }

    #[test]
    fn first_present_alias_wins_even_when_invalid() {
        let q = query(&[("lat", "abc"), ("latitude", "10"), ("lng", "5")]);
        assert_eq!(q.reference_point(), None);
    }

    #[test]
    fn lng_preferred_over_longitude_and_lon() {
        let q = query(&[("lat", "0"), ("lng", "1"), ("longitude", "2"), ("lon", "3")]);
        assert_eq!(q.reference_point(), Some(Coordinate::new(0.0, 1.0)));
    }

    #[test]
    fn one_component_missing_discards_both() {
        assert_eq!(query(&[("lat", "10")]).reference_point(), None);
        assert_eq!(query(&[]).reference_point(), None);
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let q = query(&[("lat", "120"), ("lng", "-500")]);
        assert_eq!(q.reference_point(), Some(Coordinate::new(120.0, -500.0)));
    }

    #[test]
    fn repeated_key_is_unusable_and_still_shadows_later_aliases() {
        assert_eq!(query(&[("lat", "1"), ("lat", "2"), ("lng", "3")]).reference_point(), None);
        let q = query(&[("lat", "1"), ("lat", "1"), ("latitude", "4"), ("lng", "3")]);
        assert_eq!(q.reference_point(), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let q = query(&[("page", "2"), ("lat", "3"), ("page", "4"), ("lon", "5")]);
        assert_eq!(q.reference_point(), Some(Coordinate::new(3.0, 5.0)));
    }
}
