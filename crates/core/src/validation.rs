//! Field-level validation for `POST /addSchool` bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::constants::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::error::{FieldError, ValidationErrors};
use crate::school::NewSchool;

/// Raw, untyped request body.
///
/// Every field is kept as a JSON value so that a wrong type becomes a field
/// error instead of a body-level deserialization failure. Only a JSON object
/// is accepted as a body; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AddSchoolInput {
    pub name: Option<Value>,
    pub address: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

impl From<Map<String, Value>> for AddSchoolInput {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            name: body.remove("name"),
            address: body.remove("address"),
            latitude: body.remove("latitude"),
            longitude: body.remove("longitude"),
        }
    }
}

impl AddSchoolInput {
    /// Checks every field and returns all failures at once.
    pub fn validate(self) -> Result<NewSchool, ValidationErrors> {
        let mut errors = Vec::new();

        let name = required_text("name", self.name, &mut errors);
        let address = required_text("address", self.address, &mut errors);
        let latitude =
            bounded_float("latitude", self.latitude, LATITUDE_MIN, LATITUDE_MAX, &mut errors);
        let longitude =
            bounded_float("longitude", self.longitude, LONGITUDE_MIN, LONGITUDE_MAX, &mut errors);

        match (name, address, latitude, longitude) {
            (Some(name), Some(address), Some(latitude), Some(longitude)) if errors.is_empty() => {
                Ok(NewSchool { name, address, latitude, longitude })
            },
            _ => Err(ValidationErrors { errors }),
        }
    }
}

fn required_text(
    path: &'static str,
    value: Option<Value>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::String(s)) => {
            let msg = format!("{path} must not be empty");
            errors.push(FieldError::body(path, Some(Value::String(s)), msg));
            None
        },
        Some(Value::Null) | None => {
            errors.push(FieldError::body(path, None, format!("{path} is required")));
            None
        },
        Some(other) => {
            errors.push(FieldError::body(path, Some(other), format!("{path} must be a string")));
            None
        },
    }
}

fn bounded_float(
    path: &'static str,
    value: Option<Value>,
    min: f64,
    max: f64,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let parsed = match &value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() && (min..=max).contains(&v) => Some(v),
        _ => {
            let value = value.filter(|v| !v.is_null());
            let msg = format!("{path} must be a number between {min} and {max}");
            errors.push(FieldError::body(path, value, msg));
            None
        },
    }
}
