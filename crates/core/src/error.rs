use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A single rejected request field.
///
/// Serializes as `{"type":"field","value":…,"msg":…,"path":…,"location":"body"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: &'static str,
    pub location: &'static str,
}

impl FieldError {
    pub fn body(path: &'static str, value: Option<Value>, msg: impl Into<String>) -> Self {
        Self { kind: "field", value, msg: msg.into(), path, location: "body" }
    }
}

/// All field errors found while validating one request.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed: {}", join_paths(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn paths(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.path).collect()
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

fn join_paths(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.path).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_failing_paths() {
        let err = ValidationErrors {
            errors: vec![
                FieldError::body("name", None, "name is required"),
                FieldError::body("latitude", None, "latitude is required"),
            ],
        };
        assert_eq!(err.to_string(), "validation failed: name, latitude");
        assert!(err.has_path("latitude"));
        assert!(!err.has_path("address"));
    }
}
