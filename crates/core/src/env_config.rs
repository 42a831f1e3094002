//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    parse_with_default(var, std::env::var(var).ok(), default)
}

/// Parse a boolean flag such as `SCHOOL_LOCATOR_EXPOSE_STORE_ERRORS`.
///
/// Accepts `1/0`, `true/false`, `yes/no`, `on/off` (case-insensitive).
pub fn env_flag_with_default(var: &str, default: bool) -> bool {
    flag_with_default(var, std::env::var(var).ok(), default)
}

fn parse_with_default<T: FromStr + Display>(var: &str, raw: Option<String>, default: T) -> T {
    let Some(v) = raw else {
        return default;
    };
    match v.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(var, value = %v, default = %default, "invalid env var value, using default");
            default
        },
    }
}

fn flag_with_default(var: &str, raw: Option<String>, default: bool) -> bool {
    let Some(v) = raw else {
        return default;
    };
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(var, value = %v, default, "invalid env flag value, using default");
            default
        },
    }
}
