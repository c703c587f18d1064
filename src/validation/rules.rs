//! Shared predicate helpers for parameter rules.

use serde_json::Value;

/// Check if `value` is an integer within `[min, max]`.
///
/// A `None` max means unbounded above. Floats with a fractional part,
/// strings and all other shapes are not integers.
pub(crate) fn int_in_range(value: &Value, min: i64, max: Option<i64>) -> bool {
    match value.as_i64() {
        Some(n) => n >= min && max.map_or(true, |m| n <= m),
        None => false,
    }
}

/// Check if `key` names an integer index and `value` is a string
pub(crate) fn indexed_string_entry(key: &str, value: &Value) -> bool {
    key.parse::<u64>().is_ok() && value.is_string()
}

/// Check if `value` is a scalar filter operand (string, integer or float)
pub(crate) fn scalar_entry(value: &Value) -> bool {
    value.is_string() || value.is_number()
}

/// Check if `value` is one of the literal sort directions
pub(crate) fn direction_entry(value: &Value) -> bool {
    matches!(value.as_str(), Some("asc") | Some("desc"))
}
