use serde_json::Value;
use tracing::debug;

use super::rules;
use super::types::{AllowList, ParamKind};

/// Query validator for outbound Comic Vine requests.
///
/// Holds the immutable allow-list for one endpoint context and answers whether
/// a parameter is well formed and enabled. Malformed shapes, out-of-range
/// values, disallowed kinds and unknown parameter types all collapse to
/// `false`; there is no error path.
#[derive(Debug, Clone, Default)]
pub struct QueryValidator {
    allow_list: AllowList,
}

impl QueryValidator {
    /// Create a validator for the given allow-list
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    /// The allow-list this validator was built with
    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Check a query parameter before it is added to an outbound request
    pub fn validate(&self, param_type: &str, input: &Value) -> bool {
        match ParamKind::from_name(param_type) {
            Some(kind) => self.validate_kind(kind, input),
            None => {
                debug!(param_type = %param_type, "Rejecting unknown parameter type");
                false
            }
        }
    }

    /// Typed variant of [`QueryValidator::validate`]
    pub fn validate_kind(&self, kind: ParamKind, input: &Value) -> bool {
        match kind {
            ParamKind::FieldList => self.valid_field_list(input),
            ParamKind::Limit => self.valid_number(ParamKind::Limit, input, 0, Some(100)),
            ParamKind::Offset => self.valid_number(ParamKind::Offset, input, 0, None),
            ParamKind::Filter => self.valid_filter(input),
            ParamKind::Sort => self.valid_sort(input),
        }
    }

    /// Validate the FIELD_LIST parameter.
    ///
    /// A field list is a mapping from integer index to field name. JSON
    /// encodes that either as an array of strings or as an object whose keys
    /// are decimal indices. Field lists are permitted on every endpoint, so
    /// no allow-list check applies.
    fn valid_field_list(&self, input: &Value) -> bool {
        match input {
            Value::Array(fields) => fields.iter().all(Value::is_string),
            Value::Object(entries) => entries
                .iter()
                .all(|(key, value)| rules::indexed_string_entry(key, value)),
            _ => {
                debug!(kind = ParamKind::FieldList.as_str(), "Rejecting non-mapping input");
                false
            }
        }
    }

    /// Validate the LIMIT or OFFSET parameter against its integer range
    fn valid_number(&self, kind: ParamKind, input: &Value, min: i64, max: Option<i64>) -> bool {
        if !rules::int_in_range(input, min, max) {
            debug!(kind = kind.as_str(), input = %input, "Rejecting out-of-range or non-integer value");
            return false;
        }

        self.allow_list.is_enabled(kind)
    }

    /// Validate the FILTER parameter.
    ///
    /// Filters map field names to scalar operands (string, integer or float).
    fn valid_filter(&self, input: &Value) -> bool {
        let Value::Object(entries) = input else {
            debug!(kind = ParamKind::Filter.as_str(), "Rejecting non-mapping input");
            return false;
        };

        if !entries.values().all(rules::scalar_entry) {
            debug!(kind = ParamKind::Filter.as_str(), "Rejecting non-scalar filter operand");
            return false;
        }

        self.allow_list.is_enabled(ParamKind::Filter)
    }

    /// Validate the SORT parameter.
    ///
    /// Sort maps field names to a direction, restricted to `asc` and `desc`.
    fn valid_sort(&self, input: &Value) -> bool {
        let Value::Object(entries) = input else {
            debug!(kind = ParamKind::Sort.as_str(), "Rejecting non-mapping input");
            return false;
        };

        if !entries.values().all(rules::direction_entry) {
            debug!(kind = ParamKind::Sort.as_str(), "Rejecting invalid sort direction");
            return false;
        }

        self.allow_list.is_enabled(ParamKind::Sort)
    }
}
