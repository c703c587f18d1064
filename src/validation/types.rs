use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Query parameter kinds understood by the Comic Vine API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    FieldList,
    Limit,
    Offset,
    Filter,
    Sort,
}

impl ParamKind {
    /// Resolve a parameter kind from its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "field_list" => Some(ParamKind::FieldList),
            "limit" => Some(ParamKind::Limit),
            "offset" => Some(ParamKind::Offset),
            "filter" => Some(ParamKind::Filter),
            "sort" => Some(ParamKind::Sort),
            _ => None,
        }
    }

    /// Wire name of this parameter kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::FieldList => "field_list",
            ParamKind::Limit => "limit",
            ParamKind::Offset => "offset",
            ParamKind::Filter => "filter",
            ParamKind::Sort => "sort",
        }
    }
}

/// Set of parameter kinds enabled for one endpoint context.
///
/// Immutable after construction, so concurrent reads need no locking.
/// Field lists are always permitted and never consulted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    enabled: HashSet<ParamKind>,
}

impl AllowList {
    /// Create an allow-list from the given parameter kinds
    pub fn new(kinds: impl IntoIterator<Item = ParamKind>) -> Self {
        Self {
            enabled: kinds.into_iter().collect(),
        }
    }

    /// Create an allow-list with nothing enabled
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an allow-list from a name-to-flag mapping.
    ///
    /// Only `true` flags with known parameter names are kept.
    pub fn from_flags(flags: &HashMap<String, bool>) -> Self {
        Self {
            enabled: flags
                .iter()
                .filter(|(_, &on)| on)
                .filter_map(|(name, _)| ParamKind::from_name(name))
                .collect(),
        }
    }

    /// Check if a parameter kind is enabled
    pub fn is_enabled(&self, kind: ParamKind) -> bool {
        self.enabled.contains(&kind)
    }
}
