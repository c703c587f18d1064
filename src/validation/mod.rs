//! Query parameter validation module
//!
//! This module contains the validation logic for Comic Vine query parameters:
//! the parameter kinds, the per-endpoint allow-list, and the validator that
//! gates parameters before they join an outbound request.

pub mod rules;
pub mod types;
pub mod validator;

pub use types::{AllowList, ParamKind};
pub use validator::QueryValidator;
