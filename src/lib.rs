//! Comic Vine query parameter validation
//!
//! This library validates query parameters (field lists, limit/offset, filters,
//! sort directives) before they are sent to the Comic Vine API. A query builder
//! asks the validator whether a parameter is well formed and enabled for the
//! current endpoint, and drops parameters that fail.

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::EndpointConfig;
pub use error::{AppError, AppResult};
pub use validation::{AllowList, ParamKind, QueryValidator};

/// Application result type
pub type Result<T> = std::result::Result<T, error::AppError>;
