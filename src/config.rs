use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AppError;
use crate::validation::{AllowList, ParamKind, QueryValidator};

/// Per-endpoint query parameter configuration.
///
/// Maps a Comic Vine endpoint name to the parameter kinds enabled for it.
/// Field lists are always permitted and never appear in the allow-list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Enabled parameter kinds per endpoint
    pub endpoints: HashMap<String, Vec<ParamKind>>,
}

const LIST_ENDPOINTS: &[&str] = &["characters", "issues", "volumes", "publishers", "movies"];
const DETAIL_ENDPOINTS: &[&str] = &["character", "issue", "volume", "publisher", "movie"];

impl Default for EndpointConfig {
    fn default() -> Self {
        let mut endpoints = HashMap::new();

        // List endpoints support paging, filtering and sorting.
        for endpoint in LIST_ENDPOINTS {
            endpoints.insert(
                (*endpoint).to_string(),
                vec![
                    ParamKind::Limit,
                    ParamKind::Offset,
                    ParamKind::Filter,
                    ParamKind::Sort,
                ],
            );
        }

        // Detail endpoints accept a field list only.
        for endpoint in DETAIL_ENDPOINTS {
            endpoints.insert((*endpoint).to_string(), vec![]);
        }

        Self { endpoints }
    }
}

impl EndpointConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Endpoints").required(false))
            .add_source(config::Environment::with_prefix("COMICVINE").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: EndpointConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        Ok(config)
    }

    /// Allow-list for the given endpoint, if registered
    pub fn allow_list_for(&self, endpoint: &str) -> Option<AllowList> {
        self.endpoints
            .get(endpoint)
            .map(|kinds| AllowList::new(kinds.iter().copied()))
    }

    /// Build a validator for the given endpoint
    pub fn validator_for(&self, endpoint: &str) -> crate::Result<QueryValidator> {
        self.allow_list_for(endpoint)
            .map(QueryValidator::new)
            .ok_or_else(|| AppError::UnknownEndpoint {
                endpoint: endpoint.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_list_endpoints_enable_paging() {
        let config = EndpointConfig::default();
        let allow_list = config.allow_list_for("characters").unwrap();
        assert!(allow_list.is_enabled(ParamKind::Limit));
        assert!(allow_list.is_enabled(ParamKind::Offset));
        assert!(allow_list.is_enabled(ParamKind::Filter));
        assert!(allow_list.is_enabled(ParamKind::Sort));
    }

    #[test]
    fn default_detail_endpoints_enable_nothing() {
        let config = EndpointConfig::default();
        let allow_list = config.allow_list_for("character").unwrap();
        assert!(!allow_list.is_enabled(ParamKind::Limit));
        assert!(!allow_list.is_enabled(ParamKind::Filter));
    }

    #[test]
    fn unknown_endpoint_has_no_allow_list() {
        let config = EndpointConfig::default();
        assert!(config.allow_list_for("heroes").is_none());
    }

    #[test]
    fn validator_for_unknown_endpoint_err() {
        let config = EndpointConfig::default();
        let err = config.validator_for("heroes").unwrap_err();
        assert!(matches!(err, AppError::UnknownEndpoint { endpoint } if endpoint == "heroes"));
    }

    #[test]
    fn validator_for_detail_endpoint_allows_field_list_only() {
        let config = EndpointConfig::default();
        let validator = config.validator_for("issue").unwrap();
        assert!(validator.validate("field_list", &json!(["name"])));
        assert!(!validator.validate("limit", &json!(50)));
        assert!(!validator.validate("sort", &json!({"name": "asc"})));
    }

    #[test]
    fn config_deserializes_from_toml() {
        let config: EndpointConfig = toml::from_str(
            r#"
            [endpoints]
            characters = ["limit", "offset"]
            character = []
            "#,
        )
        .unwrap();
        let allow_list = config.allow_list_for("characters").unwrap();
        assert!(allow_list.is_enabled(ParamKind::Limit));
        assert!(!allow_list.is_enabled(ParamKind::Filter));
    }

    #[test]
    fn config_rejects_unknown_param_kind() {
        let result: Result<EndpointConfig, _> = toml::from_str(
            r#"
            [endpoints]
            characters = ["pagination"]
            "#,
        );
        assert!(result.is_err());
    }
}
