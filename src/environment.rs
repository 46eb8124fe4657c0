//! Environment-variable configuration.

use std::env;

use crate::error::{FeedError, Result};

pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Base URL of the public storefront, used when constructing item links for
/// records that carry no explicit URL field.
pub const SITE_BASE_URL: &str = "https://latitudes.online";

/// Settings required to talk to the Storefront API. Both values are read
/// from the environment and validated before any request goes out.
#[derive(Clone, Debug)]
pub struct Config {
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_domain = require_var("SHOPIFY_STORE_DOMAIN")?;
        let access_token = require_var("STOREFRONT_ACCESS_TOKEN")?;
        let api_version =
            env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Ok(Config {
            store_domain,
            access_token,
            api_version,
        })
    }

    /// Full GraphQL endpoint URL for this store and API version.
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.store_domain, self.api_version
        )
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FeedError::Configuration(format!(
            "{} environment variable is required",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let config = Config {
            store_domain: "example.myshopify.com".to_string(),
            access_token: "token".to_string(),
            api_version: "2024-01".to_string(),
        };
        assert_eq!(
            config.endpoint(),
            "https://example.myshopify.com/api/2024-01/graphql.json"
        );
    }

    #[test]
    fn test_missing_variable_is_a_configuration_error() {
        let err = require_var("DOOFEED_TEST_UNSET_VARIABLE").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("DOOFEED_TEST_UNSET_VARIABLE"));
        assert!(message.contains("required"));
    }
}
