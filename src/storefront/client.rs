//! HTTP transport for the Storefront GraphQL endpoint.

use reqwest::header;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::environment::Config;
use crate::error::{FeedError, Result};
use crate::TARGET_WEB_REQUEST;

const TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

pub struct StorefrontClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .gzip(true)
            .redirect(reqwest::redirect::Policy::default())
            .build()?;

        Ok(StorefrontClient {
            http,
            endpoint: config.endpoint(),
            access_token: config.access_token.clone(),
        })
    }

    /// Execute one GraphQL query and return the `data` object.
    ///
    /// A non-success HTTP status, a GraphQL-level `errors` array, or a body
    /// without `data` each abort the run; nothing is retried.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        debug!(target: TARGET_WEB_REQUEST, "POST {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header(TOKEN_HEADER, &self.access_token)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(target: TARGET_WEB_REQUEST, "Storefront returned status {}", status);
            return Err(FeedError::Transport { status });
        }

        let body: Value = response.json().await?;
        if let Some(message) = aggregate_graphql_errors(&body) {
            error!(target: TARGET_WEB_REQUEST, "Storefront reported GraphQL errors: {}", message);
            return Err(FeedError::Api(message));
        }

        match body.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => {
                error!(target: TARGET_WEB_REQUEST, "Response had no data object: {}", body);
                Err(FeedError::UnexpectedShape(
                    "response body has no `data` object".to_string(),
                ))
            }
        }
    }
}

/// Join every `errors[].message` into one diagnostic string, or None when
/// the response carries no errors.
fn aggregate_graphql_errors(body: &Value) -> Option<String> {
    let errors = body.get("errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }

    let messages: Vec<&str> = errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown GraphQL error")
        })
        .collect();

    Some(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_aggregation_includes_every_message() {
        let body = json!({
            "errors": [
                { "message": "Field 'foo' doesn't exist" },
                { "message": "Throttled" },
            ]
        });
        let message = aggregate_graphql_errors(&body).unwrap();
        assert!(message.contains("Field 'foo' doesn't exist"));
        assert!(message.contains("Throttled"));
    }

    #[test]
    fn test_empty_error_array_is_not_an_error() {
        assert!(aggregate_graphql_errors(&json!({ "errors": [] })).is_none());
        assert!(aggregate_graphql_errors(&json!({ "data": {} })).is_none());
    }

    #[test]
    fn test_error_without_message_still_counts() {
        let body = json!({ "errors": [ { "locations": [] } ] });
        assert_eq!(
            aggregate_graphql_errors(&body).unwrap(),
            "unknown GraphQL error"
        );
    }
}
