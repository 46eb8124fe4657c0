//! Error taxonomy for the feed export run.
//!
//! Nothing here is retried or recovered locally: every variant aborts the
//! run and surfaces to the operator with a single-line summary.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// A required setting was missing before any network call was issued.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The Storefront endpoint answered with a non-success HTTP status.
    #[error("storefront request failed with status {status}")]
    Transport { status: StatusCode },

    /// HTTP succeeded but the body carried a GraphQL `errors` array. The
    /// message aggregates every individual error reported upstream.
    #[error("storefront GraphQL error: {0}")]
    Api(String),

    /// The response parsed as JSON but a top-level field we rely on was
    /// absent. The raw body is logged before this is returned.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
