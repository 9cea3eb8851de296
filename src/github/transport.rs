use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("GitHub API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("GraphQL error: {0}")]
    GraphQL(String),
    #[error("GitHub response contained no data")]
    MissingData,
    #[error("Failed to parse GitHub response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Executes a single GraphQL operation against a host.
///
/// The caller picks the response shape `R`; implementations deserialize the
/// `data` member of the response into it. Authentication, timeouts and any
/// retry policy belong to the implementation.
pub trait GraphqlTransport {
    fn graphql<R>(
        &self,
        host: &str,
        query: &str,
        variables: Value,
    ) -> impl Future<Output = Result<R, TransportError>> + Send
    where
        R: DeserializeOwned + Send;
}
