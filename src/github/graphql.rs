use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use super::repo::DEFAULT_HOST;
use super::transport::{GraphqlTransport, TransportError};
use crate::util::config::GithubConfig;

/// reqwest-backed GraphQL transport for github.com and GitHub Enterprise
/// Server hosts.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: &str, api_url: &str, timeout: Duration) -> Result<Self> {
        if !api_url.starts_with("https://") {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }

        let client = Client::builder()
            .user_agent("ghfrecency")
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_config(token: &str, config: &GithubConfig) -> Result<Self> {
        Self::new(
            token,
            &config.api_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// GraphQL endpoint for `host`. github.com uses the configured URL,
    /// `*.ghe.com` (GHE.com data residency) serves from an `api.` subdomain,
    /// anything else is assumed to be an Enterprise Server instance.
    pub fn endpoint_for(&self, host: &str) -> String {
        let host = host.to_ascii_lowercase();
        if host == DEFAULT_HOST || host == "api.github.com" {
            self.api_url.clone()
        } else if host.ends_with(".ghe.com") {
            let tenant = host.strip_prefix("api.").unwrap_or(&host);
            format!("https://api.{tenant}/graphql")
        } else {
            format!("https://{host}/api/graphql")
        }
    }
}

impl GraphqlTransport for GithubClient {
    async fn graphql<R>(&self, host: &str, query: &str, variables: Value) -> Result<R, TransportError>
    where
        R: DeserializeOwned + Send,
    {
        let body = json!({
            "query": query,
            "variables": variables,
        });

        let endpoint = self.endpoint_for(host);
        let resp = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(status_error(status, text));
        }

        let body: Value = resp.json().await?;
        let data = decode_response(body)?;

        debug!(host = host, endpoint = %endpoint, "GraphQL request complete");
        Ok(data)
    }
}

pub fn status_error(status: StatusCode, body: String) -> TransportError {
    TransportError::Status { status, body }
}

/// Unwrap a GraphQL response envelope into `R`.
///
/// An `errors` member wins over any partial `data` that came with it.
pub fn decode_response<R: DeserializeOwned>(mut body: Value) -> Result<R, TransportError> {
    if let Some(errors) = body.get("errors") {
        let error_msg = errors
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown GraphQL error");
        return Err(TransportError::GraphQL(error_msg.to_string()));
    }

    let payload = match body.get_mut("data") {
        Some(payload) if !payload.is_null() => payload.take(),
        _ => return Err(TransportError::MissingData),
    };

    Ok(serde_json::from_value(payload)?)
}
