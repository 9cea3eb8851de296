use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use ghfrecency::github::auth::env_vars_for;
use ghfrecency::github::graphql::{decode_response, status_error};
use ghfrecency::github::repo::DEFAULT_HOST;
use ghfrecency::github::{GithubClient, TransportError};
use ghfrecency::util::config::GithubConfig;

#[derive(Debug, Deserialize)]
struct Viewer {
    viewer: Login,
}

#[derive(Debug, Deserialize)]
struct Login {
    login: String,
}

#[test]
fn test_rejects_plain_http_api_url() {
    let result = GithubClient::new("token", "http://api.github.com/graphql", Duration::from_secs(5));
    assert!(result.is_err());
}

#[test]
fn test_github_com_uses_configured_endpoint() {
    let config = GithubConfig {
        api_url: "https://proxy.example.com/graphql".into(),
        ..GithubConfig::default()
    };
    let client = GithubClient::from_config("token", &config).unwrap();
    assert_eq!(
        client.endpoint_for("github.com"),
        "https://proxy.example.com/graphql"
    );
    assert_eq!(
        client.endpoint_for("GitHub.com"),
        "https://proxy.example.com/graphql"
    );
}

#[test]
fn test_enterprise_host_endpoint() {
    let client = GithubClient::from_config("token", &GithubConfig::default()).unwrap();
    assert_eq!(
        client.endpoint_for("ghe.example.com"),
        "https://ghe.example.com/api/graphql"
    );
}

#[test]
fn test_ghe_com_tenant_endpoint() {
    let client = GithubClient::from_config("token", &GithubConfig::default()).unwrap();
    assert_eq!(
        client.endpoint_for("acme.ghe.com"),
        "https://api.acme.ghe.com/graphql"
    );
    assert_eq!(
        client.endpoint_for("api.acme.ghe.com"),
        "https://api.acme.ghe.com/graphql"
    );
}

#[test]
fn test_default_host_matches_repo_default() {
    assert_eq!(GithubConfig::default().default_host, DEFAULT_HOST);
}

// --- Response envelope ---

#[test]
fn test_decode_response_data() {
    let body = json!({ "data": { "viewer": { "login": "octocat" } } });
    let viewer: Viewer = decode_response(body).unwrap();
    assert_eq!(viewer.viewer.login, "octocat");
}

#[test]
fn test_decode_response_errors_win_over_partial_data() {
    let body = json!({
        "errors": [
            { "message": "Could not resolve to a Repository" },
            { "message": "second error" },
        ],
        "data": { "repository": null },
    });
    let result = decode_response::<Viewer>(body);
    match result {
        Err(TransportError::GraphQL(message)) => {
            assert_eq!(message, "Could not resolve to a Repository")
        }
        other => panic!("expected GraphQL error, got {other:?}"),
    }
}

#[test]
fn test_decode_response_errors_without_message() {
    let body = json!({ "errors": [] });
    let result = decode_response::<Viewer>(body);
    assert!(matches!(result, Err(TransportError::GraphQL(m)) if m == "Unknown GraphQL error"));
}

#[test]
fn test_decode_response_null_data() {
    let result = decode_response::<Viewer>(json!({ "data": null }));
    assert!(matches!(result, Err(TransportError::MissingData)));
}

#[test]
fn test_decode_response_missing_data() {
    let result = decode_response::<Viewer>(json!({}));
    assert!(matches!(result, Err(TransportError::MissingData)));
}

#[test]
fn test_decode_response_shape_mismatch() {
    let body = json!({ "data": { "viewer": { "login": 42 } } });
    let result = decode_response::<Viewer>(body);
    assert!(matches!(result, Err(TransportError::Decode(_))));
}

#[test]
fn test_status_error() {
    let err = status_error(StatusCode::UNAUTHORIZED, "Bad credentials".into());
    assert!(matches!(
        err,
        TransportError::Status { status, ref body }
            if status == StatusCode::UNAUTHORIZED && body == "Bad credentials"
    ));
    assert_eq!(
        err.to_string(),
        "GitHub API returned 401 Unauthorized: Bad credentials"
    );
}

#[test]
fn test_token_env_vars_by_host() {
    assert_eq!(env_vars_for("github.com"), ["GH_TOKEN", "GITHUB_TOKEN"]);
    assert_eq!(
        env_vars_for("ghe.example.com"),
        ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
    );
}
