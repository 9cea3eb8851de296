//! Recently created open pull requests and issues for a repository.
//!
//! Each function issues exactly one GraphQL request through the supplied
//! transport and returns the first page (100) of results. Transport errors are
//! handed back untouched.

use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::models::Item;
use super::queries;
use super::repo::RepoRef;
use super::transport::{GraphqlTransport, TransportError};
use crate::util::time::format_since;

pub const PAGE_SIZE: u32 = 100;

#[derive(Deserialize)]
struct Nodes<T> {
    nodes: Vec<T>,
}

/// Open pull requests, newest first.
pub async fn fetch_open_pull_requests<C: GraphqlTransport>(
    client: &C,
    repo: &RepoRef,
) -> Result<Vec<Item>, TransportError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Repository {
        pull_requests: Nodes<Item>,
    }
    #[derive(Deserialize)]
    struct Response {
        repository: Repository,
    }

    let variables = json!({
        "owner": repo.owner(),
        "repo": repo.name(),
    });

    let resp: Response = client
        .graphql(repo.host(), queries::OPEN_PRS_QUERY, variables)
        .await?;
    let items = resp.repository.pull_requests.nodes;

    debug!(repo = %repo, count = items.len(), "Fetched open pull requests");
    Ok(items)
}

/// Build the search expression for open pull requests created after `since`.
pub fn pull_requests_since_search<Tz: TimeZone>(repo: &RepoRef, since: &DateTime<Tz>) -> String {
    format!(
        "repo:{} is:pr is:open created:>{}",
        repo.full_name(),
        format_since(since)
    )
}

/// Open pull requests created after `since`.
///
/// Search results keep the order the server returns them in; unlike
/// [`fetch_open_pull_requests`] that is not guaranteed to be newest first.
pub async fn fetch_open_pull_requests_since<C: GraphqlTransport, Tz: TimeZone>(
    client: &C,
    repo: &RepoRef,
    since: &DateTime<Tz>,
) -> Result<Vec<Item>, TransportError> {
    // Nodes outside the `... on PullRequest` fragment arrive as `{}`.
    #[derive(Deserialize)]
    struct SearchNode {
        number: Option<u32>,
        title: Option<String>,
    }
    #[derive(Deserialize)]
    struct Response {
        search: Nodes<SearchNode>,
    }

    let search = pull_requests_since_search(repo, since);
    let variables = json!({ "query": search });

    let resp: Response = client
        .graphql(repo.host(), queries::OPEN_PRS_SINCE_QUERY, variables)
        .await?;
    let items: Vec<Item> = resp
        .search
        .nodes
        .into_iter()
        .filter_map(|node| {
            node.number.map(|number| Item {
                number,
                title: node.title.unwrap_or_default(),
            })
        })
        .collect();

    debug!(
        repo = %repo,
        query = %search,
        count = items.len(),
        "Fetched open pull requests since"
    );
    Ok(items)
}

/// Open issues created at or after `since`, newest first.
pub async fn fetch_open_issues_since<C: GraphqlTransport, Tz: TimeZone>(
    client: &C,
    repo: &RepoRef,
    since: &DateTime<Tz>,
) -> Result<Vec<Item>, TransportError> {
    #[derive(Deserialize)]
    struct Repository {
        issues: Nodes<Item>,
    }
    #[derive(Deserialize)]
    struct Response {
        repository: Repository,
    }

    let since = format_since(since);
    let variables = json!({
        "owner": repo.owner(),
        "repo": repo.name(),
        "since": since,
        "limit": PAGE_SIZE,
    });

    let resp: Response = client
        .graphql(repo.host(), queries::OPEN_ISSUES_SINCE_QUERY, variables)
        .await?;
    let items = resp.repository.issues.nodes;

    debug!(repo = %repo, since = %since, count = items.len(), "Fetched open issues since");
    Ok(items)
}

/// Open issues, newest first.
pub async fn fetch_open_issues<C: GraphqlTransport>(
    client: &C,
    repo: &RepoRef,
) -> Result<Vec<Item>, TransportError> {
    #[derive(Deserialize)]
    struct Repository {
        issues: Nodes<Item>,
    }
    #[derive(Deserialize)]
    struct Response {
        repository: Repository,
    }

    let variables = json!({
        "owner": repo.owner(),
        "repo": repo.name(),
    });

    let resp: Response = client
        .graphql(repo.host(), queries::OPEN_ISSUES_QUERY, variables)
        .await?;
    let items = resp.repository.issues.nodes;

    debug!(repo = %repo, count = items.len(), "Fetched open issues");
    Ok(items)
}
