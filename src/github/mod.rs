pub mod auth;
pub mod graphql;
pub mod models;
pub mod queries;
pub mod recent;
pub mod repo;
pub mod transport;

pub use graphql::GithubClient;
pub use models::Item;
pub use recent::{
    fetch_open_issues, fetch_open_issues_since, fetch_open_pull_requests,
    fetch_open_pull_requests_since,
};
pub use repo::RepoRef;
pub use transport::{GraphqlTransport, TransportError};
