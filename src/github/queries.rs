pub const OPEN_PRS_QUERY: &str = r#"
query GetPRs($owner: String!, $repo: String!) {
  repository(owner: $owner, name: $repo) {
    pullRequests(first: 100, states: [OPEN], orderBy: {field: CREATED_AT, direction: DESC}) {
      nodes {
        number
        title
      }
    }
  }
}
"#;

// `pullRequests` has no date filter, so recent PRs go through search.
pub const OPEN_PRS_SINCE_QUERY: &str = r#"
query GetPRsSince($query: String!) {
  search(query: $query, type: ISSUE, first: 100) {
    nodes {
      ... on PullRequest {
        title
        number
      }
    }
  }
}
"#;

pub const OPEN_ISSUES_SINCE_QUERY: &str = r#"
query GetIssuesSince($owner: String!, $repo: String!, $since: DateTime!, $limit: Int!) {
  repository(owner: $owner, name: $repo) {
    issues(first: $limit, orderBy: {field: CREATED_AT, direction: DESC}, filterBy: {since: $since, states: [OPEN]}) {
      nodes {
        number
        title
      }
    }
  }
}
"#;

pub const OPEN_ISSUES_QUERY: &str = r#"
query GetIssues($owner: String!, $repo: String!) {
  repository(owner: $owner, name: $repo) {
    issues(first: 100, orderBy: {field: CREATED_AT, direction: DESC}, filterBy: {states: [OPEN]}) {
      nodes {
        number
        title
      }
    }
  }
}
"#;
