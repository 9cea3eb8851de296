use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "github.com";

/// Identity of a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    name: String,
    host: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoParseError {
    #[error("expected [HOST/]OWNER/REPO, got {0:?}")]
    Format(String),
    #[error("empty {segment} in repository reference {input:?}")]
    EmptySegment { segment: &'static str, input: String },
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            host: host.into().to_ascii_lowercase(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Parse a repository reference, using `default_host` when the input does
    /// not name one.
    ///
    /// Accepts `OWNER/REPO`, `HOST/OWNER/REPO`, `https://HOST/OWNER/REPO` and
    /// `git@HOST:OWNER/REPO`, with an optional trailing `.git` or `/`.
    pub fn with_default_host(input: &str, default_host: &str) -> Result<Self, RepoParseError> {
        let trimmed = input.trim();
        let rest = if let Some(ssh) = trimmed.strip_prefix("git@") {
            ssh.replacen(':', "/", 1)
        } else {
            trimmed
                .strip_prefix("https://")
                .or_else(|| trimmed.strip_prefix("http://"))
                .unwrap_or(trimmed)
                .to_string()
        };
        let rest = rest.trim_end_matches('/');
        let rest = rest.strip_suffix(".git").unwrap_or(rest);

        let parts: Vec<&str> = rest.split('/').collect();
        let (host, owner, name) = match parts.as_slice() {
            [owner, name] => (default_host, *owner, *name),
            [host, owner, name] => (*host, *owner, *name),
            _ => return Err(RepoParseError::Format(input.to_string())),
        };

        for (segment, value) in [("host", host), ("owner", owner), ("name", name)] {
            if value.is_empty() {
                return Err(RepoParseError::EmptySegment {
                    segment,
                    input: input.to_string(),
                });
            }
        }

        Ok(Self::new(owner, name, host))
    }
}

impl FromStr for RepoRef {
    type Err = RepoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::with_default_host(s, DEFAULT_HOST)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host == DEFAULT_HOST {
            write!(f, "{}/{}", self.owner, self.name)
        } else {
            write!(f, "{}/{}/{}", self.host, self.owner, self.name)
        }
    }
}
