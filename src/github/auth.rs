use anyhow::{Result, bail};
use std::process::Command;
use tracing::debug;

use super::repo::DEFAULT_HOST;

/// Resolve a token for `host` using multiple strategies:
/// 1. `gh auth token --hostname <host>` subprocess
/// 2. `GH_TOKEN` / `GITHUB_TOKEN` for github.com
/// 3. `GH_ENTERPRISE_TOKEN` / `GITHUB_ENTERPRISE_TOKEN` for any other host
pub fn resolve_token(host: &str) -> Result<String> {
    debug!(host = host, "Attempting to resolve token via `gh auth token`");
    if let Ok(output) = Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
        && output.status.success()
    {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            debug!(host = host, "Token resolved via gh CLI");
            return Ok(token);
        }
    }

    for var in env_vars_for(host) {
        if let Ok(token) = std::env::var(var)
            && !token.is_empty()
        {
            debug!(host = host, var = var, "Token resolved via env var");
            return Ok(token);
        }
    }

    let [first, second] = env_vars_for(host);
    bail!(
        "Could not resolve a token for {host}. Please either:\n\
         - Run `gh auth login --hostname {host}` to authenticate with the GitHub CLI\n\
         - Set the {first} environment variable\n\
         - Set the {second} environment variable"
    )
}

/// Environment variables consulted for `host`, in priority order.
pub fn env_vars_for(host: &str) -> [&'static str; 2] {
    if host.eq_ignore_ascii_case(DEFAULT_HOST) {
        ["GH_TOKEN", "GITHUB_TOKEN"]
    } else {
        ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
    }
}
