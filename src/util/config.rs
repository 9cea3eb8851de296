use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::github::repo::DEFAULT_HOST;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// GraphQL endpoint used for `github.com`. Other hosts are treated as
    /// GitHub Enterprise Server instances.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Host assumed for bare `OWNER/REPO` arguments.
    #[serde(default = "default_host")]
    pub default_host: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    "https://api.github.com/graphql".to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_log_filter() -> String {
    "ghfrecency=debug".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            default_host: default_host(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            dir: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/ghfrecency/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/ghfrecency/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        //    (macOS: ~/Library/Application Support/ghfrecency/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghfrecency") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.log.dir {
            return dir.clone();
        }
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghfrecency") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/ghfrecency/logs")
    }
}
