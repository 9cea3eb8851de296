use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use ghfrecency::util::config::AppConfig;

#[test]
fn test_load_full_config() {
    let toml = r#"
[github]
api_url = "https://github.example.com/api/graphql"
default_host = "ghe.example.com"
timeout_secs = 5

[log]
filter = "ghfrecency=trace"
dir = "/tmp/ghfrecency-logs"
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(
        config.github.api_url,
        "https://github.example.com/api/graphql"
    );
    assert_eq!(config.github.default_host, "ghe.example.com");
    assert_eq!(config.github.timeout_secs, 5);
    assert_eq!(config.log.filter, "ghfrecency=trace");
    assert_eq!(config.log_dir(), PathBuf::from("/tmp/ghfrecency-logs"));
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let toml = r#"
[github]
default_host = "ghe.example.com"
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.default_host, "ghe.example.com");
    assert_eq!(config.github.api_url, "https://api.github.com/graphql");
    assert_eq!(config.github.timeout_secs, 30);
    assert_eq!(config.log.filter, "ghfrecency=debug");
    assert!(config.log.dir.is_none());
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"").unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.default_host, "github.com");
    assert_eq!(config.github.timeout_secs, 30);
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"this is not [valid toml {{").unwrap();

    let result = AppConfig::load(Some(f.path()));
    assert!(result.is_err());
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.github.api_url, "https://api.github.com/graphql");
    assert_eq!(config.github.default_host, "github.com");
    assert_eq!(config.github.timeout_secs, 30);
    assert_eq!(config.log.filter, "ghfrecency=debug");
    assert!(config.log.dir.is_none());
}
