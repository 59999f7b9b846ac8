//! Integration tests for client configuration.
//!
//! Tests config loading from TOML files, saving and reloading, environment
//! token lookup, and sharing through `ConfigHandle`.

use ghr_core::config::{ClientConfig, ConfigHandle};
use ghr_core::GhrError;
use tempfile::TempDir;

// ---- File round trips ----

#[test]
fn save_then_load_preserves_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = ClientConfig::new("ghp_abc")
        .with_base_url("https://ghe.example.com/api/v3")
        .with_timeout_ms(12_000)
        .with_error_message("upstream unavailable")
        .with_request_logging(true);
    config.save_to_file(&path).unwrap();

    let loaded = ClientConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn load_sanitizes_base_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "token = \"t\"\nbase_url = \"ghe.example.com/\"\n").unwrap();

    let loaded = ClientConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.base_url, "https://ghe.example.com");
    assert_eq!(loaded.timeout_ms, 30_000);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ClientConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, GhrError::Io(_)));
}

#[test]
fn load_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "token = [unterminated").unwrap();

    let err = ClientConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, GhrError::Config(_)));
}

// ---- Environment ----

#[test]
fn from_env_reads_token() {
    std::env::set_var("GITHUB_TOKEN", "  ghp_from_env  ");
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.token, "ghp_from_env");
    std::env::remove_var("GITHUB_TOKEN");
}

// ---- Sharing ----

#[test]
fn handles_built_from_one_config_are_equal() {
    let handle: ConfigHandle = ClientConfig::new("tok").with_timeout_ms(500).into();
    let clones: Vec<ConfigHandle> = (0..4).map(|_| handle.clone()).collect();
    for c in &clones {
        assert_eq!(c, &handle);
        assert_eq!(c.timeout_ms, 500);
    }
}
