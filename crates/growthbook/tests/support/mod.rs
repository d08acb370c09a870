//! Shared test utilities for growthbook CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Write a `config.toml` with the given body into `dir`
pub fn write_config(dir: &Path, body: &str) {
    fs::write(dir.join("config.toml"), body).unwrap();
}

/// A `growthbook` command isolated from the caller's environment
///
/// Logging is pinned to `info` so assertions on stderr messages are stable,
/// and the config directory comes from the test instead of the real home.
pub fn growthbook_cmd(config_dir: &Path, working_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("growthbook").unwrap();
    cmd.current_dir(working_dir)
        .env_remove("RUST_LOG")
        .env_remove("GROWTHBOOK_LOG")
        .env_remove("GROWTHBOOK_LOG_FORMAT")
        .env_remove("GROWTHBOOK_CUSTOM_CA_BUNDLE")
        .env("NO_COLOR", "1")
        .env("GROWTHBOOK_CONFIG_DIR", config_dir);
    cmd
}

/// Build a features page body the way the API returns it
pub fn features_page(features: Value, offset: u64, next_offset: Option<u64>) -> Value {
    let count = features.as_array().map(|a| a.len()).unwrap_or(0);
    json!({
        "features": features,
        "limit": 100,
        "offset": offset,
        "count": count,
        "total": count,
        "hasMore": next_offset.is_some(),
        "nextOffset": next_offset,
    })
}
