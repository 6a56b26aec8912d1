//! Tests for configuration loading and validation

use pr_policy::config::loader::validate_config;
use pr_policy::{ConfigLoader, PolicyConfig, PolicyError};
use std::env;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(".pr-policy.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn defaults_are_valid() {
    let config = PolicyConfig::default();
    validate_config(&config).unwrap();
    assert_eq!(config.description.min_length, 50);
    assert_eq!(config.base_branch.default_branch, "master");
    assert_eq!(config.manifest.watched_files, ["package.json"]);
}

#[test]
fn toml_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
[description]
min_length = 120

[base_branch]
default_branch = "main"

[changelog]
categories = ["WEB", "SERVER"]
"#,
    );

    let config = ConfigLoader::new()
        .with_env_prefix("PR_POLICY_TEST_UNUSED__")
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.description.min_length, 120);
    assert_eq!(config.description.summary_heading, "## summary");
    assert_eq!(config.base_branch.default_branch, "main");
    assert_eq!(config.base_branch.stable_marker, "-stable");
    assert_eq!(config.changelog.categories, ["WEB", "SERVER"]);
    assert_eq!(config.changelog.types.len(), 6);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .with_config_path(temp.path().join("absent.toml"))
        .load();
    assert!(matches!(result, Err(PolicyError::InvalidConfig(_))));
}

#[test]
fn malformed_toml_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[description\nmin_length = ");
    let result = ConfigLoader::new().with_config_path(&path).load();
    assert!(matches!(result, Err(PolicyError::Config(_))));
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().unwrap();
    for content in [
        "[description]\nmin_length = 0",
        "[base_branch]\ndefault_branch = \"\"",
        "[logging]\nlevel = \"loud\"",
        "[github]\ntimeout_secs = 0",
    ] {
        let path = write_config(&temp, content);
        let result = ConfigLoader::new().with_config_path(&path).load();
        assert!(
            matches!(result, Err(PolicyError::InvalidConfig(_))),
            "{content} should be rejected"
        );
    }
}

#[test]
fn effective_config_round_trips_through_toml() {
    let mut config = PolicyConfig::default();
    config.test_plan.enabled = false;
    let rendered = ConfigLoader::to_toml(&config).unwrap();
    assert!(rendered.contains("[test_plan]"));

    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, &rendered);
    let loaded = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(loaded, config);
}

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

/// Run with: `cargo test -p pr-policy --test unit config -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn env_vars_override_file_values() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[description]\nmin_length = 120");
    set_env("PR_POLICY__DESCRIPTION__MIN_LENGTH", "10");
    set_env("PR_POLICY__BASE_BRANCH__STABLE_MARKER", "-release");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("PR_POLICY__DESCRIPTION__MIN_LENGTH");
    remove_env("PR_POLICY__BASE_BRANCH__STABLE_MARKER");

    let config = config.unwrap();
    assert_eq!(config.description.min_length, 10);
    assert_eq!(config.base_branch.stable_marker, "-release");
}
