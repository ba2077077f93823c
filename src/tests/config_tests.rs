//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, HuliConfig, Validate};
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = HuliConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = HuliConfig::default();

    // Invalid index configuration
    config.index.wildcard = 'a';
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.index.wildcard = '?';
    config.index.max_near_distance = 0;
    assert!(config.validate().is_err());

    // Fix and test an invalid log level
    config.index.max_near_distance = 2;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    // Clean environment variables that might affect this test
    std::env::remove_var("TEST_FILE__INDEX__STEM");
    std::env::remove_var("TEST_FILE__LOG__LEVEL");

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [index]
    wildcard = "?"
    stem = true

    [log]
    level = "debug"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    // Verify values were loaded correctly
    assert_eq!(config.index.wildcard, '?');
    assert!(config.index.stem);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(config.index.min_stem_length, 3);
    assert_eq!(config.index.max_near_distance, 2);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_env_test.toml");

    let config_content = r#"
    [index]
    max_near_distance = 3

    [log]
    level = "info"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Set environment variables with a unique prefix
    std::env::set_var("TEST_ENV__LOG__LEVEL", "warn");
    std::env::set_var("TEST_ENV__INDEX__MIN_STEM_LENGTH", "4");

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.log.level, "warn");
    assert_eq!(config.index.min_stem_length, 4);

    // File values without overrides still apply
    assert_eq!(config.index.max_near_distance, 3);

    // Clean up environment variables
    std::env::remove_var("TEST_ENV__LOG__LEVEL");
    std::env::remove_var("TEST_ENV__INDEX__MIN_STEM_LENGTH");
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    // Create an invalid TOML file
    let config_content = r#"
    [index
    wildcard = "?
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Try to load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that a configuration file with invalid values fails validation.
#[test]
fn test_load_config_failing_validation() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad_values.toml");

    let config_content = r#"
    [index]
    wildcard = "z"
    "#;

    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_VALUES");
    assert!(loader.load().is_err());
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("does_not_exist.toml");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_MISSING");
    assert!(matches!(
        loader.load(),
        Err(crate::error::config::ConfigError::FileNotFound(_))
    ));
}
