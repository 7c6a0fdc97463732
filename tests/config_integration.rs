//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use vecmath::config::AppConfig;

/// Fresh scratch directory for config files
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vecmath-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("VECMATH_SCENARIO__SCALE", "3.5");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("VECMATH_SCENARIO__SCALE");
    assert_eq!(config.scenario.scale, 3.5);
}

#[test]
#[serial]
fn test_default_file_loading() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.display.precision, Some(3));
    assert_eq!(config.scenario.vector, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user-override");
    fs::write(
        dir.join("default.toml"),
        "[display]\nprecision = 1\n\n[debug]\nlog_level = \"warn\"\n",
    )
    .unwrap();
    fs::write(dir.join("user.toml"), "[display]\nprecision = 4\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.display.precision, Some(4));
    assert_eq!(config.debug.log_level, "warn");
    assert_eq!(config.scenario.scale, 2.0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.display.precision, None);
    assert_eq!(config.scenario.mismatched, vec![1.0, 2.0, 3.0]);
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    let dir = scratch_dir("invalid");
    fs::write(dir.join("default.toml"), "[scenario]\nscale = \"big\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));

    fs::remove_dir_all(&dir).unwrap();
}
