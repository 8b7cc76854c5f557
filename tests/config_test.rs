// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Serialized because every test mutates process environment variables
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use babyspoon::config::environment::{
    ANALYTICS_VAR, CATALOG_VAR, DATA_DIR_VAR, DEBOUNCE_VAR, ENVIRONMENT_VAR,
    RECENT_SEARCH_LIMIT_VAR, RECOMMENDED_LIMIT_VAR,
};
use babyspoon::config::{AppConfig, Environment};
use babyspoon::logging::{LogFormat, LoggingConfig};
use babyspoon::ErrorCode;
use babyspoon_intelligence::ReportType;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const ALL_VARS: [&str; 7] = [
    DATA_DIR_VAR,
    CATALOG_VAR,
    ANALYTICS_VAR,
    DEBOUNCE_VAR,
    RECOMMENDED_LIMIT_VAR,
    RECENT_SEARCH_LIMIT_VAR,
    ENVIRONMENT_VAR,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.search_debounce, Duration::from_millis(300));
    assert_eq!(config.recommended_limit, 15);
    assert_eq!(config.recent_search_limit, 5);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.catalog_path, config.data_dir.join("recipes.json"));
    assert_eq!(config.analytics_path, config.data_dir.join("analytics.json"));
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(DATA_DIR_VAR, "/tmp/babyspoon-test");
    env::set_var(DEBOUNCE_VAR, "150");
    env::set_var(RECOMMENDED_LIMIT_VAR, " 8 ");
    env::set_var(ENVIRONMENT_VAR, "TEST");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/babyspoon-test"));
    assert_eq!(
        config.catalog_path,
        PathBuf::from("/tmp/babyspoon-test/recipes.json")
    );
    assert_eq!(config.search_debounce, Duration::from_millis(150));
    assert_eq!(config.recommended_limit, 8);
    assert!(config.environment.is_testing());
}

#[test]
#[serial]
fn test_catalog_path_override() {
    clear_env();
    env::set_var(CATALOG_VAR, "/srv/recipes/catalog.json");
    let config = AppConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.catalog_path, PathBuf::from("/srv/recipes/catalog.json"));
}

#[test]
#[serial]
fn test_malformed_number_is_config_error() {
    clear_env();
    env::set_var(RECENT_SEARCH_LIMIT_VAR, "five");
    let error = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains(RECENT_SEARCH_LIMIT_VAR));
}

#[test]
#[serial]
fn test_zero_limit_is_rejected() {
    clear_env();
    env::set_var(RECOMMENDED_LIMIT_VAR, "0");
    let error = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_with_data_dir_keeps_other_settings() {
    let config = AppConfig::default().with_data_dir("/data");
    assert_eq!(config.data_dir, PathBuf::from("/data"));
    assert_eq!(config.catalog_path, PathBuf::from("/data/recipes.json"));
    assert_eq!(config.analytics_path, PathBuf::from("/data/analytics.json"));
    assert_eq!(config.recommended_limit, 15);

    let explicit = AppConfig {
        catalog_path: PathBuf::from("/srv/catalog.json"),
        ..AppConfig::default()
    }
    .with_data_dir("/data");
    assert_eq!(explicit.catalog_path, PathBuf::from("/srv/catalog.json"));
    assert!(config.validate().is_ok());
    assert_eq!(config.search_debouncer().delay(), config.search_debounce);
}

#[test]
fn test_missing_analytics_settings_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default().with_data_dir(dir.path());
    let analyzer = config.load_analyzer().unwrap();
    assert_eq!(analyzer.config().beef_goal(ReportType::Weekly), 4);
}

#[test]
fn test_analytics_settings_file_configures_analyzer() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default().with_data_dir(dir.path());
    fs::write(
        &config.analytics_path,
        r#"{"analysis": {"weekly_beef_goal": 2}, "keywords": {"protein": ["두부"]}}"#,
    )
    .unwrap();

    let analyzer = config.load_analyzer().unwrap();
    assert_eq!(analyzer.config().beef_goal(ReportType::Weekly), 2);
    assert_eq!(analyzer.config().beef_goal(ReportType::Monthly), 15);
}

#[test]
fn test_invalid_analytics_settings_are_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default().with_data_dir(dir.path());

    fs::write(&config.analytics_path, r#"{"analysis": {"monthly_beef_goal": 0}}"#).unwrap();
    let error = config.load_analyzer().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("monthly beef goal must be positive"));

    fs::write(&config.analytics_path, "not json").unwrap();
    assert_eq!(config.load_analyzer().unwrap_err().code, ErrorCode::ConfigError);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("anything"), Environment::Development);
    assert_eq!(Environment::Production.to_string(), "production");
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    assert_eq!(config.level, "debug");
    assert!(matches!(config.format, LogFormat::Json));
    assert!(matches!(LogFormat::from_str_or_default("bogus"), LogFormat::Pretty));
}
