// ABOUTME: Integration tests for environment-driven configuration and logging setup
// ABOUTME: Serialised because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use athleton::config::{AppConfig, DatabaseUrl, Environment};
use athleton::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const CONFIG_VARS: [&str; 6] = [
    "DATABASE_URL",
    "ATHLETON_DB",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "COACH_MODEL",
    "ENVIRONMENT",
];

fn clear_config_env() {
    for name in CONFIG_VARS {
        env::remove_var(name);
    }
}

// ============================================================================
// Database selection
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_config_env();
    let config = AppConfig::from_env();

    assert_eq!(
        config.database,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/athleton.db")
        }
    );
    assert!(!config.coach.is_enabled());
    assert_eq!(config.coach.model, "gpt-4o-mini");
    assert_eq!(config.coach.base_url, "https://api.openai.com/v1");
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_database_url_wins_over_athleton_db() {
    clear_config_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ATHLETON_DB", "/tmp/ignored.db");

    assert_eq!(AppConfig::from_env().database, DatabaseUrl::Memory);
    clear_config_env();
}

#[test]
#[serial]
fn test_athleton_db_names_sqlite_file() {
    clear_config_env();
    env::set_var("ATHLETON_DB", "/tmp/athleton-test.db");
    // Blank values count as unset
    env::set_var("DATABASE_URL", "  ");

    let config = AppConfig::from_env();
    assert_eq!(
        config.database.to_connection_string(),
        "sqlite:/tmp/athleton-test.db"
    );
    clear_config_env();
}

#[test]
#[serial]
fn test_command_line_override_replaces_environment() {
    clear_config_env();
    env::set_var("ATHLETON_DB", "/tmp/from-env.db");

    let config = AppConfig::from_env().with_database_override(Some("sqlite:/tmp/from-cli.db"));
    assert_eq!(
        config.database.to_connection_string(),
        "sqlite:/tmp/from-cli.db"
    );

    let unchanged = AppConfig::from_env().with_database_override(None);
    assert_eq!(
        unchanged.database.to_connection_string(),
        "sqlite:/tmp/from-env.db"
    );
    clear_config_env();
}

// ============================================================================
// Coach settings
// ============================================================================

#[test]
#[serial]
fn test_coach_settings_from_environment() {
    clear_config_env();
    env::set_var("OPENAI_API_KEY", "sk-env");
    env::set_var("OPENAI_BASE_URL", "http://localhost:11434/v1");
    env::set_var("COACH_MODEL", "llama3.1");
    env::set_var("ENVIRONMENT", "production");

    let config = AppConfig::from_env();
    assert!(config.coach.is_enabled());
    assert_eq!(config.coach.api_key.as_deref(), Some("sk-env"));
    assert_eq!(config.coach.base_url, "http://localhost:11434/v1");
    assert_eq!(config.coach.model, "llama3.1");
    assert!(config.environment.is_production());
    assert!(!format!("{config:?}").contains("sk-env"));
    clear_config_env();
}

// ============================================================================
// Logging
// ============================================================================

#[test]
#[serial]
fn test_logging_config_from_environment() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "athleton");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    clear_config_env();
}

#[test]
fn test_verbosity_raises_level() {
    let base = LoggingConfig::default();
    assert_eq!(base.level, "warn");
    assert_eq!(base.clone().with_verbosity(0).level, "warn");
    assert_eq!(base.clone().with_verbosity(1).level, "info");
    assert_eq!(base.clone().with_verbosity(2).level, "debug");
    assert_eq!(base.with_verbosity(5).level, "trace");
}
