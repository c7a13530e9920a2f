// ABOUTME: Environment-based configuration for database selection and the coaching assistant
// ABOUTME: Resolves DATABASE_URL/ATHLETON_DB and OpenAI settings with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{coach, env_vars, storage};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// `PostgreSQL` server
    PostgreSQL {
        /// Full connection string
        connection_string: String,
    },
    /// In-memory `SQLite`, used by tests
    Memory,
}

impl DatabaseUrl {
    /// Parse a connection string; anything without a known scheme is a `SQLite` file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        if let Some(path) = s.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            if path == ":memory:" {
                Self::Memory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path),
                }
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Self::PostgreSQL {
                connection_string: s.to_owned(),
            }
        } else {
            Self::SQLite {
                path: PathBuf::from(s),
            }
        }
    }

    /// Convert to a connection string understood by the storage factory
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is a `PostgreSQL` database
    #[must_use]
    pub const fn is_postgresql(&self) -> bool {
        matches!(self, Self::PostgreSQL { .. })
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(storage::DEFAULT_DB_PATH),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Credentials stay out of logs
            Self::PostgreSQL { .. } => write!(f, "postgresql://***"),
            other => write!(f, "{}", other.to_connection_string()),
        }
    }
}

/// Settings for the LLM coaching assistant
#[derive(Clone, PartialEq, Eq)]
pub struct CoachConfig {
    /// Credential; the coach is disabled without it
    pub api_key: Option<String>,
    /// Chat-completion endpoint base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
}

impl CoachConfig {
    /// Whether a credential is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: coach::DEFAULT_BASE_URL.to_owned(),
            model: coach::DEFAULT_MODEL.to_owned(),
        }
    }
}

impl fmt::Debug for CoachConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoachConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where data is stored
    pub database: DatabaseUrl,
    /// Coaching assistant settings
    pub coach: CoachConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `DATABASE_URL` selects the backend; otherwise `ATHLETON_DB` names a
    ///   `SQLite` file; otherwise `./data/athleton.db`
    /// - `OPENAI_API_KEY` enables the coach, `OPENAI_BASE_URL` and
    ///   `COACH_MODEL` override its endpoint and model
    /// - `ENVIRONMENT` names the deployment environment
    #[must_use]
    pub fn from_env() -> Self {
        let database = resolve_database_url(
            non_empty_var(env_vars::DATABASE_URL),
            non_empty_var(env_vars::ATHLETON_DB),
        );

        let coach = CoachConfig {
            api_key: non_empty_var(env_vars::OPENAI_API_KEY),
            base_url: non_empty_var(env_vars::OPENAI_BASE_URL)
                .unwrap_or_else(|| coach::DEFAULT_BASE_URL.to_owned()),
            model: non_empty_var(env_vars::COACH_MODEL)
                .unwrap_or_else(|| coach::DEFAULT_MODEL.to_owned()),
        };

        let environment = non_empty_var(env_vars::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            database,
            coach,
            environment,
        };
        debug!(?config, "Loaded configuration from environment");
        config
    }

    /// Replace the database location with a command-line override
    #[must_use]
    pub fn with_database_override(mut self, database_url: Option<&str>) -> Self {
        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            info!("Using database URL from command line");
            self.database = DatabaseUrl::parse_url(url);
        }
        self
    }
}

/// Pick the database location from `DATABASE_URL` and `ATHLETON_DB` values
#[must_use]
pub fn resolve_database_url(
    database_url: Option<String>,
    athleton_db: Option<String>,
) -> DatabaseUrl {
    match (database_url, athleton_db) {
        (Some(url), _) => DatabaseUrl::parse_url(&url),
        (None, Some(path)) => DatabaseUrl::SQLite {
            path: PathBuf::from(path),
        },
        (None, None) => DatabaseUrl::default(),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
