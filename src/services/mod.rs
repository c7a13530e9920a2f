// ABOUTME: Application services for accounts, profiles, training tracking and coaching
// ABOUTME: Each service wraps the storage layer and converts failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! # Services
//!
//! User-scoped operations take an explicit [`UserContext`](crate::models::UserContext)
//! obtained from [`AccountService::login`].

/// Registration and login
pub mod accounts;
/// AI coaching with athlete context
pub mod coaching;
/// Onboarding answers, nutrition targets and the weekly plan
pub mod profile;
/// Workout journal and progress
pub mod tracking;

pub use accounts::{AccountService, LoginRequest, RegisterRequest};
pub use coaching::CoachingService;
pub use profile::{ProfileService, SavedProfile};
pub use tracking::{ProgressReport, TrackingService};

use std::sync::Arc;

use tracing::info;

use crate::coach::CoachingAssistant;
use crate::config::AppConfig;
use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::errors::{AppError, AppResult};

/// Every service, sharing one database handle
#[derive(Clone)]
pub struct AppServices {
    /// Registration and login
    pub accounts: AccountService,
    /// Profile and plan
    pub profiles: ProfileService,
    /// Workout journal
    pub tracking: TrackingService,
    /// AI coach
    pub coaching: CoachingService,
}

impl AppServices {
    /// Build the services over an existing database
    #[must_use]
    pub fn new(database: Database, assistant: CoachingAssistant) -> Self {
        let assistant = Arc::new(assistant);
        Self {
            accounts: AccountService::new(database.clone()),
            profiles: ProfileService::new(database.clone()),
            tracking: TrackingService::new(database.clone()),
            coaching: CoachingService::new(database, assistant),
        }
    }

    /// Connect to the configured database and build the services
    ///
    /// # Errors
    ///
    /// Returns a database error if the backend cannot be opened or migrated
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        let database = Database::new(&config.database.to_connection_string())
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to open {}: {e:#}", config.database))
            })?;
        info!(backend = database.backend_info(), "Database ready");

        Ok(Self::new(
            database,
            CoachingAssistant::from_config(&config.coach),
        ))
    }
}
