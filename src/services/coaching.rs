// ABOUTME: Coaching service that gathers the athlete's profile and recent workouts for the coach
// ABOUTME: Storage failures propagate; coach failures come back as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use std::sync::Arc;

use chrono::NaiveDate;

use crate::coach::{CoachingAssistant, PROGRESS_SUMMARY_QUESTION};
use crate::constants::windows::COACH_CONTEXT_DAYS;
use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::errors::AppResult;
use crate::models::{DateRange, UserContext, WorkoutLog};

/// AI coaching with athlete context
#[derive(Clone)]
pub struct CoachingService {
    database: Database,
    assistant: Arc<CoachingAssistant>,
}

impl CoachingService {
    /// Create the service
    #[must_use]
    pub const fn new(database: Database, assistant: Arc<CoachingAssistant>) -> Self {
        Self {
            database,
            assistant,
        }
    }

    /// Whether the coach has a provider
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.assistant.is_enabled()
    }

    /// Answer a question using the profile and the last 60 days of workouts
    ///
    /// # Errors
    ///
    /// Returns a database error if the context cannot be loaded
    pub async fn ask(
        &self,
        ctx: &UserContext,
        question: &str,
        today: NaiveDate,
    ) -> AppResult<String> {
        let profile = self.database.load_profile(ctx.user_id).await?;
        let workouts = self
            .database
            .query_workouts(ctx.user_id, DateRange::last_days(today, COACH_CONTEXT_DAYS))
            .await?;
        Ok(self
            .assistant
            .ask(question, profile.as_ref(), &workouts)
            .await)
    }

    /// AI progress summary over already-loaded workouts
    ///
    /// # Errors
    ///
    /// Returns a database error if the profile cannot be loaded
    pub async fn progress_summary(
        &self,
        ctx: &UserContext,
        workouts: &[WorkoutLog],
    ) -> AppResult<String> {
        let profile = self.database.load_profile(ctx.user_id).await?;
        Ok(self
            .assistant
            .ask(PROGRESS_SUMMARY_QUESTION, profile.as_ref(), workouts)
            .await)
    }
}
