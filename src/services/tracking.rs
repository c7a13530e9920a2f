// ABOUTME: Workout journal service for logging sessions and reading history
// ABOUTME: Produces weekly volume summaries and the last-week trend from stored workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::constants::windows::INSIGHT_DAYS;
use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::errors::AppResult;
use crate::intelligence::{progress_insights, weekly_progress, ProgressInsights, WeeklyVolume};
use crate::models::{DateRange, NewWorkout, UserContext, WorkoutLog};

/// Weekly volumes and insights over the insight window
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    /// Window the report covers
    pub range: DateRange,
    /// Workouts in the window, newest first
    pub workouts: Vec<WorkoutLog>,
    /// Volume per week, oldest first
    pub weeks: Vec<WeeklyVolume>,
    /// Last-week summary, absent when nothing was logged
    pub insights: Option<ProgressInsights>,
}

/// Workout journal and progress
#[derive(Clone)]
pub struct TrackingService {
    database: Database,
}

impl TrackingService {
    /// Create the service
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Validate and append a workout
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when validation fails, or a database error
    pub async fn log_workout(
        &self,
        ctx: &UserContext,
        workout: NewWorkout,
    ) -> AppResult<WorkoutLog> {
        workout.validate()?;
        let log = self.database.append_workout(ctx.user_id, &workout).await?;
        info!(user_id = %ctx.user_id, workout_id = log.id, "Workout logged");
        Ok(log)
    }

    /// Workouts inside the range, newest first
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn workout_history(
        &self,
        ctx: &UserContext,
        range: DateRange,
    ) -> AppResult<Vec<WorkoutLog>> {
        Ok(self.database.query_workouts(ctx.user_id, range).await?)
    }

    /// Weekly volumes and trend over the insight window ending `today`
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn progress_report(
        &self,
        ctx: &UserContext,
        today: NaiveDate,
    ) -> AppResult<ProgressReport> {
        let range = DateRange::last_days(today, INSIGHT_DAYS);
        let workouts = self.workout_history(ctx, range).await?;
        Ok(ProgressReport {
            range,
            weeks: weekly_progress(&workouts),
            insights: progress_insights(&workouts),
            workouts,
        })
    }
}
