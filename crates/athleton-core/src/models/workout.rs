// ABOUTME: Workout log models for the append-only training journal
// ABOUTME: WorkoutLog rows, the NewWorkout insert form, and inclusive DateRange filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Logged workout, never mutated after insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Row identifier
    pub id: i64,
    /// Day the workout took place
    pub workout_date: NaiveDate,
    /// Free-text workout type (strength, cardio, HIIT, ...)
    pub workout_type: String,
    /// Duration in minutes
    pub duration_min: f64,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Rate of perceived exertion, 1-10
    pub rpe: i32,
    /// Free-text notes
    pub notes: Option<String>,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

/// Workout submitted for logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    /// Day the workout took place
    pub workout_date: NaiveDate,
    /// Free-text workout type
    pub workout_type: String,
    /// Duration in minutes
    pub duration_min: f64,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Rate of perceived exertion, 1-10
    pub rpe: i32,
    /// Free-text notes
    pub notes: Option<String>,
}

impl NewWorkout {
    /// Check the entry before it is appended
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank type, negative or non-finite
    /// duration/distance, or an RPE outside 1-10
    pub fn validate(&self) -> AppResult<()> {
        if self.workout_type.trim().is_empty() {
            return Err(AppError::invalid_input("A workout type is required"));
        }
        if !self.duration_min.is_finite() || self.duration_min < 0.0 {
            return Err(AppError::invalid_input(
                "Duration must be zero or more minutes",
            ));
        }
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(AppError::invalid_input(
                "Distance must be zero or more kilometres",
            ));
        }
        if !(limits::MIN_RPE..=limits::MAX_RPE).contains(&self.rpe) {
            return Err(AppError::invalid_input(format!(
                "RPE must be between {} and {}",
                limits::MIN_RPE,
                limits::MAX_RPE
            )));
        }
        Ok(())
    }

    /// Materialise the stored row
    #[must_use]
    pub fn into_log(self, id: i64, created_at: DateTime<Utc>) -> WorkoutLog {
        WorkoutLog {
            id,
            workout_date: self.workout_date,
            workout_type: self.workout_type,
            duration_min: self.duration_min,
            distance_km: self.distance_km,
            rpe: self.rpe,
            notes: self.notes,
            created_at,
        }
    }
}

/// Inclusive date filter for workout queries; open ends are unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    pub start: Option<NaiveDate>,
    /// Last day included
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range covering every workout
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Range between two inclusive dates
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The `days` days up to and including `today`
    #[must_use]
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self::between(today - Duration::days(days), today)
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout() -> NewWorkout {
        NewWorkout {
            workout_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            workout_type: "Cardio".into(),
            duration_min: 45.0,
            distance_km: 8.0,
            rpe: 6,
            notes: None,
        }
    }

    #[test]
    fn test_valid_workout_passes() {
        assert!(workout().validate().is_ok());
    }

    #[test]
    fn test_rpe_bounds() {
        assert!(NewWorkout { rpe: 0, ..workout() }.validate().is_err());
        assert!(NewWorkout { rpe: 11, ..workout() }.validate().is_err());
        assert!(NewWorkout { rpe: 10, ..workout() }.validate().is_ok());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let entry = NewWorkout {
            duration_min: -5.0,
            ..workout()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let range = DateRange::between(start, end);
        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(end.succ_opt().unwrap()));
        assert!(DateRange::all().contains(start));
    }

    #[test]
    fn test_last_days_window() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let range = DateRange::last_days(today, 30);
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(range.end, Some(today));
    }
}
