// ABOUTME: Weekly training volume aggregation and progress trend detection
// ABOUTME: Groups workout logs by ISO week (Monday start) and compares the last two weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use std::collections::BTreeMap;

use athleton_core::models::WorkoutLog;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Training volume for one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Summed duration in minutes
    pub total_minutes: f64,
    /// Summed distance in kilometres
    pub total_km: f64,
    /// Number of logged sessions
    pub sessions: usize,
}

/// Direction of training volume between the two most recent weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Last week's minutes exceed the previous week's
    Up,
    /// Two or more weeks logged without an increase
    Steady,
    /// Fewer than two weeks logged
    NotEnoughData,
}

impl Trend {
    /// Short label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Steady => "steady",
            Self::NotEnoughData => "not enough data",
        }
    }
}

/// Summary of the most recent logged week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressInsights {
    /// Monday of the most recent logged week
    pub last_week_start: NaiveDate,
    /// Minutes trained in that week
    pub last_week_minutes: f64,
    /// Kilometres covered in that week
    pub last_week_km: f64,
    /// Volume trend against the previous logged week
    pub trend: Trend,
}

/// Monday of the ISO week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Per-week totals in ascending week order
#[must_use]
pub fn weekly_progress(workouts: &[WorkoutLog]) -> Vec<WeeklyVolume> {
    let mut weeks: BTreeMap<NaiveDate, WeeklyVolume> = BTreeMap::new();
    for workout in workouts {
        let start = week_start(workout.workout_date);
        let entry = weeks.entry(start).or_insert(WeeklyVolume {
            week_start: start,
            total_minutes: 0.0,
            total_km: 0.0,
            sessions: 0,
        });
        entry.total_minutes += workout.duration_min;
        entry.total_km += workout.distance_km;
        entry.sessions += 1;
    }
    weeks.into_values().collect()
}

/// Last-week summary and trend, `None` when nothing is logged
#[must_use]
pub fn progress_insights(workouts: &[WorkoutLog]) -> Option<ProgressInsights> {
    let weeks = weekly_progress(workouts);
    let (last, earlier) = weeks.split_last()?;

    let trend = match earlier.last() {
        None => Trend::NotEnoughData,
        Some(previous) if last.total_minutes > previous.total_minutes => Trend::Up,
        Some(_) => Trend::Steady,
    };

    Some(ProgressInsights {
        last_week_start: last.week_start,
        last_week_minutes: last.total_minutes,
        last_week_km: last.total_km,
        trend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn log(date: NaiveDate, minutes: f64, km: f64) -> WorkoutLog {
        WorkoutLog {
            id: 0,
            workout_date: date,
            workout_type: "Cardio".into(),
            duration_min: minutes,
            distance_km: km,
            rpe: 5,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-03-09 is a Sunday, 2025-03-10 a Monday
        assert_eq!(week_start(day(9)), day(3));
        assert_eq!(week_start(day(10)), day(10));
        assert_eq!(week_start(day(12)), day(10));
    }

    #[test]
    fn test_weekly_progress_groups_and_sorts() {
        let workouts = vec![
            log(day(12), 30.0, 5.0),
            log(day(4), 40.0, 0.0),
            log(day(10), 20.0, 3.0),
        ];
        let weeks = weekly_progress(&workouts);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, day(3));
        assert!((weeks[0].total_minutes - 40.0).abs() < f64::EPSILON);
        assert_eq!(weeks[1].week_start, day(10));
        assert!((weeks[1].total_minutes - 50.0).abs() < f64::EPSILON);
        assert!((weeks[1].total_km - 8.0).abs() < f64::EPSILON);
        assert_eq!(weeks[1].sessions, 2);
    }

    #[test]
    fn test_trend_up_and_steady() {
        let rising = vec![log(day(4), 40.0, 0.0), log(day(11), 60.0, 0.0)];
        assert_eq!(progress_insights(&rising).unwrap().trend, Trend::Up);

        let flat = vec![log(day(4), 60.0, 0.0), log(day(11), 60.0, 0.0)];
        assert_eq!(progress_insights(&flat).unwrap().trend, Trend::Steady);
    }

    #[test]
    fn test_single_week_is_not_enough_data() {
        let insights = progress_insights(&[log(day(11), 45.0, 7.5)]).unwrap();
        assert_eq!(insights.trend, Trend::NotEnoughData);
        assert!((insights.last_week_km - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_workouts_yields_none() {
        assert!(progress_insights(&[]).is_none());
        assert!(weekly_progress(&[]).is_empty());
    }
}
