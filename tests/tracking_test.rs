// ABOUTME: Integration tests for the workout journal and progress report
// ABOUTME: Covers log validation, inclusive history ranges and the weekly trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use athleton::errors::ErrorCode;
use athleton::intelligence::Trend;
use athleton::models::DateRange;
use common::{date, workout};

// ============================================================================
// Logging
// ============================================================================

#[tokio::test]
async fn test_log_workout_assigns_ids() {
    let services = common::create_test_services().await.unwrap();
    let ctx = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let first = services
        .tracking
        .log_workout(&ctx, workout(date(2025, 3, 10), "Run", 40.0, 8.0))
        .await
        .unwrap();
    let second = services
        .tracking
        .log_workout(&ctx, workout(date(2025, 3, 11), "Strength", 50.0, 0.0))
        .await
        .unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.workout_type, "Run");
    assert_eq!(first.rpe, 6);
}

#[tokio::test]
async fn test_invalid_workouts_are_rejected() {
    let services = common::create_test_services().await.unwrap();
    let ctx = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let mut hard = workout(date(2025, 3, 10), "Run", 40.0, 8.0);
    hard.rpe = 11;
    let mut negative = workout(date(2025, 3, 10), "Run", -5.0, 8.0);
    negative.rpe = 5;
    let blank = workout(date(2025, 3, 10), "  ", 40.0, 8.0);

    for entry in [hard, negative, blank] {
        let error = services
            .tracking
            .log_workout(&ctx, entry)
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    let history = services
        .tracking
        .workout_history(&ctx, DateRange::all())
        .await
        .unwrap();
    assert!(history.is_empty());
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn test_history_range_is_inclusive_and_newest_first() {
    let services = common::create_test_services().await.unwrap();
    let ctx = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    for day in [1, 5, 9, 14] {
        services
            .tracking
            .log_workout(&ctx, workout(date(2025, 3, day), "Run", 30.0, 5.0))
            .await
            .unwrap();
    }

    let history = services
        .tracking
        .workout_history(&ctx, DateRange::between(date(2025, 3, 5), date(2025, 3, 9)))
        .await
        .unwrap();
    let dates: Vec<_> = history.iter().map(|w| w.workout_date).collect();
    assert_eq!(dates, vec![date(2025, 3, 9), date(2025, 3, 5)]);
}

// ============================================================================
// Progress
// ============================================================================

#[tokio::test]
async fn test_progress_report_detects_upward_trend() {
    let services = common::create_test_services().await.unwrap();
    let ctx = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let entries = [
        // Outside the 56-day window ending 2025-03-16
        workout(date(2025, 1, 2), "Run", 300.0, 50.0),
        workout(date(2025, 3, 4), "Run", 30.0, 5.0),
        workout(date(2025, 3, 10), "Run", 45.0, 9.0),
        workout(date(2025, 3, 13), "Strength", 20.0, 0.0),
    ];
    for entry in entries {
        services.tracking.log_workout(&ctx, entry).await.unwrap();
    }

    let report = services
        .tracking
        .progress_report(&ctx, date(2025, 3, 16))
        .await
        .unwrap();

    assert_eq!(report.workouts.len(), 3);
    assert_eq!(report.weeks.len(), 2);
    assert_eq!(report.weeks[0].week_start, date(2025, 3, 3));
    assert_eq!(report.weeks[1].sessions, 2);

    let insights = report.insights.unwrap();
    assert_eq!(insights.last_week_start, date(2025, 3, 10));
    assert!((insights.last_week_minutes - 65.0).abs() < 1e-9);
    assert!((insights.last_week_km - 9.0).abs() < 1e-9);
    assert_eq!(insights.trend, Trend::Up);
}

#[tokio::test]
async fn test_progress_report_without_workouts() {
    let services = common::create_test_services().await.unwrap();
    let ctx = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let report = services
        .tracking
        .progress_report(&ctx, date(2025, 3, 16))
        .await
        .unwrap();
    assert!(report.weeks.is_empty());
    assert!(report.insights.is_none());
}
