// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, service wiring, and user/profile/workout fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `athleton`

use anyhow::Result;
use athleton::coach::CoachingAssistant;
use athleton::database_plugins::{factory::Database, DatabaseProvider};
use athleton::models::{NewWorkout, ProfileInput, Sex, UserContext};
use athleton::services::{AppServices, RegisterRequest};
use chrono::NaiveDate;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Services over a fresh in-memory database with the coach disabled
pub async fn create_test_services() -> Result<AppServices> {
    let database = create_test_database().await?;
    Ok(AppServices::new(database, CoachingAssistant::disabled()))
}

/// Register an account with a fixed password
pub async fn register_user(services: &AppServices, email: &str) -> Result<UserContext> {
    Ok(services
        .accounts
        .register(RegisterRequest {
            email: email.to_owned(),
            password: "s3cretpass".to_owned(),
            display_name: Some("Test Athlete".to_owned()),
        })
        .await?)
}

/// Complete questionnaire answers for a 30 year old man training 4 days a week
pub fn onboarding_input(objective: &str) -> ProfileInput {
    ProfileInput {
        sex: Some(Sex::Male),
        age: Some(30),
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        objective: Some(objective.to_owned()),
        experience: Some("Intermedio".to_owned()),
        availability_days: Some(4),
        equipment: Some("Dumbbells".to_owned()),
        sleep_hours: Some(7.5),
        stress_level: Some("Medio".to_owned()),
        diet_preference: Some("Omnívoro".to_owned()),
        ..ProfileInput::default()
    }
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Workout entry with RPE 6 and no notes
pub fn workout(workout_date: NaiveDate, workout_type: &str, minutes: f64, km: f64) -> NewWorkout {
    NewWorkout {
        workout_date,
        workout_type: workout_type.to_owned(),
        duration_min: minutes,
        distance_km: km,
        rpe: 6,
        notes: None,
    }
}
