// ABOUTME: Workout commands for logging sessions, listing history and showing insights
// ABOUTME: Insights append an AI summary when the coach is enabled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use athleton::constants::windows::HISTORY_DAYS;
use athleton::errors::AppError;
use athleton::intelligence::weekly_progress;
use athleton::models::{DateRange, NewWorkout};
use athleton::services::AppServices;
use chrono::{Duration, NaiveDate};

use super::authenticate_onboarded;
use crate::helpers::display;
use crate::{Credentials, Result};

/// Append a workout
pub async fn log(
    services: &AppServices,
    credentials: &Credentials,
    workout: NewWorkout,
) -> Result<()> {
    let (ctx, _) = authenticate_onboarded(services, credentials).await?;
    let saved = services.tracking.log_workout(&ctx, workout).await?;
    println!(
        "Logged {} on {} (#{}).",
        saved.workout_type, saved.workout_date, saved.id
    );
    Ok(())
}

/// List workouts in a date range with weekly totals
pub async fn history(
    services: &AppServices,
    credentials: &Credentials,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<()> {
    let (ctx, _) = authenticate_onboarded(services, credentials).await?;

    let end = to.unwrap_or(today);
    let start = from.unwrap_or(end - Duration::days(HISTORY_DAYS));
    if start > end {
        return Err(AppError::invalid_input(
            "The start date must not be after the end date",
        ));
    }

    let workouts = services
        .tracking
        .workout_history(&ctx, DateRange::between(start, end))
        .await?;
    if workouts.is_empty() {
        println!("No workouts logged between {start} and {end}.");
        return Ok(());
    }

    display::display_workouts(&workouts);
    println!();
    display::display_weekly(&weekly_progress(&workouts));
    Ok(())
}

/// Show last week's volume, trend and an optional AI summary
pub async fn insights(
    services: &AppServices,
    credentials: &Credentials,
    today: NaiveDate,
) -> Result<()> {
    let (ctx, _) = authenticate_onboarded(services, credentials).await?;
    let report = services.tracking.progress_report(&ctx, today).await?;

    let Some(insights) = report.insights else {
        println!("Log at least one or two weeks of training to see insights.");
        return Ok(());
    };
    display::display_insights(&insights);

    println!();
    if services.coaching.is_enabled() {
        println!("AI summary:");
        let summary = services
            .coaching
            .progress_summary(&ctx, &report.workouts)
            .await?;
        println!("{summary}");
    } else {
        println!("AI coach not configured (set OPENAI_API_KEY).");
    }
    Ok(())
}
