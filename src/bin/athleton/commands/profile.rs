// ABOUTME: Profile commands for viewing and editing onboarding answers
// ABOUTME: Editing merges flags over stored answers before saving and regenerating the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use athleton::models::{ProfileInput, Sex};
use athleton::services::AppServices;

use super::authenticate;
use crate::helpers::display;
use crate::{Credentials, ProfileArgs, Result};

/// Show the stored profile
pub async fn show(services: &AppServices, credentials: &Credentials) -> Result<()> {
    let ctx = authenticate(services, credentials).await?;
    match services.profiles.current_profile(&ctx).await? {
        Some(profile) => display::display_profile(&profile),
        None => println!("No profile yet. Run `athleton profile set` to create one."),
    }
    Ok(())
}

/// Save answers and regenerate the plan
pub async fn set(
    services: &AppServices,
    credentials: &Credentials,
    answers: ProfileArgs,
) -> Result<()> {
    let ctx = authenticate(services, credentials).await?;
    let stored = services.profiles.current_profile(&ctx).await?;
    let base = stored
        .as_ref()
        .map(ProfileInput::from_profile)
        .unwrap_or_default();

    let saved = services
        .profiles
        .save_profile(&ctx, merge_answers(base, answers))
        .await?;

    println!("Profile saved.");
    display::display_targets(&saved.profile.targets);
    println!();
    display::display_plan(&saved.plan);
    Ok(())
}

/// Overlay the provided flags on the stored answers
fn merge_answers(mut input: ProfileInput, answers: ProfileArgs) -> ProfileInput {
    if let Some(sex) = answers.sex {
        input.sex = Some(Sex::from_str_lossy(&sex));
    }
    input.age = answers.age.or(input.age);
    input.height_cm = answers.height.or(input.height_cm);
    input.weight_kg = answers.weight.or(input.weight_kg);
    input.objective = answers.objective.or(input.objective);
    input.experience = answers.experience.or(input.experience);
    input.availability_days = answers.days.or(input.availability_days);
    input.equipment = answers.equipment.or(input.equipment);
    input.injuries = answers.injuries.or(input.injuries);
    input.sleep_hours = answers.sleep.or(input.sleep_hours);
    input.stress_level = answers.stress.or(input.stress_level);
    input.diet_preference = answers.diet.or(input.diet_preference);
    input.diet_restrictions = answers.restrictions.or(input.diet_restrictions);
    input
}
