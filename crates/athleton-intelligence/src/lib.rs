// ABOUTME: Rules engine mapping athlete profiles to weekly plans and nutrition targets
// ABOUTME: Shared objective classifier, plan generator, nutrition estimator, and progress aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

#![deny(unsafe_code)]

//! # AthletON Intelligence
//!
//! Deterministic, side-effect free rules. The plan generator and the nutrition
//! estimator both consult the same classifier so a profile can never receive a
//! running plan with a muscle-gain macro split.
//!
//! ## Modules
//!
//! - **classifier**: free-text objective/experience to enums
//! - **plan_generator**: 7-day session template selection
//! - **nutrition**: Mifflin-St Jeor energy estimate and macro split
//! - **onboarding**: profile completeness predicate
//! - **progress**: weekly volume aggregation and trend

/// Objective and experience classification
pub mod classifier;

/// Weekly training plan generation
pub mod plan_generator;

/// Calorie and macronutrient targets
pub mod nutrition;

/// Onboarding completeness check
pub mod onboarding;

/// Weekly progress aggregation
pub mod progress;

pub use classifier::{
    classify_experience, classify_objective, ExperienceLevel, ObjectiveCategory, RaceDistance,
};
pub use nutrition::{
    estimate_energy, estimate_targets, EnergyBreakdown, MacroGrams, NutritionInputs,
};
pub use onboarding::needs_onboarding;
pub use plan_generator::{generate_weekly_plan, plan_for_profile, SessionKind};
pub use progress::{progress_insights, weekly_progress, ProgressInsights, Trend, WeeklyVolume};
