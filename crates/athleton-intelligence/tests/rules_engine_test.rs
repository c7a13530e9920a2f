// ABOUTME: Property tests for the plan and nutrition rules engine
// ABOUTME: Covers rest-day invariants, macro sums, fallbacks, onboarding, and classifier consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON
//! Rules engine property tests
//!
//! Exercises the public API of the intelligence crate across every
//! questionnaire objective and experience tier:
//! - trailing weekdays beyond availability are rest
//! - macro percentages always sum to 100
//! - the plan template and the macro split agree on the objective category
//! - worked Mifflin-St Jeor examples and the incomplete-biometrics fallback

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use athleton_core::models::{NutritionTargets, Profile, Sex};
use athleton_intelligence::{
    classify_experience, classify_objective, estimate_energy, estimate_targets,
    generate_weekly_plan, needs_onboarding, nutrition::macro_split, plan_for_profile,
    plan_generator::weekly_template, NutritionInputs, ObjectiveCategory, SessionKind,
};
use chrono::Utc;
use uuid::Uuid;

const OBJECTIVES: &[&str] = &[
    "Perder grasa",
    "Ganar músculo",
    "Correr 10K",
    "Media maratón",
    "Maratón",
    "Triatlón sprint/olímpico",
    "Mejorar salud general",
    "Hipertrofia y perder grasa",
    "Lose fat before summer",
    "Half marathon under 2h",
    "Olympic triathlon",
    "",
];

const EXPERIENCES: &[&str] = &["Principiante", "Intermedio", "Avanzado", "whatever"];

const REST_TITLE: &str = "Rest / active recovery";

fn profile(objective: Option<&str>, experience: Option<&str>, days: Option<i32>) -> Profile {
    Profile {
        user_id: Uuid::new_v4(),
        sex: Some(Sex::Male),
        age: Some(30),
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
        objective: objective.map(str::to_owned),
        experience: experience.map(str::to_owned),
        availability_days: days,
        equipment: None,
        injuries: None,
        sleep_hours: Some(7.0),
        stress_level: None,
        diet_preference: None,
        diet_restrictions: None,
        targets: NutritionTargets::fallback(),
        updated_at: Utc::now(),
    }
}

// ============================================================================
// PLAN GENERATOR
// ============================================================================

#[test]
fn test_slots_beyond_availability_are_rest() {
    for objective in OBJECTIVES {
        for experience in EXPERIENCES {
            for days in 2..=7 {
                let plan = generate_weekly_plan(Some(objective), Some(experience), Some(days));
                assert_eq!(plan.len(), 7);
                for item in plan.iter().skip(days as usize) {
                    assert_eq!(item.title, REST_TITLE, "{objective}/{experience}/{days}");
                    assert!(item.details.is_empty());
                }
            }
        }
    }
}

#[test]
fn test_plan_generation_is_idempotent() {
    let athlete = profile(Some("Maratón"), Some("Intermedio"), Some(5));
    assert_eq!(plan_for_profile(&athlete), plan_for_profile(&athlete));
}

#[test]
fn test_missing_availability_defaults_to_three_days() {
    let plan = generate_weekly_plan(Some("Ganar músculo"), Some("Intermedio"), None);
    assert_ne!(plan[2].title, REST_TITLE);
    assert_eq!(plan[3].title, REST_TITLE);
}

#[test]
fn test_intensity_sessions_carry_tier_prefix() {
    let plan = generate_weekly_plan(Some("Mejorar salud general"), Some("Avanzado"), Some(6));
    for item in plan.iter().filter(|item| item.title != "Mobility + core") {
        if item.title != REST_TITLE {
            assert!(item.details.starts_with("Advanced: "), "{}", item.title);
        }
    }
}

// ============================================================================
// NUTRITION ESTIMATOR
// ============================================================================

#[test]
fn test_macro_percentages_sum_to_100() {
    for objective in OBJECTIVES {
        let athlete = profile(Some(objective), Some("Intermedio"), Some(4));
        let targets = estimate_targets(&NutritionInputs::from(&athlete));
        assert!(
            (targets.total_pct() - 100.0).abs() < f64::EPSILON,
            "{objective}"
        );
    }
}

#[test]
fn test_worked_example_age_30() {
    let athlete = profile(Some("Mejorar salud general"), Some("Intermedio"), Some(4));
    let inputs = NutritionInputs::from(&athlete);
    let energy = estimate_energy(&inputs).unwrap();
    assert!((energy.bmr - 1648.75).abs() < 1e-9);
    assert!((energy.pal - 1.60).abs() < f64::EPSILON);

    let targets = estimate_targets(&inputs);
    assert!((targets.kcal_target - 2638.0).abs() < 1e-9);
    assert_eq!(
        (targets.carbs_pct, targets.protein_pct, targets.fat_pct),
        (45.0, 30.0, 25.0)
    );
}

#[test]
fn test_worked_example_age_25() {
    let mut athlete = profile(Some("Mejorar salud general"), Some("Intermedio"), Some(4));
    athlete.age = Some(25);
    let inputs = NutritionInputs::from(&athlete);
    let energy = estimate_energy(&inputs).unwrap();
    assert!((energy.bmr - 1673.75).abs() < 1e-9);
    assert!((estimate_targets(&inputs).kcal_target - 2678.0).abs() < 1e-9);
}

#[test]
fn test_any_missing_biometric_uses_fallback() {
    let base = profile(Some("Ganar músculo"), Some("Intermedio"), Some(5));
    let variants = [
        Profile {
            sex: None,
            ..base.clone()
        },
        Profile {
            age: None,
            ..base.clone()
        },
        Profile {
            weight_kg: None,
            ..base.clone()
        },
        Profile {
            height_cm: None,
            ..base.clone()
        },
    ];
    for athlete in &variants {
        let targets = estimate_targets(&NutritionInputs::from(athlete));
        assert_eq!(
            (
                targets.kcal_target,
                targets.carbs_pct,
                targets.protein_pct,
                targets.fat_pct
            ),
            (2200.0, 45.0, 30.0, 25.0)
        );
    }
}

// ============================================================================
// SHARED CLASSIFIER CONSISTENCY
// ============================================================================

#[test]
fn test_plan_and_macros_agree_on_objective() {
    for objective in OBJECTIVES {
        let category = classify_objective(Some(objective));
        let level = classify_experience(Some("Intermedio"));
        let expected: Vec<&str> = weekly_template(category, level)
            .iter()
            .map(SessionKind::title)
            .collect();

        let plan = generate_weekly_plan(Some(objective), Some("Intermedio"), Some(7));
        let titles: Vec<&str> = plan.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, expected, "{objective}");

        let athlete = profile(Some(objective), Some("Intermedio"), Some(7));
        let targets = estimate_targets(&NutritionInputs::from(&athlete));
        assert_eq!(
            (targets.carbs_pct, targets.protein_pct, targets.fat_pct),
            macro_split(category),
            "{objective}"
        );
    }
}

#[test]
fn test_compound_objective_is_muscle_gain_for_both_rules() {
    let objective = "Hipertrofia y perder grasa";
    assert_eq!(
        classify_objective(Some(objective)),
        ObjectiveCategory::MuscleGain
    );
    let plan = generate_weekly_plan(Some(objective), Some("Principiante"), Some(7));
    assert_eq!(plan[1].title, "Strength (full body)");

    let athlete = profile(Some(objective), Some("Principiante"), Some(4));
    let targets = estimate_targets(&NutritionInputs::from(&athlete));
    assert!((targets.kcal_target - 2901.8).abs() < 1e-9);
    assert!((targets.carbs_pct - 40.0).abs() < f64::EPSILON);
}

// ============================================================================
// ONBOARDING
// ============================================================================

#[test]
fn test_needs_onboarding() {
    assert!(needs_onboarding(None));
    assert!(needs_onboarding(Some(&profile(
        Some(""),
        Some("Intermedio"),
        Some(4)
    ))));
    assert!(needs_onboarding(Some(&profile(
        Some("Maratón"),
        None,
        Some(4)
    ))));
    assert!(needs_onboarding(Some(&profile(
        Some("Maratón"),
        Some("Intermedio"),
        Some(1)
    ))));
    assert!(needs_onboarding(Some(&profile(
        Some("Maratón"),
        Some("Intermedio"),
        None
    ))));
    assert!(!needs_onboarding(Some(&profile(
        Some("Maratón"),
        Some("Intermedio"),
        Some(2)
    ))));
}
