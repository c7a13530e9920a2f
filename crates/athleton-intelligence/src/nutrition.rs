// ABOUTME: Daily calorie and macronutrient target estimation for athlete profiles
// ABOUTME: Mifflin-St Jeor BMR, availability-based activity factor, and goal-driven macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! Nutrition Estimator
//!
//! Estimates a daily calorie target and a carbohydrate/protein/fat split.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use athleton_core::constants::nutrition::{
    FAT_LOSS_FACTOR, KCAL_PER_GRAM_CARB_PROTEIN, KCAL_PER_GRAM_FAT, MIFFLIN_FEMALE_OFFSET,
    MIFFLIN_MALE_OFFSET, MUSCLE_GAIN_FACTOR, PAL_HIGH, PAL_LOW, PAL_MODERATE,
};
use athleton_core::constants::plan::DEFAULT_AVAILABILITY_DAYS;
use athleton_core::models::{NutritionTargets, Profile, ProfileInput, Sex};
use serde::{Deserialize, Serialize};

use crate::classifier::{classify_objective, ObjectiveCategory};

/// Answers the estimator reads from a profile
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionInputs<'a> {
    /// Biological sex
    pub sex: Option<Sex>,
    /// Age in years
    pub age: Option<i32>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Training days per week
    pub availability_days: Option<i32>,
    /// Free-text objective
    pub objective: Option<&'a str>,
}

impl<'a> From<&'a Profile> for NutritionInputs<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            sex: profile.sex,
            age: profile.age,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            availability_days: profile.availability_days,
            objective: profile.objective.as_deref(),
        }
    }
}

impl<'a> From<&'a ProfileInput> for NutritionInputs<'a> {
    fn from(input: &'a ProfileInput) -> Self {
        Self {
            sex: input.sex,
            age: input.age,
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            availability_days: input.availability_days,
            objective: input.objective.as_deref(),
        }
    }
}

/// Intermediate values of the energy estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Physical activity level multiplier
    pub pal: f64,
    /// Total daily energy expenditure, BMR x PAL
    pub tdee: f64,
    /// Goal multiplier applied to TDEE
    pub goal_factor: f64,
    /// Final target, rounded to one decimal
    pub kcal_target: f64,
}

/// Daily macronutrient amounts in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl MacroGrams {
    /// Convert percentage targets to grams (4 kcal/g carbs and protein, 9 kcal/g fat)
    #[must_use]
    pub fn from_targets(targets: &NutritionTargets) -> Self {
        let kcal = targets.kcal_target;
        Self {
            carbs_g: round1(kcal * targets.carbs_pct / 100.0 / KCAL_PER_GRAM_CARB_PROTEIN),
            protein_g: round1(kcal * targets.protein_pct / 100.0 / KCAL_PER_GRAM_CARB_PROTEIN),
            fat_g: round1(kcal * targets.fat_pct / 100.0 / KCAL_PER_GRAM_FAT),
        }
    }
}

/// Basal metabolic rate via Mifflin-St Jeor
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + s,
/// with s = +5 for men and -161 otherwise. Non-binary and unspecified sex use
/// the female offset.
#[must_use]
pub fn mifflin_st_jeor(sex: Sex, age: i32, weight_kg: f64, height_cm: f64) -> f64 {
    let offset = match sex {
        Sex::Male => MIFFLIN_MALE_OFFSET,
        Sex::Female | Sex::Other => MIFFLIN_FEMALE_OFFSET,
    };
    10.0f64.mul_add(weight_kg, 6.25 * height_cm) - 5.0 * f64::from(age) + offset
}

/// Activity multiplier from weekly training days (missing means 3)
#[must_use]
pub fn activity_factor(availability_days: Option<i32>) -> f64 {
    match availability_days.unwrap_or(DEFAULT_AVAILABILITY_DAYS) {
        ..=3 => PAL_LOW,
        4..=5 => PAL_MODERATE,
        _ => PAL_HIGH,
    }
}

/// TDEE multiplier for the objective
#[must_use]
pub const fn goal_factor(category: ObjectiveCategory) -> f64 {
    match category {
        ObjectiveCategory::FatLoss => FAT_LOSS_FACTOR,
        ObjectiveCategory::MuscleGain => MUSCLE_GAIN_FACTOR,
        ObjectiveCategory::Running(_)
        | ObjectiveCategory::Triathlon
        | ObjectiveCategory::GeneralHealth => 1.0,
    }
}

/// Carbohydrate/protein/fat percentages for the objective, always summing to 100
#[must_use]
pub const fn macro_split(category: ObjectiveCategory) -> (f64, f64, f64) {
    if category.is_endurance() {
        return (50.0, 25.0, 25.0);
    }
    match category {
        ObjectiveCategory::MuscleGain => (40.0, 30.0, 30.0),
        ObjectiveCategory::FatLoss => (35.0, 35.0, 30.0),
        _ => (45.0, 30.0, 25.0),
    }
}

/// Energy breakdown, or `None` when sex, age, weight or height is missing
#[must_use]
pub fn estimate_energy(inputs: &NutritionInputs<'_>) -> Option<EnergyBreakdown> {
    let (Some(sex), Some(age), Some(weight_kg), Some(height_cm)) =
        (inputs.sex, inputs.age, inputs.weight_kg, inputs.height_cm)
    else {
        return None;
    };

    let bmr = mifflin_st_jeor(sex, age, weight_kg, height_cm);
    let pal = activity_factor(inputs.availability_days);
    let tdee = bmr * pal;
    let factor = goal_factor(classify_objective(inputs.objective));

    Some(EnergyBreakdown {
        bmr,
        pal,
        tdee,
        goal_factor: factor,
        kcal_target: round1(tdee * factor),
    })
}

/// Daily nutrition targets for a profile
///
/// Falls back to 2200 kcal at 45/30/25 when biometrics are incomplete.
#[must_use]
pub fn estimate_targets(inputs: &NutritionInputs<'_>) -> NutritionTargets {
    let Some(energy) = estimate_energy(inputs) else {
        return NutritionTargets::fallback();
    };

    let (carbs_pct, protein_pct, fat_pct) = macro_split(classify_objective(inputs.objective));
    NutritionTargets {
        kcal_target: energy.kcal_target,
        carbs_pct,
        protein_pct,
        fat_pct,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
