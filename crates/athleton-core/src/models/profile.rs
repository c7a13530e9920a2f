// ABOUTME: Athlete profile model holding onboarding answers and derived nutrition targets
// ABOUTME: ProfileInput carries unvalidated questionnaire answers into the profile service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NutritionTargets;
use crate::constants::{limits, plan};
use crate::errors::{AppError, AppResult};

/// Biological sex used by the energy estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or prefer not to say
    Other,
}

impl Sex {
    /// Parse sex from free text, anything unrecognised maps to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "man" | "hombre" | "masculino" => Self::Male,
            "f" | "female" | "woman" | "mujer" | "femenino" => Self::Female,
            _ => Self::Other,
        }
    }

    /// Storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored athlete profile, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user
    pub user_id: Uuid,
    /// Biological sex
    pub sex: Option<Sex>,
    /// Age in years
    pub age: Option<i32>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Free-text training objective
    pub objective: Option<String>,
    /// Free-text experience level
    pub experience: Option<String>,
    /// Training days per week
    pub availability_days: Option<i32>,
    /// Available equipment
    pub equipment: Option<String>,
    /// Injuries or limitations
    pub injuries: Option<String>,
    /// Average sleep per day in hours
    pub sleep_hours: Option<f64>,
    /// Perceived stress level
    pub stress_level: Option<String>,
    /// Dietary preference
    pub diet_preference: Option<String>,
    /// Allergies and intolerances
    pub diet_restrictions: Option<String>,
    /// Derived nutrition targets, recomputed on every save
    pub targets: NutritionTargets,
    /// Last time the profile was saved
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a profile from validated input and freshly computed targets
    #[must_use]
    pub fn from_input(user_id: Uuid, input: ProfileInput, targets: NutritionTargets) -> Self {
        Self {
            user_id,
            sex: input.sex,
            age: input.age,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            objective: input.objective,
            experience: input.experience,
            availability_days: input.availability_days,
            equipment: input.equipment,
            injuries: input.injuries,
            sleep_hours: input.sleep_hours,
            stress_level: input.stress_level,
            diet_preference: input.diet_preference,
            diet_restrictions: input.diet_restrictions,
            targets,
            updated_at: Utc::now(),
        }
    }
}

/// Questionnaire answers submitted for a profile save
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Biological sex
    pub sex: Option<Sex>,
    /// Age in years
    pub age: Option<i32>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Free-text training objective
    pub objective: Option<String>,
    /// Free-text experience level
    pub experience: Option<String>,
    /// Training days per week
    pub availability_days: Option<i32>,
    /// Available equipment
    pub equipment: Option<String>,
    /// Injuries or limitations
    pub injuries: Option<String>,
    /// Average sleep per day in hours
    pub sleep_hours: Option<f64>,
    /// Perceived stress level
    pub stress_level: Option<String>,
    /// Dietary preference
    pub diet_preference: Option<String>,
    /// Allergies and intolerances
    pub diet_restrictions: Option<String>,
}

impl ProfileInput {
    /// Prefill from an existing profile so partial edits keep earlier answers
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            sex: profile.sex,
            age: profile.age,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            objective: profile.objective.clone(),
            experience: profile.experience.clone(),
            availability_days: profile.availability_days,
            equipment: profile.equipment.clone(),
            injuries: profile.injuries.clone(),
            sleep_hours: profile.sleep_hours,
            stress_level: profile.stress_level.clone(),
            diet_preference: profile.diet_preference.clone(),
            diet_restrictions: profile.diet_restrictions.clone(),
        }
    }

    /// Check the answers against the questionnaire bounds
    ///
    /// Objective, experience and availability are required; biometrics are
    /// optional because the nutrition estimator falls back when they are missing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if is_blank(self.objective.as_deref()) {
            return Err(AppError::invalid_input("An objective is required"));
        }
        if is_blank(self.experience.as_deref()) {
            return Err(AppError::invalid_input("An experience level is required"));
        }
        match self.availability_days {
            None => {
                return Err(AppError::invalid_input(
                    "Training availability (days per week) is required",
                ))
            }
            Some(days)
                if !(plan::MIN_AVAILABILITY_DAYS..=plan::MAX_AVAILABILITY_DAYS).contains(&days) =>
            {
                return Err(AppError::invalid_input(format!(
                    "Availability must be between {} and {} days per week",
                    plan::MIN_AVAILABILITY_DAYS,
                    plan::MAX_AVAILABILITY_DAYS
                )));
            }
            Some(_) => {}
        }
        if let Some(age) = self.age {
            if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&age) {
                return Err(AppError::invalid_input(format!(
                    "Age must be between {} and {}",
                    limits::MIN_AGE,
                    limits::MAX_AGE
                )));
            }
        }
        check_range(
            "Height (cm)",
            self.height_cm,
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM,
        )?;
        check_range(
            "Weight (kg)",
            self.weight_kg,
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG,
        )?;
        check_range(
            "Sleep (hours)",
            self.sleep_hours,
            limits::MIN_SLEEP_HOURS,
            limits::MAX_SLEEP_HOURS,
        )?;
        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn check_range(field: &str, value: Option<f64>, min: f64, max: f64) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < min || v > max => Err(AppError::invalid_input(format!(
            "{field} must be between {min} and {max}"
        ))),
        _ => Ok(()),
    }
}
