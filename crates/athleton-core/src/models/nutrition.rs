// ABOUTME: Daily nutrition target model derived from the athlete profile
// ABOUTME: Calorie target plus carbohydrate/protein/fat percentage split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use serde::{Deserialize, Serialize};

use crate::constants::nutrition::{
    FALLBACK_CARBS_PCT, FALLBACK_FAT_PCT, FALLBACK_KCAL, FALLBACK_PROTEIN_PCT,
};

/// Daily energy and macronutrient targets
///
/// The three percentages always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Daily calorie target (kcal), rounded to one decimal
    pub kcal_target: f64,
    /// Share of calories from carbohydrates
    pub carbs_pct: f64,
    /// Share of calories from protein
    pub protein_pct: f64,
    /// Share of calories from fat
    pub fat_pct: f64,
}

impl NutritionTargets {
    /// Targets used when biometrics are incomplete
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            kcal_target: FALLBACK_KCAL,
            carbs_pct: FALLBACK_CARBS_PCT,
            protein_pct: FALLBACK_PROTEIN_PCT,
            fat_pct: FALLBACK_FAT_PCT,
        }
    }

    /// Sum of the three macro percentages
    #[must_use]
    pub fn total_pct(&self) -> f64 {
        self.carbs_pct + self.protein_pct + self.fat_pct
    }
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self::fallback()
    }
}
