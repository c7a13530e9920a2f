// ABOUTME: Weekly training plan generator driven by objective, experience, and availability
// ABOUTME: Selects a fixed 7-slot session template and fills trailing days with rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! Weekly Plan Generator
//!
//! Every objective category owns a fixed seven-slot template. Availability
//! decides how many leading slots are kept; the remaining days become rest.
//! Generation is pure: the same inputs always yield the same week.

use athleton_core::constants::plan::{
    DAYS_PER_WEEK, DEFAULT_AVAILABILITY_DAYS, MAX_AVAILABILITY_DAYS, MIN_AVAILABILITY_DAYS,
};
use athleton_core::models::{PlanItem, Profile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{
    classify_experience, classify_objective, ExperienceLevel, ObjectiveCategory,
};

/// Kind of training session in a plan slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Full-body strength, used for beginners
    StrengthFullBody,
    /// Push/pull/legs split, used past beginner level
    StrengthSplit,
    /// Plain strength session in triathlon weeks
    Strength,
    /// Easy aerobic session in zone 2
    EasyCardio,
    /// Long aerobic session in zone 2
    LongCardio,
    /// High-intensity intervals
    Hiit,
    /// Mobility and core work
    Mobility,
    /// Threshold tempo run
    Tempo,
    /// VO2max intervals
    Intervals,
    /// Swim drills
    SwimTechnique,
    /// Swim speed set
    SwimSpeed,
    /// Easy ride in zone 2
    BikeZ2,
    /// Bike followed immediately by a run
    Brick,
    /// Easy run in zone 2
    RunZ2,
    /// Rest or active recovery
    Rest,
}

impl SessionKind {
    /// Title shown in the plan
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::StrengthFullBody => "Strength (full body)",
            Self::StrengthSplit => "Strength (push/pull/legs)",
            Self::Strength => "Strength",
            Self::EasyCardio => "Cardio Z2 (easy)",
            Self::LongCardio => "Long cardio Z2",
            Self::Hiit => "HIIT (intervals)",
            Self::Mobility => "Mobility + core",
            Self::Tempo => "Tempo (threshold)",
            Self::Intervals => "Intervals (VO2)",
            Self::SwimTechnique => "Swim technique",
            Self::SwimSpeed => "Swim speed",
            Self::BikeZ2 => "Bike Z2",
            Self::Brick => "Brick (bike+run)",
            Self::RunZ2 => "Run Z2",
            Self::Rest => "Rest / active recovery",
        }
    }

    /// Session details, prefixed with the experience tier where intensity scales with it
    #[must_use]
    pub fn details(&self, level: ExperienceLevel) -> String {
        let tier = level.label();
        match self {
            Self::StrengthFullBody => {
                format!("{tier}: 3x (leg press/row/press) 8-12 reps, 60-90'' rest; core 10'.")
            }
            Self::StrengthSplit | Self::Strength => {
                format!("{tier}: Push/Pull/Legs 3-4x6-10; core 10'.")
            }
            Self::Hiit => format!("{tier}: 8-12 x (1' hard / 1' easy)."),
            Self::LongCardio => format!("{tier}: 60-90' continuous Z2."),
            Self::EasyCardio | Self::RunZ2 | Self::BikeZ2 => {
                format!("{tier}: 30-50' comfortable (able to talk in sentences).")
            }
            Self::Tempo => format!("{tier}: 2x15' at threshold (RPE 7-8), 5' recovery."),
            Self::Intervals => format!("{tier}: 5-8x3' hard (RPE 8-9) / 2' easy."),
            Self::Mobility => "Hips/shoulders/thoracic spine 20', breathing 5'.".to_owned(),
            Self::SwimTechnique | Self::SwimSpeed => {
                "Technique 6x50m, pull 4x100m, kick 8x25m.".to_owned()
            }
            Self::Brick => "Bike 40' Z2 + run 15' Z2.".to_owned(),
            Self::Rest => String::new(),
        }
    }
}

/// Seven-slot session template for an objective and experience tier
#[must_use]
pub fn weekly_template(category: ObjectiveCategory, level: ExperienceLevel) -> [SessionKind; 7] {
    use SessionKind::{
        Brick, BikeZ2, EasyCardio, Hiit, Intervals, LongCardio, Mobility, Rest, RunZ2, Strength,
        StrengthFullBody, StrengthSplit, SwimSpeed, SwimTechnique, Tempo,
    };

    let strength = if level == ExperienceLevel::Beginner {
        StrengthFullBody
    } else {
        StrengthSplit
    };

    match category {
        ObjectiveCategory::MuscleGain => [
            strength, strength, EasyCardio, strength, Mobility, LongCardio, Rest,
        ],
        ObjectiveCategory::FatLoss => [
            strength, Hiit, Mobility, strength, EasyCardio, LongCardio, Rest,
        ],
        ObjectiveCategory::Running(distance) => {
            let quality = if distance.is_marathon() { Tempo } else { Intervals };
            [
                EasyCardio, strength, quality, EasyCardio, strength, LongCardio, Rest,
            ]
        }
        ObjectiveCategory::Triathlon => [
            SwimTechnique, Strength, BikeZ2, Brick, SwimSpeed, RunZ2, Rest,
        ],
        ObjectiveCategory::GeneralHealth => [
            strength, EasyCardio, Mobility, strength, Hiit, LongCardio, Rest,
        ],
    }
}

/// Clamp availability into the supported 2-7 day range, missing means 3
#[must_use]
pub fn clamp_availability(availability_days: Option<i32>) -> u8 {
    let days = availability_days
        .unwrap_or(DEFAULT_AVAILABILITY_DAYS)
        .clamp(MIN_AVAILABILITY_DAYS, MAX_AVAILABILITY_DAYS);
    u8::try_from(days).unwrap_or(DAYS_PER_WEEK)
}

/// Generate the 7-day plan for the given answers
///
/// Weekday `i` carries `template[i]` when `i < availability_days`, otherwise rest.
#[must_use]
pub fn generate_weekly_plan(
    objective: Option<&str>,
    experience: Option<&str>,
    availability_days: Option<i32>,
) -> Vec<PlanItem> {
    let days = clamp_availability(availability_days);
    let category = classify_objective(objective);
    let level = classify_experience(experience);
    let template = weekly_template(category, level);

    debug!(
        category = category.label(),
        level = level.label(),
        days,
        "Generating weekly plan"
    );

    (0..DAYS_PER_WEEK)
        .zip(template)
        .map(|(weekday, slot)| {
            let kind = if weekday < days { slot } else { SessionKind::Rest };
            PlanItem::new(weekday, kind.title(), kind.details(level))
        })
        .collect()
}

/// Generate the plan for a stored profile
#[must_use]
pub fn plan_for_profile(profile: &Profile) -> Vec<PlanItem> {
    generate_weekly_plan(
        profile.objective.as_deref(),
        profile.experience.as_deref(),
        profile.availability_days,
    )
}
