// ABOUTME: Free-text objective and experience classifier shared by plan and nutrition rules
// ABOUTME: Ordered case-insensitive keyword matching with a general-health fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! Objective strings come from a questionnaire that mixes Spanish and English,
//! so keyword lists carry both. Categories are checked in declaration order and
//! the first hit wins: "perder grasa y ganar músculo" is a muscle-gain goal.

use serde::{Deserialize, Serialize};

const MUSCLE_KEYWORDS: &[&str] = &["múscul", "muscul", "hipertrof", "hypertroph", "muscle"];
// English entries are phrases: bare "fat" or "lose" would catch "fatigue" or "closer"
const FAT_LOSS_KEYWORDS: &[&str] = &[
    "grasa",
    "perder",
    "fat loss",
    "lose fat",
    "lose weight",
    "burn fat",
    "weight loss",
];
const RUNNING_KEYWORDS: &[&str] = &["5k", "10k", "marat"];
const HALF_MARKERS: &[&str] = &["media", "medio", "half"];
const TRIATHLON_KEYWORDS: &[&str] = &["triatl", "triath"];

const BEGINNER_KEYWORDS: &[&str] = &["princip", "beginner", "novice"];
const INTERMEDIATE_KEYWORDS: &[&str] = &["inter"];
const ADVANCED_KEYWORDS: &[&str] = &["avanz", "advanced", "expert"];

/// Target race for running objectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    /// 5 kilometres
    FiveK,
    /// 10 kilometres
    TenK,
    /// 21.1 kilometres
    HalfMarathon,
    /// 42.2 kilometres
    Marathon,
}

impl RaceDistance {
    /// Whether the race uses the marathon block (tempo instead of VO2 intervals)
    #[must_use]
    pub const fn is_marathon(self) -> bool {
        matches!(self, Self::HalfMarathon | Self::Marathon)
    }
}

/// Training objective category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveCategory {
    /// Hypertrophy
    MuscleGain,
    /// Body fat reduction
    FatLoss,
    /// Running race preparation
    Running(RaceDistance),
    /// Triathlon preparation
    Triathlon,
    /// Anything else
    GeneralHealth,
}

impl ObjectiveCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MuscleGain => "Muscle gain",
            Self::FatLoss => "Fat loss",
            Self::Running(RaceDistance::FiveK) => "Running (5K)",
            Self::Running(RaceDistance::TenK) => "Running (10K)",
            Self::Running(RaceDistance::HalfMarathon) => "Running (half marathon)",
            Self::Running(RaceDistance::Marathon) => "Running (marathon)",
            Self::Triathlon => "Triathlon",
            Self::GeneralHealth => "General health",
        }
    }

    /// Whether the category is an endurance goal
    #[must_use]
    pub const fn is_endurance(&self) -> bool {
        matches!(self, Self::Running(_) | Self::Triathlon)
    }
}

/// Training experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    Beginner,
    /// Some structured training history
    Intermediate,
    /// Long structured training history
    Advanced,
}

impl ExperienceLevel {
    /// Tier label used as the prefix of session details
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classify a free-text objective
#[must_use]
pub fn classify_objective(objective: Option<&str>) -> ObjectiveCategory {
    let text = objective.unwrap_or_default().to_lowercase();

    if contains_any(&text, MUSCLE_KEYWORDS) {
        ObjectiveCategory::MuscleGain
    } else if contains_any(&text, FAT_LOSS_KEYWORDS) {
        ObjectiveCategory::FatLoss
    } else if contains_any(&text, RUNNING_KEYWORDS) {
        let distance = if text.contains("marat") {
            if contains_any(&text, HALF_MARKERS) {
                RaceDistance::HalfMarathon
            } else {
                RaceDistance::Marathon
            }
        } else if text.contains("10k") {
            RaceDistance::TenK
        } else {
            RaceDistance::FiveK
        };
        ObjectiveCategory::Running(distance)
    } else if contains_any(&text, TRIATHLON_KEYWORDS) {
        ObjectiveCategory::Triathlon
    } else {
        ObjectiveCategory::GeneralHealth
    }
}

/// Classify a free-text experience level, defaulting to beginner
#[must_use]
pub fn classify_experience(experience: Option<&str>) -> ExperienceLevel {
    let text = experience.unwrap_or_default().to_lowercase();

    if contains_any(&text, BEGINNER_KEYWORDS) {
        ExperienceLevel::Beginner
    } else if contains_any(&text, INTERMEDIATE_KEYWORDS) {
        ExperienceLevel::Intermediate
    } else if contains_any(&text, ADVANCED_KEYWORDS) {
        ExperienceLevel::Advanced
    } else {
        ExperienceLevel::Beginner
    }
}
