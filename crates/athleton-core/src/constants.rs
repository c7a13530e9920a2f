// ABOUTME: Application-wide constants for nutrition defaults, validation bounds, and configuration
// ABOUTME: Centralizes magic numbers shared by the rules engine, services, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! # Constants Module
//!
//! Hardcoded defaults and environment variable names, grouped by domain.

/// Nutrition estimator defaults
pub mod nutrition {
    /// Calorie target used when biometrics are incomplete
    pub const FALLBACK_KCAL: f64 = 2200.0;
    /// Carbohydrate share used when biometrics are incomplete
    pub const FALLBACK_CARBS_PCT: f64 = 45.0;
    /// Protein share used when biometrics are incomplete
    pub const FALLBACK_PROTEIN_PCT: f64 = 30.0;
    /// Fat share used when biometrics are incomplete
    pub const FALLBACK_FAT_PCT: f64 = 25.0;

    /// Mifflin-St Jeor sex offset for men
    pub const MIFFLIN_MALE_OFFSET: f64 = 5.0;
    /// Mifflin-St Jeor sex offset for women and unspecified sex
    pub const MIFFLIN_FEMALE_OFFSET: f64 = -161.0;

    /// PAL for up to 3 training days per week
    pub const PAL_LOW: f64 = 1.45;
    /// PAL for 4-5 training days per week
    pub const PAL_MODERATE: f64 = 1.60;
    /// PAL for 6-7 training days per week
    pub const PAL_HIGH: f64 = 1.75;

    /// Deficit multiplier for fat-loss objectives
    pub const FAT_LOSS_FACTOR: f64 = 0.85;
    /// Surplus multiplier for muscle-gain objectives
    pub const MUSCLE_GAIN_FACTOR: f64 = 1.10;

    /// Energy density of carbohydrates and protein (kcal per gram)
    pub const KCAL_PER_GRAM_CARB_PROTEIN: f64 = 4.0;
    /// Energy density of fat (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Training plan defaults
pub mod plan {
    /// Days in a plan week
    pub const DAYS_PER_WEEK: u8 = 7;
    /// Minimum training days a plan is generated for
    pub const MIN_AVAILABILITY_DAYS: i32 = 2;
    /// Maximum training days a plan is generated for
    pub const MAX_AVAILABILITY_DAYS: i32 = 7;
    /// Availability assumed when the profile has none
    pub const DEFAULT_AVAILABILITY_DAYS: i32 = 3;
}

/// Input validation bounds taken from the onboarding questionnaire
pub mod limits {
    /// Youngest supported athlete
    pub const MIN_AGE: i32 = 12;
    /// Oldest supported athlete
    pub const MAX_AGE: i32 = 90;
    /// Height range in centimetres
    pub const MIN_HEIGHT_CM: f64 = 120.0;
    /// Height range in centimetres
    pub const MAX_HEIGHT_CM: f64 = 230.0;
    /// Weight range in kilograms
    pub const MIN_WEIGHT_KG: f64 = 35.0;
    /// Weight range in kilograms
    pub const MAX_WEIGHT_KG: f64 = 250.0;
    /// Sleep range in hours per day
    pub const MIN_SLEEP_HOURS: f64 = 3.0;
    /// Sleep range in hours per day
    pub const MAX_SLEEP_HOURS: f64 = 12.0;
    /// Lowest rate of perceived exertion
    pub const MIN_RPE: i32 = 1;
    /// Highest rate of perceived exertion
    pub const MAX_RPE: i32 = 10;
    /// Shortest accepted password
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Longest accepted password in bytes; bcrypt ignores anything past 72
    pub const MAX_PASSWORD_BYTES: usize = 72;
}

/// Progress and coaching windows
pub mod windows {
    /// Default history window for the CLI
    pub const HISTORY_DAYS: i64 = 30;
    /// Window used for progress insights
    pub const INSIGHT_DAYS: i64 = 56;
    /// Window of workouts shared with the coach
    pub const COACH_CONTEXT_DAYS: i64 = 60;
    /// Maximum workout rows included in a coach prompt
    pub const COACH_CONTEXT_ROWS: usize = 50;
}

/// Coaching assistant defaults
pub mod coach {
    /// Default chat-completion model
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    /// Default `OpenAI`-compatible endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
    /// Sampling temperature for coaching answers
    pub const TEMPERATURE: f32 = 0.4;
    /// Output token ceiling for coaching answers
    pub const MAX_TOKENS: u32 = 450;
}

/// Environment variable names
pub mod env_vars {
    /// Full database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Embedded database file path, used when `DATABASE_URL` is unset
    pub const ATHLETON_DB: &str = "ATHLETON_DB";
    /// Credential that enables the coaching assistant
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// Override for the chat-completion endpoint
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Override for the coaching model
    pub const COACH_MODEL: &str = "COACH_MODEL";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Storage defaults
pub mod storage {
    /// Embedded database path used when nothing is configured
    pub const DEFAULT_DB_PATH: &str = "./data/athleton.db";
}

/// Service names for structured logging
pub mod service_names {
    /// Name reported in log records
    pub const ATHLETON: &str = "athleton";
}
