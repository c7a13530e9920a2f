// ABOUTME: Coaching assistant that answers athlete questions through an optional LLM provider
// ABOUTME: Builds the profile and workout context and degrades to inline messages instead of erroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! # Coaching Assistant
//!
//! Wraps an [`LlmProvider`] with the athlete context. `ask` always returns
//! text: a disabled notice when no provider is configured, the model's
//! answer on success, or an inline explanation when the call fails.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::CoachConfig;
use crate::constants::{coach, env_vars, windows};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider, OpenAiCompatibleProvider};
use crate::models::{Profile, WorkoutLog};

const SYSTEM_PROMPT: &str = "Expert coach. Be specific, brief and safe.";

const INSTRUCTIONS: &str =
    "You are a trainer and nutritionist. Answer with concrete, safe and personalised steps.";

/// Question used for the progress summary shown with insights
pub const PROGRESS_SUMMARY_QUESTION: &str =
    "Summarise my progress and give 3 actionable recommendations.";

/// LLM-backed coach; never returns an error to the caller
#[derive(Clone)]
pub struct CoachingAssistant {
    provider: Option<Arc<dyn LlmProvider>>,
    model: String,
    disabled_reason: String,
}

impl CoachingAssistant {
    /// Assistant without a provider
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            provider: None,
            model: coach::DEFAULT_MODEL.to_owned(),
            disabled_reason: format!("{} is not set", env_vars::OPENAI_API_KEY),
        }
    }

    /// Build the assistant from configuration; disabled without a credential
    #[must_use]
    pub fn from_config(config: &CoachConfig) -> Self {
        if !config.is_enabled() {
            debug!("Coach disabled: no credential configured");
            return Self::disabled();
        }

        match OpenAiCompatibleProvider::from_coach_config(config) {
            Ok(provider) => {
                info!(model = %config.model, base_url = %config.base_url, "Coach enabled");
                Self {
                    provider: Some(Arc::new(provider)),
                    model: config.model.clone(),
                    disabled_reason: String::new(),
                }
            }
            Err(e) => {
                warn!("Coach disabled: {}", e);
                Self {
                    disabled_reason: e.message,
                    ..Self::disabled()
                }
            }
        }
    }

    /// Assistant backed by an explicit provider, using its default model
    #[must_use]
    pub fn with_provider(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            model: provider.default_model().to_owned(),
            provider: Some(provider),
            disabled_reason: String::new(),
        }
    }

    /// Whether a provider is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Message returned while no provider is configured
    #[must_use]
    pub fn disabled_message(&self) -> String {
        format!(
            "(AI coach disabled) {}. Set {} to enable it.",
            self.disabled_reason,
            env_vars::OPENAI_API_KEY
        )
    }

    /// Chat request for a question with the athlete's context
    #[must_use]
    pub fn build_request(
        &self,
        question: &str,
        profile: Option<&Profile>,
        workouts: &[WorkoutLog],
    ) -> ChatRequest {
        let user_message = format!(
            "{INSTRUCTIONS}\nQuestion: {}\n\nContext:\n{}\n",
            question.trim(),
            build_context(profile, workouts)
        );

        ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_message),
        ])
        .with_model(self.model.clone())
        .with_temperature(coach::TEMPERATURE)
        .with_max_tokens(coach::MAX_TOKENS)
    }

    /// Answer a question; failures come back as explanatory text
    pub async fn ask(
        &self,
        question: &str,
        profile: Option<&Profile>,
        workouts: &[WorkoutLog],
    ) -> String {
        let Some(provider) = &self.provider else {
            return self.disabled_message();
        };

        let request = self.build_request(question, profile, workouts);
        match provider.complete(&request).await {
            Ok(response) => {
                debug!(
                    provider = provider.name(),
                    chars = response.content.len(),
                    "Coach answered"
                );
                response.content.trim().to_owned()
            }
            Err(e) => {
                warn!(provider = provider.name(), "Coach call failed: {}", e);
                format!("Could not reach the AI coach: {}", e.message)
            }
        }
    }
}

/// Prompt context: profile answers followed by the most recent workouts
#[must_use]
pub fn build_context(profile: Option<&Profile>, workouts: &[WorkoutLog]) -> String {
    let mut context = String::from("Profile:\n");
    match profile {
        Some(profile) => describe_profile(&mut context, profile),
        None => context.push_str("- (no profile yet)\n"),
    }

    context.push_str("\nRecent workouts:\n");
    if workouts.is_empty() {
        context.push_str("- (none logged)\n");
    }
    for workout in workouts.iter().take(windows::COACH_CONTEXT_ROWS) {
        let _ = write!(
            context,
            "- {} | {} | {:.0} min | {:.1} km | RPE {}",
            workout.workout_date,
            workout.workout_type,
            workout.duration_min,
            workout.distance_km,
            workout.rpe
        );
        if let Some(notes) = workout.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            let _ = write!(context, " | {}", notes.trim());
        }
        context.push('\n');
    }
    context
}

fn describe_profile(out: &mut String, profile: &Profile) {
    let mut line = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            let _ = writeln!(out, "- {label}: {value}");
        }
    };

    line("sex", profile.sex.as_ref().map(ToString::to_string));
    line("age", profile.age.as_ref().map(ToString::to_string));
    line("height_cm", profile.height_cm.as_ref().map(ToString::to_string));
    line("weight_kg", profile.weight_kg.as_ref().map(ToString::to_string));
    line("objective", profile.objective.clone());
    line("experience", profile.experience.clone());
    line(
        "availability_days",
        profile.availability_days.as_ref().map(ToString::to_string),
    );
    line("equipment", profile.equipment.clone());
    line("injuries", profile.injuries.clone());
    line("sleep_hours", profile.sleep_hours.as_ref().map(ToString::to_string));
    line("stress_level", profile.stress_level.clone());
    line("diet_preference", profile.diet_preference.clone());
    line("diet_restrictions", profile.diet_restrictions.clone());
    line(
        "targets",
        Some(format!(
            "{:.0} kcal, carbs {}% / protein {}% / fat {}%",
            profile.targets.kcal_target,
            profile.targets.carbs_pct,
            profile.targets.protein_pct,
            profile.targets.fat_pct
        )),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn workout(day: u32) -> WorkoutLog {
        WorkoutLog {
            id: i64::from(day),
            workout_date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            workout_type: "Run".to_owned(),
            duration_min: 40.0,
            distance_km: 7.5,
            rpe: 6,
            notes: Some("felt good".to_owned()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_context_lists_workouts() {
        let context = build_context(None, &[workout(10)]);
        assert!(context.contains("(no profile yet)"));
        assert!(context.contains("- 2025-03-10 | Run | 40 min | 7.5 km | RPE 6 | felt good"));
    }

    #[test]
    fn test_context_caps_rows() {
        let workouts: Vec<WorkoutLog> = (0..60).map(|i| workout(1 + i % 28)).collect();
        let context = build_context(None, &workouts);
        let rows = context.lines().filter(|l| l.contains("| Run |")).count();
        assert_eq!(rows, windows::COACH_CONTEXT_ROWS);
    }

    #[test]
    fn test_request_parameters() {
        let request = CoachingAssistant::disabled().build_request("How do I taper?", None, &[]);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert!(request.messages[1].content.contains("Question: How do I taper?"));
        assert_eq!(request.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(request.max_tokens, Some(450));
        assert!((request.temperature.unwrap() - 0.4).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_disabled_assistant_mentions_credential() {
        let answer = CoachingAssistant::disabled().ask("Anything?", None, &[]).await;
        assert!(answer.contains("OPENAI_API_KEY"));
    }
}
