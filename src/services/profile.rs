// ABOUTME: Profile service saving onboarding answers and regenerating the weekly plan
// ABOUTME: Recomputes nutrition targets on every save and gates commands on a complete profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use serde::Serialize;
use tracing::info;

use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{estimate_targets, needs_onboarding, plan_for_profile, NutritionInputs};
use crate::models::{PlanItem, Profile, ProfileInput, UserContext};

/// Result of a profile save
#[derive(Debug, Clone, Serialize)]
pub struct SavedProfile {
    /// Stored profile with fresh targets
    pub profile: Profile,
    /// Regenerated week, Monday first
    pub plan: Vec<PlanItem>,
}

/// Onboarding answers, nutrition targets and the weekly plan
#[derive(Clone)]
pub struct ProfileService {
    database: Database,
}

impl ProfileService {
    /// Create the service
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Validate and store the answers, then regenerate the plan
    ///
    /// Nutrition targets are recomputed from the answers and the user's week
    /// is replaced with exactly seven plan rows. Profile and plan are written
    /// in one transaction, so a failed save leaves the previous pair intact.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when validation fails, or a database error
    pub async fn save_profile(
        &self,
        ctx: &UserContext,
        input: ProfileInput,
    ) -> AppResult<SavedProfile> {
        input.validate()?;

        let targets = estimate_targets(&NutritionInputs::from(&input));
        let profile = Profile::from_input(ctx.user_id, input, targets);
        let plan = plan_for_profile(&profile);
        let profile = self
            .database
            .save_profile_with_plan(&profile, &plan)
            .await?;

        info!(
            user_id = %ctx.user_id,
            kcal = profile.targets.kcal_target,
            "Profile saved and weekly plan regenerated"
        );

        Ok(SavedProfile { profile, plan })
    }

    /// Stored profile, if any
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails
    pub async fn current_profile(&self, ctx: &UserContext) -> AppResult<Option<Profile>> {
        Ok(self.database.load_profile(ctx.user_id).await?)
    }

    /// Stored weekly plan, Monday first
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails
    pub async fn current_plan(&self, ctx: &UserContext) -> AppResult<Vec<PlanItem>> {
        Ok(self.database.load_week_plan(ctx.user_id).await?)
    }

    /// Profile of an onboarded user
    ///
    /// # Errors
    ///
    /// Returns `ProfileIncomplete` until objective, experience and at least two
    /// training days are saved
    pub async fn require_onboarded(&self, ctx: &UserContext) -> AppResult<Profile> {
        let profile = self.current_profile(ctx).await?;
        match profile {
            Some(profile) if !needs_onboarding(Some(&profile)) => Ok(profile),
            _ => Err(AppError::profile_incomplete(
                "Complete your athlete profile first with `athleton profile set`",
            )),
        }
    }
}
