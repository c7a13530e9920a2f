// ABOUTME: Plan command printing the stored weekly plan and daily nutrition targets
// ABOUTME: Requires a completed profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use athleton::services::AppServices;

use super::authenticate_onboarded;
use crate::helpers::display;
use crate::{Credentials, Result};

/// Show the weekly plan
pub async fn show(services: &AppServices, credentials: &Credentials) -> Result<()> {
    let (ctx, profile) = authenticate_onboarded(services, credentials).await?;
    let plan = services.profiles.current_plan(&ctx).await?;

    display::display_plan(&plan);
    println!();
    display::display_targets(&profile.targets);
    Ok(())
}
