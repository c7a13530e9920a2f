// ABOUTME: Account commands for registration, login and status
// ABOUTME: Status reports onboarding state without requiring a complete profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use athleton::intelligence::needs_onboarding;
use athleton::services::{AppServices, RegisterRequest};
use tracing::info;

use super::authenticate;
use crate::helpers::display;
use crate::{Credentials, Result};

/// Create an account
pub async fn register(
    services: &AppServices,
    email: String,
    password: String,
    name: Option<String>,
) -> Result<()> {
    let ctx = services
        .accounts
        .register(RegisterRequest {
            email,
            password,
            display_name: name,
        })
        .await?;
    info!(user_id = %ctx.user_id, "Account created");

    println!("Account created for {}.", ctx.email);
    println!("Next: complete your profile with `athleton profile set`.");
    Ok(())
}

/// Verify credentials
pub async fn login(services: &AppServices, credentials: &Credentials) -> Result<()> {
    let ctx = authenticate(services, credentials).await?;
    println!("Welcome back, {}!", ctx.greeting_name());
    Ok(())
}

/// Show onboarding state and targets
pub async fn status(services: &AppServices, credentials: &Credentials) -> Result<()> {
    let ctx = authenticate(services, credentials).await?;
    let profile = services.profiles.current_profile(&ctx).await?;

    println!("Signed in as {}", ctx.greeting_name());
    if needs_onboarding(profile.as_ref()) {
        println!("Profile: incomplete. Run `athleton profile set` to finish onboarding.");
        return Ok(());
    }

    if let Some(profile) = profile {
        println!("Profile: complete");
        display::display_targets(&profile.targets);
    }
    Ok(())
}
