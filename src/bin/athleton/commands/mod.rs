// ABOUTME: Command handlers for the athleton CLI
// ABOUTME: Shared login and onboarding gate used by user-scoped commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

pub mod account;
pub mod coach;
pub mod plan;
pub mod profile;
pub mod workouts;

use athleton::models::{Profile, UserContext};
use athleton::services::{AppServices, LoginRequest};

use crate::{Credentials, Result};

/// Log in with the command's credentials
pub async fn authenticate(services: &AppServices, credentials: &Credentials) -> Result<UserContext> {
    services
        .accounts
        .login(LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        })
        .await
}

/// Log in and require a completed profile
pub async fn authenticate_onboarded(
    services: &AppServices,
    credentials: &Credentials,
) -> Result<(UserContext, Profile)> {
    let ctx = authenticate(services, credentials).await?;
    let profile = services.profiles.require_onboarded(&ctx).await?;
    Ok((ctx, profile))
}
