// ABOUTME: Coach command forwarding a free-text question to the AI coach
// ABOUTME: Prints the answer or the coach's inline explanation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use athleton::errors::AppError;
use athleton::services::AppServices;
use chrono::NaiveDate;

use super::authenticate_onboarded;
use crate::{Credentials, Result};

/// Ask the coach a question
pub async fn ask(
    services: &AppServices,
    credentials: &Credentials,
    question: &str,
    today: NaiveDate,
) -> Result<()> {
    if question.trim().is_empty() {
        return Err(AppError::invalid_input("A question is required"));
    }

    let (ctx, _) = authenticate_onboarded(services, credentials).await?;
    let answer = services.coaching.ask(&ctx, question, today).await?;
    println!("{answer}");
    Ok(())
}
