// ABOUTME: Onboarding completeness predicate for athlete profiles
// ABOUTME: A profile needs onboarding until objective, experience, and availability are set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use athleton_core::constants::plan::MIN_AVAILABILITY_DAYS;
use athleton_core::models::Profile;

/// Whether the user still has to complete the onboarding questionnaire
///
/// True when the profile is absent, the objective or experience is blank, or
/// availability is missing or below the two-day minimum.
#[must_use]
pub fn needs_onboarding(profile: Option<&Profile>) -> bool {
    let Some(profile) = profile else {
        return true;
    };
    is_blank(profile.objective.as_deref())
        || is_blank(profile.experience.as_deref())
        || profile
            .availability_days
            .is_none_or(|days| days < MIN_AVAILABILITY_DAYS)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
