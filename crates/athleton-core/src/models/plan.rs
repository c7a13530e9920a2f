// ABOUTME: Weekly training plan row model
// ABOUTME: One PlanItem per weekday, replaced as a whole week on regeneration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use serde::{Deserialize, Serialize};

/// Weekday labels indexed by `PlanItem::weekday`
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One day of the generated training week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Day index, 0 = Monday through 6 = Sunday
    pub weekday: u8,
    /// Session title
    pub title: String,
    /// Session details; empty on rest days
    pub details: String,
}

impl PlanItem {
    /// Create a plan item
    #[must_use]
    pub fn new(weekday: u8, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            weekday,
            title: title.into(),
            details: details.into(),
        }
    }

    /// English weekday name
    #[must_use]
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES
            .get(usize::from(self.weekday))
            .copied()
            .unwrap_or("Unknown")
    }
}
