// ABOUTME: Core data models shared by the rules engine, storage backends, and services
// ABOUTME: Re-exports User, Profile, PlanItem, WorkoutLog and nutrition target types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! # Data Models
//!
//! Plain data carried between the intelligence crate, the storage layer and the
//! application services.
//!
//! ## Core Models
//!
//! - `User` / `UserContext`: account record and the authenticated handle
//! - `Profile` / `ProfileInput`: onboarding answers plus derived nutrition targets
//! - `PlanItem`: one weekday of the generated training week
//! - `WorkoutLog` / `NewWorkout`: append-only training log entries

mod nutrition;
mod plan;
mod profile;
mod user;
mod workout;

// Nutrition domain
pub use nutrition::NutritionTargets;

// Plan domain
pub use plan::PlanItem;

// Profile domain
pub use profile::{Profile, ProfileInput, Sex};

// User domain
pub use user::{User, UserContext};

// Workout domain
pub use workout::{DateRange, NewWorkout, WorkoutLog};
