// ABOUTME: Core types and constants for the AthletON coaching app
// ABOUTME: Foundation crate with error handling, data models, and shared defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

#![deny(unsafe_code)]

//! # AthletON Core
//!
//! Shared types used by the rules engine and the application crate. This crate
//! has no I/O and changes rarely.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `AppResult` alias
//! - **constants**: nutrition fallbacks, validation bounds, environment variable names
//! - **models**: users, profiles, plan items, workout logs and nutrition targets

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (User, Profile, PlanItem, WorkoutLog)
pub mod models;
