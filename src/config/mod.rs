// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment-only configuration for storage, coaching and deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! Configuration module
//!
//! All settings come from environment variables; there are no configuration
//! files. Command-line flags override the database URL after loading.

/// Environment variable configuration
pub mod environment;

pub use environment::{AppConfig, CoachConfig, DatabaseUrl, Environment};
