// ABOUTME: Main library entry point for the AthletON coaching application
// ABOUTME: Wires configuration, logging, storage, accounts, tracking and the AI coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

#![deny(unsafe_code)]

//! # AthletON
//!
//! Personal training application: users register, complete an onboarding
//! questionnaire, and receive a generated weekly training plan plus daily
//! nutrition targets. Workouts are logged to an append-only journal that feeds
//! weekly progress summaries, and an optional LLM coach answers free-text
//! questions using the athlete's profile and recent training.
//!
//! ## Architecture
//!
//! - **athleton-core**: errors, constants and data models
//! - **athleton-intelligence**: the deterministic plan/nutrition rules engine
//! - **this crate**: storage backends, services, LLM client and the CLI
//!
//! ## Usage
//!
//! ```bash
//! athleton register --email ana@example.com --password s3cretpass --name Ana
//! athleton profile set --email ana@example.com --password s3cretpass \
//!     --objective "Media maratón" --experience Intermedio --days 5
//! athleton plan --email ana@example.com --password s3cretpass
//! ```

/// Configuration management
pub mod config;

/// Logging configuration and structured logging
pub mod logging;

/// Database abstraction with SQLite and PostgreSQL backends
pub mod database_plugins;

/// Password hashing
pub mod auth;

/// LLM provider abstraction and the `OpenAI`-compatible client
pub mod llm;

/// Coaching assistant built on top of an optional LLM provider
pub mod coach;

/// Account, profile and tracking services
pub mod services;

/// Error types shared across the workspace
pub use athleton_core::errors;

/// Application constants
pub use athleton_core::constants;

/// Core data models
pub use athleton_core::models;

/// Plan and nutrition rules engine
pub use athleton_intelligence as intelligence;
