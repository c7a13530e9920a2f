// ABOUTME: Password hashing and verification for local accounts
// ABOUTME: Runs bcrypt on the blocking thread pool so async callers are not stalled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

//! # Password Credentials
//!
//! Accounts store a bcrypt hash; plaintext passwords never reach storage.

use crate::errors::{AppError, AppResult};

/// Hash a plaintext password with bcrypt at the default cost
///
/// # Errors
///
/// Returns an internal error if hashing fails or the worker thread panics
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")).with_source(e))
}

/// Check a plaintext password against a stored bcrypt hash
///
/// A malformed stored hash counts as a mismatch.
///
/// # Errors
///
/// Returns an internal error if the worker thread panics
pub async fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    tokio::task::spawn_blocking(move || {
        bcrypt::verify(password, &password_hash).unwrap_or(false)
    })
    .await
    .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}
