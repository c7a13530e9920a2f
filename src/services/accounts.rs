// ABOUTME: Account registration and login with bcrypt password hashes
// ABOUTME: Normalises emails so duplicates are detected case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use tracing::{info, warn};

use crate::auth::{hash_password, verify_password};
use crate::constants::limits::{MAX_PASSWORD_BYTES, MIN_PASSWORD_LENGTH};
use crate::database_plugins::{factory::Database, is_unique_violation, DatabaseProvider};
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserContext};

const DUPLICATE_EMAIL: &str = "An account with that email already exists";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// New account details
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Email address, normalised before storage
    pub email: String,
    /// Plaintext password, at least 8 characters
    pub password: String,
    /// Optional display name
    pub display_name: Option<String>,
}

/// Login credentials
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Email address in any case
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Registration and login
#[derive(Clone)]
pub struct AccountService {
    database: Database,
}

impl AccountService {
    /// Create the service
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank or malformed email or a password
    /// shorter than 8 characters or longer than 72 bytes, and `ResourceAlreadyExists` when the email is taken
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserContext> {
        let email = User::normalize_email(&request.email);
        info!("User registration attempt for email: {}", email);

        if email.is_empty() {
            return Err(AppError::invalid_input("An email address is required"));
        }
        if !is_valid_email(&email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if request.password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::invalid_input(format!(
                "Password must be at most {MAX_PASSWORD_BYTES} bytes"
            )));
        }

        if self.database.get_user_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists(DUPLICATE_EMAIL));
        }

        let password_hash = hash_password(&request.password).await?;
        let display_name = request
            .display_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        let user = User::new(email, password_hash, display_name);

        match self.database.create_user(&user).await {
            Ok(user_id) => {
                info!("User registered successfully: {} ({})", user.email, user_id);
                Ok(user.context())
            }
            // Lost a race with a concurrent registration for the same email
            Err(e) if is_unique_violation(&e) => Err(AppError::already_exists(DUPLICATE_EMAIL)),
            Err(e) => Err(e.into()),
        }
    }

    /// Authenticate and return the user handle
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for an unknown email or a wrong password
    pub async fn login(&self, request: LoginRequest) -> AppResult<UserContext> {
        let Some(user) = self.database.get_user_by_email(&request.email).await? else {
            warn!("Login attempt for unknown email");
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        if !verify_password(&request.password, &user.password_hash).await? {
            warn!("Invalid password for user: {}", user.email);
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        info!("User logged in: {}", user.id);
        Ok(user.context())
    }
}

/// Minimal shape check: something before and after a single `@`, and a dot in the domain
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.contains('@') && domain.contains('.')
}
