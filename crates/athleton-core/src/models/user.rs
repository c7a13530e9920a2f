// ABOUTME: User account model and the authenticated user handle
// ABOUTME: UserContext is passed explicitly into every user-scoped operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Normalised (trimmed, lower-cased) email address
    pub email: String,
    /// bcrypt password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Name shown in the CLI
    pub display_name: Option<String>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with a fresh identifier
    #[must_use]
    pub fn new(email: String, password_hash: String, display_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: Self::normalize_email(&email),
            password_hash,
            display_name,
            created_at: Utc::now(),
        }
    }

    /// Canonical form used for storage and lookup
    #[must_use]
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Authenticated handle for this user
    #[must_use]
    pub fn context(&self) -> UserContext {
        UserContext {
            user_id: self.id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Authenticated user handle returned by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    /// Authenticated user's id
    pub user_id: Uuid,
    /// Authenticated user's email
    pub email: String,
    /// Authenticated user's display name
    pub display_name: Option<String>,
}

impl UserContext {
    /// Name to greet the user with, falling back to the email
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email() {
        let user = User::new("  Ana@Example.COM ".into(), "hash".into(), None);
        assert_eq!(user.email, "ana@example.com");
    }

    #[test]
    fn test_greeting_falls_back_to_email() {
        let user = User::new("ana@example.com".into(), "hash".into(), Some("  ".into()));
        assert_eq!(user.context().greeting_name(), "ana@example.com");
    }
}
