// ABOUTME: Database abstraction layer for AthletON
// ABOUTME: Plugin architecture with SQLite and PostgreSQL backends behind one async trait

//! Storage abstraction
//!
//! Backends report failures through `anyhow::Result`; services convert them to
//! `AppError` at their boundary.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{DateRange, NewWorkout, PlanItem, Profile, User, WorkoutLog};

pub mod factory;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Connect and create the schema if needed
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Create tables and indexes idempotently
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Users
    // ================================

    /// Create a new user account
    async fn create_user(&self, user: &User) -> Result<Uuid>;

    /// Get user by ID
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Get user by normalised email address
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    // ================================
    // Profiles
    // ================================

    /// Load the user's profile, if onboarding has been started
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<Profile>>;

    /// Replace the whole profile row, stamping `updated_at`
    async fn save_profile(&self, profile: &Profile) -> Result<Profile>;

    // ================================
    // Weekly plan
    // ================================

    /// Delete every plan row for the user and insert `items`, in one transaction
    async fn replace_week_plan(&self, user_id: Uuid, items: &[PlanItem]) -> Result<()>;

    /// Save the profile and replace its week plan in one transaction
    async fn save_profile_with_plan(
        &self,
        profile: &Profile,
        items: &[PlanItem],
    ) -> Result<Profile>;

    /// Plan rows ordered by weekday
    async fn load_week_plan(&self, user_id: Uuid) -> Result<Vec<PlanItem>>;

    // ================================
    // Workouts
    // ================================

    /// Append a workout to the journal
    async fn append_workout(&self, user_id: Uuid, workout: &NewWorkout) -> Result<WorkoutLog>;

    /// Workouts inside the inclusive range, newest first
    async fn query_workouts(&self, user_id: Uuid, range: DateRange) -> Result<Vec<WorkoutLog>>;
}

/// Whether a storage error is a unique-constraint violation
#[must_use]
pub fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|sqlx_error| sqlx_error.as_database_error())
        .is_some_and(|db_error| db_error.is_unique_violation())
}
