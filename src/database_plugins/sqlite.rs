// ABOUTME: SQLite implementation of the storage layer for accounts, profiles, plans and workouts
// ABOUTME: Stores ids and timestamps as TEXT and creates the database file on first use

//! `SQLite` database implementation

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::DatabaseProvider;
use crate::models::{
    DateRange, NewWorkout, NutritionTargets, PlanItem, Profile, Sex, User, WorkoutLog,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `SQLite` database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn connect(database_url: &str) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        if database_url.contains(":memory:") {
            // Every connection to :memory: opens a fresh database, so keep exactly one alive
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?;
            return Ok(pool);
        }

        if let Some(parent) = database_file_path(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        Ok(SqlitePool::connect_with(options).await?)
    }
}

/// Filesystem path named by a `sqlite:` URL
fn database_file_path(database_url: &str) -> &Path {
    let path = database_url
        .strip_prefix("sqlite:")
        .unwrap_or(database_url);
    let path = path.strip_prefix("//").unwrap_or(path);
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    Path::new(path)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid stored timestamp '{value}'"))?
        .with_timezone(&Utc))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("Invalid stored date '{value}'"))
}

fn row_to_user(row: &SqliteRow) -> Result<User> {
    let id: String = row.try_get("id")?;
    let created_at: String = row.try_get("created_at")?;
    Ok(User {
        id: Uuid::parse_str(&id)?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        display_name: row.try_get("display_name")?,
        created_at: parse_timestamp(&created_at)?,
    })
}

fn row_to_profile(row: &SqliteRow) -> Result<Profile> {
    let user_id: String = row.try_get("user_id")?;
    let sex: Option<String> = row.try_get("sex")?;
    let updated_at: String = row.try_get("updated_at")?;
    Ok(Profile {
        user_id: Uuid::parse_str(&user_id)?,
        sex: sex.as_deref().map(Sex::from_str_lossy),
        age: row.try_get("age")?,
        height_cm: row.try_get("height_cm")?,
        weight_kg: row.try_get("weight_kg")?,
        objective: row.try_get("objective")?,
        experience: row.try_get("experience")?,
        availability_days: row.try_get("availability_days")?,
        equipment: row.try_get("equipment")?,
        injuries: row.try_get("injuries")?,
        sleep_hours: row.try_get("sleep_hours")?,
        stress_level: row.try_get("stress_level")?,
        diet_preference: row.try_get("diet_preference")?,
        diet_restrictions: row.try_get("diet_restrictions")?,
        targets: NutritionTargets {
            kcal_target: row.try_get("kcal_target")?,
            carbs_pct: row.try_get("carbs_pct")?,
            protein_pct: row.try_get("protein_pct")?,
            fat_pct: row.try_get("fat_pct")?,
        },
        updated_at: parse_timestamp(&updated_at)?,
    })
}

fn row_to_plan_item(row: &SqliteRow) -> Result<PlanItem> {
    let weekday: i32 = row.try_get("weekday")?;
    Ok(PlanItem {
        weekday: u8::try_from(weekday)?,
        title: row.try_get("title")?,
        details: row.try_get("details")?,
    })
}

fn row_to_workout(row: &SqliteRow) -> Result<WorkoutLog> {
    let workout_date: String = row.try_get("workout_date")?;
    let created_at: String = row.try_get("created_at")?;
    Ok(WorkoutLog {
        id: row.try_get("id")?,
        workout_date: parse_date(&workout_date)?,
        workout_type: row.try_get("workout_type")?,
        duration_min: row.try_get("duration_min")?,
        distance_km: row.try_get("distance_km")?,
        rpe: row.try_get("rpe")?,
        notes: row.try_get("notes")?,
        created_at: parse_timestamp(&created_at)?,
    })
}

async fn upsert_profile(conn: &mut SqliteConnection, profile: &Profile) -> Result<()> {
    sqlx::query(
        r"
        INSERT INTO profiles (
            user_id, sex, age, height_cm, weight_kg, objective, experience,
            availability_days, equipment, injuries, sleep_hours, stress_level,
            diet_preference, diet_restrictions, kcal_target, carbs_pct, protein_pct,
            fat_pct, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)
        ON CONFLICT(user_id) DO UPDATE SET
            sex = excluded.sex,
            age = excluded.age,
            height_cm = excluded.height_cm,
            weight_kg = excluded.weight_kg,
            objective = excluded.objective,
            experience = excluded.experience,
            availability_days = excluded.availability_days,
            equipment = excluded.equipment,
            injuries = excluded.injuries,
            sleep_hours = excluded.sleep_hours,
            stress_level = excluded.stress_level,
            diet_preference = excluded.diet_preference,
            diet_restrictions = excluded.diet_restrictions,
            kcal_target = excluded.kcal_target,
            carbs_pct = excluded.carbs_pct,
            protein_pct = excluded.protein_pct,
            fat_pct = excluded.fat_pct,
            updated_at = excluded.updated_at
        ",
    )
    .bind(profile.user_id.to_string())
    .bind(profile.sex.as_ref().map(Sex::as_str))
    .bind(profile.age)
    .bind(profile.height_cm)
    .bind(profile.weight_kg)
    .bind(&profile.objective)
    .bind(&profile.experience)
    .bind(profile.availability_days)
    .bind(&profile.equipment)
    .bind(&profile.injuries)
    .bind(profile.sleep_hours)
    .bind(&profile.stress_level)
    .bind(&profile.diet_preference)
    .bind(&profile.diet_restrictions)
    .bind(profile.targets.kcal_target)
    .bind(profile.targets.carbs_pct)
    .bind(profile.targets.protein_pct)
    .bind(profile.targets.fat_pct)
    .bind(profile.updated_at.to_rfc3339())
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn write_week_plan(
    conn: &mut SqliteConnection,
    user_id: &str,
    items: &[PlanItem],
) -> Result<()> {
    sqlx::query("DELETE FROM plan_items WHERE user_id = ?1")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    for item in items {
        sqlx::query(
            "INSERT INTO plan_items (user_id, weekday, title, details) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(user_id)
        .bind(i32::from(item.weekday))
        .bind(&item.title)
        .bind(&item.details)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let pool = Self::connect(database_url).await?;
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                display_name TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
                sex TEXT,
                age INTEGER,
                height_cm REAL,
                weight_kg REAL,
                objective TEXT,
                experience TEXT,
                availability_days INTEGER,
                equipment TEXT,
                injuries TEXT,
                sleep_hours REAL,
                stress_level TEXT,
                diet_preference TEXT,
                diet_restrictions TEXT,
                kcal_target REAL NOT NULL,
                carbs_pct REAL NOT NULL,
                protein_pct REAL NOT NULL,
                fat_pct REAL NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS plan_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                weekday INTEGER NOT NULL CHECK (weekday BETWEEN 0 AND 6),
                title TEXT NOT NULL,
                details TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                workout_date TEXT NOT NULL,
                workout_type TEXT NOT NULL,
                duration_min REAL NOT NULL DEFAULT 0,
                distance_km REAL NOT NULL DEFAULT 0,
                rpe INTEGER NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_plan_items_user ON plan_items(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_logs_user_date ON workout_logs(user_id, workout_date)",
        )
        .execute(&self.pool)
        .await?;

        debug!("SQLite schema ready");
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, password_hash, display_name, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name, created_at FROM users WHERE id = ?1",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name, created_at FROM users WHERE email = ?1",
        )
        .bind(User::normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn load_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let row = sqlx::query("SELECT * FROM profiles WHERE user_id = ?1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn save_profile(&self, profile: &Profile) -> Result<Profile> {
        let mut saved = profile.clone();
        saved.updated_at = Utc::now();

        let mut conn = self.pool.acquire().await?;
        upsert_profile(&mut conn, &saved).await?;
        Ok(saved)
    }

    async fn replace_week_plan(&self, user_id: Uuid, items: &[PlanItem]) -> Result<()> {
        let user_id = user_id.to_string();
        let mut tx = self.pool.begin().await?;
        write_week_plan(&mut tx, &user_id, items).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn save_profile_with_plan(
        &self,
        profile: &Profile,
        items: &[PlanItem],
    ) -> Result<Profile> {
        let mut saved = profile.clone();
        saved.updated_at = Utc::now();
        let user_id = saved.user_id.to_string();

        let mut tx = self.pool.begin().await?;
        upsert_profile(&mut tx, &saved).await?;
        write_week_plan(&mut tx, &user_id, items).await?;
        tx.commit().await?;
        Ok(saved)
    }

    async fn load_week_plan(&self, user_id: Uuid) -> Result<Vec<PlanItem>> {
        let rows = sqlx::query(
            "SELECT weekday, title, details FROM plan_items WHERE user_id = ?1 ORDER BY weekday, id",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_plan_item).collect()
    }

    async fn append_workout(&self, user_id: Uuid, workout: &NewWorkout) -> Result<WorkoutLog> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO workout_logs (
                user_id, workout_date, workout_type, duration_min, distance_km, rpe, notes, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(user_id.to_string())
        .bind(workout.workout_date.format(DATE_FORMAT).to_string())
        .bind(&workout.workout_type)
        .bind(workout.duration_min)
        .bind(workout.distance_km)
        .bind(workout.rpe)
        .bind(&workout.notes)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(workout
            .clone()
            .into_log(result.last_insert_rowid(), created_at))
    }

    async fn query_workouts(&self, user_id: Uuid, range: DateRange) -> Result<Vec<WorkoutLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, workout_date, workout_type, duration_min, distance_km, rpe, notes, created_at
            FROM workout_logs
            WHERE user_id = ?1
              AND (?2 IS NULL OR workout_date >= ?2)
              AND (?3 IS NULL OR workout_date <= ?3)
            ORDER BY workout_date DESC, id DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(range.start.map(|date| date.format(DATE_FORMAT).to_string()))
        .bind(range.end.map(|date| date.format(DATE_FORMAT).to_string()))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout).collect()
    }
}
