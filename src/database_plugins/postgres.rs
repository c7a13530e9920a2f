// ABOUTME: PostgreSQL implementation of the storage layer for multi-user deployments
// ABOUTME: Uses native UUID, DATE and TIMESTAMPTZ columns behind the same provider trait

//! `PostgreSQL` database implementation

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgConnection, PgRow};
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use super::DatabaseProvider;
use crate::models::{
    DateRange, NewWorkout, NutritionTargets, PlanItem, Profile, Sex, User, WorkoutLog,
};

/// `PostgreSQL` database implementation
#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
}

fn row_to_user(row: &PgRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        display_name: row.try_get("display_name")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_profile(row: &PgRow) -> Result<Profile> {
    let sex: Option<String> = row.try_get("sex")?;
    Ok(Profile {
        user_id: row.try_get("user_id")?,
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
        updated_at: row.try_get("updated_at")?,
    })
}

fn row_to_plan_item(row: &PgRow) -> Result<PlanItem> {
    let weekday: i16 = row.try_get("weekday")?;
    Ok(PlanItem {
        weekday: u8::try_from(weekday)?,
        title: row.try_get("title")?,
        details: row.try_get("details")?,
    })
}

fn row_to_workout(row: &PgRow) -> Result<WorkoutLog> {
    Ok(WorkoutLog {
        id: row.try_get("id")?,
        workout_date: row.try_get("workout_date")?,
        workout_type: row.try_get("workout_type")?,
        duration_min: row.try_get("duration_min")?,
        distance_km: row.try_get("distance_km")?,
        rpe: row.try_get("rpe")?,
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
    })
}

async fn upsert_profile(conn: &mut PgConnection, profile: &Profile) -> Result<()> {
    sqlx::query(
        r"
        INSERT INTO profiles (
            user_id, sex, age, height_cm, weight_kg, objective, experience,
            availability_days, equipment, injuries, sleep_hours, stress_level,
            diet_preference, diet_restrictions, kcal_target, carbs_pct, protein_pct,
            fat_pct, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
        ON CONFLICT (user_id) DO UPDATE SET
            sex = EXCLUDED.sex,
            age = EXCLUDED.age,
            height_cm = EXCLUDED.height_cm,
            weight_kg = EXCLUDED.weight_kg,
            objective = EXCLUDED.objective,
            experience = EXCLUDED.experience,
            availability_days = EXCLUDED.availability_days,
            equipment = EXCLUDED.equipment,
            injuries = EXCLUDED.injuries,
            sleep_hours = EXCLUDED.sleep_hours,
            stress_level = EXCLUDED.stress_level,
            diet_preference = EXCLUDED.diet_preference,
            diet_restrictions = EXCLUDED.diet_restrictions,
            kcal_target = EXCLUDED.kcal_target,
            carbs_pct = EXCLUDED.carbs_pct,
            protein_pct = EXCLUDED.protein_pct,
            fat_pct = EXCLUDED.fat_pct,
            updated_at = EXCLUDED.updated_at
        ",
    )
    .bind(profile.user_id)
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
    .bind(profile.updated_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn write_week_plan(
    conn: &mut PgConnection,
    user_id: Uuid,
    items: &[PlanItem],
) -> Result<()> {
    sqlx::query("DELETE FROM plan_items WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    for item in items {
        sqlx::query(
            "INSERT INTO plan_items (user_id, weekday, title, details) VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(i16::from(item.weekday))
        .bind(&item.title)
        .bind(&item.details)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl DatabaseProvider for PostgresDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;

        let db = Self { pool };

        // Run migrations
        db.migrate().await?;

        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                display_name TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id UUID PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
                sex TEXT,
                age INTEGER,
                height_cm DOUBLE PRECISION,
                weight_kg DOUBLE PRECISION,
                objective TEXT,
                experience TEXT,
                availability_days INTEGER,
                equipment TEXT,
                injuries TEXT,
                sleep_hours DOUBLE PRECISION,
                stress_level TEXT,
                diet_preference TEXT,
                diet_restrictions TEXT,
                kcal_target DOUBLE PRECISION NOT NULL,
                carbs_pct DOUBLE PRECISION NOT NULL,
                protein_pct DOUBLE PRECISION NOT NULL,
                fat_pct DOUBLE PRECISION NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS plan_items (
                id BIGSERIAL PRIMARY KEY,
                user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                weekday SMALLINT NOT NULL CHECK (weekday BETWEEN 0 AND 6),
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
                id BIGSERIAL PRIMARY KEY,
                user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                workout_date DATE NOT NULL,
                workout_type TEXT NOT NULL,
                duration_min DOUBLE PRECISION NOT NULL DEFAULT 0,
                distance_km DOUBLE PRECISION NOT NULL DEFAULT 0,
                rpe INTEGER NOT NULL,
                notes TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
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

        debug!("PostgreSQL schema ready");
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, password_hash, display_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name, created_at FROM users WHERE email = $1",
        )
        .bind(User::normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn load_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let row = sqlx::query("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
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
        let mut tx = self.pool.begin().await?;
        write_week_plan(&mut tx, user_id, items).await?;
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

        let mut tx = self.pool.begin().await?;
        upsert_profile(&mut tx, &saved).await?;
        write_week_plan(&mut tx, saved.user_id, items).await?;
        tx.commit().await?;
        Ok(saved)
    }

    async fn load_week_plan(&self, user_id: Uuid) -> Result<Vec<PlanItem>> {
        let rows = sqlx::query(
            "SELECT weekday, title, details FROM plan_items WHERE user_id = $1 ORDER BY weekday, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_plan_item).collect()
    }

    async fn append_workout(&self, user_id: Uuid, workout: &NewWorkout) -> Result<WorkoutLog> {
        let created_at = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO workout_logs (
                user_id, workout_date, workout_type, duration_min, distance_km, rpe, notes, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(user_id)
        .bind(workout.workout_date)
        .bind(&workout.workout_type)
        .bind(workout.duration_min)
        .bind(workout.distance_km)
        .bind(workout.rpe)
        .bind(&workout.notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(workout.clone().into_log(id, created_at))
    }

    async fn query_workouts(&self, user_id: Uuid, range: DateRange) -> Result<Vec<WorkoutLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, workout_date, workout_type, duration_min, distance_km, rpe, notes, created_at
            FROM workout_logs
            WHERE user_id = $1
              AND ($2::date IS NULL OR workout_date >= $2)
              AND ($3::date IS NULL OR workout_date <= $3)
            ORDER BY workout_date DESC, id DESC
            ",
        )
        .bind(user_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout).collect()
    }
}
