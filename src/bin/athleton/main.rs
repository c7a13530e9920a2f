// ABOUTME: AthletON CLI - register, onboard, follow the weekly plan, log workouts and ask the coach
// ABOUTME: Parses arguments, loads configuration, opens storage and dispatches to command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON
//!
//! Usage:
//! ```bash
//! # Create an account
//! athleton register --email ana@example.com --password s3cretpass --name Ana
//!
//! # Complete onboarding; this also generates the weekly plan
//! athleton profile set --email ana@example.com --password s3cretpass \
//!     --objective "Media maratón" --experience Intermedio --days 5 \
//!     --sex F --age 31 --height 165 --weight 58
//!
//! # Show the plan and nutrition targets
//! athleton plan --email ana@example.com --password s3cretpass
//!
//! # Log a run and review the last 30 days
//! athleton log --email ana@example.com --password s3cretpass --type Run --duration 45 --distance 8 --rpe 6
//! athleton history --email ana@example.com --password s3cretpass
//!
//! # Ask the AI coach (requires OPENAI_API_KEY)
//! athleton coach --email ana@example.com --password s3cretpass "How should I taper?"
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use athleton::config::AppConfig;
use athleton::errors::AppResult;
use athleton::logging::LoggingConfig;
use athleton::services::AppServices;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "athleton",
    version,
    about = "AthletON personal training CLI",
    long_about = "Generates a weekly training plan and nutrition targets from your athlete profile, \
                  keeps a workout journal and answers questions through an optional AI coach."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (sqlite:path or postgresql://...)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Account credentials for user-scoped commands
#[derive(Args, Clone)]
pub struct Credentials {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

/// Onboarding answers; omitted flags keep the stored value
#[derive(Args, Clone, Default)]
pub struct ProfileArgs {
    /// Sex (M, F or other)
    #[arg(long)]
    pub sex: Option<String>,

    /// Age in years (12-90)
    #[arg(long)]
    pub age: Option<i32>,

    /// Height in centimetres (120-230)
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms (35-250)
    #[arg(long)]
    pub weight: Option<f64>,

    /// Objective, e.g. "Perder grasa", "Ganar músculo", "Correr 10K", "Maratón"
    #[arg(long)]
    pub objective: Option<String>,

    /// Experience: Principiante, Intermedio or Avanzado
    #[arg(long)]
    pub experience: Option<String>,

    /// Training days per week (2-7)
    #[arg(long)]
    pub days: Option<i32>,

    /// Available equipment
    #[arg(long)]
    pub equipment: Option<String>,

    /// Injuries or limitations
    #[arg(long)]
    pub injuries: Option<String>,

    /// Average sleep in hours (3-12)
    #[arg(long)]
    pub sleep: Option<f64>,

    /// Stress level
    #[arg(long)]
    pub stress: Option<String>,

    /// Dietary preference
    #[arg(long)]
    pub diet: Option<String>,

    /// Allergies and intolerances
    #[arg(long)]
    pub restrictions: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (at least 8 characters)
        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Check credentials
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Show onboarding state and nutrition targets
    Status {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// View or edit the athlete profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Show the weekly training plan
    Plan {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Log a workout
    Log {
        #[command(flatten)]
        credentials: Credentials,

        /// Workout date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Workout type (Strength, Cardio, HIIT, Mobility, ...)
        #[arg(long = "type")]
        workout_type: String,

        /// Duration in minutes
        #[arg(long, default_value_t = 0.0)]
        duration: f64,

        /// Distance in kilometres
        #[arg(long, default_value_t = 0.0)]
        distance: f64,

        /// Rate of perceived exertion (1-10)
        #[arg(long, default_value_t = 6)]
        rpe: i32,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List logged workouts with weekly totals
    History {
        #[command(flatten)]
        credentials: Credentials,

        /// First day (YYYY-MM-DD, default 30 days ago)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD, default today)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Show last week's volume and trend
    Insights {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Ask the AI coach a question
    Coach {
        #[command(flatten)]
        credentials: Credentials,

        /// Question for the coach
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the stored profile
    Show {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Save answers, recompute targets and regenerate the plan
    Set {
        #[command(flatten)]
        credentials: Credentials,

        #[command(flatten)]
        answers: ProfileArgs,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("Warning: logging not initialised: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.code.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env().with_database_override(cli.database_url.as_deref());
    debug!("Connecting to database: {}", config.database);
    let services = AppServices::connect(&config).await?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Command::Register {
            email,
            password,
            name,
        } => commands::account::register(&services, email, password, name).await,
        Command::Login { credentials } => commands::account::login(&services, &credentials).await,
        Command::Status { credentials } => {
            commands::account::status(&services, &credentials).await
        }
        Command::Profile { action } => match action {
            ProfileCommand::Show { credentials } => {
                commands::profile::show(&services, &credentials).await
            }
            ProfileCommand::Set {
                credentials,
                answers,
            } => commands::profile::set(&services, &credentials, answers).await,
        },
        Command::Plan { credentials } => commands::plan::show(&services, &credentials).await,
        Command::Log {
            credentials,
            date,
            workout_type,
            duration,
            distance,
            rpe,
            notes,
        } => {
            let workout = athleton::models::NewWorkout {
                workout_date: date.unwrap_or(today),
                workout_type,
                duration_min: duration,
                distance_km: distance,
                rpe,
                notes,
            };
            commands::workouts::log(&services, &credentials, workout).await
        }
        Command::History {
            credentials,
            from,
            to,
        } => commands::workouts::history(&services, &credentials, from, to, today).await,
        Command::Insights { credentials } => {
            commands::workouts::insights(&services, &credentials, today).await
        }
        Command::Coach {
            credentials,
            question,
        } => commands::coach::ask(&services, &credentials, &question.join(" "), today).await,
    }
}
