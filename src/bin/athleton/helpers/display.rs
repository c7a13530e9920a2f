// ABOUTME: Output formatting helpers for the athleton CLI
// ABOUTME: Prints plans, targets, profiles, workouts and progress as plain text tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

use athleton::intelligence::{MacroGrams, ProgressInsights, WeeklyVolume};
use athleton::models::{NutritionTargets, PlanItem, Profile, WorkoutLog};

/// Print the weekly plan, one block per day
pub fn display_plan(plan: &[PlanItem]) {
    println!("Weekly plan");
    println!("{}", "=".repeat(60));
    if plan.is_empty() {
        println!("No plan yet. Run `athleton profile set` to generate one.");
        return;
    }
    for item in plan {
        println!("{:<10} {}", item.weekday_name(), item.title);
        if !item.details.is_empty() {
            println!("{:<10} {}", "", item.details);
        }
    }
}

/// Print daily calories and macro split with gram amounts
pub fn display_targets(targets: &NutritionTargets) {
    let grams = MacroGrams::from_targets(targets);
    println!("Daily nutrition targets");
    println!("{}", "=".repeat(60));
    println!("   Calories: {:.0} kcal", targets.kcal_target);
    println!(
        "   Carbs:    {:>4.0}%  ({:.0} g)",
        targets.carbs_pct, grams.carbs_g
    );
    println!(
        "   Protein:  {:>4.0}%  ({:.0} g)",
        targets.protein_pct, grams.protein_g
    );
    println!("   Fat:      {:>4.0}%  ({:.0} g)", targets.fat_pct, grams.fat_g);
}

/// Print every stored answer
pub fn display_profile(profile: &Profile) {
    fn row(label: &str, value: Option<String>) {
        println!(
            "   {label:<18} {}",
            value.unwrap_or_else(|| "-".to_owned())
        );
    }

    println!("Athlete profile");
    println!("{}", "=".repeat(60));
    row("Sex", profile.sex.as_ref().map(ToString::to_string));
    row("Age", profile.age.as_ref().map(ToString::to_string));
    row("Height (cm)", profile.height_cm.map(|h| format!("{h:.1}")));
    row("Weight (kg)", profile.weight_kg.map(|w| format!("{w:.1}")));
    row("Objective", profile.objective.clone());
    row("Experience", profile.experience.clone());
    row(
        "Days per week",
        profile.availability_days.as_ref().map(ToString::to_string),
    );
    row("Equipment", profile.equipment.clone());
    row("Injuries", profile.injuries.clone());
    row("Sleep (h)", profile.sleep_hours.map(|s| format!("{s:.1}")));
    row("Stress", profile.stress_level.clone());
    row("Diet", profile.diet_preference.clone());
    row("Restrictions", profile.diet_restrictions.clone());
    row(
        "Updated",
        Some(profile.updated_at.format("%Y-%m-%d %H:%M UTC").to_string()),
    );
    println!();
    display_targets(&profile.targets);
}

/// Print workouts newest first
pub fn display_workouts(workouts: &[WorkoutLog]) {
    println!(
        "{:<12} {:<16} {:>8} {:>8} {:>4}  Notes",
        "Date", "Type", "Min", "Km", "RPE"
    );
    println!("{}", "-".repeat(70));
    for workout in workouts {
        println!(
            "{:<12} {:<16} {:>8.0} {:>8.1} {:>4}  {}",
            workout.workout_date.to_string(),
            workout.workout_type,
            workout.duration_min,
            workout.distance_km,
            workout.rpe,
            workout.notes.as_deref().unwrap_or("")
        );
    }
}

/// Print weekly totals oldest first
pub fn display_weekly(weeks: &[WeeklyVolume]) {
    println!("Weekly volume");
    println!("{}", "-".repeat(50));
    for week in weeks {
        println!(
            "   Week of {}: {:>5.0} min  {:>6.1} km  ({} sessions)",
            week.week_start, week.total_minutes, week.total_km, week.sessions
        );
    }
}

/// Print the last-week summary
pub fn display_insights(insights: &ProgressInsights) {
    println!("Progress insights (week of {})", insights.last_week_start);
    println!("{}", "=".repeat(60));
    println!(
        "   Volume last week: {:.0} min ({})",
        insights.last_week_minutes,
        insights.trend.label()
    );
    println!("   Kilometres last week: {:.1} km", insights.last_week_km);
}
