// ABOUTME: Demo binary: seeds the model layer, scripts a day of mutations
// ABOUTME: Prints the dashboard numbers the UI screens would render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Runs the model layer end to end: seed, mutate, read the derived values.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::rc::Rc;
use tracing::info;

use fittracker_core::config::AppConfig;
use fittracker_core::context::{AppContext, Backends};
use fittracker_core::models::{Exercise, FoodItem, MealName};
use fittracker_core::repository::FilePreferences;
use fittracker_core::seed::SeedData;
use fittracker_core::stores::{ActivityFeed, SessionTimer};

#[derive(Parser)]
#[command(name = "fittracker-demo", about = "FitTracker model-layer demo", version)]
struct Cli {
    /// Persist the theme preference to the platform config directory
    /// instead of keeping it in memory
    #[arg(long)]
    persist: bool,

    /// Toggle the theme before printing the summary
    #[arg(long)]
    toggle_theme: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    config.logging.init()?;

    let mut backends = Backends::default();
    if cli.persist {
        info!(path = %config.preferences_file.display(), "using file-backed preferences");
        backends.preferences = Rc::new(FilePreferences::new(config.preferences_file.clone()));
    }

    let now = Utc::now();
    let today = now.date_naive();
    let mut ctx = AppContext::with_backends(SeedData::demo(today, now), &backends);

    if cli.toggle_theme {
        let theme = ctx.theme.toggle()?;
        info!(%theme, "theme toggled");
    }

    // A scripted slice of a day.
    ctx.nutrition.add_food_item(
        MealName::Snacks,
        FoodItem {
            id: "5".to_owned(),
            name: "Protein Shake".to_owned(),
            calories: 180,
            protein_g: 30,
            carbs_g: 8,
            fat_g: 3,
        },
    );
    ctx.nutrition.increment_water();
    ctx.workouts.add_exercise(Exercise {
        id: "e8".to_owned(),
        name: "Cable Fly".to_owned(),
        sets: 3,
        reps: 12,
        weight_kg: Some(15.0),
        muscle_group: "Chest".to_owned(),
    });
    ctx.workouts.increment_weekly_completed();

    // Timer walkthrough: 125 s active, a paused minute, 5 more seconds.
    let mut session_timer = SessionTimer::new();
    session_timer.start(now);
    for _ in 0..125 {
        session_timer.tick();
    }
    session_timer.pause_or_resume();
    for _ in 0..60 {
        session_timer.tick();
    }
    session_timer.pause_or_resume();
    for _ in 0..5 {
        session_timer.tick();
    }

    print_dashboard(&ctx, &session_timer);
    Ok(())
}

fn print_dashboard(ctx: &AppContext, session_timer: &SessionTimer) {
    let now = Utc::now();
    let today = now.date_naive();

    let consumed = ctx.nutrition.consumed();
    println!("── Calories ────────────────────────────────");
    println!(
        "consumed {} kcal of {} ({} left)",
        consumed.calories,
        ctx.nutrition.goals().calories,
        ctx.nutrition.calories_left()
    );
    println!(
        "water {}/{} cups · avg week {} kcal",
        ctx.nutrition.water_cups(),
        ctx.nutrition.goals().water_cups,
        ctx.nutrition.average_weekly_calories()
    );

    println!("── Workouts ────────────────────────────────");
    let consistency = ctx.workouts.weekly_consistency();
    let summary = ctx.workouts.weekly_summary(today);
    let top = ctx.workouts.top_muscle_group();
    let averages = ctx.workouts.average_stats();
    println!(
        "week {}/{} · recent PRs {}",
        consistency.completed, consistency.planned, summary.personal_records
    );
    println!(
        "top muscle group {} ({}) · avg {} reps / {} sets",
        top.name, top.sessions, averages.reps, averages.sets
    );
    if let Some(note) = ctx.workouts.last_workout_note(today) {
        println!("last note ({}, {}): {}", note.workout_type, note.age, note.text);
    }
    println!(
        "session timer: {} min elapsed",
        session_timer.display_minutes()
    );

    println!("── Profile ─────────────────────────────────");
    println!(
        "BMR {:.1} kcal · TDEE {} kcal · recommended {} kcal",
        ctx.profile.bmr(),
        ctx.profile.tdee(),
        ctx.profile.recommended_calories()
    );
    println!("time to goal: {}", ctx.profile.formatted_time_to_goal());

    println!("── Recent activity ─────────────────────────");
    for entry in ctx.feed.borrow().entries().iter().take(6) {
        let age = ActivityFeed::time_ago(entry.timestamp, now);
        match &entry.subtitle {
            Some(subtitle) => println!("{age:>14} · {} · {subtitle}", entry.title),
            None => println!("{age:>14} · {}", entry.title),
        }
    }
}
