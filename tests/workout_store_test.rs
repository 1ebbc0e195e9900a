// ABOUTME: Integration tests for the workout store
// ABOUTME: Validates session mutations, muscle-group ranking, averages and PR windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate, Utc};
use fittracker_core::context::AppContext;
use fittracker_core::models::{ActivityKind, Exercise, PersonalRecord, WorkoutSession};
use fittracker_core::seed::{SeedData, WorkoutSeed};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn exercise(id: &str, name: &str, muscle_group: &str, sets: u32, reps: u32) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        sets,
        reps,
        weight_kg: None,
        muscle_group: muscle_group.to_owned(),
    }
}

fn session(id: &str, d: NaiveDate, completed: bool, exercises: Vec<Exercise>) -> WorkoutSession {
    WorkoutSession {
        id: id.to_owned(),
        date: d,
        workout_type: "Push Day".to_owned(),
        duration_minutes: 45,
        exercises,
        completed,
        notes: None,
    }
}

fn record(name: &str, d: NaiveDate) -> PersonalRecord {
    PersonalRecord {
        exercise: name.to_owned(),
        change: 2.5,
        current_pr: "72.5 kg".to_owned(),
        time_ago: String::new(),
        date: d,
    }
}

#[test]
fn completing_a_workout_logs_a_feed_entry() {
    let mut ctx = AppContext::new(SeedData::default());
    let today = date(2024, 12, 1);

    ctx.workouts.complete_workout(session(
        "w1",
        today,
        false,
        vec![
            exercise("e1", "Bench Press", "Chest", 4, 8),
            exercise("e2", "Shoulder Press", "Shoulders", 3, 10),
        ],
    ));

    assert!(ctx.workouts.today_workout().completed);
    let feed = ctx.feed.borrow();
    assert_eq!(feed.entries()[0].kind, ActivityKind::Workout);
    assert_eq!(feed.entries()[0].title, "Completed Push Day Workout");
    assert_eq!(
        feed.entries()[0].subtitle.as_deref(),
        Some("45 min • 2 exercises")
    );
}

#[test]
fn top_muscle_group_three_chest_two_legs_returns_chest_three() {
    let today = date(2024, 12, 1);
    let seed = SeedData {
        workouts: WorkoutSeed {
            today_workout: session(
                "w1",
                today,
                true,
                vec![
                    exercise("e1", "Bench Press", "Chest", 4, 8),
                    exercise("e2", "Incline Press", "Chest", 3, 10),
                    exercise("e3", "Squat", "Legs", 4, 8),
                ],
            ),
            workout_history: vec![session(
                "w2",
                today - Duration::days(1),
                true,
                vec![
                    exercise("e4", "Cable Fly", "Chest", 3, 12),
                    exercise("e5", "Leg Press", "Legs", 3, 12),
                ],
            )],
            ..WorkoutSeed::default()
        },
        ..SeedData::default()
    };
    let ctx = AppContext::new(seed);

    let top = ctx.workouts.top_muscle_group();
    assert_eq!(top.name, "Chest");
    assert_eq!(top.sessions, 3);
}

#[test]
fn top_muscle_group_defaults_to_chest_zero_without_data() {
    let ctx = AppContext::new(SeedData::default());
    let top = ctx.workouts.top_muscle_group();
    assert_eq!(top.name, "Chest");
    assert_eq!(top.sessions, 0);
}

#[test]
fn average_stats_round_reps_to_integer_and_sets_to_one_decimal() {
    let today = date(2024, 12, 1);
    let seed = SeedData {
        workouts: WorkoutSeed {
            today_workout: session(
                "w1",
                today,
                true,
                vec![
                    exercise("e1", "Bench Press", "Chest", 4, 8),
                    exercise("e2", "Incline Press", "Chest", 3, 10),
                    exercise("e3", "Shoulder Press", "Shoulders", 3, 10),
                    exercise("e4", "Tricep Dips", "Triceps", 3, 12),
                ],
            ),
            ..WorkoutSeed::default()
        },
        ..SeedData::default()
    };
    let ctx = AppContext::new(seed);

    let averages = ctx.workouts.average_stats();
    assert_eq!(averages.reps, 10);
    assert!((averages.sets - 3.3).abs() < 1e-9);
}

#[test]
fn average_stats_are_zero_without_completed_sessions() {
    let ctx = AppContext::new(SeedData::default());
    let averages = ctx.workouts.average_stats();
    assert_eq!(averages.reps, 0);
    assert!(averages.sets.abs() < f64::EPSILON);
}

#[test]
fn recent_prs_use_an_inclusive_thirty_day_window() {
    let today = date(2024, 12, 1);
    let mut ctx = AppContext::new(SeedData::default());

    ctx.workouts.add_personal_record(record("Deadlift", today - Duration::days(31)));
    ctx.workouts.add_personal_record(record("Squat", today - Duration::days(30)));
    ctx.workouts.add_personal_record(record("Bench Press", today - Duration::days(2)));

    let recent = ctx.workouts.recent_prs(today);
    let names: Vec<&str> = recent.iter().map(|r| r.exercise.as_str()).collect();
    assert_eq!(names, vec!["Bench Press", "Squat"]);

    let summary = ctx.workouts.weekly_summary(today);
    assert_eq!(summary.personal_records, 2);
}

#[test]
fn exercise_addition_logs_and_removal_is_silent() {
    let mut ctx = AppContext::new(SeedData::default());

    ctx.workouts
        .add_exercise(exercise("e1", "Bench Press", "Chest", 3, 10));
    assert_eq!(ctx.feed.borrow().entries().len(), 1);
    assert_eq!(
        ctx.feed.borrow().entries()[0].subtitle.as_deref(),
        Some("3 sets • Chest")
    );

    assert!(ctx.workouts.remove_exercise("e1"));
    // Removal publishes an event but is not a loggable feed action.
    assert_eq!(ctx.feed.borrow().entries().len(), 1);
    assert!(!ctx.workouts.remove_exercise("e1"));
}

#[test]
fn last_note_falls_back_through_history_by_date() {
    let today = date(2024, 12, 1);
    let mut newer = session("w2", today - Duration::days(2), true, vec![]);
    newer.notes = Some("Good session, felt pumped!".to_owned());
    let older = session("w3", today - Duration::days(4), true, vec![]);

    let seed = SeedData {
        workouts: WorkoutSeed {
            today_workout: session("w1", today, true, vec![]),
            workout_history: vec![older, newer],
            ..WorkoutSeed::default()
        },
        ..SeedData::default()
    };
    let ctx = AppContext::new(seed);

    let note = ctx.workouts.last_workout_note(today).unwrap();
    assert_eq!(note.text, "Good session, felt pumped!");
    assert_eq!(note.age, "2 days ago");
    assert_eq!(note.workout_type, "Push Day");
}

#[test]
fn streak_and_achievement_ride_along_with_the_seed() {
    let mut ctx = AppContext::new(SeedData::demo(date(2024, 12, 1), Utc::now()));

    assert_eq!(ctx.workouts.workout_streak(), 12);
    ctx.workouts.increment_workout_streak();
    assert_eq!(ctx.workouts.workout_streak(), 13);

    assert!(ctx
        .workouts
        .achievement()
        .title
        .contains("bench press"));
}

#[test]
fn weekly_counters_cap_and_reconfigure() {
    let mut ctx = AppContext::new(SeedData::demo(date(2024, 12, 1), Utc::now()));

    // Demo seed: 5 of 6 completed.
    assert!(ctx.workouts.increment_weekly_completed());
    assert!(!ctx.workouts.increment_weekly_completed());

    ctx.workouts.set_weekly_planned(7);
    assert!(ctx.workouts.increment_weekly_completed());
    let consistency = ctx.workouts.weekly_consistency();
    assert_eq!(consistency.completed, 7);
    assert_eq!(consistency.planned, 7);
}
