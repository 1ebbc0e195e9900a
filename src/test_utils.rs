// ABOUTME: Test utilities for creating fixture data in a consistent way
// ABOUTME: Centralizes fixture construction to avoid duplication across tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Fixture builders shared by unit tests. Gated behind `cfg(test)` and the
//! `testing` feature so production builds never carry them.

use chrono::NaiveDate;

use crate::models::{Exercise, FoodItem, PersonalRecord, WorkoutSession};

/// A food item with the given id and calories and small fixed macros.
#[must_use]
pub fn food_item(id: &str, name: &str, calories: u32) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: name.to_owned(),
        calories,
        protein_g: 10,
        carbs_g: 20,
        fat_g: 5,
    }
}

/// A bodyweight exercise for the given muscle group.
#[must_use]
pub fn exercise(id: &str, name: &str, muscle_group: &str, sets: u32, reps: u32) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        sets,
        reps,
        weight_kg: None,
        muscle_group: muscle_group.to_owned(),
    }
}

/// A workout session on the given date.
#[must_use]
pub fn workout_session(
    id: &str,
    date: NaiveDate,
    completed: bool,
    exercises: Vec<Exercise>,
) -> WorkoutSession {
    WorkoutSession {
        id: id.to_owned(),
        date,
        workout_type: "Push Day".to_owned(),
        duration_minutes: 45,
        exercises,
        completed,
        notes: None,
    }
}

/// A personal record set on the given date.
#[must_use]
pub fn personal_record(exercise: &str, date: NaiveDate) -> PersonalRecord {
    PersonalRecord {
        exercise: exercise.to_owned(),
        change: 2.5,
        current_pr: "72.5 kg".to_owned(),
        time_ago: String::new(),
        date,
    }
}
