// ABOUTME: Derived-value calculators for the FitTracker domain state
// ABOUTME: Pure functions over store snapshots; no side effects, no caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! # Intelligence
//!
//! Pure derived-value calculations over the domain state. Every function
//! here is a function of its arguments alone: recomputed on demand, never
//! cached, and free of side effects, so stale reads across a mutation are
//! impossible by construction.

/// Energy-balance calculations: BMR, TDEE, calorie targets, time to goal
pub mod energy;

/// Workout analysis: muscle-group ranking, set/rep averages, note recency,
/// personal-record windows
pub mod workout_analysis;

pub use energy::{
    activity_multiplier, basal_metabolic_rate, format_time_to_goal, recommended_calories,
    total_daily_energy, weeks_to_goal,
};
pub use workout_analysis::{
    average_stats, last_workout_note, recent_records, relative_day_label, top_muscle_group,
    AverageStats, MuscleGroupStats, WorkoutNote,
};
