// ABOUTME: Workout analysis over today's session and the session history
// ABOUTME: Muscle-group ranking, set/rep averages, note recency and PR windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Workout analysis functions.
//!
//! Only completed sessions count toward statistics: today's session
//! participates once it is marked completed, history sessions are filtered
//! the same way. Time-dependent functions take the reference date as an
//! argument so results are deterministic under test.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{records, schedule};
use crate::models::{PersonalRecord, WorkoutSession};

/// The most-trained muscle group and its completed-exercise count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MuscleGroupStats {
    /// Muscle group name
    pub name: String,
    /// Completed exercises counted for that group
    pub sessions: u32,
}

/// Mean repetitions and sets across all completed exercises.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AverageStats {
    /// Mean reps, rounded to the nearest integer
    pub reps: u32,
    /// Mean sets, rounded to one decimal place
    pub sets: f64,
}

/// The most recent workout note with its age and session label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutNote {
    /// Note text
    pub text: String,
    /// Age phrased as "Today", "Yesterday" or "N days ago"
    pub age: String,
    /// Label of the session the note belongs to
    pub workout_type: String,
}

fn completed_sessions<'a>(
    today: &'a WorkoutSession,
    history: &'a [WorkoutSession],
) -> impl Iterator<Item = &'a WorkoutSession> {
    std::iter::once(today)
        .filter(|session| session.completed)
        .chain(history.iter().filter(|session| session.completed))
}

/// The muscle group with the highest completed-exercise count across
/// today's session (if completed) and the completed history.
///
/// Ties break toward the group encountered first in insertion order.
/// With no completed exercises at all, the fallback group with count 0 is
/// returned.
#[must_use]
pub fn top_muscle_group(today: &WorkoutSession, history: &[WorkoutSession]) -> MuscleGroupStats {
    // Vec instead of a map: counts stay in first-encounter order, which is
    // what the tie-break contract is defined over.
    let mut counts: Vec<(String, u32)> = Vec::new();

    for session in completed_sessions(today, history) {
        for exercise in &session.exercises {
            match counts
                .iter_mut()
                .find(|(group, _)| group == &exercise.muscle_group)
            {
                Some((_, count)) => *count += 1,
                None => counts.push((exercise.muscle_group.clone(), 1)),
            }
        }
    }

    let mut best = MuscleGroupStats {
        name: schedule::DEFAULT_MUSCLE_GROUP.to_owned(),
        sessions: 0,
    };
    for (group, count) in counts {
        if count > best.sessions {
            best = MuscleGroupStats {
                name: group,
                sessions: count,
            };
        }
    }
    best
}

/// Mean reps (nearest integer) and mean sets (one decimal) across all
/// exercises of completed sessions. Zeroes when there is no data.
#[must_use]
pub fn average_stats(today: &WorkoutSession, history: &[WorkoutSession]) -> AverageStats {
    let mut total_reps: u64 = 0;
    let mut total_sets: u64 = 0;
    let mut exercise_count: u64 = 0;

    for session in completed_sessions(today, history) {
        for exercise in &session.exercises {
            total_reps += u64::from(exercise.reps);
            total_sets += u64::from(exercise.sets);
            exercise_count += 1;
        }
    }

    if exercise_count == 0 {
        return AverageStats { reps: 0, sets: 0.0 };
    }

    let reps = (total_reps as f64 / exercise_count as f64).round() as u32;
    let sets = (total_sets as f64 / exercise_count as f64 * 10.0).round() / 10.0;
    AverageStats { reps, sets }
}

/// Phrase a day distance as "Today", "Yesterday" or "N days ago".
#[must_use]
pub fn relative_day_label(days_ago: i64) -> String {
    match days_ago {
        i64::MIN..=0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        n => format!("{n} days ago"),
    }
}

/// The note to surface on the dashboard: today's note when present,
/// otherwise the note of the most recent historical session that has one.
///
/// Empty note strings count as absent. `today_date` anchors the age
/// phrasing for historical notes.
#[must_use]
pub fn last_workout_note(
    today: &WorkoutSession,
    history: &[WorkoutSession],
    today_date: NaiveDate,
) -> Option<WorkoutNote> {
    if let Some(text) = today.notes.as_deref().filter(|text| !text.is_empty()) {
        return Some(WorkoutNote {
            text: text.to_owned(),
            age: "Today".to_owned(),
            workout_type: today.workout_type.clone(),
        });
    }

    let mut sessions: Vec<&WorkoutSession> = history.iter().collect();
    sessions.sort_by(|a, b| b.date.cmp(&a.date));

    sessions.into_iter().find_map(|session| {
        session
            .notes
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| WorkoutNote {
                text: text.to_owned(),
                age: relative_day_label((today_date - session.date).num_days()),
                workout_type: session.workout_type.clone(),
            })
    })
}

/// Personal records set within the last 30 days, inclusive of the
/// boundary day (`date >= today - 30d`). Input order is preserved.
#[must_use]
pub fn recent_records(personal_records: &[PersonalRecord], today: NaiveDate) -> Vec<PersonalRecord> {
    let cutoff = today - Duration::days(records::RECENT_WINDOW_DAYS);
    personal_records
        .iter()
        .filter(|record| record.date >= cutoff)
        .cloned()
        .collect()
}
