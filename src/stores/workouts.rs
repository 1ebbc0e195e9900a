// ABOUTME: Workout store: today's session, history, personal records and weekly counters
// ABOUTME: Derived statistics delegate to the workout-analysis calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Workout tracking.
//!
//! "Today's workout" is the one session under active mutation; the history
//! is an append-only record of past sessions. Statistics only count
//! completed sessions.

use std::rc::Rc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::events::{DomainEvent, EventBus};
use crate::intelligence::workout_analysis::{
    self, AverageStats, MuscleGroupStats, WorkoutNote,
};
use crate::models::{Achievement, Exercise, PersonalRecord, WorkoutSession};
use crate::repository::WorkoutRepository;
use crate::seed::WorkoutSeed;

/// Completed vs planned workouts for the current week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyConsistency {
    /// Workouts completed so far this week
    pub completed: u32,
    /// Workouts planned for this week
    pub planned: u32,
}

/// Week-at-a-glance numbers for the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklySummary {
    /// Workouts completed this week
    pub workouts_completed: u32,
    /// Personal records set in the recent window
    pub personal_records: u32,
}

/// State container for the workout tracking screens.
pub struct WorkoutStore {
    today_workout: WorkoutSession,
    workout_history: Vec<WorkoutSession>,
    personal_records: Vec<PersonalRecord>,
    weekly_planned: u32,
    weekly_completed: u32,
    workout_streak: u32,
    achievement: Achievement,
    bus: Rc<EventBus>,
    repository: Rc<dyn WorkoutRepository>,
}

impl WorkoutStore {
    /// Build the store from seed state.
    #[must_use]
    pub fn new(seed: WorkoutSeed, bus: Rc<EventBus>, repository: Rc<dyn WorkoutRepository>) -> Self {
        Self {
            today_workout: seed.today_workout,
            workout_history: seed.workout_history,
            personal_records: seed.personal_records,
            weekly_planned: seed.weekly_planned,
            weekly_completed: seed.weekly_completed,
            workout_streak: seed.workout_streak,
            achievement: seed.achievement,
            bus,
            repository,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The session under active mutation.
    #[must_use]
    pub const fn today_workout(&self) -> &WorkoutSession {
        &self.today_workout
    }

    /// Past sessions.
    #[must_use]
    pub fn workout_history(&self) -> &[WorkoutSession] {
        &self.workout_history
    }

    /// Personal records, most recent first.
    #[must_use]
    pub fn personal_records(&self) -> &[PersonalRecord] {
        &self.personal_records
    }

    /// Consecutive workout days.
    #[must_use]
    pub const fn workout_streak(&self) -> u32 {
        self.workout_streak
    }

    /// Latest achievement banner.
    #[must_use]
    pub const fn achievement(&self) -> &Achievement {
        &self.achievement
    }

    // ── Mutations ───────────────────────────────────────────────────────

    /// Replace today's session with a completed copy and log it.
    pub fn complete_workout(&mut self, session: WorkoutSession) {
        self.today_workout = WorkoutSession {
            completed: true,
            ..session
        };

        if let Err(err) = self.repository.save_today_workout(&self.today_workout) {
            warn!(error = %err, "failed to persist completed workout");
        }
        self.bus.publish(&DomainEvent::WorkoutCompleted {
            session: self.today_workout.clone(),
        });
    }

    /// Add an exercise to today's session and log it.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.today_workout.exercises.push(exercise.clone());

        if let Err(err) = self.repository.save_today_workout(&self.today_workout) {
            warn!(error = %err, "failed to persist exercise");
        }
        self.bus
            .publish(&DomainEvent::ExerciseLogged { exercise });
    }

    /// Remove an exercise from today's session by id.
    /// No-op (returns `false`) when the id is not present.
    pub fn remove_exercise(&mut self, exercise_id: &str) -> bool {
        let before = self.today_workout.exercises.len();
        self.today_workout
            .exercises
            .retain(|exercise| exercise.id != exercise_id);
        if self.today_workout.exercises.len() == before {
            return false;
        }

        if let Err(err) = self.repository.save_today_workout(&self.today_workout) {
            warn!(error = %err, "failed to persist exercise removal");
        }
        self.bus.publish(&DomainEvent::ExerciseRemoved {
            exercise_id: exercise_id.to_owned(),
        });
        true
    }

    /// Set the free-text notes on today's session.
    pub fn update_workout_notes(&mut self, notes: impl Into<String>) {
        self.today_workout.notes = Some(notes.into());

        if let Err(err) = self.repository.save_today_workout(&self.today_workout) {
            warn!(error = %err, "failed to persist workout notes");
        }
        self.bus.publish(&DomainEvent::NotesUpdated);
    }

    /// Insert a personal record at the head of the list.
    pub fn add_personal_record(&mut self, record: PersonalRecord) {
        if let Err(err) = self.repository.save_personal_record(&record) {
            warn!(error = %err, "failed to persist personal record");
        }
        let exercise = record.exercise.clone();
        self.personal_records.insert(0, record);
        self.bus
            .publish(&DomainEvent::PersonalRecordAdded { exercise });
    }

    /// Count one more completed workout this week, capped at the plan.
    /// No-op (returns `false`) beyond the cap.
    pub fn increment_weekly_completed(&mut self) -> bool {
        if self.weekly_completed >= self.weekly_planned {
            return false;
        }
        self.weekly_completed += 1;

        if let Err(err) = self
            .repository
            .save_weekly_plan(self.weekly_completed, self.weekly_planned)
        {
            warn!(error = %err, "failed to persist weekly plan");
        }
        self.bus.publish(&DomainEvent::WeeklyPlanChanged {
            completed: self.weekly_completed,
            planned: self.weekly_planned,
        });
        true
    }

    /// Set the weekly planned workout target.
    pub fn set_weekly_planned(&mut self, planned: u32) {
        self.weekly_planned = planned;

        if let Err(err) = self
            .repository
            .save_weekly_plan(self.weekly_completed, self.weekly_planned)
        {
            warn!(error = %err, "failed to persist weekly plan");
        }
        self.bus.publish(&DomainEvent::WeeklyPlanChanged {
            completed: self.weekly_completed,
            planned: self.weekly_planned,
        });
    }

    /// Extend the workout streak by one day.
    pub fn increment_workout_streak(&mut self) {
        self.workout_streak += 1;
    }

    // ── Derived values ──────────────────────────────────────────────────

    /// Completed vs planned workouts this week.
    #[must_use]
    pub const fn weekly_consistency(&self) -> WeeklyConsistency {
        WeeklyConsistency {
            completed: self.weekly_completed,
            planned: self.weekly_planned,
        }
    }

    /// The most-trained muscle group across completed sessions.
    #[must_use]
    pub fn top_muscle_group(&self) -> MuscleGroupStats {
        workout_analysis::top_muscle_group(&self.today_workout, &self.workout_history)
    }

    /// Mean reps and sets across completed sessions.
    #[must_use]
    pub fn average_stats(&self) -> AverageStats {
        workout_analysis::average_stats(&self.today_workout, &self.workout_history)
    }

    /// The note to surface on the dashboard, aged relative to `today`.
    #[must_use]
    pub fn last_workout_note(&self, today: NaiveDate) -> Option<WorkoutNote> {
        workout_analysis::last_workout_note(&self.today_workout, &self.workout_history, today)
    }

    /// Personal records set within the last 30 days of `today`.
    #[must_use]
    pub fn recent_prs(&self, today: NaiveDate) -> Vec<PersonalRecord> {
        workout_analysis::recent_records(&self.personal_records, today)
    }

    /// Week-at-a-glance numbers for the dashboard.
    #[must_use]
    pub fn weekly_summary(&self, today: NaiveDate) -> WeeklySummary {
        WeeklySummary {
            workouts_completed: self.weekly_completed,
            personal_records: self.recent_prs(today).len() as u32,
        }
    }
}

impl std::fmt::Debug for WorkoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkoutStore")
            .field("today_workout", &self.today_workout)
            .field("workout_history", &self.workout_history.len())
            .field("personal_records", &self.personal_records.len())
            .field("weekly_completed", &self.weekly_completed)
            .field("weekly_planned", &self.weekly_planned)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::NoopBackend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(seed: WorkoutSeed) -> WorkoutStore {
        WorkoutStore::new(seed, Rc::new(EventBus::new()), Rc::new(NoopBackend))
    }

    fn exercise(id: &str, muscle_group: &str) -> Exercise {
        Exercise {
            id: id.to_owned(),
            name: format!("Exercise {id}"),
            sets: 3,
            reps: 10,
            weight_kg: None,
            muscle_group: muscle_group.to_owned(),
        }
    }

    #[test]
    fn complete_workout_marks_session_completed() {
        let mut store = store_with(WorkoutSeed::default());
        let session = WorkoutSession {
            id: "w9".to_owned(),
            date: date(2024, 12, 1),
            workout_type: "Pull Day".to_owned(),
            duration_minutes: 50,
            exercises: vec![exercise("e1", "Back")],
            completed: false,
            notes: None,
        };

        store.complete_workout(session);
        assert!(store.today_workout().completed);
        assert_eq!(store.today_workout().workout_type, "Pull Day");
    }

    #[test]
    fn add_and_remove_exercise() {
        let mut store = store_with(WorkoutSeed::default());
        store.add_exercise(exercise("e1", "Chest"));
        store.add_exercise(exercise("e2", "Legs"));
        assert_eq!(store.today_workout().exercises.len(), 2);

        assert!(store.remove_exercise("e1"));
        assert_eq!(store.today_workout().exercises.len(), 1);
        assert!(!store.remove_exercise("missing"));
    }

    #[test]
    fn personal_records_insert_at_head() {
        let mut store = store_with(WorkoutSeed::default());
        let record = |name: &str, d: NaiveDate| PersonalRecord {
            exercise: name.to_owned(),
            change: 2.5,
            current_pr: "100 kg".to_owned(),
            time_ago: String::new(),
            date: d,
        };

        store.add_personal_record(record("Squat", date(2024, 11, 26)));
        store.add_personal_record(record("Bench Press", date(2024, 11, 29)));

        assert_eq!(store.personal_records()[0].exercise, "Bench Press");
        assert_eq!(store.personal_records()[1].exercise, "Squat");
    }

    #[test]
    fn weekly_completed_caps_at_planned() {
        let seed = WorkoutSeed {
            weekly_planned: 2,
            weekly_completed: 1,
            ..WorkoutSeed::default()
        };
        let mut store = store_with(seed);

        assert!(store.increment_weekly_completed());
        assert!(!store.increment_weekly_completed());
        assert_eq!(
            store.weekly_consistency(),
            WeeklyConsistency {
                completed: 2,
                planned: 2
            }
        );
    }

    #[test]
    fn weekly_summary_counts_recent_prs() {
        let today = date(2024, 12, 1);
        let seed = crate::seed::SeedData::demo(today, chrono::Utc::now()).workouts;
        let store = store_with(seed);

        let summary = store.weekly_summary(today);
        assert_eq!(summary.workouts_completed, 5);
        assert_eq!(summary.personal_records, 3);
    }

    #[test]
    fn notes_update_replaces_text() {
        let mut store = store_with(WorkoutSeed::default());
        store.update_workout_notes("Solid session");
        assert_eq!(
            store.today_workout().notes.as_deref(),
            Some("Solid session")
        );
    }
}
