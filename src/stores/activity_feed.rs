// ABOUTME: Bounded newest-first log of recent user actions across all stores
// ABOUTME: Fed by domain events; caps at 20 entries and formats entry ages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Recent-activity feed.
//!
//! An append-to-front log capped at [`crate::constants::feed::MAX_ENTRIES`]
//! entries; the oldest entries past the cap are evicted. Other stores never
//! write here directly - the feed subscribes to the event bus and converts
//! the loggable subset of [`DomainEvent`]s into entries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::feed;
use crate::events::DomainEvent;
use crate::models::{ActivityEntry, ActivityIcon, ActivityKind};

/// An entry about to be added: everything but the assigned id/timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    /// Entry category
    pub kind: ActivityKind,
    /// Primary line
    pub title: String,
    /// Secondary line
    pub subtitle: Option<String>,
    /// Icon reference for views
    pub icon: ActivityIcon,
}

impl ActivityDraft {
    /// The feed entry describing an event, for the loggable subset of
    /// events: food additions, logged water cups, completed workouts,
    /// logged exercises and weight changes. Everything else is `None`.
    #[must_use]
    pub fn from_event(event: &DomainEvent) -> Option<Self> {
        match event {
            DomainEvent::FoodLogged { meal, item } => Some(Self {
                kind: ActivityKind::Meal,
                title: format!("Added {}", item.name),
                subtitle: Some(format!("{} kcal • {meal}", item.calories)),
                icon: ActivityIcon::Restaurant,
            }),
            DomainEvent::WaterLogged { cups } => Some(Self {
                kind: ActivityKind::Water,
                title: "Logged water".to_owned(),
                subtitle: Some(format!("{cups} cup{}", plural(*cups))),
                icon: ActivityIcon::WaterDrop,
            }),
            DomainEvent::WorkoutCompleted { session } => Some(Self {
                kind: ActivityKind::Workout,
                title: format!("Completed {} Workout", session.workout_type),
                subtitle: Some(format!(
                    "{} min • {} exercise{}",
                    session.duration_minutes,
                    session.exercises.len(),
                    plural(session.exercises.len() as u32)
                )),
                icon: ActivityIcon::Fitness,
            }),
            DomainEvent::ExerciseLogged { exercise } => Some(Self {
                kind: ActivityKind::Exercise,
                title: format!("Logged {}", exercise.name),
                subtitle: Some(format!(
                    "{} set{} • {}",
                    exercise.sets,
                    plural(exercise.sets),
                    exercise.muscle_group
                )),
                icon: ActivityIcon::Fitness,
            }),
            DomainEvent::WeightUpdated { weight_kg } => Some(Self {
                kind: ActivityKind::Weight,
                title: format!("Updated weight to {weight_kg} kg"),
                subtitle: None,
                icon: ActivityIcon::Scale,
            }),
            _ => None,
        }
    }
}

const fn plural(count: u32) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Bounded newest-first activity log.
#[derive(Debug, Default)]
pub struct ActivityFeed {
    entries: Vec<ActivityEntry>,
}

impl ActivityFeed {
    /// Build the feed from pre-existing entries (newest first). Seeds
    /// beyond the cap are trimmed immediately.
    #[must_use]
    pub fn new(mut entries: Vec<ActivityEntry>) -> Self {
        entries.truncate(feed::MAX_ENTRIES);
        Self { entries }
    }

    /// Add an entry at the front, assigning a fresh id and the given
    /// timestamp, then evict anything past the cap.
    pub fn add(&mut self, draft: ActivityDraft, now: DateTime<Utc>) {
        self.entries.insert(
            0,
            ActivityEntry {
                id: Uuid::new_v4(),
                kind: draft.kind,
                title: draft.title,
                subtitle: draft.subtitle,
                timestamp: now,
                icon: draft.icon,
            },
        );
        self.entries.truncate(feed::MAX_ENTRIES);
    }

    /// Empty the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in stored order (newest first by construction).
    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Entries ordered by timestamp descending. Defensive: insertion order
    /// already satisfies this, but seeded data is not trusted to.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<ActivityEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    /// Phrase how long ago a timestamp was, relative to `now`:
    /// "Just now" under a minute, then minutes, hours, "Yesterday" at
    /// exactly one day, days under a week, and a plain date beyond that.
    #[must_use]
    pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(timestamp);
        let minutes = elapsed.num_minutes();
        let hours = elapsed.num_hours();
        let days = elapsed.num_days();

        if minutes < 1 {
            "Just now".to_owned()
        } else if minutes < 60 {
            let unit = if minutes == 1 { "minute" } else { "minutes" };
            format!("{minutes} {unit} ago")
        } else if hours < 24 {
            let unit = if hours == 1 { "hour" } else { "hours" };
            format!("{hours} {unit} ago")
        } else if days == 1 {
            "Yesterday".to_owned()
        } else if days < feed::MAX_RELATIVE_DAYS {
            format!("{days} days ago")
        } else {
            timestamp.format("%b %-d, %Y").to_string()
        }
    }
}
