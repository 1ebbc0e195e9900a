// ABOUTME: Dependency-injection context wiring stores, event bus and activity feed
// ABOUTME: Replaces implicit global singletons with one explicitly constructed object graph
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! # Application Context
//!
//! One explicitly constructed object graph instead of global singletons:
//! the shared [`EventBus`], the four domain stores, the activity feed
//! (wired as a bus subscriber) and the theme store. Views receive the
//! context and subscribe to the bus; tests build one per case with their
//! own seed and backends.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::events::EventBus;
use crate::repository::{
    MemoryPreferences, NoopBackend, NutritionRepository, PreferenceRepository, ProfileRepository,
    WorkoutRepository,
};
use crate::seed::SeedData;
use crate::stores::{
    ActivityDraft, ActivityFeed, NutritionStore, ProfileStore, ThemeStore, WorkoutStore,
};

/// The pluggable persistence backends behind the stores.
pub struct Backends {
    /// Nutrition persistence seam
    pub nutrition: Rc<dyn NutritionRepository>,
    /// Workout persistence seam
    pub workouts: Rc<dyn WorkoutRepository>,
    /// Profile persistence seam
    pub profile: Rc<dyn ProfileRepository>,
    /// Preference storage (theme)
    pub preferences: Rc<dyn PreferenceRepository>,
}

impl Default for Backends {
    /// No-op repositories and in-memory preferences: the pure seed-driven
    /// client.
    fn default() -> Self {
        Self {
            nutrition: Rc::new(NoopBackend),
            workouts: Rc::new(NoopBackend),
            profile: Rc::new(NoopBackend),
            preferences: Rc::new(MemoryPreferences::new()),
        }
    }
}

/// The fully wired model layer.
pub struct AppContext {
    /// Shared event bus; views subscribe here
    pub bus: Rc<EventBus>,
    /// Nutrition tracking state
    pub nutrition: NutritionStore,
    /// Workout tracking state
    pub workouts: WorkoutStore,
    /// Profile and goal state
    pub profile: ProfileStore,
    /// Recent-activity feed, shared with the bus subscription
    pub feed: Rc<RefCell<ActivityFeed>>,
    /// Theme preference state
    pub theme: ThemeStore,
}

impl AppContext {
    /// Wire the context from seed state with the default (no-op) backends.
    #[must_use]
    pub fn new(seed: SeedData) -> Self {
        Self::with_backends(seed, &Backends::default())
    }

    /// Wire the context from seed state and explicit backends. Backend
    /// fetches take precedence over the corresponding seed values; fetch
    /// failures fall back to the seed with a warning.
    #[must_use]
    pub fn with_backends(seed: SeedData, backends: &Backends) -> Self {
        let bus = Rc::new(EventBus::new());

        let feed = Rc::new(RefCell::new(ActivityFeed::new(seed.activities)));
        wire_activity_feed(&bus, Rc::clone(&feed));

        let mut nutrition_seed = seed.nutrition;
        match backends.nutrition.fetch_goals() {
            Ok(Some(goals)) => nutrition_seed.goals = goals,
            Ok(None) => {}
            Err(err) => warn!(error = %err, "falling back to seeded nutrition goals"),
        }

        let mut workout_seed = seed.workouts;
        match backends.workouts.fetch_today_workout() {
            Ok(Some(session)) => workout_seed.today_workout = session,
            Ok(None) => {}
            Err(err) => warn!(error = %err, "falling back to seeded workout"),
        }

        let nutrition = NutritionStore::new(
            nutrition_seed,
            Rc::clone(&bus),
            Rc::clone(&backends.nutrition),
        );
        let workouts = WorkoutStore::new(
            workout_seed,
            Rc::clone(&bus),
            Rc::clone(&backends.workouts),
        );
        let profile = ProfileStore::new(
            seed.profile,
            Rc::clone(&bus),
            Rc::clone(&backends.profile),
        );
        let theme = ThemeStore::new(Rc::clone(&backends.preferences), Rc::clone(&bus));

        debug!(theme = %theme.theme(), "application context wired");

        Self {
            bus,
            nutrition,
            workouts,
            profile,
            feed,
            theme,
        }
    }
}

/// Subscribe the activity feed to the bus: every loggable event becomes a
/// feed entry stamped with the current time.
fn wire_activity_feed(bus: &EventBus, feed: Rc<RefCell<ActivityFeed>>) {
    bus.subscribe(move |event| {
        if let Some(draft) = ActivityDraft::from_event(event) {
            feed.borrow_mut().add(draft, Utc::now());
        }
    });
}
