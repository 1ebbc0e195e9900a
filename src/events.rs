// ABOUTME: Domain events and the single-threaded observer bus connecting stores to views
// ABOUTME: Stores publish on every mutation; the activity feed and views subscribe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! # Domain Events
//!
//! Every mutating store operation publishes a [`DomainEvent`] on a shared
//! [`EventBus`]. Views subscribe to keep displayed numbers in sync, and the
//! activity feed subscribes to record the loggable subset - stores never
//! reach into the feed directly.
//!
//! The bus is deliberately single-threaded: all mutations happen
//! synchronously on the UI thread, so an observer list behind a `RefCell`
//! is sufficient and no locking is involved. Subscribers must not publish
//! re-entrantly from inside a callback.

use std::cell::RefCell;

use crate::models::{
    Exercise, FoodItem, MealName, NutritionGoals, Theme, UserGoals, UserProfile, WorkoutSession,
};

/// A state change announced by one of the stores.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    /// A food item was added to a meal
    FoodLogged {
        /// Meal the item was added to
        meal: MealName,
        /// The added item
        item: FoodItem,
    },
    /// A food item was removed from a meal
    FoodRemoved {
        /// Meal the item was removed from
        meal: MealName,
        /// Id of the removed item
        item_id: String,
    },
    /// A food item was edited in place
    FoodUpdated {
        /// Meal containing the item
        meal: MealName,
        /// The new item value
        item: FoodItem,
    },
    /// Water count increased by one (user logged a cup)
    WaterLogged {
        /// New cup count after the increment
        cups: u32,
    },
    /// Water count changed without logging (set or decrement)
    WaterSet {
        /// New cup count
        cups: u32,
    },
    /// Nutrition goals were updated
    NutritionGoalsUpdated {
        /// The merged goals now in effect
        goals: NutritionGoals,
    },
    /// Today's workout was completed
    WorkoutCompleted {
        /// The completed session
        session: WorkoutSession,
    },
    /// An exercise was added to today's workout
    ExerciseLogged {
        /// The added exercise
        exercise: Exercise,
    },
    /// An exercise was removed from today's workout
    ExerciseRemoved {
        /// Id of the removed exercise
        exercise_id: String,
    },
    /// Today's workout notes changed
    NotesUpdated,
    /// A personal record was added
    PersonalRecordAdded {
        /// Exercise the record belongs to
        exercise: String,
    },
    /// The weekly planned/completed workout counters changed
    WeeklyPlanChanged {
        /// Workouts completed this week
        completed: u32,
        /// Workouts planned this week
        planned: u32,
    },
    /// The user profile changed (non-weight field)
    ProfileUpdated {
        /// The profile now in effect
        profile: UserProfile,
    },
    /// The user's body weight changed
    WeightUpdated {
        /// New weight in kilograms
        weight_kg: f64,
    },
    /// The user's fitness goals changed
    GoalsUpdated {
        /// The goals now in effect
        goals: UserGoals,
    },
    /// The UI theme was toggled
    ThemeChanged {
        /// Theme now in effect
        theme: Theme,
    },
}

type Listener = Box<dyn Fn(&DomainEvent)>;

/// Synchronous observer bus shared by all stores.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<Listener>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener invoked for every published event.
    pub fn subscribe(&self, listener: impl Fn(&DomainEvent) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Publish an event to all listeners, in subscription order.
    pub fn publish(&self, event: &DomainEvent) {
        // Hold the borrow across dispatch: subscribing from inside a
        // callback is a contract violation and will panic via RefCell.
        for listener in self.listeners.borrow().iter() {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
