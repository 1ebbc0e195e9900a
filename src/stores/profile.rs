// ABOUTME: Profile store: user profile, fitness goals and energy recommendations
// ABOUTME: Typed update commands replace field-name-keyed dynamic updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! User profile and goal-derived recommendations.
//!
//! Updates arrive as tagged commands ([`ProfileUpdate`], [`GoalsUpdate`]) -
//! one variant per editable field, so the compiler enforces exhaustiveness
//! and no runtime "unknown field" path exists. Derived energy values
//! delegate to [`crate::intelligence::energy`].

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::events::{DomainEvent, EventBus};
use crate::intelligence::energy;
use crate::models::{ActivityLevel, Gender, UserGoals, UserProfile};
use crate::repository::ProfileRepository;
use crate::seed::ProfileSeed;

/// One editable profile field with its new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProfileUpdate {
    /// Change the display name
    FullName(String),
    /// Change the contact email
    Email(String),
    /// Change the age in years
    Age(u32),
    /// Change the height in centimeters
    HeightCm(f64),
    /// Change the current body weight in kilograms
    CurrentWeightKg(f64),
    /// Change the biological gender
    Gender(Gender),
    /// Change the weekly activity level
    ActivityLevel(ActivityLevel),
}

/// One editable goal field with its new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum GoalsUpdate {
    /// Change the primary goal label
    PrimaryGoal(String),
    /// Change the target body weight in kilograms
    TargetWeightKg(f64),
    /// Change the desired weekly weight change (signed numeric string)
    WeeklyWeightChangeKg(String),
    /// Change the daily calorie surplus/deficit target
    DailyCalorieGap(i32),
    /// Change the planned workouts per week
    WorkoutsPerWeek(String),
    /// Change the protein target in grams
    ProteinG(u32),
    /// Change the carbohydrate target in grams
    CarbsG(u32),
    /// Change the fat target in grams
    FatG(u32),
    /// Change the water target in cups
    WaterCups(u32),
    /// Change the daily calorie target
    TargetDailyCalories(u32),
    /// Change the goal time frame in weeks
    TargetTimeFrameWeeks(u32),
}

/// State container for the profile and goal settings screens.
pub struct ProfileStore {
    profile: UserProfile,
    goals: UserGoals,
    bus: Rc<EventBus>,
    repository: Rc<dyn ProfileRepository>,
}

impl ProfileStore {
    /// Build the store from seed state.
    #[must_use]
    pub fn new(seed: ProfileSeed, bus: Rc<EventBus>, repository: Rc<dyn ProfileRepository>) -> Self {
        Self {
            profile: seed.profile,
            goals: seed.goals,
            bus,
            repository,
        }
    }

    /// The current physical profile.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The current fitness goals.
    #[must_use]
    pub const fn goals(&self) -> &UserGoals {
        &self.goals
    }

    /// Apply one profile field update.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        let weight_changed = matches!(update, ProfileUpdate::CurrentWeightKg(_));
        match update {
            ProfileUpdate::FullName(value) => self.profile.full_name = value,
            ProfileUpdate::Email(value) => self.profile.email = value,
            ProfileUpdate::Age(value) => self.profile.age = value,
            ProfileUpdate::HeightCm(value) => self.profile.height_cm = value,
            ProfileUpdate::CurrentWeightKg(value) => self.profile.current_weight_kg = value,
            ProfileUpdate::Gender(value) => self.profile.gender = value,
            ProfileUpdate::ActivityLevel(value) => self.profile.activity_level = value,
        }

        if let Err(err) = self.repository.save_profile(&self.profile) {
            warn!(error = %err, "failed to persist profile");
        }
        if weight_changed {
            self.bus.publish(&DomainEvent::WeightUpdated {
                weight_kg: self.profile.current_weight_kg,
            });
        } else {
            self.bus.publish(&DomainEvent::ProfileUpdated {
                profile: self.profile.clone(),
            });
        }
    }

    /// Apply one goal field update.
    pub fn update_goals(&mut self, update: GoalsUpdate) {
        match update {
            GoalsUpdate::PrimaryGoal(value) => self.goals.primary_goal = value,
            GoalsUpdate::TargetWeightKg(value) => self.goals.target_weight_kg = value,
            GoalsUpdate::WeeklyWeightChangeKg(value) => self.goals.weekly_weight_change_kg = value,
            GoalsUpdate::DailyCalorieGap(value) => self.goals.daily_calorie_gap = value,
            GoalsUpdate::WorkoutsPerWeek(value) => self.goals.workouts_per_week = value,
            GoalsUpdate::ProteinG(value) => self.goals.protein_g = value,
            GoalsUpdate::CarbsG(value) => self.goals.carbs_g = value,
            GoalsUpdate::FatG(value) => self.goals.fat_g = value,
            GoalsUpdate::WaterCups(value) => self.goals.water_cups = value,
            GoalsUpdate::TargetDailyCalories(value) => self.goals.target_daily_calories = value,
            GoalsUpdate::TargetTimeFrameWeeks(value) => self.goals.target_time_frame_weeks = value,
        }

        if let Err(err) = self.repository.save_goals(&self.goals) {
            warn!(error = %err, "failed to persist goals");
        }
        self.bus.publish(&DomainEvent::GoalsUpdated {
            goals: self.goals.clone(),
        });
    }

    // ── Derived values ──────────────────────────────────────────────────

    /// Basal Metabolic Rate (Mifflin-St Jeor) for the current profile.
    #[must_use]
    pub fn bmr(&self) -> f64 {
        energy::basal_metabolic_rate(
            self.profile.current_weight_kg,
            self.profile.height_cm,
            self.profile.age,
            self.profile.gender,
        )
    }

    /// Total Daily Energy Expenditure, rounded to the nearest kcal.
    #[must_use]
    pub fn tdee(&self) -> i64 {
        energy::total_daily_energy(self.bmr(), self.profile.activity_level)
    }

    /// Recommended daily calories for the configured weekly weight change.
    #[must_use]
    pub fn recommended_calories(&self) -> i64 {
        energy::recommended_calories(self.tdee(), self.goals.weekly_change_kg())
    }

    /// Estimated weeks to reach the target weight; 0 means maintenance.
    #[must_use]
    pub fn estimated_weeks_to_goal(&self) -> u32 {
        energy::weeks_to_goal(
            self.profile.current_weight_kg,
            self.goals.target_weight_kg,
            self.goals.weekly_change_kg(),
        )
    }

    /// Human-readable goal time frame.
    #[must_use]
    pub fn formatted_time_to_goal(&self) -> String {
        energy::format_time_to_goal(self.estimated_weeks_to_goal())
    }
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("profile", &self.profile)
            .field("goals", &self.goals)
            .finish_non_exhaustive()
    }
}
