// ABOUTME: Core data models for the FitTracker domain-state engine
// ABOUTME: Defines meals, food items, workout sessions, user profile and activity feed types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! # Data Models
//!
//! Core data structures shared by every store in the crate.
//!
//! ## Design Principles
//!
//! - **Closed enumerations**: fixed vocabularies (meal names, genders,
//!   activity levels) are enums, so "unknown variant" states cannot be
//!   constructed at runtime.
//! - **Serializable**: all models derive serde traits so snapshots can be
//!   handed to a future persistence backend unchanged.
//! - **Plain data**: models carry no behavior beyond small conversions;
//!   derived values live in [`crate::intelligence`].

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// The four fixed meals of a tracked day.
///
/// The set is a closed enumeration: meals are never added or removed, only
/// their item lists change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealName {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything logged outside the three main meals
    Snacks,
}

impl MealName {
    /// All meal names in canonical display order.
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];
}

impl Display for MealName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snacks => "Snacks",
        };
        write!(f, "{name}")
    }
}

impl FromStr for MealName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Breakfast" => Ok(Self::Breakfast),
            "Lunch" => Ok(Self::Lunch),
            "Dinner" => Ok(Self::Dinner),
            "Snacks" => Ok(Self::Snacks),
            other => Err(AppError::invalid_input(format!(
                "unknown meal name: {other}"
            ))),
        }
    }
}

/// A single logged food entry.
///
/// Identity is the `id` string and never changes; the remaining fields are
/// editable in place through [`crate::stores::NutritionStore::update_food_item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodItem {
    /// Unique identifier within the day's meals
    pub id: String,
    /// Display name, e.g. "Oatmeal with Berries"
    pub name: String,
    /// Energy in kilocalories
    pub calories: u32,
    /// Protein in grams
    pub protein_g: u32,
    /// Carbohydrates in grams
    pub carbs_g: u32,
    /// Fat in grams
    pub fat_g: u32,
}

/// One meal and its ordered list of logged items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    /// Which of the four fixed meals this is
    pub name: MealName,
    /// Logged items, in insertion order
    pub items: Vec<FoodItem>,
}

impl Meal {
    /// Create an empty meal.
    #[must_use]
    pub const fn empty(name: MealName) -> Self {
        Self {
            name,
            items: Vec::new(),
        }
    }
}

/// Daily nutrition targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionGoals {
    /// Calorie target (kcal)
    pub calories: u32,
    /// Protein target (grams)
    pub protein_g: u32,
    /// Carbohydrate target (grams)
    pub carbs_g: u32,
    /// Fat target (grams)
    pub fat_g: u32,
    /// Water target (cups)
    pub water_cups: u32,
}

impl NutritionGoals {
    /// Merge a partial update into these goals. Absent fields are kept.
    pub fn merge(&mut self, update: &NutritionGoalsUpdate) {
        if let Some(calories) = update.calories {
            self.calories = calories;
        }
        if let Some(protein_g) = update.protein_g {
            self.protein_g = protein_g;
        }
        if let Some(carbs_g) = update.carbs_g {
            self.carbs_g = carbs_g;
        }
        if let Some(fat_g) = update.fat_g {
            self.fat_g = fat_g;
        }
        if let Some(water_cups) = update.water_cups {
            self.water_cups = water_cups;
        }
    }
}

/// Partial update for [`NutritionGoals`]; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NutritionGoalsUpdate {
    /// New calorie target, if any
    pub calories: Option<u32>,
    /// New protein target, if any
    pub protein_g: Option<u32>,
    /// New carbohydrate target, if any
    pub carbs_g: Option<u32>,
    /// New fat target, if any
    pub fat_g: Option<u32>,
    /// New water target, if any
    pub water_cups: Option<u32>,
}

/// Per-macro totals summed across all meals of the day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTotals {
    /// Total energy (kcal)
    pub calories: u32,
    /// Total protein (grams)
    pub protein_g: u32,
    /// Total carbohydrates (grams)
    pub carbs_g: u32,
    /// Total fat (grams)
    pub fat_g: u32,
}

/// Historical snapshot of one tracked day. Append-only; read-only in the
/// current scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyNutrition {
    /// Calendar date of the snapshot
    pub date: NaiveDate,
    /// Calories consumed that day (kcal)
    pub calories: u32,
    /// Protein consumed that day (grams)
    pub protein_g: u32,
    /// Carbohydrates consumed that day (grams)
    pub carbs_g: u32,
    /// Fat consumed that day (grams)
    pub fat_g: u32,
    /// Water drunk that day (cups)
    pub water_cups: u32,
}

/// Calories of one history day keyed by its day-of-week label ("Sun".."Sat").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayCalories {
    /// Three-letter day-of-week label
    pub day: String,
    /// Calories consumed that day (kcal)
    pub calories: u32,
}

/// Biological gender used by the BMR formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 constant in Mifflin-St Jeor)
    Male,
    /// Female (-161 constant in Mifflin-St Jeor)
    Female,
    /// Other (uses the female formula constant)
    Other,
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Self-reported weekly activity level, used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard daily training
    VeryActive,
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very-active",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very-active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_input(format!(
                "unknown activity level: {other}"
            ))),
        }
    }
}

/// Physical profile of the single tracked user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Biological gender for energy calculations
    pub gender: Gender,
    /// Weekly activity level for energy calculations
    pub activity_level: ActivityLevel,
}

/// The user's fitness goal configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserGoals {
    /// Free-form goal label, e.g. "weight-loss"
    pub primary_goal: String,
    /// Target body weight in kilograms
    pub target_weight_kg: f64,
    /// Desired weekly weight change as a signed numeric string (kg/week),
    /// e.g. "-0.5"; an unparseable value behaves as 0 (maintenance)
    pub weekly_weight_change_kg: String,
    /// Daily calorie surplus/deficit target (kcal)
    pub daily_calorie_gap: i32,
    /// Planned workouts per week, kept as entered
    pub workouts_per_week: String,
    /// Protein target (grams)
    pub protein_g: u32,
    /// Carbohydrate target (grams)
    pub carbs_g: u32,
    /// Fat target (grams)
    pub fat_g: u32,
    /// Water target (cups)
    pub water_cups: u32,
    /// Daily calorie target (kcal)
    pub target_daily_calories: u32,
    /// Target time frame in weeks
    pub target_time_frame_weeks: u32,
}

impl UserGoals {
    /// The weekly weight change parsed to kg/week; 0 when unparseable.
    #[must_use]
    pub fn weekly_change_kg(&self) -> f64 {
        self.weekly_weight_change_kg.trim().parse().unwrap_or(0.0)
    }
}

/// One exercise within a workout session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier within the session
    pub id: String,
    /// Exercise name, e.g. "Bench Press"
    pub name: String,
    /// Number of sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Working weight in kilograms; `None` for bodyweight movements
    pub weight_kg: Option<f64>,
    /// Primary muscle group trained, e.g. "Chest"
    pub muscle_group: String,
}

/// A workout session: today's session under active mutation, or a past
/// session in the append-only history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Unique session identifier
    pub id: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Session label, e.g. "Push Day"
    pub workout_type: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Exercises performed, in insertion order
    pub exercises: Vec<Exercise>,
    /// Whether the session was finished
    pub completed: bool,
    /// Free-text session notes
    pub notes: Option<String>,
}

/// A new best performance for an exercise. Kept most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalRecord {
    /// Exercise name the record belongs to
    pub exercise: String,
    /// Improvement over the previous record (kg)
    pub change: f64,
    /// Display value of the current record, e.g. "72.5 kg"
    pub current_pr: String,
    /// Display string of how long ago it was set, e.g. "2 days ago"
    pub time_ago: String,
    /// Calendar date the record was set
    pub date: NaiveDate,
}

/// Latest achievement banner shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    /// Achievement message
    pub title: String,
    /// Emoji or icon token
    pub icon: String,
}

/// Category of an activity-feed entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A completed workout session
    Workout,
    /// A logged food item
    Meal,
    /// A body-weight update
    Weight,
    /// A logged cup of water
    Water,
    /// A logged exercise
    Exercise,
}

/// Reference to the icon a view should render for a feed entry.
/// Rendering itself is out of scope for this crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityIcon {
    /// Dumbbell / gym icon
    Fitness,
    /// Plate / restaurant icon
    Restaurant,
    /// Water-drop icon
    WaterDrop,
    /// Scale icon
    Scale,
}

/// One entry in the bounded recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Unique entry id
    pub id: Uuid,
    /// Entry category
    pub kind: ActivityKind,
    /// Primary line, e.g. "Added Greek Yogurt"
    pub title: String,
    /// Secondary line, e.g. "100 kcal • Breakfast"
    pub subtitle: Option<String>,
    /// Moment the entry was created
    pub timestamp: DateTime<Utc>,
    /// Icon reference for views
    pub icon: ActivityIcon,
}

/// UI color theme. The only durably persisted preference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(AppError::invalid_input(format!("unknown theme: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_name_round_trips_through_display() {
        for name in MealName::ALL {
            let parsed: MealName = name.to_string().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn unknown_meal_name_is_rejected() {
        assert!("Brunch".parse::<MealName>().is_err());
    }

    #[test]
    fn activity_level_round_trips_through_display() {
        let parsed: ActivityLevel = "very-active".parse().unwrap();
        assert_eq!(parsed, ActivityLevel::VeryActive);
        assert_eq!(parsed.to_string(), "very-active");
    }

    #[test]
    fn goals_merge_keeps_absent_fields() {
        let mut goals = NutritionGoals {
            calories: 2200,
            protein_g: 120,
            carbs_g: 250,
            fat_g: 80,
            water_cups: 8,
        };
        goals.merge(&NutritionGoalsUpdate {
            calories: Some(2000),
            water_cups: Some(10),
            ..NutritionGoalsUpdate::default()
        });
        assert_eq!(goals.calories, 2000);
        assert_eq!(goals.water_cups, 10);
        assert_eq!(goals.protein_g, 120);
        assert_eq!(goals.fat_g, 80);
    }

    #[test]
    fn weekly_change_parse_failure_means_maintenance() {
        let goals = UserGoals {
            primary_goal: "weight-loss".into(),
            target_weight_kg: 70.0,
            weekly_weight_change_kg: "not-a-number".into(),
            daily_calorie_gap: 500,
            workouts_per_week: "4".into(),
            protein_g: 150,
            carbs_g: 200,
            fat_g: 60,
            water_cups: 8,
            target_daily_calories: 2000,
            target_time_frame_weeks: 12,
        };
        assert!((goals.weekly_change_kg()).abs() < f64::EPSILON);
    }

    #[test]
    fn theme_toggles_and_parses() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
