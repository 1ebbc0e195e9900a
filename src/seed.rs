// ABOUTME: Injectable initial-state fixtures for every store
// ABOUTME: Demo data mirrors a realistic tracked day; Default is an empty slate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! # Seed Data
//!
//! All stores take their initial state as a constructor parameter instead
//! of reaching for hardcoded globals, so tests can supply deterministic
//! fixtures. [`SeedData::default`] is an empty slate; [`SeedData::demo`]
//! produces the populated demo day, anchored to the caller's clock so the
//! relative dates stay meaningful.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{
    Achievement, ActivityEntry, ActivityIcon, ActivityKind, ActivityLevel, DailyNutrition,
    Exercise, FoodItem, Gender, Meal, MealName, NutritionGoals, PersonalRecord, UserGoals,
    UserProfile, WorkoutSession,
};

/// Initial state for [`crate::stores::NutritionStore`].
#[derive(Debug, Clone)]
pub struct NutritionSeed {
    /// Daily targets
    pub goals: NutritionGoals,
    /// Meals with any pre-logged items; missing meals are created empty
    pub meals: Vec<Meal>,
    /// Cups of water already logged today
    pub water_cups: u32,
    /// Last seven tracked days
    pub weekly_history: Vec<DailyNutrition>,
    /// Consecutive days with food logged
    pub food_logging_streak: u32,
}

impl Default for NutritionSeed {
    fn default() -> Self {
        Self {
            goals: NutritionGoals {
                calories: 2200,
                protein_g: 120,
                carbs_g: 250,
                fat_g: 80,
                water_cups: 8,
            },
            meals: Vec::new(),
            water_cups: 0,
            weekly_history: Vec::new(),
            food_logging_streak: 0,
        }
    }
}

/// Initial state for [`crate::stores::WorkoutStore`].
#[derive(Debug, Clone)]
pub struct WorkoutSeed {
    /// Today's session
    pub today_workout: WorkoutSession,
    /// Past sessions, most recent last
    pub workout_history: Vec<WorkoutSession>,
    /// Personal records, most recent first
    pub personal_records: Vec<PersonalRecord>,
    /// Workouts planned this week
    pub weekly_planned: u32,
    /// Workouts completed this week
    pub weekly_completed: u32,
    /// Consecutive workout days
    pub workout_streak: u32,
    /// Latest achievement banner
    pub achievement: Achievement,
}

impl Default for WorkoutSeed {
    fn default() -> Self {
        Self {
            today_workout: WorkoutSession {
                id: "today".to_owned(),
                date: NaiveDate::default(),
                workout_type: "Rest Day".to_owned(),
                duration_minutes: 0,
                exercises: Vec::new(),
                completed: false,
                notes: None,
            },
            workout_history: Vec::new(),
            personal_records: Vec::new(),
            weekly_planned: 0,
            weekly_completed: 0,
            workout_streak: 0,
            achievement: Achievement {
                title: String::new(),
                icon: String::new(),
            },
        }
    }
}

/// Initial state for [`crate::stores::ProfileStore`].
#[derive(Debug, Clone)]
pub struct ProfileSeed {
    /// Physical profile
    pub profile: UserProfile,
    /// Fitness goals
    pub goals: UserGoals,
}

impl Default for ProfileSeed {
    fn default() -> Self {
        Self {
            profile: UserProfile {
                full_name: "John Doe".to_owned(),
                email: "john.doe@example.com".to_owned(),
                age: 25,
                height_cm: 175.0,
                current_weight_kg: 75.0,
                gender: Gender::Male,
                activity_level: ActivityLevel::Moderate,
            },
            goals: UserGoals {
                primary_goal: "weight-loss".to_owned(),
                target_weight_kg: 70.0,
                weekly_weight_change_kg: "-0.5".to_owned(),
                daily_calorie_gap: 500,
                workouts_per_week: "4".to_owned(),
                protein_g: 150,
                carbs_g: 200,
                fat_g: 60,
                water_cups: 8,
                target_daily_calories: 2000,
                target_time_frame_weeks: 12,
            },
        }
    }
}

/// Initial state for the whole application.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    /// Nutrition store seed
    pub nutrition: NutritionSeed,
    /// Workout store seed
    pub workouts: WorkoutSeed,
    /// Profile store seed
    pub profile: ProfileSeed,
    /// Pre-existing activity-feed entries, newest first
    pub activities: Vec<ActivityEntry>,
}

impl SeedData {
    /// The populated demo day, anchored at `today`/`now`.
    #[must_use]
    pub fn demo(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            nutrition: demo_nutrition(today),
            workouts: demo_workouts(today),
            profile: ProfileSeed::default(),
            activities: demo_activities(now),
        }
    }
}

fn food(id: &str, name: &str, calories: u32, protein_g: u32, carbs_g: u32, fat_g: u32) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: name.to_owned(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}

fn demo_nutrition(today: NaiveDate) -> NutritionSeed {
    let meals = vec![
        Meal {
            name: MealName::Breakfast,
            items: vec![
                food("1", "Oatmeal with Berries", 320, 12, 58, 6),
                food("2", "Greek Yogurt", 100, 15, 6, 0),
            ],
        },
        Meal {
            name: MealName::Lunch,
            items: vec![food("3", "Grilled Chicken Salad", 450, 38, 35, 15)],
        },
        Meal {
            name: MealName::Dinner,
            items: vec![food("4", "Salmon with Vegetables", 577, 24, 55, 31)],
        },
        Meal::empty(MealName::Snacks),
    ];

    let day = |days_back: i64, calories, protein_g, carbs_g, fat_g, water_cups| DailyNutrition {
        date: today - Duration::days(days_back),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        water_cups,
    };
    let weekly_history = vec![
        day(6, 2100, 115, 240, 70, 8),
        day(5, 1950, 105, 230, 65, 7),
        day(4, 2200, 125, 250, 75, 8),
        day(3, 1847, 110, 220, 68, 6),
        day(2, 2050, 118, 245, 72, 7),
        day(1, 1900, 108, 235, 67, 8),
        day(0, 2300, 130, 260, 80, 8),
    ];

    NutritionSeed {
        meals,
        water_cups: 6,
        weekly_history,
        food_logging_streak: 15,
        ..NutritionSeed::default()
    }
}

fn demo_workouts(today: NaiveDate) -> WorkoutSeed {
    let exercise = |id: &str, name: &str, sets, reps, weight_kg, muscle_group: &str| Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        sets,
        reps,
        weight_kg,
        muscle_group: muscle_group.to_owned(),
    };

    let today_workout = WorkoutSession {
        id: "w1".to_owned(),
        date: today,
        workout_type: "Push Day".to_owned(),
        duration_minutes: 45,
        exercises: vec![
            exercise("e1", "Bench Press", 4, 8, Some(72.5), "Chest"),
            exercise("e2", "Incline Dumbbell Press", 3, 10, Some(25.0), "Chest"),
            exercise("e3", "Shoulder Press", 3, 10, Some(20.0), "Shoulders"),
            exercise("e4", "Tricep Dips", 3, 12, None, "Triceps"),
        ],
        completed: true,
        notes: Some(
            "Felt strong today! Hit a new PR on bench press. \
             Energy levels were high throughout the session."
                .to_owned(),
        ),
    };

    let workout_history = vec![
        WorkoutSession {
            id: "w2".to_owned(),
            date: today - Duration::days(1),
            workout_type: "Leg Day".to_owned(),
            duration_minutes: 60,
            exercises: vec![
                exercise("e5", "Squat", 4, 8, Some(92.5), "Legs"),
                exercise("e6", "Leg Press", 3, 12, Some(120.0), "Legs"),
            ],
            completed: true,
            notes: None,
        },
        WorkoutSession {
            id: "w3".to_owned(),
            date: today - Duration::days(2),
            workout_type: "Push Day".to_owned(),
            duration_minutes: 45,
            exercises: vec![exercise("e7", "Bench Press", 4, 8, Some(70.0), "Chest")],
            completed: true,
            notes: Some("Good session, felt pumped!".to_owned()),
        },
    ];

    let record = |exercise: &str, change, current_pr: &str, time_ago: &str, days_back: i64| {
        PersonalRecord {
            exercise: exercise.to_owned(),
            change,
            current_pr: current_pr.to_owned(),
            time_ago: time_ago.to_owned(),
            date: today - Duration::days(days_back),
        }
    };
    let personal_records = vec![
        record("Bench Press", 2.5, "72.5 kg", "2 days ago", 2),
        record("Squat", 5.0, "92.5 kg", "5 days ago", 5),
        record("Deadlift", 5.0, "125 kg", "1 week ago", 7),
    ];

    WorkoutSeed {
        today_workout,
        workout_history,
        personal_records,
        weekly_planned: 6,
        weekly_completed: 5,
        workout_streak: 12,
        achievement: Achievement {
            title: "You've improved your bench press by 8% this month!".to_owned(),
            icon: "🎉".to_owned(),
        },
    }
}

fn demo_activities(now: DateTime<Utc>) -> Vec<ActivityEntry> {
    let entry = |kind, title: &str, subtitle: Option<&str>, hours_back: i64, icon| ActivityEntry {
        id: Uuid::new_v4(),
        kind,
        title: title.to_owned(),
        subtitle: subtitle.map(str::to_owned),
        timestamp: now - Duration::hours(hours_back),
        icon,
    };

    vec![
        entry(
            ActivityKind::Exercise,
            "Logged Bench Press",
            Some("3 sets • Chest"),
            2,
            ActivityIcon::Fitness,
        ),
        entry(
            ActivityKind::Meal,
            "Added Paneer Wrap",
            Some("350 kcal • Lunch"),
            3,
            ActivityIcon::Restaurant,
        ),
        entry(
            ActivityKind::Weight,
            "Updated weight to 63 kg",
            None,
            24,
            ActivityIcon::Scale,
        ),
        entry(
            ActivityKind::Workout,
            "Completed Push Day Workout",
            Some("45 min • 6 exercises"),
            24,
            ActivityIcon::Fitness,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_empty_slate() {
        let seed = SeedData::default();
        assert!(seed.nutrition.meals.is_empty());
        assert_eq!(seed.nutrition.water_cups, 0);
        assert!(seed.workouts.workout_history.is_empty());
        assert!(seed.activities.is_empty());
    }

    #[test]
    fn demo_seed_matches_reference_day() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let seed = SeedData::demo(today, Utc::now());

        assert_eq!(seed.nutrition.weekly_history.len(), 7);
        assert_eq!(seed.nutrition.weekly_history[0].date.to_string(), "2024-11-25");
        assert_eq!(seed.workouts.today_workout.exercises.len(), 4);
        assert_eq!(seed.workouts.weekly_planned, 6);
        assert_eq!(seed.activities.len(), 4);
    }
}
