// ABOUTME: Abstract persistence seams the stores call but do not implement
// ABOUTME: Repository traits per model plus no-op, in-memory and file-backed impls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! # Repositories
//!
//! The stores are backed by in-process state; every point where the
//! original system would talk to a backend is expressed as a repository
//! trait the store calls after applying a mutation locally. The crate
//! ships a [`NoopBackend`] (discard everything, fetch nothing), which is
//! the default wiring; a real API client would implement these traits.
//!
//! The one concern with a real implementation is the theme preference:
//! [`FilePreferences`] persists a small JSON key/value map in the platform
//! config directory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::models::{
    FoodItem, MealName, NutritionGoals, PersonalRecord, UserGoals, UserProfile, WorkoutSession,
};

/// Persistence seam for the nutrition store.
pub trait NutritionRepository {
    /// Fetch previously saved nutrition goals, if any.
    fn fetch_goals(&self) -> AppResult<Option<NutritionGoals>>;
    /// Persist updated nutrition goals.
    fn save_goals(&self, goals: &NutritionGoals) -> AppResult<()>;
    /// Persist a newly added meal item.
    fn save_meal_item(&self, meal: MealName, item: &FoodItem) -> AppResult<()>;
    /// Persist an in-place item edit.
    fn update_meal_item(&self, meal: MealName, item: &FoodItem) -> AppResult<()>;
    /// Remove a persisted meal item.
    fn delete_meal_item(&self, meal: MealName, item_id: &str) -> AppResult<()>;
    /// Persist today's water count.
    fn save_water_cups(&self, cups: u32) -> AppResult<()>;
}

/// Persistence seam for the workout store.
pub trait WorkoutRepository {
    /// Fetch today's session, if one was already started elsewhere.
    fn fetch_today_workout(&self) -> AppResult<Option<WorkoutSession>>;
    /// Persist today's session after any mutation.
    fn save_today_workout(&self, session: &WorkoutSession) -> AppResult<()>;
    /// Persist a new personal record.
    fn save_personal_record(&self, record: &PersonalRecord) -> AppResult<()>;
    /// Persist the weekly plan counters.
    fn save_weekly_plan(&self, completed: u32, planned: u32) -> AppResult<()>;
}

/// Persistence seam for the profile store.
pub trait ProfileRepository {
    /// Persist the user profile.
    fn save_profile(&self, profile: &UserProfile) -> AppResult<()>;
    /// Persist the user's fitness goals.
    fn save_goals(&self, goals: &UserGoals) -> AppResult<()>;
}

/// Small key/value preference storage. The theme preference is the only
/// durably persisted state in the application.
pub trait PreferenceRepository {
    /// Read a preference value.
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    /// Write a preference value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Backend that accepts every save and fetches nothing. Default wiring for
/// a client running purely on seed data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl NutritionRepository for NoopBackend {
    fn fetch_goals(&self) -> AppResult<Option<NutritionGoals>> {
        Ok(None)
    }

    fn save_goals(&self, _goals: &NutritionGoals) -> AppResult<()> {
        Ok(())
    }

    fn save_meal_item(&self, _meal: MealName, _item: &FoodItem) -> AppResult<()> {
        Ok(())
    }

    fn update_meal_item(&self, _meal: MealName, _item: &FoodItem) -> AppResult<()> {
        Ok(())
    }

    fn delete_meal_item(&self, _meal: MealName, _item_id: &str) -> AppResult<()> {
        Ok(())
    }

    fn save_water_cups(&self, _cups: u32) -> AppResult<()> {
        Ok(())
    }
}

impl WorkoutRepository for NoopBackend {
    fn fetch_today_workout(&self) -> AppResult<Option<WorkoutSession>> {
        Ok(None)
    }

    fn save_today_workout(&self, _session: &WorkoutSession) -> AppResult<()> {
        Ok(())
    }

    fn save_personal_record(&self, _record: &PersonalRecord) -> AppResult<()> {
        Ok(())
    }

    fn save_weekly_plan(&self, _completed: u32, _planned: u32) -> AppResult<()> {
        Ok(())
    }
}

impl ProfileRepository for NoopBackend {
    fn save_profile(&self, _profile: &UserProfile) -> AppResult<()> {
        Ok(())
    }

    fn save_goals(&self, _goals: &UserGoals) -> AppResult<()> {
        Ok(())
    }
}

/// In-memory preference map. Used in tests and as the default wiring.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty preference map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preference map pre-populated with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs
            .values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        prefs
    }
}

impl PreferenceRepository for MemoryPreferences {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed preferences: a flat JSON object at a fixed path.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Create a preference store at the given file path. The file is
    /// created on first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> AppResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|err| {
            AppError::storage(format!("reading {}", self.path.display())).with_source(err)
        })?;
        serde_json::from_str(&raw).map_err(|err| {
            AppError::storage(format!("parsing {}", self.path.display())).with_source(err)
        })
    }

    fn store(&self, values: &HashMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                AppError::storage(format!("creating {}", parent.display())).with_source(err)
            })?;
        }
        let raw = serde_json::to_string_pretty(values)
            .map_err(|err| AppError::storage("serializing preferences").with_source(err))?;
        fs::write(&self.path, raw).map_err(|err| {
            AppError::storage(format!("writing {}", self.path.display())).with_source(err)
        })
    }
}

impl PreferenceRepository for FilePreferences {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut values = self.load().unwrap_or_default();
        values.insert(key.to_owned(), value.to_owned());
        self.store(&values)
    }
}
