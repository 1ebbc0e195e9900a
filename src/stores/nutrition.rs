// ABOUTME: Nutrition store: one day's meals, water intake and goals with derived progress
// ABOUTME: Mutations publish domain events; invalid ids and out-of-range values no-op
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Daily nutrition tracking.
//!
//! The store owns the four fixed meals, today's water count, the daily
//! targets and the trailing week of history. Invalid input degrades to a
//! no-op rather than an error; mutators whose no-op case is observable
//! return `bool` so stricter callers can check.

use std::rc::Rc;

use chrono::{Datelike, Weekday};
use tracing::warn;

use crate::events::{DomainEvent, EventBus};
use crate::models::{
    DailyNutrition, DayCalories, FoodItem, MacroTotals, Meal, MealName, NutritionGoals,
    NutritionGoalsUpdate,
};
use crate::repository::NutritionRepository;
use crate::seed::NutritionSeed;

/// State container for the calorie/macro tracking screens.
pub struct NutritionStore {
    goals: NutritionGoals,
    meals: Vec<Meal>,
    water_cups: u32,
    weekly_history: Vec<DailyNutrition>,
    food_logging_streak: u32,
    bus: Rc<EventBus>,
    repository: Rc<dyn NutritionRepository>,
}

impl NutritionStore {
    /// Build the store from seed state. The four meals always exist: seed
    /// items are folded into their canonical meal, whatever order the seed
    /// lists them in.
    #[must_use]
    pub fn new(
        seed: NutritionSeed,
        bus: Rc<EventBus>,
        repository: Rc<dyn NutritionRepository>,
    ) -> Self {
        let mut meals: Vec<Meal> = MealName::ALL.into_iter().map(Meal::empty).collect();
        for seeded in seed.meals {
            if let Some(meal) = meals.iter_mut().find(|meal| meal.name == seeded.name) {
                meal.items.extend(seeded.items);
            }
        }

        Self {
            goals: seed.goals,
            meals,
            water_cups: seed.water_cups,
            weekly_history: seed.weekly_history,
            food_logging_streak: seed.food_logging_streak,
            bus,
            repository,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Current daily targets.
    #[must_use]
    pub const fn goals(&self) -> &NutritionGoals {
        &self.goals
    }

    /// All four meals in canonical order.
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// One meal by name. All four meals exist for the lifetime of the
    /// store, so the lookup always succeeds.
    #[must_use]
    pub fn meal(&self, name: MealName) -> &Meal {
        self.meals
            .iter()
            .find(|meal| meal.name == name)
            .unwrap_or(&self.meals[0])
    }

    /// Cups of water logged today.
    #[must_use]
    pub const fn water_cups(&self) -> u32 {
        self.water_cups
    }

    /// The trailing week of daily snapshots.
    #[must_use]
    pub fn weekly_history(&self) -> &[DailyNutrition] {
        &self.weekly_history
    }

    /// Consecutive days with food logged.
    #[must_use]
    pub const fn food_logging_streak(&self) -> u32 {
        self.food_logging_streak
    }

    // ── Mutations ───────────────────────────────────────────────────────

    /// Append an item to the named meal and log the addition.
    pub fn add_food_item(&mut self, meal_name: MealName, item: FoodItem) {
        if let Some(meal) = self.meals.iter_mut().find(|meal| meal.name == meal_name) {
            meal.items.push(item.clone());
        }

        if let Err(err) = self.repository.save_meal_item(meal_name, &item) {
            warn!(error = %err, meal = %meal_name, "failed to persist meal item");
        }
        self.bus.publish(&DomainEvent::FoodLogged {
            meal: meal_name,
            item,
        });
    }

    /// Remove the item with the given id from the named meal.
    /// No-op (returns `false`) when the id is not present.
    pub fn remove_food_item(&mut self, meal_name: MealName, item_id: &str) -> bool {
        let Some(meal) = self.meals.iter_mut().find(|meal| meal.name == meal_name) else {
            return false;
        };
        let before = meal.items.len();
        meal.items.retain(|item| item.id != item_id);
        if meal.items.len() == before {
            return false;
        }

        if let Err(err) = self.repository.delete_meal_item(meal_name, item_id) {
            warn!(error = %err, meal = %meal_name, "failed to delete meal item");
        }
        self.bus.publish(&DomainEvent::FoodRemoved {
            meal: meal_name,
            item_id: item_id.to_owned(),
        });
        true
    }

    /// Replace the fields of the item with the given id. Identity is kept:
    /// the stored id wins over whatever id the replacement carries.
    /// No-op (returns `false`) when the id is not present.
    pub fn update_food_item(
        &mut self,
        meal_name: MealName,
        item_id: &str,
        mut updated: FoodItem,
    ) -> bool {
        let Some(meal) = self.meals.iter_mut().find(|meal| meal.name == meal_name) else {
            return false;
        };
        let Some(slot) = meal.items.iter_mut().find(|item| item.id == item_id) else {
            return false;
        };

        updated.id = item_id.to_owned();
        *slot = updated.clone();

        if let Err(err) = self.repository.update_meal_item(meal_name, &updated) {
            warn!(error = %err, meal = %meal_name, "failed to persist meal item update");
        }
        self.bus.publish(&DomainEvent::FoodUpdated {
            meal: meal_name,
            item: updated,
        });
        true
    }

    /// Set the water count. Accepted only within `[0, goals.water_cups]`;
    /// out-of-range values are ignored (returns `false`).
    pub fn set_water_cups(&mut self, cups: u32) -> bool {
        if cups > self.goals.water_cups {
            return false;
        }
        self.water_cups = cups;

        if let Err(err) = self.repository.save_water_cups(cups) {
            warn!(error = %err, "failed to persist water count");
        }
        self.bus.publish(&DomainEvent::WaterSet { cups });
        true
    }

    /// Log one cup of water. No-op at the goal bound.
    pub fn increment_water(&mut self) -> bool {
        if self.water_cups >= self.goals.water_cups {
            return false;
        }
        self.water_cups += 1;

        if let Err(err) = self.repository.save_water_cups(self.water_cups) {
            warn!(error = %err, "failed to persist water count");
        }
        self.bus.publish(&DomainEvent::WaterLogged {
            cups: self.water_cups,
        });
        true
    }

    /// Remove one cup of water. No-op at zero.
    pub fn decrement_water(&mut self) -> bool {
        if self.water_cups == 0 {
            return false;
        }
        self.water_cups -= 1;

        if let Err(err) = self.repository.save_water_cups(self.water_cups) {
            warn!(error = %err, "failed to persist water count");
        }
        self.bus.publish(&DomainEvent::WaterSet {
            cups: self.water_cups,
        });
        true
    }

    /// Merge a partial goals update.
    pub fn update_goals(&mut self, update: &NutritionGoalsUpdate) {
        self.goals.merge(update);

        if let Err(err) = self.repository.save_goals(&self.goals) {
            warn!(error = %err, "failed to persist nutrition goals");
        }
        self.bus.publish(&DomainEvent::NutritionGoalsUpdated {
            goals: self.goals,
        });
    }

    /// Extend the food-logging streak by one day.
    pub fn increment_food_logging_streak(&mut self) {
        self.food_logging_streak += 1;
    }

    // ── Derived values ──────────────────────────────────────────────────

    /// Totals per macro across every item of every meal.
    #[must_use]
    pub fn consumed(&self) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for meal in &self.meals {
            for item in &meal.items {
                totals.calories += item.calories;
                totals.protein_g += item.protein_g;
                totals.carbs_g += item.carbs_g;
                totals.fat_g += item.fat_g;
            }
        }
        totals
    }

    /// Calories remaining against the goal. Negative when over target -
    /// that is a signal, not an error.
    #[must_use]
    pub fn calories_left(&self) -> i64 {
        i64::from(self.goals.calories) - i64::from(self.consumed().calories)
    }

    /// Calorie subtotal of one meal.
    #[must_use]
    pub fn meal_calories(&self, name: MealName) -> u32 {
        self.meal(name).items.iter().map(|item| item.calories).sum()
    }

    /// Weekly history mapped to day-of-week labels.
    #[must_use]
    pub fn weekly_calorie_data(&self) -> Vec<DayCalories> {
        self.weekly_history
            .iter()
            .map(|day| DayCalories {
                day: day_label(day.date.weekday()).to_owned(),
                calories: day.calories,
            })
            .collect()
    }

    /// Mean calories across the weekly history; 0 when empty.
    #[must_use]
    pub fn average_weekly_calories(&self) -> u32 {
        if self.weekly_history.is_empty() {
            return 0;
        }
        let total: u64 = self
            .weekly_history
            .iter()
            .map(|day| u64::from(day.calories))
            .sum();
        (total as f64 / self.weekly_history.len() as f64).round() as u32
    }
}

const fn day_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

impl std::fmt::Debug for NutritionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NutritionStore")
            .field("goals", &self.goals)
            .field("meals", &self.meals)
            .field("water_cups", &self.water_cups)
            .field("weekly_history", &self.weekly_history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::NoopBackend;

    fn store_with(seed: NutritionSeed) -> NutritionStore {
        NutritionStore::new(seed, Rc::new(EventBus::new()), Rc::new(NoopBackend))
    }

    fn item(id: &str, calories: u32) -> FoodItem {
        FoodItem {
            id: id.to_owned(),
            name: format!("Item {id}"),
            calories,
            protein_g: 10,
            carbs_g: 20,
            fat_g: 5,
        }
    }

    #[test]
    fn all_four_meals_exist_even_from_empty_seed() {
        let store = store_with(NutritionSeed::default());
        assert_eq!(store.meals().len(), 4);
        for name in MealName::ALL {
            assert!(store.meal(name).items.is_empty());
        }
    }

    #[test]
    fn consumed_sums_all_meals() {
        let mut store = store_with(NutritionSeed::default());
        store.add_food_item(MealName::Breakfast, item("1", 320));
        store.add_food_item(MealName::Lunch, item("2", 450));
        store.add_food_item(MealName::Snacks, item("3", 130));

        let consumed = store.consumed();
        assert_eq!(consumed.calories, 900);
        assert_eq!(consumed.protein_g, 30);
        assert_eq!(consumed.carbs_g, 60);
        assert_eq!(consumed.fat_g, 15);
    }

    #[test]
    fn removing_an_item_subtracts_its_contribution() {
        let mut store = store_with(NutritionSeed::default());
        store.add_food_item(MealName::Dinner, item("1", 577));
        store.add_food_item(MealName::Dinner, item("2", 200));
        let before = store.consumed();

        assert!(store.remove_food_item(MealName::Dinner, "2"));
        let after = store.consumed();
        assert_eq!(before.calories - after.calories, 200);
        assert_eq!(before.protein_g - after.protein_g, 10);
    }

    #[test]
    fn removing_unknown_id_is_a_noop() {
        let mut store = store_with(NutritionSeed::default());
        store.add_food_item(MealName::Dinner, item("1", 577));

        assert!(!store.remove_food_item(MealName::Dinner, "missing"));
        assert_eq!(store.consumed().calories, 577);
    }

    #[test]
    fn update_is_idempotent() {
        let mut store = store_with(NutritionSeed::default());
        store.add_food_item(MealName::Lunch, item("1", 450));

        let replacement = item("1", 500);
        assert!(store.update_food_item(MealName::Lunch, "1", replacement.clone()));
        let once = store.consumed();
        assert!(store.update_food_item(MealName::Lunch, "1", replacement));
        assert_eq!(store.consumed(), once);
        assert_eq!(once.calories, 500);
    }

    #[test]
    fn update_preserves_item_identity() {
        let mut store = store_with(NutritionSeed::default());
        store.add_food_item(MealName::Lunch, item("1", 450));

        let mut replacement = item("9", 500);
        replacement.name = "Renamed".to_owned();
        assert!(store.update_food_item(MealName::Lunch, "1", replacement));

        let stored = &store.meal(MealName::Lunch).items[0];
        assert_eq!(stored.id, "1");
        assert_eq!(stored.name, "Renamed");
    }

    #[test]
    fn calories_left_can_go_negative() {
        let mut store = store_with(NutritionSeed::default());
        store.add_food_item(MealName::Dinner, item("1", 2500));
        assert_eq!(store.calories_left(), 2200 - 2500);
    }

    #[test]
    fn water_stays_within_bounds() {
        let seed = NutritionSeed {
            water_cups: 7,
            ..NutritionSeed::default()
        };
        let mut store = store_with(seed);

        assert!(store.increment_water());
        assert_eq!(store.water_cups(), 8);
        // At the goal bound the increment is a no-op.
        assert!(!store.increment_water());
        assert_eq!(store.water_cups(), 8);

        for _ in 0..8 {
            store.decrement_water();
        }
        assert_eq!(store.water_cups(), 0);
        assert!(!store.decrement_water());
        assert_eq!(store.water_cups(), 0);
    }

    #[test]
    fn set_water_rejects_out_of_range() {
        let mut store = store_with(NutritionSeed::default());
        assert!(store.set_water_cups(5));
        assert!(!store.set_water_cups(9));
        assert_eq!(store.water_cups(), 5);
    }

    #[test]
    fn weekly_average_and_labels() {
        let today = chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(); // a Sunday
        let seed = crate::seed::SeedData::demo(today, chrono::Utc::now()).nutrition;
        let store = store_with(seed);

        // (2100+1950+2200+1847+2050+1900+2300)/7 = 2049.57 -> 2050
        assert_eq!(store.average_weekly_calories(), 2050);
        let data = store.weekly_calorie_data();
        assert_eq!(data[0].day, "Mon");
        assert_eq!(data[6].day, "Sun");
    }

    #[test]
    fn empty_history_average_is_zero() {
        let store = store_with(NutritionSeed::default());
        assert_eq!(store.average_weekly_calories(), 0);
    }
}
