// ABOUTME: Integration tests for the activity feed and its event-bus wiring
// ABOUTME: Validates the entry cap, ordering, age formatting and feed side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use fittracker_core::context::AppContext;
use fittracker_core::models::{ActivityKind, FoodItem, MealName};
use fittracker_core::seed::SeedData;
use fittracker_core::stores::ActivityFeed;

fn item(id: &str, name: &str) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: name.to_owned(),
        calories: 100,
        protein_g: 5,
        carbs_g: 10,
        fat_g: 2,
    }
}

#[test]
fn feed_never_exceeds_twenty_entries() {
    let mut ctx = AppContext::new(SeedData::default());

    for i in 0..21 {
        ctx.nutrition
            .add_food_item(MealName::Snacks, item(&i.to_string(), &format!("Snack {i}")));
    }

    let feed = ctx.feed.borrow();
    assert_eq!(feed.entries().len(), 20);
    // Newest first; the very first snack fell off the end.
    assert_eq!(feed.entries()[0].title, "Added Snack 20");
    assert_eq!(feed.entries()[19].title, "Added Snack 1");
    assert!(feed.entries().iter().all(|e| e.title != "Added Snack 0"));
}

#[test]
fn mutations_across_stores_interleave_in_one_feed() {
    let mut ctx = AppContext::new(SeedData::default());

    ctx.nutrition
        .add_food_item(MealName::Breakfast, item("1", "Oatmeal"));
    ctx.nutrition.increment_water();

    let feed = ctx.feed.borrow();
    assert_eq!(feed.entries().len(), 2);
    assert_eq!(feed.entries()[0].kind, ActivityKind::Water);
    assert_eq!(feed.entries()[1].kind, ActivityKind::Meal);
    assert_eq!(
        feed.entries()[1].subtitle.as_deref(),
        Some("100 kcal • Breakfast")
    );
}

#[test]
fn clear_empties_the_log() {
    let mut ctx = AppContext::new(SeedData::demo(Utc::now().date_naive(), Utc::now()));
    assert!(!ctx.feed.borrow().entries().is_empty());

    ctx.feed.borrow_mut().clear();
    assert!(ctx.feed.borrow().entries().is_empty());
}

#[test]
fn seeded_entries_survive_and_sort_newest_first() {
    let now = Utc::now();
    let ctx = AppContext::new(SeedData::demo(now.date_naive(), now));

    let sorted = ctx.feed.borrow().sorted_entries();
    for pair in sorted.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
}

#[test]
fn time_ago_brackets_match_the_display_contract() {
    let now = Utc::now();
    let ago = |duration: Duration| ActivityFeed::time_ago(now - duration, now);

    assert_eq!(ago(Duration::seconds(10)), "Just now");
    assert_eq!(ago(Duration::minutes(2)), "2 minutes ago");
    assert_eq!(ago(Duration::hours(3)), "3 hours ago");
    assert_eq!(ago(Duration::days(1)), "Yesterday");
    assert_eq!(ago(Duration::days(6)), "6 days ago");

    let old = chrono::DateTime::parse_from_rfc3339("2024-03-15T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(
        ActivityFeed::time_ago(old, old + Duration::days(45)),
        "Mar 15, 2024"
    );
}
