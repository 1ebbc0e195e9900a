// ABOUTME: Integration tests for the profile store and energy recommendations
// ABOUTME: Validates BMR/TDEE formulas, goal timelines and typed update commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittracker_core::context::AppContext;
use fittracker_core::models::{ActivityKind, ActivityLevel, Gender};
use fittracker_core::seed::SeedData;
use fittracker_core::stores::{GoalsUpdate, ProfileUpdate};

fn reference_context() -> AppContext {
    // Default seed profile: male, 75 kg, 175 cm, age 25, moderate.
    let mut ctx = AppContext::new(SeedData::default());
    ctx.profile.update_profile(ProfileUpdate::Age(28));
    ctx.profile.update_profile(ProfileUpdate::HeightCm(180.0));
    ctx
}

#[test]
fn bmr_follows_mifflin_st_jeor() {
    let ctx = reference_context();
    // 10*75 + 6.25*180 - 5*28 + 5
    assert!((ctx.profile.bmr() - 1740.0).abs() < f64::EPSILON);
}

#[test]
fn bmr_gender_constants() {
    let mut ctx = reference_context();
    ctx.profile.update_profile(ProfileUpdate::Gender(Gender::Female));
    // Same profile, -161 instead of +5.
    assert!((ctx.profile.bmr() - 1574.0).abs() < f64::EPSILON);

    ctx.profile.update_profile(ProfileUpdate::Gender(Gender::Other));
    assert!((ctx.profile.bmr() - 1574.0).abs() < f64::EPSILON);
}

#[test]
fn tdee_uses_the_activity_multiplier_table() {
    let mut ctx = reference_context();
    // round(1740 * 1.55)
    assert_eq!(ctx.profile.tdee(), 2697);

    ctx.profile
        .update_profile(ProfileUpdate::ActivityLevel(ActivityLevel::Sedentary));
    assert_eq!(ctx.profile.tdee(), 2088);

    ctx.profile
        .update_profile(ProfileUpdate::ActivityLevel(ActivityLevel::VeryActive));
    assert_eq!(ctx.profile.tdee(), 3306);
}

#[test]
fn recommended_calories_spread_the_weekly_change_over_seven_days() {
    let ctx = reference_context();
    // -0.5 kg/week = -550 kcal/day under TDEE 2697.
    assert_eq!(ctx.profile.recommended_calories(), 2147);
}

#[test]
fn time_to_goal_formula_and_formatting() {
    let mut ctx = reference_context();
    // |70 - 75| / 0.5 = 10 weeks -> round(10/4) = 3 months.
    assert_eq!(ctx.profile.estimated_weeks_to_goal(), 10);
    assert_eq!(ctx.profile.formatted_time_to_goal(), "3 months");

    ctx.profile
        .update_goals(GoalsUpdate::TargetWeightKg(74.0));
    // |74 - 75| / 0.5 = 2 weeks.
    assert_eq!(ctx.profile.estimated_weeks_to_goal(), 2);
    assert_eq!(ctx.profile.formatted_time_to_goal(), "2 weeks");

    ctx.profile
        .update_goals(GoalsUpdate::WeeklyWeightChangeKg("0".to_owned()));
    assert_eq!(ctx.profile.formatted_time_to_goal(), "Maintenance");
}

#[test]
fn unparseable_weekly_change_behaves_as_maintenance() {
    let mut ctx = reference_context();
    ctx.profile
        .update_goals(GoalsUpdate::WeeklyWeightChangeKg("soon".to_owned()));

    assert_eq!(ctx.profile.estimated_weeks_to_goal(), 0);
    assert_eq!(ctx.profile.recommended_calories(), ctx.profile.tdee());
}

#[test]
fn weight_updates_flow_into_bmr_and_the_feed() {
    let mut ctx = reference_context();
    let before = ctx.profile.bmr();

    ctx.profile
        .update_profile(ProfileUpdate::CurrentWeightKg(80.0));

    assert!((ctx.profile.bmr() - before - 50.0).abs() < f64::EPSILON);
    let feed = ctx.feed.borrow();
    assert_eq!(feed.entries()[0].kind, ActivityKind::Weight);
    assert_eq!(feed.entries()[0].title, "Updated weight to 80 kg");
}

#[test]
fn profile_and_goal_commands_apply_their_fields() {
    let mut ctx = AppContext::new(SeedData::default());

    ctx.profile
        .update_profile(ProfileUpdate::FullName("Jane Doe".to_owned()));
    ctx.profile
        .update_profile(ProfileUpdate::Email("jane@example.com".to_owned()));
    ctx.profile
        .update_goals(GoalsUpdate::WorkoutsPerWeek("5".to_owned()));
    ctx.profile.update_goals(GoalsUpdate::TargetDailyCalories(1900));

    assert_eq!(ctx.profile.profile().full_name, "Jane Doe");
    assert_eq!(ctx.profile.profile().email, "jane@example.com");
    assert_eq!(ctx.profile.goals().workouts_per_week, "5");
    assert_eq!(ctx.profile.goals().target_daily_calories, 1900);
}
