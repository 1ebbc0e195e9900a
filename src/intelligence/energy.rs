// ABOUTME: Energy-balance calculations: BMR, TDEE, calorie targets and goal timelines
// ABOUTME: Implements Mifflin-St Jeor with activity-factor scaling over the user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Energy Calculator Module
//!
//! Evidence-based energy-balance calculations for the profile screens.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - McArdle, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology* -
//!   activity-factor table for total daily energy expenditure.
//!
//! All inputs come from the in-process [`crate::models::UserProfile`], whose
//! fields are already typed and bounded by the UI, so the functions are
//! infallible; validation belongs to the edit path, not the read path.

use crate::constants::{activity_factors, energy, schedule};
use crate::models::{ActivityLevel, Gender};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990).
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Men: +5
/// - Women and other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let weight_component = energy::MSJ_WEIGHT_COEF * weight_kg;
    let height_component = energy::MSJ_HEIGHT_COEF * height_cm;
    let age_component = energy::MSJ_AGE_COEF * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => energy::MSJ_MALE_CONSTANT,
        Gender::Female | Gender::Other => energy::MSJ_FEMALE_CONSTANT,
    };

    weight_component + height_component - age_component + gender_constant
}

/// The TDEE multiplier for an activity level.
///
/// # Reference
/// McArdle et al. (2010) - Exercise Physiology
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => activity_factors::SEDENTARY,
        ActivityLevel::Light => activity_factors::LIGHT,
        ActivityLevel::Moderate => activity_factors::MODERATE,
        ActivityLevel::Active => activity_factors::ACTIVE,
        ActivityLevel::VeryActive => activity_factors::VERY_ACTIVE,
    }
}

/// Total Daily Energy Expenditure: BMR scaled by the activity factor,
/// rounded to the nearest kilocalorie.
#[must_use]
pub fn total_daily_energy(bmr: f64, level: ActivityLevel) -> i64 {
    (bmr * activity_multiplier(level)).round() as i64
}

/// Recommended daily calorie intake for a desired weekly weight change.
///
/// One kilogram of body mass is treated as 7700 kcal, so the weekly change
/// target spreads into a daily adjustment of `change_kg x 7700 / 7` on top
/// of TDEE. Negative change (weight loss) lowers the recommendation.
#[must_use]
pub fn recommended_calories(tdee: i64, weekly_change_kg: f64) -> i64 {
    let daily_adjustment = weekly_change_kg * energy::KCAL_PER_KG_BODY_MASS / energy::DAYS_PER_WEEK;
    (tdee as f64 + daily_adjustment).round() as i64
}

/// Estimated weeks to reach the target weight at the given weekly rate.
///
/// Returns 0 for a zero rate (maintenance). The sign of the rate is
/// ignored; only the magnitude of the remaining change matters.
#[must_use]
pub fn weeks_to_goal(current_weight_kg: f64, target_weight_kg: f64, weekly_change_kg: f64) -> u32 {
    if weekly_change_kg.abs() < f64::EPSILON {
        return 0;
    }

    let total_change_kg = target_weight_kg - current_weight_kg;
    (total_change_kg / weekly_change_kg).abs().round() as u32
}

/// Human-readable goal time frame: "Maintenance", "`N` weeks" under a
/// month, otherwise months at four weeks per month.
#[must_use]
pub fn format_time_to_goal(weeks: u32) -> String {
    if weeks == 0 {
        return "Maintenance".to_owned();
    }

    if weeks < 4 {
        format!("{weeks} weeks")
    } else {
        let months = (f64::from(weeks) / schedule::WEEKS_PER_MONTH).round() as u32;
        let unit = if months == 1 { "month" } else { "months" };
        format!("{months} {unit}")
    }
}
