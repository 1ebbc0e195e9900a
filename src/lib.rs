// ABOUTME: Main library entry point for the FitTracker domain-state engine
// ABOUTME: Observable stores, derived-value calculators and persistence seams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![deny(unsafe_code)]

//! # FitTracker Core
//!
//! The model layer of a fitness-tracking client: observable state
//! containers for nutrition, workouts, profile/goals and the recent
//! activity feed, plus the derived-value calculations the dashboard,
//! analytics and settings screens read.
//!
//! ## Architecture
//!
//! - **Stores**: explicit state-holding objects, one per screen domain,
//!   wired together by [`context::AppContext`] - no global singletons.
//! - **Events**: every mutation publishes a [`events::DomainEvent`] on a
//!   shared bus; views subscribe, and the activity feed is itself just a
//!   subscriber.
//! - **Intelligence**: derived values are pure functions recomputed on
//!   read, never cached across a mutation.
//! - **Repositories**: every would-be backend call is a trait seam the
//!   stores invoke but the crate does not implement, apart from the
//!   file-backed preference store for the theme.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use fittracker_core::context::AppContext;
//! use fittracker_core::models::MealName;
//! use fittracker_core::seed::SeedData;
//!
//! let today = Utc::now().date_naive();
//! let mut ctx = AppContext::new(SeedData::demo(today, Utc::now()));
//!
//! let consumed = ctx.nutrition.consumed();
//! println!(
//!     "{} kcal eaten, {} left",
//!     consumed.calories,
//!     ctx.nutrition.calories_left()
//! );
//!
//! ctx.nutrition.increment_water();
//! assert_eq!(ctx.feed.borrow().entries()[0].title, "Logged water");
//! ```

/// Environment-based application configuration
pub mod config;

/// Application constants grouped by domain
pub mod constants;

/// Dependency-injection context wiring stores, bus and feed
pub mod context;

/// Unified error handling with standard error codes
pub mod errors;

/// Domain events and the observer bus
pub mod events;

/// Pure derived-value calculators (energy balance, workout analysis)
pub mod intelligence;

/// Logging configuration and structured output
pub mod logging;

/// Core domain data models
pub mod models;

/// Abstract persistence seams and their bundled implementations
pub mod repository;

/// Injectable initial-state fixtures
pub mod seed;

/// Observable state containers for every screen domain
pub mod stores;

/// Test utilities for creating consistent fixture data
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
