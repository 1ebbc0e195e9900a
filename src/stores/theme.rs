// ABOUTME: Theme store: the light/dark preference, the only durably persisted state
// ABOUTME: Loads from the preference repository at startup and persists on toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! UI theme preference.
//!
//! Stored under the fixed key `"theme"` with the values `"light"` /
//! `"dark"`. A missing, unreadable or unrecognized stored value falls back
//! to the light default; the toggle applies in memory first and then
//! persists, so a storage failure never reverts what the user sees.

use std::rc::Rc;

use tracing::warn;

use crate::constants::preferences;
use crate::errors::AppResult;
use crate::events::{DomainEvent, EventBus};
use crate::models::Theme;
use crate::repository::PreferenceRepository;

/// State container for the theme preference.
pub struct ThemeStore {
    theme: Theme,
    preferences: Rc<dyn PreferenceRepository>,
    bus: Rc<EventBus>,
}

impl ThemeStore {
    /// Build the store, reapplying the persisted preference if one exists.
    #[must_use]
    pub fn new(preferences: Rc<dyn PreferenceRepository>, bus: Rc<EventBus>) -> Self {
        let theme = match preferences.get(preferences::THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unrecognized stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(error = %err, "failed to load theme preference");
                Theme::default()
            }
        };

        Self {
            theme,
            preferences,
            bus,
        }
    }

    /// The theme currently in effect.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch between light and dark, persist the choice, and announce the
    /// change. The in-memory switch happens even when persisting fails;
    /// the error is returned so the caller can surface it.
    pub fn toggle(&mut self) -> AppResult<Theme> {
        self.theme = self.theme.toggled();
        self.bus.publish(&DomainEvent::ThemeChanged { theme: self.theme });

        self.preferences
            .set(preferences::THEME_KEY, &self.theme.to_string())?;
        Ok(self.theme)
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
