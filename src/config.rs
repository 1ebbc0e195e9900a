// ABOUTME: Environment-based application configuration
// ABOUTME: Resolves the preference file location and bundles the logging config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Application configuration.
//!
//! Environment-only configuration, no config files: the few knobs this
//! client has come from environment variables, with platform defaults for
//! the preference file location.

use std::env;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;

/// Directory name under the platform config dir.
const APP_DIR: &str = "fittracker";

/// Preference file name inside the app config directory.
const PREFERENCES_FILE: &str = "preferences.json";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment label (development, staging, production)
    pub environment: String,
    /// Path of the JSON preference file (theme storage)
    pub preferences_file: PathBuf,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `FITTRACKER_PREFERENCES` overrides the preference file location;
    /// otherwise it lives in the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns a config error when no preference location can be resolved
    /// (no override set and no platform config directory available).
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let preferences_file = match env::var("FITTRACKER_PREFERENCES") {
            Ok(path) => PathBuf::from(path),
            Err(_) => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR).join(PREFERENCES_FILE))
                .ok_or_else(|| {
                    AppError::config(
                        "no platform config directory; set FITTRACKER_PREFERENCES",
                    )
                })?,
        };

        Ok(Self {
            environment,
            preferences_file,
            logging: LoggingConfig::from_env(),
        })
    }
}
