// ABOUTME: Environment configuration for the babyspoon application layer
// ABOUTME: Reads data directory, catalog and analytics settings paths, and search knobs from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Environment-based configuration

use babyspoon_core::constants::limits;
use babyspoon_core::{AppError, AppResult};
use babyspoon_intelligence::{AnalyticsSettings, MealHistoryAnalyzer};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::debounce::Debouncer;

/// Data directory override
pub const DATA_DIR_VAR: &str = "BABYSPOON_DATA_DIR";
/// Recipe catalog path override
pub const CATALOG_VAR: &str = "BABYSPOON_CATALOG";
/// Analytics settings file override
pub const ANALYTICS_VAR: &str = "BABYSPOON_ANALYTICS";
/// Search debounce delay in milliseconds
pub const DEBOUNCE_VAR: &str = "BABYSPOON_SEARCH_DEBOUNCE_MS";
/// Cap for the recommended sample
pub const RECOMMENDED_LIMIT_VAR: &str = "BABYSPOON_RECOMMENDED_LIMIT";
/// Cap for the recent-search list
pub const RECENT_SEARCH_LIMIT_VAR: &str = "BABYSPOON_RECENT_SEARCH_LIMIT";
/// Deployment environment
pub const ENVIRONMENT_VAR: &str = "BABYSPOON_ENV";

/// Catalog file name inside the data directory
const DEFAULT_CATALOG_FILE: &str = "recipes.json";
/// Analytics settings file name inside the data directory
const DEFAULT_ANALYTICS_FILE: &str = "analytics.json";
/// Directory name appended to the platform data dir
const APP_DIR_NAME: &str = "babyspoon";

/// Environment type for runtime behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Shipped build
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding persisted state
    pub data_dir: PathBuf,
    /// Recipe catalog JSON file
    pub catalog_path: PathBuf,
    /// Optional analytics settings JSON (windows, goals, keyword lists)
    pub analytics_path: PathBuf,
    /// Quiet period before a typed search term is applied
    pub search_debounce: Duration,
    /// Cap for the recommended sample
    pub recommended_limit: usize,
    /// Cap for the recent-search list
    pub recent_search_limit: usize,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            catalog_path: data_dir.join(DEFAULT_CATALOG_FILE),
            analytics_path: data_dir.join(DEFAULT_ANALYTICS_FILE),
            data_dir,
            search_debounce: Duration::from_millis(limits::DEFAULT_DEBOUNCE_MS),
            recommended_limit: limits::RECOMMENDED_LIMIT,
            recent_search_limit: limits::RECENT_SEARCH_LIMIT,
            environment: Environment::Development,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error if a numeric variable is set but malformed, or
    /// if a limit is zero.
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var(DATA_DIR_VAR).map_or_else(|_| default_data_dir(), PathBuf::from);
        let catalog_path = env::var(CATALOG_VAR)
            .map_or_else(|_| data_dir.join(DEFAULT_CATALOG_FILE), PathBuf::from);
        let analytics_path = env::var(ANALYTICS_VAR)
            .map_or_else(|_| data_dir.join(DEFAULT_ANALYTICS_FILE), PathBuf::from);
        let environment = env::var(ENVIRONMENT_VAR)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            data_dir,
            catalog_path,
            analytics_path,
            search_debounce: Duration::from_millis(parse_env_or(
                DEBOUNCE_VAR,
                limits::DEFAULT_DEBOUNCE_MS,
            )?),
            recommended_limit: parse_env_or(RECOMMENDED_LIMIT_VAR, limits::RECOMMENDED_LIMIT)?,
            recent_search_limit: parse_env_or(
                RECENT_SEARCH_LIMIT_VAR,
                limits::RECENT_SEARCH_LIMIT,
            )?,
            environment,
        };
        config.validate()?;

        info!(
            data_dir = %config.data_dir.display(),
            catalog = %config.catalog_path.display(),
            environment = %config.environment,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Same configuration rooted at another data directory.
    ///
    /// Catalog and analytics paths still at their default locations move with
    /// the data directory; explicit paths are kept.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        if self.catalog_path == self.data_dir.join(DEFAULT_CATALOG_FILE) {
            self.catalog_path = data_dir.join(DEFAULT_CATALOG_FILE);
        }
        if self.analytics_path == self.data_dir.join(DEFAULT_ANALYTICS_FILE) {
            self.analytics_path = data_dir.join(DEFAULT_ANALYTICS_FILE);
        }
        self.data_dir = data_dir;
        self
    }

    /// Search-term debouncer using the configured quiet period
    #[must_use]
    pub fn search_debouncer(&self) -> Debouncer<String> {
        Debouncer::new(self.search_debounce, String::new())
    }

    /// Analyzer configured by the analytics settings file.
    ///
    /// A missing file yields the bundled windows, goals, and keywords.
    ///
    /// # Errors
    ///
    /// Returns a config error if the file exists but cannot be read, does not
    /// parse, or fails validation.
    pub fn load_analyzer(&self) -> AppResult<MealHistoryAnalyzer> {
        let path = &self.analytics_path;
        if !path.exists() {
            debug!(path = %path.display(), "No analytics settings, using defaults");
            return Ok(MealHistoryAnalyzer::default());
        }
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("analytics settings {}", path.display())).with_source(e)
        })?;
        let settings = AnalyticsSettings::from_json(&json)
            .map_err(|e| AppError::config(format!("{}: {e}", path.display())))?;
        info!(
            path = %path.display(),
            weekly_goal = settings.analysis.weekly_beef_goal,
            monthly_goal = settings.analysis.monthly_beef_goal,
            "Loaded analytics settings"
        );
        Ok(settings.analyzer())
    }

    /// Validate limits
    ///
    /// # Errors
    ///
    /// Returns a config error if a limit is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.recommended_limit == 0 {
            return Err(AppError::config(format!(
                "{RECOMMENDED_LIMIT_VAR} must be at least 1"
            )));
        }
        if self.recent_search_limit == 0 {
            return Err(AppError::config(format!(
                "{RECENT_SEARCH_LIMIT_VAR} must be at least 1"
            )));
        }
        Ok(())
    }
}

/// Platform data directory with the application folder appended
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory, falling back to the working directory");
            PathBuf::from(".").join(APP_DIR_NAME)
        },
        |dir| dir.join(APP_DIR_NAME),
    )
}

/// Parse an environment variable, using `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{key}='{raw}' is invalid: {e}"))),
        Err(_) => Ok(default),
    }
}
