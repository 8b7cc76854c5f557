// ABOUTME: Analytics configuration: reporting windows, beef goals, and keyword overrides
// ABOUTME: Defaults reproduce the bundled weekly/monthly report behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Analytics configuration.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use babyspoon_core::constants::{analytics, keywords};
use serde::{Deserialize, Serialize};

use crate::meal_analyzer::{MealHistoryAnalyzer, ReportType};
use crate::nutrition::NutritionKeywords;

/// Reporting windows and scoring goals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lookback of the weekly report in days
    pub weekly_window_days: i64,
    /// Lookback of the monthly report in days
    pub monthly_window_days: i64,
    /// Beef servings per weekly window that yield a full score
    pub weekly_beef_goal: u32,
    /// Beef servings per monthly window that yield a full score
    pub monthly_beef_goal: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weekly_window_days: analytics::WEEKLY_WINDOW_DAYS,
            monthly_window_days: analytics::MONTHLY_WINDOW_DAYS,
            weekly_beef_goal: analytics::WEEKLY_BEEF_GOAL,
            monthly_beef_goal: analytics::MONTHLY_BEEF_GOAL,
        }
    }
}

impl AnalysisConfig {
    /// Lookback in days for a report type
    #[must_use]
    pub const fn window_days(&self, report_type: ReportType) -> i64 {
        match report_type {
            ReportType::Weekly => self.weekly_window_days,
            ReportType::Monthly => self.monthly_window_days,
        }
    }

    /// Beef goal for a report type
    #[must_use]
    pub const fn beef_goal(&self, report_type: ReportType) -> u32 {
        match report_type {
            ReportType::Weekly => self.weekly_beef_goal,
            ReportType::Monthly => self.monthly_beef_goal,
        }
    }

    /// Validate windows and goals
    ///
    /// # Errors
    ///
    /// Returns an error if a window is not positive, if the weekly window is
    /// longer than the monthly one, or if a goal is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for report in [ReportType::Weekly, ReportType::Monthly] {
            let days = self.window_days(report);
            if days <= 0 {
                return Err(ConfigError::NonPositiveWindow { report, days });
            }
            if self.beef_goal(report) == 0 {
                return Err(ConfigError::ZeroGoal(report));
            }
        }
        if self.weekly_window_days > self.monthly_window_days {
            return Err(ConfigError::WindowOrder {
                weekly: self.weekly_window_days,
                monthly: self.monthly_window_days,
            });
        }
        Ok(())
    }
}

/// Serializable nutrition keyword lists, e.g. loaded from a JSON override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionKeywordLists {
    /// Grain and starch keywords
    pub carbs: Vec<String>,
    /// Protein keywords
    pub protein: Vec<String>,
    /// Vegetable keywords
    pub veggies: Vec<String>,
    /// Fruit keywords
    pub fruits: Vec<String>,
}

impl Default for NutritionKeywordLists {
    fn default() -> Self {
        let owned = |list: &[&str]| -> Vec<String> {
            list.iter().map(|keyword| (*keyword).to_owned()).collect()
        };
        Self {
            carbs: owned(keywords::CARBS),
            protein: owned(keywords::PROTEIN),
            veggies: owned(keywords::VEGGIES),
            fruits: owned(keywords::FRUITS),
        }
    }
}

/// Contents of an analytics settings file.
///
/// Both sections are optional; a missing section or field keeps the bundled
/// default:
///
/// ```json
/// {
///   "analysis": { "weekly_beef_goal": 3 },
///   "keywords": { "fruits": ["사과", "망고"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Reporting windows and goals
    pub analysis: AnalysisConfig,
    /// Nutrition keyword lists
    pub keywords: NutritionKeywordLists,
}

impl AnalyticsSettings {
    /// Parse and validate settings from JSON
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed JSON and a validation error for
    /// unusable windows or goals.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.analysis.validate()?;
        Ok(settings)
    }

    /// Analyzer using these windows, goals, and keywords
    #[must_use]
    pub fn analyzer(&self) -> MealHistoryAnalyzer {
        MealHistoryAnalyzer::new(self.analysis.clone(), NutritionKeywords::from(&self.keywords))
    }
}

impl From<&NutritionKeywordLists> for NutritionKeywords {
    fn from(lists: &NutritionKeywordLists) -> Self {
        Self::from_lists(
            lists.carbs.as_slice(),
            lists.protein.as_slice(),
            lists.veggies.as_slice(),
            lists.fruits.as_slice(),
        )
    }
}
