// ABOUTME: Meal history analyzer computing windowed counts, nutrition balance, and the beef score
// ABOUTME: Pure function of (records, report type, keyword table, today)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! # Meal History Analyzer
//!
//! Aggregates flattened meal records over a weekly (7 day) or monthly
//! (30 day) lookback ending today.
//!
//! ## Window
//!
//! The window starts `window_days` calendar days before today and includes
//! that day. Records dated before the start, or whose date key cannot be
//! parsed, are left out. Dates are compared as local calendar dates built
//! from the key's year/month/day components.
//!
//! ## Per-record aggregation
//!
//! - `count` increments once per record
//! - `beef_count` increments when the ingredient text contains `소고기` or `쇠고기`
//! - every nutrition keyword hit increments its category in `balance` and
//!   joins `unique_ingredients` (first-match order)
//! - `meat_count` increments once per record with at least one protein hit
//!
//! `beef_score = min(100, beef_count / goal * 100)` with goal 4 (weekly) or
//! 15 (monthly).

use babyspoon_core::constants::{analytics, keywords};
use babyspoon_core::date_key::{days_before, local_today, parse_date_key};
use babyspoon_core::models::MealHistoryRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::classifier::normalize;
use crate::config::AnalysisConfig;
use crate::nutrition::{NutritionBalance, NutritionKeywords, UniqueIngredients};

/// Reporting window selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Seven-day lookback
    #[default]
    Weekly,
    /// Thirty-day lookback
    Monthly,
}

impl ReportType {
    /// Parse a selector; anything other than `weekly` selects the monthly window
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("weekly") {
            Self::Weekly
        } else {
            Self::Monthly
        }
    }

    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!("unknown report type '{other}' (expected weekly or monthly)")),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregates for one reporting window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Records inside the window
    pub count: u32,
    /// Records containing beef
    pub beef_count: u32,
    /// Records with at least one protein keyword
    pub meat_count: u32,
    /// Distinct matched nutrition keywords, first-match order
    pub unique_ingredients: Vec<String>,
    /// Keyword hits per nutrition category
    pub balance: NutritionBalance,
    /// Beef intake score, 0 to 100
    pub beef_score: f64,
}

/// Analyzer bound to a configuration and keyword table
#[derive(Debug, Clone, Default)]
pub struct MealHistoryAnalyzer {
    config: AnalysisConfig,
    keywords: NutritionKeywords,
}

impl MealHistoryAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new(config: AnalysisConfig, keywords: NutritionKeywords) -> Self {
        Self { config, keywords }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Keyword table in use
    #[must_use]
    pub const fn keywords(&self) -> &NutritionKeywords {
        &self.keywords
    }

    /// First day included in the window ending `today`
    #[must_use]
    pub fn window_start(&self, report_type: ReportType, today: NaiveDate) -> NaiveDate {
        days_before(today, self.config.window_days(report_type))
    }

    /// Aggregate records inside the window ending `today`
    #[must_use]
    pub fn analyze(
        &self,
        records: &[MealHistoryRecord],
        report_type: ReportType,
        today: NaiveDate,
    ) -> AnalysisResult {
        let start = self.window_start(report_type, today);
        let mut balance = NutritionBalance::default();
        let mut unique = UniqueIngredients::default();
        let mut count = 0_u32;
        let mut beef_count = 0_u32;
        let mut meat_count = 0_u32;

        for record in records {
            let Some(date) = parse_date_key(&record.date) else {
                continue;
            };
            if date < start {
                continue;
            }

            count += 1;
            let ingredients = normalize(record.ingredients());
            if contains_beef(&ingredients) {
                beef_count += 1;
            }
            if self
                .keywords
                .classify_normalized(&ingredients, &mut balance, Some(&mut unique))
            {
                meat_count += 1;
            }
        }

        let beef_score = beef_score(beef_count, self.config.beef_goal(report_type));
        debug!(
            report = %report_type,
            %start,
            %today,
            count,
            beef_count,
            meat_count,
            "Analyzed meal history"
        );

        AnalysisResult {
            count,
            beef_count,
            meat_count,
            unique_ingredients: unique.into_vec(),
            balance,
            beef_score,
        }
    }
}

/// Whether normalized ingredient text mentions beef
fn contains_beef(normalized: &str) -> bool {
    keywords::BEEF
        .iter()
        .any(|keyword| normalized.contains(keyword))
}

/// `min(100, beef_count / goal * 100)`; a zero goal scores 0
#[must_use]
pub fn beef_score(beef_count: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (f64::from(beef_count) / f64::from(goal) * analytics::MAX_SCORE).min(analytics::MAX_SCORE)
}

/// Aggregate `records` for the window ending `today` with the default goals
#[must_use]
pub fn analyze_meal_history(
    records: &[MealHistoryRecord],
    report_type: ReportType,
    keywords: &NutritionKeywords,
    today: NaiveDate,
) -> AnalysisResult {
    MealHistoryAnalyzer::new(AnalysisConfig::default(), keywords.clone())
        .analyze(records, report_type, today)
}

/// Aggregate `records` for the window ending on the local wall-clock date
#[must_use]
pub fn analyze_meal_history_now(
    records: &[MealHistoryRecord],
    report_type: ReportType,
    keywords: &NutritionKeywords,
) -> AnalysisResult {
    analyze_meal_history(records, report_type, keywords, local_today())
}
