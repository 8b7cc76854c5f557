// ABOUTME: Meal-history analytics engine for babyspoon
// ABOUTME: Keyword classification, history flattening, windowed aggregates, and weekly chart series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

#![deny(unsafe_code)]

//! # Babyspoon Intelligence
//!
//! Pure-function layer over meal-plan snapshots. Nothing here reads ambient
//! state: callers pass the meal plan, the keyword tables, and "today".
//!
//! Pipeline:
//!
//! ```text
//! MealPlan --flatten_meal_plan--> [MealHistoryRecord]
//!          --analyze_meal_history--> AnalysisResult
//!          --build_weekly_chart_data--> [WeeklyChartEntry; 7]
//! ```
//!
//! Malformed input (unparsable date keys, legacy bucket shapes, missing
//! ingredient text) degrades to smaller aggregates, never to an error.

/// Allergy risk detection against a caregiver's avoid-list
pub mod allergy;
/// Case-insensitive substring keyword classifier
pub mod classifier;
/// Analytics configuration (windows, goals, keyword overrides)
pub mod config;
/// Meal plan flattening and grouping
pub mod history;
/// Windowed aggregates over the flattened history
pub mod meal_analyzer;
/// Nutrition categories and counters
pub mod nutrition;
/// Seven-day per-category chart series
pub mod weekly_series;

pub use allergy::{detect_allergy_risks, detect_recipe_allergy_risks, AllergyKeywords};
pub use classifier::KeywordTable;
pub use config::{AnalysisConfig, AnalyticsSettings, ConfigError, NutritionKeywordLists};
pub use history::{flatten_meal_plan, group_history_by_date, meals_in_range, total_meal_count};
pub use meal_analyzer::{
    analyze_meal_history, analyze_meal_history_now, AnalysisResult, MealHistoryAnalyzer,
    ReportType,
};
pub use nutrition::{NutritionBalance, NutritionCategory, NutritionKeywords};
pub use weekly_series::{build_weekly_chart_data, build_weekly_chart_data_now, WeeklyChartEntry};
