// ABOUTME: Shared fixtures for babyspoon-intelligence integration tests
// ABOUTME: Builds meal records and keyword tables relative to a fixed "today"
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use babyspoon_core::date_key::{days_before, to_date_key};
use babyspoon_core::models::{MealEntry, MealHistoryRecord, RecipeSnapshot};
use babyspoon_intelligence::NutritionKeywords;
use chrono::NaiveDate;

/// Fixed reference date so window arithmetic is reproducible
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

/// Date key `days` before the reference date
pub fn key_days_ago(days: i64) -> String {
    to_date_key(days_before(today(), days))
}

/// Record with only ingredient text filled in
pub fn record(date: &str, ingredients: &str) -> MealHistoryRecord {
    let snapshot = RecipeSnapshot {
        name: Some(format!("meal {ingredients}")),
        ingredients: Some(ingredients.to_owned()),
        ..RecipeSnapshot::default()
    };
    MealHistoryRecord::new(date, "점심", MealEntry::new(0, snapshot))
}

/// Record dated `days` before the reference date
pub fn record_days_ago(days: i64, ingredients: &str) -> MealHistoryRecord {
    record(&key_days_ago(days), ingredients)
}

/// Small keyword table used by the worked examples
pub fn small_keywords() -> NutritionKeywords {
    NutritionKeywords::from_lists(&["쌀", "감자"], &["소고기", "두부"], &["당근"], &["사과"])
}
