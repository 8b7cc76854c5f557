// ABOUTME: Seven-day per-category nutrition series for the weekly chart
// ABOUTME: One entry per calendar day from today minus six through today, ascending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use babyspoon_core::constants::analytics;
use babyspoon_core::date_key::{days_before, local_today, to_date_key};
use babyspoon_core::models::MealHistoryRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::classifier::normalize;
use crate::nutrition::{NutritionBalance, NutritionKeywords};

/// Per-day nutrition counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyChartEntry {
    /// `YYYY-MM-DD` key of the day
    pub date: String,
    /// Carbohydrate matches
    pub carbs: u32,
    /// Protein matches
    pub protein: u32,
    /// Vegetable matches
    pub veggies: u32,
    /// Fruit matches
    pub fruits: u32,
}

impl WeeklyChartEntry {
    fn from_balance(date: String, balance: NutritionBalance) -> Self {
        Self {
            date,
            carbs: balance.carbs,
            protein: balance.protein,
            veggies: balance.veggies,
            fruits: balance.fruits,
        }
    }
}

/// Exactly seven entries ending `today`.
///
/// A record contributes to the day whose key equals its date key; records
/// outside the seven days are ignored.
#[must_use]
pub fn build_weekly_chart_data(
    records: &[MealHistoryRecord],
    keywords: &NutritionKeywords,
    today: NaiveDate,
) -> Vec<WeeklyChartEntry> {
    let days: Vec<String> = (0..analytics::CHART_DAYS)
        .rev()
        .map(|offset| to_date_key(days_before(today, offset)))
        .collect();

    let mut balances: HashMap<&str, NutritionBalance> = days
        .iter()
        .map(|day| (day.as_str(), NutritionBalance::default()))
        .collect();

    for record in records {
        if let Some(balance) = balances.get_mut(record.date.as_str()) {
            keywords.classify_normalized(&normalize(record.ingredients()), balance, None);
        }
    }

    days.iter()
        .map(|day| {
            let balance = balances.get(day.as_str()).copied().unwrap_or_default();
            WeeklyChartEntry::from_balance(day.clone(), balance)
        })
        .collect()
}

/// Weekly series ending on the local wall-clock date
#[must_use]
pub fn build_weekly_chart_data_now(
    records: &[MealHistoryRecord],
    keywords: &NutritionKeywords,
) -> Vec<WeeklyChartEntry> {
    build_weekly_chart_data(records, keywords, local_today())
}
