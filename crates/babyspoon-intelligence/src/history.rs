// ABOUTME: History flattener turning the nested meal plan into chronological meal records
// ABOUTME: Also groups flattened records by date key for the timeline view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use babyspoon_core::date_key::parse_date_key;
use babyspoon_core::models::{MealHistoryRecord, MealPlan};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

/// One record per recorded entry, most recent date first.
///
/// Legacy single-object buckets contribute one record. Records on the same
/// date keep the meal plan's iteration order. Date keys that cannot be parsed
/// sort after every valid date.
#[must_use]
pub fn flatten_meal_plan(meal_plan: &MealPlan) -> Vec<MealHistoryRecord> {
    let mut records: Vec<MealHistoryRecord> = meal_plan
        .days()
        .flat_map(|(date, day)| {
            day.buckets().flat_map(move |(meal_type, bucket)| {
                bucket
                    .entries()
                    .iter()
                    .map(move |entry| MealHistoryRecord::new(date, meal_type, entry.clone()))
            })
        })
        .collect();

    records.sort_by_key(|record| Reverse(parse_date_key(&record.date)));
    debug!(
        days = meal_plan.day_count(),
        records = records.len(),
        "Flattened meal plan"
    );
    records
}

/// Records grouped by date key; records without a date are skipped
#[must_use]
pub fn group_history_by_date(
    records: &[MealHistoryRecord],
) -> BTreeMap<String, Vec<MealHistoryRecord>> {
    let mut groups: BTreeMap<String, Vec<MealHistoryRecord>> = BTreeMap::new();
    for record in records.iter().filter(|record| !record.date.is_empty()) {
        groups
            .entry(record.date.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Number of recorded meals across the whole plan
#[must_use]
pub fn total_meal_count(meal_plan: &MealPlan) -> usize {
    meal_plan.total_entries()
}

/// Flattened records of the days whose keys fall in `[start_key, end_key]`
#[must_use]
pub fn meals_in_range(
    meal_plan: &MealPlan,
    start_key: &str,
    end_key: &str,
) -> Vec<MealHistoryRecord> {
    flatten_meal_plan(&meal_plan.in_range(start_key, end_key))
}
