// ABOUTME: Persisted meal plan: date key -> meal type label -> recorded recipe snapshots
// ABOUTME: Accepts legacy single-object buckets and skips falsy or malformed buckets and days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Meal plan model.
//!
//! The stored shape is
//!
//! ```text
//! {
//!   "2026-01-01": { "아침": [ { "entryId": 1767225600000, "name": "...", ... } ] },
//!   "2026-01-03": { "저녁": { "id": "r2", "name": "B" } }
//! }
//! ```
//!
//! where a bucket is either a list of entries or, in data written by early
//! revisions, a single entry object. Both shapes are read; new writes always
//! produce lists.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::slice;

use super::recipe::RecipeSnapshot;

/// When in the day a meal was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealType {
    /// 아침
    Breakfast,
    /// 점심
    Lunch,
    /// 저녁
    Dinner,
    /// 간식
    Snack,
}

impl MealType {
    /// Every meal type in the order of a day
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Persisted bucket label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "아침",
            Self::Lunch => "점심",
            Self::Dinner => "저녁",
            Self::Snack => "간식",
        }
    }

    /// Parse a persisted label or an English alias
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "아침" | "breakfast" => Some(Self::Breakfast),
            "점심" | "lunch" => Some(Self::Lunch),
            "저녁" | "dinner" => Some(Self::Dinner),
            "간식" | "snack" => Some(Self::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded meal: a recipe snapshot plus an entry identifier unique
/// within its (date, meal type) bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealEntry {
    /// Creation timestamp in milliseconds, used to remove this entry
    #[serde(rename = "entryId")]
    pub entry_id: u64,
    /// Recipe as it was when recorded
    #[serde(flatten)]
    pub recipe: RecipeSnapshot,
}

impl MealEntry {
    /// Create an entry from a snapshot
    #[must_use]
    pub const fn new(entry_id: u64, recipe: RecipeSnapshot) -> Self {
        Self { entry_id, recipe }
    }
}

#[derive(Deserialize)]
struct RawMealEntry {
    #[serde(rename = "entryId", default)]
    entry_id: Option<u64>,
    #[serde(flatten)]
    recipe: RecipeSnapshot,
}

impl<'de> Deserialize<'de> for MealEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMealEntry::deserialize(deserializer)?;
        // Early revisions overwrote the recipe id with the creation timestamp
        let entry_id = raw
            .entry_id
            .or_else(|| raw.recipe.id.as_deref().and_then(|id| id.parse().ok()))
            .unwrap_or_default();
        Ok(Self {
            entry_id,
            recipe: raw.recipe,
        })
    }
}

/// Entries recorded for one meal type on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MealBucket {
    /// Legacy shape: a single entry object
    Single(Box<MealEntry>),
    /// Ordered list of entries
    List(Vec<MealEntry>),
}

/// Stored value that is dropped instead of failing the surrounding document
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    #[allow(dead_code)]
    Invalid(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMealBucket {
    List(Vec<Lenient<MealEntry>>),
    Single(Box<MealEntry>),
}

impl<'de> Deserialize<'de> for MealBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawMealBucket::deserialize(deserializer)? {
            RawMealBucket::List(entries) => {
                Self::List(entries.into_iter().filter_map(Lenient::into_option).collect())
            }
            RawMealBucket::Single(entry) => Self::Single(entry),
        })
    }
}

impl MealBucket {
    /// Entries of this bucket, normalizing the legacy shape to a list of one
    #[must_use]
    pub fn entries(&self) -> &[MealEntry] {
        match self {
            Self::Single(entry) => slice::from_ref(entry.as_ref()),
            Self::List(entries) => entries,
        }
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the bucket holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Convert to the list shape
    #[must_use]
    pub fn into_list(self) -> Vec<MealEntry> {
        match self {
            Self::Single(entry) => vec![*entry],
            Self::List(entries) => entries,
        }
    }
}

/// Meal buckets of one day keyed by meal type label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DayPlan {
    buckets: BTreeMap<String, MealBucket>,
}

impl<'de> Deserialize<'de> for DayPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Lenient<MealBucket>>::deserialize(deserializer)?;
        Ok(Self {
            buckets: raw
                .into_iter()
                .filter_map(|(label, bucket)| bucket.into_option().map(|bucket| (label, bucket)))
                .collect(),
        })
    }
}

impl DayPlan {
    /// Buckets keyed by meal type label
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &MealBucket)> {
        self.buckets
            .iter()
            .map(|(label, bucket)| (label.as_str(), bucket))
    }

    /// Bucket for one meal type label
    #[must_use]
    pub fn bucket(&self, meal_type: &str) -> Option<&MealBucket> {
        self.buckets.get(meal_type)
    }

    /// Total entries recorded on this day
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(MealBucket::len).sum()
    }

    /// Whether no bucket is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Persisted meal history: date key -> meal type label -> entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<String, DayPlan>,
}

impl<'de> Deserialize<'de> for MealPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Lenient<DayPlan>>::deserialize(deserializer)?;
        Ok(Self {
            days: raw
                .into_iter()
                .filter_map(|(date, day)| day.into_option().map(|day| (date, day)))
                .filter(|(_, day)| !day.is_empty())
                .collect(),
        })
    }
}

impl MealPlan {
    /// Days keyed by date key, ascending by key
    pub fn days(&self) -> impl Iterator<Item = (&str, &DayPlan)> {
        self.days.iter().map(|(date, day)| (date.as_str(), day))
    }

    /// Plan of a single day
    #[must_use]
    pub fn day(&self, date_key: &str) -> Option<&DayPlan> {
        self.days.get(date_key)
    }

    /// Number of days with at least one bucket
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total recorded entries across every bucket
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.days.values().map(DayPlan::entry_count).sum()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Append an entry to a bucket, converting a legacy bucket to a list
    pub fn record(&mut self, date_key: &str, meal_type: &str, entry: MealEntry) {
        let day = self.days.entry(date_key.to_owned()).or_default();
        let mut entries = day
            .buckets
            .remove(meal_type)
            .map(MealBucket::into_list)
            .unwrap_or_default();
        entries.push(entry);
        day.buckets
            .insert(meal_type.to_owned(), MealBucket::List(entries));
    }

    /// Remove one entry by id.
    ///
    /// A legacy single-object bucket is removed as a whole. Empty buckets and
    /// empty days are pruned. Returns whether anything was removed.
    pub fn remove(&mut self, date_key: &str, meal_type: &str, entry_id: u64) -> bool {
        let Some(day) = self.days.get_mut(date_key) else {
            return false;
        };
        let removed = match day.buckets.get_mut(meal_type) {
            Some(MealBucket::List(entries)) => {
                let before = entries.len();
                entries.retain(|entry| entry.entry_id != entry_id);
                let removed = entries.len() != before;
                if entries.is_empty() {
                    day.buckets.remove(meal_type);
                }
                removed
            }
            Some(MealBucket::Single(_)) => {
                day.buckets.remove(meal_type);
                true
            }
            None => false,
        };
        if day.buckets.is_empty() {
            self.days.remove(date_key);
        }
        removed
    }

    /// Sub-plan of the days whose keys fall in `[start_key, end_key]` (string order)
    #[must_use]
    pub fn in_range(&self, start_key: &str, end_key: &str) -> Self {
        Self {
            days: self
                .days
                .iter()
                .filter(|(date, _)| date.as_str() >= start_key && date.as_str() <= end_key)
                .map(|(date, day)| (date.clone(), day.clone()))
                .collect(),
        }
    }

    /// Forget every recorded meal
    pub fn clear(&mut self) {
        self.days.clear();
    }
}

/// Flattened view of one recorded entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealHistoryRecord {
    /// Date key the entry was recorded under
    pub date: String,
    /// Meal type label of the bucket
    pub meal_type: String,
    /// The recorded entry
    pub recipe: MealEntry,
}

impl MealHistoryRecord {
    /// Create a record
    #[must_use]
    pub fn new(date: impl Into<String>, meal_type: impl Into<String>, recipe: MealEntry) -> Self {
        Self {
            date: date.into(),
            meal_type: meal_type.into(),
            recipe,
        }
    }

    /// Ingredient text of the recorded recipe
    #[must_use]
    pub fn ingredients(&self) -> &str {
        self.recipe.recipe.ingredients_text()
    }
}
