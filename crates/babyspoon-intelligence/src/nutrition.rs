// ABOUTME: Nutrition categories, per-category counters, and the nutrition keyword table
// ABOUTME: Classification increments counters and collects matched keywords in first-match order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use babyspoon_core::constants::keywords;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::classifier::KeywordTable;

/// Coarse bucket used for meal-balance analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutritionCategory {
    /// Grains and starches
    Carbs,
    /// Meat, fish, eggs, tofu, beans
    Protein,
    /// Vegetables
    Veggies,
    /// Fruits
    Fruits,
}

impl NutritionCategory {
    /// Every category in reporting order
    pub const ALL: [Self; 4] = [Self::Carbs, Self::Protein, Self::Veggies, Self::Fruits];

    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carbs => "carbs",
            Self::Protein => "protein",
            Self::Veggies => "veggies",
            Self::Fruits => "fruits",
        }
    }
}

impl fmt::Display for NutritionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match counts per nutrition category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionBalance {
    /// Carbohydrate matches
    pub carbs: u32,
    /// Protein matches
    pub protein: u32,
    /// Vegetable matches
    pub veggies: u32,
    /// Fruit matches
    pub fruits: u32,
}

impl NutritionBalance {
    /// Count for one category
    #[must_use]
    pub const fn get(&self, category: NutritionCategory) -> u32 {
        match category {
            NutritionCategory::Carbs => self.carbs,
            NutritionCategory::Protein => self.protein,
            NutritionCategory::Veggies => self.veggies,
            NutritionCategory::Fruits => self.fruits,
        }
    }

    /// Add one to a category
    pub fn increment(&mut self, category: NutritionCategory) {
        let counter = match category {
            NutritionCategory::Carbs => &mut self.carbs,
            NutritionCategory::Protein => &mut self.protein,
            NutritionCategory::Veggies => &mut self.veggies,
            NutritionCategory::Fruits => &mut self.fruits,
        };
        *counter += 1;
    }

    /// Sum over every category
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.carbs + self.protein + self.veggies + self.fruits
    }
}

/// Distinct matched keywords in first-match order
#[derive(Debug, Clone, Default)]
pub struct UniqueIngredients {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl UniqueIngredients {
    /// Add a keyword unless it was already seen
    pub fn insert(&mut self, keyword: &str) {
        if self.seen.insert(keyword.to_owned()) {
            self.order.push(keyword.to_owned());
        }
    }

    /// Number of distinct keywords
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing matched yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keywords in first-match order
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Keyword table over the four nutrition categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionKeywords {
    table: KeywordTable<NutritionCategory>,
}

impl Default for NutritionKeywords {
    fn default() -> Self {
        Self::from_lists(
            keywords::CARBS,
            keywords::PROTEIN,
            keywords::VEGGIES,
            keywords::FRUITS,
        )
    }
}

impl NutritionKeywords {
    /// Build a table from one keyword list per category
    pub fn from_lists<S: AsRef<str>>(
        carbs: &[S],
        protein: &[S],
        veggies: &[S],
        fruits: &[S],
    ) -> Self {
        Self {
            table: KeywordTable::new([
                (NutritionCategory::Carbs, carbs),
                (NutritionCategory::Protein, protein),
                (NutritionCategory::Veggies, veggies),
                (NutritionCategory::Fruits, fruits),
            ]),
        }
    }

    /// Classify already-normalized ingredient text.
    ///
    /// Every matching keyword increments its category in `balance` and, when
    /// given, is added to `unique`. Returns whether any protein keyword matched.
    pub fn classify_normalized(
        &self,
        normalized: &str,
        balance: &mut NutritionBalance,
        mut unique: Option<&mut UniqueIngredients>,
    ) -> bool {
        let mut has_protein = false;
        self.table
            .for_each_match_normalized(normalized, |category, keyword| {
                balance.increment(*category);
                if let Some(unique) = unique.as_deref_mut() {
                    unique.insert(keyword);
                }
                if *category == NutritionCategory::Protein {
                    has_protein = true;
                }
            });
        has_protein
    }
}
