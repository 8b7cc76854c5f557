// ABOUTME: Allergy risk detection for recipes against the caregiver's avoid-list
// ABOUTME: Only allergens enabled in the preferences are evaluated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use babyspoon_core::models::{Allergen, AllergyPreferences, Recipe};

use crate::classifier::KeywordTable;

/// Keyword table keyed by allergen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergyKeywords {
    table: KeywordTable<Allergen>,
}

impl Default for AllergyKeywords {
    fn default() -> Self {
        Self {
            table: KeywordTable::new(
                Allergen::ALL
                    .into_iter()
                    .map(|allergen| (allergen, allergen.keywords())),
            ),
        }
    }
}

impl AllergyKeywords {
    /// Active allergens whose keywords occur in the ingredient text
    #[must_use]
    pub fn risks(&self, ingredients: &str, preferences: &AllergyPreferences) -> Vec<Allergen> {
        if !preferences.any() {
            return Vec::new();
        }
        self.table
            .matching_categories_where(ingredients, |allergen| preferences.avoids(*allergen))
    }
}

/// Allergy risks of ingredient text for this profile, using the bundled keywords
#[must_use]
pub fn detect_allergy_risks(ingredients: &str, preferences: &AllergyPreferences) -> Vec<Allergen> {
    AllergyKeywords::default().risks(ingredients, preferences)
}

/// Allergy risks of a catalog recipe for this profile
#[must_use]
pub fn detect_recipe_allergy_risks(recipe: &Recipe, preferences: &AllergyPreferences) -> Vec<Allergen> {
    detect_allergy_risks(&recipe.ingredients, preferences)
}
