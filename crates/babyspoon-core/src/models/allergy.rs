// ABOUTME: Allergen enumeration and the caregiver's persisted avoid-list
// ABOUTME: Serializes with the camelCase allergen keys of the stored preferences object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::keywords;

/// Allergen a caregiver can mark as must-avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Allergen {
    /// Milk products
    Dairy,
    /// Whole egg, yolk, or white
    Eggs,
    /// Peanuts
    Peanuts,
    /// Walnuts, almonds, pine nuts, cashews, chestnuts
    TreeNuts,
    /// Wheat flour, bread, noodles
    Wheat,
    /// Soybeans and soy products
    Soy,
    /// Fish
    Fish,
}

impl Allergen {
    /// Every allergen in declaration order
    pub const ALL: [Self; 7] = [
        Self::Dairy,
        Self::Eggs,
        Self::Peanuts,
        Self::TreeNuts,
        Self::Wheat,
        Self::Soy,
        Self::Fish,
    ];

    /// Persisted key of this allergen
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Eggs => "eggs",
            Self::Peanuts => "peanuts",
            Self::TreeNuts => "treeNuts",
            Self::Wheat => "wheat",
            Self::Soy => "soy",
            Self::Fish => "fish",
        }
    }

    /// Korean label as shown during onboarding
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dairy => "우유",
            Self::Eggs => "계란",
            Self::Peanuts => "땅콩",
            Self::TreeNuts => "견과류",
            Self::Wheat => "밀가루",
            Self::Soy => "콩류",
            Self::Fish => "생선",
        }
    }

    /// Ingredient keywords that indicate this allergen
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Dairy => keywords::DAIRY,
            Self::Eggs => keywords::EGGS,
            Self::Peanuts => keywords::PEANUTS,
            Self::TreeNuts => keywords::TREE_NUTS,
            Self::Wheat => keywords::WHEAT,
            Self::Soy => keywords::SOY,
            Self::Fish => keywords::FISH,
        }
    }

    /// Parse a persisted key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|allergen| allergen.key() == key)
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Avoid-list flags, one per allergen, all `false` by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)] // One persisted flag per allergen
pub struct AllergyPreferences {
    /// Avoid dairy
    pub dairy: bool,
    /// Avoid eggs
    pub eggs: bool,
    /// Avoid peanuts
    pub peanuts: bool,
    /// Avoid tree nuts
    pub tree_nuts: bool,
    /// Avoid wheat
    pub wheat: bool,
    /// Avoid soy
    pub soy: bool,
    /// Avoid fish
    pub fish: bool,
}

impl AllergyPreferences {
    /// Whether the allergen is on the avoid-list
    #[must_use]
    pub const fn avoids(&self, allergen: Allergen) -> bool {
        match allergen {
            Allergen::Dairy => self.dairy,
            Allergen::Eggs => self.eggs,
            Allergen::Peanuts => self.peanuts,
            Allergen::TreeNuts => self.tree_nuts,
            Allergen::Wheat => self.wheat,
            Allergen::Soy => self.soy,
            Allergen::Fish => self.fish,
        }
    }

    /// Set a single flag
    pub fn set(&mut self, allergen: Allergen, avoid: bool) {
        let flag = match allergen {
            Allergen::Dairy => &mut self.dairy,
            Allergen::Eggs => &mut self.eggs,
            Allergen::Peanuts => &mut self.peanuts,
            Allergen::TreeNuts => &mut self.tree_nuts,
            Allergen::Wheat => &mut self.wheat,
            Allergen::Soy => &mut self.soy,
            Allergen::Fish => &mut self.fish,
        };
        *flag = avoid;
    }

    /// Flip a single flag, returning the new value
    pub fn toggle(&mut self, allergen: Allergen) -> bool {
        let avoid = !self.avoids(allergen);
        self.set(allergen, avoid);
        avoid
    }

    /// Allergens currently on the avoid-list, in declaration order
    #[must_use]
    pub fn active(&self) -> Vec<Allergen> {
        Allergen::ALL
            .into_iter()
            .filter(|allergen| self.avoids(*allergen))
            .collect()
    }

    /// Whether any allergen is on the avoid-list
    #[must_use]
    pub fn any(&self) -> bool {
        Allergen::ALL.into_iter().any(|allergen| self.avoids(allergen))
    }

    /// Build preferences from a list of allergens to avoid
    #[must_use]
    pub fn from_allergens(allergens: &[Allergen]) -> Self {
        let mut preferences = Self::default();
        for allergen in allergens {
            preferences.set(*allergen, true);
        }
        preferences
    }
}
