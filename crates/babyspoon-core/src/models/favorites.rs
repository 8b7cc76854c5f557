// ABOUTME: Favorite recipes keyed by recipe id, persisted as an id -> bool object
// ABOUTME: Absent or false entries mean "not a favorite"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from recipe id to `true` for favorited recipes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: BTreeMap<String, bool>,
}

impl Favorites {
    /// Whether the recipe is a favorite
    #[must_use]
    pub fn contains(&self, recipe_id: &str) -> bool {
        self.entries.get(recipe_id).copied().unwrap_or(false)
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle(&mut self, recipe_id: &str) -> bool {
        let favorite = !self.contains(recipe_id);
        self.entries.insert(recipe_id.to_owned(), favorite);
        favorite
    }

    /// Mark a recipe as favorite
    pub fn insert(&mut self, recipe_id: impl Into<String>) {
        self.entries.insert(recipe_id.into(), true);
    }

    /// Number of recipes currently marked as favorite
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.values().filter(|favorite| **favorite).count()
    }

    /// Ids of every favorited recipe
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, favorite)| **favorite)
            .map(|(id, _)| id.as_str())
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<String> for Favorites {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|id| (id, true)).collect(),
        }
    }
}
