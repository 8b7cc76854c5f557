// ABOUTME: Recipe catalog entries and the shallow snapshots recorded into the meal plan
// ABOUTME: Snapshots tolerate partial legacy data, including numeric ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe from the bundled, read-only catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique stable identifier
    pub id: String,
    /// Display name (legacy identity key for favorites)
    pub name: String,
    /// Cuisine/stage category
    pub category: String,
    /// Comma-delimited ingredient text
    #[serde(default)]
    pub ingredients: String,
    /// Newline-delimited steps, optionally numbered, may embed a tip line
    #[serde(default)]
    pub instructions: String,
    /// Relative path of an illustrative photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Explicit cooking tip, takes precedence over a tip embedded in the instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Recipe {
    /// Create a recipe with empty instructions and no image
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        ingredients: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            ingredients: ingredients.into(),
            instructions: String::new(),
            image: None,
            tip: None,
        }
    }

    /// Set the instruction text
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set the image path
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Shallow copy used when recording a meal
    #[must_use]
    pub fn snapshot(&self) -> RecipeSnapshot {
        RecipeSnapshot::from(self)
    }
}

/// Shallow copy of a recipe at the time a meal was recorded.
///
/// All fields are optional: early revisions stored partial objects and
/// overwrote `id` with a numeric timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    /// Catalog id of the recorded recipe
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Recipe name at recording time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Recipe category at recording time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Ingredient text at recording time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Instruction text at recording time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Image path at recording time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl RecipeSnapshot {
    /// Ingredient text, empty when the snapshot has none
    #[must_use]
    pub fn ingredients_text(&self) -> &str {
        self.ingredients.as_deref().unwrap_or_default()
    }

    /// Display name, empty when the snapshot has none
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl From<&Recipe> for RecipeSnapshot {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: Some(recipe.id.clone()),
            name: Some(recipe.name.clone()),
            category: Some(recipe.category.clone()),
            ingredients: Some(recipe.ingredients.clone()),
            instructions: Some(recipe.instructions.clone()),
            image: recipe.image.clone(),
        }
    }
}

/// Accept string, integer, or null ids
fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientIdVisitor;

    impl<'de> Visitor<'de> for LenientIdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a string or numeric id")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_owned()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, deserializer: D2) -> Result<Self::Value, D2::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientIdVisitor)
}
