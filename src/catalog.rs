// ABOUTME: Read-only recipe catalog loader with id validation and lookup
// ABOUTME: Also parses recipe ingredient and instruction text for the detail view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Recipe catalog

use babyspoon_core::constants::recipe_text;
use babyspoon_core::models::Recipe;
use babyspoon_core::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{info, warn};

/// The static recipe collection with an id index
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
}

impl RecipeCatalog {
    /// Build a catalog, rejecting duplicate or empty ids
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty id and `ResourceAlreadyExists` for
    /// a duplicate id.
    pub fn new(recipes: Vec<Recipe>) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(recipes.len());
        for (index, recipe) in recipes.iter().enumerate() {
            if recipe.id.trim().is_empty() {
                return Err(AppError::invalid_input(format!(
                    "recipe '{}' has an empty id",
                    recipe.name
                )));
            }
            if by_id.insert(recipe.id.clone(), index).is_some() {
                return Err(AppError::already_exists(format!("recipe id '{}'", recipe.id))
                    .with_resource_id(recipe.id.clone()));
            }
        }
        Ok(Self { recipes, by_id })
    }

    /// Parse a JSON array of recipes
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON, or a validation
    /// error from [`RecipeCatalog::new`].
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Load a JSON catalog file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise the errors
    /// of [`RecipeCatalog::from_json_str`].
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::not_found(format!("recipe catalog {}", path.display())).with_source(e)
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), recipes = catalog.len(), "Loaded recipe catalog");
        Ok(catalog)
    }

    /// Every recipe in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id).and_then(|&index| self.recipes.get(index))
    }

    /// Recipe by id, as an error when absent
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has this id
    pub fn require(&self, id: &str) -> AppResult<&Recipe> {
        self.get(id)
            .ok_or_else(|| AppError::not_found(format!("recipe '{id}'")).with_resource_id(id))
    }

    /// First recipe with exactly this name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Whether an id belongs to the catalog
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct category names in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .map(|recipe| recipe.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

/// Steps and tip extracted from instruction text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedInstructions {
    /// Cooking steps without numbering, never empty
    pub steps: Vec<String>,
    /// Explicit tip or the first embedded tip line
    pub tip: Option<String>,
}

/// Detail-view parsing of recipe text
pub trait RecipeText {
    /// Ingredients split on `,` or `،`, trimmed, empty pieces dropped
    fn ingredient_list(&self) -> Vec<String>;

    /// Numbered steps with the first `팁:`/`Tip:` line lifted out as the tip
    fn parsed_instructions(&self) -> ParsedInstructions;
}

impl RecipeText for Recipe {
    fn ingredient_list(&self) -> Vec<String> {
        split_ingredients(&self.ingredients)
    }

    fn parsed_instructions(&self) -> ParsedInstructions {
        let mut steps = Vec::new();
        let mut inferred_tip: Option<String> = None;

        for line in self.instructions.lines() {
            let clean = strip_step_number(line.trim()).trim();
            if clean.is_empty() {
                continue;
            }
            if let Some(tip) = tip_text(clean) {
                if inferred_tip.is_none() {
                    inferred_tip = Some(tip.to_owned());
                }
                continue;
            }
            steps.push(clean.to_owned());
        }

        if steps.is_empty() {
            if !self.instructions.trim().is_empty() {
                warn!(recipe = %self.id, "Instructions contain no steps");
            }
            steps.push(recipe_text::NO_INSTRUCTIONS.to_owned());
        }

        let tip = self
            .tip
            .as_deref()
            .map(str::trim)
            .filter(|tip| !tip.is_empty())
            .map(str::to_owned)
            .or(inferred_tip);

        ParsedInstructions { steps, tip }
    }
}

/// Split comma-delimited ingredient text
#[must_use]
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(recipe_text::INGREDIENT_DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Leading `N.` step number with the spaces after it
static STEP_NUMBER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").ok());

/// `팁:` / `Tip:` line, either colon width, prefix case-insensitive
static TIP_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:팁|tip)\s*[:：]\s*(.+)$").ok());

/// Drop a leading `N.` step number
fn strip_step_number(line: &str) -> &str {
    STEP_NUMBER_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.find(line))
        .map_or(line, |step| &line[step.end()..])
}

/// Body of a tip line
fn tip_text(line: &str) -> Option<&str> {
    let captures = TIP_PATTERN.as_ref()?.captures(line)?;
    let body = captures.get(1)?.as_str().trim();
    (!body.is_empty()).then_some(body)
}
