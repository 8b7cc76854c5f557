// ABOUTME: Recipe search and filter engine over the static catalog
// ABOUTME: Category filter, substring text filter, relevance/name/category sort, random recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! # Recipe Search
//!
//! A query combines a category selector, a free-text term, and a sort mode.
//!
//! - The category filter is an exact match on `recipe.category`, bypassed by
//!   the wildcard selectors `전체보기`/`All` and by `추천`.
//! - The text filter is a case-insensitive substring match on the name or
//!   the ingredient text; a blank term matches everything.
//! - `추천` returns a uniform random sample (Fisher–Yates) of the filtered
//!   recipes, capped at the recommendation limit. Every call reshuffles.
//! - Otherwise results are sorted stably by the requested mode.

use babyspoon_core::constants::{categories, limits};
use babyspoon_core::models::Recipe;
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Active category selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Random sample of the whole catalog (`추천`)
    Recommended,
    /// No category restriction (`전체보기` or `All`)
    #[default]
    All,
    /// Exact category name
    Exact(String),
}

impl CategoryFilter {
    /// Interpret a selector string
    #[must_use]
    pub fn parse(selector: &str) -> Self {
        match selector.trim() {
            categories::RECOMMENDED => Self::Recommended,
            categories::ALL | categories::ALL_LATIN | "" => Self::All,
            other => Self::Exact(other.to_owned()),
        }
    }

    /// Whether a recipe passes the category filter
    #[must_use]
    pub fn admits(&self, recipe: &Recipe) -> bool {
        match self {
            Self::Recommended | Self::All => true,
            Self::Exact(category) => recipe.category == *category,
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Name prefix matches first, then name matches, then ingredient matches
    #[default]
    Relevance,
    /// By name
    Name,
    /// By category, then name
    Category,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            other => Err(format!(
                "unknown sort mode '{other}' (expected relevance, name or category)"
            )),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Relevance => "relevance",
            Self::Name => "name",
            Self::Category => "category",
        })
    }
}

/// A search over the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Debounced search term
    pub term: String,
    /// Category selector
    pub category: CategoryFilter,
    /// Ordering for non-recommended results
    pub sort: SortMode,
    /// Cap on the recommended sample
    pub recommended_limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: CategoryFilter::All,
            sort: SortMode::Relevance,
            recommended_limit: limits::RECOMMENDED_LIMIT,
        }
    }
}

impl SearchQuery {
    /// Query for a term across all categories
    #[must_use]
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Restrict to a category selector
    #[must_use]
    pub fn in_category(mut self, selector: &str) -> Self {
        self.category = CategoryFilter::parse(selector);
        self
    }

    /// Use a sort mode
    #[must_use]
    pub const fn sorted_by(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Cap the recommended sample
    #[must_use]
    pub const fn with_recommended_limit(mut self, limit: usize) -> Self {
        self.recommended_limit = limit;
        self
    }
}

/// Lower-cased, trimmed search term; `None` when blank
fn normalized_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Case-insensitive match on name or ingredients
fn matches_term(recipe: &Recipe, term: &str) -> bool {
    recipe.name.to_lowercase().contains(term) || recipe.ingredients.to_lowercase().contains(term)
}

/// Filter and order the catalog for a query
pub fn filter_recipes<'a, R>(recipes: &'a [Recipe], query: &SearchQuery, rng: &mut R) -> Vec<&'a Recipe>
where
    R: Rng + ?Sized,
{
    let term = normalized_term(&query.term);
    let mut results: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| query.category.admits(recipe))
        .filter(|recipe| term.as_deref().is_none_or(|term| matches_term(recipe, term)))
        .collect();

    if query.category == CategoryFilter::Recommended {
        fisher_yates(&mut results, rng);
        results.truncate(query.recommended_limit);
    } else {
        sort_recipes(&mut results, query.sort, term.as_deref());
    }

    debug!(
        term = %query.term,
        category = ?query.category,
        sort = %query.sort,
        results = results.len(),
        "Filtered recipes"
    );
    results
}

/// Uniform in-place shuffle
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Stable sort by mode; relevance needs a normalized term
pub fn sort_recipes(recipes: &mut [&Recipe], sort: SortMode, term: Option<&str>) {
    match sort {
        SortMode::Name => recipes.sort_by(|a, b| compare_text(&a.name, &b.name)),
        SortMode::Category => recipes.sort_by(|a, b| {
            compare_text(&a.category, &b.category).then_with(|| compare_text(&a.name, &b.name))
        }),
        SortMode::Relevance => {
            if let Some(term) = term {
                recipes.sort_by_key(|recipe| relevance_rank(recipe, term));
            }
        }
    }
}

/// 0 = name starts with the term, 1 = name contains it, 2 = otherwise
fn relevance_rank(recipe: &Recipe, term: &str) -> u8 {
    let name = recipe.name.to_lowercase();
    if name.starts_with(term) {
        0
    } else if name.contains(term) {
        1
    } else {
        2
    }
}

/// Case-folded code point order with a raw tie-break.
///
/// Precomposed Hangul syllables are laid out in dictionary order, so this
/// follows Korean collation for catalog names.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Up to five distinct names containing the raw term.
///
/// Only the length check trims; surrounding spaces take part in the match.
#[must_use]
pub fn suggestions<'a>(recipes: &'a [Recipe], raw_term: &str) -> Vec<&'a str> {
    if raw_term.trim().chars().count() < limits::SUGGESTION_MIN_CHARS {
        return Vec::new();
    }
    let term = raw_term.to_lowercase();
    let mut seen = HashSet::new();
    recipes
        .iter()
        .map(|recipe| recipe.name.as_str())
        .filter(|name| name.to_lowercase().contains(&term))
        .filter(|name| seen.insert(*name))
        .take(limits::SUGGESTION_LIMIT)
        .collect()
}

/// Selector list: `추천`, `전체보기`, then recipe categories in first-seen order
#[must_use]
pub fn available_categories(recipes: &[Recipe]) -> Vec<&str> {
    let mut seen: HashSet<&str> = categories::SPECIAL.into_iter().collect();
    categories::SPECIAL
        .into_iter()
        .chain(
            recipes
                .iter()
                .map(|recipe| recipe.category.as_str())
                .filter(|category| seen.insert(*category)),
        )
        .collect()
}

/// Display colors for a category chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTheme {
    /// Background color
    pub bg: &'static str,
    /// Border color
    pub border: &'static str,
    /// Text color
    pub text: &'static str,
}

impl CategoryTheme {
    const fn new(bg: &'static str, border: &'static str, text: &'static str) -> Self {
        Self { bg, border, text }
    }
}

/// Theme for categories without an entry
pub const DEFAULT_THEME: CategoryTheme = CategoryTheme::new("#F7F7F7", "#E0E0E0", "#5D4037");

const CATEGORY_THEMES: &[(&str, CategoryTheme)] = &[
    ("추천", CategoryTheme::new("#FFF3E0", "#FFCC80", "#B26A00")),
    ("전체보기", CategoryTheme::new("#F5F5F5", "#D7CCC8", "#5D4037")),
    ("한그릇", CategoryTheme::new("#FCE4EC", "#F8BBD0", "#AD1457")),
    ("죽/리조또", CategoryTheme::new("#FFF8E1", "#FFE082", "#8D6E00")),
    ("국/탕", CategoryTheme::new("#E3F2FD", "#90CAF9", "#1565C0")),
    ("단백질", CategoryTheme::new("#E8F5E9", "#A5D6A7", "#2E7D32")),
    ("반찬", CategoryTheme::new("#F3E5F5", "#CE93D8", "#6A1B9A")),
    ("주먹밥", CategoryTheme::new("#E0F7FA", "#80DEEA", "#006064")),
    ("면", CategoryTheme::new("#FFF3E0", "#FFB74D", "#E65100")),
    ("토스트/팬케이크", CategoryTheme::new("#FFFDE7", "#FFF176", "#795548")),
    ("퓨레/소스", CategoryTheme::new("#E8EAF6", "#9FA8DA", "#303F9F")),
    ("간식", CategoryTheme::new("#FBE9E7", "#FFAB91", "#BF360C")),
];

/// Chip colors for a category
#[must_use]
pub fn category_theme(category: &str) -> CategoryTheme {
    CATEGORY_THEMES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_THEME, |(_, theme)| *theme)
}
