// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, search/analytics limits, category selectors, and keyword tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being kept in a
//! single flat namespace.

/// Hand-curated ingredient keyword tables (nutrition, allergy, beef)
pub mod keywords;

/// Fixed string keys used with the persistence collaborator
pub mod storage_keys {
    /// Child profile (`{ "name": ... }`)
    pub const PROFILE: &str = "baby_profile";
    /// Allergy preferences
    pub const PREFERENCES: &str = "baby_preferences";
    /// Favorites set keyed by recipe id
    pub const FAVORITES: &str = "baby_favorites";
    /// Schema version of the favorites entry (name-keyed vs id-keyed)
    pub const FAVORITES_SCHEMA_VERSION: &str = "favorites_schema_version";
    /// Nested date -> meal type -> entries structure
    pub const MEAL_PLAN: &str = "baby_meal_plan";
    /// Recent search terms, most recent first
    pub const RECENT_SEARCHES: &str = "recentSearches";
    /// Onboarding completion flag
    pub const ONBOARDING_COMPLETED: &str = "onboarding_completed";
}

/// Search and catalog browsing limits
pub mod limits {
    /// Size of the random "recommended" sample
    pub const RECOMMENDED_LIMIT: usize = 15;
    /// Maximum number of name suggestions
    pub const SUGGESTION_LIMIT: usize = 5;
    /// Minimum trimmed term length before suggestions are produced
    pub const SUGGESTION_MIN_CHARS: usize = 2;
    /// Maximum number of recent searches kept
    pub const RECENT_SEARCH_LIMIT: usize = 5;
    /// Default search debounce delay in milliseconds
    pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
}

/// Reporting window and scoring constants
pub mod analytics {
    /// Lookback of the weekly report in days
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;
    /// Lookback of the monthly report in days
    pub const MONTHLY_WINDOW_DAYS: i64 = 30;
    /// Beef servings per week that yield a full score
    pub const WEEKLY_BEEF_GOAL: u32 = 4;
    /// Beef servings per month that yield a full score
    pub const MONTHLY_BEEF_GOAL: u32 = 15;
    /// Upper bound of the beef score
    pub const MAX_SCORE: f64 = 100.0;
    /// Number of days in the weekly chart series
    pub const CHART_DAYS: i64 = 7;
}

/// Category selector values understood by the search engine
pub mod categories {
    /// Random "surprise me" sample
    pub const RECOMMENDED: &str = "추천";
    /// Show every category
    pub const ALL: &str = "전체보기";
    /// Legacy wildcard selector
    pub const ALL_LATIN: &str = "All";
    /// Selectors listed before the catalog's own categories
    pub const SPECIAL: [&str; 2] = [RECOMMENDED, ALL];
}

/// Recipe detail text markers
pub mod recipe_text {
    /// Ingredient delimiters (ASCII comma and the Arabic comma variant)
    pub const INGREDIENT_DELIMITERS: [char; 2] = [',', '،'];
    /// Placeholder step shown when a recipe has no instructions
    pub const NO_INSTRUCTIONS: &str = "조리법 정보가 없습니다.";
}
