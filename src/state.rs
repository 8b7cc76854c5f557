// ABOUTME: Application state store owned by the composition root
// ABOUTME: Holds profile, preferences, favorites, meal plan, and recent searches with write-through persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! # Application State
//!
//! [`AppStore`] loads every persisted document once, keeps the in-memory copy
//! authoritative for the session, and writes each change back through the
//! [`KeyValueStore`]. Writes are fire-and-forget: a failed write is logged by
//! the storage helpers and the session continues with the in-memory state.
//!
//! Analytics are computed by the pure `babyspoon-intelligence` functions from
//! a snapshot of the meal plan and memoized per meal-plan revision.

use babyspoon_core::constants::{limits, storage_keys};
use babyspoon_core::date_key::to_date_key;
use babyspoon_core::models::{
    Allergen, AllergyPreferences, DayPlan, Favorites, MealEntry, MealHistoryRecord, MealPlan,
    MealType, Profile, Recipe,
};
use babyspoon_intelligence::{
    build_weekly_chart_data, flatten_meal_plan, AnalysisResult, MealHistoryAnalyzer, ReportType,
    WeeklyChartEntry,
};
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::catalog::RecipeCatalog;
use crate::migration::{load_favorites, MigrationReport};
use crate::storage::{safe_get, safe_remove, safe_set, KeyValueStore};

#[derive(Debug, Default)]
struct AnalyticsCache {
    revision: Option<u64>,
    history: Vec<MealHistoryRecord>,
    analyses: HashMap<(ReportType, NaiveDate), AnalysisResult>,
    charts: HashMap<NaiveDate, Vec<WeeklyChartEntry>>,
}

/// Persisted application state
#[derive(Debug)]
pub struct AppStore<S: KeyValueStore> {
    store: S,
    profile: Option<Profile>,
    preferences: AllergyPreferences,
    onboarding_completed: bool,
    favorites: Favorites,
    meal_plan: MealPlan,
    recent_searches: Vec<String>,
    recent_search_limit: usize,
    migration: Option<MigrationReport>,
    analyzer: MealHistoryAnalyzer,
    revision: u64,
    last_entry_id: u64,
    cache: AnalyticsCache,
}

impl<S: KeyValueStore> AppStore<S> {
    /// Load persisted state, running the favorites migration when needed
    pub fn load(mut store: S, catalog: &RecipeCatalog) -> Self {
        let profile: Option<Profile> = safe_get(&mut store, storage_keys::PROFILE, None);
        let preferences = safe_get(
            &mut store,
            storage_keys::PREFERENCES,
            AllergyPreferences::default(),
        );
        let onboarding_completed = safe_get(&mut store, storage_keys::ONBOARDING_COMPLETED, false);
        let (favorites, migration) = load_favorites(&mut store, catalog);
        let meal_plan = safe_get(&mut store, storage_keys::MEAL_PLAN, MealPlan::default());
        let recent_searches: Vec<String> =
            safe_get(&mut store, storage_keys::RECENT_SEARCHES, Vec::new());

        let last_entry_id = meal_plan
            .days()
            .flat_map(|(_, day)| day.buckets())
            .flat_map(|(_, bucket)| bucket.entries())
            .map(|entry| entry.entry_id)
            .max()
            .unwrap_or(0);

        info!(
            favorites = favorites.count(),
            meals = meal_plan.total_entries(),
            onboarding_completed,
            "Loaded application state"
        );

        Self {
            store,
            profile,
            preferences,
            onboarding_completed,
            favorites,
            meal_plan,
            recent_searches,
            recent_search_limit: limits::RECENT_SEARCH_LIMIT,
            migration,
            analyzer: MealHistoryAnalyzer::default(),
            revision: 0,
            last_entry_id,
            cache: AnalyticsCache::default(),
        }
    }

    /// Cap the recent-search list
    #[must_use]
    pub fn with_recent_search_limit(mut self, limit: usize) -> Self {
        self.recent_search_limit = limit.max(1);
        self.recent_searches.truncate(self.recent_search_limit);
        self
    }

    /// Use a custom analyzer
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: MealHistoryAnalyzer) -> Self {
        self.analyzer = analyzer;
        self.cache = AnalyticsCache::default();
        self
    }

    /// Report of the favorites migration run at load, if any
    #[must_use]
    pub const fn migration_report(&self) -> Option<&MigrationReport> {
        self.migration.as_ref()
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Release the backing store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    /// Child profile, once onboarding captured one
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Whether onboarding has been completed
    #[must_use]
    pub const fn has_completed_onboarding(&self) -> bool {
        self.onboarding_completed
    }

    /// Store the profile and allergies captured by onboarding
    pub fn complete_onboarding(&mut self, name: &str, allergies: AllergyPreferences) {
        let profile = Profile::new(name.trim());
        safe_set(&mut self.store, storage_keys::PROFILE, &profile);
        self.profile = Some(profile);
        self.set_preferences(allergies);
        self.onboarding_completed = true;
        safe_set(&mut self.store, storage_keys::ONBOARDING_COMPLETED, &true);
        info!("Onboarding completed");
    }

    /// Forget the profile, preferences, and onboarding flag
    pub fn reset_profile(&mut self) {
        self.profile = None;
        self.preferences = AllergyPreferences::default();
        self.onboarding_completed = false;
        for key in [
            storage_keys::PROFILE,
            storage_keys::PREFERENCES,
            storage_keys::ONBOARDING_COMPLETED,
        ] {
            safe_remove(&mut self.store, key);
        }
    }

    // ------------------------------------------------------------------
    // Allergy preferences
    // ------------------------------------------------------------------

    /// Allergy avoid-list
    #[must_use]
    pub const fn preferences(&self) -> &AllergyPreferences {
        &self.preferences
    }

    /// Replace the avoid-list
    pub fn set_preferences(&mut self, preferences: AllergyPreferences) {
        self.preferences = preferences;
        self.persist_preferences();
    }

    /// Flip one allergen; returns whether it is now avoided
    pub fn toggle_allergy(&mut self, allergen: Allergen) -> bool {
        let avoided = self.preferences.toggle(allergen);
        self.persist_preferences();
        avoided
    }

    /// Avoided allergens in declaration order
    #[must_use]
    pub fn active_allergies(&self) -> Vec<Allergen> {
        self.preferences.active()
    }

    /// Whether any allergen is avoided
    #[must_use]
    pub fn has_allergies(&self) -> bool {
        self.preferences.any()
    }

    /// Avoid nothing
    pub fn clear_allergies(&mut self) {
        self.set_preferences(AllergyPreferences::default());
    }

    fn persist_preferences(&mut self) {
        safe_set(&mut self.store, storage_keys::PREFERENCES, &self.preferences);
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Whether a recipe id is a favorite
    #[must_use]
    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites.contains(recipe_id)
    }

    /// Flip a favorite; returns whether it is now a favorite
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> bool {
        let favorite = self.favorites.toggle(recipe_id);
        self.persist_favorites();
        favorite
    }

    /// Number of favorites
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorites.count()
    }

    /// Remove every favorite
    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.persist_favorites();
    }

    /// Favorite recipes in catalog order
    #[must_use]
    pub fn favorite_recipes<'a>(&self, catalog: &'a RecipeCatalog) -> Vec<&'a Recipe> {
        catalog
            .recipes()
            .iter()
            .filter(|recipe| self.favorites.contains(&recipe.id))
            .collect()
    }

    fn persist_favorites(&mut self) {
        safe_set(&mut self.store, storage_keys::FAVORITES, &self.favorites);
    }

    // ------------------------------------------------------------------
    // Meal plan
    // ------------------------------------------------------------------

    /// Nested meal plan
    #[must_use]
    pub const fn meal_plan(&self) -> &MealPlan {
        &self.meal_plan
    }

    /// Record a meal; returns the new entry id
    pub fn record_meal(&mut self, date: NaiveDate, meal_type: MealType, recipe: &Recipe) -> u64 {
        let entry_id = self.next_entry_id();
        let date_key = to_date_key(date);
        self.meal_plan.record(
            &date_key,
            meal_type.label(),
            MealEntry::new(entry_id, recipe.snapshot()),
        );
        self.meal_plan_changed();
        debug!(date = %date_key, meal = %meal_type, recipe = %recipe.id, entry_id, "Recorded meal");
        entry_id
    }

    /// Remove one recorded meal; returns whether it existed
    pub fn remove_meal(&mut self, date_key: &str, meal_type: &str, entry_id: u64) -> bool {
        let removed = self.meal_plan.remove(date_key, meal_type, entry_id);
        if removed {
            self.meal_plan_changed();
        }
        removed
    }

    /// Meals recorded on a date
    #[must_use]
    pub fn meals_for_date(&self, date_key: &str) -> Option<&DayPlan> {
        self.meal_plan.day(date_key)
    }

    /// Forget every recorded meal
    pub fn clear_history(&mut self) {
        self.meal_plan.clear();
        self.meal_plan_changed();
    }

    /// Number of recorded meals
    #[must_use]
    pub fn total_meal_count(&self) -> usize {
        self.meal_plan.total_entries()
    }

    /// Millisecond timestamp, greater than every id handed out so far until
    /// the id space saturates at `u64::MAX`
    fn next_entry_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last_entry_id = now.max(self.last_entry_id.saturating_add(1));
        self.last_entry_id
    }

    fn meal_plan_changed(&mut self) {
        self.revision += 1;
        safe_set(&mut self.store, storage_keys::MEAL_PLAN, &self.meal_plan);
    }

    // ------------------------------------------------------------------
    // Recent searches
    // ------------------------------------------------------------------

    /// Recent search terms, most recent first
    #[must_use]
    pub fn recent_searches(&self) -> &[String] {
        &self.recent_searches
    }

    /// Remember a search term; blank terms are ignored
    pub fn add_recent_search(&mut self, term: &str) {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return;
        }
        let folded = trimmed.to_lowercase();
        self.recent_searches
            .retain(|existing| existing.to_lowercase() != folded);
        self.recent_searches.insert(0, trimmed.to_owned());
        self.recent_searches.truncate(self.recent_search_limit);
        self.persist_recent_searches();
    }

    /// Forget a search term, compared case-insensitively
    pub fn remove_recent_search(&mut self, term: &str) {
        let folded = term.trim().to_lowercase();
        self.recent_searches
            .retain(|existing| existing.to_lowercase() != folded);
        self.persist_recent_searches();
    }

    /// Forget every search term
    pub fn clear_recent_searches(&mut self) {
        self.recent_searches.clear();
        self.persist_recent_searches();
    }

    fn persist_recent_searches(&mut self) {
        safe_set(
            &mut self.store,
            storage_keys::RECENT_SEARCHES,
            &self.recent_searches,
        );
    }

    // ------------------------------------------------------------------
    // Analytics
    // ------------------------------------------------------------------

    fn refresh_cache(&mut self) {
        if self.cache.revision != Some(self.revision) {
            self.cache = AnalyticsCache {
                revision: Some(self.revision),
                history: flatten_meal_plan(&self.meal_plan),
                ..AnalyticsCache::default()
            };
        }
    }

    /// Flattened history, most recent first
    pub fn history(&mut self) -> &[MealHistoryRecord] {
        self.refresh_cache();
        &self.cache.history
    }

    /// Windowed aggregates for the window ending `today`
    pub fn analysis(&mut self, report_type: ReportType, today: NaiveDate) -> &AnalysisResult {
        self.refresh_cache();
        let cache = &mut self.cache;
        let history = &cache.history;
        let analyzer = &self.analyzer;
        cache
            .analyses
            .entry((report_type, today))
            .or_insert_with(|| analyzer.analyze(history, report_type, today))
    }

    /// Seven-day series ending `today`
    pub fn weekly_chart(&mut self, today: NaiveDate) -> &[WeeklyChartEntry] {
        self.refresh_cache();
        let cache = &mut self.cache;
        let history = &cache.history;
        let keywords = self.analyzer.keywords();
        cache
            .charts
            .entry(today)
            .or_insert_with(|| build_weekly_chart_data(history, keywords, today))
    }

    /// Meal-plan revision; bumps on every meal-plan command
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}
