// ABOUTME: Command implementations for babyspoon-cli
// ABOUTME: Each command reads or mutates the application store and prints a JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use anyhow::{anyhow, Result};
use babyspoon::catalog::{RecipeCatalog, RecipeText};
use babyspoon::config::AppConfig;
use babyspoon::search::{self, SearchQuery, SortMode};
use babyspoon::state::AppStore;
use babyspoon::storage::KeyValueStore;
use babyspoon_core::date_key::{local_today, require_date_key, to_date_key};
use babyspoon_core::models::{Allergen, MealType};
use babyspoon_core::AppError;
use babyspoon_intelligence::{detect_recipe_allergy_risks, group_history_by_date, ReportType};
use chrono::NaiveDate;
use serde_json::json;

use crate::display::print_json;

/// Arguments of the `search` command
pub struct SearchArgs {
    pub term: String,
    pub category: String,
    pub sort: SortMode,
    pub suggest: bool,
}

fn date_or_today(date_key: Option<&str>) -> Result<NaiveDate> {
    Ok(date_key.map(require_date_key).transpose()?.unwrap_or_else(local_today))
}

fn parse_meal_type(label: &str) -> Result<MealType> {
    MealType::from_label(label)
        .ok_or_else(|| AppError::invalid_input(format!("unknown meal type '{label}'")).into())
}

/// Persisted label for a meal type alias; unknown labels pass through
fn bucket_label(meal: &str) -> &str {
    MealType::from_label(meal).map_or(meal, |meal_type| meal_type.label())
}

pub fn report<S: KeyValueStore>(
    app: &mut AppStore<S>,
    period: ReportType,
    today: Option<&str>,
) -> Result<()> {
    let today = date_or_today(today)?;
    let analysis = app.analysis(period, today);
    print_json(&json!({
        "period": period,
        "today": to_date_key(today),
        "analysis": analysis,
    }))
}

pub fn chart<S: KeyValueStore>(app: &mut AppStore<S>, today: Option<&str>) -> Result<()> {
    let today = date_or_today(today)?;
    print_json(&app.weekly_chart(today))
}

pub fn history<S: KeyValueStore>(app: &mut AppStore<S>) -> Result<()> {
    let groups = group_history_by_date(app.history());
    let timeline: Vec<_> = groups
        .iter()
        .rev()
        .map(|(date, records)| json!({ "date": date, "meals": records }))
        .collect();
    print_json(&timeline)
}

pub fn search<S: KeyValueStore>(
    app: &mut AppStore<S>,
    catalog: &RecipeCatalog,
    config: &AppConfig,
    args: &SearchArgs,
) -> Result<()> {
    if args.suggest {
        return print_json(&search::suggestions(catalog.recipes(), &args.term));
    }

    let query = SearchQuery::term(args.term.clone())
        .in_category(&args.category)
        .sorted_by(args.sort)
        .with_recommended_limit(config.recommended_limit);
    let results = search::filter_recipes(catalog.recipes(), &query, &mut rand::thread_rng());
    app.add_recent_search(&args.term);

    let recipes: Vec<_> = results
        .iter()
        .map(|recipe| {
            json!({
                "id": recipe.id,
                "name": recipe.name,
                "category": recipe.category,
                "favorite": app.is_favorite(&recipe.id),
                "allergyRisks": detect_recipe_allergy_risks(recipe, app.preferences()),
            })
        })
        .collect();
    print_json(&json!({
        "categories": search::available_categories(catalog.recipes()),
        "results": recipes,
        "recentSearches": app.recent_searches(),
    }))
}

pub fn show(catalog: &RecipeCatalog, recipe_id: &str) -> Result<()> {
    let recipe = catalog.require(recipe_id)?;
    print_json(&json!({
        "recipe": recipe,
        "ingredients": recipe.ingredient_list(),
        "instructions": recipe.parsed_instructions(),
        "theme": search::category_theme(&recipe.category),
    }))
}

pub fn record<S: KeyValueStore>(
    app: &mut AppStore<S>,
    catalog: &RecipeCatalog,
    recipe_id: &str,
    meal: &str,
    date: Option<&str>,
) -> Result<()> {
    let recipe = catalog.require(recipe_id)?;
    let meal_type = parse_meal_type(meal)?;
    let date = date_or_today(date)?;
    let entry_id = app.record_meal(date, meal_type, recipe);
    print_json(&json!({
        "date": to_date_key(date),
        "meal": meal_type.label(),
        "entryId": entry_id,
        "totalMeals": app.total_meal_count(),
    }))
}

pub fn remove<S: KeyValueStore>(
    app: &mut AppStore<S>,
    date: &str,
    meal: &str,
    entry_id: u64,
) -> Result<()> {
    let meal_label = bucket_label(meal);
    if !app.remove_meal(date, meal_label, entry_id) {
        return Err(AppError::not_found(format!("meal entry {entry_id} on {date} {meal_label}"))
            .into());
    }
    print_json(&json!({ "removed": entry_id, "totalMeals": app.total_meal_count() }))
}

pub fn favorite<S: KeyValueStore>(
    app: &mut AppStore<S>,
    catalog: &RecipeCatalog,
    recipe_id: &str,
) -> Result<()> {
    let recipe = catalog.require(recipe_id)?;
    let favorite = app.toggle_favorite(&recipe.id);
    print_json(&json!({
        "id": recipe.id,
        "favorite": favorite,
        "favoriteCount": app.favorite_count(),
    }))
}

pub fn allergies<S: KeyValueStore>(
    app: &mut AppStore<S>,
    catalog: &RecipeCatalog,
    recipe_id: &str,
    toggle: Option<&str>,
) -> Result<()> {
    if let Some(key) = toggle {
        let allergen =
            Allergen::from_key(key).ok_or_else(|| anyhow!("unknown allergen '{key}'"))?;
        app.toggle_allergy(allergen);
    }
    let recipe = catalog.require(recipe_id)?;
    let risks = detect_recipe_allergy_risks(recipe, app.preferences());
    print_json(&json!({
        "id": recipe.id,
        "avoiding": app.active_allergies(),
        "risks": risks,
        "labels": risks.iter().copied().map(Allergen::label).collect::<Vec<_>>(),
    }))
}
