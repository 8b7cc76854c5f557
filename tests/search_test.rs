// ABOUTME: Integration tests for the recipe search and filter engine
// ABOUTME: Covers category filtering, substring matching, sort modes, recommendations, and suggestions
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

mod common;

use babyspoon::search::{
    available_categories, category_theme, filter_recipes, fisher_yates, suggestions,
    CategoryFilter, SearchQuery, SortMode, DEFAULT_THEME,
};
use babyspoon_core::models::Recipe;
use common::sample_recipes;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn names<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
    recipes.iter().map(|recipe| recipe.name.as_str()).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_relevance_puts_name_prefix_first() {
    let recipes = vec![
        Recipe::new("a", "된장찌개", "유아식 반찬", "된장, 두부"),
        Recipe::new("b", "찌개용 소고기찜", "유아식 반찬", "소고기, 무"),
    ];

    let results = filter_recipes(&recipes, &SearchQuery::term("찌개"), &mut rng());
    assert_eq!(names(&results), vec!["찌개용 소고기찜", "된장찌개"]);
}

#[test]
fn test_relevance_ranks_name_matches_before_ingredient_matches() {
    let recipes = vec![
        Recipe::new("a", "두부 브로콜리죽", "중기 이유식", "두부, 소고기 육수"),
        Recipe::new("b", "한우 소고기죽", "중기 이유식", "소고기, 쌀"),
        Recipe::new("c", "소고기 애호박죽", "중기 이유식", "소고기, 애호박"),
    ];

    let results = filter_recipes(&recipes, &SearchQuery::term("소고기"), &mut rng());
    assert_eq!(
        names(&results),
        vec!["소고기 애호박죽", "한우 소고기죽", "두부 브로콜리죽"]
    );
}

#[test]
fn test_blank_term_keeps_catalog_order_under_relevance() {
    let recipes = sample_recipes();
    let results = filter_recipes(&recipes, &SearchQuery::term("   "), &mut rng());
    let expected: Vec<&str> = recipes.iter().map(|recipe| recipe.name.as_str()).collect();
    assert_eq!(names(&results), expected);
}

#[test]
fn test_text_filter_is_case_insensitive_on_name_or_ingredients() {
    let recipes = vec![
        Recipe::new("a", "Banana Pancake", "간식", "banana, flour"),
        Recipe::new("b", "Oat cookie", "간식", "oats, BANANA"),
        Recipe::new("c", "Rice porridge", "초기 이유식", "rice"),
    ];
    let results = filter_recipes(&recipes, &SearchQuery::term("bAnAnA"), &mut rng());
    assert_eq!(results.len(), 2);
}

#[test]
fn test_exact_category_filter() {
    let recipes = sample_recipes();
    let query = SearchQuery::term("").in_category("간식");
    let results = filter_recipes(&recipes, &query, &mut rng());
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|recipe| recipe.category == "간식"));
}

#[test]
fn test_wildcard_categories_bypass_filter() {
    let recipes = sample_recipes();
    for selector in ["전체보기", "All"] {
        let query = SearchQuery::term("").in_category(selector);
        assert_eq!(
            filter_recipes(&recipes, &query, &mut rng()).len(),
            recipes.len()
        );
    }
    assert_eq!(CategoryFilter::parse("추천"), CategoryFilter::Recommended);
}

#[test]
fn test_category_and_term_combine() {
    let recipes = sample_recipes();
    let query = SearchQuery::term("소고기").in_category("중기 이유식");
    let results = filter_recipes(&recipes, &query, &mut rng());
    assert_eq!(names(&results), vec!["소고기 애호박죽"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_name_sort() {
    let recipes = sample_recipes();
    let query = SearchQuery::term("").sorted_by(SortMode::Name);
    let sorted = names(&filter_recipes(&recipes, &query, &mut rng()));
    let mut expected = sorted.clone();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
    assert_eq!(sorted[0], "된장찌개");
}

#[test]
fn test_category_sort_breaks_ties_by_name() {
    let recipes = sample_recipes();
    let query = SearchQuery::term("").sorted_by(SortMode::Category);
    let results = filter_recipes(&recipes, &query, &mut rng());

    let pairs: Vec<(&str, &str)> = results
        .iter()
        .map(|recipe| (recipe.category.as_str(), recipe.name.as_str()))
        .collect();
    let mut expected = pairs.clone();
    expected.sort_unstable();
    assert_eq!(pairs, expected);
}

#[test]
fn test_sort_mode_parsing() {
    assert_eq!("name".parse::<SortMode>().unwrap(), SortMode::Name);
    assert_eq!("Category".parse::<SortMode>().unwrap(), SortMode::Category);
    assert!("popularity".parse::<SortMode>().is_err());
}

// ============================================================================
// Recommendations
// ============================================================================

fn many_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| Recipe::new(format!("r{index}"), format!("레시피 {index}"), "간식", "사과"))
        .collect()
}

#[test]
fn test_recommended_is_capped_sample_without_duplicates() {
    let recipes = many_recipes(40);
    let query = SearchQuery::term("").in_category("추천");
    let results = filter_recipes(&recipes, &query, &mut rng());

    assert_eq!(results.len(), 15);
    let ids: HashSet<&str> = results.iter().map(|recipe| recipe.id.as_str()).collect();
    assert_eq!(ids.len(), 15);
}

#[test]
fn test_recommended_respects_custom_limit_and_small_catalogs() {
    let recipes = many_recipes(3);
    let query = SearchQuery::term("")
        .in_category("추천")
        .with_recommended_limit(2);
    assert_eq!(filter_recipes(&recipes, &query, &mut rng()).len(), 2);

    let query = SearchQuery::term("").in_category("추천");
    assert_eq!(filter_recipes(&recipes, &query, &mut rng()).len(), 3);
}

#[test]
fn test_recommended_applies_text_filter_before_sampling() {
    let recipes = sample_recipes();
    let query = SearchQuery::term("소고기").in_category("추천");
    let results = filter_recipes(&recipes, &query, &mut rng());
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|recipe| recipe.ingredients.contains("소고기")));
}

#[test]
fn test_fisher_yates_is_a_permutation() {
    let mut items: Vec<u32> = (0..50).collect();
    fisher_yates(&mut items, &mut rng());
    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    assert_ne!(items, sorted);
}

#[test]
fn test_seeded_recommendations_are_reproducible() {
    let recipes = many_recipes(30);
    let query = SearchQuery::term("").in_category("추천");
    let first = names(&filter_recipes(&recipes, &query, &mut ChaCha8Rng::seed_from_u64(1)));
    let second = names(&filter_recipes(&recipes, &query, &mut ChaCha8Rng::seed_from_u64(1)));
    assert_eq!(first, second);
}

// ============================================================================
// Suggestions and categories
// ============================================================================

#[test]
fn test_suggestions_require_two_characters() {
    let recipes = sample_recipes();
    assert!(suggestions(&recipes, "죽").is_empty());
    assert!(suggestions(&recipes, " 소 ").is_empty());
    assert_eq!(
        suggestions(&recipes, "소고기"),
        vec!["소고기 애호박죽", "찌개용 소고기찜"]
    );
}

#[test]
fn test_suggestions_match_the_untrimmed_term() {
    let recipes = sample_recipes();
    assert_eq!(suggestions(&recipes, " 소고기"), vec!["찌개용 소고기찜"]);
    assert!(suggestions(&recipes, "퓨레 ").is_empty());
}

#[test]
fn test_suggestions_are_distinct_and_capped() {
    let mut recipes = many_recipes(10);
    recipes.push(Recipe::new("dup", "레시피 0", "간식", ""));
    let found = suggestions(&recipes, "레시피");
    assert_eq!(found.len(), 5);
    assert_eq!(found[0], "레시피 0");
    assert_eq!(found.iter().filter(|name| **name == "레시피 0").count(), 1);
}

#[test]
fn test_available_categories_put_special_selectors_first() {
    let recipes = sample_recipes();
    let categories = available_categories(&recipes);
    assert_eq!(
        categories,
        vec!["추천", "전체보기", "초기 이유식", "중기 이유식", "간식", "유아식 반찬"]
    );
}

#[test]
fn test_category_theme_falls_back_to_default() {
    assert_eq!(category_theme("간식").bg, "#FBE9E7");
    assert_eq!(category_theme("없는 분류"), DEFAULT_THEME);
}
