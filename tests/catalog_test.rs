// ABOUTME: Integration tests for the recipe catalog and detail-view text parsing
// ABOUTME: Covers id validation, JSON loading, ingredient splitting, and instruction parsing
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

mod common;

use babyspoon::catalog::{split_ingredients, RecipeCatalog, RecipeText};
use babyspoon::ErrorCode;
use babyspoon_core::models::Recipe;
use common::{init_test_logging, sample_catalog};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_duplicate_ids_are_rejected() {
    let error = RecipeCatalog::new(vec![
        Recipe::new("a", "쌀미음", "초기 이유식", "쌀"),
        Recipe::new("a", "감자미음", "초기 이유식", "감자"),
    ])
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[test]
fn test_empty_id_is_rejected() {
    let error = RecipeCatalog::new(vec![Recipe::new(" ", "쌀미음", "초기 이유식", "쌀")])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_lookup_by_id_and_name() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.get("mid-2").unwrap().name, "두부 브로콜리죽");
    assert_eq!(catalog.find_by_name("사과 퓨레").unwrap().id, "snack-2");
    assert!(catalog.get("missing").is_none());
    assert_eq!(
        catalog.require("missing").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        catalog.categories(),
        vec!["초기 이유식", "중기 이유식", "간식", "유아식 반찬"]
    );
}

#[test]
fn test_catalog_loads_from_json_file() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.json");
    fs::write(
        &path,
        r#"[
            {"id": "r1", "name": "감자미음", "category": "초기 이유식", "ingredients": "감자, 쌀"},
            {"id": "r2", "name": "배 퓨레", "category": "간식", "tip": "실온으로 주세요"}
        ]"#,
    )
    .unwrap();

    let catalog = RecipeCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    let pear = catalog.get("r2").unwrap();
    assert!(pear.ingredients.is_empty());
    assert_eq!(pear.tip.as_deref(), Some("실온으로 주세요"));
}

#[test]
fn test_missing_catalog_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = RecipeCatalog::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_malformed_catalog_is_rejected() {
    assert!(RecipeCatalog::from_json_str(r#"{"id": "not-a-list"}"#).is_err());
}

#[test]
fn test_ingredient_list_splits_on_both_delimiters() {
    assert_eq!(
        split_ingredients("쌀 10g, 애호박 5g،  당근 ,, "),
        vec!["쌀 10g", "애호박 5g", "당근"]
    );
    assert!(split_ingredients("").is_empty());
}

#[test]
fn test_instructions_strip_numbers_and_lift_tip() {
    let catalog = sample_catalog();
    let parsed = catalog.get("early-1").unwrap().parsed_instructions();
    assert_eq!(parsed.steps, vec!["쌀을 불린다", "곱게 갈아 끓인다"]);
    assert_eq!(parsed.tip.as_deref(), Some("체에 한 번 거르세요"));
}

#[test]
fn test_explicit_tip_wins_over_embedded_tip() {
    let mut recipe = Recipe::new("r", "감자미음", "초기 이유식", "감자")
        .with_instructions("1. 감자를 삶는다\nTip: 뜨거울 때 으깨세요");
    recipe.tip = Some("소금은 넣지 마세요".to_owned());

    let parsed = recipe.parsed_instructions();
    assert_eq!(parsed.steps, vec!["감자를 삶는다"]);
    assert_eq!(parsed.tip.as_deref(), Some("소금은 넣지 마세요"));
}

#[test]
fn test_missing_instructions_use_placeholder() {
    let parsed = Recipe::new("r", "배 퓨레", "간식", "배").parsed_instructions();
    assert_eq!(parsed.steps, vec!["조리법 정보가 없습니다."]);
    assert!(parsed.tip.is_none());
}
