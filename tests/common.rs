// ABOUTME: Shared test utilities and fixtures for babyspoon integration tests
// ABOUTME: Provides quiet logging setup, a small recipe catalog, and store builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `babyspoon`

use babyspoon::catalog::RecipeCatalog;
use babyspoon::state::AppStore;
use babyspoon::storage::MemoryStore;
use babyspoon_core::models::Recipe;
use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference date
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

/// Recipes spanning every bundled category
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("early-1", "쌀미음", "초기 이유식", "쌀 10g, 물 200ml")
            .with_instructions("1. 쌀을 불린다\n2. 곱게 갈아 끓인다\n팁: 체에 한 번 거르세요"),
        Recipe::new("early-2", "애호박 미음", "초기 이유식", "쌀 10g, 애호박 5g"),
        Recipe::new("mid-1", "소고기 애호박죽", "중기 이유식", "소고기 15g, 쌀 20g, 애호박 10g"),
        Recipe::new("mid-2", "두부 브로콜리죽", "중기 이유식", "두부 20g, 브로콜리 10g, 쌀 20g"),
        Recipe::new("snack-1", "바나나 오트밀 쿠키", "간식", "바나나 1개, 오트밀 30g, 우유 20ml"),
        Recipe::new("snack-2", "사과 퓨레", "간식", "사과 1/2개"),
        Recipe::new("side-1", "된장찌개", "유아식 반찬", "된장 5g, 두부 30g, 애호박 20g"),
        Recipe::new("side-2", "찌개용 소고기찜", "유아식 반찬", "소고기 50g, 무 30g, 간장 2ml"),
    ]
}

/// Catalog over [`sample_recipes`]
pub fn sample_catalog() -> RecipeCatalog {
    RecipeCatalog::new(sample_recipes()).unwrap()
}

/// App store over an empty in-memory store
pub fn memory_app(catalog: &RecipeCatalog) -> AppStore<MemoryStore> {
    init_test_logging();
    AppStore::load(MemoryStore::new(), catalog)
}
