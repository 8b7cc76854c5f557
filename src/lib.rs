// ABOUTME: Main library entry point for the babyspoon recipe and meal-history application layer
// ABOUTME: Wires storage, migration, catalog, search, and state around the pure analytics crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

#![deny(unsafe_code)]

//! # Babyspoon
//!
//! Application layer for a baby-food recipe browser with meal-history
//! nutrition analytics.
//!
//! ## Architecture
//!
//! - **`babyspoon-core`**: data models, error types, constants, date keys
//! - **`babyspoon-intelligence`**: pure analytics (classifier, history
//!   flattener, windowed analyzer, weekly series)
//! - **this crate**: persistence collaborator, favorites migration, state
//!   store, recipe catalog, search engine, debouncer, and the CLI
//!
//! ## Example
//!
//! ```rust,no_run
//! use babyspoon::catalog::RecipeCatalog;
//! use babyspoon::state::AppStore;
//! use babyspoon::storage::MemoryStore;
//! use babyspoon_core::date_key::local_today;
//! use babyspoon_core::models::MealType;
//! use babyspoon_intelligence::ReportType;
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = RecipeCatalog::from_json_str(r#"[{"id":"r1","name":"소고기죽","category":"중기 이유식","ingredients":"소고기, 쌀"}]"#)?;
//! let mut app = AppStore::load(MemoryStore::new(), &catalog);
//! let recipe = catalog.require("r1")?;
//! app.record_meal(local_today(), MealType::Lunch, recipe);
//! println!("{:?}", app.analysis(ReportType::Weekly, local_today()));
//! # Ok(())
//! # }
//! ```

/// Recipe catalog loading and detail text parsing
pub mod catalog;
/// Environment-driven configuration
pub mod config;
/// Time-debounced search input
pub mod debounce;
/// Logging setup
pub mod logging;
/// Favorites schema migration
pub mod migration;
/// Recipe search and filtering
pub mod search;
/// Application state store
pub mod state;
/// Key-value persistence collaborator
pub mod storage;

pub use babyspoon_core::{AppError, AppResult, ErrorCode};
