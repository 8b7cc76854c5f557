// ABOUTME: One-time favorites migration from recipe-name keys to stable recipe ids
// ABOUTME: Versioned by a persisted schema marker so steady-state toggling never re-runs it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! # Favorites Migration
//!
//! Early revisions keyed favorites by recipe `name`. Schema version 2 keys
//! them by recipe `id`. On load, when the stored version is below 2:
//!
//! 1. keys that are catalog ids are kept as-is
//! 2. keys that match a catalog recipe name are re-keyed to that recipe's id
//! 3. any other key is dropped
//!
//! Id-keyed entries win when both forms refer to the same recipe. Only
//! entries set to `true` survive.

use babyspoon_core::constants::storage_keys;
use babyspoon_core::models::Favorites;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::catalog::RecipeCatalog;
use crate::storage::{safe_get, safe_set, KeyValueStore};

/// Schema version written after migration
pub const CURRENT_FAVORITES_VERSION: u32 = 2;

/// Outcome of a migration pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Version found in storage (0 when absent)
    pub from_version: u32,
    /// Version written
    pub to_version: u32,
    /// Entries re-keyed from a name to an id
    pub renamed: usize,
    /// Entries already keyed by id
    pub kept: usize,
    /// Keys that matched no recipe
    pub dropped: Vec<String>,
}

/// Re-key name-keyed favorites to ids
#[must_use]
pub fn migrate_favorites(
    legacy: &BTreeMap<String, bool>,
    catalog: &RecipeCatalog,
) -> (Favorites, MigrationReport) {
    let mut favorites = Favorites::default();
    let mut report = MigrationReport {
        to_version: CURRENT_FAVORITES_VERSION,
        ..MigrationReport::default()
    };

    for (key, _) in legacy.iter().filter(|(_, enabled)| **enabled) {
        if catalog.contains_id(key) {
            favorites.insert(key.clone());
            report.kept += 1;
        }
    }

    for (key, _) in legacy.iter().filter(|(_, enabled)| **enabled) {
        if catalog.contains_id(key) {
            continue;
        }
        match catalog.find_by_name(key) {
            Some(recipe) => {
                if !favorites.contains(&recipe.id) {
                    favorites.insert(recipe.id.clone());
                }
                report.renamed += 1;
            }
            None => report.dropped.push(key.clone()),
        }
    }

    (favorites, report)
}

/// Load favorites, migrating them first when the stored schema is old.
///
/// Returns the id-keyed favorites and, when a migration ran, its report.
pub fn load_favorites<S>(store: &mut S, catalog: &RecipeCatalog) -> (Favorites, Option<MigrationReport>)
where
    S: KeyValueStore + ?Sized,
{
    let version: u32 = safe_get(store, storage_keys::FAVORITES_SCHEMA_VERSION, 0);
    if version >= CURRENT_FAVORITES_VERSION {
        let favorites: Favorites = safe_get(store, storage_keys::FAVORITES, Favorites::default());
        return (favorites, None);
    }

    let legacy: BTreeMap<String, bool> =
        safe_get(store, storage_keys::FAVORITES, BTreeMap::new());
    let (favorites, mut report) = migrate_favorites(&legacy, catalog);
    report.from_version = version;

    let persisted = safe_set(store, storage_keys::FAVORITES, &favorites)
        && safe_set(
            store,
            storage_keys::FAVORITES_SCHEMA_VERSION,
            &CURRENT_FAVORITES_VERSION,
        );
    if !persisted {
        warn!("Favorites migration could not be persisted; it will run again next load");
    }

    info!(
        from = report.from_version,
        to = report.to_version,
        renamed = report.renamed,
        kept = report.kept,
        dropped = report.dropped.len(),
        "Migrated favorites"
    );
    (favorites, Some(report))
}
