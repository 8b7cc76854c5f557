// ABOUTME: Core data models for recipes, caregiver preferences, and the persisted meal plan
// ABOUTME: Re-exports Recipe, Allergen, AllergyPreferences, Favorites, MealPlan, and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Data models.
//!
//! Every persisted model serializes to the same JSON shape the storage
//! collaborator already holds, including the legacy single-object meal
//! buckets.

/// Allergen flags and the caregiver's avoid-list
pub mod allergy;
/// Favorite recipes keyed by recipe id
pub mod favorites;
/// Nested date -> meal type -> entries structure and its flattened view
pub mod meal_plan;
/// Child profile captured at onboarding
pub mod profile;
/// Static catalog recipes and recorded snapshots
pub mod recipe;

pub use allergy::{Allergen, AllergyPreferences};
pub use favorites::Favorites;
pub use meal_plan::{DayPlan, MealBucket, MealEntry, MealHistoryRecord, MealPlan, MealType};
pub use profile::Profile;
pub use recipe::{Recipe, RecipeSnapshot};
