// ABOUTME: Core types and constants for the babyspoon meal tracking platform
// ABOUTME: Foundation crate with error handling, data models, date keys, and keyword tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

#![deny(unsafe_code)]

//! # Babyspoon Core
//!
//! Foundation crate providing shared types and constants for the babyspoon
//! recipe catalog and meal-history analytics. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Storage keys, limits, and the hand-curated keyword tables
//! - **models**: Recipe, allergy preferences, favorites, and the persisted meal plan
//! - **date_key**: `YYYY-MM-DD` local calendar date keys

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `AllergyPreferences`, `MealPlan`, etc.)
pub mod models;

/// Local calendar date-key parsing and formatting
pub mod date_key;

pub use errors::{AppError, AppResult, ErrorCode};
