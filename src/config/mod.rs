// ABOUTME: Configuration management module for application settings
// ABOUTME: Re-exports the environment-driven application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Configuration module.
//!
//! - **Environment**: data directory, catalog path and search knobs read from
//!   `BABYSPOON_*` variables
//!
//! Analytics windows and goals live in
//! [`babyspoon_intelligence::AnalysisConfig`].

/// Environment and application configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
