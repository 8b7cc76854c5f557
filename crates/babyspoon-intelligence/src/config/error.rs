// ABOUTME: Error type for analytics settings parsing and validation
// ABOUTME: Names the offending report window or goal so callers can report it directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use thiserror::Error;

use crate::meal_analyzer::ReportType;

/// Invalid analytics configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A reporting window shorter than one day
    #[error("{report} window must be at least one day, got {days}")]
    NonPositiveWindow {
        /// Window that failed validation
        report: ReportType,
        /// Configured lookback
        days: i64,
    },

    /// Weekly lookback longer than the monthly one
    #[error("weekly window ({weekly} days) exceeds monthly window ({monthly} days)")]
    WindowOrder {
        /// Weekly lookback
        weekly: i64,
        /// Monthly lookback
        monthly: i64,
    },

    /// A beef goal of zero would make every score zero
    #[error("{0} beef goal must be positive")]
    ZeroGoal(ReportType),

    /// Settings file JSON did not parse
    #[error("invalid analytics settings: {0}")]
    SettingsJson(#[from] serde_json::Error),
}
