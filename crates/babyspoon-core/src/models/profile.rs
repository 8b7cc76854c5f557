// ABOUTME: Child profile captured during onboarding
// ABOUTME: Persisted as a small JSON object under the profile storage key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use serde::{Deserialize, Serialize};

/// Child profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Child's display name
    #[serde(default)]
    pub name: String,
}

impl Profile {
    /// Create a profile with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
