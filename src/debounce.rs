// ABOUTME: Time-debounced value holder for the search box
// ABOUTME: A value is applied only after a quiet period; newer pushes supersede pending ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

use babyspoon_core::constants::limits;
use std::time::{Duration, Instant};

/// Debounces a stream of values against an injected clock
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    settled: T,
}

impl<T: Default> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(limits::DEFAULT_DEBOUNCE_MS), T::default())
    }
}

impl<T> Debouncer<T> {
    /// Debouncer whose settled value starts as `initial`
    #[must_use]
    pub const fn new(delay: Duration, initial: T) -> Self {
        Self {
            delay,
            pending: None,
            settled: initial,
        }
    }

    /// Quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the timer at `now`
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Whether a value is waiting for its quiet period
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the pending value once its quiet period has elapsed.
    ///
    /// Returns the newly settled value exactly once; `None` while the timer
    /// is running or when nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(_, pushed_at)| now.saturating_duration_since(*pushed_at) >= self.delay);
        if !ready {
            return None;
        }
        let (value, _) = self.pending.take()?;
        self.settled = value;
        Some(&self.settled)
    }

    /// Last applied value
    #[must_use]
    pub const fn settled(&self) -> &T {
        &self.settled
    }

    /// Drop the pending value without applying it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
