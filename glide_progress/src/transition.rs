// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed transitions between two scalar values.

use crate::Easing;

/// A timed, eased move from `from` to `to`, starting at `start_ms`.
///
/// `Transition` is a plain value: evaluating it never mutates anything, so the
/// same transition evaluated at the same frame timestamp always yields the same
/// value.
///
/// ```
/// use glide_progress::{Easing, Transition};
///
/// let t = Transition::new(0.0, 10.0, 1_000, 100, Easing::Linear);
/// assert_eq!(t.value_at(900), 0.0);
/// assert_eq!(t.value_at(1_050), 5.0);
/// assert_eq!(t.value_at(5_000), 10.0);
/// assert!(t.is_finished(1_100));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Transition {
    /// Value at (and before) `start_ms`.
    pub from: f64,
    /// Value once the transition has run for `duration_ms`.
    pub to: f64,
    /// Frame timestamp at which the transition started.
    pub start_ms: u64,
    /// Length of the transition; `0` jumps straight to `to`.
    pub duration_ms: u64,
    /// Curve applied to the elapsed time fraction.
    pub easing: Easing,
}

impl Transition {
    /// Creates a transition.
    #[must_use]
    pub const fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// A transition that is already at rest on `value`.
    #[must_use]
    pub const fn at_rest(value: f64) -> Self {
        Self::new(value, value, 0, 0, Easing::Linear)
    }

    /// Linear time fraction elapsed at `now_ms`, in `[0, 1]`.
    #[must_use]
    pub fn fraction_at(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return 1.0;
        }
        elapsed as f64 / self.duration_ms as f64
    }

    /// Eased value at `now_ms`.
    ///
    /// Exactly `from` before the start and exactly `to` once finished.
    #[must_use]
    pub fn value_at(&self, now_ms: u64) -> f64 {
        let fraction = self.fraction_at(now_ms);
        if fraction >= 1.0 {
            return self.to;
        }
        let eased = self.easing.ease(fraction);
        if eased == 0.0 {
            return self.from;
        }
        self.from + (self.to - self.from) * eased
    }

    /// Returns `true` once the transition has reached `to`.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.fraction_at(now_ms) >= 1.0
    }

    /// Starts a new transition from this one's value at `now_ms`.
    ///
    /// This is the only way a running transition is cancelled.
    #[must_use]
    pub fn retarget(&self, now_ms: u64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self::new(self.value_at(now_ms), to, now_ms, duration_ms, easing)
    }
}
