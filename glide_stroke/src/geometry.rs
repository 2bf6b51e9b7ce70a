// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured path length, written once per layout pass and read every frame.
//!
//! ## Usage
//!
//! 1) Create a [`PathGeometry`]; it starts unmeasured (length `0`).
//! 2) After layout, call [`PathGeometry::record`] with the measured length.
//! 3) Frame code reads through [`PathLengthReader`] handles.
//! 4) On re-layout (rotation, resize), call [`PathGeometry::invalidate`]; readers
//!    see a transient `0` until the next `record`.
//!
//! ## Minimal example
//!
//! ```
//! use glide_stroke::PathGeometry;
//!
//! let mut geometry = PathGeometry::new();
//! let reader = geometry.reader();
//! assert_eq!(reader.total_length(), 0.0);
//!
//! assert!(geometry.record(61.5));
//! assert_eq!(reader.total_length(), 61.5);
//!
//! // Only the first measurement of a layout pass sticks.
//! assert!(!geometry.record(99.0));
//!
//! geometry.invalidate();
//! assert!(!reader.is_measured());
//! ```

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
struct Shared {
    /// `f64` bits of the measured length; `0` while unmeasured.
    length_bits: AtomicU64,
    /// Bumped by every invalidation.
    epoch: AtomicU64,
}

/// Owner of a path's measured length.
#[derive(Debug, Default)]
pub struct PathGeometry {
    shared: Arc<Shared>,
}

impl PathGeometry {
    /// Creates an unmeasured geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the measured total length for the current layout pass.
    ///
    /// Returns `false` (and stores nothing) when a length was already recorded
    /// in this pass, or when `length` is not a positive finite number.
    pub fn record(&mut self, length: f64) -> bool {
        if !(length.is_finite() && length > 0.0) {
            tracing::debug!(length, "ignoring unusable path length");
            return false;
        }
        let stored = self
            .shared
            .length_bits
            .compare_exchange(0, length.to_bits(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if stored {
            tracing::debug!(length, epoch = self.epoch(), "path length measured");
        }
        stored
    }

    /// Forgets the measurement ahead of a new layout pass.
    pub fn invalidate(&mut self) {
        self.shared.length_bits.store(0, Ordering::Release);
        self.shared.epoch.fetch_add(1, Ordering::AcqRel);
    }

    /// Layout pass counter, bumped on each invalidation.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.shared.epoch.load(Ordering::Acquire)
    }

    /// Measured length, or `0` before measurement.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        load_length(&self.shared)
    }

    /// Returns `true` once a length has been recorded for the current pass.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.total_length() > 0.0
    }

    /// Returns a reader handle.
    #[must_use]
    pub fn reader(&self) -> PathLengthReader {
        PathLengthReader {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Read-only handle to a [`PathGeometry`].
#[derive(Clone, Debug)]
pub struct PathLengthReader {
    shared: Arc<Shared>,
}

impl PathLengthReader {
    /// Measured length, or `0` before measurement.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        load_length(&self.shared)
    }

    /// Returns `true` once a length has been recorded for the current pass.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.total_length() > 0.0
    }
}

fn load_length(shared: &Shared) -> f64 {
    f64::from_bits(shared.length_bits.load(Ordering::Acquire))
}
