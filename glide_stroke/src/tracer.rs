// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased stroke reveal/conceal offsets.

use glide_progress::{CubicBezier, Easing};

/// Residual offset subtracted at full reveal; keeps a one-pixel sliver of
/// dash gap from showing when progress reaches `1`.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Dash parameters for drawing a partially revealed stroke.
///
/// The stroke is drawn with a single dash of `dash_length` followed by an
/// equally long gap, shifted by `dash_offset`. When `visible` is `false` the
/// path has not been measured yet and the stroke must not be drawn at all.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeReveal {
    /// Dash (and gap) length: the path's total length.
    pub dash_length: f64,
    /// Dash offset: `dash_length` hides the stroke, `0` shows all of it.
    pub dash_offset: f64,
    /// `false` before measurement.
    pub visible: bool,
}

impl StrokeReveal {
    /// The reveal used before the path is measured.
    pub const HIDDEN: Self = Self {
        dash_length: 0.0,
        dash_offset: 0.0,
        visible: false,
    };

    /// Fraction of the path that is drawn, in `[0, 1]`.
    #[must_use]
    pub fn revealed_fraction(&self) -> f64 {
        if !self.visible || self.dash_length <= 0.0 {
            return 0.0;
        }
        (1.0 - self.dash_offset / self.dash_length).clamp(0.0, 1.0)
    }
}

/// Computes stroke dash offsets from a measured length and a progress value.
///
/// The stroke reveal uses its own curve, accelerate-then-decelerate by
/// default, independent of any easing used for colors of the same animation.
///
/// ```
/// use glide_stroke::PathTracer;
///
/// let tracer = PathTracer::default();
/// assert_eq!(tracer.offset(0.0, 0.5), 0.0);
/// assert!(tracer.offset(80.0, 1.0) < tracer.epsilon());
/// assert!((tracer.offset(80.0, 0.0) - 79.9).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct PathTracer {
    easing: Easing,
    epsilon: f64,
}

impl Default for PathTracer {
    fn default() -> Self {
        Self {
            easing: Easing::CubicBezier(CubicBezier::SINE_IN_OUT),
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl PathTracer {
    /// Creates a tracer with the default curve and epsilon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `easing` for the reveal.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Uses `epsilon` (clamped to be non-negative) as the full-reveal residual.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    /// Reveal curve.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Full-reveal residual.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// `max(0, L - L * ease(p) - epsilon)`.
    ///
    /// Unmeasured lengths (zero, negative, or non-finite) give `0`.
    #[must_use]
    pub fn offset(&self, total_length: f64, progress: f64) -> f64 {
        if !is_measured(total_length) {
            return 0.0;
        }
        let eased = self.easing.ease(progress);
        (total_length - total_length * eased - self.epsilon).max(0.0)
    }

    /// Dash parameters for `progress`, hidden while unmeasured.
    #[must_use]
    pub fn reveal(&self, total_length: f64, progress: f64) -> StrokeReveal {
        if !is_measured(total_length) {
            return StrokeReveal::HIDDEN;
        }
        StrokeReveal {
            dash_length: total_length,
            dash_offset: self.offset(total_length, progress),
            visible: true,
        }
    }
}

fn is_measured(total_length: f64) -> bool {
    total_length.is_finite() && total_length > 0.0
}
