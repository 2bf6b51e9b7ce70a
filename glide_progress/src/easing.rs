// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves: monotonic remaps of a linear time fraction.
//!
//! ## Minimal example
//!
//! ```
//! use glide_progress::{CubicBezier, Easing};
//!
//! let stroke = Easing::from(CubicBezier::SINE_IN_OUT);
//! assert_eq!(stroke.ease(0.0), 0.0);
//! assert_eq!(stroke.ease(1.0), 1.0);
//!
//! // Symmetric curve: the midpoint maps onto itself.
//! assert!((stroke.ease(0.5) - 0.5).abs() < 1e-6);
//! ```

use core::fmt;

/// Tolerance used when solving a cubic Bézier curve for its time parameter.
const SOLVE_EPSILON: f64 = 1e-7;

/// A CSS-style cubic Bézier timing curve anchored at `(0, 0)` and `(1, 1)`.
///
/// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of time;
/// they are clamped on construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Decelerate-dominant curve (`0.16, 1, 0.3, 1`), used for color blends.
    pub const EXPO_OUT: Self = Self::new(0.16, 1.0, 0.3, 1.0);

    /// Accelerate-then-decelerate curve (`0.37, 0, 0.63, 1`), used for stroke reveals.
    pub const SINE_IN_OUT: Self = Self::new(0.37, 0.0, 0.63, 1.0);

    /// Standard ease-in-out (`0.42, 0, 0.58, 1`).
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    /// Creates a curve from its two inner control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Returns the control points as `(x1, y1, x2, y2)`.
    #[must_use]
    pub const fn control_points(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Evaluates the curve at the linear time `fraction`.
    ///
    /// Fractions at or outside the unit interval map exactly onto `0.0` or `1.0`.
    #[must_use]
    pub fn ease(&self, fraction: f64) -> f64 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(fraction);
        sample(self.y1, self.y2, t)
    }

    /// Finds `t` such that `x(t) == fraction`.
    fn solve_t(&self, fraction: f64) -> f64 {
        // Newton-Raphson first; it converges quickly for well-behaved curves.
        let mut t = fraction;
        for _ in 0..8 {
            let x = sample(self.x1, self.x2, t) - fraction;
            if x.abs() < SOLVE_EPSILON {
                return t;
            }
            let dx = sample_derivative(self.x1, self.x2, t);
            if dx.abs() < 1e-6 {
                break;
            }
            t = (t - x / dx).clamp(0.0, 1.0);
        }

        // Bisection when the slope flattens out.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = fraction;
        for _ in 0..32 {
            let x = sample(self.x1, self.x2, t);
            if (x - fraction).abs() < SOLVE_EPSILON {
                break;
            }
            if x > fraction {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }
}

/// One coordinate of the Bézier polynomial with endpoints `0` and `1`.
fn sample(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn sample_derivative(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// An easing curve applied to a linear time fraction in `[0, 1]`.
///
/// Every variant maps `0` to `0` and `1` to `1` exactly.
#[derive(Copy, Clone, Default)]
pub enum Easing {
    /// Identity.
    Linear,
    /// Quadratic ease-in-out; the default curve for timed offset animations.
    #[default]
    InOutQuad,
    /// A cubic Bézier timing curve.
    CubicBezier(CubicBezier),
    /// An arbitrary curve. It should be monotonic and fix both endpoints.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Remaps `fraction` (clamped to `[0, 1]`) through the curve.
    #[must_use]
    pub fn ease(&self, fraction: f64) -> f64 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => fraction,
            Self::InOutQuad => {
                if fraction < 0.5 {
                    2.0 * fraction * fraction
                } else {
                    let inv = 1.0 - fraction;
                    1.0 - 2.0 * inv * inv
                }
            }
            Self::CubicBezier(curve) => curve.ease(fraction),
            Self::Custom(f) => {
                if fraction == 0.0 || fraction == 1.0 {
                    fraction
                } else {
                    f(fraction)
                }
            }
        }
    }
}

impl From<CubicBezier> for Easing {
    fn from(curve: CubicBezier) -> Self {
        Self::CubicBezier(curve)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::InOutQuad => f.write_str("InOutQuad"),
            Self::CubicBezier(curve) => f.debug_tuple("CubicBezier").field(curve).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact_for_every_variant() {
        let curves = [
            Easing::Linear,
            Easing::InOutQuad,
            Easing::from(CubicBezier::EXPO_OUT),
            Easing::from(CubicBezier::SINE_IN_OUT),
            Easing::Custom(|t| t * t * t),
        ];
        for curve in curves {
            assert_eq!(curve.ease(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.ease(1.0), 1.0, "{curve:?} at 1");
        }
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        let curve = Easing::from(CubicBezier::EXPO_OUT);
        assert_eq!(curve.ease(-3.0), 0.0);
        assert_eq!(curve.ease(7.5), 1.0);
        assert_eq!(curve.ease(f64::NAN), 0.0);
    }

    #[test]
    fn expo_out_front_loads_progress() {
        let curve = CubicBezier::EXPO_OUT;
        // Decelerate-dominant: most of the change happens early.
        assert!(curve.ease(0.2) > 0.6, "got {}", curve.ease(0.2));
        assert!(curve.ease(0.5) > 0.9, "got {}", curve.ease(0.5));
    }

    #[test]
    fn sine_in_out_is_slow_at_both_ends() {
        let curve = CubicBezier::SINE_IN_OUT;
        assert!(curve.ease(0.1) < 0.1);
        assert!(curve.ease(0.9) > 0.9);
        assert!((curve.ease(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn cubic_bezier_is_monotonic() {
        for curve in [CubicBezier::EXPO_OUT, CubicBezier::SINE_IN_OUT] {
            let mut last = 0.0;
            for i in 0..=100 {
                let v = curve.ease(f64::from(i) / 100.0);
                assert!(v + 1e-9 >= last, "{curve:?} not monotonic at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn linear_control_points_yield_identity() {
        let curve = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 1..10 {
            let t = f64::from(i) / 10.0;
            assert!((curve.ease(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn x_control_points_are_clamped() {
        let curve = CubicBezier::new(-1.0, 0.0, 2.0, 1.0);
        let (x1, _, x2, _) = curve.control_points();
        assert_eq!(x1, 0.0);
        assert_eq!(x2, 1.0);
    }

    #[test]
    fn in_out_quad_midpoint() {
        assert_eq!(Easing::InOutQuad.ease(0.5), 0.5);
        assert_eq!(Easing::InOutQuad.ease(0.25), 0.125);
    }
}
