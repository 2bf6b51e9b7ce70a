// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-channel color interpolation driven by eased progress.

use glide_progress::Easing;
use peniko::Color;

/// Blends `c0` toward `c1` by `p` (clamped to `[0, 1]`).
///
/// Each channel, alpha included, is interpolated independently in sRGB with
/// straight (unpremultiplied) alpha. The endpoints are exact:
/// `interpolate(c0, c1, 0.0)` is `c0` and `interpolate(c0, c1, 1.0)` is `c1`,
/// bit for bit. Channels that are equal in both endpoints are returned
/// unchanged for every `p`.
///
/// ```
/// use glide_color::interpolate;
/// use peniko::Color;
///
/// let fill = interpolate(Color::TRANSPARENT, Color::from_rgba8(59, 130, 246, 255), 0.5);
/// assert_eq!(fill.components[3], 0.5);
/// ```
#[must_use]
pub fn interpolate(c0: Color, c1: Color, p: f64) -> Color {
    if p.is_nan() || p <= 0.0 {
        return c0;
    }
    if p >= 1.0 {
        return c1;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Color channels are f32; p is already inside (0, 1)"
    )]
    let t = p as f32;
    let [r0, g0, b0, a0] = c0.components;
    let [r1, g1, b1, a1] = c1.components;
    Color::new([
        lerp_channel(r0, r1, t),
        lerp_channel(g0, g1, t),
        lerp_channel(b0, b1, t),
        lerp_channel(a0, a1, t),
    ])
}

fn lerp_channel(a: f32, b: f32, t: f32) -> f32 {
    if a == b {
        return a;
    }
    a * (1.0 - t) + b * t
}

/// Maps progress through an easing curve into a blend between two colors.
///
/// ```
/// use glide_color::ColorInterpolator;
/// use glide_progress::{CubicBezier, Easing};
/// use peniko::Color;
///
/// let stroke = ColorInterpolator::new(
///     Color::from_rgba8(212, 212, 212, 255),
///     Color::from_rgba8(59, 130, 246, 255),
///     Easing::from(CubicBezier::EXPO_OUT),
/// );
/// assert_eq!(stroke.sample(0.0).components, stroke.from().components);
/// assert_eq!(stroke.sample(1.0).components, stroke.to().components);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ColorInterpolator {
    from: Color,
    to: Color,
    easing: Easing,
}

impl ColorInterpolator {
    /// Creates an interpolator from `from` (progress 0) to `to` (progress 1).
    #[must_use]
    pub const fn new(from: Color, to: Color, easing: Easing) -> Self {
        Self { from, to, easing }
    }

    /// Color at progress 0.
    #[must_use]
    pub const fn from(&self) -> Color {
        self.from
    }

    /// Color at progress 1.
    #[must_use]
    pub const fn to(&self) -> Color {
        self.to
    }

    /// Curve applied to progress before blending.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Blended color for `progress`.
    #[must_use]
    pub fn sample(&self, progress: f64) -> Color {
        interpolate(self.from, self.to, self.easing.ease(progress))
    }
}
