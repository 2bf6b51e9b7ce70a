// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glide_progress::Easing;

/// Tuning of a [`SwipeGestureController`](crate::SwipeGestureController).
#[derive(Copy, Clone, Debug)]
pub struct SwipeConfig {
    /// Furthest a drag may move the row to the left, in pixels.
    pub max_dismiss_width: f64,
    /// Fraction of the viewport width the row must pass to commit.
    pub threshold_fraction: f64,
    /// Duration of the spring-back and slide-off animations.
    pub settle_duration_ms: u64,
    /// Curve of the spring-back and slide-off animations.
    pub settle_easing: Easing,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            max_dismiss_width: 128.0,
            threshold_fraction: 0.2,
            settle_duration_ms: 300,
            settle_easing: Easing::InOutQuad,
        }
    }
}

impl SwipeConfig {
    /// Sets the drag clamp. Negative values are treated as `0`.
    #[must_use]
    pub fn with_max_dismiss_width(mut self, width: f64) -> Self {
        self.max_dismiss_width = width;
        self.sanitized()
    }

    /// Sets the commit threshold as a fraction of the viewport width.
    #[must_use]
    pub fn with_threshold_fraction(mut self, fraction: f64) -> Self {
        self.threshold_fraction = fraction;
        self.sanitized()
    }

    /// Sets the settle animation duration.
    #[must_use]
    pub fn with_settle_duration_ms(mut self, duration_ms: u64) -> Self {
        self.settle_duration_ms = duration_ms;
        self
    }

    /// Sets the settle animation curve.
    #[must_use]
    pub fn with_settle_easing(mut self, easing: Easing) -> Self {
        self.settle_easing = easing;
        self
    }

    /// Returns the config with out-of-range fields pulled back in range.
    ///
    /// A negative or NaN drag clamp becomes `0`; the threshold fraction is
    /// clamped to `[0, 1]` with NaN treated as `0`.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.max_dismiss_width = if self.max_dismiss_width.is_nan() {
            0.0
        } else {
            self.max_dismiss_width.max(0.0)
        };
        self.threshold_fraction = if self.threshold_fraction.is_nan() {
            0.0
        } else {
            self.threshold_fraction.clamp(0.0, 1.0)
        };
        self
    }

    /// Commit threshold for a viewport `viewport_width` pixels wide.
    ///
    /// A released offset strictly less than this commits.
    #[must_use]
    pub fn threshold(&self, viewport_width: f64) -> f64 {
        -self.threshold_fraction * viewport_width
    }

    /// Returns `true` if a drag can reach the threshold at this viewport width.
    ///
    /// With the defaults, viewports 640 pixels or wider can never commit.
    #[must_use]
    pub fn can_commit(&self, viewport_width: f64) -> bool {
        -self.max_dismiss_width < self.threshold(viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_scales_with_viewport() {
        let config = SwipeConfig::default();
        assert_eq!(config.threshold(400.0), -80.0);
        assert_eq!(config.threshold(0.0), 0.0);
    }

    #[test]
    fn wide_viewports_cannot_commit() {
        let config = SwipeConfig::default();
        assert!(config.can_commit(639.0));
        assert!(!config.can_commit(640.0));
        assert!(config.with_max_dismiss_width(200.0).can_commit(800.0));
    }

    #[test]
    fn builders_clamp() {
        let config = SwipeConfig::default()
            .with_max_dismiss_width(-5.0)
            .with_threshold_fraction(3.0);
        assert_eq!(config.max_dismiss_width, 0.0);
        assert_eq!(config.threshold_fraction, 1.0);
    }

    #[test]
    fn sanitizing_repairs_hand_built_configs() {
        let config = SwipeConfig {
            max_dismiss_width: f64::NAN,
            threshold_fraction: f64::NAN,
            ..SwipeConfig::default()
        }
        .sanitized();
        assert_eq!(config.max_dismiss_width, 0.0);
        assert_eq!(config.threshold_fraction, 0.0);

        let config = SwipeConfig {
            max_dismiss_width: f64::INFINITY,
            threshold_fraction: -0.5,
            ..SwipeConfig::default()
        }
        .sanitized();
        assert_eq!(config.max_dismiss_width, f64::INFINITY);
        assert_eq!(config.threshold_fraction, 0.0);
    }
}
