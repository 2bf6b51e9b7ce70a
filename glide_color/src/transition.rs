// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated hand-over between successive resolved colors.

use glide_progress::{Easing, Transition};
use peniko::Color;

use crate::interpolate;

/// Default length of a color hand-over, in milliseconds.
pub const DEFAULT_COLOR_TRANSITION_MS: u64 = 200;

/// Animates from the previously shown color to a newly resolved one.
///
/// Typical use is a surface whose background token resolves differently after
/// a theme switch: instead of snapping, the old color fades into the new one.
///
/// ```
/// use glide_color::ColorTransition;
/// use peniko::Color;
///
/// let mut bg = ColorTransition::new(Color::WHITE);
/// bg.set_color(1_000, Color::BLACK);
///
/// assert_eq!(bg.sample(1_000).components, Color::WHITE.components);
/// assert_eq!(bg.sample(1_200).components, Color::BLACK.components);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ColorTransition {
    from: Color,
    to: Color,
    duration_ms: u64,
    progress: Transition,
}

impl ColorTransition {
    /// Creates a transition resting on `color`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            from: color,
            to: color,
            duration_ms: DEFAULT_COLOR_TRANSITION_MS,
            progress: Transition::at_rest(1.0),
        }
    }

    /// Overrides the hand-over duration.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// The color being animated toward.
    #[must_use]
    pub fn target(&self) -> Color {
        self.to
    }

    /// Starts fading toward `color` from whatever is shown at `now_ms`.
    ///
    /// Setting the current target again is a no-op.
    pub fn set_color(&mut self, now_ms: u64, color: Color) {
        if color.components == self.to.components {
            return;
        }
        self.from = self.sample(now_ms);
        self.to = color;
        self.progress = Transition::new(0.0, 1.0, now_ms, self.duration_ms, Easing::Linear);
        tracing::debug!(duration_ms = self.duration_ms, "color transition started");
    }

    /// Color shown at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> Color {
        interpolate(self.from, self.to, self.progress.value_at(now_ms))
    }

    /// Returns `true` once the fade has completed.
    #[must_use]
    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.progress.is_finished(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rests_on_initial_color() {
        let bg = ColorTransition::new(Color::WHITE);
        assert_eq!(bg.sample(0).components, Color::WHITE.components);
        assert!(bg.is_settled(0));
    }

    #[test]
    fn same_color_does_not_restart() {
        let mut bg = ColorTransition::new(Color::WHITE);
        bg.set_color(10, Color::WHITE);
        assert!(bg.is_settled(10));
    }

    #[test]
    fn fades_linearly_over_duration() {
        let mut bg = ColorTransition::new(Color::BLACK).with_duration(100);
        bg.set_color(0, Color::WHITE);
        assert!(!bg.is_settled(50));
        let [r, g, b, a] = bg.sample(50).components;
        assert_eq!([r, g, b, a], [0.5, 0.5, 0.5, 1.0]);
        assert!(bg.is_settled(100));
    }

    #[test]
    fn retargeting_mid_fade_starts_from_shown_color() {
        let mut bg = ColorTransition::new(Color::BLACK).with_duration(100);
        bg.set_color(0, Color::WHITE);
        let shown = bg.sample(50);
        bg.set_color(50, Color::BLACK);
        assert_eq!(bg.sample(50).components, shown.components);
        assert_eq!(bg.sample(150).components, Color::BLACK.components);
    }
}
