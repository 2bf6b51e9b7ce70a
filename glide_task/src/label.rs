// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Task label: text color and strikethrough following the `done` flag.

use glide_color::{Color, ColorInterpolator};
use glide_progress::{CubicBezier, Easing, ProgressDriver};

/// Duration of the label transition in either direction.
pub const LABEL_TRANSITION_MS: u64 = 300;

/// Resolved label text colors.
#[derive(Copy, Clone, Debug)]
pub struct LabelColors {
    /// Text color of an open task.
    pub active: Color,
    /// Text color of a finished task.
    pub done: Color,
}

/// Label state for one frame.
#[derive(Copy, Clone, Debug)]
pub struct TaskLabelFrame {
    /// Text color.
    pub color: Color,
    /// Fraction of the text width the strikethrough line covers, in `[0, 1]`.
    pub strikethrough: f64,
}

/// Text of a task row. The strikethrough draws in from the left while the
/// text fades to the done color, both from one progress value.
#[derive(Debug)]
pub struct TaskLabel {
    done: bool,
    tint: ColorInterpolator,
    progress: ProgressDriver,
}

impl TaskLabel {
    /// Creates a label at rest in the `done` state.
    #[must_use]
    pub fn new(colors: LabelColors, done: bool) -> Self {
        Self {
            done,
            tint: tint(colors),
            progress: ProgressDriver::new(if done { 1.0 } else { 0.0 }),
        }
    }

    /// Current `done` input.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Follows the `done` flag; returns `true` if a transition started.
    pub fn set_done(&mut self, now_ms: u64, done: bool) -> bool {
        if self.done == done {
            return false;
        }
        self.done = done;
        let target = if done { 1.0 } else { 0.0 };
        self.progress
            .set_target(now_ms, target, LABEL_TRANSITION_MS, Easing::Linear);
        true
    }

    /// Replaces the colors; the running transition continues.
    pub fn set_colors(&mut self, colors: LabelColors) {
        self.tint = tint(colors);
    }

    /// Returns `true` once the latest transition has finished.
    #[must_use]
    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.progress.snapshot(now_ms).settled
    }

    /// Label state at `now_ms`.
    #[must_use]
    pub fn frame(&self, now_ms: u64) -> TaskLabelFrame {
        let progress = self.progress.value(now_ms);
        TaskLabelFrame {
            color: self.tint.sample(progress),
            strikethrough: Easing::from(CubicBezier::EASE_IN_OUT).ease(progress),
        }
    }
}

fn tint(colors: LabelColors) -> ColorInterpolator {
    ColorInterpolator::new(colors.active, colors.done, Easing::Linear)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::from_rgb8(0xa3, 0xa3, 0xa3);

    fn colors() -> LabelColors {
        LabelColors {
            active: Color::BLACK,
            done: GRAY,
        }
    }

    #[test]
    fn rests_on_initial_state() {
        let open = TaskLabel::new(colors(), false).frame(0);
        assert_eq!(open.strikethrough, 0.0);
        assert_eq!(open.color.components, Color::BLACK.components);

        let done = TaskLabel::new(colors(), true).frame(0);
        assert_eq!(done.strikethrough, 1.0);
        assert_eq!(done.color.components, GRAY.components);
    }

    #[test]
    fn marking_done_strikes_and_fades() {
        let mut label = TaskLabel::new(colors(), false);
        assert!(label.set_done(100, true));
        assert!(!label.set_done(120, true));

        let mid = label.frame(100 + LABEL_TRANSITION_MS / 2);
        assert!((mid.strikethrough - 0.5).abs() < 1e-6);
        let [r, ..] = mid.color.components;
        assert!(r > 0.0 && r < GRAY.components[0]);

        assert!(label.is_settled(100 + LABEL_TRANSITION_MS));
        let end = label.frame(100 + LABEL_TRANSITION_MS);
        assert_eq!(end.strikethrough, 1.0);
        assert_eq!(end.color.components, GRAY.components);
    }

    #[test]
    fn reopening_mid_strike_reverses_from_shown_state() {
        let mut label = TaskLabel::new(colors(), false);
        label.set_done(0, true);
        let shown = label.frame(90);
        label.set_done(90, false);
        assert_eq!(label.frame(90).strikethrough, shown.strikethrough);
        assert_eq!(label.frame(90 + LABEL_TRANSITION_MS).strikethrough, 0.0);
        assert!(!label.is_done());
    }

    #[test]
    fn new_colors_apply_to_the_next_frame() {
        let mut label = TaskLabel::new(colors(), true);
        label.set_colors(LabelColors {
            active: Color::WHITE,
            done: Color::from_rgb8(0x52, 0x52, 0x52),
        });
        let [r, ..] = label.frame(0).color.components;
        assert_eq!(r, Color::from_rgb8(0x52, 0x52, 0x52).components[0]);
    }
}
