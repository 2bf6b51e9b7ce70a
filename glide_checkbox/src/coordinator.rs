// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox animation coordinator.
//!
//! ## Usage
//!
//! 1) Build a [`CheckboxAnimationCoordinator`] from resolved [`CheckboxColors`].
//! 2) After layout, call [`CheckboxAnimationCoordinator::on_layout`] so the
//!    checkmark length is known; until then the checkmark is hidden.
//! 3) Feed the controlled `checked` input with
//!    [`CheckboxAnimationCoordinator::sync_checked`] whenever the owner's state changes.
//! 4) Each frame, call [`CheckboxAnimationCoordinator::frame`] (or use a
//!    [`CheckboxFrameSource`] from another thread) and draw the returned layers.

use glide_progress::{Easing, ProgressDriver, ProgressReader};
use glide_stroke::{PathGeometry, PathLengthReader, PathMeasure};

use crate::{CheckboxColors, CheckboxGeometry, CheckboxStyle, CheckboxVisualState};

/// Durations and curve of the check/uncheck transitions.
///
/// Checking is deliberately slower than unchecking.
#[derive(Copy, Clone, Debug)]
pub struct CheckboxTimings {
    /// Duration of the transition to checked.
    pub check_ms: u64,
    /// Duration of the transition to unchecked.
    pub uncheck_ms: u64,
    /// Curve applied to the shared progress value.
    pub easing: Easing,
}

impl Default for CheckboxTimings {
    fn default() -> Self {
        Self {
            check_ms: 300,
            uncheck_ms: 100,
            easing: Easing::Linear,
        }
    }
}

impl CheckboxTimings {
    /// Duration of a transition toward `checked`.
    #[must_use]
    pub const fn duration_for(&self, checked: bool) -> u64 {
        if checked { self.check_ms } else { self.uncheck_ms }
    }
}

/// Inputs stored next to the progress transition, so a frame always sees
/// `checked` from the same write as the transition toward it.
#[derive(Copy, Clone, Debug)]
struct Inputs {
    checked: bool,
    style: CheckboxStyle,
}

/// Drives all checkbox layers from one progress value.
///
/// The coordinator never changes `checked` on its own; it only follows the
/// controlled input it is given.
#[derive(Debug)]
pub struct CheckboxAnimationCoordinator {
    progress: ProgressDriver<Inputs>,
    geometry: CheckboxGeometry,
    checkmark_length: PathGeometry,
    timings: CheckboxTimings,
}

impl CheckboxAnimationCoordinator {
    /// Creates a coordinator at rest in the `checked` state.
    #[must_use]
    pub fn new(geometry: CheckboxGeometry, colors: CheckboxColors, checked: bool) -> Self {
        Self::with_style(geometry, CheckboxStyle::new(colors), checked)
    }

    /// Creates a coordinator with a custom style.
    #[must_use]
    pub fn with_style(geometry: CheckboxGeometry, style: CheckboxStyle, checked: bool) -> Self {
        Self {
            progress: ProgressDriver::with_inputs(
                if checked { 1.0 } else { 0.0 },
                Inputs { checked, style },
            ),
            geometry,
            checkmark_length: PathGeometry::new(),
            timings: CheckboxTimings::default(),
        }
    }

    /// Overrides the transition timings.
    #[must_use]
    pub fn with_timings(mut self, timings: CheckboxTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Artwork used by this checkbox.
    #[must_use]
    pub fn geometry(&self) -> &CheckboxGeometry {
        &self.geometry
    }

    /// Transition timings.
    #[must_use]
    pub fn timings(&self) -> CheckboxTimings {
        self.timings
    }

    /// Current controlled input.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.progress.inputs().checked
    }

    /// Starts the transition toward `checked`, always restarting the timer.
    pub fn set_checked(&mut self, now_ms: u64, checked: bool) {
        let target = if checked { 1.0 } else { 0.0 };
        let duration_ms = self.timings.duration_for(checked);
        self.progress.set_target_with(
            now_ms,
            target,
            duration_ms,
            self.timings.easing,
            |inputs| inputs.checked = checked,
        );
        tracing::debug!(checked, duration_ms, "checkbox retargeted");
    }

    /// Follows the controlled input, starting a transition only on change.
    ///
    /// Returns `true` if a transition was started.
    pub fn sync_checked(&mut self, now_ms: u64, checked: bool) -> bool {
        if self.is_checked() == checked {
            return false;
        }
        self.set_checked(now_ms, checked);
        true
    }

    /// Replaces the colors, e.g. after a theme switch.
    pub fn set_colors(&mut self, colors: CheckboxColors) {
        self.progress.update_inputs(|inputs| {
            inputs.style = CheckboxStyle::with_tracer(colors, inputs.style.tracer());
        });
    }

    /// Measures the checkmark once it has been laid out.
    ///
    /// Returns the recorded length, or `None` when a length was already
    /// recorded for this layout pass or the measurement was unusable.
    pub fn on_layout(&mut self, measure: &impl PathMeasure) -> Option<f64> {
        let length = measure.measure_total_length(&self.geometry.checkmark);
        self.checkmark_length.record(length).then_some(length)
    }

    /// Forgets the checkmark length ahead of a new layout pass.
    pub fn invalidate_layout(&mut self) {
        self.checkmark_length.invalidate();
    }

    /// Measured checkmark length, `0` before layout.
    #[must_use]
    pub fn checkmark_length(&self) -> f64 {
        self.checkmark_length.total_length()
    }

    /// Linear progress at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        self.progress.value(now_ms)
    }

    /// Returns `true` once the active transition has completed.
    #[must_use]
    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.progress.snapshot(now_ms).settled
    }

    /// Layers for the frame at `now_ms`.
    #[must_use]
    pub fn frame(&self, now_ms: u64) -> CheckboxVisualState {
        let (progress, inputs) = self.progress.sample(now_ms);
        inputs.style.compose(
            progress.value,
            inputs.checked,
            self.checkmark_length.total_length(),
        )
    }

    /// Returns a handle that evaluates frames from another thread.
    #[must_use]
    pub fn frame_source(&self) -> CheckboxFrameSource {
        CheckboxFrameSource {
            progress: self.progress.reader(),
            checkmark_length: self.checkmark_length.reader(),
        }
    }
}

/// Read-only frame evaluator for a [`CheckboxAnimationCoordinator`].
///
/// Cheap to clone, `Send + Sync`.
#[derive(Clone, Debug)]
pub struct CheckboxFrameSource {
    progress: ProgressReader<Inputs>,
    checkmark_length: PathLengthReader,
}

impl CheckboxFrameSource {
    /// Layers for the frame at `now_ms`.
    #[must_use]
    pub fn frame(&self, now_ms: u64) -> CheckboxVisualState {
        let (progress, inputs) = self.progress.sample(now_ms);
        inputs.style.compose(
            progress.value,
            inputs.checked,
            self.checkmark_length.total_length(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_color::Color;

    fn coordinator(checked: bool) -> CheckboxAnimationCoordinator {
        let colors = CheckboxColors {
            outline: Color::from_rgba8(212, 212, 212, 255),
            highlight: Color::from_rgba8(59, 130, 246, 255),
            checkmark: Color::WHITE,
        };
        let geometry = CheckboxGeometry::new().expect("built-in paths are valid");
        CheckboxAnimationCoordinator::new(geometry, colors, checked)
    }

    #[test]
    fn check_and_uncheck_durations_differ() {
        let timings = CheckboxTimings::default();
        assert_eq!(timings.duration_for(true), 300);
        assert_eq!(timings.duration_for(false), 100);
    }

    #[test]
    fn starts_at_rest() {
        let checkbox = coordinator(true);
        assert_eq!(checkbox.progress(0), 1.0);
        assert!(checkbox.is_settled(0));
        assert!(checkbox.is_checked());
    }

    #[test]
    fn sync_only_acts_on_change() {
        let mut checkbox = coordinator(false);
        assert!(!checkbox.sync_checked(0, false));
        assert!(checkbox.sync_checked(0, true));
        assert!(!checkbox.sync_checked(10, true));
        assert!(checkbox.is_checked());
    }

    #[test]
    fn layout_is_recorded_once_per_pass() {
        let mut checkbox = coordinator(false);
        let fixed = |_: &kurbo::BezPath| 70.0;
        assert_eq!(checkbox.on_layout(&fixed), Some(70.0));
        assert_eq!(checkbox.on_layout(&fixed), None);
        checkbox.invalidate_layout();
        assert_eq!(checkbox.checkmark_length(), 0.0);
        assert_eq!(checkbox.on_layout(&fixed), Some(70.0));
    }

    #[test]
    fn set_colors_reaches_frame_sources() {
        let mut checkbox = coordinator(true);
        let source = checkbox.frame_source();
        let mut colors = checkbox.frame(0).checkmark.masked().color;
        assert_eq!(colors.components, Color::WHITE.components);

        checkbox.set_colors(CheckboxColors {
            outline: Color::BLACK,
            highlight: Color::BLACK,
            checkmark: Color::BLACK,
        });
        colors = source.frame(0).checkmark.masked().color;
        assert_eq!(colors.components, Color::BLACK.components);
    }

    #[test]
    fn frame_sources_never_see_checked_apart_from_its_transition() {
        let mut checkbox = coordinator(false);
        let source = checkbox.frame_source();
        let watcher = std::thread::spawn(move || {
            for _ in 0..20_000 {
                // Far enough ahead that every transition has settled.
                let frame = source.frame(1_000_000);
                let settled = if frame.checked { 1.0 } else { 0.0 };
                assert_eq!(frame.progress, settled, "checked = {}", frame.checked);
            }
        });
        for now in 0..2_000 {
            checkbox.set_checked(now, now % 2 == 0);
        }
        watcher.join().expect("watcher thread panicked");
    }
}
