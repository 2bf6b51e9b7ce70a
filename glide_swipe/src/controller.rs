// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-dismiss state machine.
//!
//! ## Usage
//!
//! 1) Create a [`SwipeGestureController`] with the viewport width and a
//!    [`DismissHandler`].
//! 2) Forward the platform gesture: [`SwipeGestureController::gesture_start`],
//!    [`SwipeGestureController::gesture_update`] with translations relative to
//!    the gesture start, then [`SwipeGestureController::gesture_end`].
//! 3) Each frame, render the row at [`SwipeGestureController::offset`].
//!
//! ```text
//! Idle --start--> Dragging --end, offset < threshold--> Committed
//!   ^                 ^   \
//!   |               start  end, otherwise
//!   |                 |     v
//!   +--animation done-- Settling
//! ```

use glide_progress::Transition;

use crate::{DismissHandler, SwipeConfig};

/// One gesture update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureSample {
    /// Horizontal translation since the gesture started; negative is leftward.
    pub translation_x: f64,
}

impl GestureSample {
    /// A sample with translation `translation_x`.
    #[must_use]
    pub const fn new(translation_x: f64) -> Self {
        Self { translation_x }
    }
}

/// Observable state of a swipe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeState {
    /// At rest at offset `0`.
    Idle,
    /// Following the finger.
    Dragging {
        /// Current clamped offset.
        offset_x: f64,
    },
    /// Animating back after a release below the threshold.
    Settling {
        /// Offset being animated to.
        target: f64,
    },
    /// Dismissed. Terminal.
    Committed,
}

/// Result of forwarding a gesture end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// No drag was in progress.
    Ignored,
    /// The row springs back to `0`.
    SpringBack,
    /// The row slides off and the dismiss handler has fired.
    Committed,
}

#[derive(Copy, Clone, Debug)]
enum Phase {
    Idle,
    Dragging { origin: f64, offset_x: f64 },
    Settling,
    Committed,
}

/// Turns a horizontal drag into a clamped offset and a commit decision.
#[derive(Debug)]
pub struct SwipeGestureController<H> {
    config: SwipeConfig,
    viewport_width: f64,
    phase: Phase,
    motion: Transition,
    handler: H,
}

impl<H: DismissHandler> SwipeGestureController<H> {
    /// Creates an idle controller with the default [`SwipeConfig`].
    pub fn new(viewport_width: f64, handler: H) -> Self {
        Self::with_config(SwipeConfig::default(), viewport_width, handler)
    }

    /// Creates an idle controller; `config` is passed through
    /// [`SwipeConfig::sanitized`].
    pub fn with_config(config: SwipeConfig, viewport_width: f64, handler: H) -> Self {
        Self {
            config: config.sanitized(),
            viewport_width: sanitize_width(viewport_width),
            phase: Phase::Idle,
            motion: Transition::at_rest(0.0),
            handler,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Current viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Updates the viewport width, e.g. after rotation.
    ///
    /// Affects later commit decisions; an in-flight animation keeps its target.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = sanitize_width(width);
        if !self.config.can_commit(self.viewport_width) {
            tracing::debug!(
                viewport_width = self.viewport_width,
                max_dismiss_width = self.config.max_dismiss_width,
                "threshold beyond drag clamp; swipes cannot commit"
            );
        }
    }

    /// Offset a release must pass to commit.
    pub fn threshold(&self) -> f64 {
        self.config.threshold(self.viewport_width)
    }

    /// Starts following a gesture.
    ///
    /// During a spring-back the drag picks up from the current animated
    /// offset. Returns `false` when ignored (committed, or already dragging).
    pub fn gesture_start(&mut self, now_ms: u64) -> bool {
        match self.phase {
            Phase::Committed | Phase::Dragging { .. } => false,
            Phase::Idle | Phase::Settling => {
                let origin = self.motion.value_at(now_ms);
                self.phase = Phase::Dragging {
                    origin,
                    offset_x: origin,
                };
                tracing::trace!(now_ms, origin, "swipe started");
                true
            }
        }
    }

    /// Applies a gesture sample. Ignored unless dragging.
    pub fn gesture_update(&mut self, now_ms: u64, sample: GestureSample) {
        let max = self.config.max_dismiss_width;
        if let Phase::Dragging { origin, offset_x } = &mut self.phase {
            let next = *origin + sample.translation_x;
            if next.is_nan() {
                return;
            }
            *offset_x = next.clamp(-max, 0.0);
            tracing::trace!(now_ms, offset_x = *offset_x, "swipe moved");
        }
    }

    /// Releases the gesture and decides between commit and spring-back.
    ///
    /// A commit fires the dismiss handler immediately, before the slide-off
    /// animation completes.
    pub fn gesture_end(&mut self, now_ms: u64) -> SwipeOutcome {
        let Phase::Dragging { offset_x, .. } = self.phase else {
            return SwipeOutcome::Ignored;
        };
        let threshold = self.threshold();
        if offset_x < threshold {
            self.animate(now_ms, offset_x, -self.viewport_width);
            self.phase = Phase::Committed;
            tracing::debug!(offset_x, threshold, "swipe committed");
            self.handler.dismiss();
            SwipeOutcome::Committed
        } else {
            self.spring_back(now_ms, offset_x);
            tracing::debug!(offset_x, threshold, "swipe cancelled");
            SwipeOutcome::SpringBack
        }
    }

    /// Abandons a gesture the platform cancelled; never commits.
    pub fn gesture_cancel(&mut self, now_ms: u64) {
        if let Phase::Dragging { offset_x, .. } = self.phase {
            self.spring_back(now_ms, offset_x);
            tracing::debug!(offset_x, "swipe aborted");
        }
    }

    /// Rendered horizontal offset at `now_ms`.
    pub fn offset(&self, now_ms: u64) -> f64 {
        match self.phase {
            Phase::Dragging { offset_x, .. } => offset_x,
            Phase::Idle | Phase::Settling | Phase::Committed => self.motion.value_at(now_ms),
        }
    }

    /// State at `now_ms`; a finished spring-back reads as [`SwipeState::Idle`].
    pub fn state(&self, now_ms: u64) -> SwipeState {
        match self.phase {
            Phase::Idle => SwipeState::Idle,
            Phase::Dragging { offset_x, .. } => SwipeState::Dragging { offset_x },
            Phase::Settling if self.motion.is_finished(now_ms) => SwipeState::Idle,
            Phase::Settling => SwipeState::Settling {
                target: self.motion.to,
            },
            Phase::Committed => SwipeState::Committed,
        }
    }

    /// Returns `true` once the swipe has committed.
    pub fn is_committed(&self) -> bool {
        matches!(self.phase, Phase::Committed)
    }

    /// Returns `true` while the offset is changing without a finger down.
    pub fn is_animating(&self, now_ms: u64) -> bool {
        matches!(self.phase, Phase::Settling | Phase::Committed) && !self.motion.is_finished(now_ms)
    }

    /// The dismiss handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    fn spring_back(&mut self, now_ms: u64, offset_x: f64) {
        if offset_x == 0.0 {
            self.motion = Transition::at_rest(0.0);
            self.phase = Phase::Idle;
        } else {
            self.animate(now_ms, offset_x, 0.0);
            self.phase = Phase::Settling;
        }
    }

    fn animate(&mut self, now_ms: u64, from: f64, to: f64) {
        self.motion = Transition::new(
            from,
            to,
            now_ms,
            self.config.settle_duration_ms,
            self.config.settle_easing,
        );
    }
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}
