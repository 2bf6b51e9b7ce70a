// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Swipe: swipe-left-to-dismiss for list rows.
//!
//! - [`SwipeGestureController`]: Clamps the drag, decides commit or spring-back
//!   on release, and animates the row to its resting place.
//! - [`SwipeConfig`]: Drag clamp, threshold fraction, settle timing.
//! - [`DismissHandler`] / [`dismiss_channel`]: How the commit decision reaches
//!   the owner of application state.
//!
//! The dismiss handler fires on the commit decision, not after the slide-off
//! animation, so removal is optimistic.
//!
//! ```rust
//! use glide_swipe::{GestureSample, SwipeGestureController, SwipeOutcome, SwipeState};
//!
//! let mut dismissed = 0;
//! let mut swipe = SwipeGestureController::new(400.0, || dismissed += 1);
//!
//! swipe.gesture_start(0);
//! for (t, dx) in [(16, -30.0), (32, -60.0), (48, -100.0)] {
//!     swipe.gesture_update(t, GestureSample::new(dx));
//! }
//! assert_eq!(swipe.gesture_end(64), SwipeOutcome::Committed);
//! assert_eq!(swipe.state(64), SwipeState::Committed);
//! assert_eq!(swipe.offset(364), -400.0);
//! drop(swipe);
//! assert_eq!(dismissed, 1);
//! ```

mod config;
mod controller;
mod handoff;

pub use config::SwipeConfig;
pub use controller::{GestureSample, SwipeGestureController, SwipeOutcome, SwipeState};
pub use handoff::{DismissHandler, DismissSender, dismiss_channel};
