// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Progress: eased progress values for frame-driven animation.
//!
//! This crate provides the timing layer the other Glide crates build on:
//!
//! - [`easing`]: Easing curves ([`Easing`], [`CubicBezier`]) that remap a linear time fraction
//! - [`Transition`]: A plain, timed move between two scalars
//! - [`ProgressDriver`]: A normalized `[0, 1]` value that only its owner can retarget
//! - [`SnapshotWriter`] / [`SnapshotReader`]: The single-writer / multi-reader cell
//!   that lets a frame loop read animation state written by event handlers
//!
//! ## Time
//!
//! Nothing here reads a clock. Every time-dependent operation takes a frame
//! timestamp in milliseconds supplied by the host. Two readers evaluating the
//! same frame pass the same timestamp and see the same value, and tests can
//! step time deterministically.
//!
//! ## Cancellation
//!
//! There is no stop operation. Starting a new transition with
//! [`ProgressDriver::set_target`] supersedes the active one, continuing from the
//! value it had at that instant.
//!
//! ## `no_std` Support
//!
//! [`easing`] and [`Transition`] need only `core`. The snapshot cell and the
//! driver share state across threads and require the `std` feature, which is
//! on by default.
//!
//! ```rust
//! use glide_progress::{CubicBezier, Easing, ProgressDriver};
//!
//! let mut progress = ProgressDriver::new(0.0);
//! let frame_reader = progress.reader();
//!
//! progress.set_target(0, 1.0, 300, Easing::Linear);
//!
//! // A frame loop samples the reader and applies its own curve on top.
//! let color_curve = Easing::from(CubicBezier::EXPO_OUT);
//! let eased = color_curve.ease(frame_reader.value(150));
//! assert!(eased > 0.5);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod easing;

#[cfg(feature = "std")]
mod cell;
#[cfg(feature = "std")]
mod driver;
mod transition;

#[cfg(feature = "std")]
pub use cell::{SnapshotReader, SnapshotWriter};
#[cfg(feature = "std")]
pub use driver::{ProgressDriver, ProgressReader, ProgressSnapshot};
pub use easing::{CubicBezier, Easing};
pub use transition::Transition;
