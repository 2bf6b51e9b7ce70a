// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress driver: a normalized `[0, 1]` value with eased, timed transitions.
//!
//! ## Usage
//!
//! 1) The component that starts transitions owns the [`ProgressDriver`].
//! 2) It calls [`ProgressDriver::set_target`] on discrete events (a toggle, a release).
//! 3) Frame evaluation reads through [`ProgressReader`] handles, passing the
//!    frame timestamp; every reader of the same frame sees the same value.
//!
//! ## Minimal example
//!
//! ```
//! use glide_progress::{Easing, ProgressDriver};
//!
//! let mut progress = ProgressDriver::new(0.0);
//! let reader = progress.reader();
//!
//! progress.set_target(1_000, 1.0, 300, Easing::Linear);
//! assert_eq!(reader.value(1_150), 0.5);
//!
//! // Superseding mid-flight starts from the current value.
//! progress.set_target(1_150, 0.0, 100, Easing::Linear);
//! assert_eq!(reader.value(1_150), 0.5);
//! assert_eq!(reader.value(1_250), 0.0);
//! ```

use crate::{Easing, SnapshotReader, SnapshotWriter, Transition};

#[derive(Clone, Debug)]
struct DriverState<I> {
    transition: Transition,
    generation: u64,
    inputs: I,
}

/// A consistent view of a progress driver at one frame timestamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProgressSnapshot {
    /// Eased value at the sampled timestamp, in `[0, 1]`.
    pub value: f64,
    /// Value the active transition is heading to.
    pub target: f64,
    /// `true` once the active transition has completed.
    pub settled: bool,
    /// Number of transitions started on this driver so far.
    pub generation: u64,
}

/// Owner of a progress value. There is exactly one per animated quantity.
///
/// `I` is caller state stored in the same cell as the transition, such as
/// the toggle a transition is animating toward. [`set_target_with`] changes
/// both in one write, so a reader never pairs a new transition with stale
/// inputs.
///
/// [`set_target_with`]: ProgressDriver::set_target_with
#[derive(Debug)]
pub struct ProgressDriver<I = ()> {
    cell: SnapshotWriter<DriverState<I>>,
}

impl ProgressDriver {
    /// Creates a driver resting at `initial` (clamped to `[0, 1]`).
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self::with_inputs(initial, ())
    }
}

impl<I: Clone> ProgressDriver<I> {
    /// Creates a driver resting at `initial` and carrying `inputs`.
    #[must_use]
    pub fn with_inputs(initial: f64, inputs: I) -> Self {
        Self {
            cell: SnapshotWriter::new(DriverState {
                transition: Transition::at_rest(clamp_unit(initial)),
                generation: 0,
                inputs,
            }),
        }
    }

    /// Starts a transition from the current value to `target`.
    ///
    /// Any active transition is superseded; the new one starts from the value
    /// the old one had at `now_ms`. A target equal to the current value still
    /// restarts the timer.
    pub fn set_target(&mut self, now_ms: u64, target: f64, duration_ms: u64, easing: Easing) {
        self.set_target_with(now_ms, target, duration_ms, easing, |_| {});
    }

    /// Like [`set_target`](Self::set_target), applying `edit` to the inputs
    /// in the same write.
    pub fn set_target_with(
        &mut self,
        now_ms: u64,
        target: f64,
        duration_ms: u64,
        easing: Easing,
        edit: impl FnOnce(&mut I),
    ) {
        let target = clamp_unit(target);
        self.cell.update(|state| {
            state.transition = state
                .transition
                .retarget(now_ms, target, duration_ms, easing);
            state.generation += 1;
            edit(&mut state.inputs);
            tracing::trace!(
                from = state.transition.from,
                target,
                duration_ms,
                generation = state.generation,
                "progress retargeted"
            );
        });
    }

    /// Changes the inputs without touching the transition.
    pub fn update_inputs(&mut self, edit: impl FnOnce(&mut I)) {
        self.cell.update(|state| edit(&mut state.inputs));
    }

    /// Current inputs.
    #[must_use]
    pub fn inputs(&self) -> I {
        self.cell.snapshot().inputs
    }

    /// Returns a reader handle for frame evaluation.
    #[must_use]
    pub fn reader(&self) -> ProgressReader<I> {
        ProgressReader {
            cell: self.cell.reader(),
        }
    }

    /// Eased value at `now_ms`.
    #[must_use]
    pub fn value(&self, now_ms: u64) -> f64 {
        self.snapshot(now_ms).value
    }

    /// Full snapshot at `now_ms`.
    #[must_use]
    pub fn snapshot(&self, now_ms: u64) -> ProgressSnapshot {
        snapshot_of(&self.cell.snapshot(), now_ms)
    }

    /// Snapshot at `now_ms` together with the inputs it was written with.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> (ProgressSnapshot, I) {
        sample_of(self.cell.snapshot(), now_ms)
    }

    /// The active transition.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.cell.snapshot().transition
    }
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Read-only handle to a [`ProgressDriver`], cheap to clone and `Send + Sync`.
#[derive(Debug)]
pub struct ProgressReader<I = ()> {
    cell: SnapshotReader<DriverState<I>>,
}

impl<I> Clone for ProgressReader<I> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<I: Clone> ProgressReader<I> {
    /// Eased value at `now_ms`.
    #[must_use]
    pub fn value(&self, now_ms: u64) -> f64 {
        self.snapshot(now_ms).value
    }

    /// Full snapshot at `now_ms`.
    #[must_use]
    pub fn snapshot(&self, now_ms: u64) -> ProgressSnapshot {
        snapshot_of(&self.cell.snapshot(), now_ms)
    }

    /// Snapshot at `now_ms` together with the inputs it was written with.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> (ProgressSnapshot, I) {
        sample_of(self.cell.snapshot(), now_ms)
    }
}

fn snapshot_of<I>(state: &DriverState<I>, now_ms: u64) -> ProgressSnapshot {
    ProgressSnapshot {
        value: clamp_unit(state.transition.value_at(now_ms)),
        target: state.transition.to,
        settled: state.transition.is_finished(now_ms),
        generation: state.generation,
    }
}

fn sample_of<I>(state: DriverState<I>, now_ms: u64) -> (ProgressSnapshot, I) {
    let snapshot = snapshot_of(&state, now_ms);
    (snapshot, state.inputs)
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
