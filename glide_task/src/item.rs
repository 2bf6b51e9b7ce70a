// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single row of the task list.
//!
//! ## Usage
//!
//! 1) Create one channel per list with [`task_channel`] and hand the sender to
//!    every [`TaskItem`].
//! 2) Drive each row from the list's state: [`TaskItem::set_done`] whenever the
//!    stored `done` flag changes.
//! 3) Forward input: [`TaskItem::press_checkbox`] and the gesture methods.
//! 4) Drain [`TaskEvent`]s on the thread that owns the list and apply them
//!    to storage; the rows never change their own `done` flag.

use core::fmt::Debug;

use glide_checkbox::{CheckboxAnimationCoordinator, CheckboxGeometry, CheckboxVisualState};
use glide_color::Color;
use glide_stroke::PathMeasure;
use glide_swipe::{DismissSender, GestureSample, SwipeGestureController, SwipeOutcome};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{TaskAppearance, TaskError, TaskLabel, TaskLabelFrame};

/// Requests a row sends to the owner of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskEvent<K> {
    /// The checkbox was pressed; flip `done` for this key.
    Toggle(K),
    /// The row was swiped away; delete this key.
    Remove(K),
}

/// Creates the channel rows send [`TaskEvent`]s on.
pub fn task_channel<K>() -> (UnboundedSender<TaskEvent<K>>, UnboundedReceiver<TaskEvent<K>>) {
    unbounded_channel()
}

/// Everything needed to draw a row at one frame.
#[derive(Copy, Clone, Debug)]
pub struct TaskItemFrame {
    /// Horizontal offset of the row content.
    pub offset_x: f64,
    /// Color of the surface revealed behind the row.
    pub back_view: Color,
    /// Checkbox layers.
    pub checkbox: CheckboxVisualState,
    /// Label color and strikethrough.
    pub label: TaskLabelFrame,
}

/// One task row: an animated checkbox and label inside a swipeable container.
#[derive(Debug)]
pub struct TaskItem<K> {
    key: K,
    events: UnboundedSender<TaskEvent<K>>,
    checkbox: CheckboxAnimationCoordinator,
    label: TaskLabel,
    swipe: SwipeGestureController<DismissSender<TaskEvent<K>>>,
    back_view: Color,
}

impl<K: Clone + Debug> TaskItem<K> {
    /// Creates a row at rest in the `done` state.
    pub fn new(
        key: K,
        done: bool,
        appearance: TaskAppearance,
        viewport_width: f64,
        events: UnboundedSender<TaskEvent<K>>,
    ) -> Result<Self, TaskError> {
        let checkbox =
            CheckboxAnimationCoordinator::new(CheckboxGeometry::new()?, appearance.checkbox, done);
        let remove = DismissSender::new(events.clone(), TaskEvent::Remove(key.clone()));
        Ok(Self {
            key,
            events,
            checkbox,
            label: TaskLabel::new(appearance.label, done),
            swipe: SwipeGestureController::new(viewport_width, remove),
            back_view: appearance.back_view,
        })
    }

    /// Key of this row.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current `done` input.
    pub fn is_done(&self) -> bool {
        self.checkbox.is_checked()
    }

    /// Follows the stored `done` flag; animates only when it changed.
    pub fn set_done(&mut self, now_ms: u64, done: bool) -> bool {
        self.label.set_done(now_ms, done);
        self.checkbox.sync_checked(now_ms, done)
    }

    /// Asks the owner to flip `done`.
    pub fn press_checkbox(&self) {
        if self.events.send(TaskEvent::Toggle(self.key.clone())).is_err() {
            tracing::warn!(key = ?self.key, "task event receiver dropped");
        }
    }

    /// Applies newly resolved colors, e.g. after a mode switch.
    pub fn set_appearance(&mut self, appearance: TaskAppearance) {
        self.checkbox.set_colors(appearance.checkbox);
        self.label.set_colors(appearance.label);
        self.back_view = appearance.back_view;
    }

    /// Measures the checkmark after layout.
    pub fn on_layout(&mut self, measure: &impl PathMeasure) {
        self.checkbox.on_layout(measure);
    }

    /// Forgets layout-dependent measurements; pair with a new viewport width
    /// after rotation.
    pub fn relayout(&mut self, viewport_width: f64) {
        self.checkbox.invalidate_layout();
        self.swipe.set_viewport_width(viewport_width);
    }

    /// See [`SwipeGestureController::gesture_start`].
    pub fn gesture_start(&mut self, now_ms: u64) -> bool {
        self.swipe.gesture_start(now_ms)
    }

    /// See [`SwipeGestureController::gesture_update`].
    pub fn gesture_update(&mut self, now_ms: u64, sample: GestureSample) {
        self.swipe.gesture_update(now_ms, sample);
    }

    /// See [`SwipeGestureController::gesture_end`]. A commit sends
    /// [`TaskEvent::Remove`].
    pub fn gesture_end(&mut self, now_ms: u64) -> SwipeOutcome {
        self.swipe.gesture_end(now_ms)
    }

    /// See [`SwipeGestureController::gesture_cancel`].
    pub fn gesture_cancel(&mut self, now_ms: u64) {
        self.swipe.gesture_cancel(now_ms);
    }

    /// Returns `true` once the row has been swiped away.
    pub fn is_removed(&self) -> bool {
        self.swipe.is_committed()
    }

    /// The checkbox coordinator.
    pub fn checkbox(&self) -> &CheckboxAnimationCoordinator {
        &self.checkbox
    }

    /// The label.
    pub fn label(&self) -> &TaskLabel {
        &self.label
    }

    /// The swipe controller.
    pub fn swipe(&self) -> &SwipeGestureController<DismissSender<TaskEvent<K>>> {
        &self.swipe
    }

    /// Row layers at `now_ms`.
    pub fn frame(&self, now_ms: u64) -> TaskItemFrame {
        TaskItemFrame {
            offset_x: self.swipe.offset(now_ms),
            back_view: self.back_view,
            checkbox: self.checkbox.frame(now_ms),
            label: self.label.frame(now_ms),
        }
    }
}
