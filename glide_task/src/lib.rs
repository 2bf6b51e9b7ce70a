// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Task: task list rows built from the Glide animation primitives.
//!
//! A [`TaskItem`] is a controlled component. The list owner stores each task's
//! `done` flag, pushes it in with [`TaskItem::set_done`], and reacts to the
//! [`TaskEvent`]s rows send when the checkbox is pressed or the row is swiped
//! away.
//!
//! Each row's label fades to a muted color and gains a strikethrough as the
//! task is marked done ([`TaskLabel`]).
//!
//! Colors come from a [`TaskTheme`] of per-mode tokens resolved against a
//! palette; [`default_palette`] defines them all. [`ScreenBackground`] fades
//! the screen behind the list when the color mode changes.
//!
//! ```rust
//! use glide_color::ColorMode;
//! use glide_stroke::KurboMeasure;
//! use glide_swipe::GestureSample;
//! use glide_task::{TaskError, TaskEvent, TaskItem, TaskTheme, default_palette, task_channel};
//!
//! let appearance = TaskTheme::default().appearance(ColorMode::Light, &default_palette())?;
//! let (events, mut rx) = task_channel();
//! let mut row = TaskItem::new(7_u32, false, appearance, 400.0, events)?;
//! row.on_layout(&KurboMeasure::default());
//!
//! row.press_checkbox();
//! assert_eq!(rx.try_recv(), Ok(TaskEvent::Toggle(7)));
//! assert!(!row.is_done());
//! row.set_done(0, true);
//!
//! row.gesture_start(500);
//! row.gesture_update(516, GestureSample::new(-120.0));
//! row.gesture_end(532);
//! assert_eq!(rx.try_recv(), Ok(TaskEvent::Remove(7)));
//! # Ok::<(), TaskError>(())
//! ```

mod background;
mod item;
mod label;
mod theme;

pub use background::ScreenBackground;
pub use item::{TaskEvent, TaskItem, TaskItemFrame, task_channel};
pub use label::{LABEL_TRANSITION_MS, LabelColors, TaskLabel, TaskLabelFrame};
pub use theme::{TaskAppearance, TaskTheme, default_palette};

/// Errors raised while setting up task rows and their theme.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// A theme token is not defined by the palette.
    #[error(transparent)]
    Theme(#[from] glide_color::ThemeError),
    /// Checkbox setup failed.
    #[error("checkbox setup failed")]
    Checkbox(#[from] glide_checkbox::CheckboxError),
}
