// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Checkbox: an animated checkbox driven by a single progress value.
//!
//! One toggle event starts one transition on one [`ProgressDriver`]. Every
//! frame, that value fans out to three layers:
//!
//! 1. The outline box: stroke blends from the outline color to the highlight
//!    color, fill blends from transparent to the highlight color, both through a
//!    decelerate-dominant curve.
//! 2. A checkmark clipped to the outline interior ([`MaskedLayer`]).
//! 3. The same checkmark unclipped, underneath ([`GhostLayer`]).
//!
//! The checkmark copies are revealed with an accelerate-then-decelerate curve
//! and are two views of one [`CheckmarkComposite`].
//!
//! ```rust
//! use glide_checkbox::{
//!     CheckboxAnimationCoordinator, CheckboxColorTokens, CheckboxError, CheckboxGeometry,
//! };
//! use glide_color::{Color, PaletteBuilder};
//! use glide_stroke::KurboMeasure;
//!
//! let palette = PaletteBuilder::new()
//!     .set("muted.300", Color::from_rgba8(212, 212, 212, 255))
//!     .set("blue.500", Color::from_rgba8(59, 130, 246, 255))
//!     .set("white", Color::WHITE)
//!     .build();
//! let colors = CheckboxColorTokens {
//!     outline: "muted.300",
//!     highlight: "blue.500",
//!     checkmark: "white",
//! }
//! .resolve(&palette)?;
//!
//! let mut checkbox = CheckboxAnimationCoordinator::new(CheckboxGeometry::new()?, colors, false);
//! checkbox.on_layout(&KurboMeasure::default());
//!
//! checkbox.set_checked(0, true);
//! let done = checkbox.frame(300);
//! assert!(done.checkmark.is_drawn());
//! assert!(done.checkmark.reveal().dash_offset < 0.1);
//! # Ok::<(), CheckboxError>(())
//! ```
//!
//! [`ProgressDriver`]: glide_progress::ProgressDriver

mod coordinator;
mod geometry;
mod layers;

pub use coordinator::{CheckboxAnimationCoordinator, CheckboxFrameSource, CheckboxTimings};
pub use geometry::{CHECKMARK_PATH, CheckboxGeometry, OUTLINE_PATH, VIEW_MARGIN};
pub use layers::{
    CheckboxColorTokens, CheckboxColors, CheckboxStyle, CheckboxVisualState, CheckmarkComposite,
    GhostLayer, MaskedLayer, OutlineLayer,
};

/// Errors raised while setting up a checkbox.
#[derive(Debug, thiserror::Error)]
pub enum CheckboxError {
    /// A color token could not be resolved.
    #[error(transparent)]
    Theme(#[from] glide_color::ThemeError),
    /// Artwork path data failed to parse.
    #[error("invalid {shape} path data")]
    Path {
        /// Which shape failed.
        shape: &'static str,
        /// Parser error.
        #[source]
        source: kurbo::SvgParseError,
    },
}
