// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame render layers of the checkbox.
//!
//! The checkmark is drawn twice: once clipped to the outline interior
//! ([`MaskedLayer`]) and once unclipped beneath it ([`GhostLayer`]) so that the
//! stroke ends overshooting the box remain visible. Both are views of a single
//! [`CheckmarkComposite`], which holds exactly one reveal and one opacity, so
//! the two copies cannot drift apart.

use glide_color::{Color, ColorInterpolator, ColorResolver, ThemeError};
use glide_progress::{CubicBezier, Easing};
use glide_stroke::{PathTracer, StrokeReveal};

/// Concrete colors of a checkbox.
#[derive(Copy, Clone, Debug)]
pub struct CheckboxColors {
    /// Outline stroke color while unchecked.
    pub outline: Color,
    /// Outline stroke and fill when checked; also the ghost checkmark color.
    pub highlight: Color,
    /// Color of the clipped checkmark drawn over the fill.
    pub checkmark: Color,
}

/// Design tokens naming the colors of a checkbox.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckboxColorTokens<'a> {
    /// Token for [`CheckboxColors::outline`].
    pub outline: &'a str,
    /// Token for [`CheckboxColors::highlight`].
    pub highlight: &'a str,
    /// Token for [`CheckboxColors::checkmark`].
    pub checkmark: &'a str,
}

impl CheckboxColorTokens<'_> {
    /// Resolves every token; the first unknown token is an error.
    pub fn resolve(
        &self,
        resolver: &(impl ColorResolver + ?Sized),
    ) -> Result<CheckboxColors, ThemeError> {
        Ok(CheckboxColors {
            outline: resolver.resolve_color(self.outline)?,
            highlight: resolver.resolve_color(self.highlight)?,
            checkmark: resolver.resolve_color(self.checkmark)?,
        })
    }
}

/// The outline box at one frame.
#[derive(Copy, Clone, Debug)]
pub struct OutlineLayer {
    /// Stroke color, blending from outline to highlight.
    pub stroke: Color,
    /// Fill color, blending from transparent to highlight.
    pub fill: Color,
}

/// Unclipped checkmark copy.
#[derive(Copy, Clone, Debug)]
pub struct GhostLayer {
    /// Stroke color.
    pub color: Color,
    /// Stroke opacity.
    pub opacity: f32,
    /// Dash parameters.
    pub reveal: StrokeReveal,
}

/// Checkmark copy clipped to the outline interior.
#[derive(Copy, Clone, Debug)]
pub struct MaskedLayer {
    /// Stroke color.
    pub color: Color,
    /// Stroke opacity.
    pub opacity: f32,
    /// Dash parameters.
    pub reveal: StrokeReveal,
}

/// Both checkmark copies, sharing one reveal and one opacity.
#[derive(Copy, Clone, Debug)]
pub struct CheckmarkComposite {
    reveal: StrokeReveal,
    opacity: f32,
    ghost_color: Color,
    masked_color: Color,
}

impl CheckmarkComposite {
    /// Builds the composite. Opacity is `1` while `checked`, otherwise `0`.
    #[must_use]
    pub fn new(reveal: StrokeReveal, checked: bool, ghost_color: Color, masked_color: Color) -> Self {
        Self {
            reveal,
            opacity: if checked { 1.0 } else { 0.0 },
            ghost_color,
            masked_color,
        }
    }

    /// The shared dash parameters.
    #[must_use]
    pub fn reveal(&self) -> StrokeReveal {
        self.reveal
    }

    /// The shared opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns `true` if either copy would put pixels on screen.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.reveal.visible && self.opacity > 0.0
    }

    /// Unclipped copy.
    #[must_use]
    pub fn ghost(&self) -> GhostLayer {
        GhostLayer {
            color: self.ghost_color,
            opacity: self.opacity,
            reveal: self.reveal,
        }
    }

    /// Clipped copy.
    #[must_use]
    pub fn masked(&self) -> MaskedLayer {
        MaskedLayer {
            color: self.masked_color,
            opacity: self.opacity,
            reveal: self.reveal,
        }
    }
}

/// Everything a renderer needs for one checkbox frame.
///
/// This is derived data: a pure function of progress, the controlled
/// `checked` input, the colors, and the measured checkmark length.
#[derive(Copy, Clone, Debug)]
pub struct CheckboxVisualState {
    /// Linear progress the frame was derived from.
    pub progress: f64,
    /// Controlled input at the time of the frame.
    pub checked: bool,
    /// Outline box.
    pub outline: OutlineLayer,
    /// Checkmark copies.
    pub checkmark: CheckmarkComposite,
}

/// Colors and curves that turn a progress value into a [`CheckboxVisualState`].
#[derive(Copy, Clone, Debug)]
pub struct CheckboxStyle {
    colors: CheckboxColors,
    stroke: ColorInterpolator,
    fill: ColorInterpolator,
    tracer: PathTracer,
}

impl CheckboxStyle {
    /// Style for `colors` with the default color curve and stroke tracer.
    #[must_use]
    pub fn new(colors: CheckboxColors) -> Self {
        Self::with_tracer(colors, PathTracer::default())
    }

    /// Style for `colors` revealing the checkmark with `tracer`.
    #[must_use]
    pub fn with_tracer(colors: CheckboxColors, tracer: PathTracer) -> Self {
        let easing = Easing::CubicBezier(CubicBezier::EXPO_OUT);
        Self {
            colors,
            stroke: ColorInterpolator::new(colors.outline, colors.highlight, easing),
            fill: ColorInterpolator::new(Color::TRANSPARENT, colors.highlight, easing),
            tracer,
        }
    }

    /// Concrete colors.
    #[must_use]
    pub fn colors(&self) -> CheckboxColors {
        self.colors
    }

    /// Checkmark tracer.
    #[must_use]
    pub fn tracer(&self) -> PathTracer {
        self.tracer
    }

    /// Derives the visual state for one frame.
    #[must_use]
    pub fn compose(&self, progress: f64, checked: bool, checkmark_length: f64) -> CheckboxVisualState {
        CheckboxVisualState {
            progress,
            checked,
            outline: OutlineLayer {
                stroke: self.stroke.sample(progress),
                fill: self.fill.sample(progress),
            },
            checkmark: CheckmarkComposite::new(
                self.tracer.reveal(checkmark_length, progress),
                checked,
                self.colors.highlight,
                self.colors.checkmark,
            ),
        }
    }
}
