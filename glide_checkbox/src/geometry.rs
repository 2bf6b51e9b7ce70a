// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox artwork: outline box and checkmark shapes.

use kurbo::{BezPath, Rect};

use crate::CheckboxError;

/// Rounded-square outline, 64 units across, in SVG path syntax.
pub const OUTLINE_PATH: &str = "M24 0.5H40C48.5809 0.5 54.4147 2.18067 58.117 5.88299C61.8193 9.58532 63.5 15.4191 63.5 24V40C63.5 48.5809 61.8193 54.4147 58.117 58.117C54.4147 61.8193 48.5809 63.5 40 63.5H24C15.4191 63.5 9.58532 61.8193 5.88299 58.117C2.18067 54.4147 0.5 48.5809 0.5 40V24C0.5 15.4191 2.18067 9.58532 5.88299 5.88299C9.58532 2.18067 15.4191 0.5 24 0.5Z";

/// Checkmark stroke in SVG path syntax. Its tail deliberately overshoots the
/// outline's top-right corner.
pub const CHECKMARK_PATH: &str =
    "M15 31.1977C23.1081 36.4884 29.5946 43 29.5946 43C29.5946 43 37.5 25.5 69 1.5";

/// Space around the 64-unit box so that wide strokes are not cut off.
pub const VIEW_MARGIN: f64 = 10.0;

const BOX_SIZE: f64 = 64.0;

/// Shapes and stroke metrics of the checkbox, in artwork units.
///
/// The outline doubles as the clip shape of the masked checkmark layer.
#[derive(Clone, Debug)]
pub struct CheckboxGeometry {
    /// Outline box; stroked, filled, and used as the checkmark clip.
    pub outline: BezPath,
    /// Checkmark stroke path.
    pub checkmark: BezPath,
    /// Visible region including [`VIEW_MARGIN`] on every side.
    pub view_box: Rect,
    /// Stroke width of the outline.
    pub outline_width: f64,
    /// Stroke width of the checkmark.
    pub checkmark_width: f64,
}

impl CheckboxGeometry {
    /// Parses the built-in artwork.
    pub fn new() -> Result<Self, CheckboxError> {
        Self::from_svg(OUTLINE_PATH, CHECKMARK_PATH)
    }

    /// Parses custom outline and checkmark path data, keeping the default
    /// stroke widths and view box.
    pub fn from_svg(outline: &str, checkmark: &str) -> Result<Self, CheckboxError> {
        let outline = BezPath::from_svg(outline).map_err(|source| CheckboxError::Path {
            shape: "outline",
            source,
        })?;
        let checkmark = BezPath::from_svg(checkmark).map_err(|source| CheckboxError::Path {
            shape: "checkmark",
            source,
        })?;
        Ok(Self {
            outline,
            checkmark,
            view_box: Rect::new(
                -VIEW_MARGIN,
                -VIEW_MARGIN,
                BOX_SIZE + VIEW_MARGIN,
                BOX_SIZE + VIEW_MARGIN,
            ),
            outline_width: 7.0,
            checkmark_width: 10.0,
        })
    }
}
