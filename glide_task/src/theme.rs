// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color tokens of the task list and a palette defining them.

use glide_checkbox::{CheckboxColorTokens, CheckboxColors};
use glide_color::{Color, ColorMode, ColorResolver, ModeValue, Palette, PaletteBuilder};

use crate::{LabelColors, TaskError};

/// Per-mode design tokens used by task rows and the screen behind them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TaskTheme {
    /// Checked outline, fill and ghost checkmark.
    pub highlight: ModeValue<&'static str>,
    /// Unchecked outline.
    pub box_outline: ModeValue<&'static str>,
    /// Clipped checkmark drawn over the fill.
    pub checkmark: ModeValue<&'static str>,
    /// Screen background.
    pub background: ModeValue<&'static str>,
    /// Surface revealed behind a row while it is swiped.
    pub back_view: ModeValue<&'static str>,
    /// Label text of an open task.
    pub label: ModeValue<&'static str>,
    /// Label text of a finished task.
    pub label_done: ModeValue<&'static str>,
}

impl Default for TaskTheme {
    fn default() -> Self {
        Self {
            highlight: ModeValue::new("blue.500", "blue.400"),
            box_outline: ModeValue::new("muted.300", "muted.500"),
            checkmark: ModeValue::uniform("white"),
            background: ModeValue::new("warmGray.50", "primary.900"),
            back_view: ModeValue::uniform("red.500"),
            label: ModeValue::new("darkText", "lightText"),
            label_done: ModeValue::new("muted.400", "muted.600"),
        }
    }
}

impl TaskTheme {
    /// Checkbox tokens selected for `mode`.
    #[must_use]
    pub fn checkbox_tokens(&self, mode: ColorMode) -> CheckboxColorTokens<'static> {
        CheckboxColorTokens {
            outline: *self.box_outline.get(mode),
            highlight: *self.highlight.get(mode),
            checkmark: *self.checkmark.get(mode),
        }
    }

    /// Resolves everything a task row draws in `mode`.
    pub fn appearance(
        &self,
        mode: ColorMode,
        resolver: &(impl ColorResolver + ?Sized),
    ) -> Result<TaskAppearance, TaskError> {
        Ok(TaskAppearance {
            checkbox: self.checkbox_tokens(mode).resolve(resolver)?,
            back_view: self.back_view.resolve(mode, resolver)?,
            label: LabelColors {
                active: self.label.resolve(mode, resolver)?,
                done: self.label_done.resolve(mode, resolver)?,
            },
        })
    }

    /// Resolves the screen background for `mode`.
    pub fn background(
        &self,
        mode: ColorMode,
        resolver: &(impl ColorResolver + ?Sized),
    ) -> Result<Color, TaskError> {
        Ok(self.background.resolve(mode, resolver)?)
    }

    /// Checks that every token resolves in both modes.
    pub fn validate(&self, resolver: &(impl ColorResolver + ?Sized)) -> Result<(), TaskError> {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            self.appearance(mode, resolver)?;
            self.background(mode, resolver)?;
        }
        Ok(())
    }
}

/// Resolved colors of a task row.
#[derive(Copy, Clone, Debug)]
pub struct TaskAppearance {
    /// Checkbox colors.
    pub checkbox: CheckboxColors,
    /// Swipe back view.
    pub back_view: Color,
    /// Label text colors.
    pub label: LabelColors,
}

/// A palette defining every token of [`TaskTheme::default`], plus a few
/// neighbouring shades.
#[must_use]
pub fn default_palette() -> Palette {
    PaletteBuilder::new()
        .set("white", Color::WHITE)
        .set("black", Color::BLACK)
        .set("darkText", Color::BLACK)
        .set("lightText", Color::WHITE)
        .set("blue.400", Color::from_rgb8(0x60, 0xa5, 0xfa))
        .set("blue.500", Color::from_rgb8(0x3b, 0x82, 0xf6))
        .set("muted.300", Color::from_rgb8(0xd4, 0xd4, 0xd4))
        .set("muted.400", Color::from_rgb8(0xa3, 0xa3, 0xa3))
        .set("muted.500", Color::from_rgb8(0x73, 0x73, 0x73))
        .set("muted.600", Color::from_rgb8(0x52, 0x52, 0x52))
        .set("warmGray.50", Color::from_rgb8(0xfa, 0xfa, 0xf9))
        .set("primary.900", Color::from_rgb8(0x16, 0x4e, 0x63))
        .set("red.500", Color::from_rgb8(0xef, 0x44, 0x44))
        .build()
}

#[cfg(test)]
mod tests {
    use glide_color::ThemeError;

    use super::*;

    #[test]
    fn default_theme_resolves_in_both_modes() {
        let palette = default_palette();
        TaskTheme::default()
            .validate(&palette)
            .expect("default palette covers the default theme");
    }

    #[test]
    fn modes_pick_different_highlights() {
        let palette = default_palette();
        let theme = TaskTheme::default();
        let light = theme.appearance(ColorMode::Light, &palette).unwrap();
        let dark = theme.appearance(ColorMode::Dark, &palette).unwrap();
        assert_ne!(light.checkbox.highlight.components, dark.checkbox.highlight.components);
        assert_eq!(light.back_view.components, dark.back_view.components);
    }

    #[test]
    fn label_colors_follow_mode() {
        let palette = default_palette();
        let theme = TaskTheme::default();
        let light = theme.appearance(ColorMode::Light, &palette).unwrap().label;
        let dark = theme.appearance(ColorMode::Dark, &palette).unwrap().label;
        assert_eq!(light.active.components, Color::BLACK.components);
        assert_eq!(dark.active.components, Color::WHITE.components);
        assert_eq!(
            dark.done.components,
            Color::from_rgb8(0x52, 0x52, 0x52).components
        );
    }

    #[test]
    fn missing_token_is_reported() {
        let theme = TaskTheme {
            back_view: ModeValue::uniform("rose.500"),
            ..TaskTheme::default()
        };
        let err = theme.validate(&default_palette()).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Theme(ThemeError::UnknownToken(token)) if token == "rose.500"
        ));
    }
}
