// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glide_color::{Color, ColorMode, ColorResolver, ColorTransition};

use crate::{TaskError, TaskTheme};

/// Screen background that fades when the color mode changes.
#[derive(Debug)]
pub struct ScreenBackground {
    theme: TaskTheme,
    mode: ColorMode,
    color: ColorTransition,
}

impl ScreenBackground {
    /// Resolves the background for `mode` and rests on it.
    pub fn new(
        theme: TaskTheme,
        mode: ColorMode,
        resolver: &(impl ColorResolver + ?Sized),
    ) -> Result<Self, TaskError> {
        let color = ColorTransition::new(theme.background(mode, resolver)?);
        Ok(Self { theme, mode, color })
    }

    /// Current color mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Switches to `mode`, fading from the color shown at `now_ms`.
    pub fn set_mode(
        &mut self,
        now_ms: u64,
        mode: ColorMode,
        resolver: &(impl ColorResolver + ?Sized),
    ) -> Result<(), TaskError> {
        let target = self.theme.background(mode, resolver)?;
        self.mode = mode;
        self.color.set_color(now_ms, target);
        Ok(())
    }

    /// Color to paint at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> Color {
        self.color.sample(now_ms)
    }

    /// Returns `true` once the latest fade has finished.
    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.color.is_settled(now_ms)
    }
}
