// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Design-token color resolution.
//!
//! This module provides [`Palette`], a table of named color tokens, and the
//! [`ColorResolver`] trait animation code consumes. Resolution is a pure,
//! synchronous lookup; nothing here animates.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use peniko::Color;

/// Errors raised while resolving theme tokens.
///
/// These are setup-time contract violations: callers propagate them instead
/// of substituting a fallback color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The token is not defined by the resolver.
    #[error("unknown color token `{0}`")]
    UnknownToken(String),
}

/// Turns a named design token into a concrete color.
pub trait ColorResolver {
    /// Resolves `token`, failing with [`ThemeError::UnknownToken`] when it is not defined.
    fn resolve_color(&self, token: &str) -> Result<Color, ThemeError>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Result<Color, ThemeError>,
{
    fn resolve_color(&self, token: &str) -> Result<Color, ThemeError> {
        self(token)
    }
}

/// An immutable table of color tokens.
///
/// Cloning is cheap; entries are shared behind an `Arc`. Tokens are kept
/// sorted for `O(log n)` lookup.
///
/// ```rust
/// use glide_color::{ColorResolver, PaletteBuilder, ThemeError};
/// use peniko::Color;
///
/// let palette = PaletteBuilder::new()
///     .set("blue.500", Color::from_rgba8(59, 130, 246, 255))
///     .set("white", Color::WHITE)
///     .build();
///
/// assert_eq!(palette.resolve_color("white")?.components, Color::WHITE.components);
/// assert!(palette.resolve_color("pink.300").is_err());
/// # Ok::<(), ThemeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Palette {
    entries: Arc<[(Box<str>, Color)]>,
}

impl Palette {
    /// Returns `true` if the palette defines no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of defined tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up `token`.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<Color> {
        self.entries
            .binary_search_by(|(k, _)| (**k).cmp(token))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Returns `true` if `token` is defined.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Iterates over the defined tokens in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| &**k)
    }
}

impl ColorResolver for Palette {
    fn resolve_color(&self, token: &str) -> Result<Color, ThemeError> {
        self.get(token)
            .ok_or_else(|| ThemeError::UnknownToken(token.into()))
    }
}

/// Builder for [`Palette`].
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    entries: Vec<(Box<str>, Color)>,
}

impl PaletteBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `token`, replacing any earlier definition.
    #[must_use]
    pub fn set(mut self, token: &str, color: Color) -> Self {
        match self.entries.binary_search_by(|(k, _)| (**k).cmp(token)) {
            Ok(idx) => self.entries[idx].1 = color,
            Err(idx) => self.entries.insert(idx, (token.into(), color)),
        }
        self
    }

    /// Builds the palette.
    #[must_use]
    pub fn build(self) -> Palette {
        Palette {
            entries: self.entries.into(),
        }
    }
}

/// Light or dark appearance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A value that differs between light and dark mode.
///
/// ```
/// use glide_color::{ColorMode, ModeValue};
///
/// let highlight = ModeValue::new("blue.500", "blue.400");
/// assert_eq!(*highlight.get(ColorMode::Dark), "blue.400");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeValue<T> {
    /// Value in [`ColorMode::Light`].
    pub light: T,
    /// Value in [`ColorMode::Dark`].
    pub dark: T,
}

impl<T> ModeValue<T> {
    /// Creates a per-mode value.
    #[must_use]
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// Picks the value for `mode`.
    #[must_use]
    pub const fn get(&self, mode: ColorMode) -> &T {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

impl<T: Clone> ModeValue<T> {
    /// The same value in both modes.
    #[must_use]
    pub fn uniform(value: T) -> Self {
        Self::new(value.clone(), value)
    }
}

impl<T: AsRef<str>> ModeValue<T> {
    /// Resolves the token selected for `mode`.
    pub fn resolve(
        &self,
        mode: ColorMode,
        resolver: &(impl ColorResolver + ?Sized),
    ) -> Result<Color, ThemeError> {
        resolver.resolve_color(self.get(mode).as_ref())
    }
}
