// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Color: color interpolation and theme token resolution.
//!
//! - [`interpolate`] / [`ColorInterpolator`]: Straight-alpha sRGB blending with exact endpoints
//! - [`ColorResolver`] / [`Palette`]: Pure, synchronous lookup of design tokens
//! - [`ColorMode`] / [`ModeValue`]: Per-appearance token selection
//! - [`ColorTransition`]: Fades a surface from its previous color to a newly resolved one
//!
//! Colors are [`peniko::Color`] values. Interpolation operates directly on their
//! components; a fully transparent endpoint is a valid "no fill" state.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! ```rust
//! use glide_color::{ColorInterpolator, ColorMode, ColorResolver, ModeValue, PaletteBuilder};
//! use glide_progress::{CubicBezier, Easing};
//! use peniko::Color;
//!
//! let palette = PaletteBuilder::new()
//!     .set("blue.500", Color::from_rgba8(59, 130, 246, 255))
//!     .set("blue.400", Color::from_rgba8(96, 165, 250, 255))
//!     .build();
//!
//! let highlight = ModeValue::new("blue.500", "blue.400").resolve(ColorMode::Light, &palette)?;
//! let fill = ColorInterpolator::new(Color::TRANSPARENT, highlight, CubicBezier::EXPO_OUT.into());
//!
//! assert_eq!(fill.sample(0.0).components, Color::TRANSPARENT.components);
//! assert_eq!(fill.sample(1.0).components, highlight.components);
//! # Ok::<(), glide_color::ThemeError>(())
//! ```

#![no_std]

extern crate alloc;

mod interpolate;
mod theme;
mod transition;

pub use interpolate::{ColorInterpolator, interpolate};
pub use theme::{ColorMode, ColorResolver, ModeValue, Palette, PaletteBuilder, ThemeError};
pub use transition::{ColorTransition, DEFAULT_COLOR_TRANSITION_MS};

pub use peniko::Color;
