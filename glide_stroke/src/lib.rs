// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Stroke: measured path lengths and eased stroke reveals.
//!
//! A "drawn-on" stroke is rendered as one dash as long as the whole path,
//! slid along the path by a dash offset. This crate computes that offset:
//!
//! - [`PathGeometry`] / [`PathLengthReader`]: The measured length, written once
//!   per layout pass and read every frame; `0` means "not measured yet"
//! - [`PathMeasure`] / [`KurboMeasure`]: The layout-side measurement operation
//! - [`PathTracer`] / [`StrokeReveal`]: `max(0, L - L * ease(p) - epsilon)` and
//!   the dash parameters derived from it
//!
//! This crate is `no_std` and uses `alloc`; enable `libm` when building
//! without `std`.
//!
//! ```rust
//! use glide_stroke::{KurboMeasure, PathGeometry, PathMeasure, PathTracer};
//! use kurbo::BezPath;
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((40.0, 0.0));
//!
//! let mut geometry = PathGeometry::new();
//! let tracer = PathTracer::default();
//!
//! // Before layout, strokes are hidden rather than drawn with a bogus length.
//! assert!(!tracer.reveal(geometry.total_length(), 0.5).visible);
//!
//! geometry.record(KurboMeasure::default().measure_total_length(&path));
//! let reveal = tracer.reveal(geometry.total_length(), 1.0);
//! assert!(reveal.visible);
//! assert!(reveal.dash_offset < tracer.epsilon());
//! ```

#![no_std]

extern crate alloc;

mod geometry;
mod measure;
mod tracer;

pub use geometry::{PathGeometry, PathLengthReader};
pub use measure::{KurboMeasure, PathMeasure};
pub use tracer::{DEFAULT_EPSILON, PathTracer, StrokeReveal};
