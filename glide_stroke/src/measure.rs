// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path length measurement.

use kurbo::{BezPath, Shape};

/// Layout-side operation that measures the total length of a laid-out path.
///
/// Only call this once the path has been laid out; the result feeds
/// [`PathGeometry::record`](crate::PathGeometry::record).
pub trait PathMeasure {
    /// Total length of `path` in path units.
    fn measure_total_length(&self, path: &BezPath) -> f64;
}

/// Measures arc length with kurbo's curve approximations.
///
/// ```
/// use glide_stroke::{KurboMeasure, PathMeasure};
/// use kurbo::BezPath;
///
/// let mut path = BezPath::new();
/// path.move_to((0.0, 0.0));
/// path.line_to((3.0, 4.0));
///
/// let len = KurboMeasure::default().measure_total_length(&path);
/// assert!((len - 5.0).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KurboMeasure {
    /// Maximum error of the curve length approximation, in path units.
    pub accuracy: f64,
}

impl Default for KurboMeasure {
    fn default() -> Self {
        Self { accuracy: 1e-3 }
    }
}

impl PathMeasure for KurboMeasure {
    fn measure_total_length(&self, path: &BezPath) -> f64 {
        path.perimeter(self.accuracy)
    }
}

impl<F> PathMeasure for F
where
    F: Fn(&BezPath) -> f64,
{
    fn measure_total_length(&self, path: &BezPath) -> f64 {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_square_includes_the_closing_edge() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.line_to((0.0, 10.0));
        path.close_path();
        let len = KurboMeasure::default().measure_total_length(&path);
        assert!((len - 40.0).abs() < 1e-9, "got {len}");
    }

    #[test]
    fn curves_are_measured_within_accuracy() {
        // Quarter circle of radius 10 approximated by a cubic.
        let k = 0.552_284_749_831 * 10.0;
        let mut path = BezPath::new();
        path.move_to((10.0, 0.0));
        path.curve_to((10.0, k), (k, 10.0), (0.0, 10.0));
        let len = KurboMeasure { accuracy: 1e-6 }.measure_total_length(&path);
        let quarter = core::f64::consts::FRAC_PI_2 * 10.0;
        assert!((len - quarter).abs() < 0.01, "got {len}");
    }

    #[test]
    fn closures_act_as_measures() {
        let fixed = |_: &BezPath| 12.5;
        assert_eq!(fixed.measure_total_length(&BezPath::new()), 12.5);
    }
}
