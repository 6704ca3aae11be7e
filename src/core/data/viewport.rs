use std::fmt;

use thiserror::Error;

use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imag,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Imag => f.write_str("imaginary"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("invalid viewport: {axis} bounds must satisfy min < max, got [{min}, {max}]")]
    InvertedAxis { axis: Axis, min: f64, max: f64 },
    #[error("invalid viewport: {axis} bounds must be finite")]
    NonFinite { axis: Axis },
    #[error("zoom factor must be finite and positive, got {factor}")]
    InvalidZoom { factor: f64 },
}

/// Unvalidated viewport bounds, as reported by a display when the user
/// zooms or pans.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(real_min: f64, real_max: f64, imag_min: f64, imag_max: f64) -> Self {
        Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        }
    }
}

fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), ViewportError> {
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(ViewportError::NonFinite { axis });
    }

    if min >= max {
        return Err(ViewportError::InvertedAxis { axis, min, max });
    }

    Ok(())
}

/// A rectangle of the complex plane with `min < max` on both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
}

impl TryFrom<Bounds> for Viewport {
    type Error = ViewportError;

    fn try_from(bounds: Bounds) -> Result<Self, Self::Error> {
        Self::from_bounds(bounds)
    }
}

impl Viewport {
    pub fn new(real_min: f64, real_max: f64, imag_min: f64, imag_max: f64) -> Result<Self, ViewportError> {
        Self::from_bounds(Bounds::new(real_min, real_max, imag_min, imag_max))
    }

    pub fn from_bounds(bounds: Bounds) -> Result<Self, ViewportError> {
        check_axis(Axis::Real, bounds.real_min, bounds.real_max)?;
        check_axis(Axis::Imag, bounds.imag_min, bounds.imag_max)?;

        Ok(Self { bounds })
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.bounds.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.bounds.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.bounds.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.bounds.imag_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.real_max - self.bounds.real_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.imag_max - self.bounds.imag_min
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            self.bounds.real_min + self.width() / 2.0,
            self.bounds.imag_min + self.height() / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.bounds.real_min <= point.real
            && point.real <= self.bounds.real_max
            && self.bounds.imag_min <= point.imag
            && point.imag <= self.bounds.imag_max
    }

    /// Maps a grid cell to its complex coordinate by linear interpolation.
    ///
    /// Column 0 lands on `real_min` and the last column on `real_max`; rows
    /// run from `imag_min` upwards. A single-column (or single-row)
    /// resolution pins that axis to its minimum.
    #[must_use]
    pub fn point_at(&self, cell: Cell, resolution: Resolution) -> Complex {
        let real = if resolution.width() == 1 {
            self.bounds.real_min
        } else {
            self.bounds.real_min + (cell.col as f64 * self.width()) / (resolution.width() - 1) as f64
        };

        let imag = if resolution.height() == 1 {
            self.bounds.imag_min
        } else {
            self.bounds.imag_min + (cell.row as f64 * self.height()) / (resolution.height() - 1) as f64
        };

        Complex::new(real, imag)
    }

    /// Returns a viewport `factor` times smaller on each axis, centred on
    /// `centre`. Factors below 1 zoom out.
    pub fn zoomed(&self, factor: f64, centre: Complex) -> Result<Self, ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoom { factor });
        }

        let half_width = self.width() / factor / 2.0;
        let half_height = self.height() / factor / 2.0;

        Self::new(
            centre.real - half_width,
            centre.real + half_width,
            centre.imag - half_height,
            centre.imag + half_height,
        )
    }

    pub fn panned(&self, d_real: f64, d_imag: f64) -> Result<Self, ViewportError> {
        Self::new(
            self.bounds.real_min + d_real,
            self.bounds.real_max + d_real,
            self.bounds.imag_min + d_imag,
            self.bounds.imag_max + d_imag,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(viewport.bounds(), Bounds::new(-2.0, 1.0, -1.0, 1.0));
        assert_eq!(viewport.width(), 3.0);
        assert_eq!(viewport.height(), 2.0);
    }

    #[test]
    fn test_viewport_rejects_zero_and_inverted_axes() {
        assert_eq!(
            Viewport::new(0.0, 0.0, -1.0, 1.0),
            Err(ViewportError::InvertedAxis { axis: Axis::Real, min: 0.0, max: 0.0 })
        );
        assert_eq!(
            Viewport::new(1.0, -2.0, -1.0, 1.0),
            Err(ViewportError::InvertedAxis { axis: Axis::Real, min: 1.0, max: -2.0 })
        );
        assert_eq!(
            Viewport::new(-2.0, 1.0, 0.5, 0.5),
            Err(ViewportError::InvertedAxis { axis: Axis::Imag, min: 0.5, max: 0.5 })
        );
        assert_eq!(
            Viewport::new(-2.0, 1.0, 1.0, -1.0),
            Err(ViewportError::InvertedAxis { axis: Axis::Imag, min: 1.0, max: -1.0 })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_bounds() {
        assert_eq!(
            Viewport::new(f64::NAN, 1.0, -1.0, 1.0),
            Err(ViewportError::NonFinite { axis: Axis::Real })
        );
        assert_eq!(
            Viewport::new(-2.0, 1.0, -1.0, f64::INFINITY),
            Err(ViewportError::NonFinite { axis: Axis::Imag })
        );
        assert_eq!(
            Viewport::new(-f64::MAX, f64::MAX, -1.0, 1.0),
            Err(ViewportError::NonFinite { axis: Axis::Real })
        );
    }

    #[test]
    fn test_try_from_bounds() {
        let good: Result<Viewport, _> = Bounds::new(-1.0, 1.0, -1.0, 1.0).try_into();
        let bad: Result<Viewport, _> = Bounds::new(1.0, -1.0, -1.0, 1.0).try_into();

        assert!(good.is_ok());
        assert!(bad.is_err());
    }

    #[test]
    fn test_error_message_names_axis() {
        let err = Viewport::new(-2.0, 1.0, 1.0, -1.0).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid viewport: imaginary bounds must satisfy min < max, got [1, -1]"
        );
    }

    #[test]
    fn test_point_at_corners_and_centre() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let resolution = Resolution::new(7, 5).unwrap();

        assert_eq!(viewport.point_at(Cell::new(0, 0), resolution), Complex::new(-2.0, -1.0));
        assert_eq!(viewport.point_at(Cell::new(4, 6), resolution), Complex::new(1.0, 1.0));
        assert_eq!(viewport.point_at(Cell::new(2, 4), resolution), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_point_at_single_row_and_column_pins_to_minimum() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        let single_column = Resolution::new(1, 3).unwrap();
        let single_row = Resolution::new(3, 1).unwrap();

        assert_eq!(viewport.point_at(Cell::new(2, 0), single_column), Complex::new(-2.0, 1.0));
        assert_eq!(viewport.point_at(Cell::new(0, 2), single_row), Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_contains_point() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        assert!(viewport.contains_point(Complex::new(0.0, 0.0)));
        assert!(viewport.contains_point(Complex::new(-2.0, 1.0)));
        assert!(!viewport.contains_point(Complex::new(1.5, 0.0)));
        assert!(!viewport.contains_point(Complex::new(0.0, -1.5)));
    }

    #[test]
    fn test_zoomed_in_around_centre() {
        let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();
        let zoomed = viewport.zoomed(2.0, Complex::new(0.5, 0.0)).unwrap();

        assert_eq!(zoomed.bounds(), Bounds::new(-0.5, 1.5, -0.5, 0.5));
    }

    #[test]
    fn test_zoomed_out() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let zoomed = viewport.zoomed(0.5, viewport.centre()).unwrap();

        assert_eq!(zoomed.bounds(), Bounds::new(-2.0, 2.0, -2.0, 2.0));
    }

    #[test]
    fn test_zoomed_rejects_bad_factor() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(
            viewport.zoomed(0.0, viewport.centre()),
            Err(ViewportError::InvalidZoom { factor: 0.0 })
        );
        assert!(viewport.zoomed(f64::NAN, viewport.centre()).is_err());
    }

    #[test]
    fn test_panned() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let panned = viewport.panned(0.5, -0.25).unwrap();

        assert_eq!(panned.bounds(), Bounds::new(-1.5, 1.5, -1.25, 0.75));
    }
}
