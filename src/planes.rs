// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which relates a square grid of
//! pixels with an origin at 0,0 to a square viewport on the complex
//! plane, described by its center and the length of its side.
use num::Complex;

use crate::error::{RenderError, Result};

/// The square region of the complex plane being rendered.  Fixed for
/// the duration of a pass; only obtainable through `new`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    center: Complex<f64>,
    size: f64,
}

impl Viewport {
    /// Rejects non-finite centers and sizes that are not strictly
    /// positive; nothing downstream checks again.
    pub fn new(center: Complex<f64>, size: f64) -> Result<Viewport> {
        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(RenderError::InvalidViewport(format!(
                "center {} is not finite",
                center
            )));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(RenderError::InvalidViewport(format!(
                "size {} must be a positive number",
                size
            )));
        }
        Ok(Viewport { center, size })
    }

    /// The point in the middle of the region.
    pub fn center(&self) -> Complex<f64> {
        self.center
    }

    /// The length of one side of the region.
    pub fn size(&self) -> f64 {
        self.size
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            center: Complex::new(-0.5, 0.0),
            size: 2.0,
        }
    }
}

/// A grid coordinate.  The first component runs along the real axis,
/// the second along the imaginary axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of an n-by-n grid onto a viewport.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    viewport: Viewport,
    side: usize,
}

impl PlaneMapper {
    /// Pairs a viewport with a grid resolution.
    pub fn new(viewport: Viewport, side: usize) -> Result<PlaneMapper> {
        if side == 0 {
            return Err(RenderError::EmptyGrid);
        }
        Ok(PlaneMapper { viewport, side })
    }

    /// The region of the complex plane.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of pixels along each side of the grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Given a pixel on the grid, return the point of the complex
    /// plane to evaluate for it.  The lower left corner of the
    /// viewport is pixel (0, 0); the far edge is never reached.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let Viewport { center, size } = self.viewport;
        let n = self.side as f64;
        Complex::new(
            center.re - size / 2.0 + size * (pixel.0 as f64) / n,
            center.im - size / 2.0 + size * (pixel.1 as f64) / n,
        )
    }

    /// Images grow downward while the imaginary axis grows upward, so
    /// grid column `j` is drawn on image row `side - 1 - j`.
    #[inline]
    pub fn image_row(&self, j: usize) -> usize {
        self.side - 1 - j
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rejects_bad_size() {
        let c = Complex::new(0.0, 0.0);
        assert!(Viewport::new(c, 0.0).is_err());
        assert!(Viewport::new(c, -1.0).is_err());
        assert!(Viewport::new(c, std::f64::INFINITY).is_err());
        assert!(Viewport::new(c, std::f64::NAN).is_err());
    }

    #[test]
    fn viewport_rejects_bad_center() {
        assert!(Viewport::new(Complex::new(std::f64::NAN, 0.0), 1.0).is_err());
        assert!(Viewport::new(Complex::new(0.0, std::f64::NEG_INFINITY), 1.0).is_err());
    }

    #[test]
    fn viewport_accepts_good_shape() {
        assert!(Viewport::new(Complex::new(-0.5, 0.0), 2.0).is_ok());
    }

    #[test]
    fn planemapper_rejects_empty_grid() {
        assert!(PlaneMapper::new(Viewport::default(), 0).is_err());
    }

    #[test]
    fn pixel_to_point_on_reference_viewport() {
        let pm = PlaneMapper::new(Viewport::default(), 4).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.5, -1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(-0.5, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 0)), Complex::new(0.0, -1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 3)), Complex::new(-1.5, 0.5));
    }

    #[test]
    fn first_index_is_real_axis() {
        let pm = PlaneMapper::new(Viewport::new(Complex::new(0.0, 0.0), 8.0).unwrap(), 8).unwrap();
        let a = pm.pixel_to_point(&Pixel(5, 1));
        assert_eq!(a, Complex::new(1.0, -3.0));
    }

    #[test]
    fn image_row_flips_vertically() {
        let pm = PlaneMapper::new(Viewport::default(), 4).unwrap();
        assert_eq!(pm.image_row(0), 3);
        assert_eq!(pm.image_row(3), 0);
    }

    #[test]
    fn accessors_report_validated_values() {
        let viewport = Viewport::new(Complex::new(-0.75, 0.25), 0.5).unwrap();
        assert_eq!(viewport.center(), Complex::new(-0.75, 0.25));
        assert_eq!(viewport.size(), 0.5);
        let pm = PlaneMapper::new(viewport, 16).unwrap();
        assert_eq!(pm.side(), 16);
        assert_eq!(*pm.viewport(), viewport);
    }
}
