// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The square intensity image both renderers fill in.
//!
//! Pixels are stored row-major in image orientation: `(x, y)` with `y`
//! growing downward.  A stripe of grid lines `j` therefore lands on a
//! contiguous block of image rows, which is what lets the buffer be
//! handed out as disjoint `&mut` slices instead of behind a lock.

use std::mem;
use std::ops::Range;

use crate::error::{RenderError, Result};
use crate::partition::Stripe;
use crate::planes::Pixel;

/// An n-by-n grid of 8-bit intensities.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    side: usize,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// A fresh, black buffer.
    pub fn new(side: usize) -> Self {
        ImageBuffer {
            side,
            pixels: vec![0 as u8; side * side],
        }
    }

    /// Number of pixels along each side.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The raw intensities, top row first.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes the intensity at image column `x`, image row `y`.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        assert!(x < self.side && y < self.side, "({}, {}) out of bounds", x, y);
        self.pixels[y * self.side + x] = value;
    }

    /// Reads the intensity at image column `x`, image row `y`.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.side && y < self.side, "({}, {}) out of bounds", x, y);
        self.pixels[y * self.side + x]
    }

    /// Reads the intensity computed for grid coordinate `(i, j)`.
    pub fn intensity_at(&self, pixel: &Pixel) -> u8 {
        self.get(pixel.0, self.side - 1 - pixel.1)
    }

    /// How many pixels disagree with `other`.  Buffers of different
    /// sizes disagree everywhere.
    pub fn mismatches(&self, other: &ImageBuffer) -> usize {
        if self.side != other.side {
            return self.len().max(other.len());
        }
        self.pixels
            .iter()
            .zip(other.pixels.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Hands out one exclusive view per stripe.  The plan must list
    /// contiguous stripes, in order, that together cover every grid
    /// line exactly once; anything else is refused before a single
    /// slice is cut.
    pub fn stripes_mut<'a>(&'a mut self, plan: &[Stripe]) -> Result<Vec<StripeMut<'a>>> {
        let side = self.side;
        let mut next = 0;
        for stripe in plan {
            if stripe.columns.start != next || stripe.columns.end < stripe.columns.start {
                return Err(RenderError::StripeMismatch);
            }
            next = stripe.columns.end;
        }
        if next != side {
            return Err(RenderError::StripeMismatch);
        }

        // The highest stripe sits at the top of the image, so cut from
        // the back of the plan.
        let mut rest: &'a mut [u8] = &mut self.pixels;
        let mut views = Vec::with_capacity(plan.len());
        for stripe in plan.iter().rev() {
            let (rows, tail) = mem::take(&mut rest).split_at_mut(stripe.width() * side);
            rest = tail;
            views.push(StripeMut {
                stripe: stripe.clone(),
                side,
                rows,
            });
        }
        views.reverse();
        Ok(views)
    }
}

/// Exclusive access to the image rows of one stripe.
#[derive(Debug)]
pub struct StripeMut<'a> {
    stripe: Stripe,
    side: usize,
    rows: &'a mut [u8],
}

impl<'a> StripeMut<'a> {
    /// The stripe this view belongs to.
    pub fn stripe(&self) -> &Stripe {
        &self.stripe
    }

    /// Image rows owned by this view.
    pub fn image_rows(&self) -> Range<usize> {
        (self.side - self.stripe.columns.end)..(self.side - self.stripe.columns.start)
    }

    /// Writes the intensity at image column `x`, image row `y`.  Rows
    /// outside the stripe belong to another worker.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let owned = self.image_rows();
        assert!(
            x < self.side && owned.contains(&y),
            "({}, {}) is outside stripe {}",
            x,
            y,
            self.stripe.index
        );
        self.rows[(y - owned.start) * self.side + x] = value;
    }
}
