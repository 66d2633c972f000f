// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The fixed inputs of one run.

use num::Complex;

use crate::error::{RenderError, Result};
use crate::partition::{partition, Stripe};
use crate::planes::{PlaneMapper, Viewport};

/// Largest iteration bound whose intensities still fit in a byte.
pub const MAX_ITERATIONS: u32 = 255;

/// Everything a sequential and a parallel pass need to agree on.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Middle of the rendered region.
    pub center: Complex<f64>,
    /// Side length of the rendered region.
    pub size: f64,
    /// Pixels along each side of the square image.
    pub side: usize,
    /// Iteration bound for the escape test.
    pub max_iterations: u32,
    /// Number of worker threads for the parallel pass.
    pub workers: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            center: Complex::new(-0.5, 0.0),
            size: 2.0,
            side: 1024,
            max_iterations: MAX_ITERATIONS,
            workers: 8,
        }
    }
}

impl RenderConfig {
    /// Checks every input before any work starts.
    pub fn validate(&self) -> Result<()> {
        self.viewport()?;
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS {
            return Err(RenderError::InvalidIterations(self.max_iterations));
        }
        self.stripes().map(|_| ())
    }

    /// The validated viewport.
    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.center, self.size)
    }

    /// The validated pixel-to-plane mapping.
    pub fn mapper(&self) -> Result<PlaneMapper> {
        PlaneMapper::new(self.viewport()?, self.side)
    }

    /// The stripe plan for the configured worker count.
    pub fn stripes(&self) -> Result<Vec<Stripe>> {
        partition(self.side, self.workers)
    }
}
