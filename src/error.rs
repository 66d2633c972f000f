// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single error type of the renderer.  A rendering pass is all or
//! nothing, so every failure surfaces here rather than as a partially
//! filled buffer.

use failure::Fail;
use std::io;

/// Everything that can stop a rendering pass.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The grid cannot be cut into equal stripes.
    #[fail(
        display = "Resolution {} is not evenly divisible by {} workers",
        side, workers
    )]
    UnevenPartition {
        /// Grid side length.
        side: usize,
        /// Requested worker count.
        workers: usize,
    },

    /// At least one worker is required.
    #[fail(display = "Worker count must be at least 1")]
    NoWorkers,

    /// Every worker needs at least one grid line.
    #[fail(display = "{} workers requested for a grid of only {} lines", workers, side)]
    TooManyWorkers {
        /// Grid side length.
        side: usize,
        /// Requested worker count.
        workers: usize,
    },

    /// A zero-sized grid has nothing to render.
    #[fail(display = "Resolution must be at least 1")]
    EmptyGrid,

    /// Center or size of the viewport is unusable.
    #[fail(display = "Invalid viewport: {}", _0)]
    InvalidViewport(String),

    /// Intensities are 8-bit, so the bound has to fit in one.
    #[fail(display = "Iteration bound must be between 1 and 255, got {}", _0)]
    InvalidIterations(u32),

    /// A stripe plan that does not tile the buffer exactly.
    #[fail(display = "Stripe plan does not cover the image exactly")]
    StripeMismatch,

    /// The operating system refused to start a worker.
    #[fail(display = "Could not start worker thread: {}", _0)]
    ThreadSpawn(#[cause] io::Error),

    /// A worker died before finishing its stripe.
    #[fail(display = "Worker {} did not complete its stripe", _0)]
    WorkerPanicked(usize),

    /// Writing an exported image failed.
    #[fail(display = "Could not write image: {}", _0)]
    Image(#[cause] image::ImageError),
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;
