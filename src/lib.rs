#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Stripe-parallel Mandelbrot renderer
//!
//! The Mandelbrot set is the collection of points `c` on the complex
//! plane for which the recurrence z -> z*z + c, started at `c`, stays
//! bounded.  For every pixel of a square image we map the pixel to a
//! point, run the recurrence until the orbit leaves the circle of
//! radius 2 or an iteration bound is reached, and turn the number of
//! steps survived into a gray level.
//!
//! Every pixel is independent of every other, so the image can be cut
//! into equal stripes and handed to a fixed number of worker threads.
//! Each worker owns its stripe of the output buffer outright, so no
//! locking is needed; the coordinator simply waits for all of them.
//! A single-threaded pass over the same input is kept alongside as the
//! baseline, and the two must agree pixel for pixel.

pub mod buffer;
pub mod colour;
pub mod config;
pub mod error;
pub mod escape;
pub mod partition;
pub mod planes;
pub mod render;
pub mod timing;

pub use buffer::{ImageBuffer, StripeMut};
pub use colour::{write_image, Tint};
pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use partition::{partition, Stripe};
pub use planes::{Pixel, PlaneMapper, Viewport};
pub use render::Renderer;
pub use timing::{timed, Comparison, Timed};
