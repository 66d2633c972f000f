// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two ways of filling an image: one thread walking every pixel,
//! or a fixed crew of workers each walking its own stripe.

use itertools::iproduct;
use log::{debug, info};

use crate::buffer::{ImageBuffer, StripeMut};
use crate::config::{RenderConfig, MAX_ITERATIONS};
use crate::error::{RenderError, Result};
use crate::escape::{escape_count, intensity};
use crate::partition::partition;
use crate::planes::{Pixel, PlaneMapper};
use crate::timing::timed;

/// Holds the parameters shared by both passes.  Once built, this
/// object is not mutated, which is what lets the workers borrow it
/// freely.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    limit: u32,
}

impl Renderer {
    /// Requires the pixel-to-plane mapping and the iteration bound,
    /// which must be between 1 and 255.
    pub fn new(plane: PlaneMapper, limit: u32) -> Result<Self> {
        if limit == 0 || limit > MAX_ITERATIONS {
            return Err(RenderError::InvalidIterations(limit));
        }
        Ok(Renderer { plane, limit })
    }

    /// Builds a renderer out of a validated configuration.
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        Renderer::new(config.mapper()?, config.max_iterations)
    }

    /// The mapping in use.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration bound in use.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Point, escape count and intensity for one grid coordinate.  The
    /// limit never exceeds 255, so the intensity always fits.
    fn shade(&self, pixel: &Pixel) -> u8 {
        let c = self.plane.pixel_to_point(pixel);
        intensity(escape_count(c, self.limit), self.limit) as u8
    }

    /// The single-threaded reference pass.
    pub fn render_sequential(&self) -> ImageBuffer {
        let side = self.plane.side();
        let pass = timed(|| {
            let mut buffer = ImageBuffer::new(side);
            for (i, j) in iproduct!(0..side, 0..side) {
                buffer.set(i, self.plane.image_row(j), self.shade(&Pixel(i, j)));
            }
            buffer
        });
        info!(
            "sequential pass filled {} pixels in {:?}",
            pass.value.len(),
            pass.elapsed
        );
        pass.value
    }

    /// One worker's share: every `i`, and only the `j` of its stripe.
    fn render_stripe(&self, mut view: StripeMut) {
        let columns = view.stripe().columns.clone();
        for (i, j) in iproduct!(0..self.plane.side(), columns) {
            view.set(i, self.plane.image_row(j), self.shade(&Pixel(i, j)));
        }
        debug!("stripe {} complete", view.stripe().index);
    }

    /// Cuts the grid into `workers` stripes, gives each stripe its own
    /// thread, and waits for all of them.  The buffer is only returned
    /// once every worker has finished; if any worker fails to start or
    /// to finish, the whole pass is thrown away.
    pub fn render_parallel(&self, workers: usize) -> Result<ImageBuffer> {
        self.render_stripes_with(workers, |view| self.render_stripe(view))
    }

    fn render_stripes_with<F>(&self, workers: usize, work: F) -> Result<ImageBuffer>
    where
        F: Fn(StripeMut) + Sync,
    {
        let plan = partition(self.plane.side(), workers)?;
        let pass = timed(|| -> Result<ImageBuffer> {
            let mut buffer = ImageBuffer::new(self.plane.side());
            join_stripes(buffer.stripes_mut(&plan)?, work)?;
            Ok(buffer)
        });
        let buffer = pass.value?;
        info!(
            "{} workers filled {} pixels in {:?}",
            workers,
            buffer.len(),
            pass.elapsed
        );
        Ok(buffer)
    }
}

/// Runs `work` on every view, each on its own thread, and returns once
/// all of them are done.  Reports the first worker that could not be
/// started or did not finish.
fn join_stripes<F>(views: Vec<StripeMut>, work: F) -> Result<()>
where
    F: Fn(StripeMut) + Sync,
{
    let work = &work;
    crossbeam::scope(|spawner| {
        let mut handles = Vec::with_capacity(views.len());
        let mut spawn_error = None;
        for view in views {
            let index = view.stripe().index;
            debug!("starting worker {} on columns {:?}", index, view.stripe().columns);
            let spawned = spawner
                .builder()
                .name(format!("stripe-{}", index))
                .spawn(move |_| work(view));
            match spawned {
                Ok(handle) => handles.push((index, handle)),
                Err(err) => {
                    spawn_error = Some(err);
                    break;
                }
            }
        }

        let mut failed = None;
        for (index, handle) in handles {
            if handle.join().is_err() && failed.is_none() {
                failed = Some(index);
            }
        }

        match (spawn_error, failed) {
            (Some(err), _) => Err(RenderError::ThreadSpawn(err)),
            (None, Some(index)) => Err(RenderError::WorkerPanicked(index)),
            (None, None) => Ok(()),
        }
    })
    .expect("every worker is joined inside the scope")
}
