// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cuts the second grid axis (the imaginary one, `j`) into equal,
//! contiguous stripes, one per worker.

use std::ops::Range;

use crate::error::{RenderError, Result};

/// One worker's share of the grid: every pixel whose `j` falls in
/// `columns`, across all `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Stripe {
    /// Position of the stripe in the plan, also the worker's number.
    pub index: usize,
    /// Half-open range of `j` covered by this stripe.
    pub columns: Range<usize>,
}

impl Stripe {
    /// Number of grid lines in the stripe.
    pub fn width(&self) -> usize {
        self.columns.end - self.columns.start
    }
}

/// Worker `k` gets `[k*side/workers, (k+1)*side/workers)`.  A side that
/// does not divide evenly is refused instead of leaving trailing lines
/// to nobody.
pub fn partition(side: usize, workers: usize) -> Result<Vec<Stripe>> {
    if side == 0 {
        return Err(RenderError::EmptyGrid);
    }
    if workers == 0 {
        return Err(RenderError::NoWorkers);
    }
    if workers > side {
        return Err(RenderError::TooManyWorkers { side, workers });
    }
    if side % workers != 0 {
        return Err(RenderError::UnevenPartition { side, workers });
    }

    Ok((0..workers)
        .map(|k| Stripe {
            index: k,
            columns: (k * side / workers)..((k + 1) * side / workers),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covers_exactly(stripes: &[Stripe], side: usize) -> bool {
        let mut seen = vec![0; side];
        for stripe in stripes {
            for j in stripe.columns.clone() {
                seen[j] += 1;
            }
        }
        seen.iter().all(|&hits| hits == 1)
    }

    #[test]
    fn eight_lines_four_workers() {
        let stripes = partition(8, 4).unwrap();
        let ranges: Vec<Range<usize>> = stripes.iter().map(|s| s.columns.clone()).collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..8]);
        assert!(stripes.iter().enumerate().all(|(k, s)| s.index == k));
    }

    #[test]
    fn uneven_split_is_refused() {
        match partition(8, 3) {
            Err(RenderError::UnevenPartition { side, workers }) => {
                assert_eq!((side, workers), (8, 3));
            }
            other => panic!("expected UnevenPartition, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_configurations_are_refused() {
        assert!(match partition(8, 0) {
            Err(RenderError::NoWorkers) => true,
            _ => false,
        });
        assert!(match partition(0, 1) {
            Err(RenderError::EmptyGrid) => true,
            _ => false,
        });
        assert!(match partition(4, 8) {
            Err(RenderError::TooManyWorkers { .. }) => true,
            _ => false,
        });
    }

    #[test]
    fn every_divisor_tiles_the_grid() {
        for side in 1..=64 {
            for workers in (1..=side).filter(|w| side % w == 0) {
                let stripes = partition(side, workers).unwrap();
                assert_eq!(stripes.len(), workers);
                assert!(stripes.iter().all(|s| s.width() == side / workers));
                assert!(covers_exactly(&stripes, side), "{} / {}", side, workers);
            }
        }
    }

    #[test]
    fn single_worker_takes_everything() {
        assert_eq!(partition(1024, 1).unwrap(), vec![Stripe { index: 0, columns: 0..1024 }]);
    }
}
