// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Wall-clock measurement of a pass, and the comparison of two.

use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug)]
pub struct Timed<T> {
    /// What the measured closure returned.
    pub value: T,
    /// Wall-clock time spent in the closure.
    pub elapsed: Duration,
}

/// Runs `f` once and measures it.
pub fn timed<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Durations of the sequential and parallel passes over the same input.
#[derive(Copy, Clone, Debug)]
pub struct Comparison {
    /// Time of the single-threaded pass.
    pub sequential: Duration,
    /// Time of the striped pass.
    pub parallel: Duration,
}

impl Comparison {
    /// Sequential time over parallel time.  A parallel pass too quick
    /// to measure reports infinity.
    pub fn speedup(&self) -> f64 {
        let parallel = self.parallel.as_secs_f64();
        if parallel == 0.0 {
            return std::f64::INFINITY;
        }
        self.sequential.as_secs_f64() / parallel
    }
}
