// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The arithmetic at the bottom of everything: one step of the
//! Mandelbrot recurrence, the escape test, and the mapping from an
//! escape count to a pixel intensity.

use num::Complex;

/// An orbit whose magnitude exceeds this has escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Euclidean distance of a point from the origin.
#[inline]
pub fn magnitude(z: Complex<f64>) -> f64 {
    z.norm()
}

/// One step of the recurrence, z*z + c.
#[inline]
pub fn square_plus(z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
    z * z + c
}

/// Counts how many iterations the orbit of `c` survives before its
/// magnitude goes strictly past 2.0.  The orbit starts at `c` itself,
/// not at zero, so a `c` already outside the radius scores 0.  Points
/// that never escape score `max`.
pub fn escape_count(c: Complex<f64>, max: u32) -> u32 {
    let mut z = c;
    for t in 0..max {
        if magnitude(z) > ESCAPE_RADIUS {
            return t;
        }
        z = square_plus(z, c);
    }
    max
}

/// Fast escapes are bright, members of the set are black.
#[inline]
pub fn intensity(count: u32, max: u32) -> u32 {
    max - count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn magnitude_is_euclidean() {
        assert_eq!(magnitude(Complex::new(3.0, 4.0)), 5.0);
        assert_eq!(magnitude(Complex::new(0.0, -2.0)), 2.0);
    }

    #[test]
    fn square_plus_steps_the_recurrence() {
        let z = Complex::new(1.0, 1.0);
        let c = Complex::new(-0.5, 0.25);
        // (1 + i)^2 = 2i
        assert_eq!(square_plus(z, c), Complex::new(-0.5, 2.25));
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_count(Complex::new(0.0, 0.0), 255), 255);
        assert_eq!(escape_count(Complex::new(0.0, 0.0), 1), 1);
    }

    #[test]
    fn outside_the_radius_escapes_immediately() {
        assert_eq!(escape_count(Complex::new(3.0, 0.0), 255), 0);
        assert_eq!(escape_count(Complex::new(-1.5, 1.5), 255), 0);
        assert_eq!(escape_count(Complex::new(0.0, -2.5), 10), 0);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        // |2| is not past the radius, so one step is taken before 6 escapes.
        assert_eq!(escape_count(Complex::new(2.0, 0.0), 255), 1);
        // -2 settles on the fixed point 2 and sits on the radius forever.
        assert_eq!(escape_count(Complex::new(-2.0, 0.0), 255), 255);
    }

    #[test]
    fn period_two_orbit_stays_bounded() {
        // -i -> -1 - i -> i -> -1 - i -> ...
        assert_eq!(escape_count(Complex::new(0.0, -1.0), 100), 100);
    }

    #[test]
    fn count_never_exceeds_the_bound() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2_000 {
            let c = Complex::new(rng.gen_range(-2.5..1.5), rng.gen_range(-1.5..1.5));
            let max = rng.gen_range(1..=255);
            assert!(escape_count(c, max) <= max);
        }
    }

    #[test]
    fn escape_count_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let c = Complex::new(rng.gen_range(-2.0..1.0), rng.gen_range(-1.2..1.2));
            assert_eq!(escape_count(c, 255), escape_count(c, 255));
        }
    }

    #[test]
    fn intensity_inverts_the_count() {
        assert_eq!(intensity(0, 255), 255);
        assert_eq!(intensity(255, 255), 0);
        assert_eq!(intensity(1, 10), 9);
    }
}
