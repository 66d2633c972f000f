// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning intensities into pictures.  Only the encoding differs
//! between the two passes; compare buffers, not images.

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::buffer::ImageBuffer;
use crate::error::Result;

/// Red channel of the parallel pass's images.
pub const PARALLEL_RED: u8 = 200;

/// How an intensity becomes a colour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tint {
    /// The intensity on all three channels.
    Grayscale,
    /// A fixed red channel, the intensity on green and blue.
    Red(u8),
}

impl Tint {
    /// The tint the sequential pass is shown with.
    pub fn sequential() -> Tint {
        Tint::Grayscale
    }

    /// The tint the parallel pass is shown with.
    pub fn parallel() -> Tint {
        Tint::Red(PARALLEL_RED)
    }

    /// Colour for one intensity.
    pub fn apply(self, gray: u8) -> Rgb<u8> {
        match self {
            Tint::Grayscale => Rgb([gray, gray, gray]),
            Tint::Red(red) => Rgb([red, gray, gray]),
        }
    }
}

impl ImageBuffer {
    /// Colours every pixel with `tint`.
    pub fn to_rgb(&self, tint: Tint) -> RgbImage {
        let side = self.side() as u32;
        RgbImage::from_fn(side, side, |x, y| tint.apply(self.get(x as usize, y as usize)))
    }
}

/// Saves an image; the format follows the file extension.
pub fn write_image<P: AsRef<Path>>(path: P, image: &RgbImage) -> Result<()> {
    image.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_share_green_and_blue() {
        assert_eq!(Tint::sequential().apply(17), Rgb([17, 17, 17]));
        assert_eq!(Tint::parallel().apply(17), Rgb([200, 17, 17]));
    }

    #[test]
    fn to_rgb_keeps_orientation() {
        let mut buffer = ImageBuffer::new(2);
        buffer.set(1, 0, 90);
        let image = buffer.to_rgb(Tint::Grayscale);
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(*image.get_pixel(1, 0), Rgb([90, 90, 90]));
        assert_eq!(*image.get_pixel(0, 1), Rgb([0, 0, 0]));
    }

    #[test]
    fn write_image_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut buffer = ImageBuffer::new(3);
        buffer.set(2, 2, 255);
        write_image(&path, &buffer.to_rgb(Tint::parallel())).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.unknown");
        assert!(write_image(&path, &ImageBuffer::new(1).to_rgb(Tint::Grayscale)).is_err());
    }
}
