//! Difference hash (dHash).
//!
//! Encodes the sign of the horizontal gradient on a 9x8 grayscale thumbnail.
//! Gradient structure survives brightness and contrast shifts that defeat the
//! average hash, so far fewer false positives.

use image::{DynamicImage, GenericImageView};
use log::trace;

use super::preprocess::NormalizedGrid;
use super::HASH_SIZE;
use crate::error::Result;
use crate::types::Fingerprint;

/// Compute the difference hash of an image.
///
/// Bit `row * 8 + col` is 1 when the pixel at `col` is strictly brighter than
/// its right-hand neighbour at `col + 1`.
pub fn difference_hash(img: &DynamicImage) -> Result<Fingerprint> {
    let grid = NormalizedGrid::new(img, HASH_SIZE + 1, HASH_SIZE)?;

    let mut hash: u64 = 0;
    let mut pos = 0;
    for row in 0..HASH_SIZE {
        for col in 0..HASH_SIZE {
            let left = grid.reduced(col, row);
            let right = grid.reduced(col + 1, row);
            if left > right {
                hash |= 1 << pos;
            }
            pos += 1;
        }
    }

    let (width, height) = img.dimensions();
    trace!("difference hash {:016x} for {}x{} image", hash, width, height);
    Ok(Fingerprint(hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::{ImageBuffer, Rgb};

    fn horizontal_gradient(bright_left: bool) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(90, 80, |x, _| {
            let v = (x * 255 / 89) as u8;
            let v = if bright_left { 255 - v } else { v };
            Rgb([v, v, v])
        }))
    }

    #[test]
    fn test_uniform_image_has_no_gradient() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_fn(72, 64, |_, _| {
            Rgb([77, 77, 77])
        }));
        assert_eq!(difference_hash(&img).unwrap(), Fingerprint(0));
    }

    #[test]
    fn test_gradient_direction() {
        let darkening = difference_hash(&horizontal_gradient(true)).unwrap();
        let brightening = difference_hash(&horizontal_gradient(false)).unwrap();

        // left brighter than right almost everywhere
        assert!(darkening.value().count_ones() >= 56, "{}", darkening);
        // left darker than right almost everywhere
        assert!(brightening.value().count_ones() <= 8, "{}", brightening);
        assert!(darkening.distance(&brightening) >= 48);
    }

    #[test]
    fn test_nil_image() {
        let img = DynamicImage::new_rgba8(0, 10);
        assert!(matches!(difference_hash(&img), Err(Error::NilImage)));
    }
}
