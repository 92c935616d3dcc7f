//! Average hash (aHash).
//!
//! Each cell of an 8x8 grayscale thumbnail is compared against the mean of
//! all cells. The hash tracks low-frequency brightness structure and shrugs
//! off recompression noise, but any two images of similar overall brightness
//! layout collapse to the same hash, so expect false positives.

use image::{DynamicImage, GenericImageView};
use log::trace;

use super::preprocess::NormalizedGrid;
use super::HASH_SIZE;
use crate::error::Result;
use crate::types::Fingerprint;

/// Compute the average hash of an image.
///
/// The mean is an integer division of the 64 reduced values (truncating).
/// A cell sets its bit only when strictly brighter than the mean; a cell equal
/// to the mean yields 0.
pub fn average_hash(img: &DynamicImage) -> Result<Fingerprint> {
    let grid = NormalizedGrid::new(img, HASH_SIZE, HASH_SIZE)?;

    let mut total: u64 = 0;
    for row in 0..HASH_SIZE {
        for col in 0..HASH_SIZE {
            total += grid.reduced(col, row) as u64;
        }
    }
    let avg = total / (HASH_SIZE * HASH_SIZE) as u64;

    let mut hash: u64 = 0;
    let mut pos = 0;
    for row in 0..HASH_SIZE {
        for col in 0..HASH_SIZE {
            if grid.reduced(col, row) as u64 > avg {
                hash |= 1 << pos;
            }
            pos += 1;
        }
    }

    let (width, height) = img.dimensions();
    trace!(
        "average hash {:016x} for {}x{} image (mean {})",
        hash,
        width,
        height,
        avg
    );
    Ok(Fingerprint(hash))
}
