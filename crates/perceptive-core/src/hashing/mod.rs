//! # Perceptual Hashing Module
//!
//! Two deterministic 64-bit perceptual hashes plus the Hamming distance used
//! to compare them.
//!
//! - Average hash (aHash): threshold each cell of an 8x8 thumbnail against
//!   the mean. Fast but produces many false positives.
//! - Difference hash (dHash): sign of the horizontal gradient over a 9x8
//!   thumbnail. Fast with very few false positives.
//!
//! Both share one preprocessing step (grayscale, then Lanczos resize) and the
//! same bit layout: bit 0 is the top-left cell, row-major, bit 63 the last
//! cell.
//!
//! ## Hamming Distance Interpretation
//!
//! - 0: the images are likely the same
//! - 1-10: the images are likely a variation of each other
//! - >10: the images are likely different

use image::DynamicImage;
use log::debug;
use std::path::Path;

use crate::error::Result;
use crate::types::{Fingerprint, HashKind};

mod average;
mod difference;
mod distance;
pub mod preprocess;

pub use average::average_hash;
pub use difference::difference_hash;
pub use distance::hamming_distance;
pub use preprocess::{sum_channels, NormalizedGrid};

/// Side of the square comparison grid; every hash is `HASH_SIZE²` = 64 bits.
pub const HASH_SIZE: u32 = 8;

impl HashKind {
    /// Fingerprint `img` with this algorithm
    pub fn fingerprint(&self, img: &DynamicImage) -> Result<Fingerprint> {
        match self {
            HashKind::Average => average_hash(img),
            HashKind::Difference => difference_hash(img),
        }
    }
}

/// Decode an image file and fingerprint it
pub fn fingerprint_from_file<P: AsRef<Path>>(path: P, kind: HashKind) -> Result<Fingerprint> {
    let path = path.as_ref();
    let img = image::open(path)?;
    let fingerprint = kind.fingerprint(&img)?;
    debug!("{} hash {} for {}", kind, fingerprint, path.display());
    Ok(fingerprint)
}
