//! Perceptual fingerprints for finding near-duplicate images.
//!
//! This library provides:
//! - Average hash and difference hash, each a 64-bit fingerprint
//! - Hamming distance between fingerprints
//! - Image comparison, one-shot or batched on a thread pool
//!
//! Image decoding, grayscale conversion and resampling come from the `image`
//! crate; everything here is pure computation with no shared state.
//!
//! ```no_run
//! use perceptive_core::{compare_images, HashKind, Similarity};
//!
//! let a = image::open("lena.jpg").unwrap();
//! let b = image::open("lena_pink.jpg").unwrap();
//!
//! let distance = compare_images(&a, &b, HashKind::Difference).unwrap();
//! match Similarity::classify(distance, 10) {
//!     Similarity::Identical => println!("likely the same"),
//!     Similarity::Variation => println!("likely a variation"),
//!     Similarity::Different => println!("likely different"),
//! }
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use compare::{compare_images, Comparator};
pub use config::*;
pub use error::{Error, Result};
pub use hashing::{
    average_hash, difference_hash, fingerprint_from_file, hamming_distance, HASH_SIZE,
};
pub use types::*;

// -- Public Modules --
pub mod compare;
pub mod config;
pub mod hashing;
pub mod logging;
pub mod types;
