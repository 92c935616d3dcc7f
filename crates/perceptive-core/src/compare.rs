//! Image comparison: one-shot [`compare_images`] and the batch [`Comparator`].

use image::DynamicImage;
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Comparison, Distance, Fingerprint, HashKind, Similarity};

/// Compare two images using the given perceptual hash algorithm.
///
/// `kind` may be a [`HashKind`] or any external representation of one (a `u8`
/// id, a name); an unknown kind fails with [`Error::InvalidHash`] before any
/// image is hashed.
///
/// `img1` is hashed first and its error returned immediately, so when both
/// images are unusable the error reported belongs to `img1`.
pub fn compare_images<K>(img1: &DynamicImage, img2: &DynamicImage, kind: K) -> Result<Distance>
where
    K: TryInto<HashKind>,
    Error: From<K::Error>,
{
    let kind: HashKind = kind.try_into()?;
    let (a, b) = fingerprint_pair(img1, img2, kind)?;
    Ok(a.distance(&b))
}

fn fingerprint_pair(
    img1: &DynamicImage,
    img2: &DynamicImage,
    kind: HashKind,
) -> Result<(Fingerprint, Fingerprint)> {
    let a = kind.fingerprint(img1)?;
    let b = kind.fingerprint(img2)?;
    Ok((a, b))
}

/// Batch comparisons on a dedicated thread pool
pub struct Comparator {
    config: Config,
    pool: ThreadPool,
}

impl Comparator {
    /// Create a comparator, validating `config` and sizing the pool from
    /// `config.threads` (0 = one thread per CPU).
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let num_threads = if config.threads == 0 {
            num_cpus::get()
        } else {
            config.threads
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("perceptive-{}", i))
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build thread pool: {}", e)))?;

        debug!(
            "comparator ready: {} hash, {} threads, variation threshold {}",
            config.hash_kind, num_threads, config.variation_threshold
        );
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare two images with the configured algorithm
    pub fn compare(&self, img1: &DynamicImage, img2: &DynamicImage) -> Result<Comparison> {
        let kind = self.config.hash_kind;
        let (first, second) = fingerprint_pair(img1, img2, kind)?;
        Ok(self.comparison(kind, first, second))
    }

    /// Compare two previously stored fingerprints
    pub fn compare_fingerprints(&self, first: Fingerprint, second: Fingerprint) -> Comparison {
        self.comparison(self.config.hash_kind, first, second)
    }

    /// Fingerprint every image in parallel. Results keep input order.
    pub fn fingerprint_all(&self, images: &[DynamicImage]) -> Vec<Result<Fingerprint>> {
        let kind = self.config.hash_kind;
        debug!("fingerprinting {} images with {} hash", images.len(), kind);
        self.pool
            .install(|| images.par_iter().map(|img| kind.fingerprint(img)).collect())
    }

    /// Compare every pair in parallel. Results keep input order and a failed
    /// pair does not affect the others.
    pub fn compare_pairs(&self, pairs: &[(DynamicImage, DynamicImage)]) -> Vec<Result<Comparison>> {
        debug!("comparing {} image pairs", pairs.len());
        self.pool.install(|| {
            pairs
                .par_iter()
                .map(|(img1, img2)| self.compare(img1, img2))
                .collect()
        })
    }

    fn comparison(&self, kind: HashKind, first: Fingerprint, second: Fingerprint) -> Comparison {
        let distance = first.distance(&second);
        Comparison {
            kind,
            first,
            second,
            distance,
            similarity: Similarity::classify(distance, self.config.variation_threshold),
        }
    }
}
