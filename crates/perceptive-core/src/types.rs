use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of differing bits between two fingerprints, always in `0..=64`
pub type Distance = u32;

/// Supported perceptual hash algorithms
///
/// The discriminants are stable: `Average` is 0 and `Difference` is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum HashKind {
    /// Average hash (aHash). Fast, but many false positives.
    #[serde(alias = "ahash")]
    Average = 0,

    /// Difference hash (dHash). Fast, with very few false positives.
    #[serde(alias = "dhash")]
    Difference = 1,
}

impl HashKind {
    /// Every supported algorithm, in discriminant order
    pub const ALL: [HashKind; 2] = [HashKind::Average, HashKind::Difference];

    /// Short name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Difference => "difference",
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for HashKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Average),
            1 => Ok(Self::Difference),
            other => Err(Error::InvalidHash(format!("unknown hash id {}", other))),
        }
    }
}

impl FromStr for HashKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "average" | "ahash" => Ok(Self::Average),
            "difference" | "dhash" => Ok(Self::Difference),
            other => Err(Error::InvalidHash(format!("unknown hash name {:?}", other))),
        }
    }
}

impl TryFrom<&str> for HashKind {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// A 64-bit perceptual fingerprint
///
/// Bit `i` holds the decision for grid cell `i` in row-major order, so bit 0
/// is the top-left cell and bit 63 the bottom-right one. The layout is stable,
/// which makes the raw `u64` safe to persist and compare later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// The raw 64-bit value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Calculate the Hamming distance between two fingerprints
    pub fn distance(&self, other: &Fingerprint) -> Distance {
        crate::hashing::hamming_distance(self.0, other.0)
    }

    /// Check if two images are perceptually similar based on a threshold
    pub fn is_similar(&self, other: &Fingerprint, threshold: Distance) -> bool {
        self.distance(other) <= threshold
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Fingerprint> for u64 {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = std::num::ParseIntError;

    /// Parses `0x`-prefixed hex (as printed by `Display`) or a decimal value.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).map(Self),
            None => s.parse::<u64>().map(Self),
        }
    }
}

/// How two images relate, judged from the distance between their fingerprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Similarity {
    /// Distance 0: the images are likely the same
    Identical,

    /// Distance within the variation threshold: likely a variation of each other
    Variation,

    /// Anything further apart: likely different images
    Different,
}

impl Similarity {
    /// Classify a distance. `variation_threshold` is the largest distance
    /// still treated as a variation (10 by default).
    pub fn classify(distance: Distance, variation_threshold: Distance) -> Self {
        match distance {
            0 => Self::Identical,
            d if d <= variation_threshold => Self::Variation,
            _ => Self::Different,
        }
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Identical => "identical",
            Self::Variation => "variation",
            Self::Different => "different",
        };
        f.write_str(label)
    }
}

/// Result of comparing two images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Algorithm used for both images
    pub kind: HashKind,

    /// Fingerprint of the first image
    pub first: Fingerprint,

    /// Fingerprint of the second image
    pub second: Fingerprint,

    /// Hamming distance between the fingerprints
    pub distance: Distance,

    /// Interpretation of `distance`
    pub similarity: Similarity,
}
