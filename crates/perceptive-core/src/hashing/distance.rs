use crate::types::Distance;

/// Compute the Hamming distance of two 64-bit values.
///
/// Clears the lowest set bit of `x ^ y` until nothing is left, so the loop
/// runs once per differing bit rather than 64 times.
pub fn hamming_distance(x: u64, y: u64) -> Distance {
    let mut dist = 0;
    let mut val = x ^ y;
    while val != 0 {
        dist += 1;
        val &= val - 1;
    }
    dist
}
