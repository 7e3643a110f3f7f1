//! Conversion between the byte view and the lane view of the state.
//!
//! Lane `i` occupies bytes `8*i .. 8*i + 8` and is stored little-endian:
//! byte 0 of a lane is its least significant byte. Both directions are
//! exact inverses and never allocate.

use super::params::{LANES, LANE_BYTES, STATE_BYTES};

/// The state as 25 lanes, indexed by `x + 5 * y`.
pub type Lanes = [u64; LANES];

/// Read one little-endian lane from the first 8 bytes of `x`.
#[inline]
pub fn load64_le(x: &[u8]) -> u64 {
    debug_assert!(x.len() >= LANE_BYTES);
    x.iter()
        .take(LANE_BYTES)
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)))
}

/// Write `u` little-endian into the first 8 bytes of `x`.
#[inline]
pub fn store64_le(x: &mut [u8], u: u64) {
    debug_assert!(x.len() >= LANE_BYTES);
    for (b, le) in x.iter_mut().zip(u.to_le_bytes()) {
        *b = le;
    }
}

/// Interpret a 200-byte state as 25 little-endian lanes.
pub fn bytes_to_lanes(bytes: &[u8; STATE_BYTES]) -> Lanes {
    let mut lanes = [0u64; LANES];
    for (lane, chunk) in lanes.iter_mut().zip(bytes.chunks_exact(LANE_BYTES)) {
        *lane = load64_le(chunk);
    }
    lanes
}

/// Write 25 lanes back into a 200-byte state.
pub fn lanes_to_bytes(lanes: &Lanes, bytes: &mut [u8; STATE_BYTES]) {
    for (chunk, &lane) in bytes.chunks_exact_mut(LANE_BYTES).zip(lanes.iter()) {
        store64_le(chunk, lane);
    }
}
