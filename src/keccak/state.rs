//! The 1600-bit Keccak state.
//!
//! One owned `[u8; 200]` buffer backs both views: the byte view used by the
//! sponge for absorbing and squeezing, and the lane view used by the
//! permutation. The lane view is computed on demand (see [`super::lanes`])
//! rather than stored alongside, so the two can never disagree.

use super::lanes::{bytes_to_lanes, lanes_to_bytes, Lanes};
use super::params::STATE_BYTES;
use super::permute::keccak_f;

/// Keccak-f[1600] state in little-endian lane order.
#[derive(Clone, PartialEq, Eq)]
pub struct KeccakState {
    bytes: [u8; STATE_BYTES],
}

impl KeccakState {
    /// All-zero state.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; STATE_BYTES],
        }
    }

    /// Byte view.
    pub fn as_bytes(&self) -> &[u8; STATE_BYTES] {
        &self.bytes
    }

    /// XOR `value` into byte `index`.
    #[inline]
    pub(crate) fn xor_byte(&mut self, index: usize, value: u8) {
        self.bytes[index] ^= value;
    }

    /// XOR `data` into the bytes starting at `offset`.
    #[inline]
    pub(crate) fn xor_bytes(&mut self, offset: usize, data: &[u8]) {
        for (dst, &src) in self.bytes[offset..offset + data.len()].iter_mut().zip(data) {
            *dst ^= src;
        }
    }

    /// Lane view.
    pub fn lanes(&self) -> Lanes {
        bytes_to_lanes(&self.bytes)
    }

    /// Overwrite the state from a lane view.
    pub fn set_lanes(&mut self, lanes: &Lanes) {
        lanes_to_bytes(lanes, &mut self.bytes);
    }

    /// Run Keccak-f[1600] over the state.
    pub fn permute(&mut self) {
        let mut lanes = self.lanes();
        keccak_f(&mut lanes);
        self.set_lanes(&lanes);
    }

    /// Clear every byte back to zero.
    pub fn zeroize(&mut self) {
        self.bytes.fill(0);
    }
}

impl Default for KeccakState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeccakState")
            .field("lanes", &self.lanes())
            .finish()
    }
}
