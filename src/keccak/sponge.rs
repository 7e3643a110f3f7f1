//! SHA3-256 sponge construction.
//!
//! Input bytes are XORed into the first [`RATE`] bytes of the state; every
//! time the rate fills, Keccak-f[1600] runs and the cursor returns to zero.
//! Finalization applies the SHA-3 suffix and `10*1` padding, runs one last
//! permutation and reads the digest from the front of the rate. A 32-byte
//! output fits in one rate block, so a single squeeze is enough.

use super::params::{DIGEST_SIZE, DOMAIN_SUFFIX, FINAL_BIT, RATE};
use super::state::KeccakState;
use crate::digest::Digest;
use crate::error::{ErrorCode, OracleResult};

/// Incremental SHA3-256 hasher.
///
/// Lifecycle: `Absorbing` (after `new`/`reset`) -> `Finalized` (after
/// `finalize`). `update` is only accepted while absorbing; `finalize` is
/// idempotent; `reset` returns to a fresh absorbing state from anywhere.
#[derive(Debug, Clone)]
pub struct Sha3_256 {
    state: KeccakState,
    /// Bytes absorbed into the current rate block.
    rate_pos: usize,
    /// Set once padding has been applied and the digest squeezed.
    digest: Option<Digest>,
}

impl Sha3_256 {
    /// Create a hasher in the absorbing state.
    pub fn new() -> Self {
        Self {
            state: KeccakState::new(),
            rate_pos: 0,
            digest: None,
        }
    }

    /// Zero the state and reopen the absorbing phase.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.rate_pos = 0;
        self.digest = None;
    }

    /// Absorb `data`.
    ///
    /// Fails with [`ErrorCode::E100_UpdateAfterFinalize`] once the hasher has
    /// been finalized; the state is not touched in that case.
    pub fn update(&mut self, data: &[u8]) -> OracleResult<()> {
        if self.digest.is_some() {
            return Err(ErrorCode::E100_UpdateAfterFinalize);
        }
        self.absorb(data);
        Ok(())
    }

    /// XOR `data` into the rate, permuting whenever a block fills.
    fn absorb(&mut self, data: &[u8]) {
        let mut input = data;
        while !input.is_empty() {
            let take = (RATE - self.rate_pos).min(input.len());
            let (block, rest) = input.split_at(take);
            self.state.xor_bytes(self.rate_pos, block);
            self.rate_pos += take;
            input = rest;

            if self.rate_pos == RATE {
                self.state.permute();
                self.rate_pos = 0;
            }
        }
    }

    /// Pad, permute and return the digest.
    ///
    /// Calling this again returns the same digest without touching the state.
    pub fn finalize(&mut self) -> Digest {
        if let Some(digest) = self.digest {
            return digest;
        }

        // both XORs land on byte 135 when rate_pos == 135, giving 0x86
        self.state.xor_byte(self.rate_pos, DOMAIN_SUFFIX);
        self.state.xor_byte(RATE - 1, FINAL_BIT);
        self.state.permute();

        let mut out = [0u8; DIGEST_SIZE];
        out.copy_from_slice(&self.state.as_bytes()[..DIGEST_SIZE]);
        let digest = Digest(out);
        self.digest = Some(digest);
        digest
    }

    /// True once `finalize` has run.
    pub fn is_finalized(&self) -> bool {
        self.digest.is_some()
    }

    /// Bytes absorbed into the current rate block, in `0..RATE`.
    pub fn rate_pos(&self) -> usize {
        self.rate_pos
    }
}

impl Default for Sha3_256 {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA3-256 of `data` in one call.
pub fn sha3_256(data: impl AsRef<[u8]>) -> Digest {
    let mut hasher = Sha3_256::new();
    hasher.absorb(data.as_ref());
    hasher.finalize()
}
