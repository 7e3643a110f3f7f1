//! Keccak-f[1600] permutation and the SHA3-256 sponge built on it.
//!
//! The module is layered bottom-up:
//!
//! - [`params`] - fixed round constants, rotation offsets and sponge geometry
//! - [`lanes`] - little-endian conversion between the byte and lane views
//! - [`permute`] - the 24-round Keccak-f[1600] permutation
//! - [`state`] - the 200-byte state buffer with its two views
//! - [`sponge`] - the absorb/pad/squeeze engine ([`Sha3_256`])

pub mod lanes;
mod params;
mod permute;
mod sponge;
mod state;

pub use lanes::Lanes;
pub use params::{
    CAPACITY, DIGEST_SIZE, DOMAIN_SUFFIX, FINAL_BIT, LANES, LANE_BYTES, RATE, ROTATION_OFFSETS,
    ROUNDS, ROUND_CONSTANTS, STATE_BYTES,
};
pub use permute::{keccak_f, permute, permute_with_trace};
pub use sponge::{sha3_256, Sha3_256};
pub use state::KeccakState;
