//! Keccak-f[1600] constants and the SHA3-256 sponge geometry.

/// Size of the permutation state in bytes (1600 bits).
pub const STATE_BYTES: usize = 200;

/// Number of 64-bit lanes in the state (5 x 5).
pub const LANES: usize = 25;

/// Bytes per lane.
pub const LANE_BYTES: usize = 8;

/// Rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Sponge rate for SHA3-256 in bytes (1088 bits).
pub const RATE: usize = 136;

/// Sponge capacity for SHA3-256 in bytes (512 bits).
pub const CAPACITY: usize = STATE_BYTES - RATE;

/// SHA3-256 output length in bytes.
pub const DIGEST_SIZE: usize = 32;

/// SHA-3 domain separation suffix, merged with the first padding bit.
pub const DOMAIN_SUFFIX: u8 = 0x06;

/// Last bit of the `10*1` padding, placed in the final byte of the rate.
pub const FINAL_BIT: u8 = 0x80;

/// Iota round constants, consumed in order by rounds 0..24.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets indexed by lane `x + 5 * y`.
#[rustfmt::skip]
pub const ROTATION_OFFSETS: [u32; LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];
