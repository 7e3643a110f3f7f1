//! Keccak-f[1600] permutation.
//!
//! The permutation applies 24 rounds to the 25-lane state. Each round runs
//! five steps in a fixed order, every step finishing before the next starts:
//!
//! 1. Theta - XOR each lane with the parities of two neighbouring columns
//! 2. Rho - rotate each lane by its fixed offset
//! 3. Pi - move lane (x, y) to (y, 2x + 3y)
//! 4. Chi - non-linear row mixing
//! 5. Iota - XOR the round constant into lane (0, 0)
//!
//! Rho and Pi are fused into one pass that reads the post-theta state and
//! writes a scratch buffer, so no lane is overwritten before it is read.

use super::lanes::Lanes;
use super::params::{LANES, ROTATION_OFFSETS, ROUNDS, ROUND_CONSTANTS};

/// Theta: column parity diffusion.
#[inline]
pub(crate) fn theta(a: &mut Lanes) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }
}

/// Rho and Pi: rotate every lane, then relocate it into `b`.
#[inline]
pub(crate) fn rho_pi(a: &Lanes) -> Lanes {
    let mut b = [0u64; LANES];
    for x in 0..5 {
        for y in 0..5 {
            let src = x + 5 * y;
            let dst = y + 5 * ((2 * x + 3 * y) % 5);
            b[dst] = a[src].rotate_left(ROTATION_OFFSETS[src]);
        }
    }
    b
}

/// Chi: `a[x] = b[x] ^ (!b[x+1] & b[x+2])` along each row.
#[inline]
pub(crate) fn chi(b: &Lanes, a: &mut Lanes) {
    for row in (0..LANES).step_by(5) {
        for x in 0..5 {
            a[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
        }
    }
}

/// Iota: break round symmetry on lane (0, 0).
#[inline]
pub(crate) fn iota(a: &mut Lanes, round: usize) {
    a[0] ^= ROUND_CONSTANTS[round];
}

/// One full round.
#[inline]
fn round(a: &mut Lanes, r: usize) {
    theta(a);
    let b = rho_pi(a);
    chi(&b, a);
    iota(a, r);
}

/// Apply Keccak-f[1600] to `a` in place.
pub fn keccak_f(a: &mut Lanes) {
    for r in 0..ROUNDS {
        round(a, r);
    }
}

/// Keccak-f[1600] on a copy of `state`.
pub fn permute(state: &Lanes) -> Lanes {
    let mut st = *state;
    keccak_f(&mut st);
    st
}

/// Keccak-f[1600] with the state recorded after every round.
///
/// Returns (final_state, round_traces) where `round_traces[i]` is the state
/// after round `i`. Used to localize a divergence against published
/// intermediate values.
pub fn permute_with_trace(state: &Lanes) -> (Lanes, Vec<Lanes>) {
    let mut st = *state;
    let mut traces = Vec::with_capacity(ROUNDS);

    for r in 0..ROUNDS {
        round(&mut st, r);
        traces.push(st);
    }

    (st, traces)
}
