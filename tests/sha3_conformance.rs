//! SHA3-256 conformance tests.
//!
//! Known answers come from the FIPS 202 example values; the remaining tests
//! pin down the sponge state machine and streaming behaviour.

use proptest::prelude::*;
use sha3_oracle::keccak::{CAPACITY, DIGEST_SIZE, RATE, STATE_BYTES};
use sha3_oracle::{sha3_256, Digest, ErrorCode, Sha3_256};
use std::thread;

fn hex_digest(data: &[u8]) -> String {
    sha3_256(data).to_hex()
}

// =============================================================================
// Known answers
// =============================================================================

/// (message, expected digest)
const KNOWN_ANSWERS: &[(&[u8], &str)] = &[
    (
        b"",
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    ),
    (
        b"abc",
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    ),
    (
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
    ),
    (
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "916f6061fe879741ca6469b43971dfdb28b1a32dc36cb3254e812be27aad1d18",
    ),
    (
        b"The quick brown fox jumps over the lazy dog",
        "69070dda01975c8c120c3aada1b282394e7f032fa9cf32f4cb2259a0897dfc04",
    ),
];

#[test]
fn known_answers() {
    for (msg, expected) in KNOWN_ANSWERS {
        assert_eq!(
            hex_digest(msg),
            *expected,
            "digest mismatch for {:?}",
            String::from_utf8_lossy(msg)
        );
    }
}

#[test]
fn known_answer_million_a() {
    let mut hasher = Sha3_256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    assert_eq!(
        hasher.finalize().to_hex(),
        "5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1"
    );
}

#[test]
fn known_answers_around_rate_boundary() {
    // one free byte, exactly one block, one byte into the next block
    let cases = [
        (135, "7d080d7ba978a75c8a7d1f9be566c859084509c9c2b4928435c225d5777d98e3"),
        (136, "e772c9cf9eb9c991cdfcf125001b454fdbc0a95f188d1b4c844aa032ad6e075e"),
        (137, "9ed57188470a83b758cd71c00c6cc3beb984b36a6c35864b4e53017b24cf5699"),
    ];
    for (len, expected) in cases {
        assert_eq!(hex_digest(&vec![0u8; len]), expected, "len {}", len);
    }
}

#[test]
fn known_answer_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).collect();
    assert_eq!(
        hex_digest(&data),
        "9b04c091da96b997afb8f2585d608aebe9c4a904f7d52c8f28c7e4d2dd9fba5f"
    );
}

// =============================================================================
// Parameters
// =============================================================================

#[test]
fn sponge_geometry() {
    assert_eq!(STATE_BYTES, 200);
    assert_eq!(RATE, 136);
    assert_eq!(CAPACITY, 64);
    assert_eq!(DIGEST_SIZE, 32);
}

#[test]
fn digest_is_always_32_bytes() {
    for len in [0usize, 1, 31, 32, 135, 136, 137, 1000, 10_000] {
        let digest = sha3_256(vec![0xa5u8; len]);
        assert_eq!(digest.as_bytes().len(), 32);
        assert_eq!(digest.to_hex().len(), 64);
    }
}

// =============================================================================
// State machine
// =============================================================================

#[test]
fn update_after_finalize_is_rejected() {
    let mut hasher = Sha3_256::new();
    hasher.update(b"abc").unwrap();
    hasher.finalize();
    assert_eq!(
        hasher.update(b"more"),
        Err(ErrorCode::E100_UpdateAfterFinalize)
    );
}

#[test]
fn rejected_update_leaves_digest_unchanged() {
    let mut hasher = Sha3_256::new();
    hasher.update(b"abc").unwrap();
    let first = hasher.finalize();
    let _ = hasher.update(b"more");
    assert_eq!(hasher.finalize(), first);
    assert_eq!(first.to_hex(), KNOWN_ANSWERS[1].1);
}

#[test]
fn finalize_twice_returns_same_digest() {
    let mut hasher = Sha3_256::new();
    hasher.update(&[0x42; 500]).unwrap();
    let a = hasher.finalize();
    let b = hasher.finalize();
    assert_eq!(a, b);
}

#[test]
fn reset_matches_fresh_engine() {
    let mut reused = Sha3_256::new();
    reused.update(&[9u8; 777]).unwrap();
    reused.finalize();
    reused.reset();

    let mut fresh = Sha3_256::new();
    for hasher in [&mut reused, &mut fresh] {
        hasher.update(b"The quick brown fox ").unwrap();
        hasher.update(b"jumps over the lazy dog").unwrap();
    }
    assert_eq!(reused.finalize(), fresh.finalize());
    assert_eq!(reused.finalize().to_hex(), KNOWN_ANSWERS[4].1);
}

#[test]
fn default_is_fresh() {
    let mut hasher = Sha3_256::default();
    assert!(!hasher.is_finalized());
    assert_eq!(hasher.rate_pos(), 0);
    assert_eq!(hasher.finalize().to_hex(), KNOWN_ANSWERS[0].1);
}

// =============================================================================
// Streaming and isolation
// =============================================================================

#[test]
fn streaming_on_rate_boundaries() {
    let data: Vec<u8> = (0..(3 * RATE + 5)).map(|i| (i * 7 % 256) as u8).collect();
    let expected = sha3_256(&data);

    for chunk in [1, RATE - 1, RATE, RATE + 1, 2 * RATE] {
        let mut hasher = Sha3_256::new();
        for part in data.chunks(chunk) {
            hasher.update(part).unwrap();
            hasher.update(&[]).unwrap();
        }
        assert_eq!(hasher.finalize(), expected, "chunk size {}", chunk);
    }
}

#[test]
fn independent_engines_across_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|seed| {
            thread::spawn(move || {
                let data = vec![seed; 1000 + seed as usize];
                let mut hasher = Sha3_256::new();
                for part in data.chunks(33) {
                    hasher.update(part).unwrap();
                }
                (seed, hasher.finalize())
            })
        })
        .collect();

    for handle in handles {
        let (seed, digest) = handle.join().unwrap();
        assert_eq!(digest, sha3_256(vec![seed; 1000 + seed as usize]));
    }
}

#[test]
fn interleaved_engines_do_not_interfere() {
    let mut a = Sha3_256::new();
    let mut b = Sha3_256::new();
    for _ in 0..10 {
        a.update(b"aaaaaaaaaaaaaaaaaaaa").unwrap();
        b.update(b"b").unwrap();
    }
    assert_eq!(a.finalize(), sha3_256([b'a'; 200]));
    assert_eq!(b.finalize(), sha3_256([b'b'; 10]));
}

proptest! {
    #[test]
    fn split_points_do_not_change_digest(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        cuts in proptest::collection::vec(any::<usize>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Sha3_256::new();
        let mut start = 0;
        for p in points {
            hasher.update(&data[start..p]).unwrap();
            start = p;
        }
        hasher.update(&data[start..]).unwrap();

        prop_assert_eq!(hasher.finalize(), sha3_256(&data));
    }

    #[test]
    fn hashing_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..400)) {
        prop_assert_eq!(sha3_256(&data), sha3_256(&data));
    }

    #[test]
    fn digest_hex_round_trips(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let digest = sha3_256(&data);
        prop_assert_eq!(Digest::from_hex(&digest.to_hex()).unwrap(), digest);
    }
}
