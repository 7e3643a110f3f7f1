//! Known-answer conformance testing.
//!
//! Vectors live in a JSON corpus (see [`corpus`]); the published SHA3-256
//! and Keccak-f[1600] answers ship with the crate as [`BUNDLED_CORPUS`].

pub mod corpus;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, TestResult, TestVector};

/// The corpus bundled with the crate.
pub const BUNDLED_CORPUS: &str = include_str!("../../vectors/sha3_256.json");

/// Runner over [`BUNDLED_CORPUS`].
pub fn bundled() -> Result<CorpusRunner, String> {
    CorpusRunner::from_json(BUNDLED_CORPUS)
}
