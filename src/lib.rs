//! SHA3 Oracle - SHA3-256 over the Keccak-f[1600] sponge.
//!
//! This crate computes SHA3-256 digests that are bit-identical to FIPS 202,
//! incrementally or in one call, and hashes files in fixed-size chunks.
//!
//! # Architecture
//!
//! - [`keccak`] - Keccak-f[1600] permutation and the SHA3-256 sponge engine
//! - [`digest`] - the 32-byte digest value and its hex form
//! - [`file`] - chunked hashing of files and other readers
//! - [`conformance`] - known-answer corpus runner
//! - [`error`] - error codes
//!
//! # Example
//!
//! ```
//! use sha3_oracle::Sha3_256;
//!
//! let mut hasher = Sha3_256::new();
//! hasher.update(b"a").unwrap();
//! hasher.update(b"bc").unwrap();
//! assert_eq!(
//!     hasher.finalize().to_hex(),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
//! );
//! ```

// Digest-critical code must avoid unwrap/expect/panic in library code.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod digest;
pub mod error;
pub mod file;
pub mod keccak;

// Re-export commonly used types
pub use conformance::CorpusRunner;
pub use digest::Digest;
pub use error::{ErrorCode, OracleResult};
pub use file::{hash_file, hash_reader, BUFFER_SIZE};
pub use keccak::{sha3_256, Sha3_256};
