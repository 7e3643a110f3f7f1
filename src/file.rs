//! Hashing byte sources in fixed-size chunks.
//!
//! A source is read to EOF, each non-empty chunk is fed to the engine with
//! one `update` call, and the digest is produced with a single `finalize`.
//! Chunk size only affects performance, never the digest.
//!
//! Failures here are always source errors (`E2xx`), kept apart from the
//! engine's own contract errors.

use crate::digest::Digest;
use crate::error::{ErrorCode, OracleResult};
use crate::keccak::Sha3_256;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, instrument};

/// Default read chunk size in bytes.
pub const BUFFER_SIZE: usize = 4096;

/// Hash everything `reader` yields, reading `chunk_size` bytes at a time.
///
/// `source` names the reader in errors and logs.
pub fn hash_reader<R: Read>(
    mut reader: R,
    chunk_size: usize,
    source: &str,
) -> OracleResult<Digest> {
    if chunk_size == 0 {
        return Err(ErrorCode::E105_InvalidChunkSize);
    }

    let mut hasher = Sha3_256::new();
    let mut buffer = vec![0u8; chunk_size];
    let mut total: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(ErrorCode::E201_SourceReadFailed(
                    source.to_string(),
                    e.to_string(),
                ));
            }
        };
        hasher.update(&buffer[..read])?;
        total += read as u64;
    }

    let digest = hasher.finalize();
    debug!(source = source, bytes = total, digest = %digest, "hashed source");
    Ok(digest)
}

/// SHA3-256 of the file at `path`, read in [`BUFFER_SIZE`] chunks.
pub fn hash_file<P: AsRef<Path>>(path: P) -> OracleResult<Digest> {
    hash_file_with_chunk_size(path, BUFFER_SIZE)
}

/// SHA3-256 of the file at `path`, read `chunk_size` bytes at a time.
#[instrument(skip_all, fields(path = %path.as_ref().display(), chunk_size = chunk_size))]
pub fn hash_file_with_chunk_size<P: AsRef<Path>>(
    path: P,
    chunk_size: usize,
) -> OracleResult<Digest> {
    let path = path.as_ref();
    let name = path.display().to_string();

    let file = File::open(path)
        .map_err(|e| ErrorCode::E200_SourceUnavailable(name.clone(), e.to_string()))?;

    hash_reader(file, chunk_size, &name)
}
