//! Error handling for the SHA3-256 oracle.
//!
//! Codes are grouped by layer so callers can tell a hashing contract
//! violation apart from a problem with the byte source:
//!
//! - `1xx`: engine misuse and malformed values (digests, chunk sizes)
//! - `2xx`: the input source could not be opened or read

use thiserror::Error;

/// All error codes surfaced by the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// `update` was called after `finalize` (code 100).
    #[error("E100_UpdateAfterFinalize")]
    E100_UpdateAfterFinalize,

    /// Hex string contains a non-hex character (code 103).
    #[error("E103_InvalidHex")]
    E103_InvalidHex,

    /// Value has the wrong length: (expected, got) (code 104).
    #[error("E104_WrongLength({0}, {1})")]
    E104_WrongLength(/* expected */ String, /* got */ u64),

    /// Chunk size of zero requested for a streaming read (code 105).
    #[error("E105_InvalidChunkSize")]
    E105_InvalidChunkSize,

    /// Input source could not be opened: (path, reason) (code 200).
    #[error("E200_SourceUnavailable({0}, {1})")]
    E200_SourceUnavailable(/* path */ String, /* reason */ String),

    /// Input source failed mid-stream: (path, reason) (code 201).
    #[error("E201_SourceReadFailed({0}, {1})")]
    E201_SourceReadFailed(/* path */ String, /* reason */ String),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_UpdateAfterFinalize => 100,
            ErrorCode::E103_InvalidHex => 103,
            ErrorCode::E104_WrongLength(_, _) => 104,
            ErrorCode::E105_InvalidChunkSize => 105,
            ErrorCode::E200_SourceUnavailable(_, _) => 200,
            ErrorCode::E201_SourceReadFailed(_, _) => 201,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_UpdateAfterFinalize => "E100_UpdateAfterFinalize",
            ErrorCode::E103_InvalidHex => "E103_InvalidHex",
            ErrorCode::E104_WrongLength(_, _) => "E104_WrongLength",
            ErrorCode::E105_InvalidChunkSize => "E105_InvalidChunkSize",
            ErrorCode::E200_SourceUnavailable(_, _) => "E200_SourceUnavailable",
            ErrorCode::E201_SourceReadFailed(_, _) => "E201_SourceReadFailed",
        }
    }

    /// True for errors raised by the byte source rather than the hash engine.
    pub fn is_source_error(&self) -> bool {
        (200..300).contains(&self.code())
    }
}

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, ErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names_agree() {
        let all = [
            ErrorCode::E100_UpdateAfterFinalize,
            ErrorCode::E103_InvalidHex,
            ErrorCode::E104_WrongLength("64".to_string(), 3),
            ErrorCode::E105_InvalidChunkSize,
            ErrorCode::E200_SourceUnavailable("a".to_string(), "b".to_string()),
            ErrorCode::E201_SourceReadFailed("a".to_string(), "b".to_string()),
        ];
        for err in &all {
            assert!(err.name().starts_with(&format!("E{}_", err.code())));
        }
    }

    #[test]
    fn test_source_errors_are_distinct_from_engine_errors() {
        assert!(!ErrorCode::E100_UpdateAfterFinalize.is_source_error());
        assert!(
            ErrorCode::E200_SourceUnavailable("f".to_string(), "missing".to_string())
                .is_source_error()
        );
        assert!(
            ErrorCode::E201_SourceReadFailed("f".to_string(), "eio".to_string()).is_source_error()
        );
    }

    #[test]
    fn test_display_includes_params() {
        let err = ErrorCode::E104_WrongLength("64".to_string(), 10);
        assert_eq!(err.to_string(), "E104_WrongLength(64, 10)");
    }
}
