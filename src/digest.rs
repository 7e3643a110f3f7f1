//! The 32-byte SHA3-256 digest value.

use crate::error::{ErrorCode, OracleResult};
use crate::keccak::DIGEST_SIZE;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A SHA3-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(pub [u8; DIGEST_SIZE]);

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Digest {
    /// Parse from a hex string (64 hex chars, `0x` prefix tolerated).
    pub fn from_hex(hex_str: &str) -> OracleResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);

        if hex_str.len() != 2 * DIGEST_SIZE {
            return Err(ErrorCode::E104_WrongLength(
                (2 * DIGEST_SIZE).to_string(),
                hex_str.len() as u64,
            ));
        }

        let mut arr = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(hex_str, &mut arr).map_err(|_| ErrorCode::E103_InvalidHex)?;
        Ok(Digest(arr))
    }

    /// Lowercase hex, two digits per byte, high nibble first.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(arr: [u8; DIGEST_SIZE]) -> Self {
        Digest(arr)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a";

    #[test]
    fn test_hex_is_lowercase_high_nibble_first() {
        let mut arr = [0u8; DIGEST_SIZE];
        arr[0] = 0xab;
        arr[31] = 0x0f;
        let hex = Digest(arr).to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("ab00"));
        assert!(hex.ends_with("000f"));
    }

    #[test]
    fn test_from_hex_accepts_prefix() {
        let a = Digest::from_hex(EMPTY).unwrap();
        let b = Digest::from_hex(&format!("0x{}", EMPTY)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), EMPTY);
    }

    #[test]
    fn test_from_hex_accepts_uppercase() {
        let d = Digest::from_hex(&EMPTY.to_uppercase()).unwrap();
        assert_eq!(d.to_hex(), EMPTY);
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert_eq!(
            Digest::from_hex("abcd"),
            Err(ErrorCode::E104_WrongLength("64".to_string(), 4))
        );
    }

    #[test]
    fn test_from_hex_invalid_char() {
        let bad = format!("zz{}", &EMPTY[2..]);
        assert_eq!(Digest::from_hex(&bad), Err(ErrorCode::E103_InvalidHex));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let d = Digest::from_hex(EMPTY).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{}\"", EMPTY));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
