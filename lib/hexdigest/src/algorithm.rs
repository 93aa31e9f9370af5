//! Runtime selection between the two engines.

#[cfg(feature = "alloc")]
use alloc::string::String;

use core::fmt;
use core::str::FromStr;

use crate::keccak256::Keccak256;
use crate::sha256::Sha256;
use crate::{Digest, Hash, HashError};

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// SHA-256 (FIPS 180-4)
    Sha256,
    /// Keccak-256 with `0x01` padding
    Keccak256,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Keccak256];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => Sha256::NAME,
            Algorithm::Keccak256 => Keccak256::NAME,
        }
    }

    /// Bytes consumed per transform: 64 for SHA-256, 136 for Keccak-256.
    pub const fn block_size(self) -> usize {
        match self {
            Algorithm::Sha256 => Sha256::BLOCK_SIZE,
            Algorithm::Keccak256 => Keccak256::BLOCK_SIZE,
        }
    }

    /// Raw digest of `message`.
    pub fn digest(self, message: &[u8]) -> Digest {
        match self {
            Algorithm::Sha256 => Sha256::digest(message),
            Algorithm::Keccak256 => Keccak256::digest(message),
        }
    }

    /// Lowercase hex digest of `message`.
    #[cfg(feature = "alloc")]
    pub fn hash(self, message: &[u8]) -> String {
        self.digest(message).to_hex()
    }

    /// Write the digest of `message` into the front of `out`.
    pub fn digest_into(self, message: &[u8], out: &mut [u8]) -> Result<(), HashError> {
        self.digest(message).copy_into(out)?;
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    /// Accepts `sha256`, `sha-256`, `keccak256` and `keccak-256`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("sha256") || s.eq_ignore_ascii_case("sha-256") {
            Ok(Algorithm::Sha256)
        } else if s.eq_ignore_ascii_case("keccak256") || s.eq_ignore_ascii_case("keccak-256") {
            Ok(Algorithm::Keccak256)
        } else {
            Err(HashError::UnknownAlgorithm)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("sha256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
        assert_eq!("SHA-256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
        assert_eq!(" Keccak256 ".parse::<Algorithm>(), Ok(Algorithm::Keccak256));
        assert_eq!("keccak-256".parse::<Algorithm>(), Ok(Algorithm::Keccak256));
        assert_eq!("sha3-256".parse::<Algorithm>(), Err(HashError::UnknownAlgorithm));
    }

    #[test]
    fn name_round_trips_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn block_sizes() {
        assert_eq!(Algorithm::Sha256.block_size(), 64);
        assert_eq!(Algorithm::Keccak256.block_size(), 136);
    }

    #[test]
    fn dispatch_matches_free_functions() {
        let message = b"dispatch";
        assert_eq!(Algorithm::Sha256.digest(message), crate::sha256_digest(message));
        assert_eq!(Algorithm::Keccak256.digest(message), crate::keccak256_digest(message));
        assert_ne!(Algorithm::Sha256.digest(message), Algorithm::Keccak256.digest(message));
    }

    #[test]
    fn digest_into_short_buffer() {
        let mut out = [0u8; 16];
        assert_eq!(
            Algorithm::Keccak256.digest_into(b"x", &mut out),
            Err(HashError::BufferTooSmall { needed: 32, actual: 16 })
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn error_messages() {
        use alloc::string::ToString;

        assert_eq!(
            HashError::BufferTooSmall { needed: 32, actual: 16 }.to_string(),
            "output buffer too small: need 32 bytes, got 16"
        );
        assert_eq!(HashError::UnknownAlgorithm.to_string(), "unknown hash algorithm");
        assert_eq!(Algorithm::Keccak256.to_string(), "keccak256");
    }
}
