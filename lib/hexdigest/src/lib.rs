//! # hexdigest
//!
//! Pure Rust SHA-256 and Keccak-256 with lowercase hex output.
//!
//! ## Algorithms
//!
//! - **SHA-256**: FIPS 180-4, 64-byte blocks
//! - **Keccak-256**: original Keccak padding (`0x01`), 136-byte rate. This is
//!   the Ethereum hash, not NIST SHA3-256.
//!
//! ## Design
//!
//! - `no_std`; the hex-string functions need the `alloc` feature
//! - No dynamic allocation in the engines
//! - The `simd` feature swaps in a SHA-NI compression function at build time
//!
//! ```
//! assert_eq!(
//!     hexdigest::sha256(b"abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
use alloc::string::String;

use core::fmt;

pub mod algorithm;
#[cfg(feature = "alloc")]
pub mod encode;
pub mod error;
pub mod keccak256;
pub mod sha256;

pub use algorithm::Algorithm;
pub use error::HashError;

/// Digest size in bytes, shared by both algorithms.
pub const DIGEST_SIZE: usize = 32;

/// SHA-256 block size in bytes.
pub const SHA256_BLOCK_SIZE: usize = sha256::BLOCK_SIZE;

/// Keccak-256 sponge rate in bytes.
pub const KECCAK256_RATE: usize = keccak256::RATE;

/// Block engine interface shared by both hashers.
pub(crate) trait Hash: Sized {
    /// Name used in log records.
    const NAME: &'static str;

    /// Bytes consumed by one transform.
    const BLOCK_SIZE: usize;

    /// Create a context in its initial state.
    fn new() -> Self;

    /// Absorb more message bytes.
    fn update(&mut self, data: &[u8]);

    /// Pad, run the last transform(s) and serialize the state.
    fn finalize(self) -> Digest;

    /// One-shot digest of a complete message.
    fn digest(data: &[u8]) -> Digest {
        log::trace!("{}: digesting {} bytes", Self::NAME, data.len());
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

/// A 32-byte digest.
///
/// Formats as lowercase hex through `Display` and `LowerHex`.
#[derive(Clone, Copy, PartialEq, Eq, core::hash::Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consume the digest, returning the raw bytes.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Lowercase hex rendering, always 64 characters.
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        encode::to_hex(&self.0)
    }

    /// Copy the digest into the front of `out`.
    ///
    /// Fails without writing anything if `out` is shorter than [`DIGEST_SIZE`].
    pub fn copy_into(&self, out: &mut [u8]) -> Result<(), HashError> {
        if out.len() < DIGEST_SIZE {
            return Err(HashError::BufferTooSmall {
                needed: DIGEST_SIZE,
                actual: out.len(),
            });
        }
        out[..DIGEST_SIZE].copy_from_slice(&self.0);
        Ok(())
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

/// SHA-256 of `message` as 64 lowercase hex characters.
#[cfg(feature = "alloc")]
pub fn sha256(message: &[u8]) -> String {
    sha256_digest(message).to_hex()
}

/// SHA-256 of `message` as raw bytes.
pub fn sha256_digest(message: &[u8]) -> Digest {
    sha256::Sha256::digest(message)
}

/// Write the SHA-256 of `message` into `out`.
pub fn sha256_into(message: &[u8], out: &mut [u8]) -> Result<(), HashError> {
    sha256_digest(message).copy_into(out)
}

/// Keccak-256 of `message` as 64 lowercase hex characters.
#[cfg(feature = "alloc")]
pub fn keccak256(message: &[u8]) -> String {
    keccak256_digest(message).to_hex()
}

/// Keccak-256 of `message` as raw bytes.
pub fn keccak256_digest(message: &[u8]) -> Digest {
    keccak256::Keccak256::digest(message)
}

/// Write the Keccak-256 of `message` into `out`.
pub fn keccak256_into(message: &[u8], out: &mut [u8]) -> Result<(), HashError> {
    keccak256_digest(message).copy_into(out)
}

#[cfg(test)]
pub(crate) mod tests_support {
    use crate::{Digest, DIGEST_SIZE};

    pub fn digest_from_hex(s: &str) -> Digest {
        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s, &mut bytes).unwrap();
        Digest::from(bytes)
    }

    /// `i % 251` for each index, so no block repeats the previous one.
    pub fn pattern<const N: usize>() -> [u8; N] {
        core::array::from_fn(|i| (i % 251) as u8)
    }
}
