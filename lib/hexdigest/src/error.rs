//! Error types.

use core::fmt;

/// Errors returned by the length-checked and name-parsing APIs.
///
/// Hashing itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// Output buffer shorter than the digest
    BufferTooSmall {
        /// Bytes required
        needed: usize,
        /// Bytes supplied
        actual: usize,
    },
    /// Algorithm name not recognized
    UnknownAlgorithm,
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::BufferTooSmall { needed, actual } => {
                write!(f, "output buffer too small: need {} bytes, got {}", needed, actual)
            }
            HashError::UnknownAlgorithm => write!(f, "unknown hash algorithm"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HashError {}
