//! Hex rendering shared by both engines.

use alloc::string::String;

/// Lowercase hex, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
