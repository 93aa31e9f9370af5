//! SHA-256 Implementation
//!
//! Pure Rust SHA-256 hash function (FIPS 180-4), with an optional SHA-NI
//! compression function selected at build time.

use crate::{Digest, Hash, DIGEST_SIZE};

#[cfg(all(
    feature = "simd",
    target_arch = "x86_64",
    target_feature = "sha",
    target_feature = "sse2",
    target_feature = "ssse3",
    target_feature = "sse4.1"
))]
mod x86;

#[cfg(all(
    feature = "simd",
    target_arch = "x86_64",
    target_feature = "sha",
    target_feature = "sse2",
    target_feature = "ssse3",
    target_feature = "sse4.1"
))]
use x86::compress;

#[cfg(not(all(
    feature = "simd",
    target_arch = "x86_64",
    target_feature = "sha",
    target_feature = "sse2",
    target_feature = "ssse3",
    target_feature = "sse4.1"
)))]
use self::compress_soft as compress;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Offset of the 64-bit length field in the final block.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Initial hash values (first 32 bits of fractional parts of square roots of first 8 primes).
const H: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants (first 32 bits of fractional parts of cube roots of first 64 primes).
pub(crate) const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Name of the compression function compiled into this build.
pub const fn backend() -> &'static str {
    if cfg!(all(
        feature = "simd",
        target_arch = "x86_64",
        target_feature = "sha",
        target_feature = "sse2",
        target_feature = "ssse3",
        target_feature = "sse4.1"
    )) {
        "sha-ni"
    } else {
        "soft"
    }
}

/// Scalar compression of one 64-byte block into `state`.
#[cfg_attr(
    all(
        feature = "simd",
        target_arch = "x86_64",
        target_feature = "sha",
        target_feature = "sse2",
        target_feature = "ssse3",
        target_feature = "sse4.1"
    ),
    allow(dead_code)
)]
pub(crate) fn compress_soft(state: &mut [u32; 8], block: &[u8; BLOCK_SIZE]) {
    // Parse block into 16 32-bit words
    let mut w = [0u32; 64];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    // Extend to 64 words
    for i in 16..64 {
        let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ ((!e) & g);
        let temp1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(v);
    }
}

/// SHA-256 hashing context for a single message.
#[derive(Clone)]
pub(crate) struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Bits in all blocks compressed so far; excludes `buffer`.
    bit_len: u64,
}

impl Sha256 {
    /// Create a new SHA-256 hasher.
    pub const fn new() -> Self {
        Self {
            state: H,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            bit_len: 0,
        }
    }

    fn process_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        compress(&mut self.state, block);
        self.bit_len = self.bit_len.wrapping_add(BLOCK_SIZE as u64 * 8);
    }

    /// Update the hasher with input data.
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;

        // Top up a partial buffer first
        if self.buffer_len > 0 {
            let space = BLOCK_SIZE - self.buffer_len;
            if data.len() < space {
                self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
                self.buffer_len += data.len();
                return;
            }
            self.buffer[self.buffer_len..].copy_from_slice(&data[..space]);
            let block = self.buffer;
            self.process_block(&block);
            data = &data[space..];
            self.buffer_len = 0;
        }

        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_SIZE>() {
            self.process_block(block);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }

    /// Finalize and return the 32-byte hash.
    pub fn finalize(mut self) -> Digest {
        let total_bits = self.bit_len.wrapping_add(self.buffer_len as u64 * 8);

        self.buffer[self.buffer_len] = 0x80;
        let mut len = self.buffer_len + 1;

        // No room left for the length field
        if len > LENGTH_OFFSET {
            self.buffer[len..].fill(0);
            let block = self.buffer;
            compress(&mut self.state, &block);
            len = 0;
        }

        self.buffer[len..LENGTH_OFFSET].fill(0);
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&total_bits.to_be_bytes());
        let block = self.buffer;
        compress(&mut self.state, &block);

        let mut result = [0u8; DIGEST_SIZE];
        for (out, word) in result.chunks_exact_mut(4).zip(self.state.iter()) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Digest::from(result)
    }
}

impl Hash for Sha256 {
    const NAME: &'static str = "sha256";
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn new() -> Self {
        Sha256::new()
    }

    fn update(&mut self, data: &[u8]) {
        Sha256::update(self, data)
    }

    fn finalize(self) -> Digest {
        Sha256::finalize(self)
    }
}
