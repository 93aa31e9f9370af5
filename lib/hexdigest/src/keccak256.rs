//! Keccak-256 Implementation
//!
//! Keccak-f[1600] sponge with a 136-byte rate and the original Keccak
//! padding byte `0x01`. The output differs from NIST SHA3-256, which pads
//! with `0x06`.
//!
//! Lane `(x, y)` of the 5x5 state lives at index `x + 5 * y`.

use crate::{Digest, Hash, DIGEST_SIZE};

/// Sponge rate in bytes.
pub const RATE: usize = 136;

const RATE_LANES: usize = RATE / 8;
const LANES: usize = 25;
const ROUNDS: usize = 24;

/// Padding byte placed right after the message.
const DELIM: u8 = 0x01;

/// Rotation offsets, in the order lanes are visited by the π chain.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π chain: destination lane of each step, starting from lane 1.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// ι round constants.
const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Keccak-f[1600].
pub(crate) fn keccak_f(a: &mut [u64; LANES]) {
    for rc in RC {
        // θ
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in (0..LANES).step_by(5) {
                a[y + x] ^= d;
            }
        }

        // ρ and π
        let mut last = a[1];
        for (&dst, &rot) in PI.iter().zip(RHO.iter()) {
            let next = a[dst];
            a[dst] = last.rotate_left(rot);
            last = next;
        }

        // χ
        for y in (0..LANES).step_by(5) {
            let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];
            for x in 0..5 {
                a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // ι
        a[0] ^= rc;
    }
}

/// Keccak-256 sponge for a single message.
#[derive(Clone)]
pub(crate) struct Keccak256 {
    lanes: [u64; LANES],
    buffer: [u8; RATE],
    buffer_len: usize,
}

impl Keccak256 {
    pub const fn new() -> Self {
        Self {
            lanes: [0u64; LANES],
            buffer: [0u8; RATE],
            buffer_len: 0,
        }
    }

    /// XOR one rate block into the state and permute.
    fn absorb(&mut self, block: &[u8; RATE]) {
        for (lane, chunk) in self.lanes[..RATE_LANES].iter_mut().zip(block.chunks_exact(8)) {
            *lane ^= u64::from_le_bytes([
                chunk[0], chunk[1], chunk[2], chunk[3],
                chunk[4], chunk[5], chunk[6], chunk[7],
            ]);
        }
        keccak_f(&mut self.lanes);
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;

        if self.buffer_len > 0 {
            let space = RATE - self.buffer_len;
            if data.len() < space {
                self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
                self.buffer_len += data.len();
                return;
            }
            self.buffer[self.buffer_len..].copy_from_slice(&data[..space]);
            let block = self.buffer;
            self.absorb(&block);
            data = &data[space..];
            self.buffer_len = 0;
        }

        // Whole blocks are absorbed straight from the input
        while let Some((block, rest)) = data.split_first_chunk::<RATE>() {
            self.absorb(block);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }

    /// Pad, permute once and squeeze 32 bytes.
    pub fn finalize(mut self) -> Digest {
        self.buffer[self.buffer_len..].fill(0);
        // Both bits share a byte when buffer_len == RATE - 1
        self.buffer[self.buffer_len] |= DELIM;
        self.buffer[RATE - 1] |= 0x80;
        let block = self.buffer;
        self.absorb(&block);

        let mut result = [0u8; DIGEST_SIZE];
        for (out, lane) in result.chunks_exact_mut(8).zip(self.lanes.iter()) {
            out.copy_from_slice(&lane.to_le_bytes());
        }
        Digest::from(result)
    }
}

impl Hash for Keccak256 {
    const NAME: &'static str = "keccak256";
    const BLOCK_SIZE: usize = RATE;

    fn new() -> Self {
        Keccak256::new()
    }

    fn update(&mut self, data: &[u8]) {
        Keccak256::update(self, data)
    }

    fn finalize(self) -> Digest {
        Keccak256::finalize(self)
    }
}
