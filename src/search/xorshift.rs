//! Two-word xorshift generator used for evaluation noise.
//!
//! Cheap and statistically spread enough to break ties between equal
//! positions; not suitable for anything security related.

use rand::{Rng, RngCore};

#[derive(Debug, Clone)]
pub struct XorShiftRandom {
    x: u64,
    y: u64,
    byte_buffer: u64,
    bytes_left: u8,
}

impl XorShiftRandom {
    // Replaces an all-zero state, which would only ever produce zeros.
    const ZERO_STATE_FALLBACK: (u64, u64) = (0x9E37_79B9_7F4A_7C15, 0xBF58_476D_1CE4_E5B9);

    /// Seed both words from OS entropy.
    pub fn from_entropy() -> Self {
        let mut rng = rand::rng();
        Self::from_state(rng.random(), rng.random())
    }

    /// Deterministic generator: the seed is spread across both state words.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_state(seed << 3, seed >> 3)
    }

    fn from_state(x: u64, y: u64) -> Self {
        let (x, y) = if x | y == 0 {
            Self::ZERO_STATE_FALLBACK
        } else {
            (x, y)
        };
        Self {
            x,
            y,
            byte_buffer: 0,
            bytes_left: 0,
        }
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let mut x = self.x;
        let y = self.y;
        self.x = y;
        x ^= x << 23;
        self.y = x ^ y ^ (x >> 17) ^ (y >> 26);
        self.y.wrapping_add(y)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.step()
    }

    /// Next byte, served low byte first from one buffered 64-bit draw.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        if self.bytes_left == 0 {
            self.byte_buffer = self.step();
            self.bytes_left = 8;
        }
        let byte = self.byte_buffer as u8;
        self.byte_buffer >>= 8;
        self.bytes_left -= 1;
        byte
    }
}

impl Default for XorShiftRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for XorShiftRandom {
    fn next_u32(&mut self) -> u32 {
        XorShiftRandom::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        XorShiftRandom::next_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
