//! Streaming GF(2^128) polynomial accumulator (C4).
//!
//! Folds an arbitrary-length byte stream into a running hash, one 128-bit
//! block at a time, padding a trailing partial block with zeros whenever
//! the caller declares a section boundary. Padding is never carried
//! across a boundary: each call to [`Accumulator::finish_section`] resets
//! the partial-block buffer.

use crate::field::FieldElement;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Size of one accumulator block, in bytes.
pub const BLOCK_SIZE: usize = 16;

/// A streaming GF(2^128) polynomial accumulator.
///
/// `T ← (T XOR block) · R` is applied one block at a time as bytes
/// arrive; [`Accumulator::update`] buffers any trailing partial block
/// until either a full block is available or the caller calls
/// [`Accumulator::finish_section`].
#[derive(Clone)]
pub struct Accumulator {
    r: FieldElement,
    t: FieldElement,
    block: [u8; BLOCK_SIZE],
    filled: usize,
}

impl Accumulator {
    /// Start a fresh accumulator with hash key `r` and initial
    /// accumulator value `t0`.
    #[must_use]
    pub fn new(r: FieldElement, t0: FieldElement) -> Self {
        Self {
            r,
            t: t0,
            block: [0u8; BLOCK_SIZE],
            filled: 0,
        }
    }

    /// Number of bytes currently buffered in the partial-block tail.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Fold `data` into the accumulator, buffering any trailing partial
    /// block for the next call.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.filled > 0 {
            let want = BLOCK_SIZE - self.filled;
            let take = want.min(data.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < BLOCK_SIZE {
                return;
            }

            self.fold_block(self.block);
            self.filled = 0;
        }

        while data.len() >= BLOCK_SIZE {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(&data[..BLOCK_SIZE]);
            self.fold_block(block);
            data = &data[BLOCK_SIZE..];
        }

        self.block[..data.len()].copy_from_slice(data);
        self.filled = data.len();
    }

    /// Pad any buffered partial block with zeros, fold it in, and reset
    /// the buffer. A no-op if no partial block is pending.
    pub fn finish_section(&mut self) {
        if self.filled == 0 {
            return;
        }
        let mut block = self.block;
        block[self.filled..].fill(0);
        self.fold_block(block);
        self.filled = 0;
    }

    /// Fold one more already-complete 128-bit block (used for the final
    /// length block, which is never partial).
    pub fn fold_whole_block(&mut self, block: [u8; BLOCK_SIZE]) {
        self.fold_block(block);
    }

    /// The accumulator's current value.
    #[must_use]
    pub fn current(&self) -> FieldElement {
        self.t
    }

    fn fold_block(&mut self, block: [u8; BLOCK_SIZE]) {
        let x = FieldElement::from_le_bytes(block);
        self.t = (self.t + x) * self.r;
    }
}

impl core::fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Accumulator").finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Accumulator {
    fn drop(&mut self) {
        self.r.zeroize();
        self.t.zeroize();
        self.block.zeroize();
    }
}
