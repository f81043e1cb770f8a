//! BELT-CTR keystream substate (C2).
//!
//! Standard counter mode over 128-bit blocks, with a little-endian
//! counter and a one-block residual keystream buffer so that `step_e`
//! and `step_d` calls of any size consume leftover keystream bytes
//! before advancing the counter.

use belt_block::{BLOCK_SIZE, BeltKey, encrypt_block};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// CTR-mode keystream generator over a 128-bit counter block.
#[derive(Clone)]
pub(crate) struct CtrState {
    /// Running counter block (little-endian).
    counter: [u8; BLOCK_SIZE],
    /// Most recently generated keystream block.
    keystream: [u8; BLOCK_SIZE],
    /// Index of the next unused byte in `keystream`; `BLOCK_SIZE` means
    /// the block is fully spent and a new one must be generated.
    pos: usize,
}

impl CtrState {
    /// Start CTR mode with the given initial counter value (`E_K(IV)`,
    /// per spec.md §4.5's `Start`).
    pub(crate) fn new(initial_counter: [u8; BLOCK_SIZE]) -> Self {
        Self {
            counter: initial_counter,
            keystream: [0u8; BLOCK_SIZE],
            pos: BLOCK_SIZE,
        }
    }

    /// XOR `buf` with the keystream in place, advancing the counter as
    /// needed. `step_e` and `step_d` are both this operation.
    pub(crate) fn apply(&mut self, key: &BeltKey, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            if self.pos == BLOCK_SIZE {
                increment(&mut self.counter);
                self.keystream = self.counter;
                encrypt_block(&mut self.keystream, key);
                self.pos = 0;
            }
            *byte ^= self.keystream[self.pos];
            self.pos += 1;
        }
    }
}

impl core::fmt::Debug for CtrState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrState").finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for CtrState {
    fn drop(&mut self) {
        self.counter.zeroize();
        self.keystream.zeroize();
    }
}

/// Increment a 128-bit counter modulo 2^128, little-endian.
fn increment(counter: &mut [u8; BLOCK_SIZE]) {
    for byte in counter.iter_mut() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            break;
        }
    }
}
