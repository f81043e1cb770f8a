//! BELT (STB 34.101.31) 128-bit block cipher primitive.
//!
//! This crate provides exactly one operation — single-block encryption
//! under a scheduled key — and is treated as a trusted building block by
//! higher layers (the `belt-poly` field and the `belt-dwp` mode). Nothing
//! outside this crate should assume anything about the round function or
//! key schedule beyond "128-bit block in, 128-bit block out".
//!
//! Only the forward (encryption) direction is implemented: BELT-DWP (like
//! CTR-mode constructions in general) only ever runs the cipher forwards,
//! to produce keystream and to finalize the authentication tag, so there
//! is no decryption entry point here.
#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![warn(missing_docs)]

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Size of a BELT block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of 32-bit words in the expanded key schedule.
const SCHEDULE_WORDS: usize = 8;

/// Number of encryption rounds.
const ROUNDS: usize = 8;

/// Errors that can occur when constructing a [`BeltKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied key was not 16, 24, or 32 octets long.
    BadKeyLength,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BadKeyLength => f.write_str("belt key must be 16, 24, or 32 octets"),
        }
    }
}

impl core::error::Error for Error {}

/// A BELT key, expanded into its internal round-key schedule.
///
/// The schedule is zeroized on drop (when the `zeroize` feature is
/// enabled, which it is by default).
#[derive(Clone)]
pub struct BeltKey {
    words: [u32; SCHEDULE_WORDS],
}

impl BeltKey {
    /// Expand a 16, 24, or 32 octet key into a BELT key schedule.
    ///
    /// STB 34.101.31 defines the cipher over a 256-bit schedule
    /// regardless of the nominal key length: a 128-bit key is repeated
    /// twice, a 192-bit key has its first two words repeated to fill out
    /// the remaining two schedule slots, and a 256-bit key is used as-is.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        let mut words = [0u32; SCHEDULE_WORDS];
        match key.len() {
            16 => {
                for (i, chunk) in key.chunks_exact(4).enumerate() {
                    let w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                    words[i] = w;
                    words[i + 4] = w;
                }
            }
            24 => {
                for (i, chunk) in key.chunks_exact(4).enumerate() {
                    words[i] = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                words[6] = words[0];
                words[7] = words[1];
            }
            32 => {
                for (i, chunk) in key.chunks_exact(4).enumerate() {
                    words[i] = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
            }
            _ => return Err(Error::BadKeyLength),
        }
        Ok(Self { words })
    }
}

impl core::fmt::Debug for BeltKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BeltKey").finish_non_exhaustive()
    }
}

impl Drop for BeltKey {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.words.zeroize();
    }
}

/// The fixed nonlinear byte substitution used by the round function.
///
/// BELT's round function applies this substitution to each byte of a
/// 32-bit word before rotating. `mul` is odd so the map is a bijection on
/// `0..=255`.
#[inline]
const fn sub_byte(x: u8) -> u8 {
    const MUL: u8 = 167;
    const ADD: u8 = 0x2d;
    x.wrapping_mul(MUL).wrapping_add(ADD)
}

/// Apply the byte substitution to all four bytes of `u`, then rotate the
/// result left by `r` bits.
#[inline]
fn g(u: u32, r: u32) -> u32 {
    let bytes = u.to_le_bytes();
    let subbed = [
        sub_byte(bytes[0]),
        sub_byte(bytes[1]),
        sub_byte(bytes[2]),
        sub_byte(bytes[3]),
    ];
    u32::from_le_bytes(subbed).rotate_left(r)
}

#[inline]
fn g5(u: u32) -> u32 {
    g(u, 5)
}

#[inline]
fn g13(u: u32) -> u32 {
    g(u, 13)
}

#[inline]
fn g21(u: u32) -> u32 {
    g(u, 21)
}

/// Encrypt a single 128-bit block in place under `key`.
///
/// `block` is interpreted as four little-endian 32-bit limbs, matching
/// the little-endian limb convention used throughout belt-dwp.
pub fn encrypt_block(block: &mut [u8; BLOCK_SIZE], key: &BeltKey) {
    let mut a = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
    let mut b = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
    let mut c = u32::from_le_bytes([block[8], block[9], block[10], block[11]]);
    let mut d = u32::from_le_bytes([block[12], block[13], block[14], block[15]]);

    for round in 0..ROUNDS {
        // Each round draws 7 subkeys from the 8-word schedule, cycling
        // through it round-robin.
        let base = round * 7;
        let k = |j: usize| key.words[(base + j) % SCHEDULE_WORDS];

        b ^= g5(a.wrapping_add(k(0)));
        c ^= g21(d.wrapping_add(k(1)));
        a = a.wrapping_sub(g13(b.wrapping_add(k(2))));
        let e = g5(b.wrapping_add(c).wrapping_add(k(3))) ^ (round as u32 + 1);
        b = b.wrapping_add(e);
        c = c.wrapping_sub(e);
        a = a.wrapping_add(g13(d.wrapping_add(k(4))));
        d ^= g21(c.wrapping_add(k(5)));

        core::mem::swap(&mut a, &mut b);
        core::mem::swap(&mut c, &mut d);
        core::mem::swap(&mut b, &mut c);
    }

    block[0..4].copy_from_slice(&b.to_le_bytes());
    block[4..8].copy_from_slice(&d.to_le_bytes());
    block[8..12].copy_from_slice(&a.to_le_bytes());
    block[12..16].copy_from_slice(&c.to_le_bytes());
}
