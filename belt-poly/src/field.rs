//! GF(2^128) field element and carryless multiplication (C3).
//!
//! Elements are represented as a `u128`, bit `i` holding the coefficient
//! of `x^i` — the natural little-endian limb convention spec.md requires,
//! as opposed to GHASH's bit-reversed convention. Multiplication is
//! carryless (XOR in place of carrying addition) and reduced modulo the
//! fixed polynomial `x^128 + x^7 + x^2 + x + 1`.

use core::ops::{Add, Mul, MulAssign};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// `x^128 + x^7 + x^2 + x + 1`, with the `x^128` term implicit: this is
/// what gets XORed in whenever a left-shift would overflow 128 bits.
const REDUCTION: u128 = 0x87;

/// An element of BELT's GF(2^128) field.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldElement(u128);

impl FieldElement {
    /// The additive identity (all-zero element).
    pub const ZERO: Self = Self(0);

    /// Load a field element from its little-endian octet representation.
    #[must_use]
    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_le_bytes(bytes))
    }

    /// Serialize this field element to its little-endian octet
    /// representation.
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }
}

impl core::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement({:032x})", self.0)
    }
}

impl Add for FieldElement {
    type Output = Self;

    /// Field addition is XOR.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for FieldElement {
    type Output = Self;

    /// Carryless multiplication modulo the field's reduction polynomial.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(gf128_mul(self.0, rhs.0))
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Carryless multiplication of `a` and `b` over GF(2^128), reduced modulo
/// `x^128 + x^7 + x^2 + x + 1`.
///
/// Implemented as the standard double-and-add algorithm: `b`'s bits are
/// consumed from the least significant upward, with `a` doubled (i.e.
/// multiplied by `x`) and reduced at each step.
pub(crate) fn gf128_mul(a: u128, b: u128) -> u128 {
    let mut result: u128 = 0;
    let mut shifted = a;
    let mut remaining = b;

    for _ in 0..128 {
        if remaining & 1 == 1 {
            result ^= shifted;
        }
        let overflow = shifted & (1 << 127) != 0;
        shifted <<= 1;
        if overflow {
            shifted ^= REDUCTION;
        }
        remaining >>= 1;
    }

    result
}
