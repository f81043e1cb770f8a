//! **HAZMAT**: low-level access to BELT's raw field multiplication.
//!
//! This is the same kind of escape hatch `polyval::hazmat` provides: a
//! way for callers building some other mode on top of BELT's GF(2^128)
//! field to reach the multiply directly without going through
//! [`crate::Accumulator`]'s section-buffering state machine.
//!
//! # ⚠️ Security Warning
//!
//! Using this function directly, without the section framing DWP applies
//! on top of it, forfeits the authentication properties DWP provides.
//! Only reach for this if you are implementing a *different* mode on
//! BELT's field and know what you are doing.

use crate::field::gf128_mul;

/// Carryless multiplication over GF(2^128), reduced modulo
/// `x^128 + x^7 + x^2 + x + 1`, with both operands and the result given
/// as little-endian-limb `u128`s.
#[must_use]
pub fn mul(a: u128, b: u128) -> u128 {
    gf128_mul(a, b)
}
