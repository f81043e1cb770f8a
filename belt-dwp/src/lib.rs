//! BELT-DWP (STB 34.101.31 §7): an authenticated-encryption mode that
//! couples CTR-mode encryption of a payload with a GF(2^128) polynomial
//! authenticator over both a separate associated-data section and the
//! resulting ciphertext.
//!
//! This crate exposes two layers:
//!
//! - [`wrap`]/[`unwrap`] — one-shot façades for the common case: encrypt
//!   (or decrypt-and-verify) a single buffer in place under one key and
//!   IV.
//! - [`State`] — the incremental state machine underneath them, for
//!   callers who need to feed associated data and payload in arbitrary
//!   chunk sizes. Its `Start → StepI* → (StepE|StepD|StepA)* → StepG|StepV`
//!   ordering is enforced with debug assertions, matching the
//!   reference's treatment of out-of-order calls as programming errors
//!   rather than recoverable failures.
//!
//! `unwrap` never releases plaintext unless the tag verifies: on
//! authentication failure the caller's buffer is left holding the
//! (still-encrypted) ciphertext it was given.
#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![warn(missing_docs)]

mod ctr;
mod error;
mod state;

pub use error::Error;
pub use state::State;

/// Size of a BELT-DWP authentication tag, in octets.
pub const TAG_SIZE: usize = 8;

/// Size of a BELT-DWP IV, in octets.
pub const IV_SIZE: usize = 16;

/// Encrypt `buffer` in place under `key` and `iv`, authenticating
/// `associated_data` alongside it, and return the 8-octet tag.
///
/// Composes `Start → StepI(associated_data) → StepE(buffer) →
/// StepA(buffer) → StepG` (spec.md §4.6): the accumulator authenticates
/// the ciphertext `StepE` just produced, not the original plaintext.
///
/// # Errors
///
/// Returns [`Error::BadInput`] if `key` is not 16, 24, or 32 octets.
pub fn wrap(
    buffer: &mut [u8],
    associated_data: &[u8],
    key: &[u8],
    iv: &[u8; IV_SIZE],
) -> Result<[u8; TAG_SIZE], Error> {
    let mut state = State::start(key, iv)?;
    state.step_i(associated_data);
    state.step_e(buffer);
    state.step_a(buffer);
    let mut tag = [0u8; TAG_SIZE];
    state.step_g(&mut tag);
    Ok(tag)
}

/// Verify `tag` over `associated_data` and `buffer` (taken as
/// ciphertext) under `key` and `iv`, then decrypt `buffer` in place.
///
/// Composes `Start → StepI(associated_data) → StepA(buffer) → StepV(tag)
/// → StepD(buffer)` (spec.md §4.6): verification runs against the
/// ciphertext *before* any decryption, so on failure `buffer` is left
/// untouched and no plaintext is released.
///
/// # Errors
///
/// Returns [`Error::BadInput`] if `key` is not 16, 24, or 32 octets, or
/// [`Error::Authentication`] if `tag` does not match.
pub fn unwrap(
    buffer: &mut [u8],
    associated_data: &[u8],
    tag: &[u8; TAG_SIZE],
    key: &[u8],
    iv: &[u8; IV_SIZE],
) -> Result<(), Error> {
    let mut state = State::start(key, iv)?;
    state.step_i(associated_data);
    state.step_a(buffer);
    if !state.step_v(tag) {
        return Err(Error::Authentication);
    }
    state.step_d(buffer);
    Ok(())
}
