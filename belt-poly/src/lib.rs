//! BELT's GF(2^128) field and the streaming polynomial accumulator built
//! on it (components C3 and C4 of the belt-dwp mode).
//!
//! This crate plays the role POLYVAL plays for AES-GCM-SIV: a small,
//! dependency-light universal hash primitive that a higher-level mode
//! (here, `belt-dwp`) builds an authenticated cipher on top of.
#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![warn(missing_docs)]

mod accumulator;
mod field;

#[cfg(feature = "hazmat")]
pub mod hazmat;

pub use accumulator::{Accumulator, BLOCK_SIZE};
pub use field::FieldElement;
