//! Error handling (spec.md §7).
//!
//! Validation happens entirely at the [`crate::wrap`]/[`crate::unwrap`]
//! façade boundary, before any state is created or mutated. Once inside
//! the state machine, an out-of-order `Step*` call is a programming
//! error (a `debug_assert!`), not a recoverable [`Error`] — see
//! SPEC_FULL.md §3 for why `ResourceExhaustion` has no member here
//! either: there is no allocation on belt-dwp's hot path.

/// Errors returned by the one-shot [`crate::wrap`]/[`crate::unwrap`]
/// façades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key, IV, tag, or buffer had the wrong length, or `src1`/`dest`
    /// aliased in a way the mode does not permit.
    BadInput,
    /// `unwrap`'s tag verification failed; no plaintext was released.
    Authentication,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BadInput => f.write_str("invalid belt-dwp input"),
            Error::Authentication => f.write_str("belt-dwp authentication failed"),
        }
    }
}

impl core::error::Error for Error {}

impl From<belt_block::Error> for Error {
    fn from(_: belt_block::Error) -> Self {
        Error::BadInput
    }
}
