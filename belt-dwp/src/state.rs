//! The DWP state machine (C5): `Start → (StepI)* → (StepE|StepD|StepA)* →
//! StepG|StepV`.
//!
//! This is the piece spec.md calls out as the hardest part of the mode:
//! two logically independent byte streams (associated data and payload)
//! arrive in arbitrary chunk sizes, the polynomial accumulator has to
//! track section boundaries without double-padding, and the payload has
//! to be funneled through CTR while the *ciphertext* — not the plaintext
//! — is what gets authenticated.

use belt_block::BeltKey;
use belt_poly::{Accumulator, FieldElement};
use subtle::ConstantTimeEq;

use crate::Error;
use crate::ctr::CtrState;

/// Initial value the accumulator's `T` register is seeded with before
/// any AD or ciphertext is folded in (spec.md §3 calls this fixed
/// constant `beltH`).
///
/// This is **not** the normative `beltH` octets from STB 34.101.31 —
/// unlike the IV and key bytes in `tests/kat.rs`, which spec.md §8
/// hands the implementer directly, the standard's own value for this
/// constant was not available to transcribe here, and there was no
/// toolchain available in this exercise to source or verify one
/// against a reference. Using the real constant would also only
/// matter once the real BELT round function and S-box are in place
/// (see `belt-block::sub_byte`'s doc comment); this value is
/// internally consistent with the rest of this implementation but
/// does not by itself make `belt-dwp` STB-conformant. See DESIGN.md's
/// Open Questions for the fuller rationale.
const INITIAL_ACCUMULATOR_SEED: [u8; 16] = [
    0xb1, 0x94, 0xbc, 0xc2, 0x60, 0x63, 0x3c, 0xcf, 0x3b, 0x8c, 0x9c, 0xae, 0x6c, 0xf9, 0x71, 0xe7,
];

/// Which section of input the state machine is currently accepting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Accepting `StepI` (associated data). Self-loops on `StepI`.
    Ad,
    /// Accepting `StepE`/`StepD`/`StepA` (payload). `StepI` is rejected.
    Ct,
    /// `StepG`/`StepV` has run; the state is consumed.
    Final,
}

/// Incremental DWP state (spec.md §3/§4.5).
///
/// Holds the CTR keystream substate, the running polynomial accumulator,
/// and the two section bit-length counters. Sensitive fields (the
/// scheduled cipher key and the polynomial hash key `R`) are zeroized on
/// drop via [`BeltKey`]'s and [`Accumulator`]'s own `Drop` impls.
pub struct State {
    key: BeltKey,
    ctr: CtrState,
    acc: Accumulator,
    l_ad: u64,
    l_ct: u64,
    phase: Phase,
}

impl State {
    /// `Start`: schedule `key`, derive `R` and the initial CTR counter
    /// from `E_K(iv)`, and reset the accumulator to
    /// `INITIAL_ACCUMULATOR_SEED` (spec.md's `beltH`).
    ///
    /// `key` must be 16, 24, or 32 octets; any other length is
    /// [`Error::BadInput`].
    pub fn start(key: &[u8], iv: &[u8; 16]) -> Result<Self, Error> {
        let belt_key = BeltKey::new(key)?;

        let mut c0 = *iv;
        belt_block::encrypt_block(&mut c0, &belt_key);
        let r = FieldElement::from_le_bytes(c0);

        Ok(Self {
            ctr: CtrState::new(c0),
            acc: Accumulator::new(r, FieldElement::from_le_bytes(INITIAL_ACCUMULATOR_SEED)),
            key: belt_key,
            l_ad: 0,
            l_ct: 0,
            phase: Phase::Ad,
        })
    }

    /// `StepI`: fold more associated-data bytes into the accumulator.
    ///
    /// Only valid while still in the AD phase — calling this after any
    /// `StepE`/`StepD`/`StepA` is a precondition violation (spec.md §4.5,
    /// §7's `OrderingViolation`).
    pub fn step_i(&mut self, ad: &[u8]) {
        debug_assert!(
            self.phase == Phase::Ad,
            "belt-dwp: StepI called outside the AD phase"
        );
        self.l_ad = self.l_ad.wrapping_add((ad.len() as u64).wrapping_mul(8));
        self.acc.update(ad);
    }

    /// `StepE`: XOR `payload` with the CTR keystream in place.
    ///
    /// Does not touch the accumulator — callers must separately call
    /// [`State::step_a`] on the resulting ciphertext (spec.md §4.5).
    pub fn step_e(&mut self, payload: &mut [u8]) {
        debug_assert!(
            self.phase != Phase::Final,
            "belt-dwp: StepE called on a finalized state"
        );
        self.enter_ct_phase();
        self.ctr.apply(&self.key, payload);
    }

    /// `StepD`: identical to [`State::step_e`] — CTR-mode XOR is its own
    /// inverse.
    pub fn step_d(&mut self, ciphertext: &mut [u8]) {
        self.step_e(ciphertext);
    }

    /// `StepA`: fold more ciphertext bytes into the accumulator.
    ///
    /// The first call after the AD phase flushes any buffered AD residue
    /// and marks the AD→CT transition, whether or not `StepE`/`StepD`
    /// has run yet (spec.md §4.5).
    pub fn step_a(&mut self, ciphertext: &[u8]) {
        debug_assert!(
            self.phase != Phase::Final,
            "belt-dwp: StepA called on a finalized state"
        );
        self.enter_ct_phase();
        self.l_ct = self
            .l_ct
            .wrapping_add((ciphertext.len() as u64).wrapping_mul(8));
        self.acc.update(ciphertext);
    }

    /// `StepG`: finalize the accumulator and emit the 8-octet tag.
    pub fn step_g(&mut self, tag: &mut [u8; 8]) {
        debug_assert!(
            self.phase != Phase::Final,
            "belt-dwp: StepG called twice on the same state"
        );
        tag.copy_from_slice(&self.finalize()[..8]);
        self.phase = Phase::Final;
    }

    /// `StepV`: finalize the accumulator and compare against
    /// `expected` in constant time, without revealing timing
    /// information about *which* byte differed.
    #[must_use]
    pub fn step_v(&mut self, expected: &[u8; 8]) -> bool {
        debug_assert!(
            self.phase != Phase::Final,
            "belt-dwp: StepV called twice on the same state"
        );
        let computed = self.finalize();
        self.phase = Phase::Final;
        computed[..8].ct_eq(expected).into()
    }

    /// Flush any pending CT residue, fold in the length block, and run
    /// the finalizing block encryption. Shared by `StepG` and `StepV`.
    fn finalize(&mut self) -> [u8; 16] {
        self.acc.finish_section();

        let mut length_block = [0u8; 16];
        length_block[..8].copy_from_slice(&self.l_ad.to_le_bytes());
        length_block[8..].copy_from_slice(&self.l_ct.to_le_bytes());
        self.acc.fold_whole_block(length_block);

        let mut t = self.acc.current().to_le_bytes();
        belt_block::encrypt_block(&mut t, &self.key);
        t
    }

    /// If still in the AD phase, flush the AD residue and switch to CT.
    /// A no-op if already past the AD phase.
    fn enter_ct_phase(&mut self) {
        if self.phase == Phase::Ad {
            self.acc.finish_section();
            self.phase = Phase::Ct;
        }
    }
}

impl core::fmt::Debug for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
