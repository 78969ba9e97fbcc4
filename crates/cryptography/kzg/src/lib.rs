//! KZG polynomial commitments over BLS12-381.
//!
//! [`KZGSettings`] bundles the FFT tables with the structured reference string
//! `([s^i]₁, [s^i]₂)` and exposes commitment, single-point opening and
//! coset opening verification.

mod errors;
mod prover;
pub mod srs;
mod verifier;

use bls12_381::{G1Point, G2Point, G2Prepared};
pub use errors::KZGError;
use polynomial::FFTSettings;

/// FFT tables plus reference string. Read-only once built, so a single
/// instance can be shared between threads.
#[derive(Debug)]
pub struct KZGSettings {
    fft_settings: FFTSettings,
    /// `[s^i]₁` for `i < secret_g1.len()`
    secret_g1: Vec<G1Point>,
    /// `[s^i]₂` for `i < secret_g2.len()`
    secret_g2: Vec<G2Point>,
    gen_g2_prepared: G2Prepared,
    tau_g2_prepared: G2Prepared,
}

impl KZGSettings {
    /// Takes ownership of the FFT tables and the reference string.
    ///
    /// At least one G1 point and two G2 points (`[1]₂`, `[s]₂`) are required.
    /// Longer strings only raise the degree bound of later operations, which
    /// check their own lengths.
    pub fn new(
        fft_settings: FFTSettings,
        secret_g1: Vec<G1Point>,
        secret_g2: Vec<G2Point>,
    ) -> Result<Self, KZGError> {
        if secret_g1.is_empty() {
            return Err(KZGError::SRSLengthMismatch {
                required_len: 1,
                srs_len: 0,
            });
        }
        if secret_g2.len() < 2 {
            return Err(KZGError::SRSLengthMismatch {
                required_len: 2,
                srs_len: secret_g2.len(),
            });
        }

        let gen_g2_prepared = G2Prepared::from(secret_g2[0]);
        let tau_g2_prepared = G2Prepared::from(secret_g2[1]);

        Ok(Self {
            fft_settings,
            secret_g1,
            secret_g2,
            gen_g2_prepared,
            tau_g2_prepared,
        })
    }

    pub const fn fft_settings(&self) -> &FFTSettings {
        &self.fft_settings
    }

    pub fn secret_g1(&self) -> &[G1Point] {
        &self.secret_g1
    }

    pub fn secret_g2(&self) -> &[G2Point] {
        &self.secret_g2
    }

    /// `[1]₁`
    pub(crate) fn gen_g1(&self) -> G1Point {
        self.secret_g1[0]
    }

    pub(crate) fn check_g1_len(&self, required_len: usize) -> Result<(), KZGError> {
        if required_len > self.secret_g1.len() {
            return Err(KZGError::SRSLengthMismatch {
                required_len,
                srs_len: self.secret_g1.len(),
            });
        }
        Ok(())
    }
}
