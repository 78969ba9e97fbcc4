//! Data availability sampling over KZG commitments.
//!
//! Data of `2^scale` scalars is extended to twice its length, committed to,
//! and cut into samples of `coset_width` evaluations. Every sample carries an
//! FK20 proof that verifies against the commitment on its own, and any half
//! of the samples is enough to recover the data.
//!
//! Extended data is kept in sample order: the evaluations over the doubled
//! domain, bit-reversed. The first half is then the original data and sample
//! `i` is the `i`-th chunk of `coset_width` values.

#[cfg(all(feature = "singlethreaded", feature = "multithreaded"))]
compile_error!("`singlethreaded` and `multithreaded` cannot be enabled simultaneously");

pub mod constants;
mod errors;
mod prover;
mod recovery;
pub mod serialization;
mod trusted_setup;
mod verifier;

use bls12_381::{G1Point, Scalar};
pub use errors::{Error, ProverError, RecoveryError, SerializationError, VerifierError};
pub use prover::ExtendedData;
/// TrustedSetup contains the Structured Reference String(SRS)
/// needed to make and verify proofs.
pub use trusted_setup::TrustedSetup;

use constants::{DEFAULT_COSET_WIDTH, DEFAULT_SCALE, EXPANSION_FACTOR};
use prover::ProverContext;
use verifier::VerifierContext;

/// Sizes of the data and of each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The data holds `2^scale` scalars and the extended data twice as many.
    pub scale: u8,
    /// Evaluations per sample. A power of two no larger than the data.
    pub coset_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            coset_width: DEFAULT_COSET_WIDTH,
        }
    }
}

impl Config {
    /// Number of data scalars.
    pub const fn num_data_elements(&self) -> usize {
        1 << self.scale
    }

    /// Number of extended scalars.
    pub const fn num_extended_elements(&self) -> usize {
        EXPANSION_FACTOR * self.num_data_elements()
    }

    /// Number of samples the extended data splits into.
    pub const fn num_samples(&self) -> usize {
        self.num_extended_elements() / self.coset_width
    }

    fn validate(&self) -> Result<(), Error> {
        // The extended domain needs a subgroup of order 2^(scale + 1)
        let domain_fits = u32::from(self.scale) < polynomial::domain::Domain::TWO_ADICITY
            && u32::from(self.scale) < usize::BITS - 2;
        if !domain_fits
            || !self.coset_width.is_power_of_two()
            || self.coset_width > self.num_data_elements()
        {
            return Err(Error::InvalidConfig {
                scale: self.scale,
                coset_width: self.coset_width,
            });
        }
        Ok(())
    }
}

/// One coset of the extended data together with its opening proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Position of the sample in the extended data.
    pub index: usize,
    /// `coset_width` evaluations, in sample order.
    pub evaluations: Vec<Scalar>,
    /// KZG multi-point proof for `evaluations`.
    pub proof: G1Point,
}

/// DASContext holds everything needed to extend, commit to, prove, verify
/// and recover data of one [`Config`].
///
/// Prover and verifier are built from the same trusted setup. Both are
/// read-only after construction.
#[derive(Debug)]
pub struct DASContext {
    config: Config,
    /// Prover-side context: extension, commitments, FK20 proofs and
    /// the Reed-Solomon decoder.
    pub prover_ctx: ProverContext,
    /// Verifier-side context: single-sample proof checks.
    pub verifier_ctx: VerifierContext,
}

impl DASContext {
    /// The setup must hold at least `2^scale` G1 points and more than
    /// `coset_width` G2 points.
    pub fn new(trusted_setup: &TrustedSetup, config: Config) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            prover_ctx: ProverContext::new(trusted_setup, &config)?,
            verifier_ctx: VerifierContext::new(trusted_setup, &config)?,
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }
}
