use bls12_381::{traits::*, G1Point, Scalar};
use erasure_codes::ReedSolomon;
use kzg::KZGSettings;
use kzg_multi_open::FK20MultiSettings;
use polynomial::{fft::reverse_bit_order, FFTSettings};

use crate::{
    constants::EXPANSION_FACTOR,
    errors::{Error, ProverError},
    serialization::bytes_to_scalars,
    trusted_setup::TrustedSetup,
    Config, DASContext, Sample,
};

/// Context object that is used to call functions in the prover API.
/// This includes extending data, computing the commitment and the sample proofs.
#[derive(Debug)]
pub struct ProverContext {
    fk20: FK20MultiSettings,
    pub(crate) rs: ReedSolomon,
}

impl ProverContext {
    pub fn new(trusted_setup: &TrustedSetup, config: &Config) -> Result<Self, Error> {
        let fft_settings = FFTSettings::new(config.scale + 1)?;
        let kzg_settings = KZGSettings::new(
            fft_settings,
            trusted_setup.g1_monomial.clone(),
            trusted_setup.g2_monomial.clone(),
        )
        .map_err(ProverError::from)?;

        let fk20 = FK20MultiSettings::new(
            kzg_settings,
            config.num_extended_elements(),
            config.coset_width,
        )?;

        // Missing samples repeat the same offsets in every block of
        // `num_samples` positions once the data is back in domain order
        let rs = ReedSolomon::new(
            config.num_data_elements(),
            EXPANSION_FACTOR,
            config.num_samples(),
        )?;

        Ok(Self { fk20, rs })
    }

    pub(crate) fn fft_settings(&self) -> &FFTSettings {
        self.fk20.kzg_settings().fft_settings()
    }
}

/// Data extended to twice its length, in both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedData {
    /// The `2^scale` coefficients of the polynomial through the data.
    pub coefficients: Vec<Scalar>,
    /// `2^(scale + 1)` evaluations in sample order. The first half is the
    /// original data.
    pub evaluations: Vec<Scalar>,
}

impl DASContext {
    /// Packs `bytes` into scalars and extends them.
    ///
    /// `bytes` must be exactly `31 · 2^scale` long.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn extend_data(&self, bytes: &[u8]) -> Result<ExtendedData, Error> {
        let data = bytes_to_scalars(bytes, self.config().num_data_elements())?;
        self.extend_scalars(data)
    }

    /// Computes the KZG commitment to the polynomial through the data.
    pub fn commit_to_data(&self, bytes: &[u8]) -> Result<G1Point, Error> {
        let extended = self.extend_data(bytes)?;
        self.commit_to_coefficients(&extended.coefficients)
    }

    /// Extends the data, commits to it and cuts it into proven samples.
    ///
    /// Sample `i` holds the `i`-th chunk of the extended evaluations.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_samples_and_proofs(&self, bytes: &[u8]) -> Result<(G1Point, Vec<Sample>), Error> {
        let extended = self.extend_data(bytes)?;
        let commitment = self.commit_to_coefficients(&extended.coefficients)?;
        let samples = self.samples_from_extended_data(extended)?;
        Ok((commitment, samples))
    }

    /// Evaluates the data polynomial over the doubled domain.
    ///
    /// The data are the evaluations at the even points, so the odd points come
    /// from the low-degree extension. Interleaving both gives the extended
    /// data in domain order.
    pub(crate) fn extend_scalars(&self, data: Vec<Scalar>) -> Result<ExtendedData, Error> {
        let fft_settings = self.prover_ctx.fft_settings();

        // Bit-reversing the data makes the first half of the
        // bit-reversed extension equal to the data itself
        let mut evens = data;
        reverse_bit_order(&mut evens);
        let mut odds = evens.clone();
        fft_settings.das_fft_extension(&mut odds)?;

        let mut evaluations: Vec<Scalar> = evens
            .into_iter()
            .zip(odds)
            .flat_map(|(even, odd)| [even, odd])
            .collect();

        let mut coefficients = fft_settings.fft(&evaluations, true)?;
        debug_assert!(coefficients[self.config().num_data_elements()..]
            .iter()
            .all(|coeff| *coeff == Scalar::ZERO));
        coefficients.truncate(self.config().num_data_elements());

        reverse_bit_order(&mut evaluations);
        Ok(ExtendedData {
            coefficients,
            evaluations,
        })
    }

    fn commit_to_coefficients(&self, coefficients: &[Scalar]) -> Result<G1Point, Error> {
        self.prover_ctx
            .fk20
            .kzg_settings()
            .commit_to_poly(coefficients)
            .map_err(|err| ProverError::from(err).into())
    }

    /// Pairs every chunk of the extended evaluations with its FK20 proof.
    pub(crate) fn samples_from_extended_data(
        &self,
        extended: ExtendedData,
    ) -> Result<Vec<Sample>, Error> {
        let mut proofs = self
            .prover_ctx
            .fk20
            .fk20_multi_da_optimized(&extended.coefficients)?;
        // FK20 returns proofs in domain order of the cosets. Sample `i` is the
        // coset of the `reverse_bits(i)`-th domain point.
        reverse_bit_order(&mut proofs);

        Ok(extended
            .evaluations
            .chunks(self.config().coset_width)
            .zip(proofs)
            .enumerate()
            .map(|(index, (evaluations, proof))| Sample {
                index,
                evaluations: evaluations.to_vec(),
                proof,
            })
            .collect())
    }
}
