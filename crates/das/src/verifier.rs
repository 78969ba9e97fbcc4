use bls12_381::{G1Point, Scalar};
use kzg::{KZGError, KZGSettings};
use maybe_rayon::prelude::*;
use polynomial::{
    fft::{reverse_bit_order, reverse_bits},
    FFTSettings,
};

pub use crate::errors::VerifierError;
use crate::{errors::Error, trusted_setup::TrustedSetup, Config, DASContext, Sample};

/// The context object that is used to call functions in the verifier API.
#[derive(Debug)]
pub struct VerifierContext {
    kzg_settings: KZGSettings,
    /// `coset_roots[i]` is the shift of the coset sample `i` opens.
    coset_roots: Vec<Scalar>,
}

impl VerifierContext {
    pub fn new(trusted_setup: &TrustedSetup, config: &Config) -> Result<Self, Error> {
        let fft_settings = FFTSettings::new(config.scale + 1)?;

        // Verifying a sample commits to its interpolation polynomial with
        // `coset_width` G1 points and needs `[s^coset_width]₂`
        let g2_points = trusted_setup.g2_monomial.clone();
        if g2_points.len() <= config.coset_width {
            return Err(VerifierError::Kzg(KZGError::SRSLengthMismatch {
                required_len: config.coset_width + 1,
                srs_len: g2_points.len(),
            })
            .into());
        }
        let num_g1_points = config.coset_width.min(trusted_setup.g1_monomial.len());
        let g1_points = trusted_setup.g1_monomial[..num_g1_points].to_vec();

        // Sample `i` is the coset of the `reverse_bits(i)`-th point of the extended domain
        let num_samples = config.num_samples();
        let log_num_samples = num_samples.trailing_zeros();
        let stride = fft_settings.max_width() / config.num_extended_elements();
        let coset_roots = (0..num_samples)
            .map(|index| {
                fft_settings.expanded_roots_of_unity()
                    [reverse_bits(index, log_num_samples) * stride]
            })
            .collect();

        let kzg_settings =
            KZGSettings::new(fft_settings, g1_points, g2_points).map_err(VerifierError::from)?;

        Ok(Self {
            kzg_settings,
            coset_roots,
        })
    }
}

impl DASContext {
    /// Checks a sample against the commitment to the extended data.
    ///
    /// Returns `Ok(false)` for a sample whose proof does not verify, and an
    /// error only for a sample with an invalid index or width.
    pub fn verify_sample(&self, commitment: &G1Point, sample: &Sample) -> Result<bool, Error> {
        let num_samples = self.verifier_ctx.coset_roots.len();
        if sample.index >= num_samples {
            return Err(VerifierError::SampleIndexOutOfRange {
                sample_index: sample.index,
                num_samples,
            }
            .into());
        }
        let expected_width = self.config().coset_width;
        if sample.evaluations.len() != expected_width {
            return Err(VerifierError::SampleHasInvalidWidth {
                width: sample.evaluations.len(),
                expected_width,
            }
            .into());
        }

        // The chunk is the coset in bit-reversed order
        let mut ys = sample.evaluations.clone();
        reverse_bit_order(&mut ys);

        self.verifier_ctx
            .kzg_settings
            .check_proof_multi(
                commitment,
                &sample.proof,
                self.verifier_ctx.coset_roots[sample.index],
                &ys,
            )
            .map_err(|err| VerifierError::from(err).into())
    }

    /// Checks every sample against the same commitment.
    ///
    /// Returns `Ok(true)` only if all of them verify.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(num_samples = samples.len())))]
    pub fn verify_samples(&self, commitment: &G1Point, samples: &[Sample]) -> Result<bool, Error> {
        let results: Vec<bool> = samples
            .maybe_par_iter()
            .map(|sample| self.verify_sample(commitment, sample))
            .collect::<Result<_, _>>()?;
        Ok(results.into_iter().all(|valid| valid))
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    use super::*;

    fn context_and_samples() -> (DASContext, G1Point, Vec<Sample>) {
        let setup = TrustedSetup::generate_insecure("1927409816240961209460912649124", 16).unwrap();
        let config = Config {
            scale: 4,
            coset_width: 4,
        };
        let ctx = DASContext::new(&setup, config).unwrap();

        let mut bytes = vec![0u8; 16 * 31];
        StdRng::seed_from_u64(5).fill_bytes(&mut bytes);
        let (commitment, samples) = ctx.compute_samples_and_proofs(&bytes).unwrap();
        (ctx, commitment, samples)
    }

    #[test]
    fn every_sample_verifies() {
        let (ctx, commitment, samples) = context_and_samples();
        for sample in &samples {
            assert!(ctx.verify_sample(&commitment, sample).unwrap());
        }
        assert!(ctx.verify_samples(&commitment, &samples).unwrap());
    }

    #[test]
    fn tampered_samples_fail() {
        let (ctx, commitment, samples) = context_and_samples();

        let mut wrong_value = samples[3].clone();
        wrong_value.evaluations[1] += Scalar::ONE;
        assert!(!ctx.verify_sample(&commitment, &wrong_value).unwrap());

        let mut wrong_index = samples[3].clone();
        wrong_index.index = 4;
        assert!(!ctx.verify_sample(&commitment, &wrong_index).unwrap());

        let mut wrong_proof = samples[3].clone();
        wrong_proof.proof = samples[2].proof;
        assert!(!ctx.verify_sample(&commitment, &wrong_proof).unwrap());

        let wrong_commitment = G1Point::generator();
        assert!(!ctx.verify_sample(&wrong_commitment, &samples[3]).unwrap());

        let mut batch = samples.clone();
        batch[7] = wrong_value;
        assert!(!ctx.verify_samples(&commitment, &batch).unwrap());
    }

    #[test]
    fn malformed_samples_are_errors() {
        let (ctx, commitment, samples) = context_and_samples();

        let mut out_of_range = samples[0].clone();
        out_of_range.index = 8;
        assert!(matches!(
            ctx.verify_sample(&commitment, &out_of_range),
            Err(Error::Verifier(VerifierError::SampleIndexOutOfRange {
                sample_index: 8,
                num_samples: 8,
            }))
        ));

        let mut too_wide = samples[0].clone();
        too_wide.evaluations.push(Scalar::ZERO);
        assert!(matches!(
            ctx.verify_sample(&commitment, &too_wide),
            Err(Error::Verifier(VerifierError::SampleHasInvalidWidth {
                width: 5,
                expected_width: 4,
            }))
        ));
    }
}
