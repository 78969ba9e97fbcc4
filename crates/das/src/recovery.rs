use bls12_381::Scalar;
use polynomial::fft::reverse_bit_order;

use crate::{
    errors::{Error, RecoveryError},
    prover::ExtendedData,
    serialization::scalars_to_bytes,
    DASContext, Sample,
};

impl DASContext {
    /// Rebuilds the extended data, in sample order, from at least half of the
    /// samples.
    ///
    /// Samples may come in any order. Their proofs are not checked here, so
    /// callers should verify samples from untrusted sources first.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(num_samples = samples.len())))]
    pub fn recover_extended_data(&self, samples: &[Sample]) -> Result<Vec<Scalar>, Error> {
        validate_recovery_inputs(samples, self.config().num_samples(), self.config().coset_width)?;

        let coset_width = self.config().coset_width;
        let mut partial = vec![None; self.config().num_extended_elements()];
        for sample in samples {
            let start = sample.index * coset_width;
            for (slot, value) in partial[start..start + coset_width]
                .iter_mut()
                .zip(&sample.evaluations)
            {
                *slot = Some(*value);
            }
        }

        // Samples are chunks of the bit-reversed evaluations
        reverse_bit_order(&mut partial);
        let mut recovered = self.prover_ctx.rs.erasure_code_recover(&partial)?;
        reverse_bit_order(&mut recovered);

        Ok(recovered)
    }

    /// Recovers the original bytes from at least half of the samples.
    pub fn recover_data(&self, samples: &[Sample]) -> Result<Vec<u8>, Error> {
        let extended = self.recover_extended_data(samples)?;
        let data = &extended[..self.config().num_data_elements()];
        Ok(scalars_to_bytes(data)?)
    }

    /// Recovers every sample, with fresh proofs, from at least half of them.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn recover_samples_and_proofs(&self, samples: &[Sample]) -> Result<Vec<Sample>, Error> {
        let extended = self.recover_extended_data(samples)?;
        let data = extended[..self.config().num_data_elements()].to_vec();
        let extended: ExtendedData = self.extend_scalars(data)?;
        self.samples_from_extended_data(extended)
    }
}

/// Validates that the samples are suitable for recovery.
///
/// Checks the following:
/// - All indices are within `[0, num_samples)`.
/// - No index appears twice.
/// - Each sample holds exactly `coset_width` evaluations.
/// - There are enough samples to reconstruct the data (`≥ num_samples / 2`).
pub(crate) fn validate_recovery_inputs(
    samples: &[Sample],
    num_samples: usize,
    coset_width: usize,
) -> Result<(), RecoveryError> {
    let mut seen = vec![false; num_samples];
    for sample in samples {
        if sample.index >= num_samples {
            return Err(RecoveryError::SampleIndexOutOfRange {
                sample_index: sample.index,
                num_samples,
            });
        }
        if std::mem::replace(&mut seen[sample.index], true) {
            return Err(RecoveryError::DuplicateSampleIndex {
                sample_index: sample.index,
            });
        }
        if sample.evaluations.len() != coset_width {
            return Err(RecoveryError::SampleHasInvalidWidth {
                sample_index: sample.index,
                width: sample.evaluations.len(),
                expected_width: coset_width,
            });
        }
    }

    let min_samples_needed = num_samples / 2;
    if samples.len() < min_samples_needed {
        return Err(RecoveryError::InsufficientSamples {
            num_samples_received: samples.len(),
            min_samples_needed,
        });
    }

    Ok(())
}
