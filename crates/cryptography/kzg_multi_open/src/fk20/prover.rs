use bls12_381::{g1_batch_normalize, traits::*, G1Point, Scalar};
use kzg::{KZGError, KZGSettings};
use polynomial::domain::Domain;

use crate::{
    errors::FK20Error,
    fk20::{
        batch_toeplitz::BatchToeplitzMatrixVecMul,
        h_poly::{compute_h_poly_commitments, srs_vectors},
    },
};

/// FK20 prover for one `(domain size, coset width)` pair.
///
/// A polynomial with fewer than `domain_size / 2` coefficients is opened on
/// every coset `ω^t·H_l` of the domain, where `ω` generates the domain and
/// `H_l` is the subgroup of order `coset_width`.
#[derive(Debug)]
pub struct FK20MultiSettings {
    kzg_settings: KZGSettings,
    batch_toeplitz: BatchToeplitzMatrixVecMul,
    /// Number of points the polynomial is evaluated on.
    domain_size: usize,
    /// Number of points each proof opens.
    coset_width: usize,
    /// FFT domain of size `domain_size / coset_width`, one point per proof.
    proof_domain: Domain,
}

impl FK20MultiSettings {
    /// Precomputes the reference string FFTs for a `domain_size`-point
    /// domain split into cosets of `coset_width` points.
    ///
    /// The domain must be a power of two in `[2, max_width]` and the coset
    /// width a power of two no larger than half the domain. The G1 reference
    /// string needs at least `domain_size / 2` points.
    pub fn new(
        kzg_settings: KZGSettings,
        domain_size: usize,
        coset_width: usize,
    ) -> Result<Self, FK20Error> {
        let max_domain_size = kzg_settings.fft_settings().max_width();
        if domain_size < 2 || !domain_size.is_power_of_two() || domain_size > max_domain_size {
            return Err(FK20Error::InvalidDomainSize {
                domain_size,
                max_domain_size,
            });
        }
        if coset_width == 0 || !coset_width.is_power_of_two() || coset_width > domain_size / 2 {
            return Err(FK20Error::InvalidCosetWidth {
                coset_width,
                domain_size,
            });
        }

        let num_coefficients = domain_size / 2;
        let srs_len = kzg_settings.secret_g1().len();
        if srs_len < num_coefficients {
            return Err(KZGError::SRSLengthMismatch {
                required_len: num_coefficients,
                srs_len,
            }
            .into());
        }

        let vectors = srs_vectors(kzg_settings.secret_g1(), num_coefficients, coset_width);
        let batch_toeplitz = BatchToeplitzMatrixVecMul::new(&vectors);
        let proof_domain = Domain::new(domain_size / coset_width);

        Ok(Self {
            kzg_settings,
            batch_toeplitz,
            domain_size,
            coset_width,
            proof_domain,
        })
    }

    pub const fn kzg_settings(&self) -> &KZGSettings {
        &self.kzg_settings
    }

    pub const fn domain_size(&self) -> usize {
        self.domain_size
    }

    pub const fn coset_width(&self) -> usize {
        self.coset_width
    }

    /// `domain_size / coset_width`
    pub const fn num_proofs(&self) -> usize {
        self.domain_size / self.coset_width
    }

    /// Opens `coeffs` on every coset of the domain.
    ///
    /// Proof `t` is for the points `ω^t·H_l`, in natural order of `t`.
    /// Callers that lay the extended data out in bit-reversed order should
    /// bit-reverse the proofs as well, so proof `i` covers chunk `i`.
    ///
    /// Fails if any coefficient at index `domain_size / 2` or above is
    /// non-zero. Shorter inputs are zero-padded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(domain_size = self.domain_size, coset_width = self.coset_width)))]
    pub fn fk20_multi_da_optimized(&self, coeffs: &[Scalar]) -> Result<Vec<G1Point>, FK20Error> {
        let num_coefficients = self.domain_size / 2;
        if coeffs.len() > self.domain_size {
            return Err(FK20Error::PolynomialHasTooManyCoefficients {
                num_coefficients: coeffs.len(),
                max_num_coefficients: num_coefficients,
            });
        }
        if let Some(highest) = coeffs.iter().rposition(|coeff| !bool::from(coeff.is_zero())) {
            if highest >= num_coefficients {
                return Err(FK20Error::PolynomialHasTooManyCoefficients {
                    num_coefficients: highest + 1,
                    max_num_coefficients: num_coefficients,
                });
            }
        }

        let mut polynomial = coeffs.to_vec();
        polynomial.resize(num_coefficients, Scalar::ZERO);

        let h_commitments =
            compute_h_poly_commitments(&self.batch_toeplitz, polynomial, self.coset_width);

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("proofs_from_h_commitments").entered();
        let proofs = self.proof_domain.fft_g1(h_commitments);
        Ok(g1_batch_normalize(&proofs))
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::Scalar;
    use kzg::srs::insecure_srs_from_secret;
    use polynomial::{fft::reverse_bit_order, FFTSettings};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::fk20::naive::naive_multi_proofs;

    fn settings(scale: u8, srs_len: usize) -> KZGSettings {
        let fft_settings = FFTSettings::new(scale).unwrap();
        let (g1, g2) = insecure_srs_from_secret(Scalar::from(1_927_409_816u64), srs_len);
        KZGSettings::new(fft_settings, g1, g2).unwrap()
    }

    fn random_poly(len: usize, seed: u64) -> Vec<Scalar> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| Scalar::random(&mut rng)).collect()
    }

    #[test]
    fn proofs_match_direct_division() {
        for (domain_size, coset_width) in [(32, 4), (32, 1), (16, 8), (8, 2)] {
            let fk20 = FK20MultiSettings::new(settings(5, 32), domain_size, coset_width).unwrap();
            let coeffs = random_poly(domain_size / 2, domain_size as u64 + coset_width as u64);

            let proofs = fk20.fk20_multi_da_optimized(&coeffs).unwrap();
            assert_eq!(proofs.len(), fk20.num_proofs());
            assert_eq!(
                proofs,
                naive_multi_proofs(fk20.kzg_settings(), &coeffs, domain_size, coset_width)
            );
        }
    }

    #[test]
    fn proofs_verify_on_their_cosets() {
        let domain_size = 32;
        let coset_width = 4;
        let fk20 = FK20MultiSettings::new(settings(5, 32), domain_size, coset_width).unwrap();
        let kzg = fk20.kzg_settings();
        let coeffs = random_poly(domain_size / 2, 7);

        let commitment = kzg.commit_to_poly(&coeffs).unwrap();
        let proofs = fk20.fk20_multi_da_optimized(&coeffs).unwrap();

        let stride = kzg.fft_settings().max_width() / domain_size;
        let mut padded = coeffs.clone();
        padded.resize(domain_size, Scalar::ZERO);
        let evaluations = kzg.fft_settings().fft(&padded, false).unwrap();
        for (t, proof) in proofs.iter().enumerate() {
            let x = kzg.fft_settings().expanded_roots_of_unity()[t * stride];
            let ys: Vec<Scalar> = (0..coset_width)
                .map(|j| evaluations[t + j * fk20.num_proofs()])
                .collect();
            assert!(kzg.check_proof_multi(&commitment, proof, x, &ys).unwrap());
        }
    }

    #[test]
    fn bit_reversed_proofs_cover_bit_reversed_chunks() {
        let domain_size = 32;
        let coset_width = 4;
        let fk20 = FK20MultiSettings::new(settings(5, 32), domain_size, coset_width).unwrap();
        let kzg = fk20.kzg_settings();
        let coeffs = random_poly(domain_size / 2, 8);

        let commitment = kzg.commit_to_poly(&coeffs).unwrap();
        let mut proofs = fk20.fk20_multi_da_optimized(&coeffs).unwrap();
        reverse_bit_order(&mut proofs);

        let mut padded = coeffs.clone();
        padded.resize(domain_size, Scalar::ZERO);
        let mut evaluations = kzg.fft_settings().fft(&padded, false).unwrap();
        reverse_bit_order(&mut evaluations);

        let stride = kzg.fft_settings().max_width() / domain_size;
        let mut coset_roots: Vec<Scalar> = (0..fk20.num_proofs())
            .map(|t| kzg.fft_settings().expanded_roots_of_unity()[t * stride])
            .collect();
        reverse_bit_order(&mut coset_roots);

        for (i, chunk) in evaluations.chunks(coset_width).enumerate() {
            let mut ys = chunk.to_vec();
            reverse_bit_order(&mut ys);
            assert!(kzg
                .check_proof_multi(&commitment, &proofs[i], coset_roots[i], &ys)
                .unwrap());
        }
    }

    #[test]
    fn short_and_zero_padded_inputs_are_accepted() {
        let fk20 = FK20MultiSettings::new(settings(4, 16), 16, 2).unwrap();
        let coeffs = random_poly(3, 1);

        let mut padded = coeffs.clone();
        padded.resize(16, Scalar::ZERO);

        assert_eq!(
            fk20.fk20_multi_da_optimized(&coeffs).unwrap(),
            fk20.fk20_multi_da_optimized(&padded).unwrap()
        );
    }

    #[test]
    fn zero_polynomial_has_identity_proofs() {
        let fk20 = FK20MultiSettings::new(settings(4, 16), 16, 4).unwrap();
        let proofs = fk20.fk20_multi_da_optimized(&[]).unwrap();
        assert_eq!(proofs, vec![G1Point::identity(); 4]);
    }

    #[test]
    fn rejects_high_coefficients() {
        let fk20 = FK20MultiSettings::new(settings(4, 16), 16, 4).unwrap();

        let mut coeffs = vec![Scalar::ONE; 8];
        coeffs.push(Scalar::ONE);
        assert_eq!(
            fk20.fk20_multi_da_optimized(&coeffs).unwrap_err(),
            FK20Error::PolynomialHasTooManyCoefficients {
                num_coefficients: 9,
                max_num_coefficients: 8,
            }
        );

        assert_eq!(
            fk20.fk20_multi_da_optimized(&[Scalar::ONE; 17]).unwrap_err(),
            FK20Error::PolynomialHasTooManyCoefficients {
                num_coefficients: 17,
                max_num_coefficients: 8,
            }
        );
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            FK20MultiSettings::new(settings(4, 16), 32, 4).unwrap_err(),
            FK20Error::InvalidDomainSize {
                domain_size: 32,
                max_domain_size: 16,
            }
        );
        assert_eq!(
            FK20MultiSettings::new(settings(4, 16), 12, 2).unwrap_err(),
            FK20Error::InvalidDomainSize {
                domain_size: 12,
                max_domain_size: 16,
            }
        );
        assert_eq!(
            FK20MultiSettings::new(settings(4, 16), 1, 1).unwrap_err(),
            FK20Error::InvalidDomainSize {
                domain_size: 1,
                max_domain_size: 16,
            }
        );
        assert_eq!(
            FK20MultiSettings::new(settings(4, 16), 16, 16).unwrap_err(),
            FK20Error::InvalidCosetWidth {
                coset_width: 16,
                domain_size: 16,
            }
        );
        assert_eq!(
            FK20MultiSettings::new(settings(4, 16), 16, 3).unwrap_err(),
            FK20Error::InvalidCosetWidth {
                coset_width: 3,
                domain_size: 16,
            }
        );
        assert_eq!(
            FK20MultiSettings::new(settings(4, 4), 16, 2).unwrap_err(),
            FK20Error::Kzg(KZGError::SRSLengthMismatch {
                required_len: 8,
                srs_len: 4,
            })
        );
    }
}
