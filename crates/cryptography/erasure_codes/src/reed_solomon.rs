use bls12_381::{batch_inversion::batch_inverse, traits::*, Scalar};
use polynomial::{
    coset_fft::CosetFFT,
    domain::Domain,
    poly_coeff::{vanishing_poly, PolyCoeff},
    PolynomialError,
};

use crate::errors::RSError;

/// The shape of the missing positions of a codeword.
///
/// Building the vanishing polynomial is the most expensive part of recovery.
/// When whole samples go missing, the erasures repeat at the same offsets in
/// every block and the polynomial can be built from a much smaller one.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ErasurePattern {
    /// The codeword splits into `num_blocks` blocks of `block_size`
    /// scalars, and every block is missing the same offsets.
    ///
    /// Example:
    ///  - Codeword = [0,b,0,d,0,f,0,h]
    ///  - block_size = 2
    ///  - offsets = [0]
    BlockSynchronized { offsets: Vec<usize> },
    /// Missing positions without structure.
    Random { indices: Vec<usize> },
}

/// A Reed-Solomon encoder and erasure decoder over a multiplicative subgroup domain.
///
/// Codewords are evaluations over the domain in natural order: position `i`
/// holds the evaluation at `ω^i`.
#[derive(Debug)]
pub struct ReedSolomon {
    /// Denotes the factor by which the message/poly_len will be expanded.
    /// Example, if poly_len = 2 and expansion_factor = 4, Then the codeword will have length 4 * 2 = 8.
    expansion_factor: usize,
    /// The length of the polynomial that we will be encoding to a codeword.
    poly_len: usize,
    /// Domain of size `poly_len * expansion_factor`.
    evaluation_domain: Domain,
    /// Number of consecutive scalars grouped into one block when looking for
    /// block-synchronized erasures.
    block_size: usize,
    /// `codeword_length / block_size`
    num_blocks: usize,
    /// Domain of size `block_size`, the roots of the first block raised to
    /// the power `num_blocks`.
    block_size_domain: Domain,
    /// Coset shift for dividing by the vanishing polynomial away from its roots.
    fft_coset_gen: CosetFFT,
}

impl ReedSolomon {
    /// - `poly_len`: number of coefficients in the input polynomial.
    /// - `expansion_factor`: the codeword length will be `poly_len * expansion_factor`.
    /// - `block_size`: how many consecutive scalars form a block for the
    ///   block-synchronized recovery path.
    ///
    /// All inputs must be powers of two and `block_size` must not exceed the
    /// codeword length.
    pub fn new(poly_len: usize, expansion_factor: usize, block_size: usize) -> Result<Self, RSError> {
        let invalid = || RSError::InvalidParameters {
            poly_len,
            expansion_factor,
            block_size,
        };

        if !(poly_len.is_power_of_two()
            && expansion_factor.is_power_of_two()
            && block_size.is_power_of_two())
        {
            return Err(invalid());
        }
        let evaluation_size = poly_len.checked_mul(expansion_factor).ok_or_else(invalid)?;
        let max_size = 1usize << Domain::TWO_ADICITY.min(usize::BITS - 1);
        if block_size > evaluation_size || evaluation_size > max_size {
            return Err(invalid());
        }

        Ok(Self {
            expansion_factor,
            poly_len,
            evaluation_domain: Domain::new(evaluation_size),
            block_size,
            num_blocks: evaluation_size / block_size,
            block_size_domain: Domain::new(block_size),
            fft_coset_gen: CosetFFT::new(Scalar::MULTIPLICATIVE_GENERATOR)?,
        })
    }

    /// The number of scalars in a codeword.
    pub const fn codeword_length(&self) -> usize {
        self.poly_len * self.expansion_factor
    }

    /// Fewest known positions that still determine the codeword.
    pub const fn min_known_positions(&self) -> usize {
        self.poly_len
    }

    /// Encodes a polynomial in coefficient form by evaluating it at `poly_len * expansion_factor`
    /// points.
    pub fn encode(&self, poly_coefficient_form: PolyCoeff) -> Result<Vec<Scalar>, RSError> {
        if poly_coefficient_form.len() > self.poly_len {
            return Err(RSError::PolynomialHasTooManyCoefficients {
                num_coefficients: poly_coefficient_form.len(),
                max_num_coefficients: self.poly_len,
            });
        }
        Ok(self.evaluation_domain.fft_scalars(poly_coefficient_form))
    }

    /// Rebuilds a full codeword from its known positions.
    ///
    /// `codeword[i]` is `None` where the evaluation at `ω^i` is missing. At
    /// least `poly_len` positions must be known. The result agrees with every
    /// known position.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = codeword.len())))]
    pub fn erasure_code_recover(&self, codeword: &[Option<Scalar>]) -> Result<Vec<Scalar>, RSError> {
        let coefficients = self.recover_polynomial_coefficient(codeword)?;
        let recovered = self.evaluation_domain.fft_scalars(coefficients);

        for (index, (known, got)) in codeword.iter().zip(&recovered).enumerate() {
            if let Some(known) = known {
                if known != got {
                    return Err(RSError::RecoveredValueMismatch { index });
                }
            }
        }

        Ok(recovered)
    }

    /// Recovers the `poly_len` coefficients of the polynomial behind a
    /// partially known codeword.
    ///
    /// Same input contract as [`Self::erasure_code_recover`].
    pub fn recover_polynomial_coefficient(
        &self,
        codeword: &[Option<Scalar>],
    ) -> Result<PolyCoeff, RSError> {
        if codeword.len() != self.codeword_length() {
            return Err(RSError::InvalidCodewordLength {
                len: codeword.len(),
                expected_len: self.codeword_length(),
            });
        }

        let missing: Vec<usize> = codeword
            .iter()
            .enumerate()
            .filter_map(|(index, value)| value.is_none().then_some(index))
            .collect();
        let num_known = codeword.len() - missing.len();
        if num_known < self.min_known_positions() {
            return Err(RSError::InsufficientSamples {
                num_known,
                min_needed: self.min_known_positions(),
            });
        }

        let zero_filled = codeword
            .iter()
            .map(|value| value.unwrap_or(Scalar::ZERO))
            .collect();

        self.recover_polynomial_coefficient_erasure_pattern(
            zero_filled,
            self.erasure_pattern(missing),
        )
    }

    /// Classifies the (ascending) missing positions.
    fn erasure_pattern(&self, missing: Vec<usize>) -> ErasurePattern {
        let offsets: Vec<usize> = missing
            .iter()
            .copied()
            .take_while(|&index| index < self.block_size)
            .collect();

        let block_synchronized = if offsets.is_empty() {
            missing.is_empty()
        } else {
            missing.len() == offsets.len() * self.num_blocks
                && missing.iter().enumerate().all(|(pos, &index)| {
                    index == (pos / offsets.len()) * self.block_size + offsets[pos % offsets.len()]
                })
        };

        if block_synchronized {
            ErasurePattern::BlockSynchronized { offsets }
        } else {
            ErasurePattern::Random { indices: missing }
        }
    }

    /// Constructs a polynomial that vanishes on the given offsets of every block.
    ///
    /// Assumes the offsets are distinct, each below `block_size`, and fewer
    /// than `block_size`. With all offsets missing the result would need the
    /// degree `codeword_length` term, which does not fit.
    ///
    /// `Z(X) = z(X^num_blocks)` where `z` vanishes on the `block_size`-th roots
    /// of unity at the offsets: `(ω^(c·block_size + j))^num_blocks = ω_b^j`.
    fn construct_vanishing_poly_from_block_erasures(&self, offsets: &[usize]) -> PolyCoeff {
        assert!(
            offsets.len() < self.block_size,
            "every position of every block is missing"
        );

        let first_block_roots: Vec<_> = offsets
            .iter()
            .map(|&offset| self.block_size_domain.roots[offset])
            .collect();
        let vanish_poly_first_block = vanishing_poly(&first_block_roots);

        // i <= offsets.len() < block_size, so i * num_blocks < codeword_length
        let mut z_x = vec![Scalar::ZERO; self.codeword_length()];
        for (i, coeff) in vanish_poly_first_block.0.into_iter().enumerate() {
            z_x[i * self.num_blocks] = coeff;
        }

        z_x.into()
    }

    fn construct_vanishing_poly_from_erasure_pattern(&self, erasures: &ErasurePattern) -> PolyCoeff {
        match erasures {
            ErasurePattern::BlockSynchronized { offsets } => {
                self.construct_vanishing_poly_from_block_erasures(offsets)
            }
            ErasurePattern::Random { indices } => {
                let roots: Vec<_> = indices
                    .iter()
                    .map(|&index| self.evaluation_domain.roots[index])
                    .collect();
                vanishing_poly(&roots)
            }
        }
    }

    /// Steps:
    /// 1. Constructs `Z(X)` vanishing on erasures.
    /// 2. Computes `(D·Z)(X)` from the zero-filled evaluations `E·Z`.
    /// 3. Divides by `Z` on a shifted coset, where `Z` has no roots.
    /// 4. Returns the first `poly_len` coefficients once the rest are zero.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn recover_polynomial_coefficient_erasure_pattern(
        &self,
        e_eval: Vec<Scalar>,
        erasures: ErasurePattern,
    ) -> Result<PolyCoeff, RSError> {
        let z_x = self.construct_vanishing_poly_from_erasure_pattern(&erasures);

        let z_eval = self.evaluation_domain.fft_scalars(z_x.clone());

        let ez_eval: Vec<_> = z_eval.iter().zip(e_eval).map(|(zx, e)| zx * e).collect();

        let dz_coeffs = self.evaluation_domain.ifft_scalars(ez_eval);

        let dz_coset_eval = self
            .evaluation_domain
            .coset_fft_scalars(dz_coeffs, &self.fft_coset_gen);
        let mut z_inv_coset_eval = self
            .evaluation_domain
            .coset_fft_scalars(z_x, &self.fft_coset_gen);
        batch_inverse(&mut z_inv_coset_eval).map_err(|_| PolynomialError::DivisionByZero)?;

        let d_eval: Vec<_> = dz_coset_eval
            .iter()
            .zip(z_inv_coset_eval)
            .map(|(dz, z_inv)| dz * z_inv)
            .collect();

        let d_coeffs = self
            .evaluation_domain
            .coset_ifft_scalars(d_eval, &self.fft_coset_gen);

        if d_coeffs
            .iter()
            .skip(self.poly_len)
            .any(|coefficient| !bool::from(coefficient.is_zero()))
        {
            return Err(RSError::PolynomialHasInvalidLength {
                num_coefficients: d_coeffs.len(),
                expected_num_coefficients: self.poly_len,
            });
        }

        Ok(d_coeffs[..self.poly_len].to_vec().into())
    }
}
