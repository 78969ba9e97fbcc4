use bls12_381::{ff::Field, Scalar};

use crate::{
    domain::Domain,
    errors::PolynomialError,
    fft::{fft_inplace, powers_of, reverse_bit_order},
};

/// Root-of-unity tables for a domain of size `2^scale`, shared by every
/// transform whose length divides that size.
///
/// A transform of length `n < max_width` reads every `max_width / n`-th entry
/// of the tables, so one `FFTSettings` serves all smaller power-of-two sizes.
#[derive(Debug, Clone)]
pub struct FFTSettings {
    max_width: usize,
    /// `1 / max_width`
    max_width_inv: Scalar,
    /// `ω^0, ω^1, ..., ω^max_width` (the last entry wraps back to one).
    expanded_roots_of_unity: Vec<Scalar>,
    /// `ω^0, ω^-1, ..., ω^-max_width`
    reverse_roots_of_unity: Vec<Scalar>,
    /// `expanded_roots_of_unity[..max_width]` in bit-reversed order.
    roots_of_unity_bit_reversed: Vec<Scalar>,
}

impl FFTSettings {
    /// Builds the tables for a domain of `2^scale` points.
    ///
    /// Fails with `InvalidScale` if the field has no subgroup of that size.
    pub fn new(scale: u8) -> Result<Self, PolynomialError> {
        if u32::from(scale) > Domain::TWO_ADICITY {
            return Err(PolynomialError::InvalidScale {
                scale,
                max_scale: Domain::TWO_ADICITY,
            });
        }

        let max_width = 1usize << scale;
        let omega = Domain::compute_generator_for_size(max_width);
        let omega_inv: Scalar =
            Option::from(omega.invert()).ok_or(PolynomialError::DivisionByZero)?;
        let max_width_inv: Scalar = Option::from(Scalar::from(max_width as u64).invert())
            .ok_or(PolynomialError::DivisionByZero)?;

        let expanded_roots_of_unity = powers_of(&omega, max_width + 1);
        let reverse_roots_of_unity = powers_of(&omega_inv, max_width + 1);

        let mut roots_of_unity_bit_reversed = expanded_roots_of_unity[..max_width].to_vec();
        reverse_bit_order(&mut roots_of_unity_bit_reversed);

        Ok(Self {
            max_width,
            max_width_inv,
            expanded_roots_of_unity,
            reverse_roots_of_unity,
            roots_of_unity_bit_reversed,
        })
    }

    /// Number of points in the full domain.
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Domain points in natural order, with `ω^max_width = 1` appended.
    pub fn expanded_roots_of_unity(&self) -> &[Scalar] {
        &self.expanded_roots_of_unity
    }

    /// Inverse domain points in natural order, with the wrap-around one appended.
    pub fn reverse_roots_of_unity(&self) -> &[Scalar] {
        &self.reverse_roots_of_unity
    }

    /// Domain points in bit-reversed order.
    pub fn roots_of_unity_bit_reversed(&self) -> &[Scalar] {
        &self.roots_of_unity_bit_reversed
    }

    /// Forward or inverse FFT of any power-of-two length up to `max_width`.
    ///
    /// Forward: `values` are coefficients and the result holds the evaluations
    /// at the `values.len()`-th roots of unity in natural order. Inverse: the
    /// other way round, including the `1 / len` scaling.
    pub fn fft(&self, values: &[Scalar], inverse: bool) -> Result<Vec<Scalar>, PolynomialError> {
        PolynomialError::check_pow2_len(values.len(), self.max_width)?;

        let n = values.len();
        let stride = self.max_width / n;
        let mut out = values.to_vec();

        if inverse {
            fft_inplace(&self.reverse_roots_of_unity, stride, &mut out);
            let n_inv = self.inverse_of_width(n);
            for value in &mut out {
                *value *= n_inv;
            }
        } else {
            fft_inplace(&self.expanded_roots_of_unity, stride, &mut out);
        }

        Ok(out)
    }

    /// `1 / n` for a power-of-two `n` dividing `max_width`.
    pub(crate) fn inverse_of_width(&self, n: usize) -> Scalar {
        self.max_width_inv * Scalar::from((self.max_width / n) as u64)
    }
}
