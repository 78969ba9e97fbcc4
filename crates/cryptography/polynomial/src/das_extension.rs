use bls12_381::Scalar;

use crate::{errors::PolynomialError, fft_settings::FFTSettings};

impl FFTSettings {
    /// Low-degree extension in evaluation form.
    ///
    /// On input `evens[i] = p(ω^(2i))` for `i < n`, where `ω` generates the
    /// size `2n` subgroup and `deg p < n`, overwrites the slice with
    /// `p(ω^(2i+1))`. Interleaving input and output gives the evaluations of the
    /// same polynomial over the whole size `2n` subgroup, i.e. a systematic
    /// Reed-Solomon codeword.
    ///
    /// `n` must be a power of two with `2n <= max_width`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(n = evens.len())))]
    pub fn das_fft_extension(&self, evens: &mut [Scalar]) -> Result<(), PolynomialError> {
        PolynomialError::check_pow2_len(evens.len(), self.max_width() / 2)?;

        let n = evens.len();
        // A constant polynomial takes the same value at the odd points
        if n == 1 {
            return Ok(());
        }

        self.das_fft_extension_step(evens, self.max_width() / (2 * n));

        // Every level of the recursion doubles the values
        let n_inv = self.inverse_of_width(n);
        for value in evens.iter_mut() {
            *value *= n_inv;
        }
        Ok(())
    }

    /// One level of the half-domain recursion.
    ///
    /// With `ω = ρ^stride` of order `2·vals.len()` (ρ the full domain generator),
    /// maps `vals.len() · p(ω^(2i))` to `vals.len() · p(ω^(2i+1))`.
    fn das_fft_extension_step(&self, vals: &mut [Scalar], stride: usize) {
        let half = vals.len() / 2;
        if half == 0 {
            return;
        }

        let roots = self.expanded_roots_of_unity();
        let inv_roots = self.reverse_roots_of_unity();
        let (lo, hi) = vals.split_at_mut(half);

        // Split p into even and odd parts: p(x) + p(-x) = 2·p_e(x²) and
        // (p(x) - p(-x)) / x = 2·p_o(x²)
        for (i, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let sum = *a + *b;
            let diff = (*a - *b) * inv_roots[2 * i * stride];
            *a = sum;
            *b = diff;
        }

        if half >= PARALLEL_THRESHOLD {
            maybe_rayon::join(
                || self.das_fft_extension_step(lo, 2 * stride),
                || self.das_fft_extension_step(hi, 2 * stride),
            );
        } else {
            self.das_fft_extension_step(lo, 2 * stride);
            self.das_fft_extension_step(hi, 2 * stride);
        }

        // p(ω^(2i+1)) = p_e(ω^(4i+2)) + ω^(2i+1)·p_o(ω^(4i+2)), and the second
        // half of the outputs sits at the negated points
        for (i, (x, y)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let t = *y * roots[(2 * i + 1) * stride];
            *y = *x - t;
            *x += t;
        }
    }
}

const PARALLEL_THRESHOLD: usize = 1 << 10;
