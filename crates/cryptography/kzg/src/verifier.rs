use bls12_381::{
    lincomb::g1_lincomb, multi_pairings, traits::*, G1Point, G1Projective, G2Prepared,
    G2Projective, Scalar,
};
use itertools::{chain, Itertools};

use crate::{KZGError, KZGSettings};

impl KZGSettings {
    /// Checks a single-point opening: the committed `p` satisfies `p(x) = y`.
    ///
    /// With `q(s) = (p(s) - y) / (s - x)` this is
    /// `e(C - [y]₁ + x·π, [1]₂) · e(-π, [s]₂) = 1`.
    pub fn check_proof_single(
        &self,
        commitment: &G1Point,
        proof: &G1Point,
        x: Scalar,
        y: Scalar,
    ) -> bool {
        // [p(s) - y + x·q(s)]₁
        let lhs_g1 = (G1Projective::from(*commitment) - self.gen_g1() * y + proof * x).to_affine();
        let neg_proof = -*proof;

        multi_pairings(&[
            (&lhs_g1, &self.gen_g2_prepared),
            (&neg_proof, &self.tau_g2_prepared),
        ])
    }

    /// Checks an opening of the committed `p` at every point of the coset
    /// `x·H_n`, where `n = ys.len()` and `ys[j] = p(x·ω_n^j)` (natural order).
    ///
    /// Let `I` be the degree `< n` interpolant of `ys` on the coset and
    /// `Z(X) = X^n - x^n` its vanishing polynomial. An honest proof commits to
    /// `q = (p - I) / Z`, so the check is
    /// `e(C - [I(s)]₁, [1]₂) · e(-π, [s^n - x^n]₂) = 1`.
    ///
    /// Errors only on malformed input. A wrong proof gives `Ok(false)`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(n = ys.len())))]
    pub fn check_proof_multi(
        &self,
        commitment: &G1Point,
        proof: &G1Point,
        x: Scalar,
        ys: &[Scalar],
    ) -> Result<bool, KZGError> {
        let n = ys.len();
        if n == 0 || !n.is_power_of_two() || n > self.fft_settings().max_width() {
            return Err(KZGError::InvalidInputSize {
                num_elements: n,
                max_num_elements: self.fft_settings().max_width(),
            });
        }
        self.check_g1_len(n)?;
        if n >= self.secret_g2().len() {
            return Err(KZGError::SRSLengthMismatch {
                required_len: n + 1,
                srs_len: self.secret_g2().len(),
            });
        }
        let x_inv: Scalar = Option::from(x.invert()).ok_or(KZGError::DivisionByZero)?;

        // Interpolate on H_n, then substitute X -> X / x to move onto the coset
        let mut interpolant = self.fft_settings().fft(ys, true)?;
        let mut x_inv_pow = Scalar::ONE;
        for coeff in &mut interpolant {
            *coeff *= x_inv_pow;
            x_inv_pow *= x_inv;
        }

        // C - [I(s)]₁ as one MSM over (C, [s^0]₁, ..., [s^(n-1)]₁)
        let points = chain![[*commitment], self.secret_g1()[..n].iter().copied()].collect_vec();
        let scalars = chain![[Scalar::ONE], interpolant.iter().map(|c| -c)].collect_vec();
        let lhs_g1 = g1_lincomb(&points, &scalars)
            .expect("number of points equals number of scalars")
            .to_affine();

        // [s^n - x^n]₂
        let x_pow_n = x.pow_vartime([n as u64]);
        let vanishing_g2 =
            (G2Projective::from(self.secret_g2()[n]) - self.secret_g2()[0] * x_pow_n).to_affine();
        let neg_proof = -*proof;

        Ok(multi_pairings(&[
            (&lhs_g1, &self.gen_g2_prepared),
            (&neg_proof, &G2Prepared::from(vanishing_g2)),
        ]))
    }
}
