use bls12_381::{lincomb::g1_lincomb, traits::*, G1Point, Scalar};
use polynomial::poly_coeff::PolyCoeff;

use crate::{KZGError, KZGSettings};

impl KZGSettings {
    /// Commits to a polynomial in coefficient form: `Σ coeffs[i]·[s^i]₁`.
    pub fn commit_to_poly(&self, coeffs: &[Scalar]) -> Result<G1Point, KZGError> {
        self.check_g1_len(coeffs.len())?;

        let commitment = g1_lincomb(&self.secret_g1[..coeffs.len()], coeffs)
            .expect("number of points equals number of scalars");
        Ok(commitment.to_affine())
    }

    /// Proof that the committed polynomial takes the value `p(x)` at `x`.
    ///
    /// Commits to `q(X) = (p(X) - p(x)) / (X - x)`, computed by synthetic
    /// division. Constant and empty polynomials give the identity.
    pub fn compute_proof_single(&self, coeffs: &[Scalar], x: Scalar) -> Result<G1Point, KZGError> {
        self.check_g1_len(coeffs.len())?;

        if coeffs.len() <= 1 {
            return Ok(G1Point::identity());
        }

        // q[i-1] = p[i] + x·q[i], with the top quotient coefficient equal to the top of p
        let mut quotient = vec![Scalar::ZERO; coeffs.len() - 1];
        let mut carry = Scalar::ZERO;
        for (q, p) in quotient.iter_mut().zip(&coeffs[1..]).rev() {
            carry = carry * x + p;
            *q = carry;
        }

        self.commit_to_poly(&quotient)
    }

    /// Proof for the `n` points of the coset `x·H_n`, where `H_n` is the
    /// subgroup of order `n`.
    ///
    /// Divides by `X^n - x^n` directly, so the cost is quadratic. Use the
    /// FK20 prover to open every coset of a domain at once.
    pub fn compute_proof_multi(
        &self,
        coeffs: &[Scalar],
        x: Scalar,
        n: usize,
    ) -> Result<G1Point, KZGError> {
        self.check_g1_len(coeffs.len())?;
        if n == 0 || !n.is_power_of_two() || n > self.fft_settings().max_width() {
            return Err(KZGError::InvalidInputSize {
                num_elements: n,
                max_num_elements: self.fft_settings().max_width(),
            });
        }

        let mut divisor = PolyCoeff(vec![Scalar::ZERO; n + 1]);
        divisor[0] = -x.pow_vartime([n as u64]);
        divisor[n] = Scalar::ONE;

        let quotient = PolyCoeff(coeffs.to_vec()).divide(&divisor)?;
        self.commit_to_poly(&quotient)
    }
}
