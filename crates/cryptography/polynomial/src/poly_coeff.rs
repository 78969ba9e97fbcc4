use std::ops::{Deref, DerefMut};

use bls12_381::{ff::Field, Scalar};

use crate::errors::PolynomialError;

/// Polynomial in coefficient form, lowest degree first.
///
/// ```text
/// a_0 + a_1·X + ... + a_(n-1)·X^(n-1)
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PolyCoeff(pub Vec<Scalar>);

impl PolyCoeff {
    /// Evaluates at `x` with Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &Scalar) -> Scalar {
        self.iter()
            .rev()
            .fold(Scalar::ZERO, |acc, coeff| acc * x + coeff)
    }

    /// Quotient of the long division `self / divisor`. The remainder is dropped.
    ///
    /// Leading zero coefficients of `divisor` are ignored. A divisor that is
    /// identically zero gives `DivisionByZero`.
    pub fn divide(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        let mut divisor = divisor.clone();
        divisor.truncate_leading_zeros();

        let leading = *divisor.last().ok_or(PolynomialError::DivisionByZero)?;
        let leading_inv: Scalar =
            Option::from(leading.invert()).ok_or(PolynomialError::DivisionByZero)?;

        if self.len() < divisor.len() {
            return Ok(Self::default());
        }

        let mut remainder = self.0.clone();
        let quotient_len = self.len() - divisor.len() + 1;
        let mut quotient = vec![Scalar::ZERO; quotient_len];

        for shift in (0..quotient_len).rev() {
            let factor = remainder[shift + divisor.len() - 1] * leading_inv;
            quotient[shift] = factor;
            for (i, d) in divisor.iter().enumerate() {
                remainder[shift + i] -= factor * d;
            }
        }

        Ok(Self(quotient))
    }

    /// Drops zero coefficients from the top.
    pub fn truncate_leading_zeros(&mut self) {
        while self.last().is_some_and(|c| c.is_zero().into()) {
            self.pop();
        }
    }
}

// Only the property tests need ring arithmetic
#[cfg(test)]
impl PolyCoeff {
    /// `self + other`. The shorter operand is zero-padded.
    #[must_use]
    pub(crate) fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        if other.len() > result.len() {
            result.resize(other.len(), Scalar::ZERO);
        }
        for (lhs, rhs) in result.iter_mut().zip(other.iter()) {
            *lhs += rhs;
        }
        result.truncate_leading_zeros();
        result
    }

    #[must_use]
    pub(crate) fn neg(&self) -> Self {
        Self(self.iter().map(|c| -*c).collect())
    }

    /// `self - other`
    #[must_use]
    pub(crate) fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Schoolbook product.
    #[must_use]
    pub(crate) fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }
        let mut result = Self(vec![Scalar::ZERO; self.len() + other.len() - 1]);
        for (i, a) in self.iter().enumerate() {
            for (j, b) in other.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        result.truncate_leading_zeros();
        result
    }
}

impl Deref for PolyCoeff {
    type Target = Vec<Scalar>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PolyCoeff {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Scalar>> for PolyCoeff {
    fn from(value: Vec<Scalar>) -> Self {
        Self(value)
    }
}

/// Returns `Z(X) = ∏ (X - r)` over the given roots.
pub fn vanishing_poly(roots: &[Scalar]) -> PolyCoeff {
    let mut poly = PolyCoeff(Vec::with_capacity(roots.len() + 1));
    poly.push(Scalar::ONE);
    for root in roots {
        // Multiply in place by (X - root), top coefficient first
        poly.push(Scalar::ZERO);
        for i in (1..poly.len()).rev() {
            poly[i] = poly[i - 1] - poly[i] * root;
        }
        poly[0] = -(poly[0] * root);
    }
    poly
}
