use bls12_381::{ff::Field, Scalar};

use crate::errors::PolynomialError;

/// Shift `g` moving a domain `H` to the coset `g·H`, cached with its inverse.
#[derive(Debug, Clone, Copy)]
pub struct CosetFFT {
    pub generator: Scalar,
    pub generator_inv: Scalar,
}

impl CosetFFT {
    /// Fails with `DivisionByZero` if `generator` is zero.
    pub fn new(generator: Scalar) -> Result<Self, PolynomialError> {
        let generator_inv =
            Option::from(generator.invert()).ok_or(PolynomialError::DivisionByZero)?;
        Ok(Self {
            generator,
            generator_inv,
        })
    }
}
