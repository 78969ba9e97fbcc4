//! Reference strings derived from a known secret.
//!
//! Anyone holding the secret can forge proofs, so these are for tests,
//! benchmarks and local experiments only. Production code loads a
//! ceremony-derived string instead.

use bls12_381::{
    g1_batch_normalize, g2_batch_normalize, traits::*, G1Point, G1Projective, G2Point,
    G2Projective, Scalar,
};
use maybe_rayon::prelude::*;

/// Returns `([s^i]₁, [s^i]₂)` for `i < len`.
pub fn insecure_srs_from_secret(secret: Scalar, len: usize) -> (Vec<G1Point>, Vec<G2Point>) {
    let powers: Vec<Scalar> = std::iter::successors(Some(Scalar::ONE), |p| Some(*p * secret))
        .take(len)
        .collect();

    let g1: Vec<G1Projective> = powers
        .maybe_par_iter()
        .map(|power| G1Projective::generator() * power)
        .collect();
    let g2: Vec<G2Projective> = powers
        .maybe_par_iter()
        .map(|power| G2Projective::generator() * power)
        .collect();

    (g1_batch_normalize(&g1), g2_batch_normalize(&g2))
}
