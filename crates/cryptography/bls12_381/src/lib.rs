//! BLS12-381 arithmetic backend.
//!
//! Everything above this crate is written against the aliases and helpers
//! exported here, so swapping the curve library is a change to this crate only.

use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod batch_inversion;
pub mod lincomb;

// Downstream crates use these re-exports instead of versioning ff and group themselves
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Scalar field element of BLS12-381.
pub type Scalar = blstrs::Scalar;

/// Affine point in G1. Commitments and proofs are G1 points.
pub type G1Point = blstrs::G1Affine;

/// Projective point in G1, used while accumulating.
pub type G1Projective = blstrs::G1Projective;

/// Affine point in G2.
pub type G2Point = blstrs::G2Affine;

/// Projective point in G2.
pub type G2Projective = blstrs::G2Projective;

/// A G2 point with its Miller loop lines precomputed.
///
/// Verifiers pair against the same handful of G2 points repeatedly, so those
/// are stored prepared.
pub type G2Prepared = blstrs::G2Prepared;

/// Returns true when `∏ e(P_i, Q_i)` is the identity of the target group.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Converts projective G1 points to affine with a single field inversion.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    if projective_points.is_empty() {
        return Vec::new();
    }

    // blst maps the whole batch to infinity if a single input is infinity,
    // so only the finite points go through it
    let finite_points: Vec<G1Projective> = projective_points
        .iter()
        .filter(|point| !bool::from(point.is_identity()))
        .copied()
        .collect();

    if finite_points.is_empty() {
        return vec![G1Point::identity(); projective_points.len()];
    }

    // SAFETY: blstrs::G1Projective is a transparent wrapper around blst_p1
    let raw_points = unsafe {
        std::slice::from_raw_parts(
            finite_points.as_ptr().cast::<blst::blst_p1>(),
            finite_points.len(),
        )
    };
    let normalized = blst::p1_affines::from(raw_points);
    let mut normalized = normalized
        .as_slice()
        .iter()
        .map(|p| G1Point::from_raw_unchecked(p.x.into(), p.y.into(), false));

    // The finite points come back in input order
    projective_points
        .iter()
        .map(|point| {
            if bool::from(point.is_identity()) {
                G1Point::identity()
            } else {
                normalized.next().unwrap_or_else(G1Point::identity)
            }
        })
        .collect()
}

/// Converts projective G2 points to affine.
pub fn g2_batch_normalize(projective_points: &[G2Projective]) -> Vec<G2Point> {
    batch_normalize_points(projective_points)
}

/// Batch affine conversion for any curve exposing `Curve::batch_normalize`.
pub fn batch_normalize_points<T: PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: Curve<AffineRepr = T>,
{
    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}
