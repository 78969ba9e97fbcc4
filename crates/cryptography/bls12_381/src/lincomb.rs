use crate::{traits::*, G1Point, G1Projective, Scalar};

/// Multi-scalar multiplication `Σ scalars[i]·points[i]` over G1.
///
/// Returns `None` when the slices differ in length.
///
/// blst silently returns the identity if any input point is the identity,
/// so callers must guarantee there are none. Use [`g1_lincomb`] otherwise.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        let proj_points: Vec<G1Projective> = points.iter().map(Into::into).collect();
        G1Projective::multi_exp(&proj_points, scalars)
    })
}

/// Multi-scalar multiplication over G1 that tolerates identity points.
///
/// Returns `None` when the slices differ in length.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points, scalars): (Vec<G1Point>, Vec<Scalar>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, scalar)| !bool::from(point.is_identity()) && !bool::from(scalar.is_zero()))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points.is_empty() {
        return Some(G1Projective::identity());
    }
    g1_lincomb_unchecked(&points, &scalars)
}
