use bls12_381::{traits::*, G1Point, G1Projective, Scalar};

use crate::fk20::{batch_toeplitz::BatchToeplitzMatrixVecMul, toeplitz::ToeplitzMatrix};

/// Splits `list` into `n` interleaved subsequences.
///
/// `take_every_nth(&[a0, a1, a2, a3, a4, a5], 2) == [[a0, a2, a4], [a1, a3, a5]]`
pub(crate) fn take_every_nth<T: Copy>(list: &[T], n: usize) -> Vec<Vec<T>> {
    (0..n)
        .map(|offset| list.iter().skip(offset).step_by(n).copied().collect())
        .collect()
}

/// The fixed G1 vectors the Toeplitz matrices get multiplied with.
///
/// For `num_coefficients = k·l` and offset `r < l`, vector `r` is
/// `[s^(n-1-r-l)]₁, [s^(n-1-r-2l)]₁, ..., [s^(n-1-r-(k-1)l)]₁, [0]₁`.
/// The trailing identity stands in for the negative power that the last
/// Toeplitz column would otherwise meet.
pub(crate) fn srs_vectors(
    secret_g1: &[G1Point],
    num_coefficients: usize,
    coset_width: usize,
) -> Vec<Vec<G1Point>> {
    let k = num_coefficients / coset_width;

    let reversed: Vec<G1Point> = secret_g1[..num_coefficients]
        .iter()
        .rev()
        .skip(coset_width)
        .copied()
        .collect();

    let mut vectors = take_every_nth(&reversed, coset_width);
    for vector in &mut vectors {
        vector.resize(k, G1Point::identity());
    }
    vectors
}

/// Commitments `[H_1(s)], ..., [H_k(s)]` where `H_i(X) = ⌊f(X) / X^(i·l)⌋`.
///
/// The last entry is always the identity because `H_k = 0` for a
/// polynomial with `k·l` coefficients.
///
/// Reading the coefficients from the top, `f_(n-1-r-u·l)` for `u < k` forms
/// the first row of an upper-triangular Toeplitz matrix `T_r`, and
/// `Σ_r T_r · x_r` with the [`srs_vectors`] `x_r` yields all of the
/// commitments at once.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub(crate) fn compute_h_poly_commitments(
    batch_toeplitz: &BatchToeplitzMatrixVecMul,
    mut polynomial: Vec<Scalar>,
    coset_width: usize,
) -> Vec<G1Projective> {
    debug_assert!(polynomial.len().is_power_of_two());

    polynomial.reverse();
    let matrices = take_every_nth(&polynomial, coset_width)
        .into_iter()
        .map(ToeplitzMatrix::upper_triangular)
        .collect();

    batch_toeplitz.sum_matrix_vector_mul(matrices)
}
