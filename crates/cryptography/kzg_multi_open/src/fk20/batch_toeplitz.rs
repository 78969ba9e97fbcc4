use bls12_381::{g1_batch_normalize, lincomb::g1_lincomb, G1Point, G1Projective};
use maybe_rayon::prelude::*;
use polynomial::domain::Domain;

use crate::fk20::toeplitz::{CirculantMatrix, ToeplitzMatrix};

/// Computes `Σ_r T_r · x_r` for a batch of Toeplitz matrices `T_r` and a
/// fixed batch of G1 vectors `x_r`.
///
/// The vectors never change, so their circulant-domain FFTs are taken once
/// here. Each call then needs only scalar FFTs of the matrices, one MSM per
/// output position, and a single group IFFT for the whole batch.
#[derive(Debug)]
pub(crate) struct BatchToeplitzMatrixVecMul {
    /// Number of (matrix, vector) pairs per call.
    batch_size: usize,
    /// `fft_vectors[j][r]` is position `j` of the FFT of vector `r`.
    fft_vectors: Vec<Vec<G1Point>>,
    /// Length of every vector, which is also the output length.
    size_of_vector: usize,
    /// Twice `size_of_vector`.
    circulant_domain: Domain,
}

impl BatchToeplitzMatrixVecMul {
    /// # Panics
    ///
    /// Panics if `vectors` is empty, if the vectors differ in length, or if
    /// that length is not a power of two.
    pub(crate) fn new(vectors: &[Vec<G1Point>]) -> Self {
        assert!(!vectors.is_empty(), "expected at least one vector");
        let size_of_vector = vectors[0].len();
        assert!(
            vectors.iter().all(|v| v.len() == size_of_vector),
            "expected all vectors to be the same length"
        );
        assert!(
            size_of_vector.is_power_of_two(),
            "expected the size of the vector to be a power of two"
        );

        let circulant_domain = Domain::new(2 * size_of_vector);

        let fft_vectors: Vec<Vec<G1Point>> = vectors
            .maybe_par_iter()
            .map(|vector| {
                let projective = vector.iter().map(G1Projective::from).collect();
                g1_batch_normalize(&circulant_domain.fft_g1(projective))
            })
            .collect();

        Self {
            batch_size: vectors.len(),
            fft_vectors: transpose(fft_vectors),
            size_of_vector,
            circulant_domain,
        }
    }

    /// # Panics
    ///
    /// Panics if the number of matrices differs from the number of vectors.
    pub(crate) fn sum_matrix_vector_mul(&self, matrices: Vec<ToeplitzMatrix>) -> Vec<G1Projective> {
        assert_eq!(
            matrices.len(),
            self.batch_size,
            "expected one matrix per precomputed vector"
        );

        let col_ffts: Vec<_> = matrices
            .maybe_into_par_iter()
            .map(|matrix| {
                let circulant = CirculantMatrix::from_toeplitz(matrix);
                self.circulant_domain.fft_scalars(circulant.col.into())
            })
            .collect();

        // Hadamard products summed over the batch become one inner product per position
        let msm_scalars = transpose(col_ffts);

        let summed_products: Vec<G1Projective> = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("msm per circulant position").entered();
            self.fft_vectors
                .maybe_par_iter()
                .zip(msm_scalars)
                .map(|(points, scalars)| {
                    g1_lincomb(points, &scalars).expect("one scalar per precomputed point")
                })
                .collect()
        };

        // The upper half of the circulant product belongs to the embedding, not to T·x
        self.circulant_domain
            .ifft_g1_take_n(summed_products, Some(self.size_of_vector))
    }
}

/// Swaps rows and columns of a rectangular matrix.
pub(crate) fn transpose<T: Clone>(rows: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let Some(num_cols) = rows.first().map(Vec::len) else {
        return Vec::new();
    };

    let mut columns = vec![Vec::with_capacity(rows.len()); num_cols];
    for row in rows {
        for (column, element) in columns.iter_mut().zip(row) {
            column.push(element);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use bls12_381::{traits::*, Scalar};

    use super::*;

    #[test]
    fn transpose_rectangular() {
        let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(transpose(m), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert!(transpose::<u8>(Vec::new()).is_empty());
    }

    #[test]
    fn batched_product_matches_sum_of_dense_products() {
        let k = 4;
        let mut matrices = Vec::new();
        let mut vectors = Vec::new();
        let mut rng = rand::thread_rng();

        for r in 0..6u64 {
            let row: Vec<Scalar> = (0..k as u64).map(|j| Scalar::from(r * 10 + j + 1)).collect();
            let vector: Vec<G1Point> = (0..k)
                .map(|_| G1Projective::random(&mut rng).into())
                .collect();
            matrices.push(ToeplitzMatrix::upper_triangular(row));
            vectors.push(vector);
        }

        let batch = BatchToeplitzMatrixVecMul::new(&vectors);
        let got = batch.sum_matrix_vector_mul(matrices.clone());

        // Upper triangular: y[i] = Σ_{j >= i} row[j - i]·x[j]
        let mut expected = vec![G1Projective::identity(); k];
        for (r, vector) in vectors.iter().enumerate() {
            let row: Vec<Scalar> = (0..k as u64)
                .map(|j| Scalar::from(r as u64 * 10 + j + 1))
                .collect();
            for (i, out) in expected.iter_mut().enumerate() {
                for j in i..k {
                    *out += vector[j] * row[j - i];
                }
            }
        }

        assert_eq!(got, expected);
    }

    #[test]
    fn single_element_vectors() {
        let g = G1Point::generator();
        let batch = BatchToeplitzMatrixVecMul::new(&[vec![g], vec![g]]);
        let got = batch.sum_matrix_vector_mul(vec![
            ToeplitzMatrix::upper_triangular(vec![Scalar::from(2u64)]),
            ToeplitzMatrix::upper_triangular(vec![Scalar::from(3u64)]),
        ]);
        assert_eq!(got, vec![G1Projective::generator() * Scalar::from(5u64)]);
    }
}
