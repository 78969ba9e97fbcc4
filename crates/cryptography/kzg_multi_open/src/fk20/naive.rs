//! Direct constructions that the FK20 fast path is checked against.

use bls12_381::{G1Point, Scalar};
use kzg::KZGSettings;

/// `⌊f / X^d⌋`: drops the lowest `d` coefficients.
pub(crate) fn shift_polynomial(poly: &[Scalar], degree: usize) -> &[Scalar] {
    poly.get(degree..).unwrap_or(&[])
}

/// `H_1, ..., H_k` with `H_i = ⌊f / X^(i·l)⌋` and `k = len(f) / l`.
pub(crate) fn h_polys(poly: &[Scalar], coset_width: usize) -> Vec<&[Scalar]> {
    (1..=poly.len() / coset_width)
        .map(|i| shift_polynomial(poly, i * coset_width))
        .collect()
}

/// One quadratic-time coset proof per `t`, for the cosets `ω^t·H_l` of a
/// `domain_size`-point domain.
pub(crate) fn naive_multi_proofs(
    kzg_settings: &KZGSettings,
    poly: &[Scalar],
    domain_size: usize,
    coset_width: usize,
) -> Vec<G1Point> {
    let fft_settings = kzg_settings.fft_settings();
    let stride = fft_settings.max_width() / domain_size;
    (0..domain_size / coset_width)
        .map(|t| {
            let x = fft_settings.expanded_roots_of_unity()[t * stride];
            kzg_settings.compute_proof_multi(poly, x, coset_width).unwrap()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(values: &[u64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::from).collect()
    }

    #[test]
    fn shift_drops_low_coefficients() {
        let poly = scalars(&[3, 2, 1, 4]);
        assert_eq!(shift_polynomial(&poly, 0), &poly[..]);
        assert_eq!(shift_polynomial(&poly, 2), &scalars(&[1, 4])[..]);
        assert!(shift_polynomial(&poly, 4).is_empty());
        assert!(shift_polynomial(&poly, 9).is_empty());
    }

    #[test]
    fn h_polys_of_eight_coefficients() {
        let poly = scalars(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let h = h_polys(&poly, 2);
        assert_eq!(h.len(), 4);
        assert_eq!(h[0], &scalars(&[3, 4, 5, 6, 7, 8])[..]);
        assert_eq!(h[2], &scalars(&[7, 8])[..]);
        assert!(h[3].is_empty());
    }
}
