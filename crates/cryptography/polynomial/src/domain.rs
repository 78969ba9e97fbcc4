use bls12_381::{
    ff::{Field, PrimeField},
    group::Group,
    G1Projective, Scalar,
};

use crate::{
    coset_fft::CosetFFT,
    fft::{fft_inplace, powers_of},
    poly_coeff::PolyCoeff,
};

/// Multiplicative subgroup of size `2^k` together with everything needed to
/// evaluate and interpolate over it.
///
/// `roots[i] = ω^i`, so `roots[0] = 1` and the order is natural.
#[derive(Debug, Clone)]
pub struct Domain {
    /// Powers of the generator in natural order.
    pub roots: Vec<Scalar>,
    /// Powers of the inverse generator, used as inverse-FFT twiddles.
    roots_inv: Vec<Scalar>,
    /// Size of the domain as a field element.
    pub domain_size: Scalar,
    /// `1 / domain_size`
    pub domain_size_inv: Scalar,
    /// Element of order exactly `roots.len()`.
    pub generator: Scalar,
    pub generator_inv: Scalar,
}

impl Domain {
    /// Field two-adicity: the largest power-of-two subgroup has size `2^TWO_ADICITY`.
    pub const TWO_ADICITY: u32 = Scalar::S;

    /// Builds the domain of the given size, rounding up to a power of two.
    ///
    /// # Panics
    ///
    /// Panics if the size exceeds `2^TWO_ADICITY`. Callers taking user input
    /// validate the size first.
    pub fn new(size: usize) -> Self {
        let size = size.max(1).next_power_of_two();

        let generator = Self::compute_generator_for_size(size);
        let generator_inv = generator.invert().expect("roots of unity are non-zero");

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size.invert().expect("domain size is non-zero");

        Self {
            roots: powers_of(&generator, size),
            roots_inv: powers_of(&generator_inv, size),
            domain_size,
            domain_size_inv,
            generator,
            generator_inv,
        }
    }

    /// Returns an element of multiplicative order exactly `size`.
    pub fn compute_generator_for_size(size: usize) -> Scalar {
        assert!(size.is_power_of_two());

        let log_size = size.trailing_zeros();
        assert!(
            log_size <= Self::TWO_ADICITY,
            "two adicity is {} but group size needed is 2^{log_size}",
            Self::TWO_ADICITY
        );

        let exponent = 1u64 << (Self::TWO_ADICITY - log_size);
        Scalar::ROOT_OF_UNITY.pow_vartime([exponent])
    }

    /// Number of points in the domain. Always a power of two.
    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// Evaluates `polynomial` at every root, in natural order.
    pub fn fft_scalars(&self, mut polynomial: PolyCoeff) -> Vec<Scalar> {
        polynomial.resize(self.size(), Scalar::ZERO);
        fft_inplace(&self.roots, 1, &mut polynomial);
        polynomial.0
    }

    /// Interpolates evaluations given in natural order back into coefficients.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn ifft_scalars(&self, mut points: Vec<Scalar>) -> PolyCoeff {
        points.resize(self.size(), Scalar::ZERO);
        fft_inplace(&self.roots_inv, 1, &mut points);

        for point in &mut points {
            *point *= self.domain_size_inv;
        }
        points.into()
    }

    /// Evaluates `polynomial` over the coset `g·H`.
    pub fn coset_fft_scalars(&self, mut polynomial: PolyCoeff, coset: &CosetFFT) -> Vec<Scalar> {
        polynomial.resize(self.size(), Scalar::ZERO);

        // p(g·X) has coefficients p_i·g^i
        let mut shift = Scalar::ONE;
        for coeff in polynomial.iter_mut() {
            *coeff *= shift;
            shift *= coset.generator;
        }
        fft_inplace(&self.roots, 1, &mut polynomial);
        polynomial.0
    }

    /// Inverse of [`Self::coset_fft_scalars`].
    pub fn coset_ifft_scalars(&self, points: Vec<Scalar>, coset: &CosetFFT) -> PolyCoeff {
        let mut coeffs = self.ifft_scalars(points);

        let mut shift = Scalar::ONE;
        for coeff in coeffs.iter_mut() {
            *coeff *= shift;
            shift *= coset.generator_inv;
        }
        coeffs
    }

    /// FFT over G1: output `i` is `Σ_j points[j]·ω^(ij)`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fft_g1(&self, mut points: Vec<G1Projective>) -> Vec<G1Projective> {
        points.resize(self.size(), G1Projective::identity());
        fft_inplace(&self.roots, 1, &mut points);
        points
    }

    /// Inverse FFT over G1, keeping only the first `n` outputs.
    ///
    /// Skips the final scaling for the discarded outputs, which are the
    /// expensive part of a group IFFT.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn ifft_g1_take_n(
        &self,
        mut points: Vec<G1Projective>,
        n: Option<usize>,
    ) -> Vec<G1Projective> {
        points.resize(self.size(), G1Projective::identity());
        fft_inplace(&self.roots_inv, 1, &mut points);

        points.truncate(n.unwrap_or(self.size()).min(self.size()));
        for point in &mut points {
            *point *= self.domain_size_inv;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;

    #[test]
    fn generator_has_exact_order() {
        for log_n in 0..=12u32 {
            let n = 1usize << log_n;
            let generator = Domain::compute_generator_for_size(n);
            assert_eq!(generator.pow_vartime([n as u64]), Scalar::ONE);
            if n > 1 {
                assert_ne!(generator.pow_vartime([(n / 2) as u64]), Scalar::ONE);
            }
        }
    }

    #[test]
    fn largest_root_of_unity_is_primitive() {
        let root = Scalar::ROOT_OF_UNITY;
        assert_eq!(root.pow_vartime([1u64 << Domain::TWO_ADICITY]), Scalar::ONE);
        assert_ne!(
            root.pow_vartime([1u64 << (Domain::TWO_ADICITY - 1)]),
            Scalar::ONE
        );
    }

    #[test]
    fn non_power_of_two_size_rounds_up() {
        assert_eq!(Domain::new(5).size(), 8);
        assert_eq!(Domain::new(0).size(), 1);
    }

    #[test]
    fn interpolation_round_trip() {
        let domain = Domain::new(16);
        let mut rng = thread_rng();
        let evaluations: Vec<Scalar> = (0..16).map(|_| Scalar::random(&mut rng)).collect();

        let poly = domain.ifft_scalars(evaluations.clone());
        for (root, expected) in domain.roots.iter().zip(&evaluations) {
            assert_eq!(poly.eval(root), *expected);
        }
        assert_eq!(domain.fft_scalars(poly), evaluations);
    }

    #[test]
    fn coset_round_trip() {
        let polynomial = PolyCoeff((0..32u64).map(|i| -Scalar::from(i + 1)).collect());
        let domain = Domain::new(32);
        let coset = CosetFFT::new(Scalar::MULTIPLICATIVE_GENERATOR).unwrap();

        let evaluations = domain.coset_fft_scalars(polynomial.clone(), &coset);
        let shifted_root = domain.roots[3] * coset.generator;
        assert_eq!(evaluations[3], polynomial.eval(&shifted_root));

        assert_eq!(domain.coset_ifft_scalars(evaluations, &coset), polynomial);
    }

    #[test]
    fn g1_fft_matches_naive_msm() {
        let n = 8;
        let domain = Domain::new(n);
        let mut rng = thread_rng();
        let points: Vec<G1Projective> = (0..n).map(|_| G1Projective::random(&mut rng)).collect();

        let transformed = domain.fft_g1(points.clone());
        for (root, got) in domain.roots.iter().zip(&transformed) {
            let expected: G1Projective = points
                .iter()
                .enumerate()
                .map(|(j, p)| p * root.pow_vartime([j as u64]))
                .sum();
            assert_eq!(*got, expected);
        }

        assert_eq!(domain.ifft_g1_take_n(transformed.clone(), None), points);
        assert_eq!(domain.ifft_g1_take_n(transformed, Some(3)), points[..3].to_vec());
    }
}
