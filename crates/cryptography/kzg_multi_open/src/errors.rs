use kzg::KZGError;

/// Errors from building or running the FK20 prover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FK20Error {
    /// The domain size is not a power of two, is below two, or exceeds the FFT tables.
    InvalidDomainSize {
        /// Requested number of evaluation points.
        domain_size: usize,
        /// Size of the FFT tables in the KZG settings.
        max_domain_size: usize,
    },
    /// The coset width is not a power of two or is more than half the domain.
    InvalidCosetWidth {
        /// Requested number of points per proof.
        coset_width: usize,
        /// Evaluation domain size.
        domain_size: usize,
    },
    /// The polynomial has a non-zero coefficient at or above `domain_size / 2`.
    PolynomialHasTooManyCoefficients {
        /// Index of the highest non-zero coefficient plus one, or the input length
        /// if it exceeds the domain.
        num_coefficients: usize,
        /// `domain_size / 2`
        max_num_coefficients: usize,
    },
    /// The reference string is too short, or another commitment error.
    Kzg(KZGError),
}

impl From<KZGError> for FK20Error {
    fn from(value: KZGError) -> Self {
        Self::Kzg(value)
    }
}
