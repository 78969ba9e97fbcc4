use polynomial::PolynomialError;

/// Errors that can occur during Reed-Solomon encoding or erasure recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RSError {
    /// Raised when the code parameters are not all non-zero powers of two, or
    /// when a block is longer than the codeword.
    InvalidParameters {
        /// Number of coefficients of an encoded polynomial.
        poly_len: usize,
        /// Ratio of codeword length to `poly_len`.
        expansion_factor: usize,
        /// Number of scalars per block.
        block_size: usize,
    },

    /// Raised when the input polynomial exceeds the allowed maximum number of coefficients.
    ///
    /// This occurs if `poly.len() > poly_len` in the `encode` function.
    PolynomialHasTooManyCoefficients {
        /// Number of coefficients in the provided polynomial.
        num_coefficients: usize,
        /// Maximum allowed number of coefficients (i.e., `poly_len`).
        max_num_coefficients: usize,
    },

    /// Raised when a partially known codeword has the wrong number of positions.
    InvalidCodewordLength {
        /// Number of positions supplied.
        len: usize,
        /// `poly_len * expansion_factor`
        expected_len: usize,
    },

    /// Raised when fewer than `poly_len` positions are known.
    InsufficientSamples {
        /// Number of known positions supplied.
        num_known: usize,
        /// Minimum number of known positions for recovery.
        min_needed: usize,
    },

    /// Raised when the recovered polynomial has a degree greater than expected.
    ///
    /// The known values do not lie on a polynomial of fewer than `poly_len`
    /// coefficients, so at least one of them is wrong.
    PolynomialHasInvalidLength {
        /// Total number of coefficients returned.
        num_coefficients: usize,
        /// Expected number of coefficients (`poly_len`).
        expected_num_coefficients: usize,
    },

    /// Raised when a recovered evaluation disagrees with the known value at
    /// the same position.
    RecoveredValueMismatch {
        /// Position in the codeword, natural domain order.
        index: usize,
    },

    /// An arithmetic failure from the polynomial layer.
    Polynomial(PolynomialError),
}

impl From<PolynomialError> for RSError {
    fn from(value: PolynomialError) -> Self {
        Self::Polynomial(value)
    }
}
