use polynomial::PolynomialError;

/// Errors from committing, proving or checking proofs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KZGError {
    /// The reference string is too short for the requested operation.
    SRSLengthMismatch {
        /// Number of SRS points the operation needs.
        required_len: usize,
        /// Number of SRS points available.
        srs_len: usize,
    },
    /// A length argument is not a power of two or exceeds the domain.
    InvalidInputSize {
        /// Length that was supplied.
        num_elements: usize,
        /// Largest length accepted.
        max_num_elements: usize,
    },
    /// The coset representative was zero.
    DivisionByZero,
    /// Failure inside an FFT or polynomial operation.
    Polynomial(PolynomialError),
}

impl From<PolynomialError> for KZGError {
    fn from(value: PolynomialError) -> Self {
        match value {
            PolynomialError::DivisionByZero => Self::DivisionByZero,
            PolynomialError::InvalidInputSize {
                num_elements,
                max_num_elements,
            } => Self::InvalidInputSize {
                num_elements,
                max_num_elements,
            },
            other @ PolynomialError::InvalidScale { .. } => Self::Polynomial(other),
        }
    }
}
