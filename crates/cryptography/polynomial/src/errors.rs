/// Errors raised by the FFT layer and by polynomial arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// The requested domain is larger than the field's two-adic subgroup.
    InvalidScale {
        /// log2 of the requested domain size.
        scale: u8,
        /// Largest supported log2 domain size.
        max_scale: u32,
    },
    /// The input length is not a power of two or exceeds what the domain supports.
    InvalidInputSize {
        /// Length of the input that was supplied.
        num_elements: usize,
        /// Largest power-of-two length accepted for this operation.
        max_num_elements: usize,
    },
    /// An inverse was requested for the zero element.
    DivisionByZero,
}

impl PolynomialError {
    /// Checks that `len` is a non-zero power of two no larger than `max`.
    pub(crate) const fn check_pow2_len(len: usize, max: usize) -> Result<(), Self> {
        if len == 0 || !len.is_power_of_two() || len > max {
            return Err(Self::InvalidInputSize {
                num_elements: len,
                max_num_elements: max,
            });
        }
        Ok(())
    }
}
