//! Reed-Solomon codes over the BLS12-381 scalar field.
//!
//! A polynomial of `poly_len` coefficients is encoded as its evaluations over
//! a domain `expansion_factor` times larger. Any `poly_len` of those
//! evaluations determine the rest, and [`ReedSolomon::erasure_code_recover`]
//! rebuilds them with a vanishing polynomial and one coset division.

mod errors;
mod reed_solomon;

pub use errors::RSError;
pub use reed_solomon::ReedSolomon;
