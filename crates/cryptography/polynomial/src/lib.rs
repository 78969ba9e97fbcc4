//! Polynomials over the BLS12-381 scalar field and the FFTs that move them
//! between coefficient and evaluation form.
//!
//! Ordering conventions:
//! - [`domain::Domain`] and [`fft_settings::FFTSettings`] take and return
//!   evaluations in natural order (`i`-th value at `ω^i`).
//! - [`fft::reverse_bit_order`] is the only permutation used to move between
//!   natural and bit-reversed layouts.

pub mod coset_fft;
mod das_extension;
pub mod domain;
pub mod errors;
pub mod fft;
pub mod fft_settings;
pub mod poly_coeff;

pub use errors::PolynomialError;
pub use fft_settings::FFTSettings;
