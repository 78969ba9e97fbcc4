//! Amortized KZG multi-point openings (Feist–Khovratovich, "FK20").
//!
//! Opening a polynomial of `n` coefficients on every coset of width `w` of a
//! `2n`-point domain costs one precomputation per reference string and
//! `O(n log n)` group operations per polynomial, instead of one quadratic
//! division per coset.

mod errors;
pub mod fk20;

pub use errors::FK20Error;
pub use fk20::FK20MultiSettings;
