mod batch_toeplitz;
mod h_poly;
#[cfg(test)]
mod naive;
mod prover;
pub mod toeplitz;

pub use prover::FK20MultiSettings;
