use erasure_codes::RSError;
use kzg::KZGError;
use kzg_multi_open::FK20Error;
use polynomial::PolynomialError;

/// Errors that can occur during setup, proving, verification, recovery or serialization.
#[derive(Debug)]
pub enum Error {
    /// The configuration does not describe a usable domain.
    InvalidConfig {
        /// `log2` of the number of data elements.
        scale: u8,
        /// Evaluations per sample.
        coset_width: usize,
    },
    /// Error that occurred during proving.
    Prover(ProverError),
    /// Error that occurred during verification.
    Verifier(VerifierError),
    /// Error that occurred during data recovery.
    Recovery(RecoveryError),
    /// Error that occurred while serializing or deserializing data.
    Serialization(SerializationError),
}

impl Error {
    /// Returns true if recovery failed because fewer than half of the samples
    /// were supplied.
    pub const fn is_insufficient_samples(&self) -> bool {
        matches!(
            self,
            Self::Recovery(
                RecoveryError::InsufficientSamples { .. }
                    | RecoveryError::ReedSolomon(RSError::InsufficientSamples { .. })
            )
        )
    }
}

impl From<ProverError> for Error {
    fn from(value: ProverError) -> Self {
        Self::Prover(value)
    }
}

impl From<VerifierError> for Error {
    fn from(value: VerifierError) -> Self {
        Self::Verifier(value)
    }
}

impl From<RecoveryError> for Error {
    fn from(value: RecoveryError) -> Self {
        Self::Recovery(value)
    }
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl From<RSError> for Error {
    fn from(value: RSError) -> Self {
        Self::Recovery(RecoveryError::ReedSolomon(value))
    }
}

/// Errors that can occur while calling a method in the prover API.
#[derive(Debug)]
pub enum ProverError {
    /// FFT or low-degree extension failure.
    Polynomial(PolynomialError),
    /// Commitment failure, typically a reference string that is too short.
    Kzg(KZGError),
    /// FK20 setup or proof generation failure.
    FK20(FK20Error),
}

impl From<PolynomialError> for ProverError {
    fn from(value: PolynomialError) -> Self {
        Self::Polynomial(value)
    }
}

impl From<KZGError> for ProverError {
    fn from(value: KZGError) -> Self {
        Self::Kzg(value)
    }
}

impl From<FK20Error> for ProverError {
    fn from(value: FK20Error) -> Self {
        Self::FK20(value)
    }
}

impl From<PolynomialError> for Error {
    fn from(value: PolynomialError) -> Self {
        Self::Prover(value.into())
    }
}

impl From<FK20Error> for Error {
    fn from(value: FK20Error) -> Self {
        Self::Prover(value.into())
    }
}

/// Errors that can occur while calling a method in the verifier API.
///
/// A proof that does not verify is not an error.
#[derive(Debug)]
pub enum VerifierError {
    /// The sample index does not name a coset of the domain.
    SampleIndexOutOfRange {
        /// Index found in the sample.
        sample_index: usize,
        /// Number of samples per extended data vector.
        num_samples: usize,
    },
    /// The sample does not hold exactly one coset of evaluations.
    SampleHasInvalidWidth {
        /// Number of evaluations in the sample.
        width: usize,
        /// Configured coset width.
        expected_width: usize,
    },
    /// Malformed input reported by the pairing check, or a reference string
    /// too short to verify samples of the configured width.
    Kzg(KZGError),
}

impl From<KZGError> for VerifierError {
    fn from(value: KZGError) -> Self {
        Self::Kzg(value)
    }
}

/// Error type returned when data reconstruction via erasure coding fails.
#[derive(Debug)]
pub enum RecoveryError {
    /// Fewer than half of the samples were provided.
    InsufficientSamples {
        /// Number of distinct samples received.
        num_samples_received: usize,
        /// Minimum number of samples required to perform reconstruction.
        min_samples_needed: usize,
    },
    /// A provided sample index exceeded the valid range.
    SampleIndexOutOfRange {
        /// Invalid sample index.
        sample_index: usize,
        /// Number of samples per extended data vector.
        num_samples: usize,
    },
    /// The same sample index appeared more than once.
    DuplicateSampleIndex {
        /// The repeated index.
        sample_index: usize,
    },
    /// A sample does not hold exactly one coset of evaluations.
    SampleHasInvalidWidth {
        /// Index of the offending sample.
        sample_index: usize,
        /// Number of evaluations in the sample.
        width: usize,
        /// Configured coset width.
        expected_width: usize,
    },
    /// Failure in the underlying Reed-Solomon decoding.
    ReedSolomon(RSError),
}

impl From<RSError> for RecoveryError {
    fn from(value: RSError) -> Self {
        Self::ReedSolomon(value)
    }
}

/// Errors that can occur during deserialization of untrusted input or the trusted setup.
#[derive(Debug)]
pub enum SerializationError {
    /// The data does not pack into exactly the expected number of scalars.
    DataHasInvalidLength {
        /// Length of the input in bytes.
        length: usize,
        /// Required length in bytes.
        expected_length: usize,
    },
    /// The bytes are not the canonical encoding of a scalar.
    CouldNotDeserializeScalar {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// A scalar does not fit in the usable bytes and cannot be turned back into data.
    ScalarExceedsUsableBytes {
        /// Position of the scalar in the input.
        index: usize,
    },
    /// Failed to deserialize a G1 group point from the given bytes.
    CouldNotDeserializeG1Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// Failed to deserialize a G2 group point from the given bytes.
    CouldNotDeserializeG2Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// A trusted setup point is not `0x`-prefixed hex.
    InvalidHexPoint {
        /// The offending string.
        hex: String,
    },
    /// The secret seed of an insecure setup is not a decimal number.
    InvalidSecretSeed {
        /// The rejected seed.
        seed: String,
    },
    /// The trusted setup JSON could not be parsed.
    Json(serde_json::Error),
}

impl From<serde_json::Error> for SerializationError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
