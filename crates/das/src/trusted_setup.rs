use bls12_381::{traits::*, G1Point, G2Point, Scalar};
use kzg::srs::insecure_srs_from_secret;
use serde::{Deserialize, Serialize};

use crate::{
    errors::SerializationError,
    serialization::{
        deserialize_compressed_g1, deserialize_compressed_g2, serialize_g1_compressed,
        serialize_g2_compressed,
    },
};

/// The structured reference string `([s^i]₁, [s^i]₂)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedSetup {
    /// `[s^i]₁` for `i < g1_monomial.len()`
    pub g1_monomial: Vec<G1Point>,
    /// `[s^i]₂` for `i < g2_monomial.len()`
    pub g2_monomial: Vec<G2Point>,
}

/// On-disk form: `0x`-prefixed hex of compressed points.
#[derive(Serialize, Deserialize)]
struct TrustedSetupJson {
    g1_monomial: Vec<String>,
    g2_monomial: Vec<String>,
}

impl TrustedSetup {
    /// Derives a setup from a secret given as a decimal string.
    ///
    /// The secret is public to anyone who reads the seed, so proofs made with
    /// this setup are only meaningful in tests and demos.
    pub fn generate_insecure(secret_seed: &str, len: usize) -> Result<Self, SerializationError> {
        let secret = parse_decimal_scalar(secret_seed)?;
        let (g1_monomial, g2_monomial) = insecure_srs_from_secret(secret, len);
        Ok(Self {
            g1_monomial,
            g2_monomial,
        })
    }

    /// Parses a JSON document of the form
    ///
    /// ```text
    /// {
    ///   "g1_monomial": ["0x<48-byte compressed point>", ...],
    ///   "g2_monomial": ["0x<96-byte compressed point>", ...]
    /// }
    /// ```
    ///
    /// Every point is checked to be in the prime-order subgroup.
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let trusted_setup: TrustedSetupJson = serde_json::from_str(json)?;

        let g1_monomial = trusted_setup
            .g1_monomial
            .iter()
            .map(|hex_str| {
                let bytes = decode_hex_point(hex_str)?;
                deserialize_compressed_g1(&bytes)
            })
            .collect::<Result<_, _>>()?;
        let g2_monomial = trusted_setup
            .g2_monomial
            .iter()
            .map(|hex_str| {
                let bytes = decode_hex_point(hex_str)?;
                deserialize_compressed_g2(&bytes)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            g1_monomial,
            g2_monomial,
        })
    }

    /// Writes the format read by [`Self::from_json`].
    pub fn to_json(&self) -> Result<String, SerializationError> {
        let json = TrustedSetupJson {
            g1_monomial: self
                .g1_monomial
                .iter()
                .map(|point| format!("0x{}", hex::encode(serialize_g1_compressed(point))))
                .collect(),
            g2_monomial: self
                .g2_monomial
                .iter()
                .map(|point| format!("0x{}", hex::encode(serialize_g2_compressed(point))))
                .collect(),
        };
        Ok(serde_json::to_string(&json)?)
    }
}

fn decode_hex_point(hex_str: &str) -> Result<Vec<u8>, SerializationError> {
    let invalid = || SerializationError::InvalidHexPoint {
        hex: hex_str.to_string(),
    };
    let without_0x = hex_str.strip_prefix("0x").ok_or_else(invalid)?;
    hex::decode(without_0x).map_err(|_| invalid())
}

/// Reads a non-empty decimal string as an integer reduced modulo the field order.
fn parse_decimal_scalar(seed: &str) -> Result<Scalar, SerializationError> {
    if seed.is_empty() {
        return Err(SerializationError::InvalidSecretSeed {
            seed: seed.to_string(),
        });
    }

    let ten = Scalar::from(10u64);
    seed.chars().try_fold(Scalar::ZERO, |acc, c| {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| SerializationError::InvalidSecretSeed {
                seed: seed.to_string(),
            })?;
        Ok(acc * ten + Scalar::from(u64::from(digit)))
    })
}
