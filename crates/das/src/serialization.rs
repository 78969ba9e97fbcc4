use bls12_381::{G1Point, G2Point, Scalar};

pub use crate::errors::SerializationError;
use crate::constants::{
    BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT, BYTES_PER_G2_POINT,
    USABLE_BYTES_PER_FIELD_ELEMENT,
};

/// Packs `num_scalars · 31` bytes into `num_scalars` scalars.
///
/// Each 31-byte chunk becomes the low bytes of a little-endian scalar whose
/// top byte is zero.
pub fn bytes_to_scalars(bytes: &[u8], num_scalars: usize) -> Result<Vec<Scalar>, SerializationError> {
    let expected_length = num_scalars * USABLE_BYTES_PER_FIELD_ELEMENT;
    if bytes.len() != expected_length {
        return Err(SerializationError::DataHasInvalidLength {
            length: bytes.len(),
            expected_length,
        });
    }

    bytes
        .chunks_exact(USABLE_BYTES_PER_FIELD_ELEMENT)
        .map(|chunk| {
            let mut scalar_bytes = [0u8; BYTES_PER_FIELD_ELEMENT];
            scalar_bytes[..USABLE_BYTES_PER_FIELD_ELEMENT].copy_from_slice(chunk);
            deserialize_scalar(&scalar_bytes)
        })
        .collect()
}

/// Inverse of [`bytes_to_scalars`].
///
/// Fails if any scalar has a non-zero top byte.
pub fn scalars_to_bytes(scalars: &[Scalar]) -> Result<Vec<u8>, SerializationError> {
    let mut bytes = Vec::with_capacity(scalars.len() * USABLE_BYTES_PER_FIELD_ELEMENT);
    for (index, scalar) in scalars.iter().enumerate() {
        let scalar_bytes = serialize_scalar(scalar);
        if scalar_bytes[USABLE_BYTES_PER_FIELD_ELEMENT..]
            .iter()
            .any(|&byte| byte != 0)
        {
            return Err(SerializationError::ScalarExceedsUsableBytes { index });
        }
        bytes.extend_from_slice(&scalar_bytes[..USABLE_BYTES_PER_FIELD_ELEMENT]);
    }
    Ok(bytes)
}

/// Canonical 32-byte little-endian encoding.
pub fn serialize_scalar(scalar: &Scalar) -> [u8; BYTES_PER_FIELD_ELEMENT] {
    scalar.to_bytes_le()
}

/// Rejects encodings of values at or above the field modulus.
pub fn deserialize_scalar(
    bytes: &[u8; BYTES_PER_FIELD_ELEMENT],
) -> Result<Scalar, SerializationError> {
    Option::from(Scalar::from_bytes_le(bytes)).ok_or_else(|| {
        SerializationError::CouldNotDeserializeScalar {
            bytes: bytes.to_vec(),
        }
    })
}

pub(crate) fn serialize_g1_compressed(point: &G1Point) -> [u8; BYTES_PER_G1_POINT] {
    point.to_compressed()
}

pub(crate) fn serialize_g2_compressed(point: &G2Point) -> [u8; BYTES_PER_G2_POINT] {
    point.to_compressed()
}

/// Decodes a compressed G1 point, including the subgroup check.
pub(crate) fn deserialize_compressed_g1(point_bytes: &[u8]) -> Result<G1Point, SerializationError> {
    let error = || SerializationError::CouldNotDeserializeG1Point {
        bytes: point_bytes.to_vec(),
    };
    let point_bytes: &[u8; BYTES_PER_G1_POINT] = point_bytes.try_into().map_err(|_| error())?;
    Option::from(G1Point::from_compressed(point_bytes)).ok_or_else(error)
}

/// Decodes a compressed G2 point, including the subgroup check.
pub(crate) fn deserialize_compressed_g2(point_bytes: &[u8]) -> Result<G2Point, SerializationError> {
    let error = || SerializationError::CouldNotDeserializeG2Point {
        bytes: point_bytes.to_vec(),
    };
    let point_bytes: &[u8; BYTES_PER_G2_POINT] = point_bytes.try_into().map_err(|_| error())?;
    Option::from(G2Point::from_compressed(point_bytes)).ok_or_else(error)
}
