/// The number of bytes needed to represent a scalar in its canonical encoding.
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// The number of payload bytes packed into one scalar.
///
/// The top byte of the 32-byte little-endian encoding is left zero, so any
/// 31 bytes give a value below the field modulus.
pub const USABLE_BYTES_PER_FIELD_ELEMENT: usize = 31;

/// The number of bytes in a compressed G1 point.
pub const BYTES_PER_G1_POINT: usize = 48;

/// The number of bytes in a compressed G2 point.
pub const BYTES_PER_G2_POINT: usize = 96;

/// Ratio of extended data to original data.
pub const EXPANSION_FACTOR: usize = 2;

/// `log2` of the default number of data elements.
pub const DEFAULT_SCALE: u8 = 10;

/// Default number of evaluations per sample.
pub const DEFAULT_COSET_WIDTH: usize = 128;
