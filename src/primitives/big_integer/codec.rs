//! Big-endian byte encoding of [`BigInteger`] values.
//!
//! The canonical encoding is the **minimal** big-endian byte sequence: no
//! leading zero bytes, and the value zero is the *empty* sequence. Decoding
//! accepts any number of leading zero bytes, so padded representations
//! (as produced by [`encode_padded`]) round-trip as well.
//!
//! Overflow is never silent: encoding into a buffer that is too small and
//! decoding more than [`BIG_INTEGER_BYTES`] significant bytes both fail
//! with [`CryptoError::CapacityExceeded`].

use super::{BIG_INTEGER_BYTES, BigInteger};
use crate::error::{CryptoError, Result};

/// Encodes `value` in its minimal big-endian form, which must not exceed
/// `capacity` bytes.
pub fn encode(value: &BigInteger, capacity: usize) -> Result<Vec<u8>> {
    let required = value.byte_length();

    if required > capacity {
        return Err(CryptoError::CapacityExceeded { required, capacity });
    }

    Ok(value.to_bytes())
}

/// Encodes `value` big-endian, left-padded with zeros to exactly `len`
/// bytes (I2OSP in RFC 8017 terms).
pub fn encode_padded(value: &BigInteger, len: usize) -> Result<Vec<u8>> {
    let required = value.byte_length();

    if required > len {
        return Err(CryptoError::CapacityExceeded {
            required,
            capacity: len,
        });
    }

    let mut out = vec![0u8; len];
    write_be(value, &mut out[len - required..]);

    Ok(out)
}

/// Decodes a big-endian byte sequence. The empty sequence decodes to zero.
pub fn decode(bytes: &[u8]) -> Result<BigInteger> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];

    if significant.len() > BIG_INTEGER_BYTES {
        return Err(CryptoError::CapacityExceeded {
            required: significant.len(),
            capacity: BIG_INTEGER_BYTES,
        });
    }

    let mut value = BigInteger::ZERO;

    for (i, chunk) in significant.rchunks(4).enumerate() {
        value.limbs[i] = chunk.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32);
    }

    Ok(value)
}

/// Writes the low `out.len()` bytes of `value` big-endian into `out`.
fn write_be(value: &BigInteger, out: &mut [u8]) {
    for (i, byte) in out.iter_mut().rev().enumerate() {
        *byte = (value.limbs[i / 4] >> ((i % 4) * 8)) as u8;
    }
}

impl BigInteger {
    /// Minimal big-endian encoding; zero yields an empty vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.byte_length()];
        write_be(self, &mut out);
        out
    }

    /// Decodes a big-endian byte sequence, see [`decode`].
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }
}
