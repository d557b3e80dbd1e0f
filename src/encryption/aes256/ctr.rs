//! Counter-mode (CTR) stream construction over AES-256.
//!
//! The keystream is the concatenation of `AES(counter)`, `AES(counter + 1)`,
//! ... where the counter is a 128-bit big-endian integer that wraps modulo
//! 2¹²⁸. Encryption and decryption are the same operation.

use super::cipher::{Aes256, Aes256Key, BLOCK_LEN};
use crate::error::{CryptoError, Result};

/// Counter size in bytes.
pub const COUNTER_LEN: usize = 16;

/// A 128-bit big-endian CTR counter block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counter([u8; COUNTER_LEN]);

impl Counter {
    /// Validates that `bytes` is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let counter: [u8; COUNTER_LEN] =
            bytes.try_into().map_err(|_| CryptoError::InvalidLength {
                what: "counter",
                expected: COUNTER_LEN,
                actual: bytes.len(),
            })?;

        Ok(Self(counter))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; COUNTER_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; COUNTER_LEN] {
        self.0
    }

    /// Adds a signed `delta`, wrapping modulo 2¹²⁸.
    ///
    /// A negative delta is sign-extended to 128 bits, so adding `-1` to a
    /// zero counter yields the all-ones counter.
    pub fn add(&self, delta: i64) -> Self {
        let value = u128::from_be_bytes(self.0).wrapping_add(delta as i128 as u128);
        Self(value.to_be_bytes())
    }

    /// The counter of the next keystream block.
    #[inline]
    pub fn increment(&self) -> Self {
        self.add(1)
    }
}

impl From<[u8; COUNTER_LEN]> for Counter {
    fn from(value: [u8; COUNTER_LEN]) -> Self {
        Self(value)
    }
}

impl Aes256 {
    /// XORs `data` with the keystream starting at `start`.
    ///
    /// The output always has the length of the input, the empty input
    /// included.
    pub fn crypt(&self, data: &[u8], start: &Counter) -> Vec<u8> {
        let mut out = data.to_vec();
        let mut counter = *start;

        for chunk in out.chunks_mut(BLOCK_LEN) {
            let keystream = self.encrypt_block(counter.as_bytes());

            chunk
                .iter_mut()
                .zip(keystream.iter())
                .for_each(|(b, k)| *b ^= k);

            counter = counter.increment();
        }

        out
    }
}

/// Encrypts or decrypts `bytes` with AES-256-CTR.
///
/// Fails with [`CryptoError::InvalidLength`] unless `key` is 32 bytes and
/// `start_counter` is 16 bytes.
pub fn aes_crypt(bytes: &[u8], key: &[u8], start_counter: &[u8]) -> Result<Vec<u8>> {
    let key = Aes256Key::from_slice(key)?;
    let counter = Counter::from_slice(start_counter)?;

    Ok(Aes256::new(&key).crypt(bytes, &counter))
}

/// Adds `delta` to a raw 16-byte counter, see [`Counter::add`].
pub fn counter_add(counter: &[u8], delta: i64) -> Result<Counter> {
    Ok(Counter::from_slice(counter)?.add(delta))
}
