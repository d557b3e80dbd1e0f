use crate::encryption::rsa_oaep;
use crate::error::{CryptoError, Result};
use crate::primitives::BigInteger;
use crate::primitives::big_integer::codec::decode;
use crate::primitives::big_integer::montgomery::Montgomery;
use crate::signatures::rsa_pss;

/// An RSA public key `(e, n)`.
///
/// Invariants, checked by every constructor:
/// - `n` is odd and greater than one, and fits the 2048-bit capacity
/// - `e` is odd and `1 < e < n`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    e: BigInteger,
    n: BigInteger,
}

impl RsaPublicKey {
    /// Builds a public key from its components.
    pub fn new(e: BigInteger, n: BigInteger) -> Result<Self> {
        if n.is_zero() {
            return Err(CryptoError::InvalidKey("modulus is zero"));
        }

        if n.is_even() || n.is_one() {
            return Err(CryptoError::InvalidKey("modulus must be odd and greater than one"));
        }

        if e.is_even() || e <= BigInteger::ONE || e >= n {
            return Err(CryptoError::InvalidKey(
                "public exponent must be odd and between 1 and n",
            ));
        }

        Ok(Self { e, n })
    }

    /// Builds a public key from big-endian encodings of `e` and `n`.
    pub fn construct(e: &[u8], n: &[u8]) -> Result<Self> {
        Self::new(decode(e)?, decode(n)?)
    }

    /// Public exponent.
    #[inline]
    pub fn e(&self) -> &BigInteger {
        &self.e
    }

    /// Modulus.
    #[inline]
    pub fn n(&self) -> &BigInteger {
        &self.n
    }

    /// Length of the modulus in bytes (`k` in RFC 8017); signatures and
    /// ciphertexts are exactly this long.
    #[inline]
    pub fn modulus_len(&self) -> usize {
        self.n.byte_length()
    }

    /// Length of the modulus in bits.
    #[inline]
    pub fn modulus_bits(&self) -> usize {
        self.n.bit_length()
    }

    /// The RSA public permutation `m^e mod n`. Requires `m < n`.
    pub(crate) fn raw_public(&self, m: &BigInteger) -> Result<BigInteger> {
        if *m >= self.n {
            return Err(CryptoError::ValueOutOfRange("representative must be below the modulus"));
        }

        let ctx = Montgomery::new(&self.n).ok_or(CryptoError::InvalidKey("modulus must be odd"))?;

        Ok(ctx.pow(m, &self.e))
    }

    /// Verifies an RSASSA-PSS signature over a 32-byte SHA-256 digest.
    ///
    /// See [`rsa_pss::verify`].
    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> Result<bool> {
        rsa_pss::verify(self, digest, signature)
    }

    /// Encrypts a short message with RSAES-OAEP.
    ///
    /// See [`rsa_oaep::encrypt`].
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        rsa_oaep::encrypt(self, message)
    }
}
