use std::fmt::{Debug, Formatter};

use log::debug;
use zeroize::Zeroize;

use super::params::{DEFAULT_MILLER_RABIN_ROUNDS, GenerationParams};
use super::prime::{generate_prime, is_probable_prime};
use super::public::RsaPublicKey;
use crate::encryption::rsa_oaep;
use crate::error::{CryptoError, Result};
use crate::os::time::Timestamp;
use crate::primitives::big_integer::codec::decode;
use crate::primitives::big_integer::montgomery::Montgomery;
use crate::primitives::{BIG_INTEGER_BYTES, BigInteger};
use crate::signatures::rsa_pss;

/// An RSA private key.
///
/// Besides the public key and the primes, the key stores the values
/// needed for CRT-based private operations:
/// - `d = e⁻¹ mod λ(n)` with `λ(n) = lcm(p - 1, q - 1)`
/// - `dp = d mod (p - 1)`, `dq = d mod (q - 1)`
/// - `qinv = q⁻¹ mod p`
///
/// All secret components are wiped when the key is dropped. `Debug` only
/// prints the public part.
#[derive(Clone)]
pub struct RsaPrivateKey {
    public: RsaPublicKey,
    p: BigInteger,
    q: BigInteger,
    d: BigInteger,
    dp: BigInteger,
    dq: BigInteger,
    qinv: BigInteger,
}

impl RsaPrivateKey {
    /// Generates a fresh 2048-bit key with `e = 65537`.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&GenerationParams::default())
    }

    /// Generates a fresh key with explicit parameters.
    ///
    /// Fails with [`CryptoError::PrimeGenerationExhausted`] if a prime could
    /// not be found within `params.max_candidates` draws.
    pub fn generate_with(params: &GenerationParams) -> Result<Self> {
        params.validate()?;

        let started = Timestamp::now();
        let e = BigInteger::from_u32(params.public_exponent);
        let prime_bits = params.modulus_bits / 2;

        debug!(
            "generating {}-bit RSA key (e = {}, {} Miller-Rabin rounds)",
            params.modulus_bits, params.public_exponent, params.miller_rabin_rounds
        );

        let p = generate_prime(prime_bits, &e, params)?;
        let q = loop {
            let q = generate_prime(prime_bits, &e, params)?;

            if q != p {
                break q;
            }
        };

        let key = Self::from_primes(e, p, q)?;

        debug!(
            "generated {}-bit RSA key in {} µs",
            key.public.modulus_bits(),
            started.elapsed_micros()
        );

        Ok(key)
    }

    /// Builds a private key from `e`, `p` and `q`.
    ///
    /// `p` and `q` must be distinct odd primes (checked with Miller–Rabin),
    /// `n = p·q` must fit the 2048-bit capacity and `e` must be odd, below
    /// `n` and invertible modulo `λ(n)`.
    pub fn from_components(e: BigInteger, p: BigInteger, q: BigInteger) -> Result<Self> {
        let three = BigInteger::from_u32(3);

        if p < three || q < three || p.is_even() || q.is_even() {
            return Err(CryptoError::InvalidKey("p and q must be odd primes"));
        }

        if p == q {
            return Err(CryptoError::InvalidKey("p and q must be distinct"));
        }

        if !is_probable_prime(&p, DEFAULT_MILLER_RABIN_ROUNDS)
            || !is_probable_prime(&q, DEFAULT_MILLER_RABIN_ROUNDS)
        {
            return Err(CryptoError::InvalidKey("p and q must be odd primes"));
        }

        Self::from_primes(e, p, q)
    }

    /// Builds a private key from big-endian encodings of `e`, `p` and `q`.
    pub fn construct(e: &[u8], p: &[u8], q: &[u8]) -> Result<Self> {
        Self::from_components(decode(e)?, decode(p)?, decode(q)?)
    }

    /// Derives `n`, `d` and the CRT values from primes that are already
    /// known to be distinct odd primes.
    fn from_primes(e: BigInteger, p: BigInteger, q: BigInteger) -> Result<Self> {
        let n = p
            .checked_mul(&q)
            .ok_or(CryptoError::CapacityExceeded {
                required: (p.bit_length() + q.bit_length()).div_ceil(8),
                capacity: BIG_INTEGER_BYTES,
            })?;

        let public = RsaPublicKey::new(e, n)?;

        let p1 = p.overflowing_sub(&BigInteger::ONE).0;
        let q1 = q.overflowing_sub(&BigInteger::ONE).0;

        let lambda = p1
            .lcm(&q1)
            .ok_or(CryptoError::InvalidKey("λ(n) exceeds capacity"))?;
        let d = e
            .mod_inverse(&lambda)
            .ok_or(CryptoError::InvalidKey("public exponent is not invertible modulo λ(n)"))?;

        let dp = d.rem(&p1).ok_or(CryptoError::InvalidKey("p must be greater than one"))?;
        let dq = d.rem(&q1).ok_or(CryptoError::InvalidKey("q must be greater than one"))?;
        let qinv = q
            .mod_inverse(&p)
            .ok_or(CryptoError::InvalidKey("q is not invertible modulo p"))?;

        Ok(Self {
            public,
            p,
            q,
            d,
            dp,
            dq,
            qinv,
        })
    }

    /// The public half of this key.
    #[inline]
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    /// Returns an owned copy of the public key `(e, n)`.
    pub fn to_public_key(&self) -> RsaPublicKey {
        self.public.clone()
    }

    #[inline]
    pub fn e(&self) -> &BigInteger {
        self.public.e()
    }

    #[inline]
    pub fn n(&self) -> &BigInteger {
        self.public.n()
    }

    #[inline]
    pub fn p(&self) -> &BigInteger {
        &self.p
    }

    #[inline]
    pub fn q(&self) -> &BigInteger {
        &self.q
    }

    #[inline]
    pub fn d(&self) -> &BigInteger {
        &self.d
    }

    /// The RSA private permutation `c^d mod n`, computed with the CRT and
    /// checked against the public exponent before being returned.
    pub(crate) fn raw_private(&self, c: &BigInteger) -> Result<BigInteger> {
        if *c >= *self.n() {
            return Err(CryptoError::ValueOutOfRange("representative must be below the modulus"));
        }

        let invalid = || CryptoError::InvalidKey("prime factors must be odd");
        let ctx_p = Montgomery::new(&self.p).ok_or_else(invalid)?;
        let ctx_q = Montgomery::new(&self.q).ok_or_else(invalid)?;

        let m1 = ctx_p.pow(c, &self.dp);
        let m2 = ctx_q.pow(c, &self.dq);

        let m2_mod_p = m2.rem(&self.p).ok_or_else(invalid)?;
        let h = ctx_p.mul_mod(&self.qinv, &m1.sub_mod(&m2_mod_p, &self.p));

        let m = h
            .checked_mul(&self.q)
            .and_then(|hq| hq.checked_add(&m2))
            .ok_or(CryptoError::InvalidKey("CRT recombination exceeds the modulus"))?;

        if self.public.raw_public(&m)? != *c {
            return Err(CryptoError::InvalidKey(
                "private operation failed the public-exponent check",
            ));
        }

        Ok(m)
    }

    /// Signs a 32-byte SHA-256 digest with RSASSA-PSS.
    ///
    /// See [`rsa_pss::sign`].
    pub fn sign(&self, digest: &[u8]) -> Result<Vec<u8>> {
        rsa_pss::sign(self, digest)
    }

    /// Verifies a signature against the public half of this key.
    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> Result<bool> {
        self.public.verify(digest, signature)
    }

    /// Encrypts to the public half of this key.
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.public.encrypt(message)
    }

    /// Decrypts an RSAES-OAEP ciphertext.
    ///
    /// See [`rsa_oaep::decrypt`].
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        rsa_oaep::decrypt(self, ciphertext)
    }
}

impl Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
        self.d.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Textbook key: p = 61, q = 53, n = 3233, e = 17, λ = 780, d = 413.
    fn textbook() -> RsaPrivateKey {
        RsaPrivateKey::from_components(
            BigInteger::from_u32(17),
            BigInteger::from_u32(61),
            BigInteger::from_u32(53),
        )
        .unwrap()
    }

    #[test]
    fn derives_lambda_based_exponent() {
        let key = textbook();

        assert_eq!(*key.n(), BigInteger::from_u32(3233));
        assert_eq!(*key.d(), BigInteger::from_u32(413));
        assert_eq!(key.dp, BigInteger::from_u32(53));
        assert_eq!(key.dq, BigInteger::from_u32(49));
        assert_eq!(key.qinv, BigInteger::from_u32(38));
    }

    #[test]
    fn crt_private_operation_inverts_public_operation() {
        let key = textbook();

        for m in [0u32, 1, 2, 65, 1000, 3232] {
            let m = BigInteger::from_u32(m);
            let c = key.public_key().raw_public(&m).unwrap();

            assert_eq!(key.raw_private(&c).unwrap(), m);
        }
    }

    #[test]
    fn rejects_representative_not_below_modulus() {
        let key = textbook();

        assert!(key.raw_private(&BigInteger::from_u32(3233)).is_err());
        assert!(key.public_key().raw_public(&BigInteger::from_u32(4000)).is_err());
    }
}
