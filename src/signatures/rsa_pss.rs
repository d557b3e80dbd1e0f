//! RSASSA-PSS signatures over SHA-256 digests.
//!
//! Parameters are fixed: hash SHA-256, mask generation MGF1-SHA-256, salt
//! length 32 bytes, trailer field `0xBC`. The signed value is a 32-byte
//! digest (`mHash` in RFC 8017), not the message itself.
//!
//! A signature is the big-endian encoding of `s` on exactly `k` bytes,
//! where `k` is the byte length of the modulus.

use zeroize::Zeroize;

use crate::error::{CryptoError, Result};
use crate::hash::{DIGEST_LEN, Digest, mgf1, sha256};
use crate::keys::rsa::{RsaPrivateKey, RsaPublicKey};
use crate::primitives::ct::ConstantTimeEq;
use crate::primitives::{decode, encode_padded};
use crate::rng;

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;

const TRAILER: u8 = 0xbc;

/// `SHA-256(0x00 × 8 || digest || salt)`, the `H` of RFC 8017.
fn salted_hash(digest: &Digest, salt: &[u8]) -> Digest {
    let mut m_prime = [0u8; 8 + DIGEST_LEN + SALT_LEN];

    m_prime[8..8 + DIGEST_LEN].copy_from_slice(digest.as_bytes());
    m_prime[8 + DIGEST_LEN..].copy_from_slice(salt);

    sha256(&m_prime)
}

/// EMSA-PSS-ENCODE for an encoded message of `em_bits` bits.
fn encode(digest: &Digest, em_bits: usize) -> Result<Vec<u8>> {
    let em_len = em_bits.div_ceil(8);

    if em_len < DIGEST_LEN + SALT_LEN + 2 {
        return Err(CryptoError::InvalidKey("modulus too small for PSS with SHA-256"));
    }

    let mut salt = [0u8; SALT_LEN];
    rng::fill(&mut salt);

    let h = salted_hash(digest, &salt);

    // DB = PS || 0x01 || salt
    let db_len = em_len - DIGEST_LEN - 1;
    let mut em = vec![0u8; em_len];
    em[db_len - SALT_LEN - 1] = 0x01;
    em[db_len - SALT_LEN..db_len].copy_from_slice(&salt);

    mgf1::xor_mask(h.as_bytes(), &mut em[..db_len]);
    em[0] &= 0xff >> (8 * em_len - em_bits);

    em[db_len..em_len - 1].copy_from_slice(h.as_bytes());
    em[em_len - 1] = TRAILER;

    salt.zeroize();

    Ok(em)
}

/// EMSA-PSS-VERIFY; returns `false` on any inconsistency.
fn verify_encoding(digest: &Digest, em: &mut [u8], em_bits: usize) -> bool {
    let em_len = em.len();

    if em_len < DIGEST_LEN + SALT_LEN + 2 || em[em_len - 1] != TRAILER {
        return false;
    }

    let db_len = em_len - DIGEST_LEN - 1;
    let top_mask = 0xffu8 >> (8 * em_len - em_bits);

    if em[0] & !top_mask != 0 {
        return false;
    }

    let (db, rest) = em.split_at_mut(db_len);
    let h = &rest[..DIGEST_LEN];

    mgf1::xor_mask(h, db);
    db[0] &= top_mask;

    let ps_len = db_len - SALT_LEN - 1;

    if db[..ps_len].iter().any(|&b| b != 0) || db[ps_len] != 0x01 {
        return false;
    }

    let expected = salted_hash(digest, &db[ps_len + 1..]);

    expected.as_bytes()[..].ct_eq(h)
}

/// Signs `digest` (exactly 32 bytes) with `key`.
pub fn sign(key: &RsaPrivateKey, digest: &[u8]) -> Result<Vec<u8>> {
    let digest = Digest::from_slice(digest)?;
    let public = key.public_key();

    let em = encode(&digest, public.modulus_bits() - 1)?;
    let m = decode(&em)?;
    let s = key.raw_private(&m)?;

    encode_padded(&s, public.modulus_len())
}

/// Verifies `signature` over `digest` with `key`.
///
/// Returns `Ok(false)` when the signature does not match. Fails only when
/// `digest` is not 32 bytes or `signature` is not exactly as long as the
/// modulus.
pub fn verify(key: &RsaPublicKey, digest: &[u8], signature: &[u8]) -> Result<bool> {
    let digest = Digest::from_slice(digest)?;
    let k = key.modulus_len();

    if signature.len() != k {
        return Err(CryptoError::InvalidLength {
            what: "signature",
            expected: k,
            actual: signature.len(),
        });
    }

    let s = decode(signature)?;

    if s >= *key.n() {
        return Ok(false);
    }

    let m = key.raw_public(&s)?;
    let em_bits = key.modulus_bits() - 1;

    // The representative must fit in emLen bytes, which is one byte short
    // of k when the modulus bit length is 1 mod 8.
    let mut em = match encode_padded(&m, em_bits.div_ceil(8)) {
        Ok(em) => em,
        Err(_) => return Ok(false),
    };

    Ok(verify_encoding(&digest, &mut em, em_bits))
}
