//! RSAES-OAEP encryption (RFC 8017, section 7.1).
//!
//! Parameters are fixed: hash SHA-256, mask generation MGF1-SHA-256, empty
//! label. A message of up to `k - 66` bytes can be encrypted, where `k` is
//! the byte length of the modulus (190 bytes for a 2048-bit key), and the
//! ciphertext is always exactly `k` bytes.
//!
//! Decryption reports every decoding failure as the same
//! [`CryptoError::DecryptionFailed`], and the padding checks run without
//! data-dependent branches, so the outcome does not reveal which check
//! failed.

use zeroize::Zeroize;

use crate::error::{CryptoError, Result};
use crate::hash::{DIGEST_LEN, mgf1, sha256};
use crate::keys::rsa::{RsaPrivateKey, RsaPublicKey};
use crate::primitives::ct::{ConstantTimeEq, bool_mask, eq_mask, select_usize};
use crate::primitives::{decode, encode_padded};
use crate::rng;

/// Bytes of overhead added by the padding: two hashes plus the leading zero
/// byte and the `0x01` separator.
pub const OAEP_OVERHEAD: usize = 2 * DIGEST_LEN + 2;

/// Longest message that fits a modulus of `modulus_len` bytes.
pub fn max_message_len(modulus_len: usize) -> usize {
    modulus_len.saturating_sub(OAEP_OVERHEAD)
}

/// Encrypts `message` to `key`.
pub fn encrypt(key: &RsaPublicKey, message: &[u8]) -> Result<Vec<u8>> {
    let k = key.modulus_len();

    if k < OAEP_OVERHEAD {
        return Err(CryptoError::InvalidKey("modulus too small for OAEP with SHA-256"));
    }

    let max = max_message_len(k);
    if message.len() > max {
        return Err(CryptoError::MessageTooLong {
            max,
            actual: message.len(),
        });
    }

    // EM = 0x00 || seed || DB,  DB = lHash || PS || 0x01 || M
    let mut em = vec![0u8; k];
    let (seed, db) = em[1..].split_at_mut(DIGEST_LEN);

    rng::fill(seed);

    db[..DIGEST_LEN].copy_from_slice(sha256(&[]).as_bytes());
    let separator = db.len() - message.len() - 1;
    db[separator] = 0x01;
    db[separator + 1..].copy_from_slice(message);

    mgf1::xor_mask(seed, db);
    mgf1::xor_mask(db, seed);

    let m = decode(&em)?;
    em.zeroize();

    let c = key.raw_public(&m)?;

    encode_padded(&c, k)
}

/// Decrypts `ciphertext` (exactly `k` bytes) with `key`.
pub fn decrypt(key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let k = key.public_key().modulus_len();

    if ciphertext.len() != k {
        return Err(CryptoError::InvalidLength {
            what: "ciphertext",
            expected: k,
            actual: ciphertext.len(),
        });
    }

    if k < OAEP_OVERHEAD {
        return Err(CryptoError::DecryptionFailed);
    }

    let c = decode(ciphertext)?;

    if c >= *key.n() {
        return Err(CryptoError::DecryptionFailed);
    }

    let mut m = key.raw_private(&c)?;
    let mut em = encode_padded(&m, k)?;
    m.zeroize();

    let result = unpad(&mut em);
    em.zeroize();

    result
}

fn unpad(em: &mut [u8]) -> Result<Vec<u8>> {
    let leading = em[0];
    let (seed, db) = em[1..].split_at_mut(DIGEST_LEN);

    mgf1::xor_mask(db, seed);
    mgf1::xor_mask(seed, db);

    let label_ok = db[..DIGEST_LEN].ct_eq(sha256(&[]).as_bytes());
    let mut good = eq_mask(leading, 0) & bool_mask(label_ok);

    // Scan PS || 0x01 || M for the separator without branching on content.
    let mut looking = u32::MAX;
    let mut separator = 0usize;

    for (i, &b) in db[DIGEST_LEN..].iter().enumerate() {
        let is_zero = eq_mask(b, 0);
        let is_one = eq_mask(b, 1);

        separator = select_usize(looking & is_one, i, separator);
        good &= !(looking & !is_zero & !is_one);
        looking &= !is_one;
    }

    good &= !looking;

    if good == 0 {
        return Err(CryptoError::DecryptionFailed);
    }

    Ok(db[DIGEST_LEN + separator + 1..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_of_a_2048_bit_key() {
        assert_eq!(max_message_len(256), 190);
        assert_eq!(max_message_len(40), 0);
    }

    #[test]
    fn unpad_rejects_a_non_zero_leading_byte() {
        let mut em = vec![0u8; 128];
        em[0] = 1;

        assert_eq!(unpad(&mut em), Err(CryptoError::DecryptionFailed));
    }
}
