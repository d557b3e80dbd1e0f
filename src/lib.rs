//! Cryptographic engine for Condensation
//!
//! This crate provides the small set of cryptographic primitives the
//! Condensation content-addressed storage protocol is built on: RSA key
//! management, AES-256 stream encryption, SHA-256 hashing, secure random
//! generation and the fixed-size big-integer codec used to serialize key
//! components.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! integer, key and signature fits a fixed capacity of 256 bytes (2048-bit
//! RSA moduli); nothing is silently truncated, and invalid inputs are
//! rejected with a [`CryptoError`] instead of producing half-valid values.
//!
//! # Module overview
//!
//! - `primitives`
//!   The fixed-capacity [`BigInteger`] with the arithmetic RSA needs
//!   (Montgomery exponentiation, modular inversion) and its canonical
//!   big-endian byte codec.
//!
//! - `hash`
//!   SHA-256 (FIPS 180-4) and the MGF1 mask generation function built on
//!   it.
//!
//! - `rng`
//!   Secure random bytes drawn directly from the operating system.
//!
//! - `encryption`
//!   AES-256 in counter mode, including standalone counter arithmetic, and
//!   RSAES-OAEP.
//!
//! - `keys`
//!   RSA private and public keys: generation, construction from raw
//!   components, and the raw RSA permutations.
//!
//! - `signatures`
//!   RSASSA-PSS over SHA-256 digests.
//!
//! - `os`
//!   Platform entropy sources and a monotonic elapsed-time helper.
//!
//! # Operations
//!
//! | Operation                         | Entry point                                  |
//! |-----------------------------------|----------------------------------------------|
//! | random bytes                      | [`random_bytes`]                             |
//! | SHA-256                           | [`sha256`]                                   |
//! | AES-256-CTR                       | [`aes_crypt`], [`Aes256::crypt`]             |
//! | counter arithmetic                | [`counter_add`], [`Counter::add`]            |
//! | RSA key generation                | [`RsaPrivateKey::generate`]                  |
//! | RSA key from `e`, `p`, `q`        | [`RsaPrivateKey::construct`]                 |
//! | public key of a private key       | [`RsaPrivateKey::to_public_key`]             |
//! | RSA public key from `e`, `n`      | [`RsaPublicKey::construct`]                  |
//! | sign / verify                     | [`RsaPrivateKey::sign`], [`RsaPublicKey::verify`] |
//! | encrypt / decrypt                 | [`RsaPublicKey::encrypt`], [`RsaPrivateKey::decrypt`] |
//! | elapsed time                      | [`Timestamp::now`], [`Timestamp::elapsed_micros`] |
//!
//! # Design goals
//!
//! - Fixed, compile-time capacity for all key material
//! - Minimal and explicit APIs built from validating constructors
//! - Secret key material wiped on drop
//! - No network, persistence or key-management policy: only primitives

pub mod encryption;
pub mod error;
pub mod hash;
pub mod keys;
pub mod os;
pub mod primitives;
pub mod rng;
pub mod signatures;

pub use encryption::aes256::{
    AES256_KEY_LEN, Aes256, Aes256Key, COUNTER_LEN, Counter, aes_crypt, counter_add,
};
pub use error::{CryptoError, Result};
pub use hash::{DIGEST_LEN, Digest, sha256};
pub use keys::rsa::{GenerationParams, RsaPrivateKey, RsaPublicKey};
pub use os::time::Timestamp;
pub use primitives::{BIG_INTEGER_BYTES, BigInteger};
pub use rng::{MAX_RANDOM_BYTES, random_bytes};
