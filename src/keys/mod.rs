//! Asymmetric key material.
//!
//! This module defines the RSA key types together with key generation,
//! construction from raw components and the raw (unpadded) RSA
//! permutations.
//!
//! Padding schemes live next to the algorithms that use them:
//! [`crate::signatures::rsa_pss`] for signatures and
//! [`crate::encryption::rsa_oaep`] for encryption. The key types expose
//! convenience methods that delegate to those modules.
//!
//! ## RSA
//!
//! Keys are bounded by the fixed capacity of
//! [`BigInteger`](crate::primitives::BigInteger): moduli of at most 2048
//! bits. Generation always yields 2048-bit moduli by default, with
//! `e = 65537` and `d = e⁻¹ mod λ(n)`.
pub mod rsa;
