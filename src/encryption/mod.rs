//! Encryption algorithms.
//!
//! - [`aes256`]: AES-256 block cipher and the CTR stream construction used
//!   for symmetric encryption of content.
//! - [`rsa_oaep`]: RSAES-OAEP (RFC 8017) with SHA-256, used to encrypt
//!   short secrets such as AES keys to an RSA public key.

pub mod aes256;
pub mod rsa_oaep;
