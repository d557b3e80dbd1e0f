//! AES-256 in counter mode.
//!
//! - [`cipher`]: the FIPS-197 block cipher (key expansion and the
//!   encryption direction of the round function).
//! - [`ctr`]: the counter-mode stream construction and the standalone
//!   counter arithmetic used to seek within a keystream.
//!
//! Only encryption of single blocks is implemented: CTR mode never needs
//! the inverse cipher, since encrypting and decrypting are the same XOR
//! with the keystream.

pub mod cipher;
pub mod ctr;

pub use cipher::{AES256_KEY_LEN, Aes256, Aes256Key, BLOCK_LEN};
pub use ctr::{COUNTER_LEN, Counter, aes_crypt, counter_add};
