//! Primitive types
//!
//! This module defines the low-level building blocks shared by the
//! cryptographic algorithms of the crate.
//!
//! Primitives are fixed-size, allocation-free where possible, and have
//! well-defined semantics. They are intentionally minimal and do not attempt
//! to replicate a full-featured big-integer library.
//!
//! Current primitives include:
//! - `BigInteger`: a fixed-capacity (2048-bit) non-negative integer with the
//!   arithmetic RSA requires, and its big-endian byte codec
//! - constant-time comparison helpers used by verification and decoding

pub mod big_integer;
pub(crate) mod ct;

pub use big_integer::codec::{decode, encode, encode_padded};
pub use big_integer::{BIG_INTEGER_BITS, BIG_INTEGER_BYTES, BigInteger};
