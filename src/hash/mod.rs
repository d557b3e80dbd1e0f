//! Hash algorithms exposed by the crate.
//!
//! SHA-256 is the only hash function of the engine. It is used directly by
//! callers (content addressing, signing digests) and internally by the RSA
//! padding schemes through MGF1.

mod digest;
pub(crate) mod mgf1;
pub mod sha256;

pub use digest::{DIGEST_LEN, Digest};

/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;
