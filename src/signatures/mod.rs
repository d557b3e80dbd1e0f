//! Digital signature algorithms.
//!
//! - [`rsa_pss`]: RSASSA-PSS (RFC 8017, section 8.1) with SHA-256, MGF1 and
//!   a 32-byte random salt, signing SHA-256 digests.

pub mod rsa_pss;
