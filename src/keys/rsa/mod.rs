//! RSA keys.
//!
//! - [`RsaPublicKey`]: `(e, n)`, built with [`RsaPublicKey::new`] or
//!   [`RsaPublicKey::construct`] from big-endian bytes.
//! - [`RsaPrivateKey`]: the public key plus `p`, `q`, `d` and the CRT
//!   values, created by [`RsaPrivateKey::generate`] or
//!   [`RsaPrivateKey::construct`].
//!
//! Construction validates eagerly: a key value that exists is usable, so
//! no operation has to re-check a validity flag.

mod params;
pub(crate) mod prime;
mod private;
mod public;

pub use params::{DEFAULT_MILLER_RABIN_ROUNDS, DEFAULT_PUBLIC_EXPONENT, GenerationParams};
pub use private::RsaPrivateKey;
pub use public::RsaPublicKey;
