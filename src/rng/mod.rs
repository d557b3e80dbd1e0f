//! Random number generation module
//!
//! This module provides cryptographically secure randomness for the rest of
//! the crate and for host bindings.
//!
//! Every byte is drawn directly from the operating system CSPRNG (see
//! [`crate::os`]); there is no user-space generator that could be seeded
//! deterministically. A failure of the entropy source is treated as fatal.

mod random;

/// Maximum number of bytes returned by a single [`random_bytes`] call.
pub use random::MAX_RANDOM_BYTES;
pub use random::random_bytes;

pub(crate) use random::fill;
