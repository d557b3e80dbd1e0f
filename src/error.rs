//! Error type shared by every primitive of the crate.
//!
//! Failures fall into a small number of families:
//!
//! - **validation**: an input buffer has the wrong length or a value is out
//!   of the accepted range (`InvalidLength`, `MessageTooLong`,
//!   `ValueOutOfRange`)
//! - **capacity**: an integer does not fit the fixed 256-byte capacity
//!   (`CapacityExceeded`)
//! - **construction**: RSA components do not satisfy the required
//!   number-theoretic relations (`InvalidKey`)
//! - **entropy**: the operating system could not provide random bytes
//!   (`Entropy`)
//!
//! A signature that does not verify is *not* an error: verification returns
//! `Ok(false)`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("message too long: at most {max} bytes allowed, got {actual}")]
    MessageTooLong { max: usize, actual: usize },

    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),

    #[error("integer needs {required} bytes but capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    #[error("decryption failed")]
    DecryptionFailed,

    #[error("no prime found after {attempts} candidates")]
    PrimeGenerationExhausted { attempts: u32 },

    #[error("entropy source failed: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
