//! Parameters for RSA key generation.

use crate::error::{CryptoError, Result};
use crate::primitives::BIG_INTEGER_BITS;

/// The standard public exponent F4 = 2¹⁶ + 1.
pub const DEFAULT_PUBLIC_EXPONENT: u32 = 65_537;

/// Random-base Miller–Rabin rounds applied after the fixed base-2 round.
///
/// Five rounds bring the error probability for random 1024-bit candidates
/// far below 2⁻¹⁰⁰ (FIPS 186-4, table C.2).
pub const DEFAULT_MILLER_RABIN_ROUNDS: u32 = 5;

/// Configuration of [`RsaPrivateKey::generate_with`].
///
/// [`RsaPrivateKey::generate_with`]: super::RsaPrivateKey::generate_with
#[derive(Clone, Debug)]
pub struct GenerationParams {
    /// Size of the modulus in bits (1024..=2048, multiple of 16).
    pub modulus_bits: usize,
    /// Public exponent (odd, at least 3).
    pub public_exponent: u32,
    /// Random-base Miller–Rabin rounds per candidate (at least 1).
    pub miller_rabin_rounds: u32,
    /// Upper bound on the candidates drawn for each prime (at least 1).
    pub max_candidates: u32,
}

impl GenerationParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.modulus_bits < 1024
            || self.modulus_bits > BIG_INTEGER_BITS
            || self.modulus_bits % 16 != 0
        {
            return Err(CryptoError::ValueOutOfRange(
                "modulus size must be a multiple of 16 between 1024 and 2048 bits",
            ));
        }

        if self.public_exponent < 3 || self.public_exponent % 2 == 0 {
            return Err(CryptoError::ValueOutOfRange(
                "public exponent must be odd and at least 3",
            ));
        }

        if self.miller_rabin_rounds < 1 {
            return Err(CryptoError::ValueOutOfRange(
                "at least one Miller-Rabin round is required",
            ));
        }

        if self.max_candidates < 1 {
            return Err(CryptoError::ValueOutOfRange(
                "at least one prime candidate must be allowed",
            ));
        }

        Ok(())
    }
}

impl Default for GenerationParams {
    /// 2048-bit modulus, e = 65537, 5 Miller–Rabin rounds, 10 000
    /// candidates per prime.
    fn default() -> Self {
        Self {
            modulus_bits: BIG_INTEGER_BITS,
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            miller_rabin_rounds: DEFAULT_MILLER_RABIN_ROUNDS,
            max_candidates: 10_000,
        }
    }
}
