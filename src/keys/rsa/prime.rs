//! Prime generation and probabilistic primality testing.
//!
//! Candidates are drawn uniformly from the OS random source with their two
//! most significant bits forced to one (so that the product of two such
//! primes has exactly twice their bit length) and their lowest bit forced to
//! one. Each candidate is filtered by trial division against the primes
//! below 1000, then by Miller–Rabin with a fixed base 2 followed by
//! random bases.

use log::{debug, trace};
use zeroize::Zeroize;

use super::GenerationParams;
use crate::error::{CryptoError, Result};
use crate::primitives::BigInteger;
use crate::primitives::big_integer::codec::decode;
use crate::primitives::big_integer::montgomery::Montgomery;
use crate::rng;

const SMALL_PRIME_COUNT: usize = 168;

/// The 168 primes below 1000.
const SMALL_PRIMES: [u32; SMALL_PRIME_COUNT] = small_primes();

const fn small_primes() -> [u32; SMALL_PRIME_COUNT] {
    let mut primes = [0u32; SMALL_PRIME_COUNT];
    let mut count = 0;
    let mut candidate = 2u32;

    while count < SMALL_PRIME_COUNT {
        let mut i = 0;
        let mut is_prime = true;

        while i < count {
            if candidate % primes[i] == 0 {
                is_prime = false;
                break;
            }
            i += 1;
        }

        if is_prime {
            primes[count] = candidate;
            count += 1;
        }

        candidate += 1;
    }

    primes
}

/// Returns `true` if `n` is prime with overwhelming probability.
pub(crate) fn is_probable_prime(n: &BigInteger, rounds: u32) -> bool {
    if *n < BigInteger::from_u32(2) {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        if *n == BigInteger::from_u32(p) {
            return true;
        }

        if n.rem_u32(p) == 0 {
            return false;
        }
    }

    miller_rabin(n, rounds)
}

/// Miller–Rabin for an odd `n` without small factors: one round with base 2
/// and `rounds` rounds with random bases.
fn miller_rabin(n: &BigInteger, rounds: u32) -> bool {
    let Some(ctx) = Montgomery::new(n) else {
        return false;
    };

    let n_minus_1 = n.overflowing_sub(&BigInteger::ONE).0;
    let s = n_minus_1.trailing_zeros();
    let d = n_minus_1.shr(s);

    for round in 0..=rounds {
        let base = match round {
            0 => BigInteger::from_u32(2),
            _ => random_witness(n),
        };

        let mut x = ctx.pow(&base, &d);

        if x.is_one() || x == n_minus_1 {
            continue;
        }

        let mut witnessed_composite = true;

        for _ in 1..s {
            x = ctx.mul_mod(&x, &x);

            if x == n_minus_1 {
                witnessed_composite = false;
                break;
            }

            if x.is_one() {
                break;
            }
        }

        if witnessed_composite {
            return false;
        }
    }

    true
}

/// Random base in `[2, n - 2]`, drawn from the values below `2^(bits - 1)`.
fn random_witness(n: &BigInteger) -> BigInteger {
    let bits = n.bit_length() - 1;
    let mut bytes = vec![0u8; bits.div_ceil(8)];

    rng::fill(&mut bytes);

    let witness = decode(&bytes)
        .unwrap_or(BigInteger::ZERO)
        .shr(bytes.len() * 8 - bits);

    if witness < BigInteger::from_u32(2) {
        BigInteger::from_u32(2)
    } else {
        witness
    }
}

/// Draws a random prime of exactly `bits` bits (a multiple of 8) such that
/// `gcd(e, p - 1) = 1`.
pub(crate) fn generate_prime(
    bits: usize,
    e: &BigInteger,
    params: &GenerationParams,
) -> Result<BigInteger> {
    let mut bytes = vec![0u8; bits / 8];

    for attempt in 1..=params.max_candidates {
        rng::fill(&mut bytes);

        let mut candidate = decode(&bytes)?;
        candidate.set_bit(bits - 1);
        candidate.set_bit(bits - 2);
        candidate.set_bit(0);

        if SMALL_PRIMES.iter().any(|&p| candidate.rem_u32(p) == 0) {
            continue;
        }

        let candidate_minus_1 = candidate.overflowing_sub(&BigInteger::ONE).0;

        if !e.gcd(&candidate_minus_1).is_one() {
            trace!("prime candidate {attempt} rejected: p - 1 shares a factor with e");
            continue;
        }

        if miller_rabin(&candidate, params.miller_rabin_rounds) {
            debug!("found {bits}-bit prime after {attempt} candidates");
            bytes.zeroize();
            return Ok(candidate);
        }

        trace!("prime candidate {attempt} rejected by Miller-Rabin");
    }

    bytes.zeroize();

    Err(CryptoError::PrimeGenerationExhausted {
        attempts: params.max_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_prime_table() {
        assert_eq!(SMALL_PRIMES[0], 2);
        assert_eq!(SMALL_PRIMES[25], 101);
        assert_eq!(SMALL_PRIMES[SMALL_PRIME_COUNT - 1], 997);
    }

    #[test]
    fn classifies_small_numbers() {
        let primes = [2u32, 3, 5, 997, 1009, 7919, 104_729];
        let composites = [0u32, 1, 4, 9, 1001, 1_018_081, 561];

        for p in primes {
            assert!(is_probable_prime(&BigInteger::from_u32(p), 3), "{p}");
        }

        for c in composites {
            assert!(!is_probable_prime(&BigInteger::from_u32(c), 3), "{c}");
        }
    }

    #[test]
    fn rejects_products_of_primes_above_the_trial_bound() {
        for n in [1_009u64 * 1_013, 7_919 * 104_729] {
            assert!(!is_probable_prime(&BigInteger::from_u64(n), 5), "{n}");
        }
    }

    #[test]
    fn mersenne_prime_127() {
        let mut p = BigInteger::ZERO;
        p.limbs[..4].copy_from_slice(&[u32::MAX, u32::MAX, u32::MAX, 0x7fff_ffff]);

        assert!(is_probable_prime(&p, 5));
    }

    #[test]
    fn generated_prime_has_requested_shape() {
        let params = GenerationParams::default();
        let e = BigInteger::from_u32(params.public_exponent);
        let p = generate_prime(256, &e, &params).unwrap();

        assert_eq!(p.bit_length(), 256);
        assert!(p.bit(254));
        assert!(p.is_odd());
        assert!(is_probable_prime(&p, 5));
    }

    #[test]
    fn exhausted_candidate_budget_is_an_error() {
        let params = GenerationParams {
            max_candidates: 1,
            ..GenerationParams::default()
        };
        let e = BigInteger::from_u32(params.public_exponent);

        // One draw rarely yields a prime; any success must still be prime.
        let outcomes: Vec<_> = (0..5).map(|_| generate_prime(512, &e, &params)).collect();

        for outcome in &outcomes {
            match outcome {
                Ok(p) => assert!(is_probable_prime(p, 5)),
                Err(err) => assert_eq!(*err, CryptoError::PrimeGenerationExhausted { attempts: 1 }),
            }
        }

        assert!(outcomes.iter().any(Result::is_err));
    }

    #[test]
    fn candidate_budget_is_counted_exactly() {
        // An even exponent shares the factor 2 with every p - 1, so no
        // candidate can ever be accepted.
        let params = GenerationParams {
            max_candidates: 7,
            ..GenerationParams::default()
        };

        assert_eq!(
            generate_prime(256, &BigInteger::from_u32(2), &params),
            Err(CryptoError::PrimeGenerationExhausted { attempts: 7 })
        );
    }
}
