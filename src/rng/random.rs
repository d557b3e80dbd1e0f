//! OS-backed secure random bytes.

use crate::os::sys_random;

/// Upper bound of a single [`random_bytes`] request.
pub const MAX_RANDOM_BYTES: usize = 256;

/// Returns `count` cryptographically secure random bytes.
///
/// The requested count is clamped into `0..=256`: negative requests yield an
/// empty vector and anything above [`MAX_RANDOM_BYTES`] yields exactly 256
/// bytes. Clamping is part of the contract, not an error.
///
/// # Panics
/// Panics if the operating system entropy source fails. No fallback exists
/// that would keep downstream keys and nonces secure.
pub fn random_bytes(count: i64) -> Vec<u8> {
    let count = count.clamp(0, MAX_RANDOM_BYTES as i64) as usize;
    let mut out = vec![0u8; count];

    fill(&mut out);

    out
}

/// Fills `buf` entirely with OS randomness.
///
/// # Panics
/// Panics if the entropy source fails, like [`random_bytes`].
pub(crate) fn fill(buf: &mut [u8]) {
    if let Err(err) = sys_random(buf) {
        panic!("{err}");
    }
}
