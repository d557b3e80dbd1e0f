//! AES-256 block cipher (FIPS-197), encryption direction.

use zeroize::Zeroize;

use crate::error::{CryptoError, Result};

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES-256 key size in bytes.
pub const AES256_KEY_LEN: usize = 32;

const ROUNDS: usize = 14;

/// Round constants for key expansion (only the first seven are used by a
/// 256-bit key).
const RCON: [u8; 7] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];

/// Multiplication in GF(2⁸) over a fixed eight iterations, selecting each
/// partial product with a mask instead of branching on the bits of `b`.
#[inline(always)]
const fn gf_mul(mut a: u8, b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0u32;

    while i < 8 {
        let mask = 0u8.wrapping_sub((b >> i) & 1);
        product ^= a & mask;
        a = xtime(a);
        i += 1;
    }

    product
}

/// The AES S-box: the multiplicative inverse in GF(2⁸) (computed as
/// `x^254`, which maps 0 to 0) followed by the affine transform.
///
/// Computed rather than looked up, so no memory access is indexed by
/// key- or state-derived bytes. The exponent is public, so the sequence of
/// operations is the same for every input.
#[inline(always)]
const fn sub_byte(x: u8) -> u8 {
    let mut inv = 1u8;
    let mut base = x;
    let mut exp = 254u32;

    while exp > 0 {
        if exp & 1 == 1 {
            inv = gf_mul(inv, base);
        }

        base = gf_mul(base, base);
        exp >>= 1;
    }

    inv ^ inv.rotate_left(1) ^ inv.rotate_left(2) ^ inv.rotate_left(3) ^ inv.rotate_left(4) ^ 0x63
}

/// Multiplication by `x` in GF(2⁸) modulo x⁸ + x⁴ + x³ + x + 1.
#[inline(always)]
const fn xtime(b: u8) -> u8 {
    (b << 1) ^ (((b >> 7) & 1) * 0x1b)
}

/// A 256-bit AES key.
///
/// The key bytes are wiped when the value is dropped.
#[derive(Clone)]
pub struct Aes256Key([u8; AES256_KEY_LEN]);

impl Aes256Key {
    /// Validates that `bytes` is exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let key: [u8; AES256_KEY_LEN] =
            bytes.try_into().map_err(|_| CryptoError::InvalidLength {
                what: "AES-256 key",
                expected: AES256_KEY_LEN,
                actual: bytes.len(),
            })?;

        Ok(Self(key))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; AES256_KEY_LEN] {
        &self.0
    }
}

impl From<[u8; AES256_KEY_LEN]> for Aes256Key {
    fn from(value: [u8; AES256_KEY_LEN]) -> Self {
        Self(value)
    }
}

impl Drop for Aes256Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// An expanded AES-256 key schedule.
pub struct Aes256 {
    round_keys: [[u8; BLOCK_LEN]; ROUNDS + 1],
}

impl Aes256 {
    /// Expands `key` into the 15 round keys.
    pub fn new(key: &Aes256Key) -> Self {
        let mut w = [[0u8; 4]; 4 * (ROUNDS + 1)];

        for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }

        for i in 8..w.len() {
            let mut temp = w[i - 1];

            if i % 8 == 0 {
                temp.rotate_left(1);
                temp = temp.map(sub_byte);
                temp[0] ^= RCON[i / 8 - 1];
            } else if i % 8 == 4 {
                temp = temp.map(sub_byte);
            }

            for (t, prev) in temp.iter_mut().zip(w[i - 8]) {
                *t ^= prev;
            }

            w[i] = temp;
        }

        let mut round_keys = [[0u8; BLOCK_LEN]; ROUNDS + 1];

        for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(word);
            }
        }

        w.zeroize();

        Self { round_keys }
    }

    /// Encrypts a single 16-byte block.
    pub fn encrypt_block(&self, block: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
        let mut state = *block;

        add_round_key(&mut state, &self.round_keys[0]);

        for round_key in &self.round_keys[1..ROUNDS] {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, round_key);
        }

        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, &self.round_keys[ROUNDS]);

        state
    }
}

impl Drop for Aes256 {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

// The state is kept column-major as in FIPS-197: byte `r + 4c` is row `r`
// of column `c`.

#[inline(always)]
fn add_round_key(state: &mut [u8; BLOCK_LEN], round_key: &[u8; BLOCK_LEN]) {
    state
        .iter_mut()
        .zip(round_key)
        .for_each(|(s, k)| *s ^= k);
}

#[inline(always)]
fn sub_bytes(state: &mut [u8; BLOCK_LEN]) {
    state.iter_mut().for_each(|b| *b = sub_byte(*b));
}

#[inline(always)]
fn shift_rows(state: &mut [u8; BLOCK_LEN]) {
    let old = *state;

    for row in 1..4 {
        for col in 0..4 {
            state[row + 4 * col] = old[row + 4 * ((col + row) % 4)];
        }
    }
}

#[inline(always)]
fn mix_columns(state: &mut [u8; BLOCK_LEN]) {
    for column in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [column[0], column[1], column[2], column[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;

        column[0] = a0 ^ all ^ xtime(a0 ^ a1);
        column[1] = a1 ^ all ^ xtime(a1 ^ a2);
        column[2] = a2 ^ all ^ xtime(a2 ^ a3);
        column[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}
