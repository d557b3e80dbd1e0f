//! Fixed-capacity big integer
//!
//! This module defines [`BigInteger`], the non-negative integer type used for
//! every RSA key component, message representative and signature value.
//!
//! Its capacity is fixed at compile time to [`BIG_INTEGER_BYTES`] bytes
//! (2048 bits), the largest supported RSA modulus. There is no heap
//! allocation and no dynamic growth: an operation whose exact result would
//! not fit is reported to the caller instead of being silently truncated.
//!
//! Internally the value is stored as 32-bit limbs in little-endian limb
//! order, which keeps carry propagation and Montgomery multiplication
//! straightforward. The external byte representation (see [`codec`]) is
//! big-endian.

pub mod codec;
pub(crate) mod montgomery;
mod ops;

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter, Result};

use zeroize::Zeroize;

/// Capacity of a [`BigInteger`] in bytes.
pub const BIG_INTEGER_BYTES: usize = 256;

/// Capacity of a [`BigInteger`] in bits.
pub const BIG_INTEGER_BITS: usize = BIG_INTEGER_BYTES * 8;

pub(crate) const LIMBS: usize = BIG_INTEGER_BYTES / 4;

/// Fixed-capacity non-negative integer of at most 2048 bits.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    pub(crate) limbs: [u32; LIMBS],
}

impl BigInteger {
    /// The value zero.
    pub const ZERO: Self = Self { limbs: [0u32; LIMBS] };

    /// The value one.
    pub const ONE: Self = Self::from_u32(1);

    pub const fn from_u32(value: u32) -> Self {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = value;
        Self { limbs }
    }

    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = value as u32;
        limbs[1] = (value >> 32) as u32;
        Self { limbs }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Number of significant limbs (zero for the value zero).
    pub(crate) fn limb_len(&self) -> usize {
        self.limbs
            .iter()
            .rposition(|&l| l != 0)
            .map_or(0, |i| i + 1)
    }

    /// Number of significant bits; zero has a bit length of 0.
    pub fn bit_length(&self) -> usize {
        match self.limb_len() {
            0 => 0,
            len => (len - 1) * 32 + (32 - self.limbs[len - 1].leading_zeros() as usize),
        }
    }

    /// Number of bytes of the minimal big-endian encoding.
    pub fn byte_length(&self) -> usize {
        self.bit_length().div_ceil(8)
    }

    /// Returns bit `index` (bit 0 is the least significant).
    pub fn bit(&self, index: usize) -> bool {
        if index >= BIG_INTEGER_BITS {
            return false;
        }

        (self.limbs[index / 32] >> (index % 32)) & 1 == 1
    }

    pub(crate) fn set_bit(&mut self, index: usize) {
        self.limbs[index / 32] |= 1 << (index % 32);
    }

    /// Number of trailing zero bits; zero for the value zero.
    pub(crate) fn trailing_zeros(&self) -> usize {
        match self.limbs.iter().position(|&l| l != 0) {
            Some(i) => i * 32 + self.limbs[i].trailing_zeros() as usize,
            None => 0,
        }
    }

    /// Branch-free selection: returns `a` when `mask` is all ones and `b`
    /// when it is zero.
    pub(crate) fn ct_select(mask: u32, a: &Self, b: &Self) -> Self {
        let mut out = Self::ZERO;

        out.limbs
            .iter_mut()
            .zip(a.limbs.iter().zip(b.limbs.iter()))
            .for_each(|(o, (x, y))| *o = (x & mask) | (y & !mask));

        out
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        for (l, r) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match l.cmp(r) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zeroize for BigInteger {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl Display for BigInteger {
    /// Formats the minimal big-endian encoding as colon-separated upper-case
    /// hexadecimal. Zero is printed as `00`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let bytes = self.to_bytes();

        if bytes.is_empty() {
            return f.write_str("00");
        }

        for (i, byte) in bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl Debug for BigInteger {
    /// Prints only the bit length. Values are often secret key components;
    /// use `Display` to print the digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "BigInteger({} bits)", self.bit_length())
    }
}
