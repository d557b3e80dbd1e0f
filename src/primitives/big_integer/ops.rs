//! Arithmetic on [`BigInteger`].
//!
//! Only what RSA needs is provided: checked addition, subtraction and
//! multiplication, division with remainder, gcd/lcm and modular inversion.
//! Results that would exceed the fixed capacity are reported as `None`
//! rather than wrapped.

use super::{BigInteger, LIMBS};

impl BigInteger {
    /// Returns `self + rhs` and whether the addition carried out of the
    /// fixed capacity.
    pub(crate) fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = Self::ZERO;
        let mut carry = 0u64;

        for i in 0..LIMBS {
            let sum = self.limbs[i] as u64 + rhs.limbs[i] as u64 + carry;
            out.limbs[i] = sum as u32;
            carry = sum >> 32;
        }

        (out, carry != 0)
    }

    /// Returns `self - rhs` modulo 2²⁰⁴⁸ and whether a borrow occurred.
    pub(crate) fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = Self::ZERO;
        let mut borrow = 0u64;

        for i in 0..LIMBS {
            let diff = (self.limbs[i] as u64)
                .wrapping_sub(rhs.limbs[i] as u64)
                .wrapping_sub(borrow);
            out.limbs[i] = diff as u32;
            borrow = (diff >> 63) & 1;
        }

        (out, borrow != 0)
    }

    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Full product of `self` and `rhs` as `2 * LIMBS` little-endian limbs.
    pub(crate) fn widening_mul(&self, rhs: &Self) -> [u32; 2 * LIMBS] {
        let mut out = [0u32; 2 * LIMBS];
        let (a_len, b_len) = (self.limb_len(), rhs.limb_len());

        for i in 0..a_len {
            let mut carry = 0u64;
            let a = self.limbs[i] as u64;

            for j in 0..b_len {
                let t = out[i + j] as u64 + a * rhs.limbs[j] as u64 + carry;
                out[i + j] = t as u32;
                carry = t >> 32;
            }

            out[i + b_len] = carry as u32;
        }

        out
    }

    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let wide = self.widening_mul(rhs);

        if wide[LIMBS..].iter().any(|&l| l != 0) {
            return None;
        }

        let mut out = Self::ZERO;
        out.limbs.copy_from_slice(&wide[..LIMBS]);
        Some(out)
    }

    /// Shifts left by one bit, returning the bit shifted out.
    pub(crate) fn shl1(&self) -> (Self, bool) {
        let mut out = Self::ZERO;
        let mut carry = 0u32;

        for i in 0..LIMBS {
            out.limbs[i] = (self.limbs[i] << 1) | carry;
            carry = self.limbs[i] >> 31;
        }

        (out, carry != 0)
    }

    /// Logical right shift by `bits`.
    pub fn shr(&self, bits: usize) -> Self {
        let mut out = Self::ZERO;
        let (limb_shift, bit_shift) = (bits / 32, bits % 32);

        if limb_shift >= LIMBS {
            return out;
        }

        for i in 0..LIMBS - limb_shift {
            let lo = self.limbs[i + limb_shift] >> bit_shift;
            let hi = match (bit_shift, self.limbs.get(i + limb_shift + 1)) {
                (0, _) | (_, None) => 0,
                (_, Some(&next)) => next << (32 - bit_shift),
            };

            out.limbs[i] = lo | hi;
        }

        out
    }

    /// Returns `(self / divisor, self % divisor)`, or `None` when the
    /// divisor is zero.
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }

        let mut quotient = Self::ZERO;
        let remainder = long_division(&self.limbs, divisor, Some(&mut quotient.limbs));

        Some((quotient, remainder))
    }

    /// Returns `self % modulus`, or `None` when the modulus is zero.
    pub fn rem(&self, modulus: &Self) -> Option<Self> {
        if modulus.is_zero() {
            return None;
        }

        Some(long_division(&self.limbs, modulus, None))
    }

    /// Remainder of the division by a single word. Used for trial division.
    pub(crate) fn rem_u32(&self, divisor: u32) -> u32 {
        let divisor = divisor as u64;

        self.limbs[..self.limb_len()]
            .iter()
            .rev()
            .fold(0u64, |r, &limb| ((r << 32) | limb as u64) % divisor) as u32
    }

    pub fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = (*self, *other);

        while !b.is_zero() {
            let r = long_division(&a.limbs, &b, None);
            a = b;
            b = r;
        }

        a
    }

    /// Least common multiple, or `None` if it does not fit the capacity.
    pub fn lcm(&self, other: &Self) -> Option<Self> {
        if self.is_zero() || other.is_zero() {
            return Some(Self::ZERO);
        }

        let (reduced, _) = self.div_rem(&self.gcd(other))?;
        reduced.checked_mul(other)
    }

    /// Inverse of `self` modulo `modulus`, or `None` when it does not exist.
    ///
    /// Extended Euclid tracking only the magnitudes of the Bézout
    /// coefficients: their signs alternate, so the sign of the final one is
    /// known from the number of steps. Every magnitude stays below
    /// `modulus`, which keeps all products within capacity.
    pub fn mod_inverse(&self, modulus: &Self) -> Option<Self> {
        if modulus.is_zero() || modulus.is_one() {
            return None;
        }

        let (mut r0, mut r1) = (*modulus, self.rem(modulus)?);
        let (mut t0, mut t1) = (Self::ZERO, Self::ONE);
        let mut positive = true;

        while !r1.is_zero() {
            let (q, r2) = r0.div_rem(&r1)?;
            let t2 = q.checked_mul(&t1)?.checked_add(&t0)?;

            (r0, r1) = (r1, r2);
            (t0, t1) = (t1, t2);
            positive = !positive;
        }

        if !r0.is_one() {
            return None;
        }

        // `t0` belongs to the last non-zero remainder; `positive` was
        // flipped once more when `t1` was computed.
        if !positive {
            Some(t0)
        } else {
            modulus.checked_sub(&t0)
        }
    }

    /// `(self - rhs) mod modulus` for operands already reduced modulo
    /// `modulus`.
    pub(crate) fn sub_mod(&self, rhs: &Self, modulus: &Self) -> Self {
        let (diff, borrow) = self.overflowing_sub(rhs);
        let (wrapped, _) = diff.overflowing_add(modulus);

        Self::ct_select(0u32.wrapping_sub(borrow as u32), &wrapped, &diff)
    }
}

/// Bitwise schoolbook division of `dividend` (any number of limbs) by a
/// non-zero `divisor`. Writes the quotient when requested; the quotient
/// slot is only large enough for single-width dividends.
///
/// Every step performs the trial subtraction and keeps its result through a
/// mask, so the running time depends on the number of significant limbs of
/// the dividend but not on the values of either operand.
fn long_division(
    dividend: &[u32],
    divisor: &BigInteger,
    mut quotient: Option<&mut [u32; LIMBS]>,
) -> BigInteger {
    let top = dividend
        .iter()
        .rposition(|&l| l != 0)
        .map_or(0, |i| (i + 1) * 32);

    let mut remainder = BigInteger::ZERO;

    for bit in (0..top).rev() {
        let (shifted, carry) = remainder.shl1();
        remainder = shifted;
        remainder.limbs[0] |= (dividend[bit / 32] >> (bit % 32)) & 1;

        // A carry means the true value exceeds the capacity and thus the
        // divisor; the wrapped subtraction is still exact.
        let (diff, borrow) = remainder.overflowing_sub(divisor);
        let take = (carry as u32) | ((!borrow) as u32);

        remainder = BigInteger::ct_select(0u32.wrapping_sub(take), &diff, &remainder);

        if let Some(q) = quotient.as_deref_mut() {
            q[bit / 32] |= take << (bit % 32);
        }
    }

    remainder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_ones() -> BigInteger {
        BigInteger {
            limbs: [u32::MAX; LIMBS],
        }
    }

    #[test]
    fn division_with_a_full_width_divisor() {
        // (2^2048 - 1) = 1 * (2^2047 + 1) + (2^2047 - 2)
        let mut divisor = BigInteger::ONE;
        divisor.set_bit(2047);

        let mut expected = BigInteger::ZERO;
        expected.set_bit(2047);
        let expected = expected.checked_sub(&BigInteger::from_u32(2)).unwrap();

        let (q, r) = all_ones().div_rem(&divisor).unwrap();

        assert_eq!(q, BigInteger::ONE);
        assert_eq!(r, expected);
    }

    #[test]
    fn quotient_bits_are_set_only_where_the_subtraction_is_kept() {
        let dividend = BigInteger::from_u64(0xdead_beef_0123_4567);
        let divisor = BigInteger::from_u32(0x1_0001);

        let (q, r) = dividend.div_rem(&divisor).unwrap();

        assert_eq!(q, BigInteger::from_u64(0xdead_beef_0123_4567 / 0x1_0001));
        assert_eq!(r, BigInteger::from_u64(0xdead_beef_0123_4567 % 0x1_0001));
        assert_eq!(dividend.rem_u32(0x1_0001) as u64, 0xdead_beef_0123_4567 % 0x1_0001);
    }

    #[test]
    fn remainder_of_a_smaller_value_is_the_value() {
        let value = BigInteger::from_u32(12_345);
        let modulus = BigInteger::from_u32(99_991);

        assert_eq!(value.rem(&modulus).unwrap(), value);
        assert_eq!(modulus.rem(&modulus).unwrap(), BigInteger::ZERO);
    }

    #[test]
    fn sub_mod_wraps_negative_differences() {
        let m = BigInteger::from_u32(101);

        assert_eq!(
            BigInteger::from_u32(3).sub_mod(&BigInteger::from_u32(10), &m),
            BigInteger::from_u32(94)
        );
        assert_eq!(
            BigInteger::from_u32(10).sub_mod(&BigInteger::from_u32(3), &m),
            BigInteger::from_u32(7)
        );
    }
}
