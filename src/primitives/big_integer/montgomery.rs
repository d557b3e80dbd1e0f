//! Montgomery modular arithmetic.
//!
//! Modular exponentiation is the only expensive operation of RSA. It is
//! carried out in Montgomery form with the CIOS (coarsely integrated operand
//! scanning) multiplication over the significant limbs of the modulus, so a
//! 1024-bit prime costs a quarter of the work of a 2048-bit modulus.
//!
//! Within this module, the final conditional subtraction of each
//! multiplication, the doublings that build `R² mod m` and the per-bit
//! choice during exponentiation are all performed with masks. The reduction
//! of an operand into range goes through the masked long division of
//! `ops`. What remains data-dependent is the shape of the computation:
//! loop bounds follow the limb length of the modulus and the bit length of
//! the exponent, which for RSA keys are public. Callers outside this module
//! (CRT recombination, padding checks) are responsible for their own
//! timing behaviour.

use super::{BigInteger, LIMBS};

/// Precomputed values for arithmetic modulo an odd modulus `m > 1`.
pub(crate) struct Montgomery {
    modulus: BigInteger,
    len: usize,
    /// `-m⁻¹ mod 2³²`
    m_inv: u32,
    /// `R² mod m` with `R = 2^(32·len)`
    r2: BigInteger,
    /// `R mod m`, the Montgomery form of one
    one: BigInteger,
}

impl Montgomery {
    /// Returns `None` if `modulus` is even or smaller than 2.
    pub(crate) fn new(modulus: &BigInteger) -> Option<Self> {
        if modulus.is_even() || modulus.is_one() {
            return None;
        }

        let len = modulus.limb_len();

        // Newton iteration doubles the number of correct low bits each step.
        let m0 = modulus.limbs[0];
        let mut inv = 1u32;
        for _ in 0..5 {
            inv = inv.wrapping_mul(2u32.wrapping_sub(m0.wrapping_mul(inv)));
        }

        let mut r2 = BigInteger::ONE;
        for _ in 0..2 * 32 * len {
            r2 = double_mod(&r2, modulus);
        }

        let mut ctx = Self {
            modulus: *modulus,
            len,
            m_inv: inv.wrapping_neg(),
            r2,
            one: BigInteger::ZERO,
        };
        ctx.one = ctx.mul(&BigInteger::ONE, &ctx.r2);

        Some(ctx)
    }

    /// Montgomery product `a·b·R⁻¹ mod m` for `a, b < m`.
    fn mul(&self, a: &BigInteger, b: &BigInteger) -> BigInteger {
        let len = self.len;
        let m = &self.modulus.limbs;
        let mut t = [0u32; LIMBS + 2];

        for i in 0..len {
            let ai = a.limbs[i] as u64;
            let mut carry = 0u64;

            for j in 0..len {
                let s = t[j] as u64 + ai * b.limbs[j] as u64 + carry;
                t[j] = s as u32;
                carry = s >> 32;
            }

            let s = t[len] as u64 + carry;
            t[len] = s as u32;
            t[len + 1] = (s >> 32) as u32;

            let q = t[0].wrapping_mul(self.m_inv) as u64;
            let s = t[0] as u64 + q * m[0] as u64;
            let mut carry = s >> 32;

            for j in 1..len {
                let s = t[j] as u64 + q * m[j] as u64 + carry;
                t[j - 1] = s as u32;
                carry = s >> 32;
            }

            let s = t[len] as u64 + carry;
            t[len - 1] = s as u32;
            t[len] = t[len + 1] + (s >> 32) as u32;
        }

        // t < 2m: subtract m once unless that borrows out of t[len].
        let mut reduced = BigInteger::ZERO;
        let mut borrow = 0u64;

        for j in 0..len {
            let d = (t[j] as u64).wrapping_sub(m[j] as u64).wrapping_sub(borrow);
            reduced.limbs[j] = d as u32;
            borrow = (d >> 63) & 1;
        }

        let mut unreduced = BigInteger::ZERO;
        unreduced.limbs[..len].copy_from_slice(&t[..len]);

        let keep_reduced = (t[len] as u64 | (borrow ^ 1)) != 0;
        BigInteger::ct_select(0u32.wrapping_sub(keep_reduced as u32), &reduced, &unreduced)
    }

    fn to_form(&self, a: &BigInteger) -> BigInteger {
        let reduced = long_reduce(a, &self.modulus);
        self.mul(&reduced, &self.r2)
    }

    fn from_form(&self, a: &BigInteger) -> BigInteger {
        self.mul(a, &BigInteger::ONE)
    }

    /// `a·b mod m` for arbitrary `a` and `b` within capacity.
    pub(crate) fn mul_mod(&self, a: &BigInteger, b: &BigInteger) -> BigInteger {
        let am = self.to_form(a);
        let bm = self.to_form(b);

        self.from_form(&self.mul(&am, &bm))
    }

    /// `base^exp mod m`.
    ///
    /// Square-and-always-multiply over the bit length of `exp`, selecting
    /// the product with a mask.
    pub(crate) fn pow(&self, base: &BigInteger, exp: &BigInteger) -> BigInteger {
        let b = self.to_form(base);
        let mut acc = self.one;

        for i in (0..exp.bit_length()).rev() {
            acc = self.mul(&acc, &acc);
            let product = self.mul(&acc, &b);
            let mask = 0u32.wrapping_sub(exp.bit(i) as u32);
            acc = BigInteger::ct_select(mask, &product, &acc);
        }

        self.from_form(&acc)
    }
}

/// `2x mod m` for `x < m`.
fn double_mod(x: &BigInteger, m: &BigInteger) -> BigInteger {
    let (doubled, carry) = x.shl1();
    let (reduced, borrow) = doubled.overflowing_sub(m);
    let take = (carry as u32) | ((!borrow) as u32);

    BigInteger::ct_select(0u32.wrapping_sub(take), &reduced, &doubled)
}

fn long_reduce(a: &BigInteger, m: &BigInteger) -> BigInteger {
    // `m` is non-zero by construction of the context.
    a.rem(m).unwrap_or(BigInteger::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_even_and_trivial_moduli() {
        assert!(Montgomery::new(&BigInteger::from_u32(10)).is_none());
        assert!(Montgomery::new(&BigInteger::ONE).is_none());
        assert!(Montgomery::new(&BigInteger::ZERO).is_none());
    }

    #[test]
    fn small_modular_exponentiation() {
        let ctx = Montgomery::new(&BigInteger::from_u32(497)).unwrap();
        let r = ctx.pow(&BigInteger::from_u32(4), &BigInteger::from_u32(13));

        assert_eq!(r, BigInteger::from_u32(445));
    }

    #[test]
    fn zero_exponent_yields_one() {
        let ctx = Montgomery::new(&BigInteger::from_u32(101)).unwrap();
        let r = ctx.pow(&BigInteger::from_u32(55), &BigInteger::ZERO);

        assert_eq!(r, BigInteger::ONE);
    }

    #[test]
    fn fermat_little_theorem_on_a_mersenne_prime() {
        // 2^127 - 1
        let mut p = BigInteger::ZERO;
        p.limbs[..4].copy_from_slice(&[u32::MAX, u32::MAX, u32::MAX, 0x7fff_ffff]);

        let ctx = Montgomery::new(&p).unwrap();
        let exp = p.checked_sub(&BigInteger::ONE).unwrap();
        let r = ctx.pow(&BigInteger::from_u64(0x1234_5678_9abc_def0), &exp);

        assert_eq!(r, BigInteger::ONE);
    }

    #[test]
    fn mul_mod_matches_reference() {
        let ctx = Montgomery::new(&BigInteger::from_u32(1_000_003)).unwrap();
        let r = ctx.mul_mod(&BigInteger::from_u32(999_999), &BigInteger::from_u32(123_456));

        assert_eq!(r, BigInteger::from_u64(999_999u64 * 123_456 % 1_000_003));
    }

    #[test]
    fn full_width_modulus() {
        // m = 2^2048 - 1: while building R² mod m, doubling any value at or
        // above 2^2047 carries out of the capacity.
        let m = BigInteger {
            limbs: [u32::MAX; LIMBS],
        };
        let ctx = Montgomery::new(&m).unwrap();

        let mut half = BigInteger::ZERO;
        half.set_bit(2047);

        // 2^2047 * 2 = 2^2048 = 1 (mod m)
        assert_eq!(ctx.mul_mod(&half, &BigInteger::from_u32(2)), BigInteger::ONE);
        // 2^2048 = 1, so 2^4096 = 1 as well
        assert_eq!(
            ctx.pow(&BigInteger::from_u32(2), &BigInteger::from_u32(4096)),
            BigInteger::ONE
        );
    }
}
