//! Constant-time comparison utilities.
//!
//! These helpers avoid data-dependent branches and early exits when
//! comparing or scanning secret-derived bytes (decrypted padding, recomputed
//! hashes). Masks are `u32` values that are either all ones or all zeros.

pub(crate) trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time with respect to
    /// the contents. The lengths are treated as public.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    #[inline]
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0, |acc, v| acc | v)
            == 0
    }
}

/// All-ones mask if `a == b`, zero otherwise.
#[inline(always)]
pub(crate) fn eq_mask(a: u8, b: u8) -> u32 {
    let x = (a ^ b) as u32;
    // x - 1 underflows (setting bit 31) only when x == 0
    0u32.wrapping_sub(x.wrapping_sub(1) >> 31)
}

/// All-ones mask if `flag` is true, zero otherwise.
#[inline(always)]
pub(crate) fn bool_mask(flag: bool) -> u32 {
    0u32.wrapping_sub(flag as u32)
}

/// `a` if `mask` is all ones, `b` if it is zero.
#[inline(always)]
pub(crate) fn select_usize(mask: u32, a: usize, b: usize) -> usize {
    let wide = (mask as u64 | ((mask as u64) << 32)) as usize;
    (a & wide) | (b & !wide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_masks() {
        assert_eq!(eq_mask(0x42, 0x42), u32::MAX);
        assert_eq!(eq_mask(0x42, 0x43), 0);
        assert_eq!(eq_mask(0, 0xff), 0);
        assert_eq!(bool_mask(true), u32::MAX);
        assert_eq!(bool_mask(false), 0);
    }

    #[test]
    fn slice_equality() {
        assert!([1u8, 2, 3][..].ct_eq(&[1, 2, 3]));
        assert!(![1u8, 2, 3][..].ct_eq(&[1, 2, 4]));
        assert!(![1u8, 2][..].ct_eq(&[1, 2, 3]));
    }

    #[test]
    fn index_selection() {
        assert_eq!(select_usize(u32::MAX, 7, 9), 7);
        assert_eq!(select_usize(0, 7, 9), 9);
    }
}
