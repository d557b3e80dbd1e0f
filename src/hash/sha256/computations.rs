use super::K256;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Message schedule word `i` (for `i >= 16`), computed in the 16-word
/// rolling window `w`.
#[inline(always)]
fn schedule(w: &mut [u32; 16], i: usize) -> u32 {
    let next = w[(i - 16) & 15]
        .wrapping_add(small_sigma0(w[(i - 15) & 15]))
        .wrapping_add(w[(i - 7) & 15])
        .wrapping_add(small_sigma1(w[(i - 2) & 15]));

    w[i & 15] = next;
    next
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 8], w: &mut [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let wi = if i < 16 { w[i] } else { schedule(w, i) };

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K256[i])
            .wrapping_add(wi);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

/// Unrolled variant: instead of shifting the eight working variables every
/// round, each round renames them, so a group of eight rounds ends with the
/// variables back in their original roles.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 8], w: &mut [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $i:expr) => {{
            let i: usize = $i;
            let wi = if i < 16 { w[i] } else { schedule(w, i) };

            let t1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K256[i])
                .wrapping_add(wi);

            $d = $d.wrapping_add(t1);
            $h = t1.wrapping_add(big_sigma0($a)).wrapping_add(maj($a, $b, $c));
        }};
    }

    for base in (0..64).step_by(8) {
        round!(a, b, c, d, e, f, g, h, base);
        round!(h, a, b, c, d, e, f, g, base + 1);
        round!(g, h, a, b, c, d, e, f, base + 2);
        round!(f, g, h, a, b, c, d, e, base + 3);
        round!(e, f, g, h, a, b, c, d, base + 4);
        round!(d, e, f, g, h, a, b, c, base + 5);
        round!(c, d, e, f, g, h, a, b, base + 6);
        round!(b, c, d, e, f, g, h, a, base + 7);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}
