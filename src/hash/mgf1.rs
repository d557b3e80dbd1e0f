//! MGF1 mask generation function (RFC 8017, appendix B.2.1) over SHA-256.

use super::DIGEST_LEN;
use super::sha256::core::sha256;

/// XORs `mask` with the MGF1-SHA-256 expansion of `seed`.
///
/// The mask is produced block by block as `SHA-256(seed || counter)` with a
/// 32-bit big-endian counter and XORed in place, so no intermediate mask
/// buffer holding secret-derived bytes is kept around.
pub(crate) fn xor_mask(seed: &[u8], mask: &mut [u8]) {
    let mut input = Vec::with_capacity(seed.len() + 4);
    input.extend_from_slice(seed);
    input.extend_from_slice(&[0u8; 4]);

    for (counter, chunk) in mask.chunks_mut(DIGEST_LEN).enumerate() {
        let len = input.len();
        input[len - 4..].copy_from_slice(&(counter as u32).to_be_bytes());

        let block = sha256(&input);

        chunk
            .iter_mut()
            .zip(block.as_bytes())
            .for_each(|(m, b)| *m ^= b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_an_involution() {
        let seed = [7u8; 32];
        let original: Vec<u8> = (0u8..=100).collect();

        let mut data = original.clone();
        xor_mask(&seed, &mut data);
        assert_ne!(data, original);

        xor_mask(&seed, &mut data);
        assert_eq!(data, original);
    }

    #[test]
    fn first_block_is_hash_of_seed_and_zero_counter() {
        let seed = b"seed";
        let mut mask = [0u8; 32];
        xor_mask(seed, &mut mask);

        let expected = sha256(b"seed\x00\x00\x00\x00");
        assert_eq!(&mask, expected.as_bytes());
    }
}
