use super::H256_INIT;
use super::computations::all_rounds;
use crate::hash::Digest;

const BLOCK_LEN: usize = 64;

#[inline(always)]
fn compress(block: &[u8], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    w.iter_mut()
        .zip(block.chunks_exact(4))
        .for_each(|(word, bytes)| {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
        });

    all_rounds(state, &mut w);
}

/// Computes the SHA-256 digest of `input`.
///
/// Full 64-byte blocks are compressed straight from the input slice; the
/// tail is copied into a stack block together with the `0x80` terminator
/// and the 64-bit big-endian message length in bits, spilling into a second
/// block when fewer than 9 bytes remain.
pub fn sha256(input: &[u8]) -> Digest {
    let mut state = H256_INIT;

    let mut blocks = input.chunks_exact(BLOCK_LEN);

    for block in &mut blocks {
        compress(block, &mut state);
    }

    let tail = blocks.remainder();
    let mut block = [0u8; BLOCK_LEN];

    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;

    if tail.len() > BLOCK_LEN - 9 {
        compress(&block, &mut state);
        block = [0; BLOCK_LEN];
    }

    let bit_len = (input.len() as u64).wrapping_mul(8);
    block[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    Digest::from(state)
}
