//! Segmentation of byte sequences into cipher blocks.

use aes_core::{Block, BLOCK_LEN};

/// Splits `data` into 16-byte blocks, zero-extending a partial tail block.
pub fn to_blocks(data: &[u8]) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN));
    for chunk in data.chunks(BLOCK_LEN) {
        let mut block = [0u8; BLOCK_LEN];
        block[..chunk.len()].copy_from_slice(chunk);
        blocks.push(block);
    }
    blocks
}
