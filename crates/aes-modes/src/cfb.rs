//! Cipher feedback mode.
//!
//! Both directions run the block cipher forward: the previous ciphertext
//! block (initially the IV) is encrypted to produce keystream, which is XORed
//! with the data block.

use aes_core::{encrypt_block, expand_key, xor_in_place, AesKey, BLOCK_LEN};

use crate::segment::to_blocks;
use crate::InitVector;

/// Encrypts `data` in CFB mode.
pub fn encrypt_cfb<K: AesKey>(data: &[u8], key: &K, iv: &InitVector) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut result = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN);

    let mut feedback = *iv;
    for block in to_blocks(data) {
        feedback = encrypt_block(&feedback, &round_keys);
        xor_in_place(&mut feedback, &block);
        result.extend_from_slice(&feedback);
    }

    result
}

/// Decrypts a CFB ciphertext produced by [`encrypt_cfb`].
pub fn decrypt_cfb<K: AesKey>(data: &[u8], key: &K, iv: &InitVector) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut result = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN);

    let mut feedback = *iv;
    for block in to_blocks(data) {
        let mut keystream = encrypt_block(&feedback, &round_keys);
        xor_in_place(&mut keystream, &block);
        result.extend_from_slice(&keystream);
        feedback = block;
    }

    result
}
