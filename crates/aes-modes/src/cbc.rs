//! Cipher block chaining mode.

use aes_core::{decrypt_block, encrypt_block, expand_key, xor_in_place, AesKey, BLOCK_LEN};

use crate::segment::to_blocks;
use crate::InitVector;

/// Encrypts `data` in CBC mode: each plaintext block is XORed into the
/// running feedback block before encryption, and the ciphertext block becomes
/// the next feedback.
pub fn encrypt_cbc<K: AesKey>(data: &[u8], key: &K, iv: &InitVector) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut result = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN);

    let mut feedback = *iv;
    for block in to_blocks(data) {
        xor_in_place(&mut feedback, &block);
        feedback = encrypt_block(&feedback, &round_keys);
        result.extend_from_slice(&feedback);
    }

    result
}

/// Decrypts a CBC ciphertext produced by [`encrypt_cbc`].
pub fn decrypt_cbc<K: AesKey>(data: &[u8], key: &K, iv: &InitVector) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut result = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN);

    let mut feedback = *iv;
    for block in to_blocks(data) {
        let mut plain = decrypt_block(&block, &round_keys);
        xor_in_place(&mut plain, &feedback);
        result.extend_from_slice(&plain);
        feedback = block;
    }

    result
}
