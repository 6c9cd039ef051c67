//! AES key schedule and single-block encryption/decryption.

use core::convert::TryInto;

use crate::block::Block;
use crate::key::{AesKey, RoundKeys, MAX_ROUND_KEYS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a cipher key into `Nr + 1` round keys (FIPS-197 section 5.2).
///
/// The round count is fixed by the key type, so callers never branch on key
/// length inside the transform loop.
pub fn expand_key<K: AesKey>(key: &K) -> RoundKeys {
    let mut w = [0u32; 4 * MAX_ROUND_KEYS];
    for (i, chunk) in key.as_bytes().chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in K::KEY_WORDS..4 * (K::ROUNDS + 1) {
        let mut temp = w[i - 1];
        if i % K::KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / K::KEY_WORDS - 1]) << 24);
        } else if K::KEY_WORDS > 6 && i % K::KEY_WORDS == 4 {
            // 256-bit keys apply an extra SubWord mid-stride.
            temp = sub_word(temp);
        }
        w[i] = w[i - K::KEY_WORDS] ^ temp;
    }

    let mut blocks = [[0u8; 16]; MAX_ROUND_KEYS];
    for (round, block) in blocks.iter_mut().enumerate().take(K::ROUNDS + 1) {
        for word_idx in 0..4 {
            let offset = word_idx * 4;
            block[offset..offset + 4].copy_from_slice(&w[round * 4 + word_idx].to_be_bytes());
        }
    }

    RoundKeys::new(blocks, K::ROUNDS)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..round_keys.rounds() {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(round_keys.rounds()));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(round_keys.rounds()));
    for round in (1..round_keys.rounds()).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}
