//! Electronic codebook mode: every block is transformed independently.

use aes_core::{decrypt_block, encrypt_block, expand_key, AesKey, BLOCK_LEN};

use crate::segment::to_blocks;

/// Encrypts `data` in ECB mode, returning `ceil(len / 16) * 16` bytes.
pub fn encrypt_ecb<K: AesKey>(data: &[u8], key: &K) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut result = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN);
    for block in to_blocks(data) {
        result.extend_from_slice(&encrypt_block(&block, &round_keys));
    }
    result
}

/// Decrypts an ECB ciphertext produced by [`encrypt_ecb`].
pub fn decrypt_ecb<K: AesKey>(data: &[u8], key: &K) -> Vec<u8> {
    let round_keys = expand_key(key);
    let mut result = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN);
    for block in to_blocks(data) {
        result.extend_from_slice(&decrypt_block(&block, &round_keys));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{TEST_KEY_256, TEST_MSG_LONG, TEST_MSG_SHORT};
    use aes_core::Aes256Key;

    #[test]
    fn matches_reference_vectors() {
        let key = Aes256Key::from(TEST_KEY_256);

        assert!(encrypt_ecb(&[], &key).is_empty());

        let zero_block = [0u8; 16];
        assert_eq!(
            hex::encode(encrypt_ecb(&zero_block, &key)),
            "f29000b62a499fd0a9f39a6add2e7780"
        );

        assert_eq!(
            hex::encode(encrypt_ecb(TEST_MSG_SHORT, &key)),
            "148c387456f988ae89e63648c2c1d23b"
        );

        assert_eq!(
            hex::encode(encrypt_ecb(TEST_MSG_LONG, &key)),
            "0a473aa5ac906e0ab44eb8ee325318a2c25196d27ca79db773a109947d7a4f45"
        );
    }

    #[test]
    fn decrypt_recovers_plaintext_prefix() {
        let key = Aes256Key::from(TEST_KEY_256);
        for data in [&[][..], TEST_MSG_SHORT, TEST_MSG_LONG] {
            let decrypted = decrypt_ecb(&encrypt_ecb(data, &key), &key);
            assert_eq!(&decrypted[..data.len()], data);
        }
    }

    #[test]
    fn full_blocks_round_trip_for_every_key_size() {
        use aes_core::{Aes128Key, Aes192Key};
        use rand::RngCore;

        let mut rng = rand::thread_rng();
        let mut data = vec![0u8; 3 * 16];
        rng.fill_bytes(&mut data);

        let key = Aes128Key::from([0x11; 16]);
        assert_eq!(decrypt_ecb(&encrypt_ecb(&data, &key), &key), data);
        let key = Aes192Key::from([0x22; 24]);
        assert_eq!(decrypt_ecb(&encrypt_ecb(&data, &key), &key), data);
        let key = Aes256Key::from(TEST_KEY_256);
        assert_eq!(decrypt_ecb(&encrypt_ecb(&data, &key), &key), data);
    }
}
