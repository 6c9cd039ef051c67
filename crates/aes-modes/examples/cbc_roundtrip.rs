//! Encrypts and decrypts a short message in CBC mode with a random key.

use aes_core::Aes256Key;
use aes_modes::{decrypt_cbc, encrypt_cbc};
use rand::RngCore;

fn main() {
    let mut rng = rand::thread_rng();
    let mut key_bytes = [0u8; 32];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut iv);
    let key = Aes256Key::from(key_bytes);

    let message = b"sixteen byte msg";
    let ciphertext = encrypt_cbc(message, &key, &iv);
    let decrypted = decrypt_cbc(&ciphertext, &key, &iv);

    println!("key:        {}", hex::encode(key_bytes));
    println!("iv:         {}", hex::encode(iv));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    assert_eq!(decrypted, message);
    println!("round trip succeeded");
}
