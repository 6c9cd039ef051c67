//! Key types for the three AES variants.

use crate::block::Block;

/// Largest round-key count across the variants (AES-256 uses Nr = 14).
pub(crate) const MAX_ROUND_KEYS: usize = 15;

/// Cipher key of one of the three AES sizes.
///
/// The key length is fixed by the implementing type, so a mismatched length
/// is unrepresentable rather than a runtime error. `KEY_WORDS` is the Nk
/// parameter of FIPS-197 and `ROUNDS` is Nr.
pub trait AesKey {
    /// Number of 32-bit words in the cipher key (Nk).
    const KEY_WORDS: usize;
    /// Number of rounds (Nr).
    const ROUNDS: usize;
    /// Raw key bytes.
    fn as_bytes(&self) -> &[u8];
}

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl AesKey for Aes128Key {
    const KEY_WORDS: usize = 4;
    const ROUNDS: usize = 10;

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// AES-192 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes192Key(pub [u8; 24]);

impl From<[u8; 24]> for Aes192Key {
    fn from(value: [u8; 24]) -> Self {
        Self(value)
    }
}

impl AesKey for Aes192Key {
    const KEY_WORDS: usize = 6;
    const ROUNDS: usize = 12;

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// AES-256 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes256Key(pub [u8; 32]);

impl From<[u8; 32]> for Aes256Key {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl AesKey for Aes256Key {
    const KEY_WORDS: usize = 8;
    const ROUNDS: usize = 14;

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for one encrypt/decrypt call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    blocks: [Block; MAX_ROUND_KEYS],
    rounds: usize,
}

impl RoundKeys {
    pub(crate) fn new(blocks: [Block; MAX_ROUND_KEYS], rounds: usize) -> Self {
        Self { blocks, rounds }
    }

    /// Returns the round key at the requested index (0..=rounds).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.blocks[round]
    }

    /// Number of cipher rounds (Nr) covered by this schedule.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}
