//! SHA-1 message digest (FIPS 180-4).
//!
//! Like MD5, SHA-1 is no longer collision resistant; it is provided for
//! interoperability with formats that still require it.

use crate::block::{for_each_block, LengthOrder};

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

fn compress(block: &[u8; 64], state: &mut [u32; 5]) {
    let mut w = [0u32; 80];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().expect("chunk length is four"));
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &word) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | (!b & d), 0x5a827999),
            20..=39 => (b ^ c ^ d, 0x6ed9eba1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
            _ => (b ^ c ^ d, 0xca62c1d6),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Hashes `data` and returns the 20-byte digest, serialized big-endian per
/// state word.
pub fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut state = INITIAL_STATE;
    for_each_block(data, LengthOrder::Big, |block| compress(block, &mut state));

    let mut digest = [0u8; DIGEST_LEN];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_digests() {
        let cases: [(&[u8], &str); 6] = [
            (b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            (b"0", "b6589fc6ab0dc82cf12099d1c2d40ab994e8410c"),
            (&[b'0'; 40], "9514e18b679622b8d59991a6298559cb03099d64"),
            (b"Test 12!", "ca593e38a74c94d97c9e0ead291340ae6a824060"),
            (
                b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
                "57b5a033a37d0276ea970639cc3b63cab29442fe",
            ),
            (&[0xff; 64], "ffc6261e487efa8c7442069f71acfc4aa826993d"),
        ];
        for (data, expected) in cases {
            assert_eq!(hex::encode(hash(data)), expected);
        }
    }
}
