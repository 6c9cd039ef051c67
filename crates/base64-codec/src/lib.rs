//! Base64 and Base64URL binary-to-text codecs.
//!
//! Both alphabets share the same 6-bit grouping; they differ only in the two
//! symbols beyond the alphanumerics (`+`/`/` versus `-`/`_`). Padding with
//! `=` is optional on encode and tolerated on decode, where everything from
//! the first `=` on is ignored.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Error returned when decoding malformed Base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character outside the active alphabet (and not padding).
    #[error("invalid base64 symbol {0:?}")]
    InvalidSymbol(char),
    /// The final group held a single symbol, too few bits for even one byte.
    #[error("truncated base64 group")]
    Truncated,
}

const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn standard_symbol(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

fn url_symbol(byte: u8) -> Option<u8> {
    match byte {
        b'-' => Some(62),
        b'_' => Some(63),
        b'+' | b'/' => None,
        _ => standard_symbol(byte),
    }
}

fn encode_with(alphabet: &[u8; 64], data: &[u8], padding: bool) -> String {
    let mut result = String::with_capacity(data.len().div_ceil(3) * 4);

    let mut chunks = data.chunks_exact(3);
    for chunk in chunks.by_ref() {
        result.push(alphabet[usize::from(chunk[0] >> 2)] as char);
        result.push(alphabet[usize::from(((chunk[0] & 0x03) << 4) | (chunk[1] >> 4))] as char);
        result.push(alphabet[usize::from(((chunk[1] & 0x0f) << 2) | (chunk[2] >> 6))] as char);
        result.push(alphabet[usize::from(chunk[2] & 0x3f)] as char);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        result.push(alphabet[usize::from(tail[0] >> 2)] as char);
        if tail.len() == 1 {
            result.push(alphabet[usize::from((tail[0] & 0x03) << 4)] as char);
        } else {
            result.push(alphabet[usize::from(((tail[0] & 0x03) << 4) | (tail[1] >> 4))] as char);
            result.push(alphabet[usize::from((tail[1] & 0x0f) << 2)] as char);
        }
        if padding {
            while result.len() % 4 != 0 {
                result.push('=');
            }
        }
    }

    result
}

fn decode_with(
    classify: impl Fn(u8) -> Option<u8>,
    text: &str,
) -> Result<Vec<u8>, ParseError> {
    let mut result = Vec::with_capacity(text.len() / 4 * 3);
    let mut group = [0u8; 4];
    let mut filled = 0usize;

    for symbol in text.bytes() {
        if symbol == b'=' {
            break;
        }
        group[filled] =
            classify(symbol).ok_or(ParseError::InvalidSymbol(char::from(symbol)))?;
        filled += 1;
        if filled == 4 {
            result.push((group[0] << 2) | (group[1] >> 4));
            result.push((group[1] << 4) | (group[2] >> 2));
            result.push((group[2] << 6) | group[3]);
            filled = 0;
        }
    }

    match filled {
        0 => {}
        1 => return Err(ParseError::Truncated),
        2 => result.push((group[0] << 2) | (group[1] >> 4)),
        _ => {
            result.push((group[0] << 2) | (group[1] >> 4));
            result.push((group[1] << 4) | (group[2] >> 2));
        }
    }

    Ok(result)
}

/// Encodes `data` with the standard alphabet, padding with `=` if requested.
pub fn encode(data: &[u8], padding: bool) -> String {
    encode_with(STANDARD_ALPHABET, data, padding)
}

/// Decodes standard-alphabet Base64 text.
pub fn decode(text: &str) -> Result<Vec<u8>, ParseError> {
    decode_with(standard_symbol, text)
}

/// Encodes `data` with the URL-safe alphabet.
pub fn url_encode(data: &[u8], padding: bool) -> String {
    encode_with(URL_ALPHABET, data, padding)
}

/// Decodes URL-safe Base64 text.
pub fn url_decode(text: &str) -> Result<Vec<u8>, ParseError> {
    decode_with(url_symbol, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const CASES: [(&[u8], bool, &str); 10] = [
        (b"", true, ""),
        (&[0xf8], false, "+A"),
        (&[0xfc], false, "/A"),
        (b"0", false, "MA"),
        (b"0", true, "MA=="),
        (b"00", false, "MDA"),
        (b"00", true, "MDA="),
        (b"000", true, "MDAw"),
        (b"Test 12!", false, "VGVzdCAxMiE"),
        (b"Test 12!", true, "VGVzdCAxMiE="),
    ];

    #[test]
    fn encodes_reference_cases() {
        for (data, padding, expected) in CASES {
            assert_eq!(encode(data, padding), expected);
        }
    }

    #[test]
    fn decodes_reference_cases() {
        for (data, _, encoded) in CASES {
            assert_eq!(decode(encoded).unwrap(), data);
        }
    }

    #[test]
    fn url_alphabet_swaps_the_last_two_symbols() {
        assert_eq!(url_encode(&[0xf8], false), "-A");
        assert_eq!(url_encode(&[0xfc], false), "_A");
        assert_eq!(url_decode("-A").unwrap(), [0xf8]);
        assert_eq!(url_decode("_A").unwrap(), [0xfc]);
        // Alphanumerics are shared between the alphabets.
        assert_eq!(url_encode(b"Test 12!", true), "VGVzdCAxMiE=");
        assert_eq!(url_decode("VGVzdCAxMiE").unwrap(), b"Test 12!");
    }

    #[test]
    fn rejects_symbols_outside_the_alphabet() {
        assert_eq!(decode("@"), Err(ParseError::InvalidSymbol('@')));
        assert_eq!(url_decode("+A"), Err(ParseError::InvalidSymbol('+')));
    }

    #[test]
    fn rejects_a_single_leftover_symbol() {
        assert_eq!(decode("M"), Err(ParseError::Truncated));
        assert_eq!(url_decode("M"), Err(ParseError::Truncated));
    }

    #[test]
    fn padded_length_is_a_multiple_of_four() {
        for len in 0..32 {
            let data = vec![0x5au8; len];
            let encoded = encode(&data, true);
            assert_eq!(encoded.len(), len.div_ceil(3) * 4);
        }
    }

    #[test]
    fn round_trips_random_data() {
        let mut rng = rand::thread_rng();
        for len in 0..64 {
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);
            assert_eq!(decode(&encode(&data, true)).unwrap(), data);
            assert_eq!(url_decode(&url_encode(&data, false)).unwrap(), data);
        }
    }
}
