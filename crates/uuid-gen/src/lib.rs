//! Random (version 4) UUIDs per RFC 4122.
//!
//! Generation draws from a caller-supplied [`rand::RngCore`] so tests can
//! pass a seeded engine; [`Uuid::new`] uses the thread-local generator, which
//! keeps concurrent callers on separate engine instances.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use core::fmt;

use rand::RngCore;

/// A 128-bit universally unique identifier, partitioned per RFC 4122.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Uuid {
    time_low: u32,
    time_mid: u16,
    time_hi_and_version: u16,
    clock_seq_hi_and_reserved: u8,
    clock_seq_low: u8,
    node: [u8; 6],
}

impl Uuid {
    /// Generates a version-4 UUID from the supplied random source.
    ///
    /// The version nibble and the two variant bits are forced; every other
    /// bit comes from `rng`.
    pub fn generate<R: RngCore>(rng: &mut R) -> Self {
        let random_time = rng.next_u64();
        let time_low = random_time as u32;
        let time_mid = (random_time >> 32) as u16;
        let time_hi_and_version = 0x4000 | ((random_time >> 48) & 0x0fff) as u16;

        // 14-bit clock sequence below the `10` variant bits.
        let clock_sequence = (rng.next_u64() & 0x3fff) as u16;
        let clock_seq_hi_and_reserved = 0x80 | (clock_sequence >> 8) as u8;
        let clock_seq_low = clock_sequence as u8;

        let random_node = rng.next_u64();
        let node = [
            (random_node >> 40) as u8,
            (random_node >> 32) as u8,
            (random_node >> 24) as u8,
            (random_node >> 16) as u8,
            (random_node >> 8) as u8,
            random_node as u8,
        ];

        Self {
            time_low,
            time_mid,
            time_hi_and_version,
            clock_seq_hi_and_reserved,
            clock_seq_low,
            node,
        }
    }

    /// Generates a version-4 UUID from the thread-local random engine.
    pub fn new() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    /// Returns the UUID as 16 bytes in network order.
    pub fn as_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&self.time_low.to_be_bytes());
        bytes[4..6].copy_from_slice(&self.time_mid.to_be_bytes());
        bytes[6..8].copy_from_slice(&self.time_hi_and_version.to_be_bytes());
        bytes[8] = self.clock_seq_hi_and_reserved;
        bytes[9] = self.clock_seq_low;
        bytes[10..].copy_from_slice(&self.node);
        bytes
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Uuid {
    /// Canonical lowercase `8-4-4-4-12` rendering, exactly 36 characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-",
            self.time_low,
            self.time_mid,
            self.time_hi_and_version,
            self.clock_seq_hi_and_reserved,
            self.clock_seq_low,
        )?;
        for byte in self.node {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn version_and_variant_bits_are_forced() {
        for _ in 0..100 {
            let bytes = Uuid::new().as_bytes();
            assert_eq!(bytes[6] >> 4, 0x04);
            assert_eq!(bytes[8] & 0xc0, 0x80);
        }
    }

    #[test]
    fn renders_canonical_hex_form() {
        let uuid = Uuid::new();
        let text = uuid.to_string();
        assert_eq!(text.len(), 36);
        let dash_positions: Vec<usize> = text
            .char_indices()
            .filter(|(_, c)| *c == '-')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(dash_positions, [8, 13, 18, 23]);
        assert_eq!(&text[14..15], "4");
        assert!(text
            .chars()
            .all(|c| c == '-' || c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn seeded_engine_is_deterministic() {
        let a = Uuid::generate(&mut ChaCha20Rng::seed_from_u64(7));
        let b = Uuid::generate(&mut ChaCha20Rng::seed_from_u64(7));
        assert_eq!(a, b);
        let c = Uuid::generate(&mut ChaCha20Rng::seed_from_u64(8));
        assert_ne!(a, c);
    }

    #[test]
    fn string_form_matches_byte_form() {
        let uuid = Uuid::generate(&mut ChaCha20Rng::seed_from_u64(42));
        let from_bytes: String = uuid
            .as_bytes()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        let from_display = uuid.to_string().replace('-', "");
        assert_eq!(from_display, from_bytes);
    }
}
