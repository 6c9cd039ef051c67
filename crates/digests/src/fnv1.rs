//! Fowler–Noll–Vo (FNV-1) fingerprints, 32- and 64-bit widths.
//!
//! Non-cryptographic; suited to hash tables and cheap content fingerprints.

const PRIME_32: u32 = 16777619;
const OFFSET_BASIS_32: u32 = 2166136261;

const PRIME_64: u64 = 1099511628211;
const OFFSET_BASIS_64: u64 = 14695981039346656037;

/// 32-bit FNV-1 hash of `data`.
pub fn hash32(data: &[u8]) -> u32 {
    data.iter().fold(OFFSET_BASIS_32, |acc, &byte| {
        acc.wrapping_mul(PRIME_32) ^ u32::from(byte)
    })
}

/// 64-bit FNV-1 hash of `data`.
pub fn hash64(data: &[u8]) -> u64 {
    data.iter().fold(OFFSET_BASIS_64, |acc, &byte| {
        acc.wrapping_mul(PRIME_64) ^ u64::from(byte)
    })
}
