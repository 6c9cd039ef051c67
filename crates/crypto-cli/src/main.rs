//! Command-line interface over the workspace's cipher, digest, codec, and
//! UUID crates.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{Aes128Key, Aes192Key, Aes256Key, AesKey};
use aes_modes::{
    decrypt_cbc, decrypt_cfb, decrypt_ecb, encrypt_cbc, encrypt_cfb, encrypt_ecb, InitVector,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use digests::{crc, fnv1, md5, sha1, sha256};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uuid_gen::Uuid;

/// Crypto primitive CLI.
#[derive(Parser)]
#[command(
    name = "cryptool",
    version,
    author,
    about = "Block cipher, digest, Base64, and UUID utility"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Ecb,
    Cbc,
    Cfb,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Fnv32,
    Fnv64,
    Crc8,
    Crc16,
    Crc32,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a file and print the digest as lowercase hex.
    Hash {
        /// Digest algorithm.
        #[arg(long, value_enum)]
        algo: Algorithm,
        /// Input file.
        input: PathBuf,
    },
    /// Encrypt a file with AES; the output is block-rounded, so partial
    /// trailing blocks are zero-extended.
    Encrypt {
        /// Chaining mode.
        #[arg(long, value_enum)]
        mode: Mode,
        /// AES key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Initialization vector as 32 hex characters (CBC and CFB only).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Input plaintext file.
        input: PathBuf,
        /// Output ciphertext file.
        output: PathBuf,
    },
    /// Decrypt a file with AES.
    Decrypt {
        /// Chaining mode.
        #[arg(long, value_enum)]
        mode: Mode,
        /// AES key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Initialization vector as 32 hex characters (CBC and CFB only).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Input ciphertext file.
        input: PathBuf,
        /// Output plaintext file.
        output: PathBuf,
    },
    /// Base64-encode a file to stdout.
    Encode {
        /// Use the URL-safe alphabet.
        #[arg(long)]
        url: bool,
        /// Skip `=` padding.
        #[arg(long)]
        no_padding: bool,
        /// Input file.
        input: PathBuf,
    },
    /// Decode a Base64 text file and write the raw bytes.
    Decode {
        /// Use the URL-safe alphabet.
        #[arg(long)]
        url: bool,
        /// Input text file.
        input: PathBuf,
        /// Output file.
        output: PathBuf,
    },
    /// Print freshly generated version-4 UUIDs.
    Uuid {
        /// How many to generate.
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Optional RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Hash { algo, input } => cmd_hash(algo, &input),
        Commands::Encrypt {
            mode,
            key_hex,
            iv_hex,
            input,
            output,
        } => cmd_cipher(true, mode, &key_hex, iv_hex.as_deref(), &input, &output),
        Commands::Decrypt {
            mode,
            key_hex,
            iv_hex,
            input,
            output,
        } => cmd_cipher(false, mode, &key_hex, iv_hex.as_deref(), &input, &output),
        Commands::Encode {
            url,
            no_padding,
            input,
        } => cmd_encode(url, !no_padding, &input),
        Commands::Decode { url, input, output } => cmd_decode(url, &input, &output),
        Commands::Uuid { count, seed } => cmd_uuid(count, seed),
    }
}

fn cmd_hash(algo: Algorithm, input: &Path) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let digest = match algo {
        Algorithm::Md5 => hex::encode(md5::hash(&data)),
        Algorithm::Sha1 => hex::encode(sha1::hash(&data)),
        Algorithm::Sha256 => hex::encode(sha256::hash(&data)),
        Algorithm::Fnv32 => format!("{:08x}", fnv1::hash32(&data)),
        Algorithm::Fnv64 => format!("{:016x}", fnv1::hash64(&data)),
        Algorithm::Crc8 => format!("{:02x}", crc::crc8(&data)),
        Algorithm::Crc16 => format!("{:04x}", crc::crc16(&data)),
        Algorithm::Crc32 => format!("{:08x}", crc::crc32(&data)),
    };
    println!("{digest}");
    Ok(())
}

fn cmd_cipher(
    encrypting: bool,
    mode: Mode,
    key_hex: &str,
    iv_hex: Option<&str>,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let key_bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    let iv = parse_iv(mode, iv_hex)?;
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;

    let result = match key_bytes.len() {
        16 => apply_mode(
            encrypting,
            mode,
            &data,
            &Aes128Key::from(to_array::<16>(&key_bytes)),
            &iv,
        ),
        24 => apply_mode(
            encrypting,
            mode,
            &data,
            &Aes192Key::from(to_array::<24>(&key_bytes)),
            &iv,
        ),
        32 => apply_mode(
            encrypting,
            mode,
            &data,
            &Aes256Key::from(to_array::<32>(&key_bytes)),
            &iv,
        ),
        other => bail!("AES key must be 16, 24, or 32 bytes, got {other}"),
    };

    fs::write(output, result).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn apply_mode<K: AesKey>(
    encrypting: bool,
    mode: Mode,
    data: &[u8],
    key: &K,
    iv: &InitVector,
) -> Vec<u8> {
    match (mode, encrypting) {
        (Mode::Ecb, true) => encrypt_ecb(data, key),
        (Mode::Ecb, false) => decrypt_ecb(data, key),
        (Mode::Cbc, true) => encrypt_cbc(data, key, iv),
        (Mode::Cbc, false) => decrypt_cbc(data, key, iv),
        (Mode::Cfb, true) => encrypt_cfb(data, key, iv),
        (Mode::Cfb, false) => decrypt_cfb(data, key, iv),
    }
}

fn parse_iv(mode: Mode, iv_hex: Option<&str>) -> Result<InitVector> {
    match mode {
        // ECB takes no IV; a zero block keeps the call signature uniform.
        Mode::Ecb => Ok([0u8; 16]),
        Mode::Cbc | Mode::Cfb => {
            let Some(iv_hex) = iv_hex else {
                bail!("--iv-hex is required for CBC and CFB");
            };
            let bytes = hex::decode(iv_hex.trim()).context("decode IV hex")?;
            if bytes.len() != 16 {
                bail!("IV must be 16 bytes (32 hex characters)");
            }
            Ok(to_array::<16>(&bytes))
        }
    }
}

fn cmd_encode(url: bool, padding: bool, input: &Path) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let encoded = if url {
        base64_codec::url_encode(&data, padding)
    } else {
        base64_codec::encode(&data, padding)
    };
    println!("{encoded}");
    Ok(())
}

fn cmd_decode(url: bool, input: &Path, output: &Path) -> Result<()> {
    let text = fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let trimmed = text.trim();
    let decoded = if url {
        base64_codec::url_decode(trimmed)?
    } else {
        base64_codec::decode(trimmed)?
    };
    fs::write(output, decoded).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_uuid(count: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for _ in 0..count {
        println!("{}", Uuid::generate(&mut rng));
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut array = [0u8; N];
    array.copy_from_slice(bytes);
    array
}
