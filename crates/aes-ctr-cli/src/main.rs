//! Command-line interface for `aes128-ctr`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{encrypt_block, expand_key, Aes128Key, Block};
use aes_ctr::{process_with_config, Aes128Ctr, CtrConfig};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128-CTR CLI.
#[derive(Parser)]
#[command(name = "aesctr", version, author, about = "AES-128 counter-mode CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file with AES-128-CTR.
    Enc(StreamArgs),
    /// Decrypt a file with AES-128-CTR (identical to `enc`).
    Dec(StreamArgs),
    /// Run the FIPS-197 known-answer tests and a CTR round trip.
    Selftest,
    /// Cross-check parallel, sequential and streaming paths on random data.
    Check {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Number of random buffers to test.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Initial counter value.
        #[arg(long, default_value_t = 0)]
        counter: u64,
    },
    /// Run a local demo: random key and data, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct StreamArgs {
    /// AES-128 key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Input file.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output file.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
    /// Initial counter value; the peer must use the same one.
    #[arg(long, default_value_t = 0)]
    counter: u64,
    /// Process all blocks on the calling thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc(args) => cmd_stream("enc", &args),
        Commands::Dec(args) => cmd_stream("dec", &args),
        Commands::Selftest => cmd_selftest(),
        Commands::Check {
            key_hex,
            samples,
            seed,
            counter,
        } => cmd_check(&key_hex, samples, seed, counter),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_stream(name: &str, args: &StreamArgs) -> Result<()> {
    let key = parse_key_hex(&args.key_hex)?;
    let data = fs::read(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    let config = if args.sequential {
        CtrConfig::sequential()
    } else {
        CtrConfig::default()
    };
    info!(
        "{name}: {} bytes from {} (counter {})",
        data.len(),
        args.input.display(),
        args.counter
    );
    debug!("scheduling: {config:?}");

    let out = process_with_config(&key.0, &data, args.counter, &config)
        .with_context(|| format!("{name} {}", args.input.display()))?;
    write_output(&args.output, &out)
}

fn cmd_selftest() -> Result<()> {
    const VECTORS: [(&str, &str, &str); 2] = [
        (
            "000102030405060708090a0b0c0d0e0f",
            "00112233445566778899aabbccddeeff",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            "2b7e151628aed2a6abf7158809cf4f3c",
            "3243f6a8885a308d313198a2e0370734",
            "3925841d02dc09fbdc118597196a0b32",
        ),
    ];

    for (key_hex, plain_hex, cipher_hex) in VECTORS {
        let key = parse_key_hex(key_hex)?;
        let plain = parse_block_hex(plain_hex)?;
        let got = hex::encode(encrypt_block(&plain, &expand_key(&key)));
        if got != cipher_hex {
            bail!("block vector failed for key {key_hex}: got {got}, expected {cipher_hex}");
        }
        println!("ok: block vector {key_hex}");
    }

    let key = parse_key_hex(VECTORS[1].0)?;
    let message = b"Hello, AES CTR mode!";
    let nonce = 0x1234_5678_9abc_def0;
    let ct = aes_ctr::process(&key.0, message, nonce)?;
    if aes_ctr::process(&key.0, &ct, nonce)? != message {
        bail!("ctr round trip failed");
    }
    if !aes_ctr::process(&key.0, b"", 0)?.is_empty() {
        bail!("empty input produced output");
    }
    println!("ok: ctr round trip");
    Ok(())
}

fn cmd_check(key_hex: &str, samples: usize, seed: Option<u64>, counter: u64) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let mut rng = seeded_rng(seed);
    let parallel = CtrConfig {
        parallel: true,
        min_parallel_blocks: 1,
        chunk_blocks: 4,
    };

    for sample in 0..samples {
        let len = rng.gen_range(0..64 * 1024);
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        debug!("sample {sample}: {len} bytes");

        let sequential = process_with_config(&key.0, &data, counter, &CtrConfig::sequential())?;
        let threaded = process_with_config(&key.0, &data, counter, &parallel)?;
        if sequential != threaded {
            bail!("sample {sample}: parallel output differs from sequential output");
        }

        let mut streamed = data.clone();
        let mut ctx = Aes128Ctr::from_key(&key, counter);
        let mut rest = streamed.as_mut_slice();
        while !rest.is_empty() {
            let take = rng.gen_range(1..=rest.len().min(100));
            let (piece, tail) = std::mem::take(&mut rest).split_at_mut(take);
            ctx.apply_keystream(piece)?;
            rest = tail;
        }
        if streamed != sequential {
            bail!("sample {sample}: streamed output differs from one-shot output");
        }

        let round_trip = process_with_config(&key.0, &sequential, counter, &parallel)?;
        if round_trip != data {
            bail!("sample {sample}: decryption did not restore the input");
        }
    }
    info!("checked {samples} samples");
    println!("ok: {samples} samples consistent");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let counter = u64::from(rng.next_u32());

    let mut plaintext = [0u8; 40];
    rng.fill_bytes(&mut plaintext);

    let ciphertext = aes_ctr::process(&key_bytes, &plaintext, counter)?;
    let decrypted = aes_ctr::process(&key_bytes, &ciphertext, counter)?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("counter: {counter}");
    println!("plaintext: {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 32 hex characters")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    match <Block>::try_from(bytes.as_slice()) {
        Ok(block) => Ok(block),
        Err(_) => bail!("block must be 16 bytes, got {}", bytes.len()),
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
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
