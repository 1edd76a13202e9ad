//! One-shot CTR processing over whole buffers.

use aes_core::{encrypt_block, expand_key, xor_in_place, Aes128Key, RoundKeys, BLOCK_SIZE};

use crate::config::CtrConfig;
use crate::counter::{checked_counter, encode_counter};
use crate::error::CtrError;

/// Encrypts or decrypts `data` with AES-128 in CTR mode.
///
/// Block `i` of the output is `data` XOR `AES(key, counter_block(initial_counter, i))`.
/// The final block may be partial; surplus keystream is discarded. Calling
/// this twice with the same key and counter returns the original data.
///
/// Fails with [`CtrError::InvalidKeyLength`] unless `key` is 16 bytes, and with
/// [`CtrError::CounterOverflow`] if the last block's counter would pass
/// `u64::MAX`. Both checks happen before any output is produced.
pub fn process(key: &[u8], data: &[u8], initial_counter: u64) -> Result<Vec<u8>, CtrError> {
    process_with_config(key, data, initial_counter, &CtrConfig::default())
}

/// [`process`] with explicit scheduling settings.
pub fn process_with_config(
    key: &[u8],
    data: &[u8],
    initial_counter: u64,
    config: &CtrConfig,
) -> Result<Vec<u8>, CtrError> {
    let key = Aes128Key::try_from(key)?;
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = data.to_vec();
    let round_keys = expand_key(&key);
    apply_keystream_blocks(&round_keys, &mut out, initial_counter, config)?;
    Ok(out)
}

/// In-place variant of [`process`]. On error `buf` is left untouched.
pub fn process_in_place(key: &[u8], buf: &mut [u8], initial_counter: u64) -> Result<(), CtrError> {
    let key = Aes128Key::try_from(key)?;
    if buf.is_empty() {
        return Ok(());
    }
    let round_keys = expand_key(&key);
    apply_keystream_blocks(&round_keys, buf, initial_counter, &CtrConfig::default())
}

/// XORs keystream blocks `0..ceil(buf.len() / 16)` into `buf`.
///
/// The whole counter range is validated up front, so an overflow leaves `buf`
/// untouched.
pub(crate) fn apply_keystream_blocks(
    round_keys: &RoundKeys,
    buf: &mut [u8],
    initial_counter: u64,
    config: &CtrConfig,
) -> Result<(), CtrError> {
    let nblocks = buf.len().div_ceil(BLOCK_SIZE);
    if nblocks == 0 {
        return Ok(());
    }
    checked_counter(initial_counter, (nblocks - 1) as u64)?;

    if config.runs_parallel(nblocks) {
        let chunk_blocks = config.chunk_blocks.clamp(1, nblocks);
        xor_parallel(round_keys, buf, initial_counter, chunk_blocks);
    } else {
        xor_run(round_keys, buf, initial_counter);
    }
    Ok(())
}

/// Splits `buf` into runs of `chunk_blocks` blocks and hands them to the
/// rayon pool. Each run writes only its own slice of `buf`.
#[cfg(feature = "parallel")]
fn xor_parallel(
    round_keys: &RoundKeys,
    buf: &mut [u8],
    initial_counter: u64,
    chunk_blocks: usize,
) {
    use rayon::prelude::*;

    buf.par_chunks_mut(chunk_blocks * BLOCK_SIZE)
        .enumerate()
        .for_each(|(chunk_index, run)| {
            let first = initial_counter + (chunk_index * chunk_blocks) as u64;
            xor_run(round_keys, run, first);
        });
}

#[cfg(not(feature = "parallel"))]
fn xor_parallel(
    round_keys: &RoundKeys,
    buf: &mut [u8],
    initial_counter: u64,
    _chunk_blocks: usize,
) {
    xor_run(round_keys, buf, initial_counter);
}

/// Sequential hot loop over a run of blocks starting at counter `first`.
///
/// The caller guarantees `first + (number of blocks - 1)` does not overflow.
fn xor_run(round_keys: &RoundKeys, run: &mut [u8], first: u64) {
    for (offset, block) in run.chunks_mut(BLOCK_SIZE).enumerate() {
        let keystream = encrypt_block(&encode_counter(first + offset as u64), round_keys);
        xor_in_place(block, &keystream);
    }
}
