//! Counter block derivation.

use aes_core::{Block, BLOCK_SIZE};

use crate::error::CtrError;

/// Builds the counter block for `block_index` relative to `initial_counter`.
///
/// The low eight bytes carry `initial_counter + block_index` big-endian and
/// the high eight bytes are zero. A sum past `u64::MAX` is rejected instead
/// of wrapping, since a wrapped counter repeats keystream.
pub fn counter_block(initial_counter: u64, block_index: u64) -> Result<Block, CtrError> {
    let value = checked_counter(initial_counter, block_index)?;
    Ok(encode_counter(value))
}

pub(crate) fn checked_counter(initial_counter: u64, block_index: u64) -> Result<u64, CtrError> {
    initial_counter
        .checked_add(block_index)
        .ok_or(CtrError::CounterOverflow {
            initial_counter,
            block_index,
        })
}

#[inline]
pub(crate) fn encode_counter(value: u64) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[8..].copy_from_slice(&value.to_be_bytes());
    block
}
