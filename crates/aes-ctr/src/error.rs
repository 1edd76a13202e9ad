//! Error type for counter-mode operations.

use aes_core::InvalidKeyLength;
use thiserror::Error;

/// Errors raised by the CTR layer.
///
/// Both variants are caller errors; retrying with the same input fails the
/// same way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CtrError {
    /// The key was not exactly 16 bytes.
    #[error(transparent)]
    InvalidKeyLength(#[from] InvalidKeyLength),

    /// `initial_counter + block_index` does not fit in 64 bits.
    #[error(
        "counter overflow: initial counter {initial_counter} plus block index {block_index} exceeds u64::MAX"
    )]
    CounterOverflow {
        /// Counter value of block zero.
        initial_counter: u64,
        /// Index of the first block whose counter would wrap.
        block_index: u64,
    },
}
