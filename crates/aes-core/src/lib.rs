//! AES-128 forward cipher used by the counter-mode stream layer.
//!
//! This crate follows FIPS-197 and provides:
//! - The S-box and round-constant tables.
//! - Key schedule for AES-128.
//! - Single-block encryption (CTR mode never needs the inverse cipher).
//!
//! The S-box is a plain table lookup indexed by state bytes; the implementation
//! aims for clarity and testability and is not hardened against cache-timing
//! side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{encrypt_block, expand_key};
pub use crate::error::InvalidKeyLength;
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUND_KEY_COUNT};
pub use crate::round::State;
pub use crate::sbox::{sbox, RCON, SBOX};
