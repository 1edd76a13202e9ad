//! AES-128 in counter (CTR) mode.
//!
//! The keystream for block `i` is the AES-128 encryption of a counter block
//! whose high eight bytes are zero and whose low eight bytes hold
//! `initial_counter + i` big-endian. XORing data with that keystream is its
//! own inverse, so [`process`] both encrypts and decrypts.
//!
//! Blocks are independent of each other. With the `parallel` feature (on by
//! default) large buffers are split into runs of blocks handled on the rayon
//! pool; the output is byte-identical to the sequential path.
//!
//! ```
//! let key = [0x2bu8; 16];
//! let ct = aes_ctr::process(&key, b"attack at dawn", 7)?;
//! let pt = aes_ctr::process(&key, &ct, 7)?;
//! assert_eq!(pt, b"attack at dawn");
//! # Ok::<(), aes_ctr::CtrError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod counter;
mod error;
mod session;
mod stream;

pub use aes_core::{Aes128Key, Block, BLOCK_SIZE};

pub use crate::config::CtrConfig;
pub use crate::counter::counter_block;
pub use crate::error::CtrError;
pub use crate::session::Aes128Ctr;
pub use crate::stream::{process, process_in_place, process_with_config};
