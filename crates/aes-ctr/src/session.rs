//! Stateful CTR context that continues the keystream across calls.

use core::fmt;

use aes_core::{encrypt_block, expand_key, xor_in_place, Aes128Key, Block, RoundKeys, BLOCK_SIZE};
use zeroize::Zeroize;

use crate::config::CtrConfig;
use crate::counter::{checked_counter, encode_counter};
use crate::error::CtrError;
use crate::stream::apply_keystream_blocks;

/// AES-128-CTR context holding an expanded key and a running counter.
///
/// Feeding data through [`apply_keystream`](Self::apply_keystream) in any
/// number of pieces gives the same bytes as a single [`process`](crate::process)
/// call with the same key and initial counter. The round keys and any
/// buffered keystream are wiped when the context is dropped.
pub struct Aes128Ctr {
    round_keys: RoundKeys,
    initial_counter: u64,
    /// Index of the next block that has not been generated yet.
    next_block: u64,
    /// Last generated keystream block; bytes before `offset` are spent.
    keystream: Block,
    offset: usize,
    config: CtrConfig,
}

impl Aes128Ctr {
    /// Creates a context from raw key bytes.
    pub fn new(key: &[u8], initial_counter: u64) -> Result<Self, CtrError> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self::from_key(&key, initial_counter))
    }

    /// Creates a context from an already validated key.
    pub fn from_key(key: &Aes128Key, initial_counter: u64) -> Self {
        Self {
            round_keys: expand_key(key),
            initial_counter,
            next_block: 0,
            keystream: [0u8; BLOCK_SIZE],
            offset: BLOCK_SIZE,
            config: CtrConfig::default(),
        }
    }

    /// Replaces the scheduling settings used for bulk runs of whole blocks.
    pub fn with_config(mut self, config: CtrConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of keystream bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.next_block * BLOCK_SIZE as u64 - (BLOCK_SIZE - self.offset) as u64
    }

    /// XORs the next `buf.len()` keystream bytes into `buf`.
    ///
    /// On [`CtrError::CounterOverflow`] every block before the first one whose
    /// counter would wrap is already transformed, whatever the length of
    /// `buf`, and [`position`](Self::position) counts exactly those bytes.
    /// The rest of `buf` is left untouched.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) -> Result<(), CtrError> {
        let buffered = (BLOCK_SIZE - self.offset).min(buf.len());
        let (head, rest) = buf.split_at_mut(buffered);
        xor_in_place(head, &self.keystream[self.offset..]);
        self.offset += buffered;

        let whole = rest.len() - rest.len() % BLOCK_SIZE;
        let (body, tail) = rest.split_at_mut(whole);
        let blocks = (whole / BLOCK_SIZE) as u64;
        if blocks > 0 {
            let first = checked_counter(self.initial_counter, self.next_block)?;
            // Saturation only hides 2^64 remaining counters, more than any buffer holds.
            let fit = (u64::MAX - first).saturating_add(1).min(blocks);
            let fit_len = fit as usize * BLOCK_SIZE;
            apply_keystream_blocks(&self.round_keys, &mut body[..fit_len], first, &self.config)?;
            self.next_block += fit;
            if fit < blocks {
                return Err(CtrError::CounterOverflow {
                    initial_counter: self.initial_counter,
                    block_index: self.next_block,
                });
            }
        }

        if !tail.is_empty() {
            self.refill()?;
            xor_in_place(tail, &self.keystream);
            self.offset = tail.len();
        }
        Ok(())
    }

    fn refill(&mut self) -> Result<(), CtrError> {
        let counter = checked_counter(self.initial_counter, self.next_block)?;
        self.keystream = encrypt_block(&encode_counter(counter), &self.round_keys);
        self.offset = 0;
        self.next_block += 1;
        Ok(())
    }
}

impl fmt::Debug for Aes128Ctr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes128Ctr")
            .field("initial_counter", &self.initial_counter)
            .field("position", &self.position())
            .finish_non_exhaustive()
    }
}

impl Drop for Aes128Ctr {
    fn drop(&mut self) {
        self.keystream.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::process;

    const KEY: [u8; 16] = *b"0123456789abcdef";

    #[test]
    fn rejects_short_key() {
        assert!(matches!(
            Aes128Ctr::new(&KEY[..8], 0),
            Err(CtrError::InvalidKeyLength(_))
        ));
    }

    #[test]
    fn pieces_match_one_shot() {
        let data: Vec<u8> = (0..300u16).map(|i| (i % 251) as u8).collect();
        let expected = process(&KEY, &data, 77).expect("process");

        for split in [1usize, 3, 15, 16, 17, 33, 64, 299] {
            let mut ctx = Aes128Ctr::new(&KEY, 77).expect("key");
            let mut out = data.clone();
            for piece in out.chunks_mut(split) {
                ctx.apply_keystream(piece).expect("apply");
            }
            assert_eq!(out, expected, "split size {split}");
            assert_eq!(ctx.position(), data.len() as u64);
        }
    }

    #[test]
    fn position_tracks_partial_blocks() {
        let mut ctx = Aes128Ctr::new(&KEY, 0).expect("key");
        assert_eq!(ctx.position(), 0);
        ctx.apply_keystream(&mut [0u8; 4]).expect("apply");
        assert_eq!(ctx.position(), 4);
        ctx.apply_keystream(&mut [0u8; 12]).expect("apply");
        assert_eq!(ctx.position(), 16);
        ctx.apply_keystream(&mut [0u8; 37]).expect("apply");
        assert_eq!(ctx.position(), 53);
        ctx.apply_keystream(&mut []).expect("apply");
        assert_eq!(ctx.position(), 53);
    }

    #[test]
    fn overflow_in_tail_keeps_earlier_bytes() {
        let mut ctx = Aes128Ctr::new(&KEY, u64::MAX).expect("key");
        let mut buf = [0u8; 20];
        let err = ctx.apply_keystream(&mut buf).expect_err("second block wraps");
        assert_eq!(
            err,
            CtrError::CounterOverflow {
                initial_counter: u64::MAX,
                block_index: 1,
            }
        );
        let first = process(&KEY, &[0u8; 16], u64::MAX).expect("last valid block");
        assert_eq!(&buf[..16], &first[..]);
        assert_eq!(&buf[16..], &[0u8; 4]);
        assert_eq!(ctx.position(), 16);
    }

    #[test]
    fn overflow_in_body_keeps_earlier_blocks() {
        let valid = process(&KEY, &[0u8; 32], u64::MAX - 1).expect("two valid blocks");

        for len in [40usize, 48, 64] {
            let mut ctx = Aes128Ctr::new(&KEY, u64::MAX - 1).expect("key");
            let mut buf = vec![0u8; len];
            let err = ctx
                .apply_keystream(&mut buf)
                .expect_err("third block wraps");
            assert_eq!(
                err,
                CtrError::CounterOverflow {
                    initial_counter: u64::MAX - 1,
                    block_index: 2,
                },
                "length {len}"
            );
            assert_eq!(&buf[..32], &valid[..], "length {len}");
            assert!(buf[32..].iter().all(|&b| b == 0), "length {len}");
            assert_eq!(ctx.position(), 32, "length {len}");
        }
    }

    #[test]
    fn overflow_after_buffered_bytes_keeps_them() {
        let expected = process(&KEY, &[0u8; 16], u64::MAX).expect("last valid block");
        let mut ctx = Aes128Ctr::new(&KEY, u64::MAX).expect("key");
        let mut head = [0u8; 5];
        ctx.apply_keystream(&mut head).expect("inside the last block");

        let mut buf = [0u8; 43];
        let err = ctx.apply_keystream(&mut buf).expect_err("next block wraps");
        assert_eq!(
            err,
            CtrError::CounterOverflow {
                initial_counter: u64::MAX,
                block_index: 1,
            }
        );
        assert_eq!(&buf[..11], &expected[5..]);
        assert!(buf[11..].iter().all(|&b| b == 0));
        assert_eq!(ctx.position(), 16);
    }

    #[test]
    fn debug_output_hides_key_material() {
        let ctx = Aes128Ctr::new(&KEY, 5).expect("key");
        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("initial_counter: 5"));
        assert!(!rendered.contains("round_keys"));
    }
}
