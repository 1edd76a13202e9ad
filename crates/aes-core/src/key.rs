//! Key types for AES-128.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::InvalidKeyLength;

/// Key length in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of round keys produced by the AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = InvalidKeyLength;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_SIZE] = value
            .try_into()
            .map_err(|_| InvalidKeyLength { len: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128.
///
/// Each round key holds four schedule words laid out column-major, the same
/// layout as [`State`](crate::State) uses for the block it is added to. The
/// schedule is wiped when dropped.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_checks_length() {
        let bytes = [7u8; 20];
        assert_eq!(
            Aes128Key::try_from(&bytes[..15]),
            Err(InvalidKeyLength { len: 15 })
        );
        assert_eq!(
            Aes128Key::try_from(&bytes[..]),
            Err(InvalidKeyLength { len: 20 })
        );
        assert_eq!(
            Aes128Key::try_from(&bytes[..0]),
            Err(InvalidKeyLength { len: 0 })
        );
        assert_eq!(Aes128Key::try_from(&bytes[..16]), Ok(Aes128Key([7u8; 16])));
    }
}
