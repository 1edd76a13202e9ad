//! AES round transformations.

use crate::block::Block;
use crate::sbox::sbox;

/// Cipher state: a 4×4 byte matrix stored column-major.
///
/// Block byte `4 * c + r` lives at row `r`, column `c`, i.e. `self.0[c][r]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block into the state.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        let mut columns = [[0u8; 4]; 4];
        for (column, chunk) in columns.iter_mut().zip(block.chunks_exact(4)) {
            column.copy_from_slice(chunk);
        }
        Self(columns)
    }

    /// Serializes the state back into a block.
    #[inline]
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, column) in block.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(column);
        }
        block
    }

    /// Byte at row `row`, column `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[col][row]
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut State) {
    for column in state.0.iter_mut() {
        for byte in column.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub(crate) fn shift_rows(state: &mut State) {
    let src = state.0;
    for row in 1..4 {
        for col in 0..4 {
            state.0[col][row] = src[(col + row) % 4][row];
        }
    }
}

fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

/// MixColumns over all four columns.
#[inline]
pub(crate) fn mix_columns(state: &mut State) {
    for column in state.0.iter_mut() {
        mix_single_column(column);
    }
}

/// Adds (XORs) a round key into the state.
///
/// The round key shares the state's column-major layout, so byte `4 * c + r`
/// of the key meets row `r`, column `c`.
#[inline]
pub(crate) fn add_round_key(state: &mut State, round_key: &Block) {
    for (column, key_column) in state.0.iter_mut().zip(round_key.chunks_exact(4)) {
        for (byte, key_byte) in column.iter_mut().zip(key_column) {
            *byte ^= *key_byte;
        }
    }
}
