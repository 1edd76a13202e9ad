//! Error types for key construction.

use thiserror::Error;

/// Returned when key material is not exactly 16 bytes long.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("AES-128 key must be 16 bytes, got {len}")]
pub struct InvalidKeyLength {
    /// Length of the rejected key material.
    pub len: usize,
}
