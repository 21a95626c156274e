//! Error type for the cipher core.

use thiserror::Error;

/// Errors reported by the cipher core.
///
/// Every variant is detected before any cryptographic work begins; no call
/// produces partial output, and no message carries key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The raw key is not 16, 24, or 32 bytes long.
    #[error("invalid AES key length: {actual} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        actual: usize,
    },
}
