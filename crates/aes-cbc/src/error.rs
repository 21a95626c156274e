//! Error type for the chaining layer.

use thiserror::Error;

/// Errors reported by the chaining layer.
///
/// All validation happens before any byte is written, so a caller that sees
/// an error can rely on its output buffer being untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Input length is not a multiple of the 16-byte block size.
    #[error("buffer length {actual} is not a multiple of the 16-byte AES block")]
    InvalidBufferLength {
        /// Length of the rejected buffer in bytes.
        actual: usize,
    },
    /// Output buffer does not match the input length.
    #[error("output buffer holds {actual} bytes but {expected} are required")]
    BufferSizeMismatch {
        /// Required output length in bytes.
        expected: usize,
        /// Actual output length in bytes.
        actual: usize,
    },
    /// Decrypted payload does not end in well-formed PKCS#7 padding.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
}
