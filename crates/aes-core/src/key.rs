//! Key types for AES-128/192/256.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::Error;

/// Room for the largest schedule (AES-256: 14 rounds + 1 whitening key).
pub(crate) const MAX_ROUND_KEYS: usize = 15;

/// Raw AES key in one of the three FIPS-197 sizes.
///
/// The size decides the round count: 10, 12, or 14. Key bytes are wiped on
/// drop and never shown by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub enum AesKey {
    /// 128-bit key (10 rounds).
    Aes128([u8; 16]),
    /// 192-bit key (12 rounds).
    Aes192([u8; 24]),
    /// 256-bit key (14 rounds).
    Aes256([u8; 32]),
}

impl AesKey {
    /// Builds a key from raw bytes, rejecting any length other than
    /// 16, 24, or 32.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.len() {
            16 => {
                let mut key = [0u8; 16];
                key.copy_from_slice(bytes);
                Ok(Self::Aes128(key))
            }
            24 => {
                let mut key = [0u8; 24];
                key.copy_from_slice(bytes);
                Ok(Self::Aes192(key))
            }
            32 => {
                let mut key = [0u8; 32];
                key.copy_from_slice(bytes);
                Ok(Self::Aes256(key))
            }
            actual => Err(Error::InvalidKeyLength { actual }),
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Aes128(key) => key,
            Self::Aes192(key) => key,
            Self::Aes256(key) => key,
        }
    }

    /// Number of cipher rounds for this key size.
    pub fn rounds(&self) -> usize {
        match self {
            Self::Aes128(_) => 10,
            Self::Aes192(_) => 12,
            Self::Aes256(_) => 14,
        }
    }
}

impl From<[u8; 16]> for AesKey {
    fn from(value: [u8; 16]) -> Self {
        Self::Aes128(value)
    }
}

impl From<[u8; 24]> for AesKey {
    fn from(value: [u8; 24]) -> Self {
        Self::Aes192(value)
    }
}

impl From<[u8; 32]> for AesKey {
    fn from(value: [u8; 32]) -> Self {
        Self::Aes256(value)
    }
}

opaque_debug::implement!(AesKey);

/// Expanded round keys for one AES key.
///
/// Holds `rounds() + 1` blocks; slots past the round count stay zero for the
/// shorter key sizes and are never read. Immutable once produced, wiped on
/// drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUND_KEYS],
    rounds: usize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUND_KEYS], rounds: usize) -> Self {
        Self { keys, rounds }
    }

    /// Number of cipher rounds this schedule drives (10, 12, or 14).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns the round key at the requested index (0..=rounds()).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[round]
    }
}

opaque_debug::implement!(RoundKeys);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_fips_sizes() {
        assert_eq!(AesKey::from_slice(&[0u8; 16]).unwrap().rounds(), 10);
        assert_eq!(AesKey::from_slice(&[0u8; 24]).unwrap().rounds(), 12);
        assert_eq!(AesKey::from_slice(&[0u8; 32]).unwrap().rounds(), 14);
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0usize, 1, 15, 17, 20, 31, 33, 64] {
            let err = AesKey::from_slice(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, Error::InvalidKeyLength { actual: len });
        }
    }

    #[test]
    fn debug_does_not_leak_key_bytes() {
        let key = AesKey::from([0xabu8; 16]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("ab"));
        assert!(!rendered.contains("171"));
    }
}
