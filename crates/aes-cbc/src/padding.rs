//! PKCS#7 padding for CBC payloads of arbitrary length.
//!
//! The chaining layer operates strictly on multiples of the 16-byte block;
//! this module implements the RFC 5652 §6.3 padding scheme so callers with
//! arbitrary-length data have one documented way to fit it. Padding is
//! always applied: a message that is already block-aligned gains one full
//! block of 0x10 bytes, which is what makes unpadding unambiguous.

use aes_core::{Block, RoundKeys, BLOCK_SIZE};

use crate::error::Error;
use crate::{decrypt, encrypt};

/// Appends PKCS#7 padding, returning a block-aligned copy of `data`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips PKCS#7 padding, returning the payload prefix of `data`.
pub fn unpad(data: &[u8]) -> Result<&[u8], Error> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidPadding);
    }
    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(Error::InvalidPadding);
    }
    let (payload, tail) = data.split_at(data.len() - pad_len);
    if tail.iter().any(|&byte| byte as usize != pad_len) {
        return Err(Error::InvalidPadding);
    }
    Ok(payload)
}

/// Pads `plaintext` with PKCS#7 and encrypts it in CBC mode.
pub fn encrypt_padded(plaintext: &[u8], round_keys: &RoundKeys, iv: &Block) -> Vec<u8> {
    let padded = pad(plaintext);
    let mut ciphertext = vec![0u8; padded.len()];
    encrypt(&padded, &mut ciphertext, round_keys, iv).expect("padded length is a block multiple");
    ciphertext
}

/// Decrypts CBC ciphertext and strips PKCS#7 padding.
pub fn decrypt_padded(
    ciphertext: &[u8],
    round_keys: &RoundKeys,
    iv: &Block,
) -> Result<Vec<u8>, Error> {
    let mut padded = vec![0u8; ciphertext.len()];
    decrypt(ciphertext, &mut padded, round_keys, iv)?;
    let payload_len = unpad(&padded)?.len();
    padded.truncate(payload_len);
    Ok(padded)
}
