//! Cipher Block Chaining (CBC) mode over the AES block core.
//!
//! Encryption XORs each plaintext block with the previous ciphertext block
//! (the IV for the first block) before the block cipher runs; decryption
//! applies the block cipher first and XORs afterwards, chaining on the
//! original ciphertext blocks. Inputs must be an exact multiple of the
//! 16-byte block; arbitrary-length payloads go through [`padding`].
//!
//! Chaining state is local to each call. A caller resuming a CBC stream
//! across calls passes the last ciphertext block as the next IV.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
pub mod padding;

pub use crate::error::Error;
pub use crate::padding::{decrypt_padded, encrypt_padded};

use aes_core::{decrypt_block, encrypt_block, xor_in_place, Block, RoundKeys, BLOCK_SIZE};

fn check_lengths(input_len: usize, output_len: usize) -> Result<(), Error> {
    if input_len % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBufferLength { actual: input_len });
    }
    if output_len != input_len {
        return Err(Error::BufferSizeMismatch {
            expected: input_len,
            actual: output_len,
        });
    }
    Ok(())
}

/// Encrypts `plaintext` into `ciphertext` in CBC mode.
///
/// `plaintext` must be a multiple of 16 bytes and `ciphertext` the same
/// length; on error nothing is written. The IV is read once as the chaining
/// seed and never modified. A zero-length input succeeds and writes nothing.
pub fn encrypt(
    plaintext: &[u8],
    ciphertext: &mut [u8],
    round_keys: &RoundKeys,
    iv: &Block,
) -> Result<(), Error> {
    check_lengths(plaintext.len(), ciphertext.len())?;

    let mut prev = *iv;
    for (src, dst) in plaintext
        .chunks_exact(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact_mut(BLOCK_SIZE))
    {
        let mut block: Block = src.try_into().expect("chunk length is sixteen");
        xor_in_place(&mut block, &prev);
        prev = encrypt_block(&block, round_keys);
        dst.copy_from_slice(&prev);
    }
    Ok(())
}

/// Decrypts `ciphertext` into `plaintext` in CBC mode.
///
/// Chaining uses the original ciphertext blocks, captured before the output
/// write, so each block of damage stays local (a corrupted ciphertext block
/// garbles its own plaintext and bit-flips the next, nothing else).
pub fn decrypt(
    ciphertext: &[u8],
    plaintext: &mut [u8],
    round_keys: &RoundKeys,
    iv: &Block,
) -> Result<(), Error> {
    check_lengths(ciphertext.len(), plaintext.len())?;

    let mut prev = *iv;
    for (src, dst) in ciphertext
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        let block: Block = src.try_into().expect("chunk length is sixteen");
        let mut decrypted = decrypt_block(&block, round_keys);
        xor_in_place(&mut decrypted, &prev);
        dst.copy_from_slice(&decrypted);
        prev = block;
    }
    Ok(())
}
