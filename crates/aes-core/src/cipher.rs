//! Key schedule and single-block encryption/decryption.

use crate::block::Block;
use crate::key::{AesKey, RoundKeys, MAX_ROUND_KEYS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a raw key into the round-key schedule (FIPS-197 §5.2).
///
/// The schedule holds `4 * (Nr + 1)` words: 44 for AES-128, 52 for AES-192,
/// 60 for AES-256. The extra SubWord applied when `i mod Nk == 4` exists
/// only for the 8-word AES-256 key.
pub fn expand_key(key: &AesKey) -> RoundKeys {
    let key_bytes = key.as_bytes();
    let nk = key_bytes.len() / 4;
    let rounds = key.rounds();
    let word_count = 4 * (rounds + 1);

    let mut w = [0u32; 4 * MAX_ROUND_KEYS];
    for (i, chunk) in key_bytes.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in nk..word_count {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk == 8 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; MAX_ROUND_KEYS];
    for round in 0..=rounds {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            let offset = word_idx * 4;
            round_keys[round][offset..offset + 4].copy_from_slice(&bytes);
        }
    }

    RoundKeys::new(round_keys, rounds)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round omits MixColumns per FIPS-197.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(rounds));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}
