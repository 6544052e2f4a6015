// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! PBKDF2-HMAC-SHA256 per RFC 2898, as used by RFC 7914's scrypt construction.
//!
//! scrypt calls this twice: once to expand `(password, salt)` into the
//! working block `B`, once to expand `(password, B)` into the final derived
//! key. The first call's output and the second call's salt are both `B`,
//! which the driver keeps as `u32` words throughout rather than round-
//! tripping it through a byte `Vec` — so this module exposes word-aware
//! variants alongside the plain byte-to-byte entry point.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CoreError;

type HmacSha256 = Hmac<Sha256>;

const H_LEN: usize = 32;

/// Computes one `T_i` block (`U_1 ^ U_2 ^ ... ^ U_c`) for block index
/// `block_index` (1-indexed), given a way to feed the salt into a fresh
/// clone of the password's HMAC key schedule.
fn compute_t_block<S: Fn(&mut HmacSha256)>(
    base: &HmacSha256,
    feed_salt: &S,
    block_index: u32,
    c: u32,
) -> [u8; H_LEN] {
    let mut mac = base.clone();
    feed_salt(&mut mac);
    mac.update(&block_index.to_be_bytes());
    let u1: [u8; H_LEN] = mac.finalize().into_bytes().as_slice().try_into().unwrap();

    let mut t = u1;
    let mut u_prev = u1;
    for _ in 1..c {
        let mut mac = base.clone();
        mac.update(&u_prev);
        let u_next: [u8; H_LEN] = mac.finalize().into_bytes().as_slice().try_into().unwrap();
        for (t_byte, u_byte) in t.iter_mut().zip(u_next.iter()) {
            *t_byte ^= u_byte;
        }
        u_prev = u_next;
    }
    t
}

/// Derives `out.len()` octets from `(password, salt, c)` per PBKDF2-HMAC-SHA256.
///
/// `c` is the iteration count; scrypt always calls this with `c = 1`, but
/// the loop over `c` is exercised directly by the standard PBKDF2 vectors in
/// this crate's tests.
///
/// Fails with [`CoreError::InvalidParameter`] if `out` is empty.
pub fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], c: u32, out: &mut [u8]) -> Result<(), CoreError> {
    if out.is_empty() {
        return Err(CoreError::InvalidParameter("dkLen must be nonzero"));
    }

    let base =
        HmacSha256::new_from_slice(password).expect("HMAC accepts keys of any length");
    let feed_salt = |mac: &mut HmacSha256| mac.update(salt);

    for (i, chunk) in out.chunks_mut(H_LEN).enumerate() {
        let block_index = (i + 1) as u32;
        let t = compute_t_block(&base, &feed_salt, block_index, c);
        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    Ok(())
}

/// Like [`pbkdf2_hmac_sha256`], but writes the derived octets directly as
/// little-endian `u32` words rather than through an intermediate byte
/// buffer. Used to expand `(password, salt)` straight into the driver's `B`
/// scratch buffer.
///
/// `out_words.len()` must be a multiple of 2 (each `T_i` block is 32 octets
/// = 8 words); scrypt's block sizes always satisfy this.
pub(crate) fn pbkdf2_hmac_sha256_into_words(
    password: &[u8],
    salt: &[u8],
    c: u32,
    out_words: &mut [u32],
) -> Result<(), CoreError> {
    if out_words.is_empty() {
        return Err(CoreError::InvalidParameter("dkLen must be nonzero"));
    }

    let base =
        HmacSha256::new_from_slice(password).expect("HMAC accepts keys of any length");
    let feed_salt = |mac: &mut HmacSha256| mac.update(salt);

    let mut word_iter = out_words.iter_mut();
    let mut block_index = 0u32;
    'blocks: loop {
        block_index += 1;
        let t = compute_t_block(&base, &feed_salt, block_index, c);
        for word_bytes in t.chunks_exact(4) {
            match word_iter.next() {
                Some(w) => *w = u32::from_le_bytes(word_bytes.try_into().unwrap()),
                None => break 'blocks,
            }
        }
    }

    Ok(())
}

/// Like [`pbkdf2_hmac_sha256`], but the salt is a little-endian `u32` word
/// slice rather than a byte slice. Used for the final expansion step, where
/// scrypt's salt argument is the `B` block the first PBKDF2 call produced.
pub(crate) fn pbkdf2_hmac_sha256_with_word_salt(
    password: &[u8],
    salt_words: &[u32],
    c: u32,
    out: &mut [u8],
) -> Result<(), CoreError> {
    if out.is_empty() {
        return Err(CoreError::InvalidParameter("dkLen must be nonzero"));
    }

    let base =
        HmacSha256::new_from_slice(password).expect("HMAC accepts keys of any length");
    let feed_salt = |mac: &mut HmacSha256| {
        for word in salt_words {
            mac.update(&word.to_le_bytes());
        }
    };

    for (i, chunk) in out.chunks_mut(H_LEN).enumerate() {
        let block_index = (i + 1) as u32;
        let t = compute_t_block(&base, &feed_salt, block_index, c);
        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(password: &[u8], salt: &[u8], c: u32, dk_len: usize) -> Vec<u8> {
        let mut out = vec![0u8; dk_len];
        pbkdf2_hmac_sha256(password, salt, c, &mut out).unwrap();
        out
    }

    #[test]
    fn rejects_zero_length_output() {
        let mut out: [u8; 0] = [];
        assert!(pbkdf2_hmac_sha256(b"pw", b"salt", 1, &mut out).is_err());
    }

    // Standard PBKDF2-HMAC-SHA256 known-answer vectors for
    // password = "password", salt = "salt", dkLen = 32, at c = 1 and
    // c = 4096 -- the latter exercises the multi-iteration loop body that
    // scrypt itself never calls with c > 1.
    #[test]
    fn matches_known_answer_vector_single_iteration() {
        let out = derive(b"password", b"salt", 1, 32);
        let expected = hex::decode("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b").unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn matches_known_answer_vector_many_iterations() {
        let out = derive(b"password", b"salt", 4096, 32);
        let expected = hex::decode("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a").unwrap();
        assert_eq!(out, expected);
    }

    // The properties below pin down behavior scrypt depends on that isn't
    // implied by bit-exact KAT matches alone: determinism and correct
    // truncation at a non-block-aligned length.

    #[test]
    fn is_deterministic() {
        let a = derive(b"password", b"salt", 1, 48);
        let b = derive(b"password", b"salt", 1, 48);
        assert_eq!(a, b);
    }

    #[test]
    fn truncates_to_requested_length_mid_block() {
        let out = derive(b"password", b"salt", 1, 40);
        assert_eq!(out.len(), 40);
        // The first 32 bytes must match the block-aligned derivation; the
        // implementation is not allowed to compute a different T_1 merely
        // because dkLen isn't a multiple of hLen.
        let aligned = derive(b"password", b"salt", 1, 32);
        assert_eq!(&out[..32], &aligned[..]);
    }

    #[test]
    fn higher_iteration_count_changes_output() {
        let c1 = derive(b"password", b"salt", 1, 32);
        let c2 = derive(b"password", b"salt", 2, 32);
        assert_ne!(c1, c2);
    }

    #[test]
    fn distinct_salts_produce_distinct_output() {
        let a = derive(b"password", b"salt-a", 1, 32);
        let b = derive(b"password", b"salt-b", 1, 32);
        assert_ne!(a, b);
    }

    #[test]
    fn word_output_matches_byte_output_reinterpreted_as_le_words() {
        let bytes = derive(b"password", b"salt", 1, 32);
        let mut words = [0u32; 8];
        pbkdf2_hmac_sha256_into_words(b"password", b"salt", 1, &mut words).unwrap();
        let reinterpreted: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        assert_eq!(bytes, reinterpreted);
    }

    #[test]
    fn word_salt_matches_equivalent_byte_salt() {
        let salt_words: [u32; 2] = [0x6c61_7374, 0x2d73_616c];
        let salt_bytes: Vec<u8> = salt_words.iter().flat_map(|w| w.to_le_bytes()).collect();

        let mut via_words = vec![0u8; 32];
        pbkdf2_hmac_sha256_with_word_salt(b"password", &salt_words, 1, &mut via_words).unwrap();

        let via_bytes = derive(b"password", &salt_bytes, 1, 32);
        assert_eq!(via_words, via_bytes);
    }
}
