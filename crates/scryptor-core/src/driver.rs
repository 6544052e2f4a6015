// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! The `scrypt` driver, as defined by RFC 7914: parameter validation,
//! PBKDF2 pre/post expansion, and the p-fold ROMix pass.

use scryptor_alloc::{Scratch, DEFAULT_MAX_BYTES};

use crate::error::CoreError;
use crate::params::Params;
use crate::pbkdf2::{pbkdf2_hmac_sha256_into_words, pbkdf2_hmac_sha256_with_word_salt};
use crate::romix::ro_mix;

/// `dkLen` must not exceed `(2^32 - 1) * hLen`, the largest output
/// PBKDF2's 32-bit block counter can address.
const MAX_DK_LEN: u64 = (u32::MAX as u64) * 32;

/// Derives `dk_len` octets from `(password, salt)` under cost parameters
/// `(n, r, p)`, using `max_bytes` as the ceiling on scrypt's working set.
///
/// This is the function the facade's `derive` wraps directly; it validates
/// parameters before touching an allocator, then sizes the scratch buffers
/// with overflow- and ceiling-checking via [`Scratch::new`].
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    n: u64,
    r: u32,
    p: u32,
    dk_len: usize,
    max_bytes: usize,
) -> Result<Vec<u8>, CoreError> {
    let params = Params::new(n, r, p)?;

    if dk_len == 0 {
        return Err(CoreError::InvalidParameter("dkLen must be nonzero"));
    }
    if dk_len as u64 > MAX_DK_LEN {
        return Err(CoreError::InvalidParameter("dkLen exceeds the maximum derivable length"));
    }

    let mut scratch = Scratch::new(params.n, params.r, params.p, max_bytes)?;

    let block_len = 32 * params.r as usize;
    let (b, v, xy) = scratch.all_mut();

    pbkdf2_hmac_sha256_into_words(password, salt, 1, b)?;

    for block in b.chunks_mut(block_len) {
        ro_mix(block, params.r, params.n, v, xy);
    }

    let mut out = vec![0u8; dk_len];
    pbkdf2_hmac_sha256_with_word_salt(password, b, 1, &mut out)?;

    Ok(out)
}

/// `derive` as exposed publicly by the facade always uses the default
/// ceiling; this is the entry point for callers who accept it, kept
/// separate from [`scrypt`] so the facade can thread a caller-supplied
/// ceiling through without a default-argument pattern.
pub fn scrypt_default_ceiling(
    password: &[u8],
    salt: &[u8],
    n: u64,
    r: u32,
    p: u32,
    dk_len: usize,
) -> Result<Vec<u8>, CoreError> {
    scrypt(password, salt, n, r, p, dk_len, DEFAULT_MAX_BYTES)
}
