// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! scrypt (RFC 7914) key derivation and `$s1$` Modular Crypt Format password
//! hashing.
//!
//! This facade composes narrowly-scoped collaborator crates: the
//! computational kernel (`scryptor-core`), the MCF codec
//! (`scryptor-codec`), and the OS entropy source (`scryptor-rand`). There
//! is no streaming API — `derive` consumes `password` and `salt` whole —
//! and no alternate hash function in the inner PBKDF2 beyond SHA-256.

mod error;

use scryptor_alloc::DEFAULT_MAX_BYTES;
use scryptor_rand::{EntropySource, SystemEntropySource};

pub use error::Error;

/// The "interactive" cost factor from the original paper.
pub const DEFAULT_N: u64 = 1 << 14;
/// The default block size factor.
pub const DEFAULT_R: u32 = 8;
/// The default parallelization factor.
pub const DEFAULT_P: u32 = 1;
/// Octets drawn from the entropy source when `hash_password` is not given
/// an explicit salt.
pub const DEFAULT_SALT_LEN: usize = 16;
/// The derived-key length `hash_password` always requests: a raw 64-octet
/// hash embedded in the MCF record.
pub const MCF_HASH_LEN: usize = 64;

/// Derives `dk_len` octets from `(password, salt)` under cost parameters
/// `(n, r, p)`, per RFC 7914.
///
/// Uses the default allocation ceiling ([`scryptor_alloc::DEFAULT_MAX_BYTES`]).
/// Fails with [`Error::InvalidParameter`] if `n` is not a power of two in
/// `2..=2^63`, if `r`/`p` are out of `1..2^30` or `r*p >= 2^30`, or if
/// `dk_len` is zero or exceeds `(2^32-1)*32`. Fails with
/// [`Error::ResourceExhausted`] if the resulting working set exceeds the
/// ceiling.
pub fn derive(password: &[u8], salt: &[u8], n: u64, r: u32, p: u32, dk_len: usize) -> Result<Vec<u8>, Error> {
    scryptor_core::scrypt(password, salt, n, r, p, dk_len, DEFAULT_MAX_BYTES).map_err(Error::from)
}

/// Derives a password hash and encodes it as a `$s1$` MCF record.
///
/// If `salt` is `None`, draws [`DEFAULT_SALT_LEN`] octets from the system
/// entropy source; fails with [`Error::Entropy`] if that draw fails. Always
/// derives a [`MCF_HASH_LEN`]-octet raw hash. Fails with
/// [`Error::InvalidParameter`] for `N`/`r`/`p` out of the MCF-specific
/// range (`1 <= r,p <= 255`, `2 <= N <= 2^31`) or a caller-supplied salt
/// outside `1..=16` octets.
pub fn hash_password(password: &[u8], salt: Option<&[u8]>, n: u64, r: u32, p: u32) -> Result<String, Error> {
    let mut drawn_salt;
    let salt: &[u8] = if let Some(s) = salt {
        s
    } else {
        drawn_salt = [0u8; DEFAULT_SALT_LEN];
        SystemEntropySource.fill_bytes(&mut drawn_salt)?;
        &drawn_salt
    };

    // Check the MCF-specific ranges before paying for a scrypt computation
    // that `encode` would reject anyway.
    scryptor_codec::validate_params(n, r, p, salt.len())?;

    let hash = derive(password, salt, n, r, p, MCF_HASH_LEN)?;
    let encoded = scryptor_codec::encode(n, r, p, salt, &hash)?;
    Ok(encoded)
}

/// Verifies `password` against a `$s1$` MCF record.
///
/// Decodes `mcf`, re-derives with the decoded parameters and salt, and
/// compares the two 64-octet hashes with [`scryptor_util::constant_time_eq`].
/// Returns `Ok(true)`/`Ok(false)` for a match/mismatch; never errors on a
/// mismatch, only on a malformed `mcf` string ([`Error::MalformedHash`]).
pub fn verify_password(mcf: &str, password: &[u8]) -> Result<bool, Error> {
    let record = scryptor_codec::decode(mcf)?;
    let candidate = derive(password, &record.salt, record.n, record.r, record.p, record.hash.len())?;
    Ok(scryptor_util::constant_time_eq(&candidate, &record.hash))
}
