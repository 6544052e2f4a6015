// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! Encode/decode for the `$s1$PPRRTT$<salt_b64>$<hash_b64>` password hash
//! record: a `$`-delimited, fully-printable-ASCII analogue of the crypt(3)
//! hash format, carrying the packed cost parameters plus base64-encoded
//! salt and hash.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use scryptor_util::checked_log2;

use crate::error::McfError;
use crate::record::McfRecord;

const PREFIX: &str = "$s1$";
const HASH_LEN: usize = 64;
const MAX_SALT_LEN: usize = 16;
const MAX_N: u64 = 1 << 31;
const MAX_RP: u32 = 255;

/// Validates `(n, r, p, salt_len)` against this format's own range, without
/// touching the hash or allocating an encoded string: `1 <= r, p <= 255`,
/// `2 <= N <= 2^31` and a power of two, `1 <= salt_len <= 16`. Returns the
/// packed `t = log2(N)` on success, since [`encode`] needs it anyway.
///
/// Exposed so a caller that is about to run an expensive key derivation
/// under these parameters can reject an out-of-range `r`/`p`/`N`/salt
/// length up front, before paying for that derivation.
pub fn validate_params(n: u64, r: u32, p: u32, salt_len: usize) -> Result<u32, McfError> {
    if r == 0 || r > MAX_RP {
        return Err(McfError::InvalidParameter("r must satisfy 1 <= r <= 255"));
    }
    if p == 0 || p > MAX_RP {
        return Err(McfError::InvalidParameter("p must satisfy 1 <= p <= 255"));
    }
    if n < 2 || n > MAX_N {
        return Err(McfError::InvalidParameter("N must satisfy 2 <= N <= 2^31"));
    }
    let t = checked_log2(n).ok_or(McfError::InvalidParameter("N must be a power of two"))?;
    if salt_len == 0 || salt_len > MAX_SALT_LEN {
        return Err(McfError::InvalidParameter("salt must be 1 to 16 octets"));
    }
    Ok(t)
}

/// Encodes `(n, r, p, salt, hash)` into a `$s1$` record.
///
/// Fails with [`McfError::InvalidParameter`] if any input is out of the
/// MCF-specific range: `1 <= r, p <= 255`, `2 <= N <= 2^31` and a power of
/// two, `1 <= salt.len() <= 16`, `hash.len() == 64`.
pub fn encode(n: u64, r: u32, p: u32, salt: &[u8], hash: &[u8]) -> Result<String, McfError> {
    let t = validate_params(n, r, p, salt.len())?;
    if hash.len() != HASH_LEN {
        return Err(McfError::InvalidParameter("hash must be exactly 64 octets"));
    }

    let params = (p) | (r << 8) | (t << 16);
    let salt_b64 = STANDARD.encode(salt);
    let hash_b64 = STANDARD.encode(hash);

    Ok(format!("{PREFIX}{params:06x}${salt_b64}${hash_b64}"))
}

/// Decodes a `$s1$` record. Rejects anything but the strict, fully-padded
/// form this crate itself emits: no `$7$` interop, no leniency toward a
/// caller-stripped `=` padding.
pub fn decode(record: &str) -> Result<McfRecord, McfError> {
    if !record.is_ascii() {
        return Err(McfError::NotAscii);
    }

    let parts: Vec<&str> = record.split('$').collect();
    if parts.len() != 5 || !parts[0].is_empty() || parts[1] != "s1" {
        return Err(McfError::BadStructure);
    }

    let params_hex = parts[2];
    if params_hex.len() != 6 {
        return Err(McfError::BadParams);
    }
    let params = u32::from_str_radix(params_hex, 16).map_err(|_| McfError::BadParams)?;
    let p = params & 0xff;
    let r = (params >> 8) & 0xff;
    let t = (params >> 16) & 0xff;
    if !(1..=31).contains(&t) || r < 1 || p < 1 {
        return Err(McfError::BadParams);
    }
    let n = 1u64 << t;

    let salt = STANDARD.decode(parts[3]).map_err(|_| McfError::BadSalt)?;
    if salt.is_empty() || salt.len() > MAX_SALT_LEN {
        return Err(McfError::BadSalt);
    }

    let hash = STANDARD.decode(parts[4]).map_err(|_| McfError::BadHash)?;
    if hash.len() != HASH_LEN {
        return Err(McfError::BadHash);
    }

    Ok(McfRecord { n, r, p, salt, hash })
}
