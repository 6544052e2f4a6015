// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

/// Errors from encoding or decoding a `$s1$` record.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum McfError {
    /// A parameter passed to [`crate::encode`] is out of range for the MCF
    /// format (tighter than the raw-`derive` ranges in `scryptor-core`).
    #[error("invalid MCF parameter: {0}")]
    InvalidParameter(&'static str),

    /// The input contained a non-ASCII octet.
    #[error("MCF record is not ASCII")]
    NotAscii,

    /// The input did not split into exactly five `$`-separated fields with
    /// an empty first field and a `s1` version tag.
    #[error("MCF record does not match the $s1$ structure")]
    BadStructure,

    /// The six-hex-digit parameter field failed to parse or decoded to an
    /// out-of-range `t`, `r`, or `p`.
    #[error("MCF record has a malformed parameter field")]
    BadParams,

    /// The salt field failed to base64-decode, or decoded to the wrong length.
    #[error("MCF record has a malformed salt field")]
    BadSalt,

    /// The hash field failed to base64-decode, or did not decode to exactly
    /// 64 octets.
    #[error("MCF record has a malformed hash field")]
    BadHash,
}
