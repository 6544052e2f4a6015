// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

use scryptor_alloc::AllocError;
use scryptor_codec::McfError;
use scryptor_core::CoreError;
use scryptor_rand::EntropyError;

/// The unified error type for `derive`, `hash_password`, and `verify_password`.
///
/// There is no `TypeError` variant: `password`/`salt` are `&[u8]` at this
/// boundary, so "argument is not an octet string" is unrepresentable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter was out of range: `N` not a power of two, `r`/`p`/`N`
    /// out of bounds, `r*p` overflow, or a size computation that would
    /// overflow the platform.
    #[error("invalid scrypt parameter: {0}")]
    InvalidParameter(&'static str),

    /// The MCF string failed structural, length, or base64 decoding
    /// checks. The message deliberately never repeats which field failed
    /// (version tag, salt length, base64 alphabet, hash length): a caller
    /// logging this error verbatim cannot leak that detail to whoever
    /// supplied the malformed string.
    #[error("malformed MCF password hash string")]
    MalformedHash(#[source] McfError),

    /// The requested working set exceeds the configured allocation
    /// ceiling, or the platform refused the allocation.
    #[error("scrypt working set exceeds the configured allocation ceiling")]
    ResourceExhausted(#[source] AllocError),

    /// The OS entropy source failed while drawing a random salt.
    #[error("entropy source unavailable")]
    Entropy(#[from] EntropyError),
}

impl From<McfError> for Error {
    fn from(err: McfError) -> Self {
        match err {
            // `encode`'s own range checks (the only place this variant is
            // constructed) are out-of-range *inputs*, not a malformed
            // on-disk record, so this maps to `InvalidParameter` rather
            // than `MalformedHash`.
            McfError::InvalidParameter(reason) => Error::InvalidParameter(reason),
            other => Error::MalformedHash(other),
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidParameter(reason) => Error::InvalidParameter(reason),
            CoreError::Alloc(alloc_err) => Error::ResourceExhausted(alloc_err),
        }
    }
}
