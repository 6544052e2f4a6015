// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

use scryptor_alloc::AllocError;

/// Errors from the scrypt computational kernel.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum CoreError {
    /// A parameter was out of range for the operation requested.
    ///
    /// The message intentionally does not repeat the caller's raw input
    /// value, keeping with the non-disclosure rule below: callers can log this
    /// `Display` string without leaking *which* input byte was wrong, only
    /// that validation failed and roughly which parameter category.
    #[error("invalid scrypt parameter: {0}")]
    InvalidParameter(&'static str),

    /// Buffer sizing or allocation failed; see [`AllocError`].
    #[error(transparent)]
    Alloc(#[from] AllocError),
}
