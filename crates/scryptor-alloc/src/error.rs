// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

/// Errors from sizing or allocating scrypt's working buffers.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum AllocError {
    /// A size computation (`N * r * 128`, `p * blockLen`, ...) overflowed
    /// `usize` on this platform.
    #[error("scrypt parameter combination overflows a size computation")]
    SizeOverflow,

    /// The computed working set exceeds the configured ceiling.
    #[error("scrypt working set of {requested} bytes exceeds the configured ceiling of {ceiling} bytes")]
    CeilingExceeded {
        /// Bytes the computation would have required.
        requested: usize,
        /// The ceiling that was exceeded.
        ceiling: usize,
    },
}
