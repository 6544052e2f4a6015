// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

use crate::error::EntropyError;

/// A source of cryptographically strong random bytes.
///
/// Implementations must fail loudly (return `Err`) rather than substitute a
/// weaker source when strong randomness is unavailable.
pub trait EntropySource {
    /// Fills `dest` with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::Unavailable`] if the underlying source fails.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
