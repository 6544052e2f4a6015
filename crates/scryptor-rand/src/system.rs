// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// The OS-level CSPRNG, via the `getrandom` crate.
///
/// Zero-sized and stateless, so it is trivially `Send + Sync` and safe to
/// share across threads calling `hash_password` concurrently.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource;

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::getrandom(dest).map_err(|_| EntropyError::Unavailable)
    }
}
