// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

/// Errors from the byte-source collaborator.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum EntropyError {
    /// The OS CSPRNG was unavailable or refused to produce randomness.
    ///
    /// This is a hard failure: the library never substitutes a weaker
    /// source when the strong one is unavailable.
    #[error("system entropy source unavailable")]
    Unavailable,
}
