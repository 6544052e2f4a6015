// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! The byte-source collaborator `hash_password` draws MCF salts from.
//!
//! This is deliberately thin: one trait, one OS-backed implementation. There
//! is no key-derivation layer on top of the OS CSPRNG here (contrast a
//! general-purpose entropy framework that whitens OS randomness through an
//! extra HKDF pass before use) — salts are not secret key material, they
//! only need to be unique and unpredictable, and `getrandom` already
//! provides that.

mod error;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(test)]
mod tests;
