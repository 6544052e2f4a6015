// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! The scrypt computational kernel: PBKDF2-HMAC-SHA256,
//! Salsa20/8, BlockMix, ROMix/SMix, and the driver that wires them
//! together. `Vec`-heavy working buffers mean this crate links `std`
//! rather than going `no_std`, unlike its leaf dependencies.

mod blockmix;
mod driver;
mod error;
mod params;
mod pbkdf2;
mod romix;
mod salsa208;

pub use driver::{scrypt, scrypt_default_ceiling};
pub use error::CoreError;
pub use params::Params;
pub use pbkdf2::pbkdf2_hmac_sha256;
