// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! The `$s1$` Modular Crypt Format codec: encode/decode for scrypt password
//! hash records.

mod codec;
mod error;
mod record;

pub use codec::{decode, encode, validate_params};
pub use error::McfError;
pub use record::McfRecord;
