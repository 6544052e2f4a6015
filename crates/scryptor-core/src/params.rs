// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! Parameter validation for the raw `scrypt` entry point.
//!
//! MCF encoding applies its own, tighter range (`N <= 2^31`, `r,p <= 255`);
//! that check lives in `scryptor-codec`, not here.

use scryptor_util::is_power_of_two;

use crate::error::CoreError;

/// Maximum `r*p` product, exclusive: RFC 7914 bounds the product so that
/// the derived `128*r*p`-octet working set stays addressable.
const RP_LIMIT: u64 = 1 << 30;

/// The validated `(N, r, p)` triple a `scrypt` call operates on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Params {
    pub n: u64,
    pub r: u32,
    pub p: u32,
}

impl Params {
    /// Validates `(N, r, p)` against the raw `derive` entry point's range:
    /// `N` a power of two with `2 <= N <= 2^63`, `1 <= r < 2^30`,
    /// `1 <= p < 2^30`, and `r * p < 2^30`.
    pub fn new(n: u64, r: u32, p: u32) -> Result<Self, CoreError> {
        if n < 2 || !is_power_of_two(n) {
            return Err(CoreError::InvalidParameter("N must be a power of two, N >= 2"));
        }
        if n > (1u64 << 63) {
            return Err(CoreError::InvalidParameter("N exceeds the maximum of 2^63"));
        }
        if r == 0 || (r as u64) >= RP_LIMIT {
            return Err(CoreError::InvalidParameter("r must satisfy 1 <= r < 2^30"));
        }
        if p == 0 || (p as u64) >= RP_LIMIT {
            return Err(CoreError::InvalidParameter("p must satisfy 1 <= p < 2^30"));
        }
        if (r as u64) * (p as u64) >= RP_LIMIT {
            return Err(CoreError::InvalidParameter("r * p must be less than 2^30"));
        }

        Ok(Self { n, r, p })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_interactive_defaults() {
        assert!(Params::new(1 << 14, 8, 1).is_ok());
    }

    #[test]
    fn rejects_non_power_of_two_n() {
        assert!(Params::new(3, 1, 1).is_err());
        assert!(Params::new(1, 1, 1).is_err());
    }

    #[test]
    fn rejects_zero_r_or_p() {
        assert!(Params::new(16, 0, 1).is_err());
        assert!(Params::new(16, 1, 0).is_err());
    }

    #[test]
    fn rejects_rp_product_at_or_above_limit() {
        assert!(Params::new(16, 1 << 15, 1 << 15).is_err());
    }

    #[test]
    fn accepts_n_at_the_2_to_63_ceiling() {
        assert!(Params::new(1u64 << 63, 1, 1).is_ok());
    }
}
