// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

use scryptor_zero::FastZeroizable;

use crate::error::AllocError;
use crate::size::checked_scratch_words;

/// Owns the three working buffers one `scrypt` call needs: `B`, `V`, `XY`.
///
/// Sizing goes through [`checked_scratch_words`] so no multiplication can
/// silently overflow into a too-small allocation, and the total footprint is
/// checked against `max_bytes` before any `Vec` is actually allocated.
/// Every buffer is best-effort zeroized on drop.
pub struct Scratch {
    b: Vec<u32>,
    v: Vec<u32>,
    xy: Vec<u32>,
}

impl Scratch {
    /// Allocates `B`, `V`, `XY` sized for `(N, r, p)`, rejecting the request
    /// with [`AllocError`] instead of allocating if sizing overflows or the
    /// total exceeds `max_bytes`.
    pub fn new(n: u64, r: u32, p: u32, max_bytes: usize) -> Result<Self, AllocError> {
        let words = checked_scratch_words(n, r, p, max_bytes)?;
        Ok(Self {
            b: vec![0u32; words.b_words],
            v: vec![0u32; words.v_words],
            xy: vec![0u32; words.xy_words],
        })
    }

    /// The `B` buffer: `p` concatenated `32r`-word blocks.
    pub fn b_mut(&mut self) -> &mut [u32] {
        &mut self.b
    }

    /// The `V` buffer: the ROMix scratch, `N` concatenated `32r`-word blocks.
    pub fn v_mut(&mut self) -> &mut [u32] {
        &mut self.v
    }

    /// The `XY` buffer: `64r` words of SMix working space.
    pub fn xy_mut(&mut self) -> &mut [u32] {
        &mut self.xy
    }

    /// Borrows all three buffers simultaneously, for the driver's SMix loop
    /// where a `B[i]` slice, `V`, and `XY` must all be written through at
    /// once. Sound because `b`, `v`, and `xy` are disjoint `Vec`s.
    pub fn all_mut(&mut self) -> (&mut [u32], &mut [u32], &mut [u32]) {
        (&mut self.b, &mut self.v, &mut self.xy)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        self.b.fast_zeroize();
        self.v.fast_zeroize();
        self.xy.fast_zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MAX_BYTES;

    #[test]
    fn allocates_expected_word_counts() {
        let mut s = Scratch::new(16, 1, 1, DEFAULT_MAX_BYTES).unwrap();
        assert_eq!(s.b_mut().len(), 32);
        assert_eq!(s.v_mut().len(), 32 * 16);
        assert_eq!(s.xy_mut().len(), 64);
    }

    #[test]
    fn rejects_ceiling_exceeding_request() {
        assert!(Scratch::new(1 << 20, 8, 1, 1024).is_err());
    }
}
