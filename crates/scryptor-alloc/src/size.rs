// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

use crate::error::AllocError;

/// Word counts (32-bit words) for scrypt's three working buffers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScratchWords {
    /// Length of `B`, in `u32` words: `32 * r * p`.
    pub b_words: usize,
    /// Length of `V`, in `u32` words: `32 * r * N`.
    pub v_words: usize,
    /// Length of `XY`, in `u32` words: `64 * r`.
    pub xy_words: usize,
}

/// Computes `ScratchWords` for `(N, r, p)`, checking every multiplication
/// for overflow and the total byte footprint against `max_bytes`, all
/// *before* any allocation is attempted.
///
/// `N` is taken as `u64` because the raw `derive` entry point allows
/// `N` up to `2^63`, well beyond what fits in a 32-bit `usize`.
pub fn checked_scratch_words(n: u64, r: u32, p: u32, max_bytes: usize) -> Result<ScratchWords, AllocError> {
    let r = r as usize;
    let p = p as usize;
    let n = usize::try_from(n).map_err(|_| AllocError::SizeOverflow)?;

    let block_len = 128usize
        .checked_mul(r)
        .ok_or(AllocError::SizeOverflow)?;

    let b_bytes = block_len.checked_mul(p).ok_or(AllocError::SizeOverflow)?;
    let v_bytes = block_len.checked_mul(n).ok_or(AllocError::SizeOverflow)?;
    let xy_bytes = 64usize.checked_mul(r).ok_or(AllocError::SizeOverflow)?.checked_mul(4).ok_or(AllocError::SizeOverflow)?;

    let total_bytes = b_bytes
        .checked_add(v_bytes)
        .and_then(|sum| sum.checked_add(xy_bytes))
        .ok_or(AllocError::SizeOverflow)?;

    if total_bytes > max_bytes {
        return Err(AllocError::CeilingExceeded {
            requested: total_bytes,
            ceiling: max_bytes,
        });
    }

    let b_words = b_bytes / 4;
    let v_words = v_bytes / 4;
    let xy_words = xy_bytes / 4;

    Ok(ScratchWords {
        b_words,
        v_words,
        xy_words,
    })
}
