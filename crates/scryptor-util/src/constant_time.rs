// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

/// Compares two byte slices for equality in constant time.
///
/// Unlike `==`, this never short-circuits on the first differing byte and
/// never branches on whether bytes are equal. A length mismatch is folded
/// into the accumulator instead of returning early, so callers cannot learn
/// anything about *where* two unequal-length buffers diverge from timing.
///
/// Returns `false` whenever the lengths differ, `true` only when every byte
/// matches.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let len_diff = (a.len() ^ b.len()) as u32;

    let n = core::cmp::max(a.len(), b.len());
    let mut acc: u8 = 0;
    for i in 0..n {
        let x = if i < a.len() { a[i] } else { 0 };
        let y = if i < b.len() { b[i] } else { 0 };
        acc |= x ^ y;
    }

    (acc as u32 | len_diff) == 0
}
