// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

/// Returns `true` if `n` is a power of two (`n >= 1`).
pub fn is_power_of_two(n: u64) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Returns `t` such that `2^t == n`, or `None` if `n` is not a power of two
/// or `n == 0`.
///
/// Mirrors the reference implementation's `while 2**t < N: t += 1` loop
/// rather than using `u64::trailing_zeros` directly, so the non-power-of-two
/// rejection stays an explicit, auditable check.
pub fn checked_log2(n: u64) -> Option<u32> {
    if !is_power_of_two(n) {
        return None;
    }
    let mut t = 0u32;
    while (1u64 << t) < n {
        t += 1;
    }
    Some(t)
}
