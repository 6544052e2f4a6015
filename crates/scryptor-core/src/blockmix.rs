// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! BlockMix, as defined by RFC 7914: mixes a `2r`-subblock input block
//! using Salsa20/8.

use crate::salsa208::salsa20_8;

const WORDS_PER_SUBBLOCK: usize = 16;

/// `BlockMix_{Salsa20/8, r}`: reads the `32r`-word block `input`, writes the
/// mixed `32r`-word result to `output`. `input` and `output` must not alias.
pub fn block_mix(input: &[u32], output: &mut [u32], r: u32) {
    let r = r as usize;
    let subblocks = 2 * r;
    debug_assert_eq!(input.len(), WORDS_PER_SUBBLOCK * subblocks);
    debug_assert_eq!(output.len(), WORDS_PER_SUBBLOCK * subblocks);

    let last = (subblocks - 1) * WORDS_PER_SUBBLOCK;
    let mut x: [u32; WORDS_PER_SUBBLOCK] = input[last..last + WORDS_PER_SUBBLOCK].try_into().unwrap();

    for i in 0..subblocks {
        let b_i = &input[i * WORDS_PER_SUBBLOCK..(i + 1) * WORDS_PER_SUBBLOCK];
        for (xw, bw) in x.iter_mut().zip(b_i.iter()) {
            *xw ^= bw;
        }
        salsa20_8(&mut x);

        // Even-indexed subblocks land in the first half of the output,
        // odd-indexed in the second half.
        let dest = if i % 2 == 0 { i / 2 } else { r + i / 2 };
        output[dest * WORDS_PER_SUBBLOCK..(dest + 1) * WORDS_PER_SUBBLOCK].copy_from_slice(&x);
    }
}
