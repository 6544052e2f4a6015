// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! Best-effort zeroization for the large scratch buffers scrypt allocates.
//!
//! This is deliberately small: scrypt's working set (`B`, `V`, `XY`) is plain
//! `Vec<u32>`/`Vec<u8>`, so there is no derive machinery to build — just a
//! dyn-compatible trait with volatile-write implementations for the few
//! primitive shapes scrypt actually uses.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

/// A value that can overwrite its own storage with zero bytes.
///
/// The write uses `core::ptr::write_volatile` per element and is bracketed by
/// compiler fences so the optimizer cannot prove the write is dead and elide
/// it — the usual pitfall with a plain `*x = 0` on a value about to be
/// dropped. This is a best-effort guarantee, not a hardware one: a
/// sufficiently motivated attacker with access to copies the compiler made
/// behind our back (register spills, additional moves) is not defended
/// against.
pub trait FastZeroizable {
    /// Overwrites every byte of `self` with zero.
    fn fast_zeroize(&mut self);
}

impl FastZeroizable for u8 {
    fn fast_zeroize(&mut self) {
        unsafe { core::ptr::write_volatile(self, 0) };
        compiler_fence(Ordering::SeqCst);
    }
}

impl FastZeroizable for u32 {
    fn fast_zeroize(&mut self) {
        unsafe { core::ptr::write_volatile(self, 0) };
        compiler_fence(Ordering::SeqCst);
    }
}

impl FastZeroizable for u64 {
    fn fast_zeroize(&mut self) {
        unsafe { core::ptr::write_volatile(self, 0) };
        compiler_fence(Ordering::SeqCst);
    }
}

impl<T: FastZeroizable> FastZeroizable for [T] {
    fn fast_zeroize(&mut self) {
        for elem in self.iter_mut() {
            elem.fast_zeroize();
        }
    }
}

impl<T: FastZeroizable> FastZeroizable for Vec<T> {
    fn fast_zeroize(&mut self) {
        self.as_mut_slice().fast_zeroize();
    }
}
