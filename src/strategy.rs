// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy and fill strategies.
//!
//! Every copy/fill in this crate has two implementations:
//!
//! - [`Strategy::ElementWise`] indexes one element at a time. Its primitives
//!   ([`copy_elements`], [`fill_elements`]) are `const fn`, and they are the only
//!   path used by the `const` constructors.
//! - [`Strategy::Bulk`] uses `copy_from_slice` / `fill`, which lower to
//!   `memcpy` / `memset`. It is the runtime default.
//!
//! Both leave identical buffers for identical inputs; the containers only use
//! the strategy to choose *how* elements move, never *which* elements move.

// Crate imports
use crate::element::Element;

// Core imports
use core::mem;

/// How a copy or fill moves elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// One element at a time; usable in `const` evaluation.
    ElementWise,
    /// Whole-slice `copy_from_slice` / `fill`.
    #[default]
    Bulk,
}

impl Strategy {
    /// The fill strategy used by [`BoundedVector::fill`](crate::BoundedVector::fill):
    /// bulk for single-byte elements, element-wise otherwise.
    #[inline]
    pub const fn for_fill<T>() -> Self {
        if mem::size_of::<T>() == 1 {
            Self::Bulk
        } else {
            Self::ElementWise
        }
    }

    /// Returns `true` for [`Strategy::Bulk`].
    #[inline]
    pub const fn is_bulk(self) -> bool {
        matches!(self, Self::Bulk)
    }

    /// Copies `src[..n]` into `dst[..n]`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds either slice length.
    #[inline]
    pub fn copy_prefix<T: Copy>(self, dst: &mut [T], src: &[T], n: usize) {
        match self {
            Self::ElementWise => copy_elements(dst, src, n),
            Self::Bulk => dst[..n].copy_from_slice(&src[..n]),
        }
    }

    /// Sets every element of `dst` to `value`.
    #[inline]
    pub fn fill<T: Copy>(self, dst: &mut [T], value: T) {
        match self {
            Self::ElementWise => fill_elements(dst, value),
            Self::Bulk => dst.fill(value),
        }
    }

    /// Counts the leading non-terminator elements of `src[..limit]`.
    ///
    /// At most `limit` elements of `src` are read.
    ///
    /// # Panics
    ///
    /// Panics if `limit > src.len()`.
    #[inline]
    pub fn nul_prefix<E: Element>(self, src: &[E], limit: usize) -> usize {
        match self {
            Self::ElementWise => {
                let mut i = 0;
                while i < limit && !src[i].is_nul() {
                    i += 1;
                }
                i
            }
            Self::Bulk => {
                let window = &src[..limit];
                window.iter().position(E::is_nul).unwrap_or(limit)
            }
        }
    }
}

/// Element-wise copy of `src[..n]` into `dst[..n]`.
///
/// # Panics
///
/// Panics (or fails const evaluation) if `n` exceeds either slice length.
#[inline]
pub const fn copy_elements<T: Copy>(dst: &mut [T], src: &[T], n: usize) {
    let mut i = 0;
    while i < n {
        dst[i] = src[i];
        i += 1;
    }
}

/// Element-wise fill of every element of `dst` with `value`.
#[inline]
pub const fn fill_elements<T: Copy>(dst: &mut [T], value: T) {
    let mut i = 0;
    while i < dst.len() {
        dst[i] = value;
        i += 1;
    }
}
