// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::OutOfRange, index, vector::BoundedVector};

impl<T: Copy, const N: usize> BoundedVector<T, N> {
    /// Returns the element at `i`, or [`OutOfRange`] if `i >= N`.
    ///
    /// For `N == 0` this is an error for every index.
    #[inline]
    #[track_caller]
    pub fn at(&self, i: usize) -> Result<&T, OutOfRange> {
        index::at(&self.data, i, "BoundedVector::at")
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, OutOfRange> {
        index::at_mut(&mut self.data, i, "BoundedVector::at_mut")
    }

    /// Returns `Some(&T)` if `i < N`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Returns `Some(&mut T)` if `i < N`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.data.get_mut(i)
    }

    /// Returns the element at `i` without a bounds check in release builds.
    ///
    /// Debug builds raise [`OutOfRange`] for `i >= N`. The zero-capacity
    /// vector raises for every index in every build and never reads memory.
    ///
    /// # Safety
    ///
    /// `i` must be less than `N`.
    #[cfg(feature = "unchecked")]
    #[inline]
    #[track_caller]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        index::guard_unchecked(N, i, "BoundedVector::get_unchecked");
        // SAFETY: the caller guarantees `i < N`.
        unsafe { self.data.get_unchecked(i) }
    }

    /// Mutable variant of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `i` must be less than `N`.
    #[cfg(feature = "unchecked")]
    #[inline]
    #[track_caller]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        index::guard_unchecked(N, i, "BoundedVector::get_unchecked_mut");
        // SAFETY: the caller guarantees `i < N`.
        unsafe { self.data.get_unchecked_mut(i) }
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// Raises [`OutOfRange`] if either index is `>= N`.
    #[inline]
    #[track_caller]
    pub fn swap_elements(&mut self, a: usize, b: usize) {
        for i in [a, b] {
            if i >= N {
                OutOfRange::new(i, N, "BoundedVector::swap_elements").raise();
            }
        }
        self.data.swap(a, b);
    }

    /// Exchanges all elements of `self` and `other`.
    ///
    /// The two operands are always distinct objects: `&mut` rules out aliasing.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.data, &mut other.data);
    }
}
