// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{element::Element, error::OutOfRange, index, string::BoundedString};

impl<E: Element, const N: usize> BoundedString<E, N> {
    /// Returns the slot at `i` (content, terminator or tail), or
    /// [`OutOfRange`] if `i >= N`.
    #[inline]
    #[track_caller]
    pub fn at(&self, i: usize) -> Result<&E, OutOfRange> {
        index::at(&self.buf, i, "BoundedString::at")
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut E, OutOfRange> {
        index::at_mut(&mut self.buf, i, "BoundedString::at_mut")
    }

    /// Returns `Some(&E)` if `i < N`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&E> {
        self.buf.get(i)
    }

    /// Returns `Some(&mut E)` if `i < N`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut E> {
        self.buf.get_mut(i)
    }

    /// Returns the slot at `i` without a bounds check in release builds.
    ///
    /// Debug builds raise [`OutOfRange`] for `i >= N`. A zero-capacity string
    /// raises in every build.
    ///
    /// # Safety
    ///
    /// `i` must be less than `N`.
    #[cfg(feature = "unchecked")]
    #[inline]
    #[track_caller]
    pub unsafe fn get_unchecked(&self, i: usize) -> &E {
        index::guard_unchecked(N, i, "BoundedString::get_unchecked");
        // SAFETY: the caller guarantees `i < N`.
        unsafe { self.buf.get_unchecked(i) }
    }

    /// Mutable variant of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `i` must be less than `N`.
    #[cfg(feature = "unchecked")]
    #[inline]
    #[track_caller]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut E {
        index::guard_unchecked(N, i, "BoundedString::get_unchecked_mut");
        // SAFETY: the caller guarantees `i < N`.
        unsafe { self.buf.get_unchecked_mut(i) }
    }

    /// Exchanges the slots at `a` and `b`.
    ///
    /// Raises [`OutOfRange`] if either index is `>= N`. Swapping a slot with
    /// itself is a no-op.
    #[inline]
    #[track_caller]
    pub fn swap_elements(&mut self, a: usize, b: usize) {
        for i in [a, b] {
            if i >= N {
                OutOfRange::new(i, N, "BoundedString::swap_elements").raise();
            }
        }
        self.buf.swap(a, b);
    }

    /// Exchanges the whole buffers of `self` and `other`.
    ///
    /// The two operands are always distinct objects: `&mut` rules out aliasing.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.buf, &mut other.buf);
    }
}
