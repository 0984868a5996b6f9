// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedVector` type and its inherent API.
//!
//! `BoundedVector<T, N>` is a fixed-size array value: it always holds exactly
//! `N` live elements, has no terminator and never grows or shrinks. Copies into
//! it take `min(N, source length)` elements and leave the remaining slots as
//! they were.
//!
//! No heap allocations are performed.

mod access;
mod copy;
mod new;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-size, inline array of `N` `Copy` elements.
///
/// # Layout and invariants
///
/// - The storage is a plain `[T; N]` and every slot is a constructed `T`.
/// - The logical length is always `N` ([`len`](Self::len), [`size`](Self::size)
///   and [`max_size`](Self::max_size) all report `N`).
/// - `BoundedVector<T, 0>` stores nothing; every indexed access raises
///   [`OutOfRange`](crate::OutOfRange).
///
/// # Copy and fill
///
/// [`copy_from`](Self::copy_from) and the array/slice constructors copy
/// `min(N, source length)` elements. [`fill`](Self::fill) sets every slot,
/// choosing a bulk fill for single-byte elements and an element-wise loop
/// otherwise (see [`Strategy::for_fill`](crate::Strategy::for_fill)). The
/// `const` constructors always run element-wise.
///
/// # Value semantics
///
/// `BoundedVector` is `Copy`; moving or copying it duplicates all `N` slots.
///
/// # Examples
///
/// ```rust
/// use bounded_inline::BoundedVector;
///
/// let mut v: BoundedVector<i32, 4> = BoundedVector::from_array(&[1, 2]);
/// assert_eq!(v.data(), &[1, 2, 0, 0]);
///
/// v.fill(7);
/// assert!(v.iter().all(|x| *x == 7));
/// assert_eq!(v.iter().rev().count(), 4);
/// assert!(v.at(4).is_err());
/// ```
pub struct BoundedVector<T: Copy, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T: Copy, const N: usize> BoundedVector<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the number of elements (always `N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the maximum number of elements (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the number of elements (always `N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` only for the zero-capacity vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the whole backing array.
    #[inline]
    pub const fn data(&self) -> &[T; N] {
        &self.data
    }

    /// Returns the whole backing array mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// Returns all elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns all elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the vector and returns its backing array.
    #[inline]
    pub const fn into_array(self) -> [T; N] {
        self.data
    }

    // iterators
    /// Forward iterator over all `N` elements; `.rev()` walks them backwards.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable iterator over all `N` elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the first element, or `None` when `N == 0`.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the last element, or `None` when `N == 0`.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVector")
            .field("capacity", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for BoundedVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
impl<T: Copy + Eq, const N: usize> Eq for BoundedVector<T, N> {}
impl<T: Copy + PartialEq, const N: usize> PartialEq<[T]> for BoundedVector<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Copy + PartialEq, const N: usize> PartialEq<[T; N]> for BoundedVector<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data == *other
    }
}
impl<T: Copy + Ord, const N: usize> Ord for BoundedVector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Copy + PartialOrd, const N: usize> PartialOrd for BoundedVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Copy + Hash, const N: usize> Hash for BoundedVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for BoundedVector<T, N> {}
impl<T: Copy, const N: usize> Clone for BoundedVector<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, const N: usize> Deref for BoundedVector<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> DerefMut for BoundedVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Copy, const N: usize> AsRef<[T]> for BoundedVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> AsMut<[T]> for BoundedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T: Copy, const N: usize> Borrow<[T]> for BoundedVector<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> BorrowMut<[T]> for BoundedVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
