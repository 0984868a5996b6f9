// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedVector`](crate::BoundedVector).
//!
//! Every slot of a `BoundedVector<T, N>` is live, so iterating by value is
//! iterating the backing `[T; N]`: [`IntoIter`] wraps the array iterator and
//! always yields exactly `N` elements, padding slots included.

// Crate imports
use crate::vector::BoundedVector;

// Core imports
use core::{array, iter::FusedIterator};

/// Owned iterator returned by `BoundedVector::into_iter()`.
#[derive(Debug, Clone)]
pub struct IntoIter<T: Copy, const N: usize>(array::IntoIter<T, N>);

impl<T: Copy, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded, front to back.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }
}

impl<T: Copy, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.0.nth(n)
    }
}

impl<T: Copy, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.0.nth_back(n)
    }
}
impl<T: Copy, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T: Copy, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a BoundedVector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut BoundedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T: Copy, const N: usize> IntoIterator for BoundedVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.data.into_iter())
    }
}
