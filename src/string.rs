// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedString` type and its inherent API.
//!
//! `BoundedString<E, N>` is a fixed-capacity, null-terminated buffer of
//! [`Element`]s stored inline. Copies into it truncate silently and always
//! prefer leaving room for a terminator, unless the input exactly fills the
//! capacity.
//!
//! No heap allocations are performed.

mod access;
mod copy;
mod fmt;
mod new;

// Crate imports
use crate::element::Element;

// Core imports
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// A fixed-capacity, inline, null-terminated string of `E` elements.
///
/// # Layout and invariants
///
/// The backing buffer `[E; N]` always holds either
///
/// - a content prefix `buf[..len]` followed by a terminator ([`Element::NUL`])
///   at `len < N`, or
/// - `N` content elements and no terminator. Such a buffer is *saturated*.
///
/// [`length`](Self::length) reports `len` (or `N` when saturated). Elements
/// after the terminator are unspecified leftovers of earlier writes and are
/// never part of the content.
///
/// # Copy semantics
///
/// A copy of `L` source elements stores
///
/// - `L` elements plus a terminator when `L < N`,
/// - `N` elements and no terminator when `L == N`,
/// - `N - 1` elements plus a terminator when `L > N` (the rest is dropped).
///
/// With `N == 0` every copy is a no-op. Truncation is not an error.
///
/// Every copy and fill exists in two strategies (see [`Strategy`](crate::Strategy)).
/// The `const` constructors run element-wise; the runtime methods default to
/// bulk copies. Both produce the same buffer.
///
/// # Value semantics
///
/// `BoundedString` is `Copy`: assignment and moves duplicate the whole
/// `[E; N]` buffer, so copying and moving cost the same.
///
/// # Examples
///
/// ```rust
/// use bounded_inline::BoundedString;
///
/// let s: BoundedString<u8, 16> = BoundedString::from_array(b"Hello, World!");
/// assert_eq!(s.length(), 13);
/// assert_eq!(s.as_buffer()[13], 0);
///
/// let t: BoundedString<u8, 16> = BoundedString::from_array(b"twenty characters!!!");
/// assert_eq!(t.as_slice(), b"twenty characte");
/// assert_eq!(t.length(), 15);
/// ```
pub struct BoundedString<E: Element, const N: usize> {
    pub(crate) buf: [E; N],
}

/// Number of content elements a copy of `src_len` elements keeps in capacity `cap`.
#[inline]
pub(crate) const fn stored_len(src_len: usize, cap: usize) -> usize {
    if src_len <= cap {
        src_len
    } else if cap == 0 {
        0
    } else {
        cap - 1
    }
}

impl<E: Element, const N: usize> BoundedString<E, N> {
    /// The fixed capacity of this string, terminator slot included.
    pub const CAPACITY: usize = N;

    /// Returns the capacity (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of slots in the buffer (always `N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the largest content length this string can hold (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the number of elements before the first terminator, or `N` if
    /// the buffer is saturated.
    ///
    /// Scans at most `N` elements.
    #[inline]
    pub fn length(&self) -> usize {
        self.buf.iter().position(E::is_nul).unwrap_or(N)
    }

    /// Returns `true` if the content is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self.buf.first() {
            Some(e) => e.is_nul(),
            None => true,
        }
    }

    /// Returns `true` if the content fills all `N` slots and no terminator is present.
    ///
    /// Always `false` for `N == 0`.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        N > 0 && !self.buf.iter().any(E::is_nul)
    }

    /// Returns the content (`buf[..length()]`).
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.buf[..self.length()]
    }

    /// Returns the whole backing buffer, terminator and tail included.
    #[inline]
    pub const fn as_buffer(&self) -> &[E; N] {
        &self.buf
    }

    /// Returns the whole backing buffer mutably.
    ///
    /// Writing a terminator shortens the content; overwriting the last
    /// terminator saturates it.
    #[inline]
    pub fn as_buffer_mut(&mut self) -> &mut [E; N] {
        &mut self.buf
    }

    /// Consumes the string and returns its backing buffer.
    #[inline]
    pub const fn into_buffer(self) -> [E; N] {
        self.buf
    }

    /// Iterates over the content.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.as_slice().iter()
    }

    /// Writes a terminator after `n` content elements unless that would fall
    /// outside the buffer (`n == N`, saturated).
    #[inline]
    pub(crate) const fn terminate(&mut self, n: usize) {
        if n < N {
            self.buf[n] = E::NUL;
        }
    }
}

impl<E: Element, const N: usize> Copy for BoundedString<E, N> {}
impl<E: Element, const N: usize> Clone for BoundedString<E, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Element, const N: usize, const M: usize> PartialEq<BoundedString<E, M>>
    for BoundedString<E, N>
{
    fn eq(&self, other: &BoundedString<E, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<E: Element, const N: usize> Eq for BoundedString<E, N> {}

impl<E: Element, const N: usize> PartialEq<[E]> for BoundedString<E, N> {
    fn eq(&self, other: &[E]) -> bool {
        self.as_slice() == other
    }
}
impl<E: Element, const N: usize> PartialEq<&[E]> for BoundedString<E, N> {
    fn eq(&self, other: &&[E]) -> bool {
        self.as_slice() == *other
    }
}

impl<E: Element + Ord, const N: usize> Ord for BoundedString<E, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<E: Element + PartialOrd, const N: usize> PartialOrd for BoundedString<E, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<E: Element + Hash, const N: usize> Hash for BoundedString<E, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<E: Element, const N: usize> AsRef<[E]> for BoundedString<E, N> {
    fn as_ref(&self) -> &[E] {
        self.as_slice()
    }
}

impl<'a, E: Element, const N: usize> IntoIterator for &'a BoundedString<E, N> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
