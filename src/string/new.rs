// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    element::Element,
    strategy::copy_elements,
    string::{BoundedString, stored_len},
};

impl<E: Element, const N: usize> BoundedString<E, N> {
    /// Constructs an empty string with every slot set to the terminator.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: [E::NUL; N] }
    }

    /// Constructs a string with all `N` slots set to `value`.
    ///
    /// No terminator slot is reserved: filling with a non-terminator value
    /// yields a saturated string.
    #[inline]
    pub const fn filled(value: E) -> Self {
        Self { buf: [value; N] }
    }

    /// Constructs from a raw array, treating all `M` elements as the source.
    ///
    /// Runs element-wise, so it is usable in `const` items.
    #[inline]
    pub const fn from_array<const M: usize>(src: &[E; M]) -> Self {
        Self::from_slice_counted(src, M)
    }

    /// Constructs from a slice, treating all of it as the source.
    #[inline]
    pub const fn from_slice(src: &[E]) -> Self {
        Self::from_slice_counted(src, src.len())
    }

    /// Constructs from the first `min(count, src.len())` elements of `src`.
    ///
    /// Terminators inside the source are copied like any other element.
    #[inline]
    pub const fn from_slice_counted(src: &[E], count: usize) -> Self {
        let requested = if count < src.len() { count } else { src.len() };
        let mut out = Self::new();
        out.copy_const(src, requested);
        out
    }

    /// Constructs from a terminator-delimited source.
    ///
    /// See [`copy_until_nul`](Self::copy_until_nul). Not `const`: finding the
    /// terminator needs `PartialEq` on `E`.
    #[inline]
    pub fn from_nul_terminated(src: &[E]) -> Self {
        let mut out = Self::new();
        out.copy_until_nul(src);
        out
    }

    /// Constructs from the content of another bounded string of any capacity.
    #[inline]
    pub fn from_bounded<const M: usize>(other: &BoundedString<E, M>) -> Self {
        Self::from_slice(other.as_slice())
    }

    /// Element-wise copy of `src[..requested]` under the truncation rule.
    ///
    /// Returns the number of content elements stored.
    #[inline]
    pub(crate) const fn copy_const(&mut self, src: &[E], requested: usize) -> usize {
        let n = stored_len(requested, N);
        copy_elements(&mut self.buf, src, n);
        self.terminate(n);
        n
    }
}

impl<E: Element, const N: usize> Default for BoundedString<E, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element, const N: usize, const M: usize> From<&[E; M]> for BoundedString<E, N> {
    fn from(src: &[E; M]) -> Self {
        Self::from_array(src)
    }
}

impl<E: Element, const N: usize, const M: usize> From<&BoundedString<E, M>>
    for BoundedString<E, N>
{
    fn from(other: &BoundedString<E, M>) -> Self {
        Self::from_bounded(other)
    }
}

impl<const N: usize> From<&str> for BoundedString<u8, N> {
    /// Copies the UTF-8 bytes of `s` under the truncation rule.
    ///
    /// Truncation counts bytes and may split a multi-byte character.
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}
