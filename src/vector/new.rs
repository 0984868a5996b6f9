// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{strategy::copy_elements, vector::BoundedVector};

impl<T: Copy + Default, const N: usize> BoundedVector<T, N> {
    /// Constructs a vector with every slot set to `T::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs from an array of any size, copying `min(N, M)` elements.
    ///
    /// Slots past the copied prefix keep `T::default()`.
    #[inline]
    pub fn from_array<const M: usize>(src: &[T; M]) -> Self {
        Self::from_slice(src)
    }

    /// Constructs from a slice, copying `min(N, src.len())` elements.
    ///
    /// Slots past the copied prefix keep `T::default()`.
    #[inline]
    pub fn from_slice(src: &[T]) -> Self {
        let mut v = Self::new();
        v.copy_from(src);
        v
    }
}

impl<T: Copy, const N: usize> BoundedVector<T, N> {
    /// Constructs a vector with every slot set to `value`.
    #[inline]
    pub const fn filled(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Wraps an array of exactly `N` elements.
    #[inline]
    pub const fn from_exact(data: [T; N]) -> Self {
        Self { data }
    }

    /// Constructs from an array of any size, copying `min(N, M)` elements and
    /// setting the remaining slots to `pad`.
    ///
    /// Runs element-wise, so it is usable in `const` items and does not need
    /// `T: Default`.
    #[inline]
    pub const fn from_array_padded<const M: usize>(src: &[T; M], pad: T) -> Self {
        let mut v = Self::filled(pad);
        let n = if M < N { M } else { N };
        copy_elements(&mut v.data, src, n);
        v
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedVector<T, N> {
    fn default() -> Self {
        Self {
            data: [T::default(); N],
        }
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for BoundedVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_exact(data)
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for BoundedVector<T, N> {
    fn from(src: &[T; N]) -> Self {
        (*src).into()
    }
}

impl<T: Copy + Default, const N: usize> FromIterator<T> for BoundedVector<T, N> {
    /// Builds a vector from an explicit element list.
    ///
    /// Takes at most the first `N` items and does not consume any further
    /// ones; missing items leave `T::default()` in their slots.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        for (slot, item) in v.data.iter_mut().zip(iter) {
            *slot = item;
        }
        v
    }
}
