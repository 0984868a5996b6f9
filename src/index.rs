// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element access for [`BoundedString`] and [`BoundedVector`].
//!
//! Both containers expose the whole `[T; N]` buffer through indexing:
//!
//! - `at` / `at_mut` return `Err(OutOfRange)` for `i >= N` and never panic;
//! - `Index<usize>` / `IndexMut<usize>` raise the same [`OutOfRange`]
//!   diagnostic as a panic;
//! - range indexing follows slice semantics over all `N` slots;
//! - with the `unchecked` feature, `get_unchecked` skips the check in release
//!   builds and raises in debug builds. A zero-capacity container raises on
//!   every access in every build.

// Crate imports
use crate::{element::Element, error::OutOfRange, string::BoundedString, vector::BoundedVector};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

/// Checked shared access.
#[inline]
#[track_caller]
pub(crate) fn at<'a, T>(buf: &'a [T], i: usize, op: &'static str) -> Result<&'a T, OutOfRange> {
    match buf.get(i) {
        Some(e) => Ok(e),
        None => Err(OutOfRange::new(i, buf.len(), op)),
    }
}

/// Checked mutable access.
#[inline]
#[track_caller]
pub(crate) fn at_mut<'a, T>(
    buf: &'a mut [T],
    i: usize,
    op: &'static str,
) -> Result<&'a mut T, OutOfRange> {
    let len = buf.len();
    match buf.get_mut(i) {
        Some(e) => Ok(e),
        None => Err(OutOfRange::new(i, len, op)),
    }
}

/// Shared access that raises [`OutOfRange`] on a bad index.
#[inline]
#[track_caller]
pub(crate) fn element<'a, T>(buf: &'a [T], i: usize, op: &'static str) -> &'a T {
    match at(buf, i, op) {
        Ok(e) => e,
        Err(e) => e.raise(),
    }
}

/// Mutable access that raises [`OutOfRange`] on a bad index.
#[inline]
#[track_caller]
pub(crate) fn element_mut<'a, T>(buf: &'a mut [T], i: usize, op: &'static str) -> &'a mut T {
    match at_mut(buf, i, op) {
        Ok(e) => e,
        Err(e) => e.raise(),
    }
}

/// Raises [`OutOfRange`] when the unchecked path must not proceed: always for
/// an empty buffer, and for `i >= len` in debug builds.
#[cfg(feature = "unchecked")]
#[inline]
#[track_caller]
pub(crate) fn guard_unchecked(len: usize, i: usize, op: &'static str) {
    if len == 0 || (cfg!(debug_assertions) && i >= len) {
        OutOfRange::new(i, len, op).raise();
    }
}

macro_rules! impl_index {
    ([$($gen:tt)*] $ty:ty, $field:ident, $elem:ty, $name:literal) => {
        impl<$($gen)*> Index<usize> for $ty {
            type Output = $elem;
            #[track_caller]
            fn index(&self, i: usize) -> &Self::Output {
                element(&self.$field, i, concat!($name, "::index"))
            }
        }
        impl<$($gen)*> IndexMut<usize> for $ty {
            #[track_caller]
            fn index_mut(&mut self, i: usize) -> &mut Self::Output {
                element_mut(&mut self.$field, i, concat!($name, "::index_mut"))
            }
        }
        impl_index!(@ranges [$($gen)*] $ty, $field, $elem;
            Range<usize>, RangeFrom<usize>, RangeTo<usize>, RangeToInclusive<usize>,
            RangeInclusive<usize>, RangeFull);
    };
    (@ranges $gens:tt $ty:ty, $field:ident, $elem:ty; $($r:ty),*) => {
        $( impl_index!(@range $gens $ty, $field, $elem, $r); )*
    };
    (@range [$($gen:tt)*] $ty:ty, $field:ident, $elem:ty, $r:ty) => {
        impl<$($gen)*> Index<$r> for $ty {
            type Output = [$elem];
            fn index(&self, r: $r) -> &Self::Output {
                &self.$field[r]
            }
        }
        impl<$($gen)*> IndexMut<$r> for $ty {
            fn index_mut(&mut self, r: $r) -> &mut Self::Output {
                &mut self.$field[r]
            }
        }
    };
}

impl_index!([E: Element, const N: usize] BoundedString<E, N>, buf, E, "BoundedString");
impl_index!([T: Copy, const N: usize] BoundedVector<T, N>, data, T, "BoundedVector");

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedString, BoundedVector};

    #[test]
    fn test_index_whole_buffer() {
        let mut s: BoundedString<u8, 6> = BoundedString::from_array(b"abc");
        assert_eq!(s[0], b'a');
        // the terminator and tail are addressable
        assert_eq!(s[3], 0);
        assert_eq!(s[5], 0);
        s[3] = b'd';
        assert_eq!(s.as_slice(), b"abcd");
    }

    #[test]
    fn test_string_ranges() {
        let mut s: BoundedString<u8, 6> = BoundedString::from_array(b"abcde");
        assert_eq!(&s[1..3], b"bc");
        assert_eq!(&s[..=1], b"ab");
        assert_eq!(&s[4..], b"e\0");
        assert_eq!(s[..].len(), 6);
        s[0..2].copy_from_slice(b"xy");
        assert_eq!(s.as_slice(), b"xycde");
    }

    #[test]
    fn test_every_range_kind_on_both_containers() {
        let mut s: BoundedString<u8, 4> = BoundedString::from_array(b"abc");
        let mut v: BoundedVector<u8, 4> = BoundedVector::from_array(b"abc");
        assert_eq!(&s[1..3], &v[1..3]);
        assert_eq!(&s[1..], &v[1..]);
        assert_eq!(&s[..2], &v[..2]);
        assert_eq!(&s[..=2], &v[..=2]);
        assert_eq!(&s[0..=3], &v[0..=3]);
        assert_eq!(&s[..], &v[..]);

        s[1..].fill(b'-');
        s[..1].fill(b'+');
        s[..=0][0] = b'>';
        s[2..=2][0] = b'!';
        s[1..2].fill(b'=');
        s[..][3] = 0;
        assert_eq!(s.as_slice(), b">=!");

        v[..].fill(7);
        v[2..].fill(8);
        assert_eq!(v.data(), &[7, 7, 8, 8]);
    }

    #[test]
    fn test_vector_ranges() {
        let mut v: BoundedVector<i32, 5> = BoundedVector::from([0, 1, 2, 3, 4]);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);
        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    #[should_panic(expected = "index 6 is not less than capacity 6 in `BoundedString::index`")]
    fn test_string_oob_panics_with_out_of_range() {
        let s: BoundedString<u8, 6> = BoundedString::new();
        let _ = s[6];
    }

    #[test]
    #[should_panic(expected = "in `BoundedVector::index_mut`")]
    fn test_vector_oob_mut_panics_with_out_of_range() {
        let mut v: BoundedVector<u8, 2> = BoundedVector::new();
        v[2] = 1;
    }

    #[test]
    #[should_panic(expected = "index 0 is not less than capacity 0")]
    fn test_zero_capacity_vector_index_always_raises() {
        let v: BoundedVector<i32, 0> = BoundedVector::new();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v: BoundedVector<i32, 3> = BoundedVector::from([1, 2, 3]);
        let _ = &v[2..1];
    }

    #[test]
    #[should_panic]
    fn test_inclusive_upper_oob_panics() {
        let v: BoundedVector<i32, 3> = BoundedVector::from([1, 2, 3]);
        let _ = &v[..=3];
    }

    #[test]
    fn test_at_reports_without_panicking() {
        let v: BoundedVector<i32, 0> = BoundedVector::new();
        for i in [0, 1, usize::MAX] {
            let e = v.at(i).unwrap_err();
            assert_eq!(e.index(), i);
            assert_eq!(e.capacity(), 0);
            assert_eq!(e.operation(), "BoundedVector::at");
        }
    }
}
