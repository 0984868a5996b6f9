// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundedString`](crate::BoundedString) and
//! [`BoundedVector`](crate::BoundedVector).
//!
//! - **`BoundedString<E, N>`** serializes its content (the elements before the
//!   terminator) as a sequence. Deserializing accepts at most `N` elements;
//!   exactly `N` yields a saturated string.
//! - **`BoundedVector<T, N>`** serializes all `N` slots. Deserializing accepts
//!   at most `N` elements; slots past the end of the input keep
//!   `T::default()`.
//!
//! Both reject longer input with a `too many elements (capacity N)` error
//! instead of truncating.

// Crate imports
use crate::{element::Element, string::BoundedString, vector::BoundedVector};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

fn serialize_slice<T: Serialize, S: Serializer>(sl: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(sl.len()))?;
    for item in sl {
        seq.serialize_element(item)?;
    }
    seq.end()
}

/// Reads at most `slots.len()` elements into `slots` and returns the count.
fn fill_from_seq<'de, T, A>(slots: &mut [T], mut a: A) -> Result<usize, A::Error>
where
    T: Deserialize<'de>,
    A: de::SeqAccess<'de>,
{
    let cap = slots.len();
    let mut n = 0;
    while let Some(elem) = a.next_element::<T>()? {
        let Some(slot) = slots.get_mut(n) else {
            return Err(de::Error::custom(format_args!("too many elements (capacity {cap})")));
        };
        *slot = elem;
        n += 1;
    }
    Ok(n)
}

impl<E: Element + Serialize, const N: usize> Serialize for BoundedString<E, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

impl<T: Copy + Serialize, const N: usize> Serialize for BoundedVector<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

struct StringVisitor<E, const N: usize>(PhantomData<E>);

impl<'de, E, const N: usize> de::Visitor<'de> for StringVisitor<E, N>
where
    E: Element + Deserialize<'de>,
{
    type Value = BoundedString<E, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sequence of at most {} string elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, a: A) -> Result<Self::Value, A::Error> {
        let mut out = BoundedString::<E, N>::new();
        let n = fill_from_seq(&mut out.buf, a)?;
        out.terminate(n);
        Ok(out)
    }
}

impl<'de, E, const N: usize> Deserialize<'de> for BoundedString<E, N>
where
    E: Element + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StringVisitor::<E, N>(PhantomData))
    }
}

struct VectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VectorVisitor<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    type Value = BoundedVector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, a: A) -> Result<Self::Value, A::Error> {
        let mut out = BoundedVector::<T, N>::default();
        fill_from_seq(&mut out.data, a)?;
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for BoundedVector<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VectorVisitor::<T, N>(PhantomData))
    }
}
