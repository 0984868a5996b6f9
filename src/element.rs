// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element types usable in a [`BoundedString`](crate::BoundedString).

/// A character-like element with a distinguished terminator value.
///
/// The terminator is the zero element of the type. Implemented for the
/// primitive code-unit types and `char`.
pub trait Element: Copy + Eq {
    /// The zero element used as terminator.
    const NUL: Self;

    /// Returns `true` if `self` is the terminator.
    #[inline]
    fn is_nul(&self) -> bool {
        *self == Self::NUL
    }
}

macro_rules! impl_element {
    ($($t:ty => $nul:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const NUL: Self = $nul;
            }
        )*
    };
}

impl_element! {
    u8 => 0,
    i8 => 0,
    u16 => 0,
    i16 => 0,
    u32 => 0,
    i32 => 0,
    char => '\0',
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Element;

    #[test]
    fn test_nul_is_zero() {
        assert!(0u8.is_nul());
        assert!(0u16.is_nul());
        assert!('\0'.is_nul());
        assert!(!b'a'.is_nul());
        assert!(!'a'.is_nul());
        assert_eq!(<i32 as Element>::NUL, 0);
    }
}
