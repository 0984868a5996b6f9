// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{element::Element, string::BoundedString};

// Core imports
use core::{
    fmt::{self, Write},
    str::Utf8Error,
};

impl<E: Element + fmt::Debug, const N: usize> fmt::Debug for BoundedString<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedString")
            .field("capacity", &N)
            .field("content", &self.as_slice())
            .finish()
    }
}

impl<const N: usize> BoundedString<u8, N> {
    /// Returns the content as `&str` if it is valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_slice())
    }
}

impl<const N: usize> PartialEq<str> for BoundedString<u8, N> {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}
impl<const N: usize> PartialEq<&str> for BoundedString<u8, N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<const N: usize> fmt::Display for BoundedString<u8, N> {
    /// Writes the content as UTF-8, replacing invalid sequences with `U+FFFD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_slice().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for BoundedString<char, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| f.write_char(*c))
    }
}
