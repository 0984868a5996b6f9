// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The out-of-range diagnostic raised by checked element access.
//!
//! Truncating copies are not errors: they silently drop excess input. The only
//! failure this crate reports is an index at or beyond the fixed capacity `N`.
//! The diagnostic is meant to be displayed, not parsed.

// Crate imports
use crate::trace::trace_event;

// Core imports
use core::{error::Error as CoreError, fmt, panic::Location};

/// An index was not less than the fixed capacity of a container.
///
/// Carries the offending index, the capacity, the operation that rejected it
/// and the caller's source location (captured through `#[track_caller]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    index: usize,
    capacity: usize,
    operation: &'static str,
    location: &'static Location<'static>,
}

impl OutOfRange {
    /// Records a rejected `index` against `capacity` at the caller's location.
    #[inline]
    #[track_caller]
    pub fn new(index: usize, capacity: usize, operation: &'static str) -> Self {
        trace_event!(index, capacity, operation, "out-of-range access");
        Self {
            index,
            capacity,
            operation,
            location: Location::caller(),
        }
    }

    /// The rejected index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The capacity the index was checked against.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Name of the operation that performed the check (e.g. `"BoundedVector::at"`).
    #[inline]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Source location of the access.
    #[inline]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Panics with this diagnostic as the message.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "out of range: index {} is not less than capacity {} in `{}` at {}:{}:{}",
            self.index,
            self.capacity,
            self.operation,
            self.location.file(),
            self.location.line(),
            self.location.column()
        )
    }
}

impl CoreError for OutOfRange {}
