// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-inline`
//!
//! A `no_std`, allocation-free pair of fixed-capacity containers stored
//! inline, **with no `unsafe` by default**:
//!
//! - [`BoundedString<E, N>`]: a null-terminated string of up to `N`
//!   [`Element`]s (bytes, wide code units or `char`s).
//! - [`BoundedVector<T, N>`]: a plain array of exactly `N` `Copy` values.
//!
//! Both are `Copy` values. Moving one duplicates the whole `[_; N]` buffer,
//! so they suit small capacities known at compile time.
//!
//! ## Copy and fill strategies
//!
//! Every copy and fill exists in two interchangeable [`Strategy`] variants:
//!
//! - [`Strategy::ElementWise`] assigns one element at a time. It is the only
//!   path available in `const` evaluation, so the `const` constructors
//!   ([`BoundedString::from_array`], [`BoundedVector::from_array_padded`], ...)
//!   always use it.
//! - [`Strategy::Bulk`] uses slice copies and fills. It is the default for the
//!   runtime methods.
//!
//! Both strategies produce identical buffers and return values for every
//! input; the `*_with` methods let callers pick one explicitly.
//!
//! ## Truncation
//!
//! Copying `L` elements into a `BoundedString<E, N>` keeps `L` elements plus
//! a terminator when `L < N`, saturates (all `N` slots, no terminator) when
//! `L == N`, and keeps `N - 1` elements plus a terminator when `L > N`.
//! `BoundedVector` copies take `min(N, L)` elements and leave the other slots
//! untouched. Truncation is silent and never an error.
//!
//! ## Range and indexing behavior
//!
//! - `at` / `at_mut` return `Result<_, `[`OutOfRange`]`>` and never panic.
//! - `get` / `get_mut` return `Option`.
//! - `v[i]` panics with the [`OutOfRange`] message when `i >= N`.
//! - With the `unchecked` feature, `unsafe fn get_unchecked` skips the bounds
//!   check in release builds. Debug builds still check it, and the
//!   zero-capacity containers raise in every build.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for both containers.
//! - `tracing`: `trace`-level events (target `bounded_inline`) for truncating
//!   copies and rejected indices.
//! - `unchecked`: the `unsafe` unchecked accessors. Lifts
//!   `#![forbid(unsafe_code)]`.
//!
//! ## Example
//!
//! ```rust
//! use bounded_inline::{BoundedString, BoundedVector, Strategy};
//!
//! const GREETING: BoundedString<u8, 16> = BoundedString::from_array(b"Hello, World!");
//! assert_eq!(GREETING.length(), 13);
//!
//! let mut s: BoundedString<u8, 16> = BoundedString::new();
//! s.copy_with(Strategy::ElementWise, b"Hello, World!");
//! assert_eq!(s, GREETING);
//!
//! let mut v: BoundedVector<u16, 4> = BoundedVector::new();
//! assert_eq!(v.copy_from(&[1, 2, 3, 4, 5]), 4);
//! assert!(v.at(4).is_err());
//! ```

#![cfg_attr(not(feature = "unchecked"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod element;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod strategy;
mod string;
mod trace;
mod vector;

// Public exports (crate API surface)
pub use element::Element;
pub use error::OutOfRange;
pub use iter::IntoIter;
pub use strategy::{Strategy, copy_elements, fill_elements};
pub use string::BoundedString;
pub use vector::BoundedVector;
