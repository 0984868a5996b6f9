// This file is part of bounded-inline.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional `tracing` events.
//!
//! With the `tracing` feature the macro forwards to `tracing::trace!` under the
//! `bounded_inline` target; without it the macro expands to nothing, so call
//! sites cost nothing in builds that do not log.

/// Emits a `trace`-level event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "bounded_inline", $($arg)*);
        }
    };
}

pub(crate) use trace_event;
