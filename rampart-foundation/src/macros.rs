// Rampart - rampart-foundation
// Module: Logging macros
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate-internal logging macros.
//!
//! Each macro forwards to the matching `tracing` macro when the `tracing`
//! feature is enabled and expands to nothing otherwise, so call sites never
//! need their own `#[cfg]`.

#[cfg(feature = "tracing")]
macro_rules! log_trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! log_warn {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! log_error {
    ($($arg:tt)*) => { ::tracing::error!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

/// Enters a span from [`crate::tracing`] for the rest of the enclosing block.
#[cfg(feature = "tracing")]
macro_rules! enter_span {
    ($span:expr) => {
        let _entered = $span.entered();
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! enter_span {
    ($span:expr) => {};
}
