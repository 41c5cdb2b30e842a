// Rampart - rampart-error
// Module: Rampart Error Handling
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Rampart error handling library
//!
//! Every fallible operation in the Rampart crates reports a single, `Copy`
//! [`Error`] value made of a category, a numeric code and a static message.
//! Nothing here allocates, so the same type is used in `no_std` builds.
//!
//! # Error Categories
//!
//! ## Range Errors (1000-1999)
//! - Index or position outside the valid range
//! - Invalid subsection bounds
//! - Iterators over different targets used together
//! - Reseating a non-reseatable handle
//!
//! ## Dereference Errors (2000-2999)
//! - Dereferencing an end marker
//! - Resolving a weak handle whose target is gone
//!
//! ## Structure Errors (3000-3999)
//! - Structural operation while the structure lock is held
//! - Destruction with an outstanding lock holder
//!
//! ## Concurrency Errors (5000-5999)
//! - Failures reported by an external lock collaborator
//!
//! # Usage
//!
//! ```
//! use rampart_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = Error::new(ErrorCategory::Range, codes::INDEX_OUT_OF_RANGE, "index 7 >= 3");
//! assert!(error.is_range_error());
//!
//! let deref: Error = kinds::InvalidDereferenceError.into();
//! assert_eq!(deref.code, codes::END_MARKER_DEREFERENCE);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(any(feature = "std", test))]
extern crate std;

/// Error codes for rampart
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Typed error kinds that convert into [`Error`]
pub mod kinds;

pub mod helpers;
pub mod prelude;

#[macro_use]
pub mod macros;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for Rampart operations.
pub type Result<T> = core::result::Result<T, Error>;

pub use helpers::*;
pub use kinds::{
    InvalidDereferenceError, OutOfRangeError, StructureLockedError, TargetMismatchError,
};
