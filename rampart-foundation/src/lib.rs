// Rampart - rampart-foundation
// Module: Rampart Foundation
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Capability-classified, bounds-checked sequences for the Rampart project.
//!
//! This crate replaces raw fixed-size arrays, indices and iterators with
//! bounds-checked equivalents, and skips the per-step checks statically
//! wherever the type of a handle proves they are unnecessary:
//!
//! - [`FixedArray`] is a fixed-capacity container whose structural
//!   operations run under a [`StructureLock`](rampart_sync::StructureLock).
//! - [`capability`] classifies containers and handles along four axes
//!   (ownership, structure, sequence, residency).
//! - [`iter`] holds the checked iterator, the augmented cursor and the
//!   strong contiguous iterator.
//! - [`fast_path`] runs generic algorithms over either a checked traversal
//!   or a raw slice, picked by trait impl.
//! - [`section`] provides non-owning views, including the caged section over
//!   temporaries.
//!
//! # Feature Flags
//!
//! - `std`: standard library support (implies `alloc`)
//! - `alloc`: `Rc`/`Arc`/`Weak` handles and `Vec`/`VecDeque` classification
//! - `tracing`: structured logging
//! - `fast-path`: raw slice traversal for proven iterators
//!
//! # Example
//!
//! ```
//! use rampart_foundation::prelude::*;
//!
//! let a = FixedArray::new([10, 20, 30, 40, 50]);
//! let s = a.section();
//! assert_eq!(s.subsection(1, 2)?.to_vec()?, vec![20, 30]);
//! assert_eq!(s.find(&30)?, Some(2));
//! assert!(s.starts_with(&10)?);
//! assert!(a.at(5).is_err());
//! # Ok::<(), rampart_foundation::Error>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::missing_panics_doc)]

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

// Logging macros must be declared before the modules that use them.
#[macro_use]
mod macros;

pub mod capability;
pub mod fast_path;
pub mod fixed_array;
pub mod handle;
pub mod iter;
pub mod prelude;
pub mod section;

/// Structured logging re-exports and span helpers
#[cfg(feature = "tracing")]
pub mod tracing;

#[cfg(kani)]
mod verify;

pub use capability::{
    is_contiguous_sequence, is_fast_path_eligible, is_scope_bound, is_static_structure, is_strong,
    Capabilities, ContiguousAccess, RandomAccess, RandomAccessMut,
};
pub use fast_path::{FastPathEligible, Traversal};
pub use fixed_array::FixedArray;
pub use handle::{ItemOf, SequenceHandle, StrongHandle, TargetId};
pub use iter::{AugmentedCursorIterator, BoundsCheckedIterator, StrongContiguousIterator};
pub use rampart_error::{codes, Error, ErrorCategory, Result};
pub use section::{
    caged_section, unwrap_caged, CagedHandle, CagedSection, RandomAccessSection,
    RandomAccessSectionMut, Section, StrongSection,
};
