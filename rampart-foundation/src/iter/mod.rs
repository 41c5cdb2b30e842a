// Rampart - rampart-foundation
// Module: Iterators
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounds-checked random-access iterators.
//!
//! - [`BoundsCheckedIterator`] works with any [`SequenceHandle`](crate::SequenceHandle)
//!   and checks every access.
//! - [`AugmentedCursorIterator`] adds next/previous/end-marker predicates on
//!   top of it.
//! - [`StrongContiguousIterator`] is only nameable for handles that prove
//!   strong, static and contiguous, and traverses as a raw slice.

pub mod checked;
pub mod cursor;
pub mod strong;

pub use checked::BoundsCheckedIterator;
pub(crate) use checked::lookup;
pub use cursor::AugmentedCursorIterator;
pub use strong::StrongContiguousIterator;
