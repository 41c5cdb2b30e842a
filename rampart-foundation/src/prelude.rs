// Rampart - rampart-foundation
// Module: Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for rampart-foundation
//!
//! One import for the containers, iterators, sections and capability traits,
//! in both std and `no_std` builds.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use alloc::{vec, vec::Vec};
pub use core::cmp::Ordering;
#[cfg(feature = "std")]
pub use std::{vec, vec::Vec};

pub use rampart_error::{codes, ensure, Error, ErrorCategory, Result};
pub use rampart_sync::{StructureGuard, StructureLock};

pub use crate::capability::{
    Capabilities, Contiguous, ContiguousAccess, LockableStructure, NonContiguous, RandomAccess,
    RandomAccessMut, ScopeBound, StaticStructure, Strong, Unbound, UnclassifiedStructure, Weak,
};
pub use crate::fast_path::{self, FastPathEligible, Traversal};
pub use crate::fixed_array::FixedArray;
pub use crate::handle::{ItemOf, SequenceHandle, StrongHandle, TargetId};
pub use crate::iter::{AugmentedCursorIterator, BoundsCheckedIterator, StrongContiguousIterator};
pub use crate::section::{
    caged_section, unwrap_caged, CagedHandle, CagedSection, RandomAccessSection,
    RandomAccessSectionMut, Section, StrongSection,
};
