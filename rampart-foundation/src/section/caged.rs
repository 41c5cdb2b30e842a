// Rampart - rampart-foundation
// Module: Caged sections
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sections over temporaries.
//!
//! A [`CagedSection`] may borrow a value that only lives until the end of
//! the enclosing statement. It has no way to read elements; the only way in
//! is [`unwrap_caged`], whose closure is generic over the borrow lifetime so
//! neither the section nor anything borrowed from it can be returned.
//!
//! ```
//! use rampart_foundation::{caged_section, unwrap_caged, FixedArray};
//!
//! let total = unwrap_caged(caged_section(&FixedArray::new([1, 2, 3])), |s| {
//!     s.iter().sum::<i32>()
//! });
//! assert_eq!(total, 6);
//! ```
//!
//! Keeping the caged section past the temporary's statement is rejected:
//!
//! ```compile_fail,E0716
//! use rampart_foundation::{caged_section, unwrap_caged, FixedArray};
//!
//! let caged = caged_section(&FixedArray::<u32, 3>::from_fn(|i| i as u32));
//! let len = unwrap_caged(caged, |s| s.len());
//! ```
//!
//! So is smuggling the section out of the closure:
//!
//! ```compile_fail
//! use rampart_foundation::{caged_section, unwrap_caged, FixedArray};
//!
//! let a = FixedArray::new([1, 2, 3]);
//! let escaped = unwrap_caged(caged_section(&a), |s| s);
//! ```

use core::fmt;

use rampart_error::{ensure, Error, Result};

use crate::capability::{RandomAccess, ScopeBound, Strong};
use crate::handle::{SequenceHandle, StrongHandle, TargetId};
use crate::iter::BoundsCheckedIterator;
use crate::section::{RandomAccessSection, Section};

/// Handle handed to the [`unwrap_caged`] closure.
///
/// Strong and scope-bound, and never reseatable: an iterator holding one can
/// only be reassigned within the same target.
pub struct CagedHandle<'t, C: ?Sized> {
    target: &'t C,
}

impl<C: ?Sized> Clone for CagedHandle<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for CagedHandle<'_, C> {}

impl<C: ?Sized> fmt::Debug for CagedHandle<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CagedHandle").field("target", &TargetId::of(self.target)).finish()
    }
}

impl<C: RandomAccess + ?Sized> SequenceHandle for CagedHandle<'_, C> {
    type Target = C;
    type Ownership = Strong;
    type Residency = ScopeBound;
    type Guard<'a>
        = &'a C
    where
        Self: 'a;

    const RESEATABLE: bool = false;

    #[inline]
    fn resolve(&self) -> Result<&C> {
        Ok(self.target)
    }

    #[inline]
    fn target_id(&self) -> TargetId {
        TargetId::of(self.target)
    }
}

impl<C: RandomAccess + ?Sized> StrongHandle for CagedHandle<'_, C> {
    #[inline]
    fn target(&self) -> &C {
        self.target
    }
}

/// A section over a possibly temporary target, readable only through
/// [`unwrap_caged`].
#[must_use = "a caged section can only be read through `unwrap_caged`"]
pub struct CagedSection<'t, C: ?Sized> {
    target: &'t C,
    start: usize,
    count: usize,
}

impl<'t, C: RandomAccess + ?Sized> CagedSection<'t, C> {
    /// Cages every element of `target`.
    pub fn new(target: &'t C) -> Self {
        Self { target, start: 0, count: target.len() }
    }

    /// Narrows to `min(n, len - pos)` elements from `pos`.
    pub fn narrowed(self, pos: usize, n: usize) -> Result<Self> {
        ensure!(
            pos <= self.count,
            Error::invalid_subsection("Subsection starts past the section end")
        );
        Ok(Self { target: self.target, start: self.start + pos, count: n.min(self.count - pos) })
    }
}

impl<C: ?Sized> fmt::Debug for CagedSection<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CagedSection")
            .field("start", &self.start)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

/// Cages every element of `target`.
pub fn caged_section<C: RandomAccess + ?Sized>(target: &C) -> CagedSection<'_, C> {
    CagedSection::new(target)
}

/// Opens `caged` for the duration of `f`.
pub fn unwrap_caged<'t, C, R, F>(caged: CagedSection<'t, C>, f: F) -> R
where
    C: RandomAccess + ?Sized,
    F: for<'s> FnOnce(Section<CagedHandle<'s, C>>) -> R,
{
    let start = BoundsCheckedIterator::from_parts(CagedHandle { target: caged.target }, caged.start);
    f(RandomAccessSection::from_parts(start, caged.count))
}
