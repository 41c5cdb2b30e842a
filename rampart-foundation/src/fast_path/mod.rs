// Rampart - rampart-foundation
// Module: Fast path substitution
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Algorithm dispatch between checked and raw traversal.
//!
//! Every algorithm in [`algorithms`] receives a pair of positions that
//! implement [`Traversal`] and asks them for an element iterator over
//! `[first, last)`. The choice of iterator is made by the impl, so it is
//! fixed at monomorphization time:
//!
//! - [`BoundsCheckedIterator`](crate::BoundsCheckedIterator) hands out
//!   [`CheckedElements`], which looks every element up through
//!   [`RandomAccess::get`] and records a fault if a step fails.
//! - [`StrongContiguousIterator`](crate::StrongContiguousIterator) validates
//!   both bounds once and hands out a plain `slice::Iter`. That single
//!   validation is the only place the range proof is cashed in.

pub mod algorithms;

pub use algorithms::*;

use core::iter::FusedIterator;

use rampart_error::{Error, Result};

use crate::capability::{
    check_range, ContiguousAccess, RandomAccess, StaticStructure,
};
use crate::handle::{ItemOf, SequenceHandle, StrongHandle, TargetId};

/// Target container of traversal `I`.
pub type TraversalTarget<I> = <<I as Traversal>::Handle as SequenceHandle>::Target;

/// Element type of traversal `I`.
pub type TraversalItem<I> = ItemOf<<I as Traversal>::Handle>;

mod sealed {
    use crate::capability::{ContiguousAccess, RandomAccess, StaticStructure};
    use crate::handle::StrongHandle;

    pub trait Proof {}

    impl<H> Proof for H
    where
        H: StrongHandle,
        H::Target: ContiguousAccess + RandomAccess<Structure = StaticStructure>,
    {
    }
}

/// Proof that a handle is strong and its target is static and contiguous.
///
/// Implemented automatically for exactly those handles and cannot be
/// implemented by hand. Holding `H: FastPathEligible` is what lets
/// [`StrongContiguousIterator`](crate::StrongContiguousIterator) reduce to a
/// slice.
pub trait FastPathEligible: StrongHandle + sealed::Proof {
    /// The elements of `target` as one slice.
    fn contiguous_of(target: &Self::Target) -> &[ItemOf<Self>];

    /// The elements of this handle's target as one slice.
    #[inline]
    fn contiguous(&self) -> &[ItemOf<Self>] {
        Self::contiguous_of(self.target())
    }
}

impl<H> FastPathEligible for H
where
    H: StrongHandle,
    H::Target: ContiguousAccess + RandomAccess<Structure = StaticStructure>,
{
    #[inline]
    fn contiguous_of(target: &H::Target) -> &[ItemOf<H>] {
        target.as_slice()
    }
}

/// A position type algorithms can traverse between.
pub trait Traversal: Clone {
    /// Handle to the traversed container
    type Handle: SequenceHandle;

    /// Iterator over `[first, last)` handed out by [`Traversal::elements`].
    type Elements<'g>: DoubleEndedIterator<Item = &'g TraversalItem<Self>>
        + ExactSizeIterator
        + Clone
    where
        Self: 'g;

    /// The handle this position refers through.
    fn handle(&self) -> &Self::Handle;

    /// Index of this position.
    fn position(&self) -> usize;

    /// A position at `index` of `handle`'s target.
    fn starting_at(handle: Self::Handle, index: usize) -> Result<Self>;

    /// A position at `index` of the same target.
    fn repositioned(&self, index: usize) -> Result<Self>;

    /// The elements of `[first, last)` of `target`.
    ///
    /// Fails unless both positions refer to `target` and
    /// `first <= last <= target.len()`.
    fn elements<'g>(
        target: &'g TraversalTarget<Self>,
        first: &Self,
        last: &Self,
    ) -> Result<Self::Elements<'g>>
    where
        Self: 'g;

    /// Reports a fault recorded while `elements` was consumed.
    fn settle<'g>(_elements: &Self::Elements<'g>) -> Result<()>
    where
        Self: 'g,
    {
        Ok(())
    }
}

/// Validates a `[first, last)` pair against the resolved `target`.
pub(crate) fn check_bounds<I: Traversal>(
    target: &TraversalTarget<I>,
    first: &I,
    last: &I,
) -> Result<()> {
    let id = TargetId::of(target);
    if first.handle().target_id() != id || last.handle().target_id() != id {
        return Err(Error::target_mismatch("Traversal bounds belong to another target"));
    }
    check_range(first.position(), last.position(), target.len())
}

/// Element iterator that bounds-checks every step.
pub struct CheckedElements<'g, C: ?Sized> {
    target: &'g C,
    front: usize,
    back: usize,
    faulted: bool,
}

impl<'g, C: RandomAccess + ?Sized> CheckedElements<'g, C> {
    /// Elements `[front, back)` of `target`, clamped to its length.
    #[must_use]
    pub fn new(target: &'g C, front: usize, back: usize) -> Self {
        let back = back.min(target.len());
        Self { target, front: front.min(back), back, faulted: false }
    }

    /// Whether a lookup inside the range has failed.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// `Err` if a lookup inside the range has failed.
    pub fn check(&self) -> Result<()> {
        if self.faulted {
            Err(Error::element_unavailable("Checked traversal step failed"))
        } else {
            Ok(())
        }
    }

    fn step(&mut self, index: usize) -> Option<&'g C::Item> {
        let item = self.target.get(index);
        if item.is_none() {
            self.faulted = true;
            self.front = self.back;
        }
        item
    }
}

impl<C: ?Sized> Clone for CheckedElements<'_, C> {
    fn clone(&self) -> Self {
        Self { target: self.target, front: self.front, back: self.back, faulted: self.faulted }
    }
}

impl<C: ?Sized> core::fmt::Debug for CheckedElements<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CheckedElements")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("faulted", &self.faulted)
            .finish()
    }
}

impl<'g, C: RandomAccess + ?Sized> Iterator for CheckedElements<'g, C> {
    type Item = &'g C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        self.step(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl<C: RandomAccess + ?Sized> DoubleEndedIterator for CheckedElements<'_, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.step(self.back)
    }
}

impl<C: RandomAccess + ?Sized> ExactSizeIterator for CheckedElements<'_, C> {}

impl<C: RandomAccess + ?Sized> FusedIterator for CheckedElements<'_, C> {}
