// Rampart - rampart-foundation
// Module: Augmented cursor iterator
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Cursor with next/previous semantics over a [`BoundsCheckedIterator`].
//!
//! The cursor is either at an item (`index < size`) or at the end marker
//! (`index == size`). The only transitions are single steps, and a step
//! whose precondition is false is an error rather than a clamp.

use core::fmt;

use rampart_error::{ensure, Error, Result};

use crate::handle::{ItemOf, SequenceHandle, StrongHandle};
use crate::iter::BoundsCheckedIterator;

/// Cursor over a bounds-checked iterator.
///
/// # Examples
///
/// ```
/// use rampart_foundation::AugmentedCursorIterator;
///
/// let data = [1, 2];
/// let mut cursor = AugmentedCursorIterator::begin(&data)?;
/// assert!(!cursor.has_previous());
/// cursor.set_to_next()?;
/// assert_eq!(cursor.previous_item()?, &1);
/// cursor.set_to_next()?;
/// assert!(cursor.points_to_end_marker());
/// assert!(cursor.set_to_next().is_err());
/// # Ok::<(), rampart_foundation::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct AugmentedCursorIterator<H: SequenceHandle> {
    inner: BoundsCheckedIterator<H>,
}

impl<H: SequenceHandle> AugmentedCursorIterator<H> {
    /// Cursor at the first element.
    pub fn begin(handle: H) -> Result<Self> {
        BoundsCheckedIterator::begin(handle).map(Self::from)
    }

    /// Cursor at the end marker.
    pub fn end(handle: H) -> Result<Self> {
        BoundsCheckedIterator::end(handle).map(Self::from)
    }

    /// Current index.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// Whether an element sits at the cursor.
    ///
    /// `false` when the target is gone.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.inner.size().is_ok_and(|size| self.position() < size)
    }

    /// Whether an element sits just before the cursor.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.inner.size().is_ok_and(|size| size >= 1 && self.position() > 0)
    }

    /// Same as [`has_next`](Self::has_next).
    #[inline]
    #[must_use]
    pub fn points_to_item(&self) -> bool {
        self.has_next()
    }

    /// Whether the cursor sits at the end marker.
    #[must_use]
    pub fn points_to_end_marker(&self) -> bool {
        self.inner.size().is_ok_and(|size| self.position() == size)
    }

    /// Steps past the current element.
    pub fn set_to_next(&mut self) -> Result<()> {
        ensure!(self.has_next(), Error::position_out_of_range("No next element"));
        self.inner.advance(1)
    }

    /// Steps back onto the previous element.
    pub fn set_to_previous(&mut self) -> Result<()> {
        ensure!(self.has_previous(), Error::position_out_of_range("No previous element"));
        self.inner.regress(1)
    }

    /// Runs `f` on the element at the cursor.
    pub fn with_item<R>(&self, f: impl FnOnce(&ItemOf<H>) -> R) -> Result<R> {
        self.inner.with_item(f)
    }

    /// Runs `f` on the element before the cursor.
    pub fn with_previous_item<R>(&self, f: impl FnOnce(&ItemOf<H>) -> R) -> Result<R> {
        ensure!(self.has_previous(), Error::position_out_of_range("No previous element"));
        self.inner.with_item_at_offset(-1, f)
    }

    /// Clone of the element at the cursor.
    pub fn get(&self) -> Result<ItemOf<H>>
    where
        ItemOf<H>: Clone,
    {
        self.inner.get()
    }

    /// Clone of the element before the cursor.
    pub fn get_previous(&self) -> Result<ItemOf<H>>
    where
        ItemOf<H>: Clone,
    {
        self.with_previous_item(<ItemOf<H> as Clone>::clone)
    }

    /// The underlying checked iterator.
    #[inline]
    #[must_use]
    pub fn as_checked(&self) -> &BoundsCheckedIterator<H> {
        &self.inner
    }

    /// Unwraps the underlying checked iterator.
    #[inline]
    #[must_use]
    pub fn into_checked(self) -> BoundsCheckedIterator<H> {
        self.inner
    }
}

impl<H: StrongHandle> AugmentedCursorIterator<H> {
    /// The element at the cursor.
    pub fn item(&self) -> Result<&ItemOf<H>> {
        self.inner.item()
    }

    /// The element before the cursor.
    pub fn previous_item(&self) -> Result<&ItemOf<H>> {
        ensure!(self.has_previous(), Error::position_out_of_range("No previous element"));
        self.inner.item_at_offset(-1)
    }
}

impl<H: SequenceHandle> fmt::Debug for AugmentedCursorIterator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AugmentedCursorIterator").field(&self.inner).finish()
    }
}

impl<H: SequenceHandle> PartialEq for AugmentedCursorIterator<H> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<H: SequenceHandle> Eq for AugmentedCursorIterator<H> {}

impl<H: SequenceHandle> From<BoundsCheckedIterator<H>> for AugmentedCursorIterator<H> {
    fn from(inner: BoundsCheckedIterator<H>) -> Self {
        Self { inner }
    }
}
