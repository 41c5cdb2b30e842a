// Rampart - rampart-foundation
// Module: Bounds-checked iterator
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The general bounds-checked random-access iterator.
//!
//! A [`BoundsCheckedIterator`] is a handle plus an index in `[0, len]`, where
//! `len` is the target's length at the time of each check. Every move and
//! every dereference re-resolves the handle and re-checks the index, so the
//! iterator stays safe with any handle type, weak ones included.

use core::cmp::Ordering;
use core::fmt;

use rampart_error::{check_position, ensure, offset_position, Error, Result};

use crate::capability::RandomAccess;
use crate::fast_path::{check_bounds, CheckedElements, FastPathEligible, Traversal};
use crate::handle::{ItemOf, SequenceHandle, StrongHandle};
use crate::iter::StrongContiguousIterator;

/// Looks up `index` of `target`, distinguishing the end marker from an
/// index that is out of range.
pub(crate) fn lookup<C: RandomAccess + ?Sized>(target: &C, index: usize) -> Result<&C::Item> {
    if let Some(item) = target.get(index) {
        return Ok(item);
    }
    let len = target.len();
    if index == len {
        Err(Error::END_MARKER)
    } else if index < len {
        Err(Error::element_unavailable("Container reported an element it could not produce"))
    } else {
        Err(Error::index_out_of_range("Iterator index past the end marker"))
    }
}

/// A random-access iterator that checks every move and dereference.
///
/// # Examples
///
/// ```
/// use rampart_foundation::BoundsCheckedIterator;
///
/// let data = [1, 2, 3];
/// let mut it = BoundsCheckedIterator::begin(&data)?;
/// it.advance(2)?;
/// assert_eq!(it.item()?, &3);
/// assert!(it.advance(2).is_err());
/// assert_eq!(it.position(), 2);
/// # Ok::<(), rampart_foundation::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct BoundsCheckedIterator<H> {
    handle: H,
    index: usize,
}

impl<H: SequenceHandle> BoundsCheckedIterator<H> {
    /// Iterator at the first element of `handle`'s target.
    ///
    /// Fails if a weak handle's target is gone.
    pub fn begin(handle: H) -> Result<Self> {
        Self::at(handle, 0)
    }

    /// Iterator at the end marker of `handle`'s target.
    pub fn end(handle: H) -> Result<Self> {
        let len = handle.resolve()?.len();
        Ok(Self { handle, index: len })
    }

    /// Iterator at `index`, which may be the end marker.
    pub fn at(handle: H, index: usize) -> Result<Self> {
        let len = handle.resolve()?.len();
        check_position(index, len, "Iterator position past the end marker")?;
        Ok(Self { handle, index })
    }

    /// Builds an iterator whose index the caller has already validated.
    pub(crate) fn from_parts(handle: H, index: usize) -> Self {
        Self { handle, index }
    }

    /// Current index.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Current length of the target.
    pub fn size(&self) -> Result<usize> {
        Ok(self.handle.resolve()?.len())
    }

    /// Number of elements between this position and the end marker.
    pub fn remaining(&self) -> Result<usize> {
        let len = self.size()?;
        check_position(self.index, len, "Iterator position past the end marker")?;
        Ok(len - self.index)
    }

    /// Whether this iterator sits at (or, after the target shrank, past) the
    /// end marker.
    pub fn is_end(&self) -> Result<bool> {
        Ok(self.index >= self.size()?)
    }

    /// Moves `n` elements forward.
    ///
    /// On error the iterator is left where it was.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        let target = self
            .index
            .checked_add(n)
            .ok_or(Error::position_overflow("Advancing overflows the position"))?;
        self.seek(target)
    }

    /// Moves `n` elements backward.
    ///
    /// On error the iterator is left where it was.
    pub fn regress(&mut self, n: usize) -> Result<()> {
        let target = self
            .index
            .checked_sub(n)
            .ok_or(Error::position_out_of_range("Regressing before the first element"))?;
        self.seek(target)
    }

    /// Moves by a signed offset.
    ///
    /// On error the iterator is left where it was.
    pub fn offset(&mut self, delta: isize) -> Result<()> {
        let target = offset_position(self.index, delta)?;
        self.seek(target)
    }

    fn seek(&mut self, target: usize) -> Result<()> {
        let len = self.size()?;
        check_position(target, len, "Iterator moved past the end marker")?;
        self.index = target;
        Ok(())
    }

    /// Runs `f` on the element at the current position.
    pub fn with_item<R>(&self, f: impl FnOnce(&ItemOf<H>) -> R) -> Result<R> {
        let guard = self.handle.resolve()?;
        lookup(&*guard, self.index).map(f)
    }

    /// Clone of the element at the current position.
    pub fn get(&self) -> Result<ItemOf<H>>
    where
        ItemOf<H>: Clone,
    {
        self.with_item(<ItemOf<H> as Clone>::clone)
    }

    /// Runs `f` on the element `delta` positions away, without moving.
    pub fn with_item_at_offset<R>(
        &self,
        delta: isize,
        f: impl FnOnce(&ItemOf<H>) -> R,
    ) -> Result<R> {
        let index = offset_position(self.index, delta)?;
        let guard = self.handle.resolve()?;
        lookup(&*guard, index).map(f)
    }

    /// Clone of the element `delta` positions away.
    pub fn get_at_offset(&self, delta: isize) -> Result<ItemOf<H>>
    where
        ItemOf<H>: Clone,
    {
        self.with_item_at_offset(delta, <ItemOf<H> as Clone>::clone)
    }

    /// Whether both iterators refer to the same target.
    #[inline]
    #[must_use]
    pub fn same_target(&self, other: &Self) -> bool {
        self.handle.target_id() == other.handle.target_id()
    }

    /// Signed number of steps from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> Result<isize> {
        ensure!(
            self.same_target(other),
            Error::target_mismatch("Distance between iterators of different targets")
        );
        let overflow = || Error::position_overflow("Iterator distance exceeds isize");
        if other.index >= self.index {
            isize::try_from(other.index - self.index).map_err(|_| overflow())
        } else {
            isize::try_from(self.index - other.index).map(|d| -d).map_err(|_| overflow())
        }
    }

    /// Orders two iterators of the same target.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        ensure!(
            self.same_target(other),
            Error::target_mismatch("Comparison of iterators of different targets")
        );
        Ok(self.index.cmp(&other.index))
    }

    /// Copies `other` into `self`.
    ///
    /// Handles that are not reseatable only accept an iterator of the same
    /// target.
    pub fn assign(&mut self, other: Self) -> Result<()> {
        ensure!(
            H::RESEATABLE || self.same_target(&other),
            Error::reseat_rejected("Handle cannot be reseated to another target")
        );
        *self = other;
        Ok(())
    }

    /// The handle this iterator refers through.
    #[inline]
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Consumes the iterator, returning its handle.
    #[inline]
    #[must_use]
    pub fn into_handle(self) -> H {
        self.handle
    }
}

impl<H: StrongHandle> BoundsCheckedIterator<H> {
    /// The element at the current position.
    #[inline]
    pub fn item(&self) -> Result<&ItemOf<H>> {
        lookup(self.handle.target(), self.index)
    }

    /// The element `delta` positions away.
    #[inline]
    pub fn item_at_offset(&self, delta: isize) -> Result<&ItemOf<H>> {
        lookup(self.handle.target(), offset_position(self.index, delta)?)
    }

    /// Length of the target; infallible for strong handles.
    #[inline]
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.handle.target().len()
    }
}

impl<H: FastPathEligible> BoundsCheckedIterator<H> {
    /// Converts into the unchecked-traversal iterator the handle type proves
    /// safe.
    #[must_use]
    pub fn into_strong(self) -> StrongContiguousIterator<H> {
        StrongContiguousIterator::from_checked(self)
    }
}

impl<H: SequenceHandle> fmt::Debug for BoundsCheckedIterator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundsCheckedIterator")
            .field("target", &self.handle.target_id())
            .field("index", &self.index)
            .finish()
    }
}

impl<H: SequenceHandle> PartialEq for BoundsCheckedIterator<H> {
    fn eq(&self, other: &Self) -> bool {
        self.same_target(other) && self.index == other.index
    }
}

impl<H: SequenceHandle> Eq for BoundsCheckedIterator<H> {}

impl<H: SequenceHandle> PartialOrd for BoundsCheckedIterator<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl<H: SequenceHandle + Clone> Traversal for BoundsCheckedIterator<H> {
    type Handle = H;
    type Elements<'g>
        = CheckedElements<'g, H::Target>
    where
        Self: 'g;

    #[inline]
    fn handle(&self) -> &H {
        &self.handle
    }

    #[inline]
    fn position(&self) -> usize {
        self.index
    }

    fn starting_at(handle: H, index: usize) -> Result<Self> {
        Self::at(handle, index)
    }

    fn repositioned(&self, index: usize) -> Result<Self> {
        Self::at(self.handle.clone(), index)
    }

    fn elements<'g>(
        target: &'g H::Target,
        first: &Self,
        last: &Self,
    ) -> Result<CheckedElements<'g, H::Target>>
    where
        Self: 'g,
    {
        check_bounds(target, first, last)?;
        Ok(CheckedElements::new(target, first.index, last.index))
    }

    fn settle<'g>(elements: &CheckedElements<'g, H::Target>) -> Result<()>
    where
        Self: 'g,
    {
        elements.check()
    }
}

impl<'a, C: RandomAccess + ?Sized> IntoIterator for BoundsCheckedIterator<&'a C> {
    type Item = &'a C::Item;
    type IntoIter = CheckedElements<'a, C>;

    /// Checked iteration from the current position to the end marker.
    fn into_iter(self) -> CheckedElements<'a, C> {
        CheckedElements::new(self.handle, self.index, self.handle.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_error::codes;

    #[test]
    fn test_begin_end_and_at() {
        let data = [1, 2, 3];
        let begin = BoundsCheckedIterator::begin(&data).unwrap();
        let end = BoundsCheckedIterator::end(&data).unwrap();
        assert_eq!(begin.position(), 0);
        assert_eq!(end.position(), 3);
        assert!(end.is_end().unwrap());
        assert!(BoundsCheckedIterator::at(&data, 3).is_ok());
        assert_eq!(
            BoundsCheckedIterator::at(&data, 4).unwrap_err().code,
            codes::POSITION_OUT_OF_RANGE
        );
    }

    #[test]
    fn test_failed_move_keeps_position() {
        let data = [1, 2, 3];
        let mut it = BoundsCheckedIterator::at(&data, 1).unwrap();
        assert!(it.advance(3).is_err());
        assert_eq!(it.position(), 1);
        assert!(it.regress(2).is_err());
        assert_eq!(it.position(), 1);
        assert_eq!(it.offset(isize::MIN).unwrap_err().code, codes::POSITION_OVERFLOW);
        assert_eq!(it.position(), 1);
        it.offset(-1).unwrap();
        assert_eq!(it.position(), 0);
    }

    #[test]
    fn test_end_marker_dereference() {
        let data = [7];
        let end = BoundsCheckedIterator::end(&data).unwrap();
        assert_eq!(end.item().unwrap_err(), Error::END_MARKER);
        assert_eq!(end.get().unwrap_err(), Error::END_MARKER);
        assert_eq!(end.item_at_offset(-1).unwrap(), &7);
        assert_eq!(end.get_at_offset(1).unwrap_err().code, codes::INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn test_cross_target_comparison() {
        let a = [1, 2];
        let b = [1, 2];
        let ia = BoundsCheckedIterator::begin(&a).unwrap();
        let ib = BoundsCheckedIterator::begin(&b).unwrap();
        assert_ne!(ia, ib);
        assert_eq!(ia.partial_cmp(&ib), None);
        assert_eq!(ia.distance_to(&ib).unwrap_err().code, codes::TARGET_MISMATCH);

        let ja = BoundsCheckedIterator::end(&a).unwrap();
        assert_eq!(ia.distance_to(&ja).unwrap(), 2);
        assert_eq!(ja.distance_to(&ia).unwrap(), -2);
        assert!(ia < ja);
    }

    #[test]
    fn test_into_iter_is_double_ended() {
        let data = [1, 2, 3, 4];
        let it = BoundsCheckedIterator::at(&data, 1).unwrap();
        let collected: std::vec::Vec<_> = it.into_iter().rev().copied().collect();
        assert_eq!(collected, [4, 3, 2]);
    }
}
