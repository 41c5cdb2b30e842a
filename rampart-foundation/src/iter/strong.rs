// Rampart - rampart-foundation
// Module: Strong contiguous iterator
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Iterator over a target that is proven strong, static and contiguous.
//!
//! The handle type must implement [`FastPathEligible`], so the iterator
//! cannot even be named for a `Vec`, a `VecDeque` or a weak pointer:
//!
//! ```compile_fail
//! use rampart_foundation::StrongContiguousIterator;
//!
//! let v = vec![1, 2, 3];
//! let _it = StrongContiguousIterator::begin(&v);
//! ```
//!
//! ```compile_fail
//! use std::rc::Rc;
//! use rampart_foundation::{FixedArray, StrongContiguousIterator};
//!
//! let a = Rc::new(FixedArray::new([1, 2, 3]));
//! let _it = StrongContiguousIterator::begin(Rc::downgrade(&a));
//! ```
//!
//! Owning strong handles are fine:
//!
//! ```
//! use std::rc::Rc;
//! use rampart_foundation::{FixedArray, StrongContiguousIterator};
//!
//! let a = Rc::new(FixedArray::new([1, 2, 3]));
//! let first = StrongContiguousIterator::begin(Rc::clone(&a));
//! let last = StrongContiguousIterator::end(a);
//! assert_eq!(first.as_slice_to(&last)?, &[1, 2, 3]);
//! # Ok::<(), rampart_foundation::Error>(())
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::slice;

use rampart_error::{check_position, ensure, Error, Result};

use crate::capability::{check_range, ContiguousAccess, RandomAccess, StaticStructure};
use crate::fast_path::{check_bounds, FastPathEligible, Traversal};
use crate::handle::ItemOf;
use crate::iter::BoundsCheckedIterator;

/// `[first, last)` of a proven contiguous slice.
///
/// Both the algorithm traversal and [`StrongContiguousIterator::as_slice_to`]
/// go through here.
fn proven_range<T>(slice: &[T], first: usize, last: usize) -> Result<&[T]> {
    check_range(first, last, slice.len())?;
    log_trace!(first = %first, last = %last, "Reducing proven range to a slice");
    slice
        .get(first..last)
        .ok_or(Error::position_out_of_range("Range end is past the container end"))
}

/// A bounds-checked iterator whose handle proves the fast path.
#[derive(Clone, Copy)]
pub struct StrongContiguousIterator<H: FastPathEligible> {
    inner: BoundsCheckedIterator<H>,
}

impl<H: FastPathEligible> StrongContiguousIterator<H> {
    /// Iterator at the first element.
    #[must_use]
    pub fn begin(handle: H) -> Self {
        Self { inner: BoundsCheckedIterator::from_parts(handle, 0) }
    }

    /// Iterator at the end marker.
    #[must_use]
    pub fn end(handle: H) -> Self {
        let len = handle.target().len();
        Self { inner: BoundsCheckedIterator::from_parts(handle, len) }
    }

    /// Iterator at `index`, which may be the end marker.
    pub fn at(handle: H, index: usize) -> Result<Self> {
        check_position(index, handle.target().len(), "Iterator position past the end marker")?;
        Ok(Self { inner: BoundsCheckedIterator::from_parts(handle, index) })
    }

    pub(crate) fn from_checked(inner: BoundsCheckedIterator<H>) -> Self {
        Self { inner }
    }

    /// Current index.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// Length of the target.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.target_len()
    }

    /// Number of elements up to the end marker.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.size().saturating_sub(self.position())
    }

    /// Whether this iterator sits at the end marker.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position() >= self.size()
    }

    /// Whether dereferencing would succeed.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.position() < self.size()
    }

    /// Moves `n` elements forward; unchanged on error.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.inner.advance(n)
    }

    /// Moves `n` elements backward; unchanged on error.
    pub fn regress(&mut self, n: usize) -> Result<()> {
        self.inner.regress(n)
    }

    /// Moves by a signed offset; unchanged on error.
    pub fn offset(&mut self, delta: isize) -> Result<()> {
        self.inner.offset(delta)
    }

    /// The element at the current position.
    #[inline]
    pub fn item(&self) -> Result<&ItemOf<H>> {
        self.inner.item()
    }

    /// The element `delta` positions away.
    #[inline]
    pub fn item_at_offset(&self, delta: isize) -> Result<&ItemOf<H>> {
        self.inner.item_at_offset(delta)
    }

    /// Clone of the element at the current position.
    pub fn get(&self) -> Result<ItemOf<H>>
    where
        ItemOf<H>: Clone,
    {
        self.item().cloned()
    }

    /// Clone of the element `delta` positions away.
    pub fn get_at_offset(&self, delta: isize) -> Result<ItemOf<H>>
    where
        ItemOf<H>: Clone,
    {
        self.item_at_offset(delta).cloned()
    }

    /// Runs `f` on the element at the current position.
    pub fn with_item<R>(&self, f: impl FnOnce(&ItemOf<H>) -> R) -> Result<R> {
        self.item().map(f)
    }

    /// Runs `f` on the element `delta` positions away, without moving.
    pub fn with_item_at_offset<R>(
        &self,
        delta: isize,
        f: impl FnOnce(&ItemOf<H>) -> R,
    ) -> Result<R> {
        self.item_at_offset(delta).map(f)
    }

    /// Whether both iterators refer to the same target.
    #[inline]
    #[must_use]
    pub fn same_target(&self, other: &Self) -> bool {
        self.inner.same_target(&other.inner)
    }

    /// Signed number of steps from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> Result<isize> {
        self.inner.distance_to(&other.inner)
    }

    /// Orders two iterators of the same target.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        self.inner.compare(&other.inner)
    }

    /// Copies `other` into `self`, subject to the handle's reseat rule.
    pub fn assign(&mut self, other: Self) -> Result<()> {
        self.inner.assign(other.inner)
    }

    /// The elements from here up to `last` as one slice.
    ///
    /// This validates the pair once; everything after is unchecked slice
    /// access.
    pub fn as_slice_to(&self, last: &Self) -> Result<&[ItemOf<H>]> {
        enter_span!(crate::tracing::AlgorithmTrace::cashing_proof(self.position(), last.position()));
        ensure!(
            self.same_target(last),
            Error::target_mismatch("Range bounds belong to different targets")
        );
        proven_range(self.handle().contiguous(), self.position(), last.position())
    }

    /// The elements from here to the end of the target.
    #[must_use]
    pub fn as_slice(&self) -> &[ItemOf<H>] {
        self.handle().contiguous().get(self.position()..).unwrap_or_default()
    }

    /// The handle this iterator refers through.
    #[inline]
    #[must_use]
    pub fn handle(&self) -> &H {
        self.inner.handle()
    }

    /// Consumes the iterator, returning its handle.
    #[inline]
    #[must_use]
    pub fn into_handle(self) -> H {
        self.inner.into_handle()
    }

    /// The iterator as its checked form.
    #[inline]
    #[must_use]
    pub fn as_checked(&self) -> &BoundsCheckedIterator<H> {
        &self.inner
    }

    /// Gives up the proof, returning the checked form.
    #[inline]
    #[must_use]
    pub fn into_checked(self) -> BoundsCheckedIterator<H> {
        self.inner
    }
}

impl<H: FastPathEligible> fmt::Debug for StrongContiguousIterator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrongContiguousIterator")
            .field("target", &self.handle().target_id())
            .field("index", &self.position())
            .finish()
    }
}

impl<H: FastPathEligible> PartialEq for StrongContiguousIterator<H> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<H: FastPathEligible> Eq for StrongContiguousIterator<H> {}

impl<H: FastPathEligible> PartialOrd for StrongContiguousIterator<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<H: FastPathEligible> From<StrongContiguousIterator<H>> for BoundsCheckedIterator<H> {
    fn from(strong: StrongContiguousIterator<H>) -> Self {
        strong.inner
    }
}

impl<H: FastPathEligible + Clone> Traversal for StrongContiguousIterator<H> {
    type Handle = H;

    #[cfg(feature = "fast-path")]
    type Elements<'g>
        = slice::Iter<'g, ItemOf<H>>
    where
        Self: 'g;

    #[cfg(not(feature = "fast-path"))]
    type Elements<'g>
        = crate::fast_path::CheckedElements<'g, H::Target>
    where
        Self: 'g;

    #[inline]
    fn handle(&self) -> &H {
        self.inner.handle()
    }

    #[inline]
    fn position(&self) -> usize {
        self.inner.position()
    }

    fn starting_at(handle: H, index: usize) -> Result<Self> {
        Self::at(handle, index)
    }

    fn repositioned(&self, index: usize) -> Result<Self> {
        Self::at(self.handle().clone(), index)
    }

    #[cfg(feature = "fast-path")]
    fn elements<'g>(
        target: &'g H::Target,
        first: &Self,
        last: &Self,
    ) -> Result<slice::Iter<'g, ItemOf<H>>>
    where
        Self: 'g,
    {
        check_bounds(target, first, last)?;
        proven_range(H::contiguous_of(target), first.position(), last.position()).map(<[_]>::iter)
    }

    #[cfg(not(feature = "fast-path"))]
    fn elements<'g>(
        target: &'g H::Target,
        first: &Self,
        last: &Self,
    ) -> Result<Self::Elements<'g>>
    where
        Self: 'g,
    {
        check_bounds(target, first, last)?;
        Ok(crate::fast_path::CheckedElements::new(target, first.position(), last.position()))
    }

    #[cfg(not(feature = "fast-path"))]
    fn settle<'g>(elements: &Self::Elements<'g>) -> Result<()>
    where
        Self: 'g,
    {
        elements.check()
    }
}

impl<'a, C> IntoIterator for StrongContiguousIterator<&'a C>
where
    C: ContiguousAccess + RandomAccess<Structure = StaticStructure> + ?Sized,
{
    type Item = &'a C::Item;
    type IntoIter = slice::Iter<'a, C::Item>;

    /// Unchecked iteration from the current position to the end.
    fn into_iter(self) -> slice::Iter<'a, C::Item> {
        let index = self.position();
        let target: &'a C = self.inner.into_handle();
        target.as_slice().get(index..).unwrap_or_default().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedArray;

    #[test]
    fn test_strong_begin_end_infallible() {
        let a = FixedArray::new([1, 2, 3]);
        let first = StrongContiguousIterator::begin(&a);
        let last = StrongContiguousIterator::end(&a);
        assert_eq!(first.distance_to(&last).unwrap(), 3);
        assert!(first.is_valid());
        assert!(!last.is_valid());
        assert_eq!(last.item().unwrap_err(), Error::END_MARKER);
        assert_eq!(last.get_at_offset(-3).unwrap(), 1);
        assert_eq!(first.with_item_at_offset(1, |x| x * 10).unwrap(), 20);
        assert!(last.with_item(|_| ()).is_err());
        assert!(core::ptr::eq(first.into_handle(), &a));
    }

    #[test]
    fn test_as_slice_to_validates_once() {
        let a = [5, 6, 7, 8];
        let first = StrongContiguousIterator::at(&a, 1).unwrap();
        let last = StrongContiguousIterator::at(&a, 3).unwrap();
        assert_eq!(first.as_slice_to(&last).unwrap(), &[6, 7]);
        assert!(last.as_slice_to(&first).unwrap_err().is_range_error());

        let b = [5, 6, 7, 8];
        let other = StrongContiguousIterator::end(&b);
        assert_eq!(
            first.as_slice_to(&other).unwrap_err().code,
            rampart_error::codes::TARGET_MISMATCH
        );
    }

    #[test]
    fn test_round_trip_through_checked() {
        let a = [1u8, 2, 3];
        let checked = BoundsCheckedIterator::at(&a, 2).unwrap();
        let strong = checked.into_strong();
        assert_eq!(strong.item().unwrap(), &3);
        assert_eq!(BoundsCheckedIterator::from(strong), checked);
        assert_eq!(strong.as_slice(), &[3]);
        assert_eq!(strong.into_iter().count(), 1);
    }
}
