// Rampart - rampart-foundation
// Module: Random-access sections
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Non-owning views over a run of elements.
//!
//! A [`RandomAccessSection`] is a start position plus a count. It is generic
//! over its position type, so a section built from
//! [`StrongContiguousIterator`]s runs its searches and comparisons over a
//! raw slice while one built from [`BoundsCheckedIterator`]s checks every
//! step. All offsets a section reports are relative to its own start.

pub mod caged;
pub mod mutable;

use core::cmp::Ordering;
use core::slice;

use rampart_error::{check_index, ensure, Error, Result};

pub use caged::{caged_section, unwrap_caged, CagedHandle, CagedSection};
pub use mutable::RandomAccessSectionMut;

use crate::capability::RandomAccess;
use crate::fast_path::{self, CheckedElements, FastPathEligible, Traversal, TraversalItem};
use crate::handle::{ItemOf, SequenceHandle, StrongHandle};
use crate::iter::{lookup, BoundsCheckedIterator, StrongContiguousIterator};

/// Section over checked iterators.
pub type Section<H> = RandomAccessSection<BoundsCheckedIterator<H>>;

/// Section over fast-path iterators.
pub type StrongSection<H> = RandomAccessSection<StrongContiguousIterator<H>>;

/// A view of `count` elements starting at `start`.
///
/// # Invariants
///
/// 1. `start.position() + count` never exceeded the target length when the
///    section was built
/// 2. A subsection never reaches past its parent
///
/// # Examples
///
/// ```
/// use rampart_foundation::{FixedArray, StrongSection};
///
/// let a = FixedArray::new([10, 20, 30, 40, 50]);
/// let s: StrongSection<_> = a.section();
/// let mid = s.subsection(1, 3)?;
/// assert_eq!(mid.at(0)?, &20);
/// assert_eq!(mid.rfind(&40)?, Some(2));
/// assert!(s.subsection(6, 1).is_err());
/// assert_eq!(s.subsection(4, 10)?.len(), 1);
/// # Ok::<(), rampart_foundation::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomAccessSection<I> {
    start: I,
    count: usize,
}

impl<I: Traversal> RandomAccessSection<I> {
    /// Section of `count` elements from `start`.
    ///
    /// Fails if fewer than `count` elements remain after `start`.
    pub fn new(start: I, count: usize) -> Result<Self> {
        enter_span!(crate::tracing::SectionTrace::constructing(start.position(), count));
        let remaining = start.handle().resolve()?.len().checked_sub(start.position());
        match remaining {
            Some(remaining) if count <= remaining => Ok(Self { start, count }),
            _ => {
                log_debug!(
                    start = start.position(),
                    count = count,
                    "Section count exceeds the remaining length"
                );
                Err(Error::section_count_out_of_range("Section count exceeds the remaining length"))
            }
        }
    }

    /// Section over every element of `handle`'s target.
    pub fn from_handle(handle: I::Handle) -> Result<Self> {
        let count = handle.resolve()?.len();
        let start = I::starting_at(handle, 0)?;
        Ok(Self { start, count })
    }

    /// Builds a section whose bounds the caller has already validated.
    pub(crate) fn from_parts(start: I, count: usize) -> Self {
        Self { start, count }
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.count
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the section is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Position of the first element.
    #[must_use]
    pub fn begin(&self) -> I {
        self.start.clone()
    }

    /// Position one past the last element.
    pub fn end(&self) -> Result<I> {
        self.position_at(self.count)
    }

    fn position_at(&self, offset: usize) -> Result<I> {
        let index = self
            .start
            .position()
            .checked_add(offset)
            .ok_or(Error::position_overflow("Section position overflows"))?;
        self.start.repositioned(index)
    }

    fn bounds(&self) -> Result<(I, I)> {
        Ok((self.begin(), self.end()?))
    }

    /// Section-relative offset of `found`, or `None` if it is `last`.
    fn offset_of(&self, found: &I, last: &I) -> Option<usize> {
        (found.position() != last.position()).then(|| found.position() - self.start.position())
    }

    /// Runs `f` on element `index` of the section.
    pub fn with_at<R>(&self, index: usize, f: impl FnOnce(&TraversalItem<I>) -> R) -> Result<R> {
        check_index(index, self.count, "Section index out of range")?;
        let guard = self.start.handle().resolve()?;
        lookup(&*guard, self.start.position() + index).map(f)
    }

    /// Clone of element `index` of the section.
    pub fn get(&self, index: usize) -> Result<TraversalItem<I>>
    where
        TraversalItem<I>: Clone,
    {
        self.with_at(index, <TraversalItem<I> as Clone>::clone)
    }

    /// `min(n, len - pos)` elements starting at `pos`.
    ///
    /// Fails if `pos > len`.
    pub fn subsection(&self, pos: usize, n: usize) -> Result<Self> {
        enter_span!(crate::tracing::SectionTrace::narrowing(pos, n));
        ensure!(
            pos <= self.count,
            Error::invalid_subsection("Subsection starts past the section end")
        );
        let count = n.min(self.count - pos);
        Ok(Self { start: self.position_at(pos)?, count })
    }

    /// The first `n` elements.
    pub fn first(&self, n: usize) -> Result<Self> {
        ensure!(n <= self.count, Error::invalid_subsection("Prefix longer than the section"));
        self.subsection(0, n)
    }

    /// The last `n` elements.
    pub fn last(&self, n: usize) -> Result<Self> {
        ensure!(n <= self.count, Error::invalid_subsection("Suffix longer than the section"));
        self.subsection(self.count - n, n)
    }

    /// Drops the first `n` elements from the view.
    pub fn remove_prefix(&mut self, n: usize) -> Result<()> {
        ensure!(n <= self.count, Error::invalid_subsection("Prefix longer than the section"));
        self.start = self.position_at(n)?;
        self.count -= n;
        Ok(())
    }

    /// Drops the last `n` elements from the view.
    pub fn remove_suffix(&mut self, n: usize) -> Result<()> {
        ensure!(n <= self.count, Error::invalid_subsection("Suffix longer than the section"));
        self.count -= n;
        Ok(())
    }

    /// Offset of the first element equal to `value`.
    pub fn find<T>(&self, value: &T) -> Result<Option<usize>>
    where
        T: ?Sized,
        TraversalItem<I>: PartialEq<T>,
    {
        let (first, last) = self.bounds()?;
        let found = fast_path::find(&first, &last, value)?;
        Ok(self.offset_of(&found, &last))
    }

    /// Offset of the last element equal to `value`.
    pub fn rfind<T>(&self, value: &T) -> Result<Option<usize>>
    where
        T: ?Sized,
        TraversalItem<I>: PartialEq<T>,
    {
        let (first, last) = self.bounds()?;
        let found = fast_path::rfind(&first, &last, value)?;
        Ok(self.offset_of(&found, &last))
    }

    /// Offset of the first element satisfying `predicate`.
    pub fn find_if<P>(&self, predicate: P) -> Result<Option<usize>>
    where
        P: FnMut(&TraversalItem<I>) -> bool,
    {
        let (first, last) = self.bounds()?;
        let found = fast_path::find_if(&first, &last, predicate)?;
        Ok(self.offset_of(&found, &last))
    }

    /// Offset of the last element satisfying `predicate`.
    pub fn rfind_if<P>(&self, predicate: P) -> Result<Option<usize>>
    where
        P: FnMut(&TraversalItem<I>) -> bool,
    {
        let (first, last) = self.bounds()?;
        let found = fast_path::rfind_if(&first, &last, predicate)?;
        Ok(self.offset_of(&found, &last))
    }

    /// Offset of the first element equal to any of `candidates`.
    pub fn find_first_of<T>(&self, candidates: &[T]) -> Result<Option<usize>>
    where
        TraversalItem<I>: PartialEq<T>,
    {
        self.find_if(|item| candidates.iter().any(|c| item == c))
    }

    /// Offset of the last element equal to any of `candidates`.
    pub fn find_last_of<T>(&self, candidates: &[T]) -> Result<Option<usize>>
    where
        TraversalItem<I>: PartialEq<T>,
    {
        self.rfind_if(|item| candidates.iter().any(|c| item == c))
    }

    /// Offset of the first element equal to none of `candidates`.
    pub fn find_first_not_of<T>(&self, candidates: &[T]) -> Result<Option<usize>>
    where
        TraversalItem<I>: PartialEq<T>,
    {
        self.find_if(|item| !candidates.iter().any(|c| item == c))
    }

    /// Offset of the last element equal to none of `candidates`.
    pub fn find_last_not_of<T>(&self, candidates: &[T]) -> Result<Option<usize>>
    where
        TraversalItem<I>: PartialEq<T>,
    {
        self.rfind_if(|item| !candidates.iter().any(|c| item == c))
    }

    /// Offset of the first occurrence of `needle`; an empty needle is found
    /// at `0`.
    pub fn find_section<J>(&self, needle: &RandomAccessSection<J>) -> Result<Option<usize>>
    where
        J: Traversal,
        TraversalItem<I>: PartialEq<TraversalItem<J>>,
    {
        if needle.is_empty() {
            return Ok(Some(0));
        }
        let (first, last) = self.bounds()?;
        let (needle_first, needle_last) = needle.bounds()?;
        let found = fast_path::search(&first, &last, &needle_first, &needle_last)?;
        Ok(self.offset_of(&found, &last))
    }

    /// Whether some element equals `value`.
    pub fn contains<T>(&self, value: &T) -> Result<bool>
    where
        T: ?Sized,
        TraversalItem<I>: PartialEq<T>,
    {
        Ok(self.find(value)?.is_some())
    }

    /// Whether both sections hold equal elements.
    pub fn equal<J>(&self, other: &RandomAccessSection<J>) -> Result<bool>
    where
        J: Traversal,
        TraversalItem<I>: PartialEq<TraversalItem<J>>,
    {
        if self.count != other.count {
            return Ok(false);
        }
        let (first1, last1) = self.bounds()?;
        let (first2, last2) = other.bounds()?;
        fast_path::equal(&first1, &last1, &first2, &last2)
    }

    /// Lexicographical ordering against `other`.
    pub fn compare<J>(&self, other: &RandomAccessSection<J>) -> Result<Option<Ordering>>
    where
        J: Traversal,
        TraversalItem<I>: PartialOrd<TraversalItem<J>>,
    {
        let (first1, last1) = self.bounds()?;
        let (first2, last2) = other.bounds()?;
        fast_path::lexicographical_ordering(&first1, &last1, &first2, &last2)
    }

    /// Whether the first element equals `value`.
    pub fn starts_with<T>(&self, value: &T) -> Result<bool>
    where
        T: ?Sized,
        TraversalItem<I>: PartialEq<T>,
    {
        if self.is_empty() {
            return Ok(false);
        }
        self.with_at(0, |item| item == value)
    }

    /// Whether the last element equals `value`.
    pub fn ends_with<T>(&self, value: &T) -> Result<bool>
    where
        T: ?Sized,
        TraversalItem<I>: PartialEq<T>,
    {
        if self.is_empty() {
            return Ok(false);
        }
        self.with_at(self.count - 1, |item| item == value)
    }

    /// Whether `prefix` matches the start of this section.
    pub fn starts_with_section<J>(&self, prefix: &RandomAccessSection<J>) -> Result<bool>
    where
        J: Traversal,
        TraversalItem<I>: PartialEq<TraversalItem<J>>,
    {
        if prefix.len() > self.count {
            return Ok(false);
        }
        self.first(prefix.len())?.equal(prefix)
    }

    /// Whether `suffix` matches the end of this section.
    pub fn ends_with_section<J>(&self, suffix: &RandomAccessSection<J>) -> Result<bool>
    where
        J: Traversal,
        TraversalItem<I>: PartialEq<TraversalItem<J>>,
    {
        if suffix.len() > self.count {
            return Ok(false);
        }
        self.last(suffix.len())?.equal(suffix)
    }

    /// Calls `f` on every element in order.
    pub fn for_each<F>(&self, f: F) -> Result<()>
    where
        F: FnMut(&TraversalItem<I>),
    {
        let (first, last) = self.bounds()?;
        fast_path::for_each(&first, &last, f)
    }

    /// Clones the elements into a `Vec`.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Result<alloc::vec::Vec<TraversalItem<I>>>
    where
        TraversalItem<I>: Clone,
    {
        let (first, last) = self.bounds()?;
        fast_path::transform(&first, &last, <TraversalItem<I> as Clone>::clone)
    }
}

impl<H: StrongHandle> Section<H> {
    /// Element `index` of the section.
    pub fn at(&self, index: usize) -> Result<&ItemOf<H>> {
        check_index(index, self.count, "Section index out of range")?;
        lookup(self.start.handle().target(), self.start.position() + index)
    }

    /// Checked iteration over the section.
    pub fn iter(&self) -> CheckedElements<'_, H::Target> {
        let first = self.start.position();
        CheckedElements::new(self.start.handle().target(), first, first + self.count)
    }
}

impl<H: FastPathEligible> StrongSection<H> {
    /// The section as one slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ItemOf<H>] {
        self.start.as_slice().get(..self.count).unwrap_or_default()
    }

    /// Element `index` of the section.
    pub fn at(&self, index: usize) -> Result<&ItemOf<H>> {
        check_index(index, self.count, "Section index out of range")?;
        self.as_slice()
            .get(index)
            .ok_or(Error::index_out_of_range("Section index out of range"))
    }

    /// Slice iteration over the section.
    pub fn iter(&self) -> slice::Iter<'_, ItemOf<H>> {
        self.as_slice().iter()
    }

    /// The same view with per-step checking.
    #[must_use]
    pub fn into_checked(self) -> Section<H> {
        RandomAccessSection { start: self.start.into_checked(), count: self.count }
    }
}

impl<H: FastPathEligible> Section<H> {
    /// The same view over the fast path.
    #[must_use]
    pub fn into_strong(self) -> StrongSection<H> {
        RandomAccessSection { start: self.start.into_strong(), count: self.count }
    }
}
