// Rampart - rampart-foundation
// Module: Mutable sections
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Exclusive, mutable view over a run of elements.
//!
//! The mutating algorithms live here. They forward to the
//! [`RandomAccessMut`] range kernels, which static contiguous containers
//! implement as slice operations and everything else implements through
//! checked element swaps.

use core::cmp::Ordering;

use rampart_error::{check_index, check_position, ensure, Error, Result};

use crate::capability::{check_range, RandomAccessMut};
use crate::iter::BoundsCheckedIterator;
use crate::section::{RandomAccessSection, Section};

/// A mutable view of `count` elements of `target` starting at `start`.
///
/// # Examples
///
/// ```
/// use rampart_foundation::FixedArray;
///
/// let mut a = FixedArray::new([5, 3, 9, 1, 7]);
/// let mut s = a.section_mut();
/// s.subsection_mut(1, 3)?.sort()?;
/// assert_eq!(a.as_slice(), &[5, 1, 3, 9, 7]);
/// # Ok::<(), rampart_foundation::Error>(())
/// ```
pub struct RandomAccessSectionMut<'a, C: ?Sized> {
    target: &'a mut C,
    start: usize,
    count: usize,
}

impl<'a, C: RandomAccessMut + ?Sized> RandomAccessSectionMut<'a, C> {
    /// View of `count` elements from `start`.
    pub fn new(target: &'a mut C, start: usize, count: usize) -> Result<Self> {
        check_position(start, target.len(), "Section start past the end marker")?;
        let end = start
            .checked_add(count)
            .ok_or(Error::position_overflow("Section end overflows"))?;
        check_range(start, end, target.len()).map_err(|_| {
            Error::section_count_out_of_range("Section count exceeds the remaining length")
        })?;
        Ok(Self { target, start, count })
    }

    /// View over every element of `target`.
    pub fn from_target(target: &'a mut C) -> Self {
        let count = target.len();
        Self { target, start: 0, count }
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the view is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn end(&self) -> usize {
        self.start + self.count
    }

    /// Element `index` of the view.
    pub fn at(&self, index: usize) -> Result<&C::Item> {
        check_index(index, self.count, "Section index out of range")?;
        crate::iter::lookup(&*self.target, self.start + index)
    }

    /// Mutable element `index` of the view.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut C::Item> {
        check_index(index, self.count, "Section index out of range")?;
        self.target
            .get_mut(self.start + index)
            .ok_or(Error::element_unavailable("Container reported an element it could not produce"))
    }

    /// Reborrows `min(n, len - pos)` elements from `pos`.
    pub fn subsection_mut(&mut self, pos: usize, n: usize) -> Result<RandomAccessSectionMut<'_, C>> {
        ensure!(
            pos <= self.count,
            Error::invalid_subsection("Subsection starts past the section end")
        );
        Ok(RandomAccessSectionMut {
            target: &mut *self.target,
            start: self.start + pos,
            count: n.min(self.count - pos),
        })
    }

    /// Read-only checked view of the same elements.
    #[must_use]
    pub fn as_section(&self) -> Section<&C> {
        RandomAccessSection::from_parts(
            BoundsCheckedIterator::from_parts(&*self.target, self.start),
            self.count,
        )
    }

    /// Sorts the view in ascending order.
    pub fn sort(&mut self) -> Result<()>
    where
        C::Item: Ord,
    {
        self.sort_by(<C::Item as Ord>::cmp)
    }

    /// Sorts the view with `compare`.
    pub fn sort_by<F>(&mut self, compare: F) -> Result<()>
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        let (start, end) = (self.start, self.end());
        self.target.sort_range_by(start, end, compare)
    }

    /// Reverses the view.
    pub fn reverse(&mut self) -> Result<()> {
        let (start, end) = (self.start, self.end());
        self.target.reverse_range(start, end)
    }

    /// Sets every element of the view to `value`.
    pub fn fill(&mut self, value: &C::Item) -> Result<()>
    where
        C::Item: Clone,
    {
        self.transform_in_place(|item| item.clone_from(value))
    }

    /// Applies `f` to every element of the view.
    pub fn transform_in_place<F>(&mut self, f: F) -> Result<()>
    where
        F: FnMut(&mut C::Item),
    {
        let (start, end) = (self.start, self.end());
        self.target.for_each_mut_in_range(start, end, f)
    }

    /// Swaps elements `a` and `b` of the view.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        check_index(a, self.count, "First swap index out of range")?;
        check_index(b, self.count, "Second swap index out of range")?;
        self.target.swap_elements(self.start + a, self.start + b)
    }
}
