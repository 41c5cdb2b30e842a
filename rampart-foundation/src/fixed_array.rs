// Rampart - rampart-foundation
// Module: FixedArray - Bounds-checked fixed-capacity array
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity array with checked access and lock-guarded structure.
//!
//! `FixedArray<T, N>` owns exactly `N` inline elements. Element access is
//! checked; whole-array operations (construction from a generator, fill,
//! swap, assignment, and the sort/reverse/transform kernels reached through
//! [`FixedArray::section_mut`]) run under the array's [`StructureLock`] so a
//! collaborator holding that lock sees them rejected rather than
//! interleaved.
//!
//! # Characteristics
//!
//! - **Zero allocation**: storage is a plain `[T; N]`
//! - **Static structure**: the length is part of the type, so iterators and
//!   sections over a `FixedArray` qualify for the fast path
//! - **Fatal misuse**: dropping the array while its structure lock is held
//!   terminates the process

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::{array, slice};

use rampart_error::{Error, Result};
use rampart_sync::{StructureGuard, StructureLock};

use crate::capability::{
    slice_range_mut, slice_swap, Contiguous, ContiguousAccess, RandomAccess, RandomAccessMut,
    StaticStructure,
};
use crate::iter::{AugmentedCursorIterator, BoundsCheckedIterator, StrongContiguousIterator};
use crate::section::{RandomAccessSection, RandomAccessSectionMut, Section, StrongSection};

/// Compile-time check that an `M`-element initializer fits `N` slots.
pub struct PaddingBound<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> PaddingBound<M, N> {
    /// Evaluates to `()` or fails the build.
    pub const OK: () = assert!(M <= N, "initializer list is longer than the array capacity");
}

/// The array's structure lock, checked when the array is dropped.
struct ContainerLock(StructureLock);

impl ContainerLock {
    const fn new() -> Self {
        Self(StructureLock::new())
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn enter(&self, operation: &'static str) -> Result<StructureGuard<'_>> {
        self.0.acquire().inspect_err(|_| {
            log_warn!(operation = operation, "Structural operation re-entered while locked");
        })
    }
}

impl Drop for ContainerLock {
    fn drop(&mut self) {
        if self.0.is_held() {
            log_error!("FixedArray dropped while its structure lock is held");
        }
        self.0.ensure_released();
    }
}

/// A fixed-capacity array with bounds-checked access.
///
/// # Invariants
///
/// 1. The array always holds exactly `N` initialized elements
/// 2. Whole-array operations never interleave with a holder of the
///    structure lock
/// 3. The structure lock is released whenever the array is dropped
///
/// # Examples
///
/// ```
/// use rampart_foundation::FixedArray;
///
/// let mut a = FixedArray::<i32, 3>::new([1, 2, 3]);
/// assert_eq!(a.at(2)?, &3);
/// assert!(a.at(3).is_err());
///
/// a.fill(7)?;
/// assert_eq!(a.as_slice(), &[7, 7, 7]);
/// # Ok::<(), rampart_foundation::Error>(())
/// ```
///
/// Shorter initializer lists need `T: Default`, and a longer one does not
/// build:
///
/// ```compile_fail
/// use rampart_foundation::FixedArray;
///
/// let a = FixedArray::<u8, 2>::padded([1, 2, 3]);
/// ```
///
/// Neither does a short list of an element type without a default:
///
/// ```compile_fail
/// use rampart_foundation::FixedArray;
///
/// struct Token;
/// let a = FixedArray::<Token, 3>::padded([Token, Token]);
/// ```
///
/// There is no panicking `[]` operator; [`at`](Self::at) and
/// [`at_mut`](Self::at_mut) are the index operations:
///
/// ```compile_fail
/// use rampart_foundation::FixedArray;
///
/// let a = FixedArray::new([1, 2, 3]);
/// let x = a[5];
/// ```
pub struct FixedArray<T, const N: usize> {
    lock: ContainerLock,
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Wraps `data`.
    #[inline]
    #[must_use]
    pub const fn new(data: [T; N]) -> Self {
        Self { lock: ContainerLock::new(), data }
    }

    /// Runs `build` with the new array's structure lock held.
    fn construct(build: impl FnOnce() -> [T; N]) -> Self {
        let lock = ContainerLock::new();
        let data = {
            // A fresh lock is never held, so the guard is always present and
            // releases even if `build` unwinds.
            let _construction = lock.0.acquire();
            build()
        };
        Self { lock, data }
    }

    /// Builds each element from its index.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::construct(|| array::from_fn(f))
    }

    /// Takes the first `M` elements from `values` and defaults the rest.
    ///
    /// `M > N` is rejected at compile time.
    pub fn padded<const M: usize>(values: [T; M]) -> Self
    where
        T: Default,
    {
        let () = PaddingBound::<M, N>::OK;
        Self::construct(|| {
            let mut values = values.into_iter();
            array::from_fn(|_| values.next().unwrap_or_default())
        })
    }

    /// Clones a slice of exactly `N` elements.
    pub fn try_from_slice(values: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        let exact: &[T; N] = values
            .try_into()
            .map_err(|_| Error::capacity_mismatch("Slice length differs from the array capacity"))?;
        Ok(Self::construct(|| exact.each_ref().map(T::clone)))
    }

    /// Clones a slice of at most `N` elements, defaulting the rest.
    pub fn try_from_slice_padded(values: &[T]) -> Result<Self>
    where
        T: Clone + Default,
    {
        if values.len() > N {
            return Err(Error::capacity_mismatch("Slice is longer than the array capacity"));
        }
        Ok(Self::construct(|| array::from_fn(|i| values.get(i).cloned().unwrap_or_default())))
    }

    /// Element at `index`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(Error::index_out_of_range("FixedArray index out of range"))
    }

    /// Mutable element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(Error::index_out_of_range("FixedArray index out of range"))
    }

    /// Element at `index`, or `None`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// First element.
    pub fn front(&self) -> Result<&T> {
        self.data.first().ok_or(Error::empty_container("FixedArray has no elements"))
    }

    /// Mutable first element.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.data.first_mut().ok_or(Error::empty_container("FixedArray has no elements"))
    }

    /// Last element.
    pub fn back(&self) -> Result<&T> {
        self.data.last().ok_or(Error::empty_container("FixedArray has no elements"))
    }

    /// Mutable last element.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.data.last_mut().ok_or(Error::empty_container("FixedArray has no elements"))
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) -> Result<()>
    where
        T: Clone,
    {
        enter_span!(crate::tracing::StructureTrace::operation("fill", N));
        let _guard = self.lock.enter("fill")?;
        self.data.fill(value);
        Ok(())
    }

    /// Exchanges contents with `other`, holding both locks.
    pub fn swap(&mut self, other: &mut Self) -> Result<()> {
        enter_span!(crate::tracing::StructureTrace::operation("swap", N));
        let _mine = self.lock.enter("swap")?;
        let _theirs = other.lock.enter("swap")?;
        core::mem::swap(&mut self.data, &mut other.data);
        Ok(())
    }

    /// Copies the elements of `other` into `self`.
    pub fn assign(&mut self, other: &Self) -> Result<()>
    where
        T: Clone,
    {
        enter_span!(crate::tracing::StructureTrace::operation("assign", N));
        let _guard = self.lock.enter("assign")?;
        self.data.clone_from(&other.data);
        Ok(())
    }

    /// Moves the elements of `other` into `self`.
    pub fn assign_from(&mut self, other: Self) -> Result<()> {
        enter_span!(crate::tracing::StructureTrace::operation("assign_from", N));
        let data = other.into_inner();
        let _guard = self.lock.enter("assign_from")?;
        self.data = data;
        Ok(())
    }

    /// Number of elements, always `N`.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        N
    }

    /// Number of elements, always `N`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether `N == 0`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// All elements as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable iterator over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Unwraps the underlying array.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        let Self { data, .. } = self;
        data
    }

    /// Builds a new array by applying `f` to every element.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FixedArray<U, N> {
        let data = self.into_inner();
        FixedArray::construct(|| data.map(f))
    }

    /// Checked iterator at the first element.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> BoundsCheckedIterator<&Self> {
        BoundsCheckedIterator::from_parts(self, 0)
    }

    /// Checked iterator at the end marker.
    #[inline]
    #[must_use]
    pub fn end(&self) -> BoundsCheckedIterator<&Self> {
        BoundsCheckedIterator::from_parts(self, N)
    }

    /// Cursor at the first element.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> AugmentedCursorIterator<&Self> {
        AugmentedCursorIterator::from(self.begin())
    }

    /// Fast-path iterator at the first element.
    #[inline]
    #[must_use]
    pub fn strong_begin(&self) -> StrongContiguousIterator<&Self> {
        StrongContiguousIterator::begin(self)
    }

    /// Fast-path iterator at the end marker.
    #[inline]
    #[must_use]
    pub fn strong_end(&self) -> StrongContiguousIterator<&Self> {
        StrongContiguousIterator::end(self)
    }

    /// Fast-path section over all elements.
    #[must_use]
    pub fn section(&self) -> StrongSection<&Self> {
        RandomAccessSection::from_parts(self.strong_begin(), N)
    }

    /// Checked section over all elements.
    #[must_use]
    pub fn checked_section(&self) -> Section<&Self> {
        RandomAccessSection::from_parts(self.begin(), N)
    }

    /// Mutable section over all elements.
    pub fn section_mut(&mut self) -> RandomAccessSectionMut<'_, Self> {
        RandomAccessSectionMut::from_target(self)
    }

    /// The structure lock, for an access-control collaborator.
    #[inline]
    #[must_use]
    pub fn structure_lock(&self) -> &StructureLock {
        &self.lock.0
    }
}

impl<T: Clone, const N: usize> Clone for FixedArray<T, N> {
    fn clone(&self) -> Self {
        Self::new(self.data.clone())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for FixedArray<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data.partial_cmp(&other.data)
    }
}

impl<T: Ord, const N: usize> Ord for FixedArray<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.cmp(&other.data)
    }
}

impl<T: Hash, const N: usize> Hash for FixedArray<T, N> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.data.hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::try_from_slice(values)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> RandomAccess for FixedArray<T, N> {
    type Item = T;
    type Structure = StaticStructure;
    type Sequence = Contiguous;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }
}

impl<T, const N: usize> ContiguousAccess for FixedArray<T, N> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

/// Element access is unlocked. The range kernels reorder or rewrite a
/// whole span, so they take the structure lock like [`FixedArray::fill`].
impl<T, const N: usize> RandomAccessMut for FixedArray<T, N> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    fn swap_elements(&mut self, a: usize, b: usize) -> Result<()> {
        slice_swap(&mut self.data, a, b)
    }

    fn sort_range_by<F>(&mut self, start: usize, end: usize, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let _guard = self.lock.enter("sort")?;
        slice_range_mut(&mut self.data, start, end)?.sort_unstable_by(compare);
        Ok(())
    }

    fn reverse_range(&mut self, start: usize, end: usize) -> Result<()> {
        let _guard = self.lock.enter("reverse")?;
        slice_range_mut(&mut self.data, start, end)?.reverse();
        Ok(())
    }

    fn for_each_mut_in_range<F>(&mut self, start: usize, end: usize, f: F) -> Result<()>
    where
        F: FnMut(&mut T),
    {
        let _guard = self.lock.enter("transform")?;
        slice_range_mut(&mut self.data, start, end)?.iter_mut().for_each(f);
        Ok(())
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
