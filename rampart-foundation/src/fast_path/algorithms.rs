// Rampart - rampart-foundation
// Module: Fast path algorithms
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Non-mutating algorithms over `[first, last)` iterator pairs.
//!
//! Each algorithm resolves the handle once, asks the position type for its
//! [`Traversal::Elements`] and runs over that. With checked positions every
//! step is bounds-checked; with strong contiguous positions the loop runs
//! over a plain slice. Positions returned by the `find` family equal `last`
//! when nothing matches.
//!
//! ```
//! use rampart_foundation::fast_path;
//! use rampart_foundation::{BoundsCheckedIterator, StrongContiguousIterator};
//!
//! let data = [3, 1, 4, 1, 5];
//! let (first, last) = (StrongContiguousIterator::begin(&data), StrongContiguousIterator::end(&data));
//! assert_eq!(fast_path::find(&first, &last, &4)?.position(), 2);
//!
//! let (first, last) = (BoundsCheckedIterator::begin(&data)?, BoundsCheckedIterator::end(&data)?);
//! assert_eq!(fast_path::count(&first, &last, &1)?, 2);
//! # Ok::<(), rampart_foundation::Error>(())
//! ```

use core::cmp::Ordering;

use rampart_error::{Error, Result};

use super::{Traversal, TraversalItem};
use crate::handle::SequenceHandle;

/// The position `k` steps after `first`.
fn nth_position<I: Traversal>(first: &I, k: usize) -> Result<I> {
    let index = first
        .position()
        .checked_add(k)
        .ok_or(Error::position_overflow("Algorithm result position overflows"))?;
    first.repositioned(index)
}

/// First position in `[first, last)` equal to `value`.
pub fn find<I, T>(first: &I, last: &I, value: &T) -> Result<I>
where
    I: Traversal,
    T: ?Sized,
    TraversalItem<I>: PartialEq<T>,
{
    find_if(first, last, |item| item == value)
}

/// First position in `[first, last)` satisfying `predicate`.
pub fn find_if<I, P>(first: &I, last: &I, mut predicate: P) -> Result<I>
where
    I: Traversal,
    P: FnMut(&TraversalItem<I>) -> bool,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    enter_span!(crate::tracing::AlgorithmTrace::running("find_if", elements.len()));
    let found = elements.position(|item| predicate(item));
    I::settle(&elements)?;
    match found {
        Some(k) => nth_position(first, k),
        None => Ok(last.clone()),
    }
}

/// Last position in `[first, last)` equal to `value`.
pub fn rfind<I, T>(first: &I, last: &I, value: &T) -> Result<I>
where
    I: Traversal,
    T: ?Sized,
    TraversalItem<I>: PartialEq<T>,
{
    rfind_if(first, last, |item| item == value)
}

/// Last position in `[first, last)` satisfying `predicate`.
pub fn rfind_if<I, P>(first: &I, last: &I, mut predicate: P) -> Result<I>
where
    I: Traversal,
    P: FnMut(&TraversalItem<I>) -> bool,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    let found = elements.rposition(|item| predicate(item));
    I::settle(&elements)?;
    match found {
        Some(k) => nth_position(first, k),
        None => Ok(last.clone()),
    }
}

/// Number of elements equal to `value`.
pub fn count<I, T>(first: &I, last: &I, value: &T) -> Result<usize>
where
    I: Traversal,
    T: ?Sized,
    TraversalItem<I>: PartialEq<T>,
{
    count_if(first, last, |item| item == value)
}

/// Number of elements satisfying `predicate`.
pub fn count_if<I, P>(first: &I, last: &I, mut predicate: P) -> Result<usize>
where
    I: Traversal,
    P: FnMut(&TraversalItem<I>) -> bool,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    enter_span!(crate::tracing::AlgorithmTrace::running("count_if", elements.len()));
    let matches = elements.by_ref().filter(|item| predicate(item)).count();
    I::settle(&elements)?;
    Ok(matches)
}

/// Whether every element satisfies `predicate`; `true` for an empty range.
pub fn all_of<I, P>(first: &I, last: &I, mut predicate: P) -> Result<bool>
where
    I: Traversal,
    P: FnMut(&TraversalItem<I>) -> bool,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    let all = elements.all(|item| predicate(item));
    I::settle(&elements)?;
    Ok(all)
}

/// Whether some element satisfies `predicate`.
pub fn any_of<I, P>(first: &I, last: &I, mut predicate: P) -> Result<bool>
where
    I: Traversal,
    P: FnMut(&TraversalItem<I>) -> bool,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    let any = elements.any(|item| predicate(item));
    I::settle(&elements)?;
    Ok(any)
}

/// Whether no element satisfies `predicate`.
pub fn none_of<I, P>(first: &I, last: &I, predicate: P) -> Result<bool>
where
    I: Traversal,
    P: FnMut(&TraversalItem<I>) -> bool,
{
    any_of(first, last, predicate).map(|any| !any)
}

/// Calls `f` on every element in order.
pub fn for_each<I, F>(first: &I, last: &I, mut f: F) -> Result<()>
where
    I: Traversal,
    F: FnMut(&TraversalItem<I>),
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    elements.by_ref().for_each(|item| f(item));
    I::settle(&elements)
}

/// Whether two ranges have the same length and equal elements.
pub fn equal<I, J>(first1: &I, last1: &I, first2: &J, last2: &J) -> Result<bool>
where
    I: Traversal,
    J: Traversal,
    TraversalItem<I>: PartialEq<TraversalItem<J>>,
{
    let guard1 = first1.handle().resolve()?;
    let guard2 = first2.handle().resolve()?;
    let mut left = I::elements(&*guard1, first1, last1)?;
    let mut right = J::elements(&*guard2, first2, last2)?;
    enter_span!(crate::tracing::AlgorithmTrace::running("equal", left.len()));
    let same = left.len() == right.len() && left.by_ref().zip(right.by_ref()).all(|(a, b)| a == b);
    I::settle(&left)?;
    J::settle(&right)?;
    Ok(same)
}

/// First positions at which the two ranges differ.
///
/// When one range is a prefix of the other, the result pairs the end of the
/// shorter one with the matching position in the longer one.
pub fn mismatch<I, J>(first1: &I, last1: &I, first2: &J, last2: &J) -> Result<(I, J)>
where
    I: Traversal,
    J: Traversal,
    TraversalItem<I>: PartialEq<TraversalItem<J>>,
{
    let guard1 = first1.handle().resolve()?;
    let guard2 = first2.handle().resolve()?;
    let mut left = I::elements(&*guard1, first1, last1)?;
    let mut right = J::elements(&*guard2, first2, last2)?;
    let common = left.len().min(right.len());
    let k = left
        .by_ref()
        .zip(right.by_ref())
        .position(|(a, b)| a != b)
        .unwrap_or(common);
    I::settle(&left)?;
    J::settle(&right)?;
    Ok((nth_position(first1, k)?, nth_position(first2, k)?))
}

/// Lexicographical ordering of two ranges, `None` if some pair of
/// elements is unordered.
pub fn lexicographical_ordering<I, J>(
    first1: &I,
    last1: &I,
    first2: &J,
    last2: &J,
) -> Result<Option<Ordering>>
where
    I: Traversal,
    J: Traversal,
    TraversalItem<I>: PartialOrd<TraversalItem<J>>,
{
    let guard1 = first1.handle().resolve()?;
    let guard2 = first2.handle().resolve()?;
    let mut left = I::elements(&*guard1, first1, last1)?;
    let mut right = J::elements(&*guard2, first2, last2)?;
    let ordering = loop {
        match (left.next(), right.next()) {
            (None, None) => break Some(Ordering::Equal),
            (None, Some(_)) => break Some(Ordering::Less),
            (Some(_), None) => break Some(Ordering::Greater),
            (Some(a), Some(b)) => match a.partial_cmp(b) {
                Some(Ordering::Equal) => {}
                other => break other,
            },
        }
    };
    I::settle(&left)?;
    J::settle(&right)?;
    Ok(ordering)
}

/// Whether the first range orders strictly before the second.
pub fn lexicographical_compare<I, J>(first1: &I, last1: &I, first2: &J, last2: &J) -> Result<bool>
where
    I: Traversal,
    J: Traversal,
    TraversalItem<I>: PartialOrd<TraversalItem<J>>,
{
    Ok(lexicographical_ordering(first1, last1, first2, last2)? == Some(Ordering::Less))
}

/// Start of the first occurrence of `[first2, last2)` inside
/// `[first1, last1)`.
///
/// An empty needle matches at `first1`; no match yields `last1`.
pub fn search<I, J>(first1: &I, last1: &I, first2: &J, last2: &J) -> Result<I>
where
    I: Traversal,
    J: Traversal,
    TraversalItem<I>: PartialEq<TraversalItem<J>>,
{
    let guard1 = first1.handle().resolve()?;
    let guard2 = first2.handle().resolve()?;
    let mut window = I::elements(&*guard1, first1, last1)?;
    let needle = J::elements(&*guard2, first2, last2)?;
    let (n, m) = (window.len(), needle.len());
    enter_span!(crate::tracing::AlgorithmTrace::running("search", n));
    if m == 0 {
        return Ok(first1.clone());
    }
    if m > n {
        return Ok(last1.clone());
    }
    for offset in 0..=(n - m) {
        let mut probe = window.clone();
        let mut pattern = needle.clone();
        let hit = probe.by_ref().zip(pattern.by_ref()).all(|(a, b)| a == b);
        I::settle(&probe)?;
        J::settle(&pattern)?;
        if hit {
            return nth_position(first1, offset);
        }
        window.next();
    }
    I::settle(&window)?;
    Ok(last1.clone())
}

/// Position of the first smallest element, or `last` for an empty range.
pub fn min_element<I>(first: &I, last: &I) -> Result<I>
where
    I: Traversal,
    TraversalItem<I>: Ord,
{
    extreme_element(first, last, Ordering::Less)
}

/// Position of the first largest element, or `last` for an empty range.
pub fn max_element<I>(first: &I, last: &I) -> Result<I>
where
    I: Traversal,
    TraversalItem<I>: Ord,
{
    extreme_element(first, last, Ordering::Greater)
}

fn extreme_element<I>(first: &I, last: &I, wanted: Ordering) -> Result<I>
where
    I: Traversal,
    TraversalItem<I>: Ord,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    let mut best: Option<(usize, &TraversalItem<I>)> = None;
    for (k, item) in elements.by_ref().enumerate() {
        match best {
            Some((_, current)) if item.cmp(current) != wanted => {}
            _ => best = Some((k, item)),
        }
    }
    I::settle(&elements)?;
    match best {
        Some((k, _)) => nth_position(first, k),
        None => Ok(last.clone()),
    }
}

/// Whether the range is in non-descending order.
pub fn is_sorted<I>(first: &I, last: &I) -> Result<bool>
where
    I: Traversal,
    TraversalItem<I>: PartialOrd,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    let mut previous: Option<&TraversalItem<I>> = None;
    let mut sorted = true;
    for item in elements.by_ref() {
        if previous.is_some_and(|p| item < p) {
            sorted = false;
            break;
        }
        previous = Some(item);
    }
    I::settle(&elements)?;
    Ok(sorted)
}

/// First position whose element is not less than `value`, in a range
/// sorted with respect to `value`.
pub fn lower_bound<I, T>(first: &I, last: &I, value: &T) -> Result<I>
where
    I: Traversal,
    T: ?Sized,
    TraversalItem<I>: PartialOrd<T>,
{
    let guard = first.handle().resolve()?;
    let elements = I::elements(&*guard, first, last)?;
    enter_span!(crate::tracing::AlgorithmTrace::running("lower_bound", elements.len()));
    let (mut low, mut size) = (0, elements.len());
    while size > 0 {
        let half = size / 2;
        let mid = low + half;
        let item = elements
            .clone()
            .nth(mid)
            .ok_or(Error::element_unavailable("Element vanished during binary search"))?;
        if item < value {
            low = mid + 1;
            size -= half + 1;
        } else {
            size = half;
        }
    }
    nth_position(first, low)
}

/// Collects `f` applied to every element.
pub fn transform<I, U, B, F>(first: &I, last: &I, mut f: F) -> Result<B>
where
    I: Traversal,
    F: FnMut(&TraversalItem<I>) -> U,
    B: FromIterator<U>,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    let collected = elements.by_ref().map(|item| f(item)).collect();
    I::settle(&elements)?;
    Ok(collected)
}

/// Clones the range into the front of `out`, returning the count.
///
/// Fails without writing anything when `out` is too short.
pub fn copy_to_slice<I>(first: &I, last: &I, out: &mut [TraversalItem<I>]) -> Result<usize>
where
    I: Traversal,
    TraversalItem<I>: Clone,
{
    let guard = first.handle().resolve()?;
    let mut elements = I::elements(&*guard, first, last)?;
    if out.len() < elements.len() {
        return Err(Error::capacity_mismatch("Destination slice is shorter than the range"));
    }
    let mut copied = 0;
    for (slot, item) in out.iter_mut().zip(elements.by_ref()) {
        slot.clone_from(item);
        copied += 1;
    }
    I::settle(&elements)?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundsCheckedIterator, FixedArray, StrongContiguousIterator};

    fn checked<const N: usize>(
        a: &[i32; N],
    ) -> (BoundsCheckedIterator<&[i32; N]>, BoundsCheckedIterator<&[i32; N]>) {
        (BoundsCheckedIterator::begin(a).unwrap(), BoundsCheckedIterator::end(a).unwrap())
    }

    #[test]
    fn test_find_family() {
        let a = [3, 1, 4, 1, 5];
        let (first, last) = checked(&a);
        assert_eq!(find(&first, &last, &1).unwrap().position(), 1);
        assert_eq!(rfind(&first, &last, &1).unwrap().position(), 3);
        assert_eq!(find(&first, &last, &9).unwrap(), last);
        assert_eq!(find_if(&first, &last, |x| *x > 3).unwrap().position(), 2);
        assert_eq!(rfind_if(&first, &last, |x| *x < 4).unwrap().position(), 3);
    }

    #[test]
    fn test_predicates_and_counts() {
        let a = [2, 4, 6];
        let (first, last) = checked(&a);
        assert!(all_of(&first, &last, |x| x % 2 == 0).unwrap());
        assert!(!any_of(&first, &last, |x| *x > 6).unwrap());
        assert!(none_of(&first, &last, |x| *x < 0).unwrap());
        assert_eq!(count_if(&first, &last, |x| *x >= 4).unwrap(), 2);
        assert!(all_of(&last, &last, |_| false).unwrap());
    }

    #[test]
    fn test_reversed_or_foreign_bounds_rejected() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let (first, last) = checked(&a);
        let (_, other_last) = checked(&b);
        assert!(find(&last, &first, &1).unwrap_err().is_range_error());
        assert_eq!(
            count(&first, &other_last, &1).unwrap_err().code,
            rampart_error::codes::TARGET_MISMATCH
        );
    }

    #[test]
    fn test_pairwise_algorithms() {
        let a = FixedArray::new([1, 2, 3, 4]);
        let b = [1, 2, 9];
        let (fa, la) = (StrongContiguousIterator::begin(&a), StrongContiguousIterator::end(&a));
        let (fb, lb) = checked(&b);
        assert!(!equal(&fa, &la, &fb, &lb).unwrap());
        let (ma, mb) = mismatch(&fa, &la, &fb, &lb).unwrap();
        assert_eq!((ma.position(), mb.position()), (2, 2));
        assert!(lexicographical_compare(&fa, &la, &fb, &lb).unwrap());
        assert_eq!(
            lexicographical_ordering(&fb, &lb, &fa, &la).unwrap(),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_search_and_bounds() {
        let hay = [1, 2, 3, 2, 3, 4];
        let needle = [2, 3, 4];
        let (fh, lh) = checked(&hay);
        let (fn_, ln) = checked(&needle);
        assert_eq!(search(&fh, &lh, &fn_, &ln).unwrap().position(), 3);
        assert_eq!(search(&fh, &lh, &ln, &ln).unwrap().position(), 0);
        assert_eq!(min_element(&fh, &lh).unwrap().position(), 0);
        assert_eq!(max_element(&fh, &lh).unwrap().position(), 5);
        assert!(!is_sorted(&fh, &lh).unwrap());
    }

    #[test]
    fn test_lower_bound_and_copy() {
        let a = [1, 3, 3, 5, 8];
        let first = StrongContiguousIterator::begin(&a);
        let last = StrongContiguousIterator::end(&a);
        assert!(is_sorted(&first, &last).unwrap());
        assert_eq!(lower_bound(&first, &last, &3).unwrap().position(), 1);
        assert_eq!(lower_bound(&first, &last, &9).unwrap(), last);

        let mut out = [0; 5];
        assert_eq!(copy_to_slice(&first, &last, &mut out).unwrap(), 5);
        assert_eq!(out, a);
        let mut short = [0; 2];
        assert!(copy_to_slice(&first, &last, &mut short).is_err());
        assert_eq!(short, [0, 0]);

        let doubled: std::vec::Vec<i32> = transform(&first, &last, |x| x * 2).unwrap();
        assert_eq!(doubled, [2, 6, 6, 10, 16]);
    }
}
