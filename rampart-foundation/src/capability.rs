// Rampart - rampart-foundation
// Module: Capability classification
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Compile-time capability classification.
//!
//! Every container and handle type is classified along four axes:
//!
//! | axis      | tags                                                          |
//! |-----------|---------------------------------------------------------------|
//! | ownership | [`Strong`], [`Weak`]                                          |
//! | structure | [`StaticStructure`], [`LockableStructure`], [`UnclassifiedStructure`] |
//! | sequence  | [`Contiguous`], [`NonContiguous`]                             |
//! | residency | [`ScopeBound`], [`Unbound`]                                   |
//!
//! Tags are zero-sized types used as associated types, so they appear in
//! trait bounds; each carries a `KIND` constant, so the `const fn`
//! predicates below can read them too. Containers declare structure and
//! sequence through [`RandomAccess`]; handles declare ownership and
//! residency through [`SequenceHandle`](crate::handle::SequenceHandle).
//! Nothing is enumerated: any type implementing the traits participates.

use core::cmp::Ordering;

use rampart_error::{check_index, Error, Result};

use crate::handle::SequenceHandle;

/// Ownership strength of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnershipKind {
    /// The handle keeps its target alive.
    Strong,
    /// The handle assumes, but does not guarantee, that its target is alive.
    Weak,
}

/// Structural stability of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    /// The shape can never change after construction.
    Static,
    /// The shape changes only under a structure lock.
    Lockable,
    /// Nothing is known about shape changes.
    Unclassified,
}

/// Memory layout of a container's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Elements are laid out as one slice.
    Contiguous,
    /// Elements may be split across storage.
    NonContiguous,
}

/// Whether a handle is tied to an enclosing scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidencyKind {
    /// Valid only within a borrow scope.
    ScopeBound,
    /// May be stored and returned freely.
    Unbound,
}

mod sealed {
    pub trait Sealed {}
}

/// Ownership axis tag.
pub trait OwnershipTag: sealed::Sealed + 'static {
    /// Runtime-readable value of the tag.
    const KIND: OwnershipKind;
}

/// Structure axis tag.
pub trait StructureTag: sealed::Sealed + 'static {
    /// Runtime-readable value of the tag.
    const KIND: StructureKind;
}

/// Sequence axis tag.
pub trait SequenceTag: sealed::Sealed + 'static {
    /// Runtime-readable value of the tag.
    const KIND: SequenceKind;
}

/// Residency axis tag.
pub trait ResidencyTag: sealed::Sealed + 'static {
    /// Runtime-readable value of the tag.
    const KIND: ResidencyKind;
}

macro_rules! capability_tag {
    ($(#[$meta:meta])* $name:ident: $axis:ident = $kind:ident::$variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl $axis for $name {
            const KIND: $kind = $kind::$variant;
        }
    };
}

capability_tag!(
    /// Keeps the target alive.
    Strong: OwnershipTag = OwnershipKind::Strong
);
capability_tag!(
    /// Resolves the target on every access and may find it gone.
    Weak: OwnershipTag = OwnershipKind::Weak
);
capability_tag!(
    /// Shape fixed at construction.
    StaticStructure: StructureTag = StructureKind::Static
);
capability_tag!(
    /// Shape changes only under a structure lock.
    LockableStructure: StructureTag = StructureKind::Lockable
);
capability_tag!(
    /// Shape may change at any time.
    UnclassifiedStructure: StructureTag = StructureKind::Unclassified
);
capability_tag!(
    /// One slice of elements.
    Contiguous: SequenceTag = SequenceKind::Contiguous
);
capability_tag!(
    /// Possibly split storage.
    NonContiguous: SequenceTag = SequenceKind::NonContiguous
);
capability_tag!(
    /// Lives inside a borrow scope.
    ScopeBound: ResidencyTag = ResidencyKind::ScopeBound
);
capability_tag!(
    /// Free to be stored and returned.
    Unbound: ResidencyTag = ResidencyKind::Unbound
);

/// A container with random access to its elements.
pub trait RandomAccess {
    /// Element type
    type Item;
    /// Structure classification
    type Structure: StructureTag;
    /// Sequence classification
    type Sequence: SequenceTag;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Whether the container has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container whose elements form one slice.
pub trait ContiguousAccess: RandomAccess<Sequence = Contiguous> {
    /// All elements as a slice.
    fn as_slice(&self) -> &[Self::Item];
}

/// A container with mutable element access and in-place range kernels.
///
/// The kernels have checked defaults built on `get`/`get_mut`/
/// `swap_elements`. Static contiguous containers override them with slice
/// operations.
pub trait RandomAccessMut: RandomAccess {
    /// Mutable element at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Swaps the elements at `a` and `b`.
    fn swap_elements(&mut self, a: usize, b: usize) -> Result<()>;

    /// Sorts `[start, end)` by `compare`. Not guaranteed to be stable.
    fn sort_range_by<F>(&mut self, start: usize, end: usize, mut compare: F) -> Result<()>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        check_range(start, end, self.len())?;
        for i in (start + 1)..end {
            let mut j = i;
            while j > start {
                let ordering = match (self.get(j - 1), self.get(j)) {
                    (Some(a), Some(b)) => compare(a, b),
                    _ => return Err(Error::element_unavailable("Element vanished during sort")),
                };
                if ordering != Ordering::Greater {
                    break;
                }
                self.swap_elements(j - 1, j)?;
                j -= 1;
            }
        }
        Ok(())
    }

    /// Reverses `[start, end)`.
    fn reverse_range(&mut self, start: usize, end: usize) -> Result<()> {
        check_range(start, end, self.len())?;
        let (mut lo, mut hi) = (start, end);
        while lo + 1 < hi {
            hi -= 1;
            self.swap_elements(lo, hi)?;
            lo += 1;
        }
        Ok(())
    }

    /// Applies `f` to every element of `[start, end)`.
    fn for_each_mut_in_range<F>(&mut self, start: usize, end: usize, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Self::Item),
    {
        check_range(start, end, self.len())?;
        for index in start..end {
            let item = self
                .get_mut(index)
                .ok_or(Error::element_unavailable("Element vanished during traversal"))?;
            f(item);
        }
        Ok(())
    }
}

/// Validates `start <= end <= len`.
pub(crate) const fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end {
        return Err(Error::reversed_range("Range start is after its end"));
    }
    if end > len {
        return Err(Error::position_out_of_range("Range end is past the container end"));
    }
    Ok(())
}

/// `[start, end)` of `slice`, checked.
pub(crate) fn slice_range_mut<T>(slice: &mut [T], start: usize, end: usize) -> Result<&mut [T]> {
    check_range(start, end, slice.len())?;
    slice
        .get_mut(start..end)
        .ok_or(Error::position_out_of_range("Range end is past the container end"))
}

pub(crate) fn slice_swap<T>(slice: &mut [T], a: usize, b: usize) -> Result<()> {
    check_index(a, slice.len(), "First swap index past end")?;
    check_index(b, slice.len(), "Second swap index past end")?;
    slice.swap(a, b);
    Ok(())
}

/// Implements the container traits for a static, contiguous type that
/// derefs to a slice through the given accessors.
macro_rules! static_contiguous {
    ([$($generics:tt)*] $ty:ty, $item:ty, |$s:ident| $slice:expr, |$m:ident| $slice_mut:expr) => {
        impl<$($generics)*> RandomAccess for $ty {
            type Item = $item;
            type Structure = StaticStructure;
            type Sequence = Contiguous;

            #[inline]
            fn len(&self) -> usize {
                let $s = self;
                <[$item]>::len($slice)
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&$item> {
                let $s = self;
                <[$item]>::get($slice, index)
            }
        }

        impl<$($generics)*> ContiguousAccess for $ty {
            #[inline]
            fn as_slice(&self) -> &[$item] {
                let $s = self;
                $slice
            }
        }

        impl<$($generics)*> RandomAccessMut for $ty {
            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut $item> {
                let $m = self;
                <[$item]>::get_mut($slice_mut, index)
            }

            fn swap_elements(&mut self, a: usize, b: usize) -> Result<()> {
                let $m = self;
                slice_swap($slice_mut, a, b)
            }

            fn sort_range_by<F>(&mut self, start: usize, end: usize, compare: F) -> Result<()>
            where
                F: FnMut(&$item, &$item) -> Ordering,
            {
                let $m = self;
                slice_range_mut($slice_mut, start, end)?.sort_unstable_by(compare);
                Ok(())
            }

            fn reverse_range(&mut self, start: usize, end: usize) -> Result<()> {
                let $m = self;
                slice_range_mut($slice_mut, start, end)?.reverse();
                Ok(())
            }

            fn for_each_mut_in_range<F>(&mut self, start: usize, end: usize, f: F) -> Result<()>
            where
                F: FnMut(&mut $item),
            {
                let $m = self;
                slice_range_mut($slice_mut, start, end)?.iter_mut().for_each(f);
                Ok(())
            }
        }
    };
}

static_contiguous!([T] [T], T, |s| s, |m| m);
static_contiguous!([T, const N: usize] [T; N], T, |s| s.as_slice(), |m| m.as_mut_slice());

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::{collections::VecDeque, vec::Vec};

    use super::*;

    impl<T> RandomAccess for Vec<T> {
        type Item = T;
        type Structure = UnclassifiedStructure;
        type Sequence = Contiguous;

        #[inline]
        fn len(&self) -> usize {
            Vec::len(self)
        }

        #[inline]
        fn get(&self, index: usize) -> Option<&T> {
            <[T]>::get(self, index)
        }
    }

    impl<T> ContiguousAccess for Vec<T> {
        #[inline]
        fn as_slice(&self) -> &[T] {
            Vec::as_slice(self)
        }
    }

    // Vec keeps the checked kernels: its shape is not statically known.
    impl<T> RandomAccessMut for Vec<T> {
        #[inline]
        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            <[T]>::get_mut(self, index)
        }

        fn swap_elements(&mut self, a: usize, b: usize) -> Result<()> {
            slice_swap(self, a, b)
        }
    }

    impl<T> RandomAccess for VecDeque<T> {
        type Item = T;
        type Structure = UnclassifiedStructure;
        type Sequence = NonContiguous;

        #[inline]
        fn len(&self) -> usize {
            VecDeque::len(self)
        }

        #[inline]
        fn get(&self, index: usize) -> Option<&T> {
            VecDeque::get(self, index)
        }
    }

    impl<T> RandomAccessMut for VecDeque<T> {
        #[inline]
        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            VecDeque::get_mut(self, index)
        }

        fn swap_elements(&mut self, a: usize, b: usize) -> Result<()> {
            check_index(a, self.len(), "First swap index past end")?;
            check_index(b, self.len(), "Second swap index past end")?;
            self.swap(a, b);
            Ok(())
        }
    }
}

/// Whether `H` keeps its target alive.
#[must_use]
pub const fn is_strong<H: SequenceHandle>() -> bool {
    matches!(<H::Ownership as OwnershipTag>::KIND, OwnershipKind::Strong)
}

/// Whether the target of `H` has a shape fixed at construction.
#[must_use]
pub const fn is_static_structure<H: SequenceHandle>() -> bool {
    matches!(
        <<H::Target as RandomAccess>::Structure as StructureTag>::KIND,
        StructureKind::Static
    )
}

/// Whether the target of `H` stores its elements as one slice.
#[must_use]
pub const fn is_contiguous_sequence<H: SequenceHandle>() -> bool {
    matches!(
        <<H::Target as RandomAccess>::Sequence as SequenceTag>::KIND,
        SequenceKind::Contiguous
    )
}

/// Whether `H` is confined to a borrow scope.
#[must_use]
pub const fn is_scope_bound<H: SequenceHandle>() -> bool {
    matches!(<H::Residency as ResidencyTag>::KIND, ResidencyKind::ScopeBound)
}

/// Whether `H` satisfies the strong, static, contiguous triple that
/// [`FastPathEligible`](crate::FastPathEligible) proves in the type system.
#[must_use]
pub const fn is_fast_path_eligible<H: SequenceHandle>() -> bool {
    is_strong::<H>() && is_static_structure::<H>() && is_contiguous_sequence::<H>()
}

/// Runtime-inspectable summary of a handle type's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Ownership axis
    pub ownership: OwnershipKind,
    /// Structure axis of the target
    pub structure: StructureKind,
    /// Sequence axis of the target
    pub sequence: SequenceKind,
    /// Residency axis
    pub residency: ResidencyKind,
}

impl Capabilities {
    /// Classification of handle type `H`.
    #[must_use]
    pub const fn of<H: SequenceHandle>() -> Self {
        Self {
            ownership: <H::Ownership as OwnershipTag>::KIND,
            structure: <<H::Target as RandomAccess>::Structure as StructureTag>::KIND,
            sequence: <<H::Target as RandomAccess>::Sequence as SequenceTag>::KIND,
            residency: <H::Residency as ResidencyTag>::KIND,
        }
    }

    /// Whether this classification admits the fast path.
    #[must_use]
    pub const fn is_fast_path_eligible(&self) -> bool {
        matches!(
            (self.ownership, self.structure, self.sequence),
            (OwnershipKind::Strong, StructureKind::Static, SequenceKind::Contiguous)
        )
    }
}
