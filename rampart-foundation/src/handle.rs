// Rampart - rampart-foundation
// Module: Sequence handles
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Handles: the "pointer" half of an iterator.
//!
//! A [`SequenceHandle`] names a target container and declares how it holds
//! on to it. Borrows and `Rc`/`Arc` are strong; `Weak` pointers are weak and
//! re-resolve their target on every access.

use core::ops::Deref;

use rampart_error::Result;

use crate::capability::{OwnershipTag, RandomAccess, ResidencyTag, ScopeBound, Strong};

/// Element type reached through handle `H`.
pub type ItemOf<H> = <<H as SequenceHandle>::Target as RandomAccess>::Item;

/// Identity of a handle's target, used to reject mixing iterators of
/// different containers.
///
/// Derived from the target's address. Distinct zero-sized targets may share
/// an address and therefore an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(usize);

impl TargetId {
    /// Identity of `target`.
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized>(target: &T) -> Self {
        Self::from_ptr(target)
    }

    /// Identity of the value behind `ptr`. The pointer is never dereferenced.
    #[inline]
    #[must_use]
    pub fn from_ptr<T: ?Sized>(ptr: *const T) -> Self {
        TargetId(ptr.cast::<()>().addr())
    }
}

/// A handle to a random-access target.
pub trait SequenceHandle {
    /// The container this handle refers to.
    type Target: RandomAccess + ?Sized;
    /// Ownership classification.
    type Ownership: OwnershipTag;
    /// Residency classification.
    type Residency: ResidencyTag;
    /// What `resolve` hands out; keeps the target reachable while alive.
    type Guard<'a>: Deref<Target = Self::Target>
    where
        Self: 'a;

    /// Whether an iterator holding this handle may be reassigned to a
    /// different target.
    const RESEATABLE: bool = true;

    /// Reaches the target.
    ///
    /// Fails with a dangling-target error if a weak handle's target is gone.
    fn resolve(&self) -> Result<Self::Guard<'_>>;

    /// Identity of the target, stable even after a weak target is dropped.
    fn target_id(&self) -> TargetId;
}

/// A handle that keeps its target alive, so reaching it cannot fail.
pub trait StrongHandle: SequenceHandle<Ownership = Strong> {
    /// The target.
    fn target(&self) -> &Self::Target;
}

impl<'c, C: RandomAccess + ?Sized> SequenceHandle for &'c C {
    type Target = C;
    type Ownership = Strong;
    type Residency = ScopeBound;
    type Guard<'a>
        = &'a C
    where
        Self: 'a;

    #[inline]
    fn resolve(&self) -> Result<&C> {
        Ok(*self)
    }

    #[inline]
    fn target_id(&self) -> TargetId {
        TargetId::of(*self)
    }
}

impl<C: RandomAccess + ?Sized> StrongHandle for &C {
    #[inline]
    fn target(&self) -> &C {
        self
    }
}

#[cfg(feature = "alloc")]
mod shared {
    use alloc::{
        rc::{Rc, Weak as RcWeak},
        sync::{Arc, Weak as ArcWeak},
    };

    use rampart_error::Error;

    use super::*;
    use crate::capability::{Unbound, Weak};

    impl<C: RandomAccess + ?Sized> SequenceHandle for Rc<C> {
        type Target = C;
        type Ownership = Strong;
        type Residency = Unbound;
        type Guard<'a>
            = &'a C
        where
            Self: 'a;

        #[inline]
        fn resolve(&self) -> Result<&C> {
            Ok(&**self)
        }

        #[inline]
        fn target_id(&self) -> TargetId {
            TargetId::of(&**self)
        }
    }

    impl<C: RandomAccess + ?Sized> StrongHandle for Rc<C> {
        #[inline]
        fn target(&self) -> &C {
            self
        }
    }

    impl<C: RandomAccess + ?Sized> SequenceHandle for Arc<C> {
        type Target = C;
        type Ownership = Strong;
        type Residency = Unbound;
        type Guard<'a>
            = &'a C
        where
            Self: 'a;

        #[inline]
        fn resolve(&self) -> Result<&C> {
            Ok(&**self)
        }

        #[inline]
        fn target_id(&self) -> TargetId {
            TargetId::of(&**self)
        }
    }

    impl<C: RandomAccess + ?Sized> StrongHandle for Arc<C> {
        #[inline]
        fn target(&self) -> &C {
            self
        }
    }

    impl<C: RandomAccess> SequenceHandle for RcWeak<C> {
        type Target = C;
        type Ownership = Weak;
        type Residency = Unbound;
        type Guard<'a>
            = Rc<C>
        where
            Self: 'a;

        fn resolve(&self) -> Result<Rc<C>> {
            self.upgrade().ok_or(Error::DANGLING)
        }

        #[inline]
        fn target_id(&self) -> TargetId {
            TargetId::from_ptr(self.as_ptr())
        }
    }

    impl<C: RandomAccess> SequenceHandle for ArcWeak<C> {
        type Target = C;
        type Ownership = Weak;
        type Residency = Unbound;
        type Guard<'a>
            = Arc<C>
        where
            Self: 'a;

        fn resolve(&self) -> Result<Arc<C>> {
            self.upgrade().ok_or(Error::DANGLING)
        }

        #[inline]
        fn target_id(&self) -> TargetId {
            TargetId::from_ptr(self.as_ptr())
        }
    }
}
