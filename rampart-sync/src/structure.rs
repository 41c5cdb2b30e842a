// Rampart - rampart-sync
// Module: Structure Lock
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Structural-reentrancy guard owned by a container.
//!
//! A container acquires its [`StructureLock`] for every operation that could
//! invalidate outstanding observers (construction, fill, swap, assignment).
//! The lock never waits: a second acquisition is a reentrancy bug and is
//! reported as an error at the nested call site.
//!
//! Borrowing already stops safe code from destroying a container under a
//! live observer. The lock catches what borrowing cannot see, such as a
//! guard leaked with `mem::forget` or a raw acquisition by an access-control
//! collaborator that never released.

use crate::prelude::{fmt, AtomicBool, Error, Ordering, Result};
use crate::raw::RawExclusive;

/// Non-reentrant structure guard, associated 1:1 with a container.
#[derive(Default)]
pub struct StructureLock {
    held: AtomicBool,
}

/// Holds a [`StructureLock`] until dropped.
#[clippy::has_significant_drop]
#[must_use = "the structure is unlocked as soon as the guard is dropped"]
pub struct StructureGuard<'a> {
    lock: &'a StructureLock,
}

impl StructureLock {
    /// Creates an unheld lock.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { held: AtomicBool::new(false) }
    }

    /// Acquires the lock for one structural operation.
    ///
    /// # Errors
    ///
    /// Returns a structural-reentrancy error if the lock is already held.
    #[inline]
    pub fn acquire(&self) -> Result<StructureGuard<'_>> {
        if self.raw_try_acquire() {
            Ok(StructureGuard { lock: self })
        } else {
            Err(Error::STRUCTURE_LOCKED)
        }
    }

    /// Whether a structural operation (or a collaborator) holds the lock.
    #[inline]
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    /// The non-failing "can the owner safely go away" check.
    #[inline]
    #[must_use]
    pub fn can_release_owner(&self) -> bool {
        !self.is_held()
    }

    /// Destructor-time check.
    ///
    /// Returning from a destructor while the structure is still held would
    /// leave an observer with nothing to observe and no way to be told, so
    /// the process is terminated instead.
    ///
    /// # Panics
    ///
    /// In `no_std` builds there is no process to abort, so a held lock
    /// panics.
    #[inline]
    pub fn ensure_released(&self) {
        if self.is_held() {
            held_at_destruction();
        }
    }
}

#[cold]
#[inline(never)]
#[cfg(feature = "std")]
fn held_at_destruction() -> ! {
    std::eprintln!(
        "{}",
        Error::structure_held_at_destruction("Container destroyed while its structure lock is held")
    );
    std::process::abort()
}

#[cold]
#[inline(never)]
#[cfg(not(feature = "std"))]
#[allow(clippy::panic)]
fn held_at_destruction() -> ! {
    panic!("Container destroyed while its structure lock is held")
}

impl RawExclusive for StructureLock {
    #[inline]
    fn raw_acquire(&self) {
        while !self.raw_try_acquire() {
            core::hint::spin_loop();
        }
    }

    #[inline]
    fn raw_try_acquire(&self) -> bool {
        self.held.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed).is_ok()
    }

    #[inline]
    fn raw_release(&self) {
        self.held.store(false, Ordering::Release);
    }

    #[inline]
    fn raw_is_held(&self) -> bool {
        self.is_held()
    }

    fn contention_error(&self) -> Error {
        Error::STRUCTURE_LOCKED
    }
}

impl fmt::Debug for StructureLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureLock").field("held", &self.is_held()).finish()
    }
}

impl Drop for StructureGuard<'_> {
    #[inline]
    fn drop(&mut self) {
        self.lock.raw_release();
    }
}

impl fmt::Debug for StructureGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureGuard").finish_non_exhaustive()
    }
}
