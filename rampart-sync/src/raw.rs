// Rampart - rampart-sync
// Module: Raw exclusive-lock interface
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The opaque mutual-exclusion interface shared with access-control layers.
//!
//! A container's [`StructureLock`](crate::StructureLock) and any external
//! lock (for example [`SpinLock`]) speak the same three-call protocol, so a
//! collaborator can serialize structural operations without knowing which
//! concrete lock it holds.

use crate::prelude::{AtomicBool, Error, Ordering, Result};

/// Acquire / try-acquire / release, with no data attached.
///
/// Implementations must make `raw_release` a no-op-safe operation: releasing
/// an unheld lock leaves it unheld.
pub trait RawExclusive {
    /// Acquires the lock, spinning until it is available.
    fn raw_acquire(&self);

    /// Acquires the lock if it is free. Returns `true` on success.
    fn raw_try_acquire(&self) -> bool;

    /// Releases the lock. Always succeeds.
    fn raw_release(&self);

    /// Whether the lock is currently held by anyone.
    fn raw_is_held(&self) -> bool;

    /// The error reported when `raw_try_acquire` fails inside
    /// [`with_exclusive`].
    fn contention_error(&self) -> Error {
        Error::lock_contended("Exclusive lock already held")
    }
}

/// Runs `f` while holding `lock`, without ever blocking.
///
/// # Errors
///
/// Returns the lock's [`RawExclusive::contention_error`] if it is already
/// held.
pub fn with_exclusive<L, R>(lock: &L, f: impl FnOnce() -> R) -> Result<R>
where
    L: RawExclusive + ?Sized,
{
    if !lock.raw_try_acquire() {
        return Err(lock.contention_error());
    }
    let result = f();
    lock.raw_release();
    Ok(result)
}

/// A data-less, non-reentrant spinlock.
///
/// WARNING: It does not handle contention well (it just spins) and has no
/// poisoning. It exists as the minimal collaborator lock.
#[derive(Debug, Default)]
pub struct SpinLock {
    locked: AtomicBool,
}

impl SpinLock {
    /// Creates an unlocked spinlock.
    #[must_use]
    pub const fn new() -> Self {
        Self { locked: AtomicBool::new(false) }
    }
}

impl RawExclusive for SpinLock {
    #[inline]
    fn raw_acquire(&self) {
        // Acquire on success orders the critical section after the lock.
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            core::hint::spin_loop();
        }
    }

    #[inline]
    fn raw_try_acquire(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    #[inline]
    fn raw_release(&self) {
        self.locked.store(false, Ordering::Release);
    }

    #[inline]
    fn raw_is_held(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}
