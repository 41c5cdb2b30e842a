//! Formal verification for the structure lock and spin lock using Kani.
//!
//! These proofs only run with Kani and are isolated from normal compilation
//! and testing.

#[cfg(any(doc, kani))]
pub mod kani_verification {
    use crate::*;

    /// A second structural acquisition fails while the first guard lives.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_structure_lock_non_reentrant() {
        let lock = StructureLock::new();
        let first = lock.acquire();
        assert!(first.is_ok());
        assert!(lock.acquire().is_err());
        drop(first);
        assert!(!lock.is_held());
        assert!(lock.acquire().is_ok());
    }

    /// A raw holder and a structural guard exclude each other.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_raw_and_guard_exclusive() {
        let lock = StructureLock::new();
        let raw_first: bool = kani::any();
        if raw_first {
            assert!(lock.raw_try_acquire());
            assert!(lock.acquire().is_err());
            lock.raw_release();
        } else {
            let guard = lock.acquire();
            assert!(guard.is_ok());
            assert!(!lock.raw_try_acquire());
        }
        assert!(!lock.is_held());
    }

    /// The spin lock admits one holder at a time.
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_spin_lock_exclusive() {
        let lock = SpinLock::new();
        assert!(lock.raw_try_acquire());
        assert!(!lock.raw_try_acquire());
        lock.raw_release();
        assert!(!lock.raw_is_held());
    }
}

#[cfg(kani)]
pub use kani_verification::*;
