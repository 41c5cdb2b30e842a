// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Structure lock behaviour across threads.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::thread;

use rampart_error::ErrorCategory;
use rampart_sync::{RawExclusive, StructureLock};

#[test]
fn test_at_most_one_structural_holder_across_threads() {
    let lock = Arc::new(StructureLock::new());
    let inside = Arc::new(AtomicUsize::new(0));
    let successes = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lock = Arc::clone(&lock);
            let inside = Arc::clone(&inside);
            let successes = Arc::clone(&successes);
            thread::spawn(move || {
                for _ in 0..200 {
                    if let Ok(_guard) = lock.acquire() {
                        assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0);
                        inside.fetch_sub(1, Ordering::SeqCst);
                        successes.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(successes.load(Ordering::Relaxed) > 0);
    assert!(!lock.is_held());
}

#[test]
fn test_forgotten_guard_keeps_lock_held() {
    let lock = StructureLock::new();
    std::mem::forget(lock.acquire().unwrap());
    assert!(lock.is_held());
    assert_eq!(lock.acquire().unwrap_err().category, ErrorCategory::Structure);
    lock.raw_release();
    lock.ensure_released();
}
