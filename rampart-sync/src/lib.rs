// Rampart - rampart-sync
// Module: Rampart Synchronization Primitives
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![doc = "no_std structural-reentrancy lock and spin lock for the Rampart project."]
#![warn(clippy::missing_panics_doc)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod prelude;
pub mod raw;
pub mod structure;

#[cfg(kani)]
mod verify;

pub use raw::{with_exclusive, RawExclusive, SpinLock};
pub use structure::{StructureGuard, StructureLock};
