// Rampart - rampart-error
// Module: Rampart Error Codes
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for rampart

// Range error codes (1000-1999)
/// Index outside `[0, len)`
pub const INDEX_OUT_OF_RANGE: u16 = 1000;
/// Iterator position moved outside `[0, size]`
pub const POSITION_OUT_OF_RANGE: u16 = 1001;
/// Subsection start beyond the section length
pub const INVALID_SUBSECTION: u16 = 1002;
/// Section count exceeds the elements reachable from its start
pub const SECTION_COUNT_OUT_OF_RANGE: u16 = 1003;
/// Two iterators over different targets were used as one range
pub const TARGET_MISMATCH: u16 = 1004;
/// Non-reseatable handle reassigned to a different target
pub const RESEAT_REJECTED: u16 = 1005;
/// Empty container has no front or back element
pub const EMPTY_CONTAINER: u16 = 1006;
/// Initializer length does not match the fixed capacity
pub const CAPACITY_MISMATCH: u16 = 1007;
/// Range bounds are reversed (`first > last`)
pub const REVERSED_RANGE: u16 = 1008;
/// Arithmetic on a position overflowed
pub const POSITION_OVERFLOW: u16 = 1009;

// Dereference error codes (2000-2999)
/// End marker dereferenced
pub const END_MARKER_DEREFERENCE: u16 = 2000;
/// Weak handle target no longer exists
pub const DANGLING_TARGET: u16 = 2001;
/// Element vanished between the range proof and the access
pub const ELEMENT_UNAVAILABLE: u16 = 2002;

// Structure error codes (3000-3999)
/// Structural operation attempted while the structure lock is held
pub const STRUCTURE_REENTRANCY: u16 = 3000;
/// Container destroyed with an outstanding lock holder
pub const STRUCTURE_HELD_AT_DESTRUCTION: u16 = 3001;

// Concurrency error codes (5000-5999)
/// Lock could not be acquired without blocking
pub const LOCK_CONTENDED: u16 = 5000;
