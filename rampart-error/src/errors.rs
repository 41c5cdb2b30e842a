// Rampart - rampart-error
// Module: Rampart Error Types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error type for the bounds-checked containers, iterators and
/// sections.
use core::fmt;

use crate::{codes, kinds};

/// `Error` categories for Rampart operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Index, position or range outside its valid bounds
    Range       = 1,
    /// Dereference of an invalid position or a vanished target
    Dereference = 2,
    /// Structural-reentrancy violations
    Structure   = 3,
    /// Errors reported by a lock collaborator
    Concurrency = 5,
}

/// Rampart `Error` type
///
/// Errors are plain values: raised at the operation that detects the
/// violation and never batched or deferred.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Dereference of the one-past-end position
    pub const END_MARKER: Self = Self::new(
        ErrorCategory::Dereference,
        codes::END_MARKER_DEREFERENCE,
        "Dereference of end marker",
    );
    /// Weak handle outlived its target
    pub const DANGLING: Self = Self::new(
        ErrorCategory::Dereference,
        codes::DANGLING_TARGET,
        "Target of weak handle no longer exists",
    );
    /// Structural operation attempted while the structure is locked
    pub const STRUCTURE_LOCKED: Self = Self::new(
        ErrorCategory::Structure,
        codes::STRUCTURE_REENTRANCY,
        "Structure lock already held",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    // Factory methods

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::INDEX_OUT_OF_RANGE, message)
    }

    /// Create an iterator position out of range error
    #[must_use]
    pub const fn position_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::POSITION_OUT_OF_RANGE, message)
    }

    /// Create an invalid subsection error
    #[must_use]
    pub const fn invalid_subsection(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::INVALID_SUBSECTION, message)
    }

    /// Create a section count error
    #[must_use]
    pub const fn section_count_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::SECTION_COUNT_OUT_OF_RANGE, message)
    }

    /// Create a target mismatch error
    #[must_use]
    pub const fn target_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::TARGET_MISMATCH, message)
    }

    /// Create a rejected reseat error
    #[must_use]
    pub const fn reseat_rejected(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::RESEAT_REJECTED, message)
    }

    /// Create an empty container error
    #[must_use]
    pub const fn empty_container(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::EMPTY_CONTAINER, message)
    }

    /// Create a capacity mismatch error
    #[must_use]
    pub const fn capacity_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::CAPACITY_MISMATCH, message)
    }

    /// Create a reversed range error
    #[must_use]
    pub const fn reversed_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::REVERSED_RANGE, message)
    }

    /// Create a position overflow error
    #[must_use]
    pub const fn position_overflow(message: &'static str) -> Self {
        Self::new(ErrorCategory::Range, codes::POSITION_OVERFLOW, message)
    }

    /// Create an end marker dereference error
    #[must_use]
    pub const fn end_marker_dereference(message: &'static str) -> Self {
        Self::new(ErrorCategory::Dereference, codes::END_MARKER_DEREFERENCE, message)
    }

    /// Create a dangling target error
    #[must_use]
    pub const fn dangling_target(message: &'static str) -> Self {
        Self::new(ErrorCategory::Dereference, codes::DANGLING_TARGET, message)
    }

    /// Create an element unavailable error
    #[must_use]
    pub const fn element_unavailable(message: &'static str) -> Self {
        Self::new(ErrorCategory::Dereference, codes::ELEMENT_UNAVAILABLE, message)
    }

    /// Create a structural reentrancy error
    #[must_use]
    pub const fn structure_reentrancy(message: &'static str) -> Self {
        Self::new(ErrorCategory::Structure, codes::STRUCTURE_REENTRANCY, message)
    }

    /// Create a destruction-with-holder error. Only ever logged, never
    /// returned: the condition is fatal.
    #[must_use]
    pub const fn structure_held_at_destruction(message: &'static str) -> Self {
        Self::new(ErrorCategory::Structure, codes::STRUCTURE_HELD_AT_DESTRUCTION, message)
    }

    /// Create a contended lock error
    #[must_use]
    pub const fn lock_contended(message: &'static str) -> Self {
        Self::new(ErrorCategory::Concurrency, codes::LOCK_CONTENDED, message)
    }

    /// Check if this is a range error
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        self.category == ErrorCategory::Range
    }

    /// Check if this is a dereference error
    #[must_use]
    pub fn is_dereference_error(&self) -> bool {
        self.category == ErrorCategory::Dereference
    }

    /// Check if this is a structure error
    #[must_use]
    pub fn is_structure_error(&self) -> bool {
        self.category == ErrorCategory::Structure
    }

    /// Check if this is a concurrency error
    #[must_use]
    pub fn is_concurrency_error(&self) -> bool {
        self.category == ErrorCategory::Concurrency
    }

    /// Whether the caller can continue after this error.
    ///
    /// Everything except destruction with an outstanding holder is
    /// recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.code != codes::STRUCTURE_HELD_AT_DESTRUCTION
    }

    /// Checks that the code lies in the range reserved for the category.
    #[must_use]
    pub const fn validate_integrity(&self) -> bool {
        let valid_range = match self.category {
            ErrorCategory::Range => self.code >= 1000 && self.code < 2000,
            ErrorCategory::Dereference => self.code >= 2000 && self.code < 3000,
            ErrorCategory::Structure => self.code >= 3000 && self.code < 4000,
            ErrorCategory::Concurrency => self.code >= 5000 && self.code < 6000,
        };
        valid_range && !self.message.is_empty()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04}] {}", self.category, self.code, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// -- From<kinds::X> for Error implementations --
impl From<kinds::OutOfRangeError> for Error {
    fn from(e: kinds::OutOfRangeError) -> Self {
        Self::index_out_of_range(e.0)
    }
}

impl From<kinds::InvalidDereferenceError> for Error {
    fn from(_e: kinds::InvalidDereferenceError) -> Self {
        Self::END_MARKER
    }
}

impl From<kinds::StructureLockedError> for Error {
    fn from(_e: kinds::StructureLockedError) -> Self {
        Self::STRUCTURE_LOCKED
    }
}

impl From<kinds::TargetMismatchError> for Error {
    fn from(_e: kinds::TargetMismatchError) -> Self {
        Self::target_mismatch("Iterators refer to different targets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let error = Error::index_out_of_range("index past end");
        assert_eq!(format!("{error}"), "[Range][E1000] index past end");
        let fatal = Error::structure_held_at_destruction("held");
        assert_eq!(format!("{fatal}"), "[Structure][E3001] held");
    }

    #[test]
    fn test_factory_categories() {
        assert!(Error::position_out_of_range("x").is_range_error());
        assert!(Error::dangling_target("x").is_dereference_error());
        assert!(Error::structure_reentrancy("x").is_structure_error());
        assert!(Error::lock_contended("x").is_concurrency_error());
    }

    #[test]
    fn test_integrity_ranges() {
        assert!(Error::END_MARKER.validate_integrity());
        assert!(Error::STRUCTURE_LOCKED.validate_integrity());
        let bogus = Error::new(ErrorCategory::Range, codes::DANGLING_TARGET, "wrong range");
        assert!(!bogus.validate_integrity());
    }

    #[test]
    fn test_recoverability() {
        assert!(Error::STRUCTURE_LOCKED.is_recoverable());
        assert!(!Error::structure_held_at_destruction("fatal").is_recoverable());
    }
}
