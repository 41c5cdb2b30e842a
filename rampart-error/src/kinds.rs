// Rampart - rampart-error
// Module: Rampart Error Kinds
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Zero-sized or near zero-sized error kinds.
//!
//! Kinds are convenient at call sites that want a distinct type for one
//! failure mode; all of them convert into [`crate::Error`] with `?`.

use core::fmt::{self, Display};

/// Index or position outside its valid range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError(pub &'static str);

impl Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Out of range: {}", self.0)
    }
}

/// Dereference of an end marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDereferenceError;

impl Display for InvalidDereferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid dereference")
    }
}

/// Structural operation attempted while the structure lock is held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureLockedError;

impl Display for StructureLockedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Structure locked")
    }
}

/// Two iterators that should share a target do not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetMismatchError;

impl Display for TargetMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target mismatch")
    }
}

/// Creates an [`OutOfRangeError`]
#[must_use]
pub const fn out_of_range_error(message: &'static str) -> OutOfRangeError {
    OutOfRangeError(message)
}

/// Creates an [`InvalidDereferenceError`]
#[must_use]
pub const fn invalid_dereference_error() -> InvalidDereferenceError {
    InvalidDereferenceError
}

/// Creates a [`StructureLockedError`]
#[must_use]
pub const fn structure_locked_error() -> StructureLockedError {
    StructureLockedError
}

/// Creates a [`TargetMismatchError`]
#[must_use]
pub const fn target_mismatch_error() -> TargetMismatchError {
    TargetMismatchError
}
