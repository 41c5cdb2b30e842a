// Rampart - rampart-error
// Module: Rampart Error Helpers
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common bounds-check patterns.

use crate::{Error, Result};

/// Checks `index < len`, the element-access bound.
///
/// # Errors
///
/// Returns an index-out-of-range error naming `what` when the check fails.
#[inline]
pub const fn check_index(index: usize, len: usize, what: &'static str) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::index_out_of_range(what))
    }
}

/// Checks `position <= len`, the iterator-position bound that admits the
/// end marker.
///
/// # Errors
///
/// Returns a position-out-of-range error naming `what` when the check fails.
#[inline]
pub const fn check_position(position: usize, len: usize, what: &'static str) -> Result<()> {
    if position <= len {
        Ok(())
    } else {
        Err(Error::position_out_of_range(what))
    }
}

/// Applies a signed offset to a position without wrapping.
///
/// # Errors
///
/// Returns a position-overflow error when the result would leave `usize`.
#[inline]
pub const fn offset_position(position: usize, offset: isize) -> Result<usize> {
    match position.checked_add_signed(offset) {
        Some(p) => Ok(p),
        None => Err(Error::position_overflow("Position arithmetic overflowed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_bounds() {
        assert!(check_index(0, 1, "i").is_ok());
        assert!(check_index(1, 1, "i").is_err());
        assert!(check_index(0, 0, "i").is_err());
    }

    #[test]
    fn test_check_position_admits_end() {
        assert!(check_position(3, 3, "p").is_ok());
        assert!(check_position(4, 3, "p").is_err());
    }

    #[test]
    fn test_offset_position() {
        assert_eq!(offset_position(3, -3), Ok(0));
        assert!(offset_position(0, -1).is_err());
        assert_eq!(offset_position(2, 5), Ok(7));
    }
}
