// Rampart - rampart-error
// Module: Rampart Error Macros
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Early-return helpers for bounds checks.

/// Returns `Err($error)` from the enclosing function unless `$cond` holds.
///
/// # Examples
///
/// ```
/// use rampart_error::{ensure, Error, Result};
///
/// fn first_of(values: &[u8]) -> Result<u8> {
///     ensure!(!values.is_empty(), Error::empty_container("no first element"));
///     Ok(values[0])
/// }
///
/// assert!(first_of(&[]).is_err());
/// assert_eq!(first_of(&[4]), Ok(4));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err(::core::convert::Into::into($error));
        }
    };
}
