// Rampart - rampart-error
// Module: Rampart Error Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for rampart-error
//!
//! Re-exports the core items every Rampart crate imports, so `std` and
//! `no_std` builds share one import list.

pub use core::{
    cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd},
    convert::{TryFrom, TryInto},
    fmt,
    fmt::{Debug, Display},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
};

pub use crate::{codes, kinds, Error, ErrorCategory, Result};
