// Rampart - rampart-sync
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for rampart-sync

pub use core::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

pub use rampart_error::{Error, Result};
