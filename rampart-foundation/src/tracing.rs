// Rampart - rampart-foundation
// Module: Tracing
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for Rampart
//!
//! Structured logging that works in both std and `no_std` environments. It
//! wraps the `tracing` crate and adds span helpers for the operations worth
//! following when debugging a bounds failure.

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, error_span, info_span, span, trace_span, warn_span};
pub use tracing::{event, field, Level, Span};

/// Spans for section construction and narrowing
#[derive(Debug, Clone)]
pub struct SectionTrace;

impl SectionTrace {
    /// Span for building a section over `count` elements from `start`
    #[inline]
    pub fn constructing(start: usize, count: usize) -> Span {
        debug_span!("section_new", start = %start, count = %count)
    }

    /// Span for taking a subsection
    #[inline]
    pub fn narrowing(pos: usize, count: usize) -> Span {
        trace_span!("section_narrow", pos = %pos, count = %count)
    }
}

/// Spans for generic algorithm runs
#[derive(Debug, Clone)]
pub struct AlgorithmTrace;

impl AlgorithmTrace {
    /// Span for one algorithm call over `len` elements
    #[inline]
    pub fn running(algorithm: &'static str, len: usize) -> Span {
        trace_span!("algorithm", algorithm = algorithm, len = %len)
    }

    /// Span for the one-time range proof of a strong contiguous iterator
    #[inline]
    pub fn cashing_proof(first: usize, last: usize) -> Span {
        trace_span!("fast_path_proof", first = %first, last = %last)
    }
}

/// Spans for structural operations on a container
#[derive(Debug, Clone)]
pub struct StructureTrace;

impl StructureTrace {
    /// Span for a lock-guarded structural operation
    #[inline]
    pub fn operation(operation: &'static str, capacity: usize) -> Span {
        debug_span!("structural_op", op = operation, capacity = %capacity)
    }
}
