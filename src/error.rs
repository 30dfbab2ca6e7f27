// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for tree generation.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::triple::Rule;

/// Errors that end a run. None of them are retryable.
#[derive(Debug, Error)]
pub enum PptError {
    /// The requested number of triples was zero or negative.
    #[error("invalid count {count}: at least one triple must be requested")]
    InvalidCount { count: i64 },

    /// Storage for `count` triples could not be reserved.
    #[error("cannot allocate storage for {count} triples")]
    AllocationFailure {
        count: usize,
        #[source]
        source: TryReserveError,
    },

    /// Applying `rule` to the triple at generation index `index` left the i64 range.
    #[error("rule {rule} applied to triple #{index} overflows 64-bit arithmetic")]
    ArithmeticOverflow { index: usize, rule: Rule },
}

pub type Result<T> = std::result::Result<T, PptError>;
