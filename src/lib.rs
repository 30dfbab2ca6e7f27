// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of primitive Pythagorean triples.
//!
//! Every primitive Pythagorean triple can be obtained in exactly one way from
//! (3, 4, 5) by a sequence of the linear transformations A, B and C (see
//! [`triple::rule`]). Walking that ternary tree breadth-first therefore lists
//! each primitive triple once.
//!
//! # Architecture
//!
//! The run is a strict two-phase pipeline with a single owner:
//!
//! ## Phase 1: Generation (immutable arena)
//!
//! [`TripleTree::generate`] fills an arena of exactly `count` nodes in
//! generation order. Each node remembers the generation index of its parent
//! and the rule that produced it. The arena is never modified afterwards.
//!
//! ## Phase 2: Ordering (index permutation)
//!
//! [`order::display_order`] returns the generation indices sorted by the
//! selected [`OrderMode`]. Parent links keep pointing into generation order,
//! so they stay valid whatever the display order is.
//!
//! The output stage ([`output`]) walks the display order and resolves parents
//! through the arena.
//!
//! # Configuration
//!
//! The default order is chosen at compile time with the `order_none` and
//! `order_by_z` features (lexicographic otherwise) and can be overridden per
//! run through [`Config`]. The `parallel` feature sorts with rayon.

pub mod config;
pub mod error;
pub mod order;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod tree;
pub mod triple;

// Re-export commonly used types
pub use config::{Config, DEFAULT_COUNT};
pub use error::{PptError, Result};
pub use order::OrderMode;
pub use pipeline::Run;
pub use tree::{Node, TripleTree};
pub use triple::{Rule, Triple};
