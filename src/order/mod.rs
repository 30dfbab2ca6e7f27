// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Display ordering of generated triples.
//!
//! Sorting never touches the arena. The result is a permutation of generation
//! indices, so every node's `origin` keeps resolving against generation order.

use std::cmp::Ordering;

use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::tree::{Node, TripleTree};
use crate::triple::Triple;

/// Total order used to present triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum OrderMode {
    /// Keep generation order.
    #[strum(serialize = "none")]
    None,
    /// Ascending by x, then y, then z.
    #[strum(to_string = "lex", serialize = "xyz")]
    LexXyz,
    /// Ascending by hypotenuse only.
    #[strum(serialize = "z")]
    ByZ,
}

impl OrderMode {
    /// The order selected at compile time through the `order_*` features.
    pub const fn build_default() -> Self {
        if cfg!(order_default_none) {
            OrderMode::None
        } else if cfg!(order_default_z) {
            OrderMode::ByZ
        } else {
            OrderMode::LexXyz
        }
    }

    /// Compare two triples under this order.
    ///
    /// `None` is not an order: every pair compares equal. [`display_order`]
    /// never sorts with it.
    pub(crate) fn compare(self, a: &Triple, b: &Triple) -> Ordering {
        match self {
            OrderMode::None => Ordering::Equal,
            OrderMode::LexXyz => (a.x, a.y, a.z).cmp(&(b.x, b.y, b.z)),
            OrderMode::ByZ => a.z.cmp(&b.z),
        }
    }
}

impl Default for OrderMode {
    fn default() -> Self {
        Self::build_default()
    }
}

/// Generation indices of `tree`, arranged in display order.
pub fn display_order(tree: &TripleTree, mode: OrderMode) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tree.len()).collect();
    if mode == OrderMode::None {
        return order;
    }

    let nodes = tree.nodes();
    sort_indices(&mut order, nodes, mode);
    debug!(count = order.len(), mode = %mode, "ordered triples");
    order
}

#[cfg(not(feature = "parallel"))]
fn sort_indices(order: &mut [usize], nodes: &[Node], mode: OrderMode) {
    order.sort_unstable_by(|&a, &b| mode.compare(&nodes[a].triple, &nodes[b].triple));
}

#[cfg(feature = "parallel")]
fn sort_indices(order: &mut [usize], nodes: &[Node], mode: OrderMode) {
    use rayon::slice::ParallelSliceMut;

    order.par_sort_unstable_by(|&a, &b| mode.compare(&nodes[a].triple, &nodes[b].triple));
}
