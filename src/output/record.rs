// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-line output records.
//!
//! A record joins one node of the arena with whatever the output stage asked
//! for. Parents are resolved through the node's `origin`, i.e. against
//! generation order, regardless of the display order being walked.

use crate::tree::TripleTree;
use crate::triple::{Rule, Triple};

/// What the output stage wants attached to each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOptions {
    /// Resolve and attach the parent triple.
    pub show_parent: bool,
    /// Attach the rule path from the root.
    pub lineage: bool,
}

/// One displayed triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// Generation index of this triple.
    pub index: usize,
    pub triple: Triple,
    /// `None` for the root.
    pub rule: Option<Rule>,
    /// Set only when parents were requested and this is not the root.
    pub parent: Option<Triple>,
    /// Set only when lineage was requested.
    pub lineage: Option<Vec<Rule>>,
}

impl OutputRecord {
    fn build(tree: &TripleTree, index: usize, options: RecordOptions) -> Self {
        let node = &tree[index];
        Self {
            index,
            triple: node.triple,
            rule: (!node.is_root()).then_some(node.rule),
            parent: if options.show_parent {
                tree.parent(index).map(|p| p.triple)
            } else {
                None
            },
            lineage: options.lineage.then(|| tree.lineage(index)),
        }
    }
}

/// Walk `order` (generation indices) and yield one record per entry.
///
/// # Panics
///
/// The iterator panics if `order` holds an index outside `tree`.
pub fn records<'a>(
    tree: &'a TripleTree,
    order: &'a [usize],
    options: RecordOptions,
) -> impl Iterator<Item = OutputRecord> + 'a {
    order
        .iter()
        .map(move |&index| OutputRecord::build(tree, index, options))
}
