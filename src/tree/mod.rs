// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Breadth-first generation of the ternary triple tree.
//!
//! The tree is stored as an arena in generation order. Position 0 holds the
//! root (3, 4, 5); every other node records the generation index of its parent
//! and the rule that produced it. Because parents are always expanded before
//! their children are placed, `origin < index` for every non-root node.
//!
//! # Truncation
//!
//! Generation stops the instant `count` nodes exist. The last parent to be
//! expanded may therefore have only one or two children. This is what makes
//! the count exact and must not be "completed" to a full sibling group.
//!
//! # Example
//!
//! ```
//! use ppt_tree::tree::TripleTree;
//! use ppt_tree::triple::{Rule, Triple};
//!
//! let tree = TripleTree::generate(4).unwrap();
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree[2].triple, Triple::new(21, 20, 29));
//! assert_eq!(tree[2].rule, Rule::B);
//! assert_eq!(tree[2].origin, 0);
//! ```

use std::ops::{Index, Range};

use tracing::{debug, trace};

use crate::error::{PptError, Result};
use crate::triple::{Rule, Triple};

/// One triple in the arena, with its back-reference into generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub triple: Triple,

    /// Generation index of the parent. The root points at itself (0).
    pub origin: usize,

    /// Rule that produced this node from its parent.
    pub rule: Rule,
}

impl Node {
    fn root() -> Self {
        Self {
            triple: Triple::ROOT,
            origin: 0,
            rule: Rule::Root,
        }
    }

    pub fn is_root(&self) -> bool {
        self.rule == Rule::Root
    }
}

/// The generated triples, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleTree {
    nodes: Vec<Node>,
}

impl TripleTree {
    /// Generate exactly `count` triples in breadth-first order.
    ///
    /// # Errors
    ///
    /// - [`PptError::InvalidCount`] if `count <= 0`
    /// - [`PptError::AllocationFailure`] if storage for `count` nodes cannot be reserved
    /// - [`PptError::ArithmeticOverflow`] if a component leaves the `i64` range
    pub fn generate(count: i64) -> Result<Self> {
        if count <= 0 {
            return Err(PptError::InvalidCount { count });
        }
        let target = usize::try_from(count).unwrap_or(usize::MAX);

        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(target)
            .map_err(|source| PptError::AllocationFailure {
                count: target,
                source,
            })?;

        debug!(count = target, "generating triples");
        nodes.push(Node::root());

        let mut parent = 0;
        'expand: while nodes.len() < target {
            let base = nodes[parent].triple;
            for rule in Rule::CHILDREN {
                let triple = rule.apply(base).ok_or(PptError::ArithmeticOverflow {
                    index: parent,
                    rule,
                })?;
                nodes.push(Node {
                    triple,
                    origin: parent,
                    rule,
                });
                if nodes.len() == target {
                    break 'expand;
                }
            }
            trace!(parent, "expanded");
            parent += 1;
        }

        debug!(
            count = nodes.len(),
            last_parent = parent,
            "generation complete"
        );
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a generated tree; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in generation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// The parent node of `index`, or `None` for the root or an out-of-range index.
    pub fn parent(&self, index: usize) -> Option<&Node> {
        let node = self.nodes.get(index)?;
        if node.is_root() {
            None
        } else {
            self.nodes.get(node.origin)
        }
    }

    /// Generation indices of the direct children of `index`.
    ///
    /// Children of parent `p` occupy `3p+1 ..= 3p+3`, clipped to the tree size.
    pub fn children(&self, index: usize) -> Range<usize> {
        let len = self.nodes.len();
        let start = index
            .saturating_mul(Rule::CHILDREN.len())
            .saturating_add(1)
            .min(len);
        let end = start.saturating_add(Rule::CHILDREN.len()).min(len);
        start..end
    }

    /// The rules applied from the root to reach `index`, root first.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn lineage(&self, index: usize) -> Vec<Rule> {
        let mut path = Vec::new();
        let mut current = &self.nodes[index];
        while !current.is_root() {
            path.push(current.rule);
            current = &self.nodes[current.origin];
        }
        path.reverse();
        path
    }

    /// Distance of `index` from the root.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn depth(&self, index: usize) -> usize {
        let mut depth = 0;
        let mut current = &self.nodes[index];
        while !current.is_root() {
            depth += 1;
            current = &self.nodes[current.origin];
        }
        depth
    }
}

impl Index<usize> for TripleTree {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}
