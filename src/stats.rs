// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters gathered over a generated tree, reported through `tracing` when the
//! run asks for them.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};
use tracing::info;

use crate::tree::TripleTree;
use crate::triple::Rule;

#[derive(EnumCountMacro, EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Triples,
    RuleA,
    RuleB,
    RuleC,
}

impl Counters {
    fn for_rule(rule: Rule) -> Option<Self> {
        match rule {
            Rule::Root => None,
            Rule::A => Some(Counters::RuleA),
            Rule::B => Some(Counters::RuleB),
            Rule::C => Some(Counters::RuleC),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
    max_depth: usize,
    max_hypotenuse: i64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Gather counters over every node of `tree`.
    pub fn collect(tree: &TripleTree) -> Self {
        let mut statistics = Statistics::new();
        for node in tree.nodes() {
            statistics.increment_counter(Counters::Triples);
            if let Some(counter) = Counters::for_rule(node.rule) {
                statistics.increment_counter(counter);
            }
            statistics.max_hypotenuse = statistics.max_hypotenuse.max(node.triple.z);
        }
        // Breadth-first: the last node is on the deepest level.
        if !tree.is_empty() {
            statistics.max_depth = tree.depth(tree.len() - 1);
        }
        statistics
    }

    /// Increment the specified counter by 1.
    fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Depth of the deepest generated triple (the root has depth 0).
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_hypotenuse(&self) -> i64 {
        self.max_hypotenuse
    }

    /// Emit every counter at `info` level.
    pub fn log(&self) {
        for counter in Counters::iter() {
            info!(counter = %counter, value = self.get(counter), "statistics");
        }
        info!(
            max_depth = self.max_depth,
            max_hypotenuse = self.max_hypotenuse,
            "statistics"
        );
    }
}
