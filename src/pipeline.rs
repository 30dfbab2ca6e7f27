// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generate, then order.
//!
//! A [`Run`] owns the arena for the whole pipeline and lends it to the output
//! stage together with the display order.
//!
//! # Example
//!
//! ```
//! use ppt_tree::{Config, OrderMode, Run};
//!
//! let config = Config { count: 4, order: OrderMode::LexXyz, ..Config::default() };
//! let run = Run::execute(&config).unwrap();
//! let lines: Vec<String> = run.records(config.record_options()).map(|r| r.to_string()).collect();
//! assert_eq!(lines.len(), 4);
//! assert!(lines[2].contains("15^2"));
//! ```

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::order::display_order;
use crate::output::{records, OutputRecord, RecordOptions};
use crate::stats::Statistics;
use crate::tree::TripleTree;

/// The result of generating and ordering one batch of triples.
#[derive(Debug)]
pub struct Run {
    tree: TripleTree,
    order: Vec<usize>,
}

impl Run {
    pub fn execute(config: &Config) -> Result<Self> {
        let tree = TripleTree::generate(config.count)?;
        let order = display_order(&tree, config.order);
        info!(count = tree.len(), order = %config.order, "triples ready");

        if config.stats {
            Statistics::collect(&tree).log();
        }
        Ok(Self { tree, order })
    }

    /// The arena, in generation order.
    pub fn tree(&self) -> &TripleTree {
        &self.tree
    }

    /// Generation indices in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn records(&self, options: RecordOptions) -> impl Iterator<Item = OutputRecord> + '_ {
        records(&self.tree, &self.order, options)
    }
}
