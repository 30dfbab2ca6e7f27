// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for display ordering and output records.

mod common;

use common::FIRST_LEVEL;
use ppt_tree::order::display_order;
use ppt_tree::output::{records, write_records, RecordOptions};
use ppt_tree::{Config, OrderMode, Run, Triple, TripleTree};

fn sorted_multiset(mut v: Vec<Triple>) -> Vec<Triple> {
    v.sort();
    v
}

#[test]
fn test_lex_order_of_first_level() {
    let tree = TripleTree::generate(4).unwrap();
    let order = display_order(&tree, OrderMode::LexXyz);
    let triples: Vec<Triple> = order.iter().map(|&i| tree[i].triple).collect();
    assert_eq!(
        triples,
        vec![FIRST_LEVEL[0], FIRST_LEVEL[1], FIRST_LEVEL[3], FIRST_LEVEL[2]]
    );
}

#[test]
fn test_orders_are_sorted() {
    let tree = TripleTree::generate(5_000).unwrap();

    let lex: Vec<Triple> = display_order(&tree, OrderMode::LexXyz)
        .iter()
        .map(|&i| tree[i].triple)
        .collect();
    assert!(lex.windows(2).all(|w| w[0] <= w[1]));

    let by_z: Vec<Triple> = display_order(&tree, OrderMode::ByZ)
        .iter()
        .map(|&i| tree[i].triple)
        .collect();
    assert!(by_z.windows(2).all(|w| w[0].z <= w[1].z));
}

#[test]
fn test_reordering_keeps_multiset() {
    let tree = TripleTree::generate(2_000).unwrap();
    let original: Vec<Triple> = tree.nodes().iter().map(|n| n.triple).collect();
    for mode in [OrderMode::None, OrderMode::LexXyz, OrderMode::ByZ] {
        let reordered: Vec<Triple> = display_order(&tree, mode)
            .iter()
            .map(|&i| tree[i].triple)
            .collect();
        assert_eq!(
            sorted_multiset(reordered),
            sorted_multiset(original.clone()),
            "mode {}",
            mode
        );
    }
}

#[test]
fn test_parents_survive_reordering() {
    let tree = TripleTree::generate(2_000).unwrap();
    let order = display_order(&tree, OrderMode::ByZ);
    let options = RecordOptions {
        show_parent: true,
        lineage: false,
    };
    for record in records(&tree, &order, options) {
        match (record.rule, record.parent) {
            (None, None) => assert_eq!(record.triple, Triple::ROOT),
            (Some(rule), Some(parent)) => {
                assert_eq!(rule.apply(parent), Some(record.triple));
            }
            other => panic!("inconsistent record {:?}", other),
        }
    }
}

#[test]
fn test_rendered_output_with_parents() {
    let config = Config {
        count: 4,
        order: OrderMode::LexXyz,
        show_parent: true,
        ..Config::default()
    };
    let run = Run::execute(&config).unwrap();
    let mut buf = Vec::new();
    let lines = write_records(&mut buf, run.records(config.record_options())).unwrap();
    assert_eq!(lines, 4);
    let text = String::from_utf8(buf).unwrap();
    let expected = [
        "         3^2 +          4^2 =          5^2",
        "         5^2 +         12^2 =         13^2 (A          3|         4|         5)",
        "        15^2 +          8^2 =         17^2 (C          3|         4|         5)",
        "        21^2 +         20^2 =         29^2 (B          3|         4|         5)",
    ];
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_rendered_output_plain_single() {
    let config = Config {
        count: 1,
        ..Config::default()
    };
    let run = Run::execute(&config).unwrap();
    let mut buf = Vec::new();
    write_records(&mut buf, run.records(config.record_options())).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "         3^2 +          4^2 =          5^2\n"
    );
}
