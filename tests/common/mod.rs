// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use num_integer::Integer;
use ppt_tree::Triple;

/// Whether `t` is a primitive triple with an odd x leg and an even y leg.
pub fn is_primitive_with_odd_x(t: &Triple) -> bool {
    let g = t.x.gcd(&t.y).gcd(&t.z);
    g == 1 && t.x.is_odd() && t.y.is_even() && t.x > 0 && t.y > 0
}

/// The first four triples in generation order.
pub const FIRST_LEVEL: [Triple; 4] = [
    Triple::new(3, 4, 5),
    Triple::new(5, 12, 13),
    Triple::new(21, 20, 29),
    Triple::new(15, 8, 17),
];
