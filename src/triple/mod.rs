// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primitive Pythagorean triples.
//!
//! A pythagorean triple (PT) consists of three natural numbers x, y and z
//! with x^2 + y^2 = z^2. PTs whose greatest common divisor is 1 are called
//! primitive (pPT). In every pPT one leg is odd and the other even; we keep
//! x as the odd leg.
//!
//! For every pPT there is exactly one pair (m, n) of coprime natural numbers
//! of different parity with m < n, such that
//!
//! ```text
//! x = n^2 - m^2,   y = 2mn,   z = n^2 + m^2
//! ```

pub mod rule;

pub use rule::Rule;

use std::fmt;

/// A Pythagorean triple `(x, y, z)` with `z` the hypotenuse.
///
/// Components are signed so that the rule transformations can be written
/// exactly as linear maps; generated triples are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// The odd leg.
    pub x: i64,
    /// The even leg.
    pub y: i64,
    /// The hypotenuse.
    pub z: i64,
}

impl Triple {
    /// The root of the tree.
    pub const ROOT: Triple = Triple { x: 3, y: 4, z: 5 };

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Build the triple for Euclid parameters `(m, n)`, or `None` on overflow.
    pub fn from_parameters(m: i64, n: i64) -> Option<Self> {
        let mm = m.checked_mul(m)?;
        let nn = n.checked_mul(n)?;
        let x = nn.checked_sub(mm)?;
        let y = m.checked_mul(n)?.checked_mul(2)?;
        let z = nn.checked_add(mm)?;
        Some(Self::new(x, y, z))
    }

    /// Recover the Euclid parameters `(m, n)`.
    ///
    /// Uses `m^2 = (z - x) / 2` and `n^2 = (z + x) / 2`. Returns `None` if
    /// either is not a perfect square or the result does not reproduce `y`.
    pub fn parameters(&self) -> Option<(i64, i64)> {
        let (x, y, z) = (self.x as i128, self.y as i128, self.z as i128);
        let (dm, dn) = (z - x, z + x);
        if dm <= 0 || dm % 2 != 0 || dn % 2 != 0 {
            return None;
        }
        let m = exact_sqrt(dm / 2)?;
        let n = exact_sqrt(dn / 2)?;
        if 2 * m * n != y {
            return None;
        }
        Some((i64::try_from(m).ok()?, i64::try_from(n).ok()?))
    }

    /// Whether `x^2 + y^2 == z^2`, evaluated without overflow.
    pub fn is_pythagorean(&self) -> bool {
        let (x, y, z) = (self.x as i128, self.y as i128, self.z as i128);
        x * x + y * y == z * z
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{}|{})", self.x, self.y, self.z)
    }
}

/// Integer square root of `v`, if `v` is a perfect square.
fn exact_sqrt(v: i128) -> Option<i128> {
    if v < 0 {
        return None;
    }
    // Float estimate, then correct by at most a few steps.
    let mut r = (v as f64).sqrt() as i128;
    while r * r > v {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= v {
        r += 1;
    }
    (r * r == v).then_some(r)
}
