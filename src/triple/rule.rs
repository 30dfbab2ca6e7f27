// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three generating transformations A, B and C.
//!
//! Every primitive Pythagorean triple other than (3, 4, 5) is obtained in
//! exactly one way by applying a sequence of these maps to the root:
//!
//! ```text
//! A: (x|y|z) --> ( x-2y+2z| 2x-y+2z| 2x-2y+3z)   [or (m|n) --> (n|2n-m)]
//! B: (x|y|z) --> ( x+2y+2z| 2x+y+2z| 2x+2y+3z)   [or (m|n) --> (n|2n+m)]
//! C: (x|y|z) --> (-x+2y+2z|-2x+y+2z|-2x+2y+3z)   [or (m|n) --> (m|2m+n)]
//! ```

use super::Triple;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// Which transformation produced a triple from its parent.
///
/// The root of the tree was not produced by any rule and is tagged `Root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Rule {
    #[strum(serialize = "-")]
    Root,
    A,
    B,
    C,
}

impl Rule {
    /// The rules applied to every parent, in expansion order.
    pub const CHILDREN: [Rule; 3] = [Rule::A, Rule::B, Rule::C];

    /// Display letter, or `None` for the root.
    pub fn letter(self) -> Option<char> {
        match self {
            Rule::Root => None,
            Rule::A => Some('A'),
            Rule::B => Some('B'),
            Rule::C => Some('C'),
        }
    }

    /// Apply this rule to `t`, returning `None` if any component overflows `i64`.
    ///
    /// `Rule::Root` is the identity.
    pub fn apply(self, t: Triple) -> Option<Triple> {
        let (x, y, z) = (t.x, t.y, t.z);
        // Sign of the x term and the y term for each rule.
        let (sx, sy) = match self {
            Rule::Root => return Some(t),
            Rule::A => (1, -1),
            Rule::B => (1, 1),
            Rule::C => (-1, 1),
        };
        let sx = x.checked_mul(sx)?;
        let sy = y.checked_mul(sy)?;
        let z2 = z.checked_mul(2)?;

        let xn = sx.checked_add(sy.checked_mul(2)?)?.checked_add(z2)?;
        let yn = sx.checked_mul(2)?.checked_add(sy)?.checked_add(z2)?;
        let zn = sx
            .checked_mul(2)?
            .checked_add(sy.checked_mul(2)?)?
            .checked_add(z.checked_mul(3)?)?;
        Some(Triple::new(xn, yn, zn))
    }

    /// The same rule expressed on the Euclid parameters `(m, n)`.
    pub fn apply_parameters(self, m: i64, n: i64) -> Option<(i64, i64)> {
        match self {
            Rule::Root => Some((m, n)),
            Rule::A => Some((n, n.checked_mul(2)?.checked_sub(m)?)),
            Rule::B => Some((n, n.checked_mul(2)?.checked_add(m)?)),
            Rule::C => Some((m, m.checked_mul(2)?.checked_add(n)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    const ROOT: Triple = Triple::ROOT;

    #[test]
    fn test_rules_on_root() {
        assert_eq!(Rule::A.apply(ROOT), Some(Triple::new(5, 12, 13)));
        assert_eq!(Rule::B.apply(ROOT), Some(Triple::new(21, 20, 29)));
        assert_eq!(Rule::C.apply(ROOT), Some(Triple::new(15, 8, 17)));
        assert_eq!(Rule::Root.apply(ROOT), Some(ROOT));
    }

    #[test]
    fn test_rules_second_level() {
        // A(5,12,13) and C(15,8,17)
        assert_eq!(
            Rule::A.apply(Triple::new(5, 12, 13)),
            Some(Triple::new(7, 24, 25))
        );
        assert_eq!(
            Rule::C.apply(Triple::new(15, 8, 17)),
            Some(Triple::new(35, 12, 37))
        );
    }

    #[test]
    fn test_parameter_form_agrees() {
        // (3,4,5) has (m, n) = (1, 2)
        assert_eq!(Rule::A.apply_parameters(1, 2), Some((2, 3)));
        assert_eq!(Rule::B.apply_parameters(1, 2), Some((2, 5)));
        assert_eq!(Rule::C.apply_parameters(1, 2), Some((1, 4)));

        for rule in Rule::CHILDREN {
            let child = rule.apply(ROOT).unwrap();
            let (m, n) = rule.apply_parameters(1, 2).unwrap();
            assert_eq!(Triple::from_parameters(m, n), Some(child), "rule {}", rule);
        }
    }

    #[test]
    fn test_overflow_detected() {
        let huge = Triple::new(i64::MAX / 2, i64::MAX / 2, i64::MAX / 2);
        for rule in Rule::CHILDREN {
            assert_eq!(rule.apply(huge), None, "rule {}", rule);
        }
    }

    #[test]
    fn test_letters_and_display() {
        assert_eq!(Rule::COUNT, 4);
        let letters: Vec<_> = Rule::iter().map(Rule::letter).collect();
        assert_eq!(letters, vec![None, Some('A'), Some('B'), Some('C')]);
        assert_eq!(Rule::B.to_string(), "B");
        assert_eq!(Rule::Root.to_string(), "-");
    }
}
