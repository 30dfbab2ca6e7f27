// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.

use crate::order::OrderMode;
use crate::output::RecordOptions;

/// Number of triples generated when no count is given.
pub const DEFAULT_COUNT: i64 = 1_000_000;

/// Everything one run needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of triples to generate. Must be positive.
    pub count: i64,
    pub order: OrderMode,
    pub show_parent: bool,
    pub lineage: bool,
    /// Log generation statistics after the run.
    pub stats: bool,
}

impl Config {
    pub fn record_options(&self) -> RecordOptions {
        RecordOptions {
            show_parent: self.show_parent,
            lineage: self.lineage,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            order: OrderMode::build_default(),
            show_parent: false,
            lineage: false,
            stats: false,
        }
    }
}

/// Parse a count the way `strtoll(s, NULL, 0)` reads it: decimal, `0x` hex or
/// leading-zero octal, with an optional sign.
pub fn parse_count(s: &str) -> Result<i64, String> {
    let trimmed = s.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, body) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };
    // from_str_radix takes its own sign, which would allow "-0x-5".
    if body.is_empty() || body.starts_with(['+', '-']) {
        return Err(format!("invalid count '{}'", s));
    }
    let value = i64::from_str_radix(body, radix)
        .map_err(|e| format!("invalid count '{}': {}", s, e))?;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.count, 1_000_000);
        assert_eq!(config.order, OrderMode::build_default());
        assert!(!config.show_parent);
        assert_eq!(config.record_options(), RecordOptions::default());
    }

    #[test]
    fn test_parse_count_radixes() {
        assert_eq!(parse_count("1000"), Ok(1000));
        assert_eq!(parse_count("0x10"), Ok(16));
        assert_eq!(parse_count("0X1f"), Ok(31));
        assert_eq!(parse_count("010"), Ok(8));
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("-5"), Ok(-5));
        assert_eq!(parse_count("+7"), Ok(7));
    }

    #[test]
    fn test_parse_count_rejects_garbage() {
        assert!(parse_count("ten").is_err());
        assert!(parse_count("").is_err());
        assert!(parse_count("09").is_err());
        assert!(parse_count("0x").is_err());
        assert!(parse_count("-").is_err());
    }

    #[test]
    fn test_parse_count_rejects_repeated_sign() {
        assert!(parse_count("-0x-5").is_err());
        assert!(parse_count("0-7").is_err());
        assert!(parse_count("0x+10").is_err());
        assert!(parse_count("--5").is_err());
        assert!(parse_count("+-5").is_err());
    }
}
