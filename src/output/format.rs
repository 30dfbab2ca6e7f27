// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-width text rendering of output records.
//!
//! ```text
//!          5^2 +         12^2 =         13^2 (A          3|         4|         5)
//! ```

use std::fmt;
use std::io::{self, Write};

use super::record::OutputRecord;
use crate::triple::Rule;

/// Width of every numeric column.
pub const FIELD_WIDTH: usize = 10;

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.triple;
        write!(
            f,
            "{:>w$}^2 + {:>w$}^2 = {:>w$}^2",
            t.x,
            t.y,
            t.z,
            w = FIELD_WIDTH
        )?;

        if let (Some(rule), Some(p)) = (self.rule.and_then(Rule::letter), &self.parent) {
            write!(
                f,
                " ({} {:>w$}|{:>w$}|{:>w$})",
                rule,
                p.x,
                p.y,
                p.z,
                w = FIELD_WIDTH
            )?;
        }

        if let Some(path) = &self.lineage {
            f.write_str(" [")?;
            for letter in path.iter().filter_map(|r| r.letter()) {
                write!(f, "{}", letter)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// Write one line per record, returning the number of lines written.
pub fn write_records<W, I>(out: &mut W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = OutputRecord>,
{
    let mut lines = 0;
    for record in records {
        writeln!(out, "{}", record)?;
        lines += 1;
    }
    out.flush()?;
    Ok(lines)
}
