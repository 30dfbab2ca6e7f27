// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output stage: records and their text form.

pub mod format;
pub mod record;

pub use format::write_records;
pub use record::{records, OutputRecord, RecordOptions};
