//! Ingestion entrypoints.
//!
//! Most callers should use [`LineReader`] (from [`lines`]) which:
//!
//! - reads a file one value per line, ignoring blank lines
//! - converts each line with a caller-provided converter ([`parse_float`],
//!   [`parse_truncated_int`], or any `Fn(&str) -> Result<T, String>`)
//! - reports skipped lines to a [`ReportObserver`] instead of failing the read

pub mod lines;
pub mod observability;

pub use lines::{parse_float, parse_truncated_int, LineRead, LineReader};
pub use observability::{
    skipped_summary, CompositeObserver, FileObserver, FileStats, ReportObserver, StdOutObserver,
};
