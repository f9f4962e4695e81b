//! `report-tools` turns line-oriented text files into small tab-separated reports.
//!
//! Three command-line tools share one pipeline:
//!
//! - **`compute_statistics`**: count, mean, median, mode, population variance and standard
//!   deviation of each file's numbers, one column per file
//! - **`convert_numbers`**: binary and hexadecimal forms of each file's integers
//! - **`count_words`**: word frequencies of each file's text
//!
//! Each tool reads every file given on the command line, skips (with a warning) files that are
//! missing or contain no usable data, prints the report, and saves the same text under
//! `results/p1`, `results/p2` or `results/p3`.
//!
//! ## Ingestion
//!
//! [`ingestion::LineReader`] reads one value per line. Blank lines are ignored; lines the
//! converter rejects are recorded and reported, never fatal. A file with no usable line at all
//! is an [`ReportError::EmptyOrInvalidData`].
//!
//! ```rust
//! use std::path::Path;
//!
//! use report_tools::ingestion::{parse_float, LineReader};
//!
//! let read = LineReader::new()
//!     .read_values_from_reader("1\n2\nbad\n\n3\n".as_bytes(), Path::new("mem.txt"), parse_float)
//!     .unwrap();
//! assert_eq!(read.values, vec![1.0, 2.0, 3.0]);
//! assert_eq!(read.skipped[0].line, 3);
//! ```
//!
//! ## Running a report
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use report_tools::ingestion::StdOutObserver;
//! use report_tools::pipeline::{PipelineOptions, ReportPipeline, StatisticsTool};
//!
//! # fn main() -> Result<(), report_tools::ReportError> {
//! let pipeline = ReportPipeline::new(
//!     StatisticsTool::default(),
//!     PipelineOptions {
//!         observer: Some(Arc::new(StdOutObserver)),
//!         ..Default::default()
//!     },
//! );
//! let summary = pipeline.run(&["TC1.txt", "TC2.txt"], &mut std::io::stdout())?;
//! println!("saved {}", summary.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: tolerant line reader, converters and observers
//! - [`processing`]: statistics, base conversion and word-frequency algorithms
//! - [`pipeline`]: the per-file read/compute/format/print/save driver and the three tools
//! - [`types`]: shared data model
//! - [`error`]: error and severity types
//! - [`cli`]: glue shared by the binaries

pub mod cli;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{ReportError, ReportResult, ReportSeverity};
