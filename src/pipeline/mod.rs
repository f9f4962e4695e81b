//! Report pipeline: read → compute → collect per file, then format, print and save.
//!
//! This module sits "above" [`crate::ingestion`] and [`crate::processing`] and provides:
//!
//! - the [`ReportTool`] seam that plugs a concrete report into the pipeline
//! - per-file tolerance: a file that cannot be read or yields no data is skipped, reported to
//!   the observer, and the run continues
//! - console emission and persistence of the formatted report
//!
//! A run fails only when no file produced results ([`ReportError::NoValidFiles`], nothing is
//! printed or written) or when the report cannot be saved ([`ReportError::PermissionDenied`] /
//! [`ReportError::Io`], after the console output was already shown).

mod output;
pub mod tools;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{ReportError, ReportResult};
use crate::ingestion::{FileStats, LineReader, ReportObserver};

pub use output::{format_float, format_seconds, print_report, save_report};
pub use tools::{ConversionTool, StatisticsTool, WordCountTool};

/// Where a report is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDestination {
    /// Directory created on demand before writing.
    pub results_dir: PathBuf,
    /// File name inside `results_dir`.
    pub file_name: String,
}

impl OutputDestination {
    pub fn new(results_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            results_dir: results_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Full path of the results file.
    pub fn path(&self) -> PathBuf {
        self.results_dir.join(&self.file_name)
    }
}

/// Result of one tool for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport<T> {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Display name used in report headers (the file name).
    pub name: String,
    /// Tool output.
    pub output: T,
    /// Time spent reading and computing.
    pub elapsed: Duration,
}

/// A report the pipeline can drive.
pub trait ReportTool {
    /// Per-file result.
    type Output;

    /// Destination used when [`PipelineOptions::destination`] is `None`.
    fn default_destination(&self) -> OutputDestination;

    /// Read `path` and compute this tool's result.
    fn compute(&self, path: &Path, reader: &LineReader) -> ReportResult<Self::Output>;

    /// Number of records (values, words) behind `output`, for observers.
    fn records(&self, output: &Self::Output) -> usize;

    /// Turn the collected results into report lines.
    fn format(&self, reports: &[FileReport<Self::Output>]) -> Vec<String>;
}

/// Options controlling a [`ReportPipeline`].
///
/// Use [`Default`] for the tool's own destination and no observer.
#[derive(Clone, Default)]
pub struct PipelineOptions {
    /// Overrides the tool's default destination.
    pub destination: Option<OutputDestination>,
    /// Optional observer for warnings and progress.
    pub observer: Option<Arc<dyn ReportObserver>>,
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("destination", &self.destination)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Report lines, exactly as printed and saved.
    pub lines: Vec<String>,
    /// Where the report was saved.
    pub output_path: PathBuf,
    /// Display names of files included in the report.
    pub processed: Vec<String>,
    /// Input paths that were skipped.
    pub skipped: Vec<PathBuf>,
}

/// Drives a [`ReportTool`] over a list of input files.
pub struct ReportPipeline<T> {
    tool: T,
    opts: PipelineOptions,
    reader: LineReader,
}

impl<T: ReportTool> ReportPipeline<T> {
    /// Create a pipeline for `tool`.
    pub fn new(tool: T, opts: PipelineOptions) -> Self {
        let reader = match opts.observer.as_ref() {
            Some(obs) => LineReader::new().with_observer(Arc::clone(obs)),
            None => LineReader::new(),
        };
        Self { tool, opts, reader }
    }

    /// Effective output destination.
    pub fn destination(&self) -> OutputDestination {
        self.opts
            .destination
            .clone()
            .unwrap_or_else(|| self.tool.default_destination())
    }

    /// Read and compute every file, skipping the ones that fail.
    ///
    /// Returns the per-file reports in input order and the skipped paths.
    pub fn collect<P: AsRef<Path>>(&self, paths: &[P]) -> (Vec<FileReport<T::Output>>, Vec<PathBuf>) {
        let mut reports = Vec::new();
        let mut skipped = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let start = Instant::now();
            match self.tool.compute(path, &self.reader) {
                Ok(output) => {
                    let elapsed = start.elapsed();
                    let stats = FileStats {
                        records: self.tool.records(&output),
                        elapsed,
                    };
                    self.emit(|o| o.on_file_processed(path, stats));
                    reports.push(FileReport {
                        path: path.to_path_buf(),
                        name: display_name(path),
                        output,
                        elapsed,
                    });
                }
                Err(e) => {
                    let sev = e.severity();
                    self.emit(|o| o.on_file_skipped(path, sev, &e));
                    skipped.push(path.to_path_buf());
                }
            }
        }

        (reports, skipped)
    }

    /// Run the whole pipeline, printing the report to `console` and saving it.
    ///
    /// # Errors
    ///
    /// - [`ReportError::NoValidFiles`] if every input was skipped.
    /// - [`ReportError::PermissionDenied`] if the results file cannot be written.
    /// - [`ReportError::Io`] for console or other write failures.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P], console: &mut dyn Write) -> ReportResult<RunSummary> {
        let (reports, skipped) = self.collect(paths);
        if reports.is_empty() {
            return Err(ReportError::NoValidFiles);
        }

        let lines = self.tool.format(&reports);
        print_report(&lines, console)?;

        let output_path = self.destination().path();
        save_report(&lines, &output_path)?;
        self.emit(|o| o.on_saved(&output_path));
        self.emit(|o| o.on_run_finished(&skipped));

        Ok(RunSummary {
            lines,
            output_path,
            processed: reports.into_iter().map(|r| r.name).collect(),
            skipped,
        })
    }

    fn emit(&self, f: impl FnOnce(&dyn ReportObserver)) {
        if let Some(obs) = &self.opts.observer {
            f(obs.as_ref());
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
