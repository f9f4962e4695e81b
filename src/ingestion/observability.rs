use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{ReportError, ReportSeverity};
use crate::types::SkippedLine;

/// Minimal stats reported when a file was read and computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Number of values (or words) the file contributed.
    pub records: usize,
    /// Time spent reading and computing.
    pub elapsed: Duration,
}

/// Observer interface for ingestion and reporting events.
///
/// Implementors can print warnings, keep a log, or record events for tests. All callbacks default
/// to no-ops.
pub trait ReportObserver: Send + Sync {
    /// Called once per line that failed conversion.
    fn on_line_skipped(&self, _path: &Path, _line: &SkippedLine) {}

    /// Called when a file was read and computed.
    fn on_file_processed(&self, _path: &Path, _stats: FileStats) {}

    /// Called when a file is excluded from the report.
    fn on_file_skipped(&self, _path: &Path, _severity: ReportSeverity, _error: &ReportError) {}

    /// Called after the report was written to disk.
    fn on_saved(&self, _path: &Path) {}

    /// Called at the end of a successful run with the files that were skipped.
    fn on_run_finished(&self, _skipped: &[PathBuf]) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ReportObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ReportObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ReportObserver for CompositeObserver {
    fn on_line_skipped(&self, path: &Path, line: &SkippedLine) {
        for o in &self.observers {
            o.on_line_skipped(path, line);
        }
    }

    fn on_file_processed(&self, path: &Path, stats: FileStats) {
        for o in &self.observers {
            o.on_file_processed(path, stats);
        }
    }

    fn on_file_skipped(&self, path: &Path, severity: ReportSeverity, error: &ReportError) {
        for o in &self.observers {
            o.on_file_skipped(path, severity, error);
        }
    }

    fn on_saved(&self, path: &Path) {
        for o in &self.observers {
            o.on_saved(path);
        }
    }

    fn on_run_finished(&self, skipped: &[PathBuf]) {
        for o in &self.observers {
            o.on_run_finished(skipped);
        }
    }
}

/// Prints human-readable warnings to stdout, interleaved with the report itself.
#[derive(Debug, Default)]
pub struct StdOutObserver;

impl ReportObserver for StdOutObserver {
    fn on_line_skipped(&self, path: &Path, line: &SkippedLine) {
        println!(
            "Warning: Skipped invalid data at line {} in {}: '{}'",
            line.line,
            path.display(),
            line.raw
        );
    }

    fn on_file_skipped(&self, _path: &Path, _severity: ReportSeverity, error: &ReportError) {
        println!("Warning: Skipping file - {error}");
    }

    fn on_saved(&self, path: &Path) {
        println!("\nResults saved to: {}", path.display());
    }

    fn on_run_finished(&self, skipped: &[PathBuf]) {
        if let Some(summary) = skipped_summary(skipped) {
            println!("\n{summary}");
        }
    }
}

/// `Skipped N file(s): a, b`, or `None` when nothing was skipped.
pub fn skipped_summary(skipped: &[PathBuf]) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }
    let names: Vec<String> = skipped.iter().map(|p| p.display().to_string()).collect();
    Some(format!(
        "Skipped {} file(s): {}",
        skipped.len(),
        names.join(", ")
    ))
}

/// Appends events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ReportObserver for FileObserver {
    fn on_line_skipped(&self, path: &Path, line: &SkippedLine) {
        self.append_line(&format!(
            "{} skip-line path={} line={} raw='{}' reason={}",
            unix_ts(),
            path.display(),
            line.line,
            line.raw,
            line.reason
        ));
    }

    fn on_file_processed(&self, path: &Path, stats: FileStats) {
        self.append_line(&format!(
            "{} ok path={} records={} elapsed={:.6}",
            unix_ts(),
            path.display(),
            stats.records,
            stats.elapsed.as_secs_f64()
        ));
    }

    fn on_file_skipped(&self, path: &Path, severity: ReportSeverity, error: &ReportError) {
        self.append_line(&format!(
            "{} skip-file severity={:?} path={} err={}",
            unix_ts(),
            severity,
            path.display(),
            error
        ));
    }

    fn on_saved(&self, path: &Path) {
        self.append_line(&format!("{} saved path={}", unix_ts(), path.display()));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
