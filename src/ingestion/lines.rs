//! Tolerant line-oriented ingestion.
//!
//! Every non-blank line is trimmed and handed to a converter. Lines the converter rejects, and
//! lines that are not valid UTF-8, are recorded as [`SkippedLine`]s and reported to the observer; they never abort the read. A file
//! that ends up with no values at all is an error.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::error::{ReportError, ReportResult};
use crate::types::SkippedLine;

use super::observability::ReportObserver;

/// Values read from one source plus the lines that were excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRead<T> {
    /// Converted values in file order.
    pub values: Vec<T>,
    /// Lines the converter rejected, in file order.
    pub skipped: Vec<SkippedLine>,
}

/// Reads files line by line, reporting skipped lines to an optional observer.
#[derive(Clone, Default)]
pub struct LineReader {
    observer: Option<Arc<dyn ReportObserver>>,
}

impl fmt::Debug for LineReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl LineReader {
    /// Create a reader without an observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer for skipped-line diagnostics.
    pub fn with_observer(mut self, observer: Arc<dyn ReportObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Read and convert every non-blank line of the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ReportError::FileNotFound`] if `path` does not exist.
    /// - [`ReportError::EmptyOrInvalidData`] if no line converted successfully.
    /// - [`ReportError::Io`] for other read failures. Lines that are not valid UTF-8 are skipped.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use report_tools::ingestion::{parse_float, LineReader};
    ///
    /// # fn main() -> Result<(), report_tools::ReportError> {
    /// let read = LineReader::new().read_values("numbers.txt", parse_float)?;
    /// println!("values={} skipped={}", read.values.len(), read.skipped.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn read_values<T, F>(
        &self,
        path: impl AsRef<Path>,
        converter: F,
    ) -> ReportResult<LineRead<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        self.read_values_from_reader(BufReader::new(file), path, converter)
    }

    /// Read and convert lines from an existing reader.
    ///
    /// `source` is only used for diagnostics and error messages.
    pub fn read_values_from_reader<R, T, F>(
        &self,
        reader: R,
        source: &Path,
        converter: F,
    ) -> ReportResult<LineRead<T>>
    where
        R: BufRead,
        F: Fn(&str) -> Result<T, String>,
    {
        let mut values = Vec::new();
        let mut skipped = Vec::new();
        let outcome = convert_lines(reader, &converter, &mut values, &mut skipped);

        if let Some(obs) = self.observer.as_ref() {
            for line in &skipped {
                obs.on_line_skipped(source, line);
            }
        }
        outcome?;

        if values.is_empty() {
            return Err(ReportError::EmptyOrInvalidData {
                path: source.to_path_buf(),
            });
        }

        Ok(LineRead { values, skipped })
    }

    /// Read a whole file as UTF-8 text. Empty files are valid.
    pub fn read_text(&self, path: impl AsRef<Path>) -> ReportResult<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| open_error(path, e))
    }
}

/// Split `reader` on `\n` and convert each non-blank line. Lines that are not valid UTF-8 are
/// skipped like converter failures; only a failing reader aborts.
fn convert_lines<R, T, F>(
    reader: R,
    converter: &F,
    values: &mut Vec<T>,
    skipped: &mut Vec<SkippedLine>,
) -> io::Result<()>
where
    R: BufRead,
    F: Fn(&str) -> Result<T, String>,
{
    for (idx0, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(e) => {
                skipped.push(SkippedLine {
                    line: idx0 + 1,
                    raw: String::from_utf8_lossy(&bytes).trim().to_owned(),
                    reason: format!("invalid UTF-8: {e}"),
                });
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match converter(trimmed) {
            Ok(v) => values.push(v),
            Err(reason) => skipped.push(SkippedLine {
                line: idx0 + 1,
                raw: trimmed.to_owned(),
                reason,
            }),
        }
    }
    Ok(())
}

fn open_error(path: &Path, err: io::Error) -> ReportError {
    match err.kind() {
        io::ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::Io(err),
    }
}

/// Parse a trimmed line as a floating-point literal.
pub fn parse_float(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|e| format!("expected a number: {e}"))
}

/// Parse a trimmed line as a float and truncate it toward zero.
///
/// `"3.9"` becomes `3`, `"-2.9"` becomes `-2`. Non-finite values and values outside the `i64`
/// range are rejected.
pub fn parse_truncated_int(raw: &str) -> Result<i64, String> {
    let v = parse_float(raw)?;
    if !v.is_finite() {
        return Err(format!("cannot convert non-finite value {v} to an integer"));
    }
    let truncated = v.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(format!("value {v} is outside the 64-bit integer range"));
    }
    Ok(truncated as i64)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use super::{parse_float, parse_truncated_int, LineReader};
    use crate::error::ReportError;
    use crate::ingestion::observability::ReportObserver;
    use crate::types::SkippedLine;

    #[derive(Default)]
    struct RecordingObserver {
        lines: Mutex<Vec<usize>>,
    }

    impl ReportObserver for RecordingObserver {
        fn on_line_skipped(&self, _path: &Path, line: &SkippedLine) {
            self.lines.lock().unwrap().push(line.line);
        }
    }

    fn read(input: &str) -> Result<super::LineRead<f64>, ReportError> {
        LineReader::new().read_values_from_reader(
            input.as_bytes(),
            Path::new("mem.txt"),
            parse_float,
        )
    }

    #[test]
    fn skips_invalid_lines_without_aborting() {
        let out = read("1\n2\nbad\n3\n").unwrap();
        assert_eq!(out.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].line, 3);
        assert_eq!(out.skipped[0].raw, "bad");
    }

    #[test]
    fn blank_lines_are_neither_data_nor_skipped() {
        let out = read("\n  4.5  \n\t\n\n6\n").unwrap();
        assert_eq!(out.values, vec![4.5, 6.0]);
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        let out = read("1\n\n\nx\n").unwrap();
        assert_eq!(out.skipped[0].line, 4);
    }

    #[test]
    fn all_invalid_input_is_an_error_but_still_reports_skips() {
        let obs = Arc::new(RecordingObserver::default());
        let reader = LineReader::new().with_observer(obs.clone());
        let err = reader
            .read_values_from_reader("a\nb\n".as_bytes(), Path::new("bad.txt"), parse_float)
            .unwrap_err();
        assert!(matches!(err, ReportError::EmptyOrInvalidData { .. }));
        assert_eq!(*obs.lines.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn invalid_utf8_line_is_skipped_like_bad_data() {
        let obs = Arc::new(RecordingObserver::default());
        let out = LineReader::new()
            .with_observer(obs.clone())
            .read_values_from_reader(&b"1\nbad\n\xff\n3\n"[..], Path::new("mixed.txt"), parse_float)
            .unwrap();
        assert_eq!(out.values, vec![1.0, 3.0]);
        assert_eq!(out.skipped.len(), 2);
        assert_eq!(out.skipped[1].line, 3);
        assert!(out.skipped[1].reason.starts_with("invalid UTF-8"));
        assert_eq!(*obs.lines.lock().unwrap(), vec![2, 3]);
    }

    #[test]
    fn read_failure_still_reports_earlier_skips() {
        struct FailAfter<'a>(&'a [u8]);

        impl io::Read for FailAfter<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.0.is_empty() {
                    return Err(io::Error::other("device gone"));
                }
                let n = self.0.len().min(buf.len());
                buf[..n].copy_from_slice(&self.0[..n]);
                self.0 = &self.0[n..];
                Ok(n)
            }
        }

        let obs = Arc::new(RecordingObserver::default());
        let err = LineReader::new()
            .with_observer(obs.clone())
            .read_values_from_reader(
                BufReader::new(FailAfter(b"1\nbad\n")),
                Path::new("flaky.txt"),
                parse_float,
            )
            .unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
        assert_eq!(*obs.lines.lock().unwrap(), vec![2]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = read("").unwrap_err();
        assert!(err.to_string().contains("mem.txt"));
    }

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let err = LineReader::new()
            .read_values("definitely/not/here.txt", parse_float)
            .unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
        let err = LineReader::new()
            .read_text("definitely/not/here.txt")
            .unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
    }

    #[test]
    fn truncated_int_rounds_toward_zero() {
        assert_eq!(parse_truncated_int("3.9"), Ok(3));
        assert_eq!(parse_truncated_int("-2.9"), Ok(-2));
        assert_eq!(parse_truncated_int("-0.5"), Ok(0));
        assert_eq!(parse_truncated_int("1e3"), Ok(1000));
        assert_eq!(parse_truncated_int("42"), Ok(42));
    }

    #[test]
    fn truncated_int_rejects_unrepresentable_values() {
        assert!(parse_truncated_int("inf").is_err());
        assert!(parse_truncated_int("nan").is_err());
        assert!(parse_truncated_int("1e30").is_err());
        assert!(parse_truncated_int("twelve").is_err());
    }

    #[test]
    fn float_parser_accepts_common_literals() {
        assert_eq!(parse_float("-1.25"), Ok(-1.25));
        assert_eq!(parse_float("+7"), Ok(7.0));
        assert_eq!(parse_float("2e-1"), Ok(0.2));
        assert!(parse_float("1,5").is_err());
    }
}
