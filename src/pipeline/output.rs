use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::{ReportError, ReportResult};

/// Shortest round-trip form, keeping `.0` on whole numbers (`3.0`, `2.5`, `0.1`).
///
/// Exponents carry a sign and at least two digits (`1e+16`, `2.5e-05`); NaN prints as `nan`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_owned();
    }
    let repr = format!("{v:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Seconds with six decimals.
pub fn format_seconds(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}

/// Write each line followed by a newline.
pub fn print_report(lines: &[String], console: &mut dyn Write) -> io::Result<()> {
    for line in lines {
        writeln!(console, "{line}")?;
    }
    console.flush()
}

/// Save `lines` joined with `\n` to `path`, creating missing parent directories.
pub fn save_report(lines: &[String], path: &Path) -> ReportResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| write_error(path, e))?;
    }
    fs::write(path, lines.join("\n")).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, err: io::Error) -> ReportError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => ReportError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ReportError::Io(err),
    }
}
