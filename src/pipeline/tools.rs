//! The three concrete reports.

use std::path::Path;

use crate::error::ReportResult;
use crate::ingestion::{parse_float, parse_truncated_int, LineReader};
use crate::processing::statistics::describe;
use crate::processing::words::{get_word_frequencies_with, PUNCTUATION};
use crate::types::{ConversionRow, Metric, Statistics, WordFrequencies};

use super::output::{format_float, format_seconds};
use super::{FileReport, OutputDestination, ReportTool};

pub const STATISTICS_RESULTS_DIR: &str = "results/p1";
pub const STATISTICS_RESULTS_FILE: &str = "StatisticsResults.txt";
pub const CONVERSION_RESULTS_DIR: &str = "results/p2";
pub const CONVERSION_RESULTS_FILE: &str = "ConversionResults.txt";
pub const WORD_COUNT_RESULTS_DIR: &str = "results/p3";
pub const WORD_COUNT_RESULTS_FILE: &str = "WordCountResults.txt";

/// Descriptive statistics, one column per file and one row per metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsTool {
    /// Rows of the report, in order.
    pub metrics: Vec<Metric>,
}

impl Default for StatisticsTool {
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.to_vec(),
        }
    }
}

impl StatisticsTool {
    fn cell(report: &FileReport<Statistics>, metric: Metric) -> String {
        let stats = &report.output;
        match metric {
            Metric::Count => stats.count.to_string(),
            Metric::Mean => format_float(stats.mean),
            Metric::Median => format_float(stats.median),
            Metric::Mode => stats
                .mode
                .map(format_float)
                .unwrap_or_else(|| "None".to_string()),
            Metric::Var => format_float(stats.variance),
            Metric::Std => format_float(stats.std_dev),
            Metric::Time => format_seconds(report.elapsed),
        }
    }
}

impl ReportTool for StatisticsTool {
    type Output = Statistics;

    fn default_destination(&self) -> OutputDestination {
        OutputDestination::new(STATISTICS_RESULTS_DIR, STATISTICS_RESULTS_FILE)
    }

    fn compute(&self, path: &Path, reader: &LineReader) -> ReportResult<Statistics> {
        let read = reader.read_values(path, parse_float)?;
        Ok(describe(&read.values))
    }

    fn records(&self, output: &Statistics) -> usize {
        output.count
    }

    fn format(&self, reports: &[FileReport<Statistics>]) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.metrics.len() + 1);

        let header: Vec<&str> = std::iter::once("")
            .chain(reports.iter().map(|r| r.name.as_str()))
            .collect();
        lines.push(header.join("\t"));

        for &metric in &self.metrics {
            let row: Vec<String> = std::iter::once(metric.name().to_string())
                .chain(reports.iter().map(|r| Self::cell(r, metric)))
                .collect();
            lines.push(row.join("\t"));
        }
        lines
    }
}

/// Binary and hexadecimal renderings of every integer, one section per file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionTool;

impl ReportTool for ConversionTool {
    type Output = Vec<ConversionRow>;

    fn default_destination(&self) -> OutputDestination {
        OutputDestination::new(CONVERSION_RESULTS_DIR, CONVERSION_RESULTS_FILE)
    }

    fn compute(&self, path: &Path, reader: &LineReader) -> ReportResult<Vec<ConversionRow>> {
        let read = reader.read_values(path, parse_truncated_int)?;
        Ok(read.values.into_iter().map(ConversionRow::from_value).collect())
    }

    fn records(&self, output: &Vec<ConversionRow>) -> usize {
        output.len()
    }

    fn format(&self, reports: &[FileReport<Vec<ConversionRow>>]) -> Vec<String> {
        let mut lines = vec!["Decimal\tBinary\tHexadecimal".to_string()];
        for report in reports {
            lines.push(String::new());
            lines.push(format!("# {}", report.name));
            for row in &report.output {
                lines.push(format!("{}\t{}\t{}", row.decimal, row.binary, row.hexadecimal));
            }
            lines.push(format!("# Time: {} seconds", format_seconds(report.elapsed)));
        }
        lines
    }
}

/// Word frequencies of each file's whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountTool {
    /// Characters stripped from every token.
    pub punctuation: String,
}

impl Default for WordCountTool {
    fn default() -> Self {
        Self {
            punctuation: PUNCTUATION.to_string(),
        }
    }
}

impl ReportTool for WordCountTool {
    type Output = WordFrequencies;

    fn default_destination(&self) -> OutputDestination {
        OutputDestination::new(WORD_COUNT_RESULTS_DIR, WORD_COUNT_RESULTS_FILE)
    }

    fn compute(&self, path: &Path, reader: &LineReader) -> ReportResult<WordFrequencies> {
        let text = reader.read_text(path)?;
        Ok(get_word_frequencies_with(&text, &self.punctuation))
    }

    fn records(&self, output: &WordFrequencies) -> usize {
        output.total()
    }

    fn format(&self, reports: &[FileReport<WordFrequencies>]) -> Vec<String> {
        let mut lines = Vec::new();
        for report in reports {
            lines.push(format!("# {}", report.name));
            lines.push("Word\tCount".to_string());
            for (word, count) in report.output.iter() {
                lines.push(format!("{word}\t{count}"));
            }
            lines.push(format!("Total\t{}", report.output.total()));
            lines.push(format!("Time\t{}", format_seconds(report.elapsed)));
            lines.push(String::new());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::{ConversionTool, StatisticsTool, WordCountTool};
    use crate::pipeline::{FileReport, ReportTool};
    use crate::processing::statistics::describe;
    use crate::processing::words::get_word_frequencies;
    use crate::types::{ConversionRow, Metric};

    fn report<T>(name: &str, output: T) -> FileReport<T> {
        FileReport {
            path: PathBuf::from(name),
            name: name.to_string(),
            output,
            elapsed: Duration::from_micros(250),
        }
    }

    #[test]
    fn statistics_table_has_one_column_per_file() {
        let reports = vec![
            report("a.txt", describe(&[1.0, 2.0, 2.0, 3.0])),
            report("b.txt", describe(&[1.0, 2.0, 3.0, 4.0])),
        ];
        let lines = StatisticsTool::default().format(&reports);
        assert_eq!(
            lines,
            vec![
                "\ta.txt\tb.txt",
                "Count\t4\t4",
                "Mean\t2.0\t2.5",
                "Median\t2.0\t2.5",
                "Mode\t2.0\tNone",
                "Var\t0.5\t1.25",
                "Std\t0.7071067811865476\t1.118033988749895",
                "Time\t0.000250\t0.000250",
            ]
        );
    }

    #[test]
    fn statistics_metrics_are_configurable() {
        let tool = StatisticsTool {
            metrics: vec![Metric::Median, Metric::Count],
        };
        let lines = tool.format(&[report("x", describe(&[3.0, 1.0, 2.0]))]);
        assert_eq!(lines, vec!["\tx", "Median\t2.0", "Count\t3"]);
    }

    #[test]
    fn conversion_sections_are_delimited_per_file() {
        let rows = vec![ConversionRow::from_value(10), ConversionRow::from_value(-3)];
        let lines = ConversionTool.format(&[report("nums.txt", rows)]);
        assert_eq!(
            lines,
            vec![
                "Decimal\tBinary\tHexadecimal",
                "",
                "# nums.txt",
                "10\t1010\tA",
                "-3\t-11\t-3",
                "# Time: 0.000250 seconds",
            ]
        );
    }

    #[test]
    fn word_count_sections_end_with_totals() {
        let lines = WordCountTool::default().format(&[
            report("one.txt", get_word_frequencies("to be or not to be")),
            report("empty.txt", get_word_frequencies("")),
        ]);
        assert_eq!(
            lines,
            vec![
                "# one.txt",
                "Word\tCount",
                "to\t2",
                "be\t2",
                "or\t1",
                "not\t1",
                "Total\t6",
                "Time\t0.000250",
                "",
                "# empty.txt",
                "Word\tCount",
                "Total\t0",
                "Time\t0.000250",
                "",
            ]
        );
    }
}
