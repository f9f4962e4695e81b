//! Core data model types shared by ingestion, processing and reporting.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A named metric row of the statistics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Number of values.
    Count,
    /// Arithmetic mean.
    Mean,
    /// Middle value (or mean of the two middle values).
    Median,
    /// Most frequent value, if any value repeats.
    Mode,
    /// Population variance.
    Var,
    /// Population standard deviation.
    Std,
    /// Seconds spent reading and computing the file.
    Time,
}

impl Metric {
    /// Report order of all metrics.
    pub const ALL: [Metric; 7] = [
        Metric::Count,
        Metric::Mean,
        Metric::Median,
        Metric::Mode,
        Metric::Var,
        Metric::Std,
        Metric::Time,
    ];

    /// Row label used in the report.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Count => "Count",
            Metric::Mean => "Mean",
            Metric::Median => "Median",
            Metric::Mode => "Mode",
            Metric::Var => "Var",
            Metric::Std => "Std",
            Metric::Time => "Time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptive statistics of one numeric dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// `None` when no value repeats.
    pub mode: Option<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

/// One line of the conversion report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRow {
    pub decimal: i64,
    pub binary: String,
    pub hexadecimal: String,
}

/// A line that failed conversion during tolerant ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source file.
    pub line: usize,
    /// The trimmed line content.
    pub raw: String,
    /// Converter message.
    pub reason: String,
}

/// Occurrence counts keyed in first-seen order.
///
/// Iteration order is the order in which keys were first inserted, which makes "first key to
/// reach a count" questions deterministic.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add one occurrence of `key` and return its updated count.
    pub fn increment(&mut self, key: K) -> usize {
        match self.index.get(&key) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.1 += 1;
                entry.1
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
                1
            }
        }
    }

    /// Count recorded for `key` (0 if never seen).
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Iterate `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }
}

impl<K> Default for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Word → occurrence count, in first-occurrence order. Keys are case-sensitive.
pub type WordFrequencies = FrequencyTable<String>;

impl WordFrequencies {
    /// Owned `(word, count)` pairs, mostly useful for assertions.
    pub fn to_vec(&self) -> Vec<(String, usize)> {
        self.iter().map(|(w, c)| (w.clone(), c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FrequencyTable, Metric, WordFrequencies};

    #[test]
    fn frequency_table_keeps_first_seen_order() {
        let mut table = FrequencyTable::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            table.increment(key);
        }
        let pairs: Vec<_> = table.iter().map(|(k, c)| (*k, c)).collect();
        assert_eq!(pairs, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(table.total(), 6);
        assert_eq!(table.get(&"z"), 0);
    }

    #[test]
    fn word_frequencies_compare_by_content_and_order() {
        let mut a = WordFrequencies::new();
        a.increment("x".to_string());
        a.increment("y".to_string());
        let mut b = WordFrequencies::new();
        b.increment("y".to_string());
        b.increment("x".to_string());
        assert_ne!(a, b);
        assert_eq!(a.get("x"), 1);
    }

    #[test]
    fn metrics_render_their_row_labels() {
        let names: Vec<_> = Metric::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["Count", "Mean", "Median", "Mode", "Var", "Std", "Time"]);
    }
}
