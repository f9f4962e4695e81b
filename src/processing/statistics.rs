//! Descriptive statistics over a numeric dataset.
//!
//! All functions evaluate the textbook formulas directly. Variance and standard deviation are
//! population measures (divide by `N`). Ingestion guarantees non-empty input; for an empty slice
//! the float-valued functions return `NaN` and [`mode`] returns `None`.

use crate::types::{FrequencyTable, Statistics};

/// Number of values.
pub fn count(data: &[f64]) -> usize {
    data.len()
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / count(data) as f64
}

/// Middle value of the sorted data; the mean of the two middle values for even counts.
pub fn median(data: &[f64]) -> f64 {
    let n = count(data);
    if n == 0 {
        return f64::NAN;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = n / 2;
    if n % 2 == 0 {
        mean(&[sorted[mid - 1], sorted[mid]])
    } else {
        sorted[mid]
    }
}

/// Most frequent value.
///
/// On ties the value that reached the highest count first wins. Returns `None` when no value
/// repeats. `-0.0` and `0.0` count as the same value.
pub fn mode(data: &[f64]) -> Option<f64> {
    let mut counts = FrequencyTable::new();
    let mut best: Option<(u64, usize)> = None;

    for &value in data {
        let key = value_key(value);
        let c = counts.increment(key);
        if best.is_none_or(|(_, max)| c > max) {
            best = Some((key, c));
        }
    }

    match best {
        Some((key, max)) if max > 1 => Some(f64::from_bits(key)),
        _ => None,
    }
}

fn value_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Population variance: `Σ(xi - mean)² / N`.
pub fn variance(data: &[f64]) -> f64 {
    let avg = mean(data);
    let squared_diffs: f64 = data.iter().map(|x| (x - avg).powi(2)).sum();
    squared_diffs / count(data) as f64
}

/// Population standard deviation.
pub fn standard_deviation(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Compute every statistic of `data` at once.
pub fn describe(data: &[f64]) -> Statistics {
    Statistics {
        count: count(data),
        mean: mean(data),
        median: median(data),
        mode: mode(data),
        variance: variance(data),
        std_dev: standard_deviation(data),
    }
}
