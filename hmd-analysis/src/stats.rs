//! Numerical helpers behind the renderers.
//!
//! Series are slices of `Option<f64>` where `None` is a gap in the data or
//! an undefined result. Everything here is pure and tolerates empty input.

use chrono::Datelike;
use hmd_core::{Metric, MobilityRecord};
use std::collections::BTreeMap;

/// Arithmetic mean of the defined values, or `None` if there are none.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Trailing moving average over `window` consecutive entries.
///
/// The output has the same length as the input. The first `window - 1`
/// entries are `None`, as is any window containing a gap.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            let slice = &values[i + 1 - window..=i];
            let sum = slice.iter().try_fold(0.0, |acc, v| v.map(|v| acc + v))?;
            Some(sum / window as f64)
        })
        .collect()
}

/// Percent change of each entry against its immediate predecessor.
///
/// The first entry is `None`. An entry is also `None` when either operand is
/// missing or the predecessor is zero.
pub fn pct_change(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(None);
    for pair in values.windows(2) {
        let change = match (pair[0], pair[1]) {
            (Some(prev), Some(cur)) if prev != 0.0 => Some((cur / prev - 1.0) * 100.0),
            _ => None,
        };
        out.push(change);
    }
    out
}

/// Pearson correlation over the pairs where both values are present.
///
/// `None` when fewer than two complete pairs exist or either side has zero
/// variance.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Pairwise Pearson correlation of all six metrics, indexed by
/// [`Metric::index`].
///
/// The matrix is symmetric. A diagonal cell is exactly `1.0` whenever the
/// metric is non-degenerate and `None` otherwise.
pub fn correlation_matrix(records: &[MobilityRecord]) -> [[Option<f64>; 6]; 6] {
    let columns: Vec<Vec<Option<f64>>> = Metric::ALL
        .iter()
        .map(|m| records.iter().map(|r| r.value(*m)).collect())
        .collect();
    let mut matrix = [[None; 6]; 6];
    for i in 0..6 {
        for j in i..6 {
            let r = pearson(&columns[i], &columns[j]);
            let r = if i == j { r.map(|_| 1.0) } else { r };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}

/// Mean of `metric` per calendar year, in ascending year order. Years whose
/// values are all missing are omitted.
pub fn yearly_means(records: &[MobilityRecord], metric: Metric) -> Vec<(i32, f64)> {
    let mut by_year: BTreeMap<i32, Vec<Option<f64>>> = BTreeMap::new();
    for r in records {
        by_year.entry(r.date.year()).or_default().push(r.value(metric));
    }
    by_year
        .into_iter()
        .filter_map(|(year, values)| mean(values).map(|m| (year, m)))
        .collect()
}

/// The first `n` and last `n` entries of a ranking, each keeping the
/// ranking's order. The two halves overlap when fewer than `2 * n` entries
/// exist.
pub fn head_and_tail<T: Clone>(ranked: &[T], n: usize) -> (Vec<T>, Vec<T>) {
    let head = ranked.iter().take(n).cloned().collect();
    let tail = ranked[ranked.len().saturating_sub(n)..].to_vec();
    (head, tail)
}
