//! Extents and box-and-whisker statistics.
//!
//! Every function here skips non-finite values, so cells left unparsed by
//! lenient coercion never reach a scale domain or a quartile.

use serde::Serialize;

/// Tukey fence multiplier.
pub const FENCE_FACTOR: f64 = 1.5;

/// `(min, max)` over the finite values, `None` when there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Quantile of an ascending slice by linear interpolation between the order
/// statistics around rank `p * (n - 1)` (the R-7 estimator).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }
    let rank = (n - 1) as f64 * p;
    let i0 = rank.floor() as usize;
    let lower = sorted[i0];
    let upper = sorted[i0 + 1];
    Some(lower + (upper - lower) * (rank - i0 as f64))
}

// ---------------------------------------------------------------------------
// QuartileSummary
// ---------------------------------------------------------------------------

/// Five-number summary of one group, with Tukey fences as whisker ends.
///
/// The whiskers are not clamped to the observed data: they may reach past
/// `min`/`max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuartileSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    /// Number of finite values summarised.
    pub count: usize,
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
}

impl QuartileSummary {
    /// Summarise the finite values; `None` when there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;

        Some(QuartileSummary {
            q1,
            median,
            q3,
            iqr,
            whisker_low: q1 - FENCE_FACTOR * iqr,
            whisker_high: q3 + FENCE_FACTOR * iqr,
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        })
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// One summary per distinct key, in the order keys were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummaries<K> {
    entries: Vec<(K, QuartileSummary)>,
}

impl<K: PartialEq> GroupSummaries<K> {
    pub fn iter(&self) -> impl Iterator<Item = (&K, &QuartileSummary)> {
        self.entries.iter().map(|(k, s)| (k, s))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl<K: PartialEq> GroupSummaries<K> {
    pub fn get(&self, key: &K) -> Option<&QuartileSummary> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, summary)| summary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Group `items` by `key` and summarise `value` within each group.
///
/// A group with no finite values is left out, since it has no quartiles.
pub fn summarize_by<'a, T, K, FK, FV>(
    items: impl IntoIterator<Item = &'a T>,
    key: FK,
    value: FV,
) -> GroupSummaries<K>
where
    T: 'a,
    K: PartialEq + Clone,
    FK: Fn(&T) -> &K,
    FV: Fn(&T) -> f64,
{
    let mut groups: Vec<(K, Vec<f64>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(g, _)| g == k) {
            Some((_, values)) => values.push(value(item)),
            None => groups.push((k.clone(), vec![value(item)])),
        }
    }

    let entries = groups
        .into_iter()
        .filter_map(|(k, values)| QuartileSummary::from_values(values).map(|s| (k, s)))
        .collect();
    GroupSummaries { entries }
}
