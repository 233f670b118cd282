//! Allowed value-axis bounds
//!
//! Advisory clamps passed to chart assembly as the "allowed range" of the
//! value axis; the rendering backend may still auto-fit within them.

use super::Category;
use crate::config::BarMode;

/// Inclusive min/max clamp for the value axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Bounds for the absolute view.
///
/// Grouped bars are independent, so the bounds are the extreme single
/// category values. Stacked bars accumulate, so the bounds are the extreme
/// positive-only and negative-only per-sample sums.
pub(crate) fn absolute_range(cats: &[Category], n_samples: usize, mode: BarMode) -> AxisRange {
    let series: Vec<&[f64]> = cats.iter().map(|cat| cat.values.as_slice()).collect();
    let (min, max) = match mode {
        BarMode::Grouped => grouped_bounds(&series, n_samples),
        BarMode::Stacked => stacked_bounds(&series, n_samples),
    };
    AxisRange { min, max }
}

/// Minimum bound for the percent view. The maximum is implicit (~100 when
/// stacked, auto-scaled when grouped), but the minimum must be computed so
/// charts with negative values render correctly.
pub(crate) fn percent_min(pct_values: &[Vec<f64>], n_samples: usize, mode: BarMode) -> f64 {
    let series: Vec<&[f64]> = pct_values.iter().map(Vec::as_slice).collect();
    match mode {
        BarMode::Grouped => grouped_bounds(&series, n_samples).0,
        BarMode::Stacked => stacked_bounds(&series, n_samples).0,
    }
}

fn grouped_bounds(series: &[&[f64]], n_samples: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for i in 0..n_samples {
        for values in series {
            let v = values[i];
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() { (min, max) } else { (0.0, 0.0) }
}

fn stacked_bounds(series: &[&[f64]], n_samples: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for i in 0..n_samples {
        // NaN contributes to neither sum: it fails both sign tests
        let positive: f64 = series.iter().map(|v| v[i]).filter(|&v| v > 0.0).sum();
        let negative: f64 = series.iter().map(|v| v[i]).filter(|&v| v < 0.0).sum();
        min = min.min(negative);
        max = max.max(positive);
    }
    if min.is_finite() { (min, max) } else { (0.0, 0.0) }
}
