//! Value-series transforms: completion, percentage, log-view ordering

use std::cmp::Ordering;

use super::Category;

/// Right-pad short value series with zeros up to the sample count.
///
/// A padded zero means "no data reported for this sample", distinct from NaN
/// which means "explicitly missing".
pub(crate) fn complete(mut cats: Vec<Category>, n_samples: usize) -> Vec<Category> {
    for cat in &mut cats {
        if cat.values.len() < n_samples {
            cat.values.resize(n_samples, 0.0);
        }
    }
    cats
}

/// Per-sample totals for percentage mode: sum of absolute values across
/// categories, NaN excluded from the sum entirely
pub(crate) fn sample_totals(cats: &[Category], n_samples: usize) -> Vec<f64> {
    let mut totals = vec![0.0; n_samples];
    for cat in cats {
        for (i, &v) in cat.values.iter().enumerate() {
            if !v.is_nan() {
                totals[i] += v.abs();
            }
        }
    }
    totals
}

/// Percent-of-total series for every category, sign-preserving.
///
/// A zero total maps to zero percent rather than a division error; NaN raw
/// values stay NaN.
pub(crate) fn percent_values(cats: &[Category], totals: &[f64]) -> Vec<Vec<f64>> {
    cats.iter()
        .map(|cat| {
            cat.values
                .iter()
                .zip(totals)
                .map(|(&v, &total)| if total == 0.0 { 0.0 } else { v / total * 100.0 })
                .collect()
        })
        .collect()
}

/// Sort categories ascending by total value so a log-scaled view draws the
/// smallest series first. The percent series, when present, is permuted the
/// same way to stay parallel. This order is shared by all views of the
/// dataset.
pub(crate) fn log_reorder(cats: &mut Vec<Category>, pct_values: &mut Option<Vec<Vec<f64>>>) {
    let totals: Vec<f64> = cats.iter().map(|cat| series_total(&cat.values)).collect();

    let mut order: Vec<usize> = (0..cats.len()).collect();
    order.sort_by(|&a, &b| totals[a].partial_cmp(&totals[b]).unwrap_or(Ordering::Equal));

    let reordered: Vec<Category> = order.iter().map(|&i| cats[i].clone()).collect();
    *cats = reordered;
    if let Some(pct) = pct_values {
        let reordered: Vec<Vec<f64>> = order.iter().map(|&i| pct[i].clone()).collect();
        *pct = reordered;
    }
}

// NaN-skipping so one missing value does not poison the sort key
fn series_total(values: &[f64]) -> f64 {
    values.iter().filter(|v| !v.is_nan()).sum()
}
