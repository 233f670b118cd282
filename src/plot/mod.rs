//! Bar plot model construction
//!
//! Builds a fully specified rendering model from raw tabular category data:
//! normalized categories, completed value series, percentage and log-view
//! variants, chart height and allowed axis ranges. Each dataset runs through a
//! fixed pipeline (normalize, complete, percentage, log reorder) and is
//! immutable once the plot is built.

mod normalize;
mod range;
mod sizing;
mod transform;

#[cfg(test)]
mod tests;

pub use range::AxisRange;
pub use sizing::calc_height;

use crate::color::Rgb;
use crate::config::{BarMode, LegendOrder, PlotConfig};
use crate::error::{PlotError, Result};

/// Soft-wrap column for long category names
pub(crate) const NAME_WRAP_WIDTH: usize = 80;

/// Raw category record as supplied by a report module.
///
/// `values` holds one number per sample in sample order; it may be shorter
/// than the sample list (missing tail samples are padded with zeros) and may
/// contain NaN to mean "explicitly missing".
#[derive(Debug, Clone, Default)]
pub struct CategoryInput {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Normalized category: soft-wrapped display name, parsed color, and one
/// value per sample once completion has run. Not mutated after construction;
/// derived series (percentages) live on the dataset, parallel by index.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub color: Rgb,
    pub values: Vec<f64>,
}

/// One tab of the plot: sample labels along the category axis plus the value
/// series of every category
#[derive(Debug)]
pub struct Dataset {
    /// Stable identifier, used for the export artifact
    pub id: String,
    pub samples: Vec<String>,
    pub cats: Vec<Category>,
    /// Percent-of-total series, parallel to `cats`; present only when the
    /// percentage tab is enabled
    pub pct_values: Option<Vec<Vec<f64>>>,
    /// Chart height in pixels
    pub height: u32,
    /// Allowed value-axis range for the absolute view
    pub abs_range: AxisRange,
    /// Lowest percent value across samples (negative for charts with negative
    /// raw values); present only when the percentage tab is enabled
    pub pct_min: Option<f64>,
    /// Decimal places for hover values when no explicit format is configured
    pub hover_decimals: usize,
}

impl Dataset {
    /// Legend is only shown when there is more than one category to tell apart
    pub fn show_legend(&self) -> bool {
        self.cats.len() > 1
    }
}

/// Assembled bar plot model: one dataset per tab, shared configuration and
/// layout mode
#[derive(Debug)]
pub struct BarPlot {
    pub config: PlotConfig,
    pub bar_mode: BarMode,
    pub legend_order: LegendOrder,
    pub datasets: Vec<Dataset>,
}

impl BarPlot {
    /// Build the plot model from raw per-tab category lists and sample lists.
    ///
    /// Fails fast on the first validation, color or shape error; no partial
    /// model is produced.
    pub fn build(
        cats_lists: Vec<Vec<CategoryInput>>,
        samples_lists: Vec<Vec<String>>,
        config: PlotConfig,
    ) -> Result<BarPlot> {
        if cats_lists.len() != samples_lists.len() {
            return Err(PlotError::Shape {
                plot_id: config.id.clone(),
                message: format!(
                    "{} category lists for {} sample lists",
                    cats_lists.len(),
                    samples_lists.len()
                ),
            });
        }

        let bar_mode = config.bar_mode();
        let n_datasets = cats_lists.len();

        // Normalize every dataset up front so any input error aborts the
        // whole plot before derived values are computed
        let mut normalized: Vec<Vec<Category>> = Vec::with_capacity(n_datasets);
        for (cats, samples) in cats_lists.into_iter().zip(&samples_lists) {
            normalized.push(normalize::normalize_categories(
                &config.id,
                cats,
                samples.len(),
            )?);
        }

        // The legend allowance uses the maximum category count across all
        // tabs so switching tabs does not resize the legend area
        let max_cats = normalized.iter().map(Vec::len).max().unwrap_or(0);

        let mut datasets = Vec::with_capacity(n_datasets);
        for (idx, (cats, samples)) in normalized.into_iter().zip(samples_lists).enumerate() {
            let mut cats = transform::complete(cats, samples.len());

            let height = sizing::calc_height(samples.len(), max_cats, bar_mode);
            let abs_range = range::absolute_range(&cats, samples.len(), bar_mode);

            let (mut pct_values, pct_min) = if config.add_percentage_tab {
                let totals = transform::sample_totals(&cats, samples.len());
                let pct = transform::percent_values(&cats, &totals);
                let min = range::percent_min(&pct, samples.len(), bar_mode);
                (Some(pct), Some(min))
            } else {
                (None, None)
            };

            if config.add_log_tab {
                // Shared category order across all views of this dataset
                transform::log_reorder(&mut cats, &mut pct_values);
            }

            let hover_decimals = infer_hover_decimals(&cats);

            datasets.push(Dataset {
                id: dataset_id(&config.id, idx, n_datasets),
                samples,
                cats,
                pct_values,
                height,
                abs_range,
                pct_min,
                hover_decimals,
            });
        }

        // Grouped traces draw in reverse legend order; a log tab flips the
        // legend for every view so the largest category stays listed first
        let legend_order = if bar_mode == BarMode::Grouped || config.add_log_tab {
            LegendOrder::Reversed
        } else {
            LegendOrder::Normal
        };

        Ok(BarPlot {
            config,
            bar_mode,
            legend_order,
            datasets,
        })
    }
}

fn dataset_id(plot_id: &str, idx: usize, n_datasets: usize) -> String {
    if n_datasets == 1 {
        plot_id.to_string()
    } else {
        format!("{}_{}", plot_id, idx + 1)
    }
}

/// Hover precision hint: whole numbers get no decimals, anything fractional
/// gets two (NaN ignored)
fn infer_hover_decimals(cats: &[Category]) -> usize {
    let integral = cats
        .iter()
        .all(|cat| cat.values.iter().all(|v| v.is_nan() || v.fract() == 0.0));
    if integral { 0 } else { 2 }
}

/// Soft-wrap a display name at `width` columns, breaking at whitespace where
/// possible and hard-breaking words longer than a full line
pub(crate) fn wrap_name(name: &str, width: usize) -> String {
    let mut out = String::with_capacity(name.len());
    let mut line_len = 0usize;
    for word in name.split_inclusive(char::is_whitespace) {
        let word_len = word.chars().count();
        // Trailing whitespace doesn't count against the line width
        let visible_len = word.trim_end().chars().count();
        if line_len > 0 && line_len + visible_len > width && visible_len <= width {
            break_line(&mut out, &mut line_len);
        }
        if visible_len > width {
            for ch in word.chars() {
                if line_len >= width {
                    break_line(&mut out, &mut line_len);
                }
                out.push(ch);
                line_len += 1;
            }
        } else {
            out.push_str(word);
            line_len += word_len;
        }
    }
    out
}

fn break_line(out: &mut String, line_len: &mut usize) {
    out.truncate(out.trim_end().len());
    out.push('\n');
    *line_len = 0;
}
