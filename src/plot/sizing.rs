//! Chart height as a pure function of data shape

use crate::config::BarMode;

const MIN_HEIGHT: u32 = 300;
const MAX_HEIGHT: u32 = 2560;

/// Vertical room reserved per legend entry
const HEIGHT_PER_LEGEND_ITEM: usize = 19;

/// Fixed allowance for title and footer
const TITLE_FOOTER_MARGIN: usize = 140;

/// Pixel allowance per bar; denser charts get less room per bar since their
/// labels shrink
fn bar_size(n_bars: usize) -> usize {
    if n_bars >= 30 {
        15
    } else if n_bars >= 20 {
        20
    } else if n_bars >= 10 {
        25
    } else if n_bars >= 5 {
        30
    } else {
        35
    }
}

/// Compute the chart height in pixels.
///
/// Grouped mode draws one bar per category per sample, so the effective bar
/// count is multiplied by the category count. `max_cats` must be the maximum
/// category count across all datasets of the plot so that switching tabs does
/// not resize the legend area.
pub fn calc_height(n_samples: usize, max_cats: usize, mode: BarMode) -> u32 {
    let n_bars = match mode {
        BarMode::Stacked => n_samples,
        BarMode::Grouped => n_samples * max_cats,
    };

    let bars_height = n_bars * bar_size(n_bars);
    let legend_height = HEIGHT_PER_LEGEND_ITEM * max_cats;
    let height = bars_height.max(legend_height) + TITLE_FOOTER_MARGIN;

    (height as u32).clamp(MIN_HEIGHT, MAX_HEIGHT)
}
