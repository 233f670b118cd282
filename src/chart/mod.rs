//! Chart assembly: declarative chart descriptors for the rendering backend
//!
//! Emits one `charming::Chart` per dataset per view: a horizontal bar trace
//! per category plus the layout (axes, legend, tooltip, barmode). The backend
//! decides final auto-fit within the allowed axis range. Hover hints are
//! consumed here: an explicit `PlotConfig::hover_format` becomes the tooltip
//! formatter, and `Dataset::hover_decimals` sets the display precision of the
//! trace values.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, Tooltip, Trigger},
    series::Bar,
};

use crate::config::{BarMode, LegendOrder};
use crate::plot::{BarPlot, Dataset};

/// Render width in pixels; the height is computed per dataset
pub const CHART_WIDTH: u32 = 1080;

/// Which value transform and axis scale a chart is assembled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View {
    /// Percent-of-total values instead of absolute values
    pub percentage: bool,
    /// Log-scaled value axis
    pub log_scale: bool,
}

/// The views requested by the plot configuration, absolute-linear first
pub fn views(plot: &BarPlot) -> Vec<View> {
    let mut out = vec![View::default()];
    if plot.config.add_percentage_tab {
        out.push(View {
            percentage: true,
            log_scale: false,
        });
    }
    if plot.config.add_log_tab {
        out.push(View {
            percentage: false,
            log_scale: true,
        });
        if plot.config.add_percentage_tab {
            out.push(View {
                percentage: true,
                log_scale: true,
            });
        }
    }
    out
}

/// Pixel size to render one dataset's chart at
pub fn render_size(dataset: &Dataset) -> (u32, u32) {
    (CHART_WIDTH, dataset.height)
}

/// Assemble the chart descriptor for one dataset and view.
///
/// Samples run along the vertical category axis (first sample at the top),
/// values along the horizontal axis.
pub fn build_chart(plot: &BarPlot, dataset: &Dataset, view: View) -> Chart {
    let mut chart = Chart::new()
        .grid(Grid::new().contain_label(true))
        .tooltip(hover_tooltip(plot));

    if let Some(title) = &plot.config.title {
        chart = chart.title(Title::new().text(title).left("center"));
    }

    if dataset.show_legend() {
        let mut names: Vec<String> = dataset.cats.iter().map(|c| c.name.clone()).collect();
        if plot.legend_order == LegendOrder::Reversed {
            names.reverse();
        }
        chart = chart.legend(Legend::new().data(names));
    }

    chart = chart
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(dataset.samples.clone())
                .inverse(true),
        )
        .x_axis(value_axis(plot, dataset, view));

    for (idx, cat) in dataset.cats.iter().enumerate() {
        let values = match (&dataset.pct_values, view.percentage) {
            (Some(pct), true) => &pct[idx],
            _ => &cat.values,
        };
        let values = round_for_display(values, dataset.hover_decimals);

        let mut bar = Bar::new()
            .name(&cat.name)
            .data(values)
            .item_style(ItemStyle::new().color(Color::Value(cat.color.to_hex())))
            .label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Inside)
                    .formatter("{c}"),
            );
        if plot.bar_mode == BarMode::Stacked {
            bar = bar.stack("total");
        }
        chart = chart.series(bar);
    }

    chart
}

/// Unified hover across the categories of a sample. An explicit hover format
/// from the shared layout defaults is republished as the tooltip formatter.
fn hover_tooltip(plot: &BarPlot) -> Tooltip {
    let mut tooltip = Tooltip::new().trigger(Trigger::Axis);
    if let Some(fmt) = &plot.config.hover_format {
        tooltip = tooltip.formatter(fmt.as_str());
    }
    tooltip
}

/// Round trace values to the hover precision hint so labels and hover
/// readouts show whole numbers for integral data and two decimals otherwise.
/// NaN stays NaN.
fn round_for_display(values: &[f64], decimals: usize) -> Vec<f64> {
    let scale = 10f64.powi(decimals as i32);
    values.iter().map(|v| (v * scale).round() / scale).collect()
}

/// Value axis with scale, title, tick suffix and the allowed range for the
/// requested view
fn value_axis(plot: &BarPlot, dataset: &Dataset, view: View) -> Axis {
    let mut axis = Axis::new().type_(if view.log_scale {
        AxisType::Log
    } else {
        AxisType::Value
    });

    if let Some(title) = &plot.config.value_axis_title {
        axis = axis.name(title.as_str());
    }
    if let Some(suffix) = &plot.config.tick_suffix {
        let fmt = format!("{{value}}{}", suffix);
        axis = axis.axis_label(AxisLabel::new().formatter(fmt.as_str()));
    }

    // A log axis cannot clamp at or below zero, so the allowed range only
    // applies to linear views
    if !view.log_scale {
        if view.percentage {
            if let Some(pct_min) = dataset.pct_min {
                axis = axis.min(pct_min);
            }
            // Grouped percent bars do not sum to 100, so the max is left to
            // auto-scale
            if plot.bar_mode == BarMode::Stacked {
                axis = axis.max(100);
            }
        } else {
            axis = axis.min(dataset.abs_range.min).max(dataset.abs_range.max);
        }
    }

    axis
}
