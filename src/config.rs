//! Plot configuration and layout mode selection

/// How bars for multiple categories are drawn at each sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    /// One bar per category per sample, side by side
    Grouped,
    /// One accumulated bar per sample, segments may extend below zero
    Stacked,
}

impl BarMode {
    /// Resolve the barmode from the `stacking` configuration option.
    ///
    /// Absent, `"group"` and `"normal"` select Grouped; any other value
    /// (e.g. an explicit `"stacked"`) selects Stacked.
    pub fn from_stacking(stacking: Option<&str>) -> Self {
        match stacking {
            None | Some("group") | Some("normal") => BarMode::Grouped,
            Some(_) => BarMode::Stacked,
        }
    }
}

/// Order in which category entries are listed in the legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendOrder {
    /// Same order as the traces are drawn
    Normal,
    /// Largest-drawn-last categories still listed first
    Reversed,
}

/// Configuration for one bar plot (shared by all of its datasets/tabs)
#[derive(Debug, Clone, Default)]
pub struct PlotConfig {
    /// Stable plot identifier, used in error messages and export file names
    pub id: String,
    /// Plot title
    pub title: Option<String>,
    /// Barmode selector, see [`BarMode::from_stacking`]
    pub stacking: Option<String>,
    /// Add a percent-of-total view for each dataset
    pub add_percentage_tab: bool,
    /// Add a log-scale view for each dataset
    pub add_log_tab: bool,
    /// Value formatting hint for hover labels, e.g. "{value:.2}"
    pub hover_format: Option<String>,
    /// Suffix appended to value-axis tick labels, e.g. "%" or " bp"
    pub tick_suffix: Option<String>,
    /// Title for the value axis (the category axis gets none)
    pub value_axis_title: Option<String>,
}

impl PlotConfig {
    pub fn bar_mode(&self) -> BarMode {
        BarMode::from_stacking(self.stacking.as_deref())
    }
}
