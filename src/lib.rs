//! Bar chart model builder for categorical report data
//!
//! Transforms raw per-category measurement values into a fully specified
//! bar-chart rendering model: normalized categories, completed value series,
//! chart height, allowed axis ranges, stacked/grouped layout, and optional
//! percentage and log-scale views. Chart descriptors are emitted with
//! [`charming`] and a flat per-dataset data artifact can be exported as JSON.
//!
//! ```
//! use bargraph::{BarPlot, CategoryInput, PlotConfig};
//!
//! let cats = vec![
//!     CategoryInput {
//!         name: "Aligned".to_string(),
//!         color: "#1F77B4".to_string(),
//!         values: vec![12.0, 8.0],
//!     },
//!     CategoryInput {
//!         name: "Unaligned".to_string(),
//!         color: "#FF7F0E".to_string(),
//!         values: vec![3.0, 7.0],
//!     },
//! ];
//! let samples = vec!["sample_1".to_string(), "sample_2".to_string()];
//! let config = PlotConfig {
//!     id: "alignment".to_string(),
//!     stacking: Some("stacked".to_string()),
//!     add_percentage_tab: true,
//!     ..PlotConfig::default()
//! };
//!
//! let plot = BarPlot::build(vec![cats], vec![samples], config).unwrap();
//! let chart = bargraph::chart::build_chart(
//!     &plot,
//!     &plot.datasets[0],
//!     bargraph::chart::View::default(),
//! );
//! ```

pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
mod output;
pub mod plot;

pub use color::Rgb;
pub use config::{BarMode, LegendOrder, PlotConfig};
pub use error::PlotError;
pub use plot::{AxisRange, BarPlot, Category, CategoryInput, Dataset, calc_height};
