//! Error types for plot construction and export

use thiserror::Error;

/// Errors raised while building a bar plot model.
///
/// All variants except `Export` are raised during the normalization/shape-check
/// stage and abort construction of the whole plot. `Export` is only produced by
/// the data-file write and never affects the assembled chart model.
#[derive(Error, Debug)]
pub enum PlotError {
    /// A required category field is missing or empty
    #[error("plot {plot_id}: {message}")]
    Validation { plot_id: String, message: String },

    /// A color token could not be parsed into an RGB triple
    #[error("unrecognized color token: {token:?}")]
    ColorParse { token: String },

    /// Category/sample counts do not line up
    #[error("plot {plot_id}: {message}")]
    Shape { plot_id: String, message: String },

    /// The export artifact could not be written
    #[error("failed to write data file: {0}")]
    Export(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
