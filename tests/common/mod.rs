//! Shared fixtures for integration tests

use bargraph::{CategoryInput, PlotConfig};

/// Category input record with the given color token
pub fn cat(name: &str, color: &str, values: &[f64]) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        color: color.to_string(),
        values: values.to_vec(),
    }
}

pub fn samples(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Stacked-mode configuration with no extra tabs
pub fn stacked_config(id: &str) -> PlotConfig {
    PlotConfig {
        id: id.to_string(),
        stacking: Some("stacked".to_string()),
        ..PlotConfig::default()
    }
}
