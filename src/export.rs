//! Flat per-dataset data export
//!
//! Writes one JSON artifact per dataset mapping sample name to
//! `{category name → value}`, named by the dataset's stable id. The write
//! happens once, with no retries; a failure is reported but never blocks
//! chart assembly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::output::print_warning;
use crate::plot::{BarPlot, Dataset};

/// Build the `{sample → {category → value}}` mapping for one dataset.
///
/// NaN values are exported as null. Insertion order follows sample and
/// category order.
pub fn value_by_cat_by_sample(dataset: &Dataset) -> Map<String, Value> {
    let mut by_sample = Map::new();
    for (i, sample) in dataset.samples.iter().enumerate() {
        let mut by_cat = Map::new();
        for cat in &dataset.cats {
            let v = cat.values[i];
            let value = if v.is_nan() { Value::Null } else { json!(v) };
            by_cat.insert(cat.name.clone(), value);
        }
        by_sample.insert(sample.clone(), Value::Object(by_cat));
    }
    by_sample
}

/// Write one dataset's export artifact under `dir`, returning the file path
pub fn write_dataset(dataset: &Dataset, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", dataset.id));
    let data = Value::Object(value_by_cat_by_sample(dataset));
    let text = serde_json::to_string_pretty(&data).map_err(io::Error::from)?;
    fs::write(&path, text)?;
    Ok(path)
}

/// Write the export artifacts for every dataset of the plot. A failed write
/// is reported as a warning and the remaining datasets are still exported.
pub fn write_all(plot: &BarPlot, dir: &Path) {
    for dataset in &plot.datasets {
        if let Err(e) = write_dataset(dataset, dir) {
            print_warning(&format!("could not export data for {}: {}", dataset.id, e));
        }
    }
}
