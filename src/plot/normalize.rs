//! Category normalization and shape checks

use super::{Category, CategoryInput, NAME_WRAP_WIDTH, wrap_name};
use crate::color::parse_color;
use crate::error::{PlotError, Result};

/// Validate and canonicalize the raw category records of one dataset.
///
/// Names are required and soft-wrapped for display, color tokens are parsed
/// into normalized RGB, and each value series must not be longer than the
/// sample list (shorter series are padded later by completion).
pub(crate) fn normalize_categories(
    plot_id: &str,
    cats: Vec<CategoryInput>,
    n_samples: usize,
) -> Result<Vec<Category>> {
    cats.into_iter()
        .map(|cat| {
            if cat.name.trim().is_empty() {
                return Err(PlotError::Validation {
                    plot_id: plot_id.to_string(),
                    message: "missing 'name' field in category".to_string(),
                });
            }
            if cat.values.len() > n_samples {
                return Err(PlotError::Shape {
                    plot_id: plot_id.to_string(),
                    message: format!(
                        "category {:?} has {} values for {} samples",
                        cat.name,
                        cat.values.len(),
                        n_samples
                    ),
                });
            }
            let color = parse_color(&cat.color)?;
            Ok(Category {
                name: wrap_name(&cat.name, NAME_WRAP_WIDTH),
                color,
                values: cat.values,
            })
        })
        .collect()
}
