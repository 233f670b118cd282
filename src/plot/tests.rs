//! Unit tests for the plot construction pipeline

use super::{BarPlot, CategoryInput, calc_height, wrap_name};
use crate::config::{BarMode, LegendOrder, PlotConfig};
use crate::error::PlotError;

/// Category input with a fixed valid color (for testing)
fn cat(name: &str, values: &[f64]) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        color: "#1F77B4".to_string(),
        values: values.to_vec(),
    }
}

fn samples(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn stacked_config() -> PlotConfig {
    PlotConfig {
        id: "test_plot".to_string(),
        stacking: Some("stacked".to_string()),
        ..PlotConfig::default()
    }
}

fn grouped_config() -> PlotConfig {
    PlotConfig {
        id: "test_plot".to_string(),
        ..PlotConfig::default()
    }
}

fn build_one(cats: Vec<CategoryInput>, sample_names: &[&str], config: PlotConfig) -> BarPlot {
    BarPlot::build(vec![cats], vec![samples(sample_names)], config).unwrap()
}

#[test]
fn test_barmode_from_stacking() {
    assert_eq!(BarMode::from_stacking(None), BarMode::Grouped);
    assert_eq!(BarMode::from_stacking(Some("group")), BarMode::Grouped);
    assert_eq!(BarMode::from_stacking(Some("normal")), BarMode::Grouped);
    assert_eq!(BarMode::from_stacking(Some("stacked")), BarMode::Stacked);
    assert_eq!(BarMode::from_stacking(Some("relative")), BarMode::Stacked);
}

#[test]
fn test_completion_pads_short_series() {
    let plot = build_one(vec![cat("X", &[5.0])], &["a", "b", "c"], stacked_config());
    assert_eq!(plot.datasets[0].cats[0].values, vec![5.0, 0.0, 0.0]);
}

#[test]
fn test_completion_makes_all_series_sample_length() {
    let plot = build_one(
        vec![cat("X", &[1.0, 2.0]), cat("Y", &[]), cat("Z", &[1.0, 2.0, 3.0, 4.0])],
        &["a", "b", "c", "d"],
        stacked_config(),
    );
    for c in &plot.datasets[0].cats {
        assert_eq!(c.values.len(), plot.datasets[0].samples.len());
    }
}

#[test]
fn test_too_many_values_is_shape_error() {
    let err = BarPlot::build(
        vec![vec![cat("X", &[1.0, 2.0, 3.0])]],
        vec![samples(&["a", "b"])],
        stacked_config(),
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::Shape { .. }));
}

#[test]
fn test_dataset_count_mismatch_is_shape_error() {
    let err = BarPlot::build(
        vec![vec![cat("X", &[1.0])], vec![cat("Y", &[1.0])]],
        vec![samples(&["a"])],
        stacked_config(),
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::Shape { .. }));
}

#[test]
fn test_missing_name_is_validation_error() {
    let err = BarPlot::build(
        vec![vec![CategoryInput {
            name: "  ".to_string(),
            color: "#000000".to_string(),
            values: vec![1.0],
        }]],
        vec![samples(&["a"])],
        stacked_config(),
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::Validation { .. }));
}

#[test]
fn test_invalid_color_aborts_plot() {
    let err = BarPlot::build(
        vec![vec![CategoryInput {
            name: "X".to_string(),
            color: "notacolor".to_string(),
            values: vec![1.0],
        }]],
        vec![samples(&["a"])],
        stacked_config(),
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::ColorParse { .. }));
}

#[test]
fn test_percentages_basic_scenario() {
    // A: 1 vs 3 -> 25/75, B: 2 vs 2 -> 50/50, C: 3 vs 1 -> 75/25
    let mut config = stacked_config();
    config.add_percentage_tab = true;
    let plot = build_one(
        vec![cat("X", &[1.0, 2.0, 3.0]), cat("Y", &[3.0, 2.0, 1.0])],
        &["A", "B", "C"],
        config,
    );
    let pct = plot.datasets[0].pct_values.as_ref().unwrap();
    assert_eq!(pct[0], vec![25.0, 50.0, 75.0]);
    assert_eq!(pct[1], vec![75.0, 50.0, 25.0]);
}

#[test]
fn test_percentages_zero_total_sample() {
    let mut config = stacked_config();
    config.add_percentage_tab = true;
    let plot = build_one(
        vec![cat("X", &[0.0, 2.0]), cat("Y", &[0.0, 2.0])],
        &["a", "b"],
        config,
    );
    let pct = plot.datasets[0].pct_values.as_ref().unwrap();
    assert_eq!(pct[0][0], 0.0);
    assert_eq!(pct[1][0], 0.0);
    assert_eq!(pct[0][1], 50.0);
}

#[test]
fn test_percentages_preserve_sign() {
    let mut config = grouped_config();
    config.add_percentage_tab = true;
    let plot = build_one(
        vec![cat("up", &[3.0]), cat("down", &[-1.0])],
        &["a"],
        config,
    );
    let pct = plot.datasets[0].pct_values.as_ref().unwrap();
    // Totals use absolute values: 3 + 1 = 4
    assert_eq!(pct[0][0], 75.0);
    assert_eq!(pct[1][0], -25.0);
    assert_eq!(plot.datasets[0].pct_min, Some(-25.0));
}

#[test]
fn test_percentages_exclude_nan_from_totals() {
    let mut config = stacked_config();
    config.add_percentage_tab = true;
    let plot = build_one(
        vec![cat("X", &[f64::NAN]), cat("Y", &[2.0]), cat("Z", &[6.0])],
        &["a"],
        config,
    );
    let pct = plot.datasets[0].pct_values.as_ref().unwrap();
    // Total is 8, not NaN and not 8 + something for the NaN entry
    assert!(pct[0][0].is_nan());
    assert_eq!(pct[1][0], 25.0);
    assert_eq!(pct[2][0], 75.0);
}

#[test]
fn test_percentages_scale_invariant() {
    let build_pct = |k: f64| {
        let mut config = stacked_config();
        config.add_percentage_tab = true;
        let plot = build_one(
            vec![
                cat("X", &[1.0 * k, 2.0 * k]),
                cat("Y", &[3.0 * k, 4.0 * k]),
            ],
            &["a", "b"],
            config,
        );
        plot.datasets[0].pct_values.clone().unwrap()
    };
    let base = build_pct(1.0);
    let scaled = build_pct(1000.0);
    for (b, s) in base.iter().flatten().zip(scaled.iter().flatten()) {
        assert!((b - s).abs() < 1e-9, "expected {} == {}", b, s);
    }
}

#[test]
fn test_height_bounds() {
    for n_samples in 1..200 {
        for max_cats in 1..20 {
            for mode in [BarMode::Stacked, BarMode::Grouped] {
                let h = calc_height(n_samples, max_cats, mode);
                assert!((300..=2560).contains(&h), "height {} out of bounds", h);
            }
        }
    }
}

#[test]
fn test_height_monotonic_within_density_tiers() {
    // The per-bar allowance is a step function, so heights grow with sample
    // count within each density tier (and shrink only at a tier boundary
    // where the allowance drops)
    for tier in [1..5, 5..10, 10..20, 20..30, 30..300] {
        let mut prev = 0;
        for n_samples in tier {
            let h = calc_height(n_samples, 1, BarMode::Stacked);
            assert!(h >= prev, "height decreased at {} samples", n_samples);
            prev = h;
        }
    }
}

#[test]
fn test_height_step_function() {
    // 4 bars at 35px each is below the 300px floor
    assert_eq!(calc_height(4, 1, BarMode::Stacked), 300);
    // 10 bars * 25px + 140 margin
    assert_eq!(calc_height(10, 1, BarMode::Stacked), 390);
    // 30 bars * 15px + 140 margin
    assert_eq!(calc_height(30, 1, BarMode::Stacked), 590);
    // Grouped multiplies bars by categories: 10 * 3 = 30 bars
    assert_eq!(calc_height(10, 3, BarMode::Grouped), 590);
}

#[test]
fn test_height_reserves_legend_room() {
    // 1 stacked bar but 40 legend entries: 40 * 19 + 140 = 900
    assert_eq!(calc_height(1, 40, BarMode::Stacked), 900);
}

#[test]
fn test_stacked_range_scenario() {
    let plot = build_one(
        vec![cat("X", &[1.0, 2.0, 3.0]), cat("Y", &[3.0, 2.0, 1.0])],
        &["A", "B", "C"],
        stacked_config(),
    );
    let range = plot.datasets[0].abs_range;
    assert_eq!(range.max, 4.0);
    assert_eq!(range.min, 0.0);
}

#[test]
fn test_grouped_range_is_single_category_extreme() {
    let plot = build_one(
        vec![cat("X", &[1.0, 2.0, 3.0]), cat("Y", &[3.0, 2.0, 1.0])],
        &["A", "B", "C"],
        grouped_config(),
    );
    let range = plot.datasets[0].abs_range;
    assert_eq!(range.max, 3.0);
    assert_eq!(range.min, 1.0);
}

#[test]
fn test_stacked_range_with_negatives() {
    let plot = build_one(
        vec![cat("X", &[2.0, -1.0]), cat("Y", &[-3.0, 4.0])],
        &["a", "b"],
        stacked_config(),
    );
    let range = plot.datasets[0].abs_range;
    // Positive sums: 2 and 4; negative sums: -3 and -1
    assert_eq!(range.max, 4.0);
    assert_eq!(range.min, -3.0);
}

#[test]
fn test_range_ignores_nan() {
    let plot = build_one(
        vec![cat("X", &[f64::NAN, 2.0]), cat("Y", &[1.0, f64::NAN])],
        &["a", "b"],
        grouped_config(),
    );
    let range = plot.datasets[0].abs_range;
    assert_eq!(range.max, 2.0);
    assert_eq!(range.min, 1.0);
}

#[test]
fn test_log_reorder_sorts_ascending_by_total() {
    let mut config = stacked_config();
    config.add_log_tab = true;
    let plot = build_one(
        vec![
            cat("big", &[10.0, 10.0]),
            cat("small", &[1.0, 1.0]),
            cat("mid", &[3.0, 3.0]),
        ],
        &["a", "b"],
        config,
    );
    let names: Vec<&str> = plot.datasets[0]
        .cats
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["small", "mid", "big"]);
    assert_eq!(plot.legend_order, LegendOrder::Reversed);
}

#[test]
fn test_log_reorder_preserves_categories_and_percent_series() {
    let mut config = stacked_config();
    config.add_log_tab = true;
    config.add_percentage_tab = true;
    let plot = build_one(
        vec![cat("big", &[9.0]), cat("small", &[1.0])],
        &["a"],
        config,
    );
    let ds = &plot.datasets[0];
    assert_eq!(ds.cats.len(), 2);
    // Percent series must follow the reordered categories
    assert_eq!(ds.cats[0].name, "small");
    let pct = ds.pct_values.as_ref().unwrap();
    assert_eq!(pct[0], vec![10.0]);
    assert_eq!(pct[1], vec![90.0]);
}

#[test]
fn test_legend_order_rules() {
    let plot = build_one(vec![cat("X", &[1.0])], &["a"], stacked_config());
    assert_eq!(plot.legend_order, LegendOrder::Normal);

    let plot = build_one(vec![cat("X", &[1.0])], &["a"], grouped_config());
    assert_eq!(plot.legend_order, LegendOrder::Reversed);
}

#[test]
fn test_height_uses_max_cats_across_datasets() {
    let config = stacked_config();
    let plot = BarPlot::build(
        vec![
            (0..40).map(|i| cat(&format!("c{}", i), &[1.0])).collect(),
            vec![cat("only", &[1.0])],
        ],
        vec![samples(&["a"]), samples(&["a"])],
        config,
    )
    .unwrap();
    // Both tabs reserve legend room for 40 entries
    assert_eq!(plot.datasets[0].height, plot.datasets[1].height);
    assert_eq!(plot.datasets[1].height, 900);
}

#[test]
fn test_dataset_ids() {
    let plot = build_one(vec![cat("X", &[1.0])], &["a"], stacked_config());
    assert_eq!(plot.datasets[0].id, "test_plot");

    let plot = BarPlot::build(
        vec![vec![cat("X", &[1.0])], vec![cat("X", &[1.0])]],
        vec![samples(&["a"]), samples(&["a"])],
        stacked_config(),
    )
    .unwrap();
    assert_eq!(plot.datasets[0].id, "test_plot_1");
    assert_eq!(plot.datasets[1].id, "test_plot_2");
}

#[test]
fn test_hover_decimals_inference() {
    let plot = build_one(vec![cat("X", &[1.0, 2.0])], &["a", "b"], stacked_config());
    assert_eq!(plot.datasets[0].hover_decimals, 0);

    let plot = build_one(vec![cat("X", &[1.5, 2.0])], &["a", "b"], stacked_config());
    assert_eq!(plot.datasets[0].hover_decimals, 2);
}

#[test]
fn test_wrap_name_short_name_unchanged() {
    assert_eq!(wrap_name("Aligned reads", 80), "Aligned reads");
}

#[test]
fn test_wrap_name_breaks_at_whitespace() {
    let wrapped = wrap_name("alpha beta gamma", 10);
    assert_eq!(wrapped, "alpha beta\ngamma");
}

#[test]
fn test_wrap_name_hard_breaks_long_words() {
    let wrapped = wrap_name(&"x".repeat(25), 10);
    let lines: Vec<&str> = wrapped.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.chars().count() <= 10));
}
