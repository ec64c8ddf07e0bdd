// File: crates/pulse-core/src/grid.rs
// Summary: Gridline layout helpers.

use crate::types::{drawable_height, PADDING};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Vertical position of a horizontal gridline at `ratio` of the drawable
/// height (0.0 = baseline, 1.0 = top).
#[inline]
pub fn ratio_to_y(ratio: f64, height: f64) -> f64 {
    height - (ratio * drawable_height(height) + PADDING)
}

/// Gridline positions at quarters of the drawable height, baseline first.
pub fn gridline_ys(height: f64) -> Vec<f64> {
    linspace(0.0, 1.0, 5)
        .into_iter()
        .map(|ratio| ratio_to_y(ratio, height))
        .collect()
}
