// File: crates/pulse-core/src/axis.rs
// Summary: Axis label positioning derived from the layout parameters.

use crate::grid::{linspace, ratio_to_y};

/// Horizontal anchor for value tick text (right-aligned against the plot edge).
pub const TICK_X: f64 = 15.0;

/// Offset that centers tick text vertically on its gridline.
const TICK_BASELINE_NUDGE: f64 = 3.0;

/// A value-axis tick: rounded display text and its anchor position.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Value ticks at 0, half, and full scale of `max_value`.
pub fn value_ticks(max_value: f64, height: f64) -> Vec<ValueTick> {
    linspace(0.0, 1.0, 3)
        .into_iter()
        .map(|ratio| ValueTick {
            text: format!("{}", (max_value * ratio).round() as i64),
            x: TICK_X,
            y: ratio_to_y(ratio, height) + TICK_BASELINE_NUDGE,
        })
        .collect()
}

/// Baseline for the per-point labels along the bottom edge.
#[inline]
pub fn label_baseline(height: f64) -> f64 {
    height - 5.0
}
