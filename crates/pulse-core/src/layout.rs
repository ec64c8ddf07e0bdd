// File: crates/pulse-core/src/layout.rs
// Summary: Proportional series layout; maps a labeled series to polyline geometry.

use crate::error::LayoutError;
use crate::series::Series;
use crate::types::{drawable_height, DEFAULT_HEIGHT, PADDING, PLOT_WIDTH};

/// A series point positioned on the canvas. Recomputed fully on every layout
/// call; the input series is never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Output of [`layout_series`]: normalized geometry plus the series maximum
/// used for the vertical scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub max_value: f64,
    pub points: Vec<RenderedPoint>,
    /// SVG-style path: `M x0 y0 L x1 y1 ...` in sequence order.
    pub path: String,
}

/// Lay out `series` on a canvas of `height` view-box units.
///
/// Points spread evenly across the fixed plot width; values scale relative to
/// the series maximum so the largest value sits at the top of the drawable
/// area and zero sits on the baseline. Pure and deterministic: identical
/// inputs yield identical geometry.
pub fn layout_series(series: &Series, height: f64) -> Result<Layout, LayoutError> {
    let n = series.len();
    if n < 2 {
        return Err(LayoutError::TooFewPoints { got: n });
    }
    for (index, p) in series.points.iter().enumerate() {
        if !p.value.is_finite() {
            return Err(LayoutError::NonFiniteValue { index, value: p.value });
        }
        if p.value < 0.0 {
            return Err(LayoutError::NegativeValue { index, value: p.value });
        }
    }

    let max_value = series.max_value();
    let span = drawable_height(height);
    // All-zero series collapses onto the baseline instead of dividing by zero.
    let denom = if max_value > 0.0 { max_value } else { 1.0 };

    let sx = |i: usize| -> f64 { (i as f64 / (n - 1) as f64) * PLOT_WIDTH + PADDING };
    let sy = |v: f64| -> f64 { height - ((v / denom) * span + PADDING) };

    let points: Vec<RenderedPoint> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| RenderedPoint {
            label: p.label.clone(),
            value: p.value,
            x: sx(i),
            y: sy(p.value),
        })
        .collect();

    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            path.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{} {} {}", cmd, p.x, p.y));
    }

    Ok(Layout { max_value, points, path })
}

/// [`layout_series`] at the default canvas height.
pub fn layout_series_default(series: &Series) -> Result<Layout, LayoutError> {
    layout_series(series, DEFAULT_HEIGHT)
}
