// File: crates/pulse-core/src/types.rs
// Summary: Shared layout constants (plot width, paddings, default height).

/// Logical plot width, in view-box units. Points are distributed across this
/// span regardless of how large the host paints the chart.
pub const PLOT_WIDTH: f64 = 300.0;

/// Margin reserved on each edge of the canvas before data is plotted.
pub const PADDING: f64 = 20.0;

/// Full view-box width: plot width plus padding on both sides.
pub const VIEW_WIDTH: f64 = PLOT_WIDTH + PADDING * 2.0;

/// Default drawing-area height in view-box units.
pub const DEFAULT_HEIGHT: f64 = 120.0;

/// Drawable vertical span for a given canvas height.
/// Contract: `height` should exceed `2 * PADDING`.
#[inline]
pub fn drawable_height(height: f64) -> f64 {
    height - PADDING * 2.0
}
