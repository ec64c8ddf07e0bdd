// File: crates/pulse-render-svg/src/lib.rs
// Summary: SVG document emission: grid, polyline, markers, and axis labels.

use anyhow::Result;

use pulse_core::grid::gridline_ys;
use pulse_core::theme::Theme;
use pulse_core::types::{DEFAULT_HEIGHT, PADDING, PLOT_WIDTH, VIEW_WIDTH};
use pulse_core::{label_baseline, layout_series, value_ticks, LayoutError, Series};

const MARKER_RADIUS: f64 = 3.0;
const STROKE_WIDTH: f64 = 2.0;
const FONT_SIZE: f64 = 10.0;

pub struct RenderOptions {
    pub height: f64,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { height: DEFAULT_HEIGHT, theme: Theme::dark() }
    }
}

/// Render `series` to a standalone SVG document string.
///
/// Layer order matches what the geometry implies: background, gridlines, the
/// series path, per-point markers, then axis text.
pub fn render_document(series: &Series, opts: &RenderOptions) -> Result<String, LayoutError> {
    let layout = layout_series(series, opts.height)?;
    let theme = &opts.theme;
    let height = opts.height;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {VIEW_WIDTH} {height}\">\n"
    ));
    out.push_str(&format!(
        "  <rect width=\"{VIEW_WIDTH}\" height=\"{height}\" fill=\"{}\" rx=\"8\"/>\n",
        theme.background
    ));

    for y in gridline_ys(height) {
        out.push_str(&format!(
            "  <line x1=\"{PADDING}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"{}\" stroke-width=\"0.5\" opacity=\"0.3\"/>\n",
            PADDING + PLOT_WIDTH,
            theme.grid
        ));
    }

    out.push_str(&format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{STROKE_WIDTH}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
        layout.path, theme.line_stroke
    ));

    for p in &layout.points {
        out.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{MARKER_RADIUS}\" fill=\"{}\"/>\n",
            p.x, p.y, theme.marker
        ));
    }

    let baseline = label_baseline(height);
    for p in &layout.points {
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{baseline}\" text-anchor=\"middle\" font-size=\"{FONT_SIZE}\" fill=\"{}\">{}</text>\n",
            p.x,
            theme.axis_label,
            escape_text(&p.label)
        ));
    }

    for tick in value_ticks(layout.max_value, height) {
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"{FONT_SIZE}\" fill=\"{}\">{}</text>\n",
            tick.x, tick.y, theme.axis_label, tick.text
        ));
    }

    out.push_str("</svg>\n");
    Ok(out)
}

/// Render `series` and write the SVG document to `path`, creating parent
/// directories as needed.
pub fn render_to_svg(
    series: &Series,
    opts: &RenderOptions,
    path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let doc = render_document(series, opts)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, doc)?;
    Ok(())
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
