// File: crates/pulse-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors (CSS color tokens).

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_label: &'static str,
    pub line_stroke: &'static str,
    pub marker: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "hsl(240 5% 7%)",
            grid: "hsl(240 4% 17%)",
            axis_label: "hsl(240 5% 65%)",
            line_stroke: "hsl(152 70% 45%)",
            marker: "hsl(152 70% 45%)",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "hsl(0 0% 99%)",
            grid: "hsl(240 6% 90%)",
            axis_label: "hsl(240 4% 46%)",
            line_stroke: "hsl(152 60% 36%)",
            marker: "hsl(152 60% 36%)",
        }
    }

    /// Replace the series stroke (and matching markers) with a custom token.
    pub fn with_stroke(mut self, color: &'static str) -> Self {
        self.line_stroke = color;
        self.marker = color;
        self
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
