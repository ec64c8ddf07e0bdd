// File: crates/pulse-core/src/series.rs
// Summary: Ordered, labeled series model for activity measurements.

/// One labeled sample in an ordered series (e.g. `("Mon", 45.0)`).
/// Order is meaningful; labels are not required to be unique. Values must be
/// finite and non-negative; [`crate::layout_series`] rejects anything else.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered sequence of labeled measurements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_points(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn from_pairs<L: AsRef<str>>(pairs: &[(L, f64)]) -> Self {
        Self {
            points: pairs
                .iter()
                .map(|(label, value)| SeriesPoint::new(label.as_ref(), *value))
                .collect(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(SeriesPoint::new(label, value));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series, or 0.0 when empty.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}
