// File: crates/pulse-core/src/store.rs
// Summary: Sample repository seam and series aggregation helpers.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::metric::MetricKind;
use crate::series::{Series, SeriesPoint};

/// One dated measurement of a metric.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub recorded_at: NaiveDate,
    pub metric: MetricKind,
    pub value: f64,
}

impl Sample {
    pub fn new(recorded_at: NaiveDate, metric: MetricKind, value: f64) -> Self {
        Self { recorded_at, metric, value }
    }
}

/// Repository seam for recorded samples. Injected into whatever builds series,
/// rather than reaching into ambient global storage.
pub trait SampleStore {
    fn save(&mut self, sample: Sample);
    fn list(&self) -> &[Sample];
}

/// In-memory store; keeps samples in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    samples: Vec<Sample>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SampleStore for MemoryStore {
    fn save(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    fn list(&self) -> &[Sample] {
        &self.samples
    }
}

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sum `metric` samples per weekday into a Monday-first seven-point series.
/// Weekdays without samples contribute zero.
pub fn weekly_series(samples: &[Sample], metric: MetricKind) -> Series {
    let mut totals = [0.0f64; 7];
    for s in samples.iter().filter(|s| s.metric == metric) {
        totals[s.recorded_at.weekday().num_days_from_monday() as usize] += s.value;
    }
    Series::with_points(
        WEEKDAY_LABELS
            .iter()
            .zip(totals)
            .map(|(label, value)| SeriesPoint::new(*label, value))
            .collect(),
    )
}

/// Sum `metric` samples per calendar month, in chronological order. Only
/// months with samples appear.
pub fn monthly_series(samples: &[Sample], metric: MetricKind) -> Series {
    let mut totals: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for s in samples.iter().filter(|s| s.metric == metric) {
        let key = (s.recorded_at.year(), s.recorded_at.month());
        *totals.entry(key).or_insert(0.0) += s.value;
    }
    Series::with_points(
        totals
            .into_iter()
            .map(|((_, month), value)| {
                SeriesPoint::new(MONTH_LABELS[(month - 1) as usize], value)
            })
            .collect(),
    )
}
