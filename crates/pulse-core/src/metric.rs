// File: crates/pulse-core/src/metric.rs
// Summary: Metric identifiers and the descriptor lookup table.

use std::collections::HashMap;

/// Closed set of tracked metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Steps,
    Calories,
    ActiveMinutes,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Steps,
        MetricKind::Calories,
        MetricKind::ActiveMinutes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Steps => "steps",
            MetricKind::Calories => "calories",
            MetricKind::ActiveMinutes => "active_minutes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "steps" => Some(MetricKind::Steps),
            "calories" => Some(MetricKind::Calories),
            "active_minutes" => Some(MetricKind::ActiveMinutes),
            _ => None,
        }
    }
}

/// Static detail copy for one metric: how it is computed and its unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub title: &'static str,
    pub unit: &'static str,
    pub formula: &'static str,
}

const FALLBACK: MetricDescriptor = MetricDescriptor {
    title: "Metric",
    unit: "",
    formula: "Derived automatically from recorded samples",
};

/// Explicit identifier-to-descriptor map with a defined fallback, replacing
/// any lookup keyed on display text.
pub struct DescriptorTable {
    map: HashMap<MetricKind, MetricDescriptor>,
}

impl DescriptorTable {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert(
            MetricKind::Steps,
            MetricDescriptor {
                title: "Steps",
                unit: "steps",
                formula: "Steps detected by accelerometer + GPS",
            },
        );
        map.insert(
            MetricKind::Calories,
            MetricDescriptor {
                title: "Calories",
                unit: "cal",
                formula: "Basal metabolism + physical activity + thermic effect",
            },
        );
        map.insert(
            MetricKind::ActiveMinutes,
            MetricDescriptor {
                title: "Active Minutes",
                unit: "min",
                formula: "Moderate-to-vigorous activity >= 3 METs",
            },
        );
        Self { map }
    }

    /// Descriptor for `kind`, or the fallback when none is registered.
    pub fn get(&self, kind: MetricKind) -> &MetricDescriptor {
        self.map.get(&kind).unwrap_or(&FALLBACK)
    }
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::new()
    }
}
