// File: crates/pulse-core/src/lib.rs
// Summary: Core library entry point; exports public API for series layout.

pub mod axis;
pub mod error;
pub mod grid;
pub mod layout;
pub mod metric;
pub mod series;
pub mod store;
pub mod theme;
pub mod types;

pub use axis::{label_baseline, value_ticks, ValueTick};
pub use error::LayoutError;
pub use layout::{layout_series, layout_series_default, Layout, RenderedPoint};
pub use metric::{DescriptorTable, MetricDescriptor, MetricKind};
pub use series::{Series, SeriesPoint};
pub use store::{monthly_series, weekly_series, MemoryStore, Sample, SampleStore};
pub use theme::Theme;
