// File: crates/pulse-core/src/error.rs
// Summary: Error type for series layout.

use thiserror::Error;

/// Errors raised when a series cannot be laid out.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Horizontal spacing interpolates between points, so at least two are
    /// required. A single point or an empty series is rejected rather than
    /// producing NaN geometry.
    #[error("series must contain at least two points, got {got}")]
    TooFewPoints { got: usize },

    /// Values are magnitudes; a negative value would invert the geometry.
    #[error("negative value {value} at index {index}")]
    NegativeValue { index: usize, value: f64 },

    /// NaN and infinities cannot be scaled; left unchecked they leak straight
    /// into the output path.
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },
}
