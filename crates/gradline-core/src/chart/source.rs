//! Data model and the provider contract.
//!
//! The chart pulls everything it draws from a [`ChartDataSource`], queried
//! afresh on every reload. Nothing is cached between reloads.

use serde::{Deserialize, Serialize};

/// A single sample in data coordinates.
///
/// Carries no identity beyond its position in the provider's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// X-coordinate in data space
    pub x: f32,
    /// Y-coordinate in data space
    pub y: f32,
}

impl DataPoint {
    /// Create a new data point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Upper bounds of the visible data range on each axis.
///
/// The chart shows `[0, max_x] x [0, max_y]`; samples outside that range are
/// dropped, not clamped. Both components must be strictly positive — the
/// renderer treats a violation as a provider contract failure and panics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMaxima {
    /// Upper bound of the x axis
    pub max_x: f32,
    /// Upper bound of the y axis
    pub max_y: f32,
}

impl AxisMaxima {
    /// Create new axis maxima
    pub const fn new(max_x: f32, max_y: f32) -> Self {
        Self { max_x, max_y }
    }
}

/// How per-index samples map onto the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleLayout {
    /// Only `y` of each sample is read; x is derived from the index as
    /// `max_x * i / (N - 1)`, spacing the N samples uniformly across the axis
    #[default]
    UniformX,
    /// The sample supplies both coordinates
    ExplicitX,
}

/// Supplier of chart data.
///
/// Re-expresses the usual weak-delegate pattern as a plain borrowed trait:
/// the chart holds no reference to its source and takes one per reload call.
pub trait ChartDataSource {
    /// Number of samples available.
    ///
    /// Counts of 0 or 1 are ordinary and simply produce an empty chart.
    fn point_count(&self) -> usize;

    /// Visible data range; both components must be strictly positive.
    fn axis_maxima(&self) -> AxisMaxima;

    /// Sample at `index` in `[0, point_count())`.
    ///
    /// Under [`SampleLayout::UniformX`] only the `y` coordinate is read and
    /// the returned `x` is ignored.
    fn sample(&self, index: usize) -> DataPoint;
}
