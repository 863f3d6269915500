//! Gradient line-chart rendering for small raster displays.
//!
//! The chart queries a data provider for axis maxima and per-index samples,
//! drops out-of-range samples, projects the survivors into pixel space, and
//! rasterizes a stroked polyline over a vertical gradient that fades out
//! toward the bottom of the plot area. The finished frame goes to a display
//! sink; anything with fewer than two usable points clears the sink instead.
//!
//! # Example
//!
//! ```ignore
//! use embedded_graphics::prelude::*;
//! use gradline_core::chart::*;
//!
//! let mut chart = GradientLineChart::<64>::new()
//!     .with_layout(SampleLayout::UniformX)
//!     .with_style(ChartStyle::default());
//!
//! chart.reload(&source, &mut sink, Size::new(50, 50))?;
//! ```

use thiserror_no_std::Error;

mod canvas;
mod component;
pub mod constants;
mod draw;
mod source;
mod style;

pub use canvas::{Canvas, CanvasInsets};
pub use component::{DisplaySink, GradientLineChart};
pub use source::{AxisMaxima, ChartDataSource, DataPoint, SampleLayout};
pub use style::{ChartStyle, GradientAnchor, GradientFill, PointMarkers};

/// Recoverable chart errors.
///
/// Non-positive axis maxima are a contract violation of the data provider and
/// panic instead; degenerate input (fewer than two usable points) is ordinary
/// behavior and produces no error at all.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The provider reported more points than the chart can hold
    #[error("point capacity exceeded (max: {max})")]
    PointCapacityExceeded {
        /// Compile-time plotted-point capacity
        max: usize,
    },

    /// The configured insets leave no plot area on the requested canvas
    #[error("canvas too small for configured insets ({width}x{height} plot area)")]
    DegenerateCanvas {
        /// Remaining plot-area width in pixels
        width: u32,
        /// Remaining plot-area height in pixels
        height: u32,
    },
}

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;
