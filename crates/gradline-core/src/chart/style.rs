//! Visual style configuration for the chart.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

use super::constants::{
    DEFAULT_FILL_BANDS, DEFAULT_FILL_COLOR, DEFAULT_FILL_OPACITY, DEFAULT_LINE_COLOR,
    DEFAULT_LINE_WIDTH_PX, DEFAULT_MARKER_DIAMETER_PX,
};

/// Where the solid end of the gradient ramp is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientAnchor {
    /// At the highest pixel reached by the plotted line
    #[default]
    LineTop,
    /// At the top of the plot area, regardless of the data
    CanvasTop,
}

/// Gradient fill under the line.
///
/// `Rgb565` carries no alpha channel, so the fade to "transparent" is
/// realized by compositing against the frame background: the fill color at
/// `opacity` sits at the anchor and the ramp reaches the background color at
/// the plot bottom, quantized into `bands` steps.
#[derive(Debug, Clone, Copy)]
pub struct GradientFill {
    /// Fill color at the anchor
    pub color: Rgb565,
    /// Opacity of the fill color at the anchor (0-255)
    pub opacity: u8,
    /// Number of gradient bands to render
    pub bands: u8,
}

impl GradientFill {
    /// Create a new gradient fill
    pub const fn new(color: Rgb565, opacity: u8, bands: u8) -> Self {
        Self {
            color,
            opacity,
            bands,
        }
    }
}

impl Default for GradientFill {
    fn default() -> Self {
        Self {
            color: DEFAULT_FILL_COLOR,
            opacity: DEFAULT_FILL_OPACITY,
            bands: DEFAULT_FILL_BANDS,
        }
    }
}

/// Filled circle markers drawn at each plotted vertex.
#[derive(Debug, Clone, Copy)]
pub struct PointMarkers {
    /// Marker fill color
    pub color: Rgb565,
    /// Marker diameter in pixels
    pub diameter: u32,
}

impl Default for PointMarkers {
    fn default() -> Self {
        Self {
            color: Rgb565::WHITE,
            diameter: DEFAULT_MARKER_DIAMETER_PX,
        }
    }
}

/// Complete visual configuration for a chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    /// Polyline stroke color
    pub line_color: Rgb565,
    /// Polyline stroke width in pixels
    pub line_width: u32,
    /// Optional gradient fill under the line
    pub fill: Option<GradientFill>,
    /// Anchor for the gradient's solid end
    pub anchor: GradientAnchor,
    /// Optional markers at each vertex
    pub markers: Option<PointMarkers>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: DEFAULT_LINE_COLOR,
            line_width: DEFAULT_LINE_WIDTH_PX,
            fill: Some(GradientFill::default()),
            anchor: GradientAnchor::default(),
            markers: None,
        }
    }
}
