//! Default values for chart styling and layout.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Default polyline stroke width in pixels
pub const DEFAULT_LINE_WIDTH_PX: u32 = 2;

/// Default polyline stroke color
pub const DEFAULT_LINE_COLOR: Rgb565 = Rgb565::BLUE;

/// Default diameter of point markers in pixels
pub const DEFAULT_MARKER_DIAMETER_PX: u32 = 4;

/// Default gradient fill color (light gray, as in the classic watch-face look)
pub const DEFAULT_FILL_COLOR: Rgb565 = Rgb565::new(26, 52, 26);

/// Default gradient fill opacity (0 = invisible, 255 = solid at the anchor)
pub const DEFAULT_FILL_OPACITY: u8 = 176;

/// Default number of gradient bands between the anchor and the plot bottom
pub const DEFAULT_FILL_BANDS: u8 = 16;

/// Default frame background color
pub const DEFAULT_BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Minimum number of plotted points required to draw anything
pub const MIN_PLOTTED_POINTS: usize = 2;
