//! Canvas geometry and data-to-pixel projection.
//!
//! Maps data coordinates in `[0, max_x] x [0, max_y]` onto the plot area of a
//! pixel canvas, with the y axis flipped (raster origin top-left, data origin
//! bottom-left). Out-of-range filtering happens in data space before any
//! projection, so the mapping here is total.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::source::{AxisMaxima, DataPoint};

/// Per-edge pixel insets shrinking the plot area inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasInsets {
    /// Top inset in pixels
    pub top: u32,
    /// Right inset in pixels
    pub right: u32,
    /// Bottom inset in pixels
    pub bottom: u32,
    /// Left inset in pixels
    pub left: u32,
}

impl CanvasInsets {
    /// No insets; the plot area covers the full canvas.
    pub const ZERO: Self = Self::uniform(0);

    /// Equal insets on all four edges
    pub const fn uniform(inset: u32) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }

    /// Insets with specific values per edge
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Pixel-space target for one render: canvas size plus plot-area insets.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    size: Size,
    insets: CanvasInsets,
}

impl Canvas {
    /// Create a canvas covering `size` with no insets.
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            insets: CanvasInsets::ZERO,
        }
    }

    /// Shrink the plot area by the given insets.
    pub const fn with_insets(mut self, insets: CanvasInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Full canvas size
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The plot area (canvas minus insets), clamped to zero size.
    pub fn plot_area(&self) -> Rectangle {
        let top_left = Point::new(self.insets.left as i32, self.insets.top as i32);
        let width = self
            .size
            .width
            .saturating_sub(self.insets.left + self.insets.right);
        let height = self
            .size
            .height
            .saturating_sub(self.insets.top + self.insets.bottom);

        Rectangle::new(top_left, Size::new(width, height))
    }

    /// Project a data point into pixel space.
    ///
    /// `px = left + w * (x / max_x)`, `py = top + h * (1 - y / max_y)` — a
    /// linear scale per axis with y flipped so larger values render higher.
    /// In-range input lands inside the plot area by construction.
    pub fn project(&self, maxima: AxisMaxima, point: DataPoint) -> (f32, f32) {
        let area = self.plot_area();
        let x_ratio = point.x / maxima.max_x;
        let y_ratio = 1.0 - point.y / maxima.max_y;

        (
            area.top_left.x as f32 + area.size.width as f32 * x_ratio,
            area.top_left.y as f32 + area.size.height as f32 * y_ratio,
        )
    }

    /// [`Canvas::project`] rounded to the nearest pixel.
    pub fn project_pixel(&self, maxima: AxisMaxima, point: DataPoint) -> Point {
        let (px, py) = self.project(maxima, point);
        // In-range projections are non-negative, so +0.5 truncation rounds.
        Point::new((px + 0.5) as i32, (py + 0.5) as i32)
    }
}
