//! Heap-backed raster surface for composing finished chart frames.
//!
//! The chart draws into this RAM buffer and the completed frame is handed to
//! a display sink as a unit. Sinks have no partial-update contract, so the
//! buffer keeps no change tracking; [`FrameBuffer::blit`] always sends the
//! whole frame.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Dynamically sized pixel buffer implementing `DrawTarget<Color = Rgb565>`.
///
/// All writes are clipped to the buffer bounds, so drawing code may emit
/// coordinates outside the frame without error.
#[derive(Clone)]
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    /// Allocate a new frame filled with the given color.
    pub fn new(size: Size, fill: Rgb565) -> Self {
        let count = size.width as usize * size.height as usize;
        Self {
            size,
            pixels: vec![fill; count],
        }
    }

    /// Read a single pixel, or `None` when the coordinate is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        (x < self.size.width && y < self.size.height)
            .then(|| self.pixels[(y * self.size.width + x) as usize])
    }

    /// Raw pixel storage in row-major order.
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.size.width as usize + x;
        self.pixels[idx] = color;
    }

    /// Copy the whole frame onto another draw target at the origin.
    pub fn blit<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = Rectangle::new(Point::zero(), self.size);
        display.fill_contiguous(&area, self.pixels.iter().copied())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        let area_x = area.top_left.x.max(0) as usize;
        let area_y = area.top_left.y.max(0) as usize;
        let area_w = area.size.width as usize;
        let area_h = area.size.height as usize;

        let mut colors = colors.into_iter();
        for row in 0..area_h {
            let y = area_y + row;
            for col in 0..area_w {
                let x = area_x + col;
                if let Some(color) = colors.next()
                    && x < w
                    && y < h
                {
                    self.set_pixel(x, y, color);
                }
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        let x_start = (area.top_left.x.max(0) as usize).min(w);
        let y_start = (area.top_left.y.max(0) as usize).min(h);
        let x_end = ((area.top_left.x.max(0) as usize).saturating_add(area.size.width as usize)).min(w);
        let y_end = ((area.top_left.y.max(0) as usize).saturating_add(area.size.height as usize)).min(h);

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}
