//! Rasterization of the polyline, vertex markers, and under-line gradient.
//!
//! Everything draws through `embedded-graphics` primitives onto any
//! `DrawTarget<Color = Rgb565>`, so the same code serves the internal frame
//! buffer and direct display targets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

extern crate alloc;
use alloc::vec::Vec;

use super::style::{GradientFill, PointMarkers};

/// Stroke the open polyline through `points` in order.
pub(super) fn draw_polyline<D: DrawTarget<Color = Rgb565>>(
    points: &[Point],
    color: Rgb565,
    width: u32,
    display: &mut D,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_stroke(color, width);
    for pair in points.windows(2) {
        Line::new(pair[0], pair[1]).into_styled(style).draw(display)?;
    }
    Ok(())
}

/// Draw a filled circle marker centered on each vertex.
pub(super) fn draw_markers<D: DrawTarget<Color = Rgb565>>(
    points: &[Point],
    markers: &PointMarkers,
    display: &mut D,
) -> Result<(), D::Error> {
    let style = PrimitiveStyle::with_fill(markers.color);
    let half = (markers.diameter / 2) as i32;

    for point in points {
        Circle::new(Point::new(point.x - half, point.y - half), markers.diameter)
            .into_styled(style)
            .draw(display)?;
    }
    Ok(())
}

/// Paint the vertical gradient between the polyline and the plot bottom.
///
/// The ramp is global: the solid end sits on the `anchor_y` row and the
/// background color is reached at `bottom`, so every column shows a slice of
/// the same vertical gradient. Each column spanned by a segment is painted
/// from the interpolated line y down to `bottom`, which fills exactly the
/// closed region under the line.
pub(super) fn draw_gradient_fill<D: DrawTarget<Color = Rgb565>>(
    points: &[Point],
    anchor_y: i32,
    bottom: i32,
    fill: &GradientFill,
    background: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    if points.len() < 2 || anchor_y >= bottom {
        return Ok(());
    }

    let bands = band_colors(fill, background);
    let span = bottom - anchor_y;

    for pair in points.windows(2) {
        let (mut a, mut b) = (pair[0], pair[1]);
        if a.x > b.x {
            core::mem::swap(&mut a, &mut b);
        }

        let dx = (b.x - a.x).max(1) as f32;
        for x in a.x..=b.x {
            let t = (x - a.x) as f32 / dx;
            let y_line = a.y + ((b.y - a.y) as f32 * t) as i32;
            draw_gradient_column(x, y_line, anchor_y, bottom, span, &bands, display)?;
        }
    }
    Ok(())
}

/// Paint one column of the gradient from the line down to the plot bottom.
fn draw_gradient_column<D: DrawTarget<Color = Rgb565>>(
    x: i32,
    y_line: i32,
    anchor_y: i32,
    bottom: i32,
    span: i32,
    bands: &[Rgb565],
    display: &mut D,
) -> Result<(), D::Error> {
    if y_line >= bottom {
        return Ok(());
    }

    let top = y_line.max(anchor_y);
    let count = bands.len() as i32;

    for (index, color) in bands.iter().enumerate() {
        let index = index as i32;
        let band_start = anchor_y + span * index / count;
        let band_end = if index == count - 1 {
            bottom
        } else {
            anchor_y + span * (index + 1) / count
        };

        let start = band_start.max(top);
        let end = band_end.min(bottom);
        if start <= end {
            Line::new(Point::new(x, start), Point::new(x, end))
                .into_styled(PrimitiveStyle::with_stroke(*color, 1))
                .draw(display)?;
        }
    }
    Ok(())
}

/// Band color table from the composited fill color down to the background.
pub(super) fn band_colors(fill: &GradientFill, background: Rgb565) -> Vec<Rgb565> {
    let count = fill.bands.max(1) as usize;
    let start = mix_rgb565(background, fill.color, fill.opacity as u32, 255);

    let mut colors = Vec::with_capacity(count);
    for index in 0..count {
        colors.push(mix_rgb565(start, background, index as u32, count as u32));
    }
    colors
}

/// Blend `from` toward `to` by `num / den` using widened RGB888 components.
fn mix_rgb565(from: Rgb565, to: Rgb565, num: u32, den: u32) -> Rgb565 {
    let (fr, fg, fb) = widen(from);
    let (tr, tg, tb) = widen(to);
    let mix = |f: u32, t: u32| (f * (den - num) + t * num) / den;

    Rgb565::new(
        (mix(fr, tr) >> 3) as u8,
        (mix(fg, tg) >> 2) as u8,
        (mix(fb, tb) >> 3) as u8,
    )
}

/// Expand 5/6/5-bit channels to 8 bits, replicating the high bits.
fn widen(color: Rgb565) -> (u32, u32, u32) {
    let raw = color.into_storage() as u32;
    let r5 = (raw >> 11) & 0x1f;
    let g6 = (raw >> 5) & 0x3f;
    let b5 = raw & 0x1f;

    ((r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2))
}
