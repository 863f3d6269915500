//! The chart renderer: reload orchestration from data provider to display sink.
//!
//! Every [`GradientLineChart::reload`] is a full rebuild — prior maxima,
//! points, and the displayed frame are discarded and recomputed from the
//! provider's current answers. Nothing is cached across calls.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec as HeaplessVec;
use log::debug;

extern crate alloc;
use alloc::vec::Vec;

use crate::framebuffer::FrameBuffer;

use super::canvas::{Canvas, CanvasInsets};
use super::constants::{DEFAULT_BACKGROUND, MIN_PLOTTED_POINTS};
use super::draw::{draw_gradient_fill, draw_markers, draw_polyline};
use super::source::{AxisMaxima, ChartDataSource, DataPoint, SampleLayout};
use super::style::{ChartStyle, GradientAnchor};
use super::{ChartError, ChartResult};

/// Consumer of finished chart frames.
///
/// `present(None)` clears the surface; `present(Some(frame))` shows a
/// complete frame. There is no partial-update or double-buffering contract,
/// and no error channel — a sink that can fail should log and absorb it.
pub trait DisplaySink {
    /// Show a finished frame, or clear the surface when `None`.
    fn present(&mut self, frame: Option<&FrameBuffer>);
}

/// Gradient line-chart renderer.
///
/// Generic over `MAX_POINTS`, the compile-time bound on plotted points; a
/// provider reporting more samples than fit is a recoverable
/// [`ChartError::PointCapacityExceeded`].
pub struct GradientLineChart<const MAX_POINTS: usize> {
    layout: SampleLayout,
    style: ChartStyle,
    insets: CanvasInsets,
    background: Rgb565,
    maxima: Option<AxisMaxima>,
    points: HeaplessVec<DataPoint, MAX_POINTS>,
}

impl<const MAX_POINTS: usize> GradientLineChart<MAX_POINTS> {
    /// Create a chart with default layout and style.
    pub fn new() -> Self {
        Self {
            layout: SampleLayout::default(),
            style: ChartStyle::default(),
            insets: CanvasInsets::ZERO,
            background: DEFAULT_BACKGROUND,
            maxima: None,
            points: HeaplessVec::new(),
        }
    }

    /// Set the sample layout
    pub fn with_layout(mut self, layout: SampleLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the visual style
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Set plot-area insets
    pub fn with_insets(mut self, insets: CanvasInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Set the frame background color
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background = color;
        self
    }

    /// Update the sample layout
    pub fn set_layout(&mut self, layout: SampleLayout) {
        self.layout = layout;
    }

    /// Update the visual style
    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
    }

    /// Points that survived filtering on the last reload, in input order.
    pub fn plotted_points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Axis maxima captured on the last reload.
    pub fn maxima(&self) -> Option<AxisMaxima> {
        self.maxima
    }

    /// Rebuild the chart from `source` and present it on `sink`.
    ///
    /// The sink is cleared first; with fewer than two usable points it stays
    /// cleared and the call is an ordinary no-op.
    ///
    /// # Panics
    ///
    /// Panics if the provider reports non-positive axis maxima. That is a
    /// configuration error of the provider, not a runtime condition.
    pub fn reload<S, K>(&mut self, source: &S, sink: &mut K, size: Size) -> ChartResult<()>
    where
        S: ChartDataSource + ?Sized,
        K: DisplaySink,
    {
        self.clear(sink);

        let maxima = source.axis_maxima();
        assert!(
            maxima.max_x > 0.0 && maxima.max_y > 0.0,
            "axis maxima must be strictly positive (got {} x {})",
            maxima.max_x,
            maxima.max_y,
        );
        self.maxima = Some(maxima);

        self.collect_points(source, maxima)?;
        if self.points.len() < MIN_PLOTTED_POINTS {
            debug!(
                "chart reload: {} usable point(s), nothing drawn",
                self.points.len()
            );
            return Ok(());
        }

        let canvas = Canvas::new(size).with_insets(self.insets);
        let area = canvas.plot_area();
        if area.size.width == 0 || area.size.height == 0 {
            return Err(ChartError::DegenerateCanvas {
                width: area.size.width,
                height: area.size.height,
            });
        }

        let mut frame = FrameBuffer::new(size, self.background);
        match self.draw(size, &mut frame) {
            Ok(()) => {}
        }
        sink.present(Some(&frame));
        Ok(())
    }

    /// Redraw the most recently loaded chart onto any target.
    ///
    /// A no-op until a reload has produced at least two plotted points.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        size: Size,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Some(maxima) = self.maxima else {
            return Ok(());
        };
        if self.points.len() < MIN_PLOTTED_POINTS {
            return Ok(());
        }

        let canvas = Canvas::new(size).with_insets(self.insets);
        let area = canvas.plot_area();
        let bottom = area.top_left.y + area.size.height as i32;

        let mut pixels: Vec<Point> = Vec::with_capacity(self.points.len());
        for point in self.points.iter() {
            pixels.push(canvas.project_pixel(maxima, *point));
        }

        if let Some(fill) = &self.style.fill {
            let anchor_y = match self.style.anchor {
                GradientAnchor::CanvasTop => area.top_left.y,
                GradientAnchor::LineTop => pixels
                    .iter()
                    .map(|p| p.y)
                    .min()
                    .unwrap_or(area.top_left.y),
            };
            draw_gradient_fill(&pixels, anchor_y, bottom, fill, self.background, display)?;
        }

        draw_polyline(&pixels, self.style.line_color, self.style.line_width, display)?;

        if let Some(markers) = &self.style.markers {
            draw_markers(&pixels, markers, display)?;
        }
        Ok(())
    }

    /// Discard prior chart state and clear the sink.
    fn clear<K: DisplaySink>(&mut self, sink: &mut K) {
        self.maxima = None;
        self.points.clear();
        sink.present(None);
    }

    /// Query, filter, and store the provider's samples.
    ///
    /// Out-of-range samples are dropped, never clamped, so the plotted
    /// sequence may be shorter than the provider's count and unevenly
    /// spaced. Input order is preserved as-is.
    fn collect_points<S>(&mut self, source: &S, maxima: AxisMaxima) -> ChartResult<()>
    where
        S: ChartDataSource + ?Sized,
    {
        let count = source.point_count();
        if count <= 1 {
            return Ok(());
        }

        // Uniform spacing always derives from the original count, so dropped
        // points leave gaps rather than re-spreading the survivors.
        let x_step = maxima.max_x / (count - 1) as f32;
        let mut dropped = 0usize;

        for index in 0..count {
            let sample = source.sample(index);
            let point = match self.layout {
                SampleLayout::UniformX => DataPoint::new(x_step * index as f32, sample.y),
                SampleLayout::ExplicitX => sample,
            };

            let y_in_range = point.y >= 0.0 && point.y <= maxima.max_y;
            let x_in_range = match self.layout {
                SampleLayout::UniformX => true,
                SampleLayout::ExplicitX => point.x >= 0.0 && point.x <= maxima.max_x,
            };
            if !(y_in_range && x_in_range) {
                dropped += 1;
                continue;
            }

            self.points
                .push(point)
                .map_err(|_| ChartError::PointCapacityExceeded { max: MAX_POINTS })?;
        }

        if dropped > 0 {
            debug!("chart reload: dropped {dropped} of {count} out-of-range sample(s)");
        }
        Ok(())
    }
}

impl<const MAX_POINTS: usize> Default for GradientLineChart<MAX_POINTS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::style::{GradientFill, PointMarkers};

    const CANVAS: Size = Size::new(50, 50);
    const EPSILON: f32 = 1e-3;

    struct StubSource {
        maxima: AxisMaxima,
        samples: Vec<DataPoint>,
    }

    impl StubSource {
        fn from_y_values(maxima: AxisMaxima, ys: &[f32]) -> Self {
            Self {
                maxima,
                samples: ys.iter().map(|&y| DataPoint::new(0.0, y)).collect(),
            }
        }

        fn from_points(maxima: AxisMaxima, points: &[DataPoint]) -> Self {
            Self {
                maxima,
                samples: points.to_vec(),
            }
        }
    }

    impl ChartDataSource for StubSource {
        fn point_count(&self) -> usize {
            self.samples.len()
        }

        fn axis_maxima(&self) -> AxisMaxima {
            self.maxima
        }

        fn sample(&self, index: usize) -> DataPoint {
            self.samples[index]
        }
    }

    /// Sink recording clears and captured frames.
    #[derive(Default)]
    struct RecordingSink {
        clears: usize,
        frames: Vec<FrameBuffer>,
    }

    impl DisplaySink for RecordingSink {
        fn present(&mut self, frame: Option<&FrameBuffer>) {
            match frame {
                None => self.clears += 1,
                Some(frame) => self.frames.push(frame.clone()),
            }
        }
    }

    fn hundred_square() -> AxisMaxima {
        AxisMaxima::new(100.0, 100.0)
    }

    #[test]
    fn test_uniform_layout_spreads_points_across_axis() {
        let source =
            StubSource::from_y_values(hundred_square(), &[20.0, 40.0, 60.0, 80.0, 50.0, 30.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();

        chart.reload(&source, &mut sink, CANVAS).unwrap();

        let expected_x = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
        let plotted = chart.plotted_points();
        assert_eq!(plotted.len(), 6);
        for (point, &x) in plotted.iter().zip(expected_x.iter()) {
            assert!(
                (point.x - x).abs() < EPSILON,
                "expected uniform x {x}, got {}",
                point.x
            );
        }
        assert_eq!(sink.clears, 1, "reload must clear the sink first");
        assert_eq!(sink.frames.len(), 1, "reload must present exactly one frame");
    }

    #[test]
    fn test_uniform_layout_drops_out_of_range_y() {
        let source =
            StubSource::from_y_values(hundred_square(), &[20.0, 120.0, -5.0, 30.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();

        chart.reload(&source, &mut sink, CANVAS).unwrap();

        let plotted = chart.plotted_points();
        assert_eq!(plotted.len(), 2, "out-of-range y values must be dropped");
        assert!((plotted[0].y - 20.0).abs() < EPSILON);
        assert!((plotted[1].y - 30.0).abs() < EPSILON);
        // x spacing still derives from the original count of 4.
        assert!((plotted[0].x - 0.0).abs() < EPSILON);
        assert!((plotted[1].x - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_explicit_layout_drops_x_out_of_range() {
        let source = StubSource::from_points(
            hundred_square(),
            &[
                DataPoint::new(0.0, 10.0),
                DataPoint::new(150.0, 50.0),
                DataPoint::new(80.0, 20.0),
            ],
        );
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new().with_layout(SampleLayout::ExplicitX);

        chart.reload(&source, &mut sink, CANVAS).unwrap();

        let plotted = chart.plotted_points();
        assert_eq!(plotted.len(), 2, "x = 150 exceeds max_x and must be dropped");
        assert!(plotted.iter().all(|p| p.x <= 100.0));
    }

    #[test]
    fn test_explicit_layout_preserves_input_order() {
        // Unsorted x produces a self-crossing line; accepted, never sorted.
        let points = [
            DataPoint::new(80.0, 10.0),
            DataPoint::new(10.0, 50.0),
            DataPoint::new(60.0, 90.0),
        ];
        let source = StubSource::from_points(hundred_square(), &points);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new().with_layout(SampleLayout::ExplicitX);

        chart.reload(&source, &mut sink, CANVAS).unwrap();
        assert_eq!(chart.plotted_points(), &points);
    }

    #[test]
    fn test_no_points_renders_nothing() {
        let source = StubSource::from_y_values(hundred_square(), &[]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();

        chart.reload(&source, &mut sink, CANVAS).unwrap();

        assert_eq!(sink.clears, 1);
        assert!(sink.frames.is_empty(), "empty input must not present a frame");
    }

    #[test]
    fn test_single_point_renders_nothing() {
        let source = StubSource::from_y_values(hundred_square(), &[42.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();

        chart.reload(&source, &mut sink, CANVAS).unwrap();

        assert!(sink.frames.is_empty(), "one point cannot form a line");
        assert!(chart.plotted_points().is_empty());
    }

    #[test]
    fn test_all_points_filtered_renders_nothing() {
        let source = StubSource::from_y_values(hundred_square(), &[150.0, -1.0, 999.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();

        chart.reload(&source, &mut sink, CANVAS).unwrap();

        assert_eq!(sink.clears, 1);
        assert!(
            sink.frames.is_empty(),
            "filtering everything away degenerates into the silent no-op"
        );
    }

    #[test]
    fn test_reload_is_idempotent() {
        let source =
            StubSource::from_y_values(hundred_square(), &[20.0, 120.0, 60.0, 30.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();

        chart.reload(&source, &mut sink, CANVAS).unwrap();
        let first: Vec<DataPoint> = chart.plotted_points().to_vec();

        chart.reload(&source, &mut sink, CANVAS).unwrap();
        assert_eq!(
            chart.plotted_points(),
            first.as_slice(),
            "unchanged provider must reproduce the same plotted points"
        );
        assert_eq!(sink.clears, 2);
        assert_eq!(sink.frames.len(), 2);
    }

    #[test]
    fn test_capacity_overflow_is_an_error() {
        let source = StubSource::from_y_values(
            hundred_square(),
            &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
        );
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<4>::new();

        let result = chart.reload(&source, &mut sink, CANVAS);
        assert!(
            matches!(result, Err(ChartError::PointCapacityExceeded { max: 4 })),
            "six samples must not fit a four-point chart"
        );
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_oversized_insets_are_an_error() {
        let source = StubSource::from_y_values(hundred_square(), &[10.0, 20.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new().with_insets(CanvasInsets::uniform(30));

        let result = chart.reload(&source, &mut sink, CANVAS);
        assert!(matches!(
            result,
            Err(ChartError::DegenerateCanvas { width: 0, height: 0 })
        ));
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_zero_max_x_is_fatal() {
        let source =
            StubSource::from_y_values(AxisMaxima::new(0.0, 100.0), &[10.0, 20.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();
        let _ = chart.reload(&source, &mut sink, CANVAS);
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_negative_max_y_is_fatal() {
        let source =
            StubSource::from_y_values(AxisMaxima::new(100.0, -1.0), &[10.0, 20.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();
        let _ = chart.reload(&source, &mut sink, CANVAS);
    }

    #[test]
    fn test_presented_frame_matches_requested_size() {
        let source = StubSource::from_y_values(hundred_square(), &[10.0, 20.0, 30.0]);
        let mut sink = RecordingSink::default();
        let mut chart = GradientLineChart::<16>::new();

        chart.reload(&source, &mut sink, Size::new(64, 32)).unwrap();
        assert_eq!(sink.frames[0].size(), Size::new(64, 32));
    }

    #[test]
    fn test_stroke_sits_on_top_of_the_fill() {
        // Flat line at data y = 5 of 10 on a 20x20 canvas: pixel row 10.
        let source = StubSource::from_points(
            AxisMaxima::new(10.0, 10.0),
            &[DataPoint::new(0.0, 5.0), DataPoint::new(10.0, 5.0)],
        );
        let mut sink = RecordingSink::default();
        let style = ChartStyle {
            line_color: Rgb565::BLUE,
            line_width: 1,
            fill: Some(GradientFill::new(Rgb565::WHITE, 255, 4)),
            anchor: GradientAnchor::LineTop,
            markers: None,
        };
        let mut chart = GradientLineChart::<16>::new()
            .with_layout(SampleLayout::ExplicitX)
            .with_style(style);

        chart.reload(&source, &mut sink, Size::new(20, 20)).unwrap();

        let frame = &sink.frames[0];
        assert_eq!(
            frame.pixel(5, 10),
            Some(Rgb565::BLUE),
            "the stroked line overpaints the gradient"
        );
        assert_eq!(
            frame.pixel(5, 3),
            Some(Rgb565::BLACK),
            "area above the line stays background"
        );
        assert_ne!(
            frame.pixel(5, 15),
            Some(Rgb565::BLACK),
            "area below the line carries the gradient"
        );
    }

    #[test]
    fn test_canvas_top_anchor_starts_the_ramp_at_the_top() {
        let source = StubSource::from_points(
            AxisMaxima::new(10.0, 10.0),
            &[DataPoint::new(0.0, 5.0), DataPoint::new(10.0, 5.0)],
        );
        let mut sink = RecordingSink::default();
        let style = ChartStyle {
            anchor: GradientAnchor::CanvasTop,
            fill: Some(GradientFill::new(Rgb565::WHITE, 255, 2)),
            ..ChartStyle::default()
        };
        let mut chart = GradientLineChart::<16>::new()
            .with_layout(SampleLayout::ExplicitX)
            .with_style(style);

        chart.reload(&source, &mut sink, Size::new(20, 20)).unwrap();

        // With the ramp anchored at the canvas top, rows just below the line
        // already belong to the darker second half of the gradient.
        let frame = &sink.frames[0];
        let below_line = frame.pixel(5, 12).unwrap();
        assert_ne!(below_line, Rgb565::WHITE);
        assert_ne!(below_line, Rgb565::BLACK);
    }

    #[test]
    fn test_markers_drawn_at_vertices() {
        let source = StubSource::from_points(
            AxisMaxima::new(10.0, 10.0),
            &[DataPoint::new(2.0, 5.0), DataPoint::new(8.0, 5.0)],
        );
        let mut sink = RecordingSink::default();
        let style = ChartStyle {
            fill: None,
            markers: Some(PointMarkers {
                color: Rgb565::GREEN,
                diameter: 3,
            }),
            ..ChartStyle::default()
        };
        let mut chart = GradientLineChart::<16>::new()
            .with_layout(SampleLayout::ExplicitX)
            .with_style(style);

        chart.reload(&source, &mut sink, Size::new(20, 20)).unwrap();

        // First vertex: pixel (4, 10) on a 20x20 canvas.
        assert_eq!(sink.frames[0].pixel(4, 10), Some(Rgb565::GREEN));
    }
}
