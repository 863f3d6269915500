//! Desktop simulator for the gradline chart widget.
//!
//! Renders the gradient line chart in an SDL2 window via
//! `embedded-graphics-simulator`, fed by a synthetic heart-rate-style data
//! provider so the widget can be exercised without a device.
//!
//! # Key bindings
//!
//! | Key | Action                           |
//! |-----|----------------------------------|
//! | R   | Regenerate the sample data       |
//! | L   | Toggle uniform / explicit layout |
//! | A   | Toggle gradient anchor           |
//! | M   | Toggle point markers             |
//! | Q   | Quit                             |

use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use gradline_core::chart::{
    AxisMaxima, CanvasInsets, ChartDataSource, ChartStyle, DataPoint, DisplaySink,
    GradientAnchor, GradientLineChart, PointMarkers, SampleLayout,
};
use gradline_core::framebuffer::FrameBuffer;

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Square watch-face canvas, in pixels.
const DISPLAY_SIZE_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Number of synthetic samples per data set.
const SAMPLE_COUNT: usize = 24;

/// Plotted-point capacity of the chart.
const MAX_POINTS: usize = 64;

// ---------------------------------------------------------------------------
// Mock data generation
// ---------------------------------------------------------------------------

/// Synthetic "heart rate over the last 24 hours" provider.
///
/// Samples carry explicit x coordinates, so the provider works under both
/// sample layouts; with the uniform layout the x values are simply ignored.
struct MockRateSource {
    maxima: AxisMaxima,
    samples: Vec<DataPoint>,
}

impl MockRateSource {
    fn new(seed: u32) -> Self {
        let maxima = AxisMaxima::new(24.0, 160.0);
        let samples = (0..SAMPLE_COUNT)
            .map(|i| {
                let t = i as f64 + f64::from(seed) * 0.7;
                let bpm = 90.0 + 40.0 * (t / 5.0).sin() + 15.0 * (t / 1.7).cos();
                let hour = maxima.max_x * i as f32 / (SAMPLE_COUNT - 1) as f32;
                DataPoint::new(hour, bpm as f32)
            })
            .collect();

        Self { maxima, samples }
    }
}

impl ChartDataSource for MockRateSource {
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

// ---------------------------------------------------------------------------
// Display sink
// ---------------------------------------------------------------------------

/// Presents finished chart frames on the SDL2 display surface.
struct SimulatorSink {
    display: SimulatorDisplay<Rgb565>,
}

impl SimulatorSink {
    fn new() -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(DISPLAY_SIZE_PX, DISPLAY_SIZE_PX)),
        }
    }
}

impl DisplaySink for SimulatorSink {
    fn present(&mut self, frame: Option<&FrameBuffer>) {
        let result = match frame {
            None => self.display.clear(Rgb565::BLACK),
            Some(frame) => frame.blit(&mut self.display),
        };
        match result {
            Ok(()) => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting gradline simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_SIZE_PX, DISPLAY_SIZE_PX, WINDOW_SCALE
    );
    info!("Keys: R=NewData  L=Layout  A=Anchor  M=Markers  Q=Quit");

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Gradline Simulator", &output_settings);

    let mut sink = SimulatorSink::new();
    let mut style = ChartStyle::default();
    let mut chart = GradientLineChart::<MAX_POINTS>::new()
        .with_style(style)
        .with_insets(CanvasInsets::uniform(3));

    let mut seed = 0;
    let mut source = MockRateSource::new(seed);
    let mut layout = SampleLayout::UniformX;
    let size = Size::new(DISPLAY_SIZE_PX, DISPLAY_SIZE_PX);

    reload(&mut chart, &source, &mut sink, size);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    window.update(&sink.display);

    'running: loop {
        let frame_start = std::time::Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    match keycode {
                        Keycode::Q | Keycode::Escape => break 'running,

                        Keycode::R => {
                            seed += 1;
                            source = MockRateSource::new(seed);
                            info!("New data set (seed {seed})");
                        }

                        Keycode::L => {
                            layout = match layout {
                                SampleLayout::UniformX => SampleLayout::ExplicitX,
                                SampleLayout::ExplicitX => SampleLayout::UniformX,
                            };
                            chart.set_layout(layout);
                            info!("Sample layout: {layout:?}");
                        }

                        Keycode::A => {
                            style.anchor = match style.anchor {
                                GradientAnchor::LineTop => GradientAnchor::CanvasTop,
                                GradientAnchor::CanvasTop => GradientAnchor::LineTop,
                            };
                            chart.set_style(style);
                            info!("Gradient anchor: {:?}", style.anchor);
                        }

                        Keycode::M => {
                            style.markers = match style.markers {
                                None => Some(PointMarkers::default()),
                                Some(_) => None,
                            };
                            chart.set_style(style);
                            info!("Markers: {}", style.markers.is_some());
                        }

                        _ => continue,
                    }

                    reload(&mut chart, &source, &mut sink, size);
                }

                _ => {}
            }
        }

        window.update(&sink.display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}

fn reload(
    chart: &mut GradientLineChart<MAX_POINTS>,
    source: &MockRateSource,
    sink: &mut SimulatorSink,
    size: Size,
) {
    if let Err(e) = chart.reload(source, sink, size) {
        error!("Chart reload failed: {e}");
    }
}
