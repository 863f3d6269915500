//! Hardware-independent gradient line-chart widget.
//!
//! This crate renders a small watch-face style line chart: a stroked polyline
//! through delegate-supplied data points with a vertical gradient fill fading
//! away beneath the line. The finished raster is handed to a display sink as
//! a single frame.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on embedded
//! targets and desktop hosts (for the simulator and tests) alike.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod chart;
pub mod framebuffer;
