//! Rasterization and pixel output.
//!
//! The [`PixelSink`] trait is the seam between the rasterizer and whatever
//! receives the pixels: the owning [`FrameBuffer`] in the real pipeline,
//! counting sinks in tests.

mod framebuffer;
mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{fill_triangle, EdgeFn, ScreenPos, FRAC_BITS};

/// Destination for rasterized pixels.
///
/// Channel values are clamped to `0..=255` and written opaquely; coordinates
/// outside `width x height` are silently ignored.
pub trait PixelSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn put_pixel(&mut self, x: i32, y: i32, r: i32, g: i32, b: i32);
}
