//! Owning ARGB8888 color buffer.

use super::PixelSink;
use crate::colors::Color;

/// An owning color buffer with bounds-checked 2D pixel access.
///
/// Pixels are stored as packed ARGB8888, one `u32` per pixel, row-major.
/// This is the concrete [`PixelSink`] the pipeline renders into; its bytes
/// can be uploaded directly to a streaming SDL texture.
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![crate::colors::BACKGROUND.to_argb(); (width * height) as usize],
            width,
            height,
        }
    }

    /// Resets every pixel to `color`.
    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    /// Get the packed ARGB color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// View the buffer as raw bytes for texture upload (native endianness,
    /// 4 bytes per pixel).
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

impl PixelSink for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Writes an opaque pixel, clamping each channel to `0..=255`.
    /// Out-of-bounds coordinates are silently ignored.
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, r: i32, g: i32, b: i32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let color = Color::new(
                r.clamp(0, 255) as u8,
                g.clamp(0, 255) as u8,
                b.clamp(0, 255) as u8,
            );
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color.to_argb();
        }
    }
}
