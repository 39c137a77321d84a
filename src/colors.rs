//! Flat RGB colors used throughout the renderer.

/// A flat RGB color, one per rasterized triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs into ARGB8888 with opaque alpha, the framebuffer's pixel format.
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

pub const BACKGROUND: Color = Color::new(0, 0, 0);
pub const FILL: Color = Color::new(255, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_argb_with_opaque_alpha() {
        assert_eq!(Color::new(0x12, 0x34, 0x56).to_argb(), 0xFF12_3456);
        assert_eq!(BACKGROUND.to_argb(), 0xFF00_0000);
    }
}
