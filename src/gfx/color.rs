//! Packed RGB colors
//!
//! Colors are stored exactly as the 24-bit hex value they were set from so
//! that material state can be compared bit for bit. Conversion to floats only
//! happens when data is handed to the GPU.

use std::fmt;

/// A 24-bit RGB color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const RED: Color = Color(0xff0000);
    pub const GREEN: Color = Color(0x00ff00);
    pub const BLACK: Color = Color(0x000000);

    /// Creates a color from a `0xRRGGBB` value. Bits above the low 24 are dropped.
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    pub const fn hex(self) -> u32 {
        self.0
    }

    pub const fn rgb8(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Opaque RGBA components in `0.0..=1.0`, as written into uniform buffers.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        let (r, g, b) = self.rgb8();
        [
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_rgba_f32();
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a),
        }
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_preserved_exactly() {
        assert_eq!(Color::from_hex(0xff0000).hex(), 0xff0000);
        assert_eq!(Color::from_hex(0x00ff00).hex(), 0x00ff00);
        assert_eq!(Color::RED, Color::from(0xff0000));
    }

    #[test]
    fn test_extra_bits_are_masked() {
        assert_eq!(Color::from_hex(0xffff_0000).hex(), 0xff0000);
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(Color::GREEN.to_rgba_f32(), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(Color::from_hex(0x336699).rgb8(), (0x33, 0x66, 0x99));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::RED.to_string(), "#ff0000");
    }
}
