//! Pixel buffers and colors.

use std::str::FromStr;

use crate::error::RenderError;

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Linear interpolation between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Formats as `#rrggbb` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl FromStr for Color {
    type Err = RenderError;

    /// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RenderError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize, len: usize| -> Result<f64, RenderError> {
            let part = hex.get(i..i + len).ok_or_else(invalid)?;
            let v = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
            let v = if len == 1 { v * 17 } else { v };
            Ok(v as f64 / 255.0)
        };
        match hex.len() {
            3 => Ok(Color::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Ok(Color::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => Ok(Color::rgba(
                channel(0, 2)?,
                channel(2, 2)?,
                channel(4, 2)?,
                channel(6, 2)?,
            )),
            _ => Err(invalid()),
        }
    }
}

/// Single-channel coverage buffer (0.0 = empty, 1.0 = covered).
#[derive(Debug, Clone)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = value;
    }

    /// Number of pixels with non-zero coverage.
    pub fn covered(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0.0).count()
    }

    /// Invert every pixel (`1 - v`).
    pub fn invert(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 1.0 - *v);
    }

    /// Convert to 8-bit bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

/// RGBA buffer.
#[derive(Debug, Clone)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Colorize a coverage mask: `background` where empty, `foreground` where
    /// covered.
    pub fn from_mask(mask: &GrayscaleBuffer, foreground: Color, background: Color) -> Self {
        Self {
            width: mask.width,
            height: mask.height,
            data: mask
                .data
                .iter()
                .map(|&v| background.lerp(&foreground, v))
                .collect(),
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::white());
        assert_eq!("#000000".parse::<Color>().unwrap(), Color::black());
        let c: Color = "#ff000080".parse().unwrap();
        assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
        assert_eq!(c.to_hex(), "#ff0000");
    }

    #[test]
    fn test_parse_rejects_bad_colors() {
        for s in ["fff", "#ff", "#gggggg", "#12345", "#ééé"] {
            assert!(s.parse::<Color>().is_err(), "{} should be rejected", s);
        }
    }

    #[test]
    fn test_mask_colorize() {
        let mut mask = GrayscaleBuffer::new(2, 1, 0.0);
        mask.set(1, 0, 1.0);
        let tex = TextureBuffer::from_mask(&mask, Color::black(), Color::white());
        assert_eq!(tex.get(0, 0), Color::white());
        assert_eq!(tex.get(1, 0), Color::black());
        assert_eq!(tex.to_rgba8(), vec![255, 255, 255, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_invert_and_covered() {
        let mut mask = GrayscaleBuffer::new(3, 3, 0.0);
        mask.set(1, 1, 1.0);
        assert_eq!(mask.covered(), 1);
        mask.invert();
        assert_eq!(mask.covered(), 8);
        assert_eq!(mask.to_bytes()[4], 0);
    }
}
