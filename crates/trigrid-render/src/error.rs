//! Error types for rendering.

use thiserror::Error;

use crate::png::PngError;

/// Errors that can occur while rendering glyphs or layouts.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output size is zero or too large.
    #[error("invalid output size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Scale is not a positive finite number.
    #[error("invalid scale {0}")]
    InvalidScale(f64),

    /// Color string could not be parsed.
    #[error("invalid color '{0}': expected #rgb, #rrggbb, or #rrggbbaa")]
    InvalidColor(String),

    /// The character has no glyph in the font.
    #[error("no glyph defined for '{0}'")]
    MissingGlyph(char),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] PngError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
