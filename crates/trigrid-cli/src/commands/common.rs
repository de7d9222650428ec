//! Helpers shared by several commands.

use anyhow::{bail, Context, Result};
use std::path::Path;
use trigrid_render::png::{write_file, write_grayscale_to_vec_with_hash, write_rgba_to_vec_with_hash};
use trigrid_render::{Color, GrayscaleBuffer, PngConfig, TextureBuffer};
use trigrid_spec::{Font, GridConfig};

/// Output file kind, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            _ => bail!("unsupported output extension: {} (expected .svg or .png)", path),
        }
    }
}

/// Reads a font document with the configured grid.
pub fn load_font(path: &str, grid: &GridConfig) -> Result<Font> {
    Font::load(Path::new(path), *grid).with_context(|| format!("Failed to load font: {}", path))
}

/// Writes a font document stamped with the current time.
pub fn save_font(font: &Font, path: &str) -> Result<()> {
    font.save(Path::new(path), chrono::Utc::now())
        .with_context(|| format!("Failed to write font: {}", path))
}

/// Parses an optional color argument.
pub fn parse_color(value: Option<&str>, default: Color) -> Result<Color> {
    match value {
        Some(s) => Ok(s.parse::<Color>()?),
        None => Ok(default),
    }
}

/// Expands `\n` escapes typed on the command line.
pub fn unescape_text(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Encodes a coverage mask as PNG, colorized unless the colors are the plain
/// white-on-black mask. Returns the BLAKE3 hash of the written bytes.
pub fn write_mask_png(
    mask: &GrayscaleBuffer,
    fill: Color,
    background: Option<Color>,
    path: &str,
) -> Result<String> {
    let config = PngConfig::default();
    let (data, hash) = match background {
        None if fill == Color::white() => write_grayscale_to_vec_with_hash(mask, &config)?,
        background => {
            let texture =
                TextureBuffer::from_mask(mask, fill, background.unwrap_or_else(Color::transparent));
            write_rgba_to_vec_with_hash(&texture, &config)?
        }
    };
    write_file(Path::new(path), &data).with_context(|| format!("Failed to write: {}", path))?;
    Ok(hash)
}
