//! Tester command implementation
//!
//! Lays out a text sample with the font and renders it to SVG or PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use trigrid_render::raster::raster_size;
use trigrid_render::{layout_svg, layout_text, rasterize_layout, Color, TextLayout};
use trigrid_spec::{Font, GridConfig, LayoutConfig};

use super::common::{load_font, parse_color, unescape_text, write_mask_png, OutputFormat};
use super::render::RenderOptions;

/// Run the tester command
///
/// # Arguments
/// * `font_path` - Font document
/// * `text` - Sample text; `\n` starts a new line
/// * `output` - Output `.svg` or `.png` path
/// * `repeat` - Override the configured repeat count
/// * `options` - Render options
/// * `grid` - Grid the font is drawn on
/// * `layout` - Spacing and repeat settings
pub fn run(
    font_path: &str,
    text: &str,
    output: &str,
    repeat: Option<u32>,
    options: &RenderOptions,
    grid: &GridConfig,
    layout: &LayoutConfig,
) -> Result<ExitCode> {
    let format = OutputFormat::from_path(output)?;
    let font = load_font(font_path, grid)?;
    let config = effective_layout(layout, repeat, options.auto_crop)?;
    let text = unescape_text(text);
    let composed = layout_text(&font, &text, &config);

    let missing = missing_chars(&font, &text);
    if !missing.is_empty() {
        println!(
            "  {} no glyph for {}",
            "!".yellow(),
            missing.escape_debug()
        );
    }

    let size = raster_size(&composed.viewport(), options.scale)?;
    match format {
        OutputFormat::Svg => {
            let svg = layout_svg(&font, &composed, &options.svg_options(size)?);
            fs::write(output, svg).with_context(|| format!("Failed to write: {}", output))?;
        }
        OutputFormat::Png => {
            let mask = rasterize_layout(&font, &composed, options.scale)?;
            let fill = parse_color(options.fill.as_deref(), Color::black())?;
            let background: Option<Color> =
                options.background.as_deref().map(str::parse).transpose()?;
            let hash = write_mask_png(&mask, fill, background, output)?;
            log::debug!("tester png hash {}", hash);
        }
    }

    print_summary(&composed, output, size);
    Ok(ExitCode::SUCCESS)
}

/// Applies command-line overrides to the configured layout.
pub fn effective_layout(
    layout: &LayoutConfig,
    repeat: Option<u32>,
    auto_crop: Option<bool>,
) -> Result<LayoutConfig> {
    let config = LayoutConfig {
        repeat_count: repeat.unwrap_or(layout.repeat_count),
        auto_crop: auto_crop.unwrap_or(layout.auto_crop),
        ..*layout
    };
    config.validate()?;
    Ok(config)
}

/// Characters in `text` with no drawn glyph, deduplicated in first-seen order.
fn missing_chars(font: &Font, text: &str) -> String {
    let mut missing = String::new();
    for ch in text.chars() {
        if ch == ' ' || ch == '\n' || missing.contains(ch) {
            continue;
        }
        if !font.glyph(ch).is_some_and(|g| g.has_geometry()) {
            missing.push(ch);
        }
    }
    missing
}

fn print_summary(layout: &TextLayout, output: &str, size: (u32, u32)) {
    println!(
        "{} {} glyph(s) on {} line(s) -> {} ({}x{})",
        "Rendered".green().bold(),
        layout.glyphs.len(),
        layout.lines,
        output,
        size.0,
        size.1
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridConfig {
        GridConfig::new(10, 10, 20.0, 17.0)
    }

    #[test]
    fn test_effective_layout_overrides() {
        let base = LayoutConfig::default();
        let config = effective_layout(&base, Some(3), Some(false)).unwrap();
        assert_eq!(config.repeat_count, 3);
        assert!(!config.auto_crop);
        assert_eq!(config.letter_spacing, base.letter_spacing);
        assert!(effective_layout(&base, Some(0), None).is_err());
        assert!(effective_layout(&base, Some(4_000_000_000), None).is_err());
    }

    #[test]
    fn test_missing_chars() {
        let font = Font::from_json(grid(), r#"{"glyphs": {"A": ["0-0"], "B": []}}"#).unwrap();
        assert_eq!(missing_chars(&font, "AB A\nBx"), "Bx");
    }

    #[test]
    fn test_tester_writes_svg_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("font.json");
        fs::write(&font, r#"{"version": 1, "glyphs": {"A": ["0-0", "0-1"], "B": ["1-1"]}}"#).unwrap();
        let font = font.to_str().unwrap();

        let svg = dir.path().join("t.svg");
        run(font, "AB\\nBA", svg.to_str().unwrap(), None, &RenderOptions::default(), &grid(), &LayoutConfig::default()).unwrap();
        let content = fs::read_to_string(&svg).unwrap();
        assert_eq!(content.matches("data-cell").count(), 6);

        let png = dir.path().join("t.png");
        run(font, "AB", png.to_str().unwrap(), Some(2), &RenderOptions::default(), &grid(), &LayoutConfig::default()).unwrap();
        assert!(fs::read(&png).unwrap().starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
