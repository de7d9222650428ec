//! Render command implementation
//!
//! Renders one glyph to SVG or PNG, chosen by the output extension.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use trigrid_render::raster::raster_size;
use trigrid_render::{compute_viewport, glyph_svg, rasterize, Color, RenderError, SvgOptions};
use trigrid_spec::GridConfig;

use super::common::{load_font, parse_color, write_mask_png, OutputFormat};

/// Options shared by `render` and `tester`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Output pixels per canvas unit.
    pub scale: f64,
    /// Override the configured auto-crop flag.
    pub auto_crop: Option<bool>,
    /// Outline inactive cells (SVG only).
    pub show_grid: bool,
    /// Fill color, `#rrggbb` style.
    pub fill: Option<String>,
    /// Background color; transparent when unset.
    pub background: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            auto_crop: None,
            show_grid: false,
            fill: None,
            background: None,
        }
    }
}

impl RenderOptions {
    pub(crate) fn svg_options(&self, size: (u32, u32)) -> Result<SvgOptions> {
        Ok(SvgOptions {
            fill: parse_color(self.fill.as_deref(), Color::black())?,
            background: self.background.as_deref().map(str::parse).transpose()?,
            show_grid: self.show_grid,
            size: Some(size),
            ..SvgOptions::default()
        })
    }
}

/// Run the render command
///
/// # Arguments
/// * `font_path` - Font document
/// * `glyph` - Character to render
/// * `output` - Output `.svg` or `.png` path
/// * `options` - Render options
/// * `grid` - Grid the font is drawn on
/// * `default_auto_crop` - Auto-crop flag from the layout config
pub fn run(
    font_path: &str,
    glyph: char,
    output: &str,
    options: &RenderOptions,
    grid: &GridConfig,
    default_auto_crop: bool,
) -> Result<ExitCode> {
    let format = OutputFormat::from_path(output)?;
    let font = load_font(font_path, grid)?;
    let cells = font.cells(glyph).ok_or(RenderError::MissingGlyph(glyph))?;

    let auto_crop = options.auto_crop.unwrap_or(default_auto_crop);
    let viewport = compute_viewport(cells, grid, auto_crop);
    let size = raster_size(&viewport, options.scale)?;

    match format {
        OutputFormat::Svg => {
            let svg = glyph_svg(cells, grid, &viewport, &options.svg_options(size)?);
            fs::write(output, svg).with_context(|| format!("Failed to write: {}", output))?;
            println!(
                "{} {:?} -> {} ({}x{})",
                "Rendered".green().bold(),
                glyph,
                output,
                size.0,
                size.1
            );
        }
        OutputFormat::Png => {
            let mask = rasterize(cells, grid, &viewport, options.scale)?;
            let fill = parse_color(options.fill.as_deref(), Color::black())?;
            let background: Option<Color> =
                options.background.as_deref().map(str::parse).transpose()?;
            let hash = write_mask_png(&mask, fill, background, output)?;
            println!(
                "{} {:?} -> {} ({}x{}, {})",
                "Rendered".green().bold(),
                glyph,
                output,
                mask.width,
                mask.height,
                &hash[..16]
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
