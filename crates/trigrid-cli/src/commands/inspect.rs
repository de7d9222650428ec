//! Inspect command implementation
//!
//! Lists the glyphs of a font with cell counts, bounds, viewports and
//! geometry hashes.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use trigrid_render::{compute_viewport, fixed_viewport};
use trigrid_spec::{cells_hash, glyphs_hash, Font, Glyph, GridConfig};

use super::common::load_font;
use super::json_output::{GlyphInfo, InspectOutput};

/// Run the inspect command
///
/// # Arguments
/// * `font_path` - Font document to inspect
/// * `glyph` - Only show this character
/// * `all` - Also list undefined characters
/// * `auto_crop` - Report cropped viewports instead of the full canvas
/// * `grid` - Grid the font is drawn on
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    font_path: &str,
    glyph: Option<char>,
    all: bool,
    auto_crop: bool,
    grid: &GridConfig,
    json_output: bool,
) -> Result<ExitCode> {
    let font = load_font(font_path, grid)?;
    let output = build_output(font_path, &font, glyph, all, auto_crop);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&output);
    }
    Ok(ExitCode::SUCCESS)
}

/// Collects per-glyph information.
pub fn build_output(
    font_path: &str,
    font: &Font,
    only: Option<char>,
    all: bool,
    auto_crop: bool,
) -> InspectOutput {
    let grid = font.grid();
    let glyphs = font
        .glyphs()
        .filter(|(ch, g)| match only {
            Some(only) => *ch == only,
            None => all || g.has_geometry(),
        })
        .map(|(ch, g)| glyph_info(ch, g, grid, auto_crop))
        .collect();

    InspectOutput {
        file: font_path.to_string(),
        rows: grid.rows,
        cols: grid.cols,
        drawn: font.drawn_count(),
        glyphs_hash: glyphs_hash(font),
        glyphs,
    }
}

fn glyph_info(ch: char, glyph: &Glyph, grid: &GridConfig, auto_crop: bool) -> GlyphInfo {
    let cells = glyph.cells();
    let viewport = match cells {
        Some(cells) => compute_viewport(cells, grid, auto_crop),
        None => fixed_viewport(grid),
    };
    GlyphInfo {
        glyph: ch.to_string(),
        defined: cells.is_some(),
        active: glyph.active_count(),
        bounds: cells
            .and_then(|c| c.bounds())
            .map(|b| [b.min_row, b.min_col, b.max_row, b.max_col]),
        viewport: [viewport.min_x, viewport.min_y, viewport.width, viewport.height],
        hash: cells.filter(|c| !c.is_empty()).map(cells_hash),
    }
}

fn print_human(output: &InspectOutput) {
    println!("{} {}", "Font:".cyan().bold(), output.file);
    println!(
        "{} {}x{}, {} drawn glyph(s)",
        "Grid:".dimmed(),
        output.rows,
        output.cols,
        output.drawn
    );
    println!("{} {}", "Hash:".dimmed(), &output.glyphs_hash[..16]);
    println!();

    if output.glyphs.is_empty() {
        println!("  {}", "(no glyphs)".dimmed());
        return;
    }
    for info in &output.glyphs {
        let name = format!("{:?}", info.glyph);
        if !info.defined {
            println!("  {:<6} {}", name, "undefined".dimmed());
            continue;
        }
        let bounds = info
            .bounds
            .map(|[r0, c0, r1, c1]| format!("rows {}..={} cols {}..={}", r0, r1, c0, c1))
            .unwrap_or_else(|| "empty".to_string());
        let [x, y, w, h] = info.viewport;
        println!(
            "  {:<6} {:>4} cell(s)  {:<28} viewBox {:.1} {:.1} {:.1} {:.1}",
            name.bold(),
            info.active,
            bounds,
            x,
            y,
            w,
            h
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn font() -> Font {
        let grid = GridConfig::new(10, 10, 20.0, 17.0);
        Font::from_json(grid, r#"{"version": 1, "glyphs": {"A": ["0-0", "0-1"], "B": []}}"#)
            .unwrap()
    }

    #[test]
    fn test_default_lists_drawn_only() {
        let output = build_output("f.json", &font(), None, false, true);
        assert_eq!(output.drawn, 1);
        assert_eq!(output.glyphs.len(), 1);
        let a = &output.glyphs[0];
        assert_eq!(a.glyph, "A");
        assert_eq!(a.active, 2);
        assert_eq!(a.bounds, Some([0, 0, 0, 1]));
        assert!(a.hash.is_some());
    }

    #[test]
    fn test_single_glyph_and_fixed_viewport() {
        let output = build_output("f.json", &font(), Some('B'), false, true);
        assert_eq!(output.glyphs.len(), 1);
        let b = &output.glyphs[0];
        assert!(b.defined);
        assert_eq!(b.active, 0);
        assert_eq!(b.bounds, None);
        assert_eq!(b.hash, None);
        assert_eq!(b.viewport, [0.0, 0.0, 110.0, 170.0]);
    }

    #[test]
    fn test_all_includes_undefined() {
        let output = build_output("f.json", &font(), None, true, false);
        assert!(output.glyphs.iter().any(|g| g.glyph == "Z" && !g.defined));
    }
}
