//! SVG output for single glyphs and type tester layouts.
//!
//! Each active cell becomes one filled `<polygon>`. The viewport is used as
//! the `viewBox` with `xMidYMid meet`, so the glyph is centered and fitted
//! regardless of the container's shape.

use std::fmt::Write as _;

use trigrid_spec::{CellSet, Font, GridConfig, GridCoord};

use crate::buffer::Color;
use crate::geometry::{cell_triangle, Triangle};
use crate::layout::TextLayout;
use crate::viewport::{fmt_num, Viewport};

/// SVG rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Fill color of active triangles.
    pub fill: Color,
    /// Optional background rectangle behind the viewport.
    pub background: Option<Color>,
    /// Stroke inactive cells to show the grid (editor view).
    pub show_grid: bool,
    /// Stroke color used for the grid outline.
    pub grid_stroke: Color,
    /// Optional explicit `width`/`height` attributes.
    pub size: Option<(u32, u32)>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            fill: Color::black(),
            background: None,
            show_grid: false,
            grid_stroke: Color::rgb(0.8, 0.8, 0.8),
            size: None,
        }
    }
}

fn points(tri: &Triangle) -> String {
    tri.vertices
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// ` fill="..."`, plus ` fill-opacity="..."` for translucent colors.
fn fill_attrs(color: &Color) -> String {
    let mut attrs = format!(" fill=\"{}\"", color.to_hex());
    if color.a < 1.0 {
        let _ = write!(attrs, " fill-opacity=\"{}\"", fmt_num(color.a));
    }
    attrs
}

fn write_cells(out: &mut String, cells: &CellSet, grid: &GridConfig, options: &SvgOptions) {
    if options.show_grid {
        let stroke = options.grid_stroke.to_hex();
        let _ = writeln!(
            out,
            "  <g fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\">",
            stroke
        );
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let coord = GridCoord::new(row, col);
                if !cells.contains(coord) {
                    let tri = cell_triangle(coord, grid);
                    let _ = writeln!(out, "    <polygon points=\"{}\"/>", points(&tri));
                }
            }
        }
        out.push_str("  </g>\n");
    }

    let _ = writeln!(out, "  <g{}>", fill_attrs(&options.fill));
    for coord in cells.iter() {
        let tri = cell_triangle(coord, grid);
        let _ = writeln!(
            out,
            "    <polygon data-cell=\"{}\" points=\"{}\"/>",
            coord,
            points(&tri)
        );
    }
    out.push_str("  </g>\n");
}

fn open_svg(out: &mut String, viewport: &Viewport, options: &SvgOptions) {
    let size = options
        .size
        .map(|(w, h)| format!(" width=\"{}\" height=\"{}\"", w, h))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" preserveAspectRatio=\"xMidYMid meet\"{}>",
        viewport.view_box(),
        size
    );
    if let Some(bg) = &options.background {
        let _ = writeln!(
            out,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
            fmt_num(viewport.min_x),
            fmt_num(viewport.min_y),
            fmt_num(viewport.width),
            fmt_num(viewport.height),
            fill_attrs(bg)
        );
    }
}

/// Renders one glyph as a standalone SVG document.
pub fn glyph_svg(
    cells: &CellSet,
    grid: &GridConfig,
    viewport: &Viewport,
    options: &SvgOptions,
) -> String {
    let mut out = String::new();
    open_svg(&mut out, viewport, options);
    write_cells(&mut out, cells, grid, options);
    out.push_str("</svg>\n");
    out
}

/// Renders a composed layout as one SVG document with a nested `<svg>` per
/// drawn glyph.
pub fn layout_svg(font: &Font, layout: &TextLayout, options: &SvgOptions) -> String {
    let mut out = String::new();
    open_svg(&mut out, &layout.viewport(), options);
    let glyph_options = SvgOptions {
        background: None,
        size: None,
        ..options.clone()
    };
    for glyph in layout.drawn() {
        let Some(cells) = font.cells(glyph.ch) else {
            continue;
        };
        let _ = writeln!(
            out,
            "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{}\" preserveAspectRatio=\"xMidYMid meet\">",
            fmt_num(glyph.origin.x),
            fmt_num(glyph.origin.y),
            fmt_num(glyph.viewport.width),
            fmt_num(glyph.viewport.height),
            glyph.viewport.view_box()
        );
        write_cells(&mut out, cells, font.grid(), &glyph_options);
        out.push_str("</svg>\n");
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_text;
    use crate::viewport::{compute_viewport, fixed_viewport};
    use trigrid_spec::LayoutConfig;

    fn grid() -> GridConfig {
        GridConfig::new(10, 10, 20.0, 17.0)
    }

    #[test]
    fn test_glyph_svg_sparse_polygons() {
        let g = grid();
        let cells = CellSet::from_keys(10, 10, ["0-0", "0-1"]).unwrap();
        let svg = glyph_svg(&cells, &g, &fixed_viewport(&g), &SvgOptions::default());
        assert!(svg.contains("viewBox=\"0 0 110 170\""));
        assert!(svg.contains("preserveAspectRatio=\"xMidYMid meet\""));
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains("data-cell=\"0-0\" points=\"0,17 10,0 20,17\""));
        assert!(svg.contains("data-cell=\"0-1\" points=\"10,0 30,0 20,17\""));
    }

    #[test]
    fn test_grid_outline_strokes_inactive_cells() {
        let g = grid();
        let cells = CellSet::from_keys(10, 10, ["5-5"]).unwrap();
        let options = SvgOptions {
            show_grid: true,
            ..SvgOptions::default()
        };
        let svg = glyph_svg(&cells, &g, &compute_viewport(&cells, &g, false), &options);
        assert_eq!(svg.matches("<polygon").count(), 100);
        assert!(svg.contains("stroke=\"#cccccc\""));
    }

    #[test]
    fn test_background_and_translucent_fill() {
        let g = grid();
        let cells = CellSet::from_keys(10, 10, ["1-1"]).unwrap();
        let options = SvgOptions {
            fill: Color::rgba(1.0, 0.0, 0.0, 0.5),
            background: Some(Color::white()),
            ..SvgOptions::default()
        };
        let svg = glyph_svg(&cells, &g, &fixed_viewport(&g), &options);
        assert!(svg.contains("  <g fill=\"#ff0000\" fill-opacity=\"0.5\">\n"));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"110\" height=\"170\" fill=\"#ffffff\"/>"));
    }

    #[test]
    fn test_opaque_fill_has_no_opacity() {
        let g = grid();
        let cells = CellSet::from_keys(10, 10, ["1-1"]).unwrap();
        let svg = glyph_svg(&cells, &g, &fixed_viewport(&g), &SvgOptions::default());
        assert!(svg.contains("  <g fill=\"#000000\">\n"));
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn test_layout_svg_nests_drawn_glyphs() {
        let mut font = Font::new(grid());
        font.cells_mut('H').insert(GridCoord::new(0, 0)).unwrap();
        font.cells_mut('I').insert(GridCoord::new(1, 1)).unwrap();
        let layout = layout_text(&font, "HI?", &LayoutConfig::default());
        let svg = layout_svg(&font, &layout, &SvgOptions::default());
        // outer document plus one nested svg per drawn glyph
        assert_eq!(svg.matches("<svg").count(), 3);
        assert_eq!(svg.matches("<polygon").count(), 2);
    }
}
