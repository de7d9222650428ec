//! Type tester layout: composing glyphs into lines of text.
//!
//! Layout space uses canvas units. Each glyph occupies a box the size of its
//! viewport (cropped or full canvas); glyphs in a line are vertically
//! centered on the tallest box of that line.

use trigrid_spec::{Font, LayoutConfig, MAX_REPEAT_COUNT};

use crate::buffer::GrayscaleBuffer;
use crate::error::RenderError;
use crate::geometry::Point;
use crate::raster::{raster_size, rasterize_into, Transform};
use crate::viewport::{compute_viewport, fixed_viewport, Viewport};

/// One character positioned in a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGlyph {
    /// The character.
    pub ch: char,
    /// Top-left of the glyph box in layout space.
    pub origin: Point,
    /// Canvas region shown in the box; its size is the box size.
    pub viewport: Viewport,
    /// False for characters with no drawn geometry (they only advance).
    pub drawn: bool,
}

/// A composed block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Glyphs in reading order. Spaces and newlines are not included.
    pub glyphs: Vec<PlacedGlyph>,
    /// Layout width (widest line).
    pub width: f64,
    /// Layout height (all lines plus spacing between them).
    pub height: f64,
    /// Number of lines.
    pub lines: usize,
}

impl TextLayout {
    /// Bounding viewport of the whole layout.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(0.0, 0.0, self.width, self.height)
    }

    /// Drawn glyphs only.
    pub fn drawn(&self) -> impl Iterator<Item = &PlacedGlyph> {
        self.glyphs.iter().filter(|g| g.drawn)
    }
}

/// Lays out `text` with `font`, repeated `config.repeat_count` times, each
/// repetition starting on a new line. The count is clamped to
/// `1..=MAX_REPEAT_COUNT`.
pub fn layout_text(font: &Font, text: &str, config: &LayoutConfig) -> TextLayout {
    let grid = font.grid();
    let letter_gap = config.letter_spacing * grid.canvas_width;
    let space_advance = config.word_spacing * grid.canvas_width;
    let line_gap = config.line_spacing * grid.canvas_height;

    let mut glyphs = Vec::new();
    let mut width: f64 = 0.0;
    let mut y = 0.0;

    let repeats = config.repeat_count.clamp(1, MAX_REPEAT_COUNT) as usize;
    let source: Vec<&str> = std::iter::repeat(text)
        .take(repeats)
        .flat_map(|t| t.split('\n'))
        .collect();

    for (i, line) in source.iter().enumerate() {
        if i > 0 {
            y += line_gap;
        }
        let mut row: Vec<PlacedGlyph> = Vec::new();
        let mut x = 0.0;
        for ch in line.chars() {
            if ch == ' ' {
                x += space_advance;
                continue;
            }
            let (viewport, drawn) = match font.cells(ch).filter(|c| !c.is_empty()) {
                Some(cells) => (compute_viewport(cells, grid, config.auto_crop), true),
                None => (fixed_viewport(grid), false),
            };
            row.push(PlacedGlyph {
                ch,
                origin: Point::new(x, 0.0),
                viewport,
                drawn,
            });
            x += viewport.width + letter_gap;
        }

        // trailing letter gap is not part of the line
        let line_width = if row.is_empty() { x } else { x - letter_gap };
        let line_height = if row.is_empty() {
            grid.canvas_height
        } else {
            row.iter().map(|g| g.viewport.height).fold(0.0, f64::max)
        };

        for mut glyph in row {
            glyph.origin.y = y + (line_height - glyph.viewport.height) / 2.0;
            glyphs.push(glyph);
        }
        width = width.max(line_width);
        y += line_height;
    }

    TextLayout {
        glyphs,
        width,
        height: y,
        lines: source.len(),
    }
}

/// Rasterizes a layout into a coverage mask.
pub fn rasterize_layout(
    font: &Font,
    layout: &TextLayout,
    scale: f64,
) -> Result<GrayscaleBuffer, RenderError> {
    let (width, height) = raster_size(&layout.viewport(), scale)?;
    let mut buffer = GrayscaleBuffer::new(width, height, 0.0);
    for glyph in layout.drawn() {
        let Some(cells) = font.cells(glyph.ch) else {
            continue;
        };
        let transform = Transform::for_viewport(&glyph.viewport, scale)
            .translated(glyph.origin.x * scale, glyph.origin.y * scale);
        rasterize_into(&mut buffer, cells, font.grid(), transform);
    }
    log::debug!(
        "rasterized layout of {} glyph(s) on {} line(s) into {}x{}",
        layout.glyphs.len(),
        layout.lines,
        width,
        height
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trigrid_spec::{GridConfig, GridCoord};

    fn font() -> Font {
        let mut font = Font::new(GridConfig::new(10, 10, 20.0, 17.0));
        for key in ["0-0", "0-1"] {
            font.cells_mut('A').insert(key.parse().unwrap()).unwrap();
        }
        font.cells_mut('B').fill();
        font
    }

    fn no_crop() -> LayoutConfig {
        LayoutConfig {
            letter_spacing: 0.0,
            line_spacing: 0.0,
            word_spacing: 0.5,
            repeat_count: 1,
            auto_crop: false,
        }
    }

    #[test]
    fn test_uncropped_glyphs_advance_by_canvas() {
        let layout = layout_text(&font(), "AB", &no_crop());
        assert_eq!(layout.glyphs.len(), 2);
        assert_eq!(layout.glyphs[1].origin, Point::new(110.0, 0.0));
        assert_eq!(layout.width, 220.0);
        assert_eq!(layout.height, 170.0);
        assert_eq!(layout.lines, 1);
    }

    #[test]
    fn test_space_and_undefined() {
        let layout = layout_text(&font(), "A Z", &no_crop());
        assert_eq!(layout.glyphs.len(), 2);
        assert_eq!(layout.glyphs[1].ch, 'Z');
        assert!(!layout.glyphs[1].drawn);
        assert_eq!(layout.glyphs[1].origin.x, 110.0 + 55.0);
    }

    #[test]
    fn test_newline_and_line_spacing() {
        let config = LayoutConfig {
            line_spacing: 0.5,
            ..no_crop()
        };
        let layout = layout_text(&font(), "A\nB", &config);
        assert_eq!(layout.lines, 2);
        assert_eq!(layout.glyphs[0].origin.y, 0.0);
        assert_eq!(layout.glyphs[1].origin.y, 170.0 + 85.0);
        assert_eq!(layout.height, 170.0 * 2.0 + 85.0);
    }

    #[test]
    fn test_repeat_count() {
        let config = LayoutConfig {
            repeat_count: 3,
            ..no_crop()
        };
        let layout = layout_text(&font(), "AB", &config);
        assert_eq!(layout.lines, 3);
        assert_eq!(layout.glyphs.len(), 6);
        assert_eq!(layout.glyphs[4].origin.y, 340.0);
    }

    #[test]
    fn test_repeat_count_is_clamped() {
        let config = LayoutConfig {
            repeat_count: 4_000_000_000,
            ..no_crop()
        };
        let layout = layout_text(&font(), "A", &config);
        assert_eq!(layout.lines, MAX_REPEAT_COUNT as usize);
        assert_eq!(layout.glyphs.len(), MAX_REPEAT_COUNT as usize);
    }

    #[test]
    fn test_cropped_glyphs_are_centered() {
        let config = LayoutConfig {
            auto_crop: true,
            ..no_crop()
        };
        let layout = layout_text(&font(), "AB", &config);
        let a = &layout.glyphs[0];
        let b = &layout.glyphs[1];
        // B fills the grid so it sets the line height
        assert!(b.viewport.height > a.viewport.height);
        assert!((a.origin.y - (b.viewport.height - a.viewport.height) / 2.0).abs() < 1e-9);
        assert!((b.origin.x - a.viewport.width).abs() < 1e-9);
    }

    #[test]
    fn test_rasterize_layout_draws_each_glyph() {
        let f = font();
        let layout = layout_text(&f, "AA", &no_crop());
        let mask = rasterize_layout(&f, &layout, 1.0).unwrap();
        assert_eq!((mask.width, mask.height), (220, 170));
        // both copies of the up triangle at (0, 0) are covered
        assert_eq!(mask.get(10, 12), 1.0);
        assert_eq!(mask.get(120, 12), 1.0);
        assert_eq!(mask.get(60, 100), 0.0);
    }

    #[test]
    fn test_edits_show_up_in_layout() {
        let mut f = font();
        f.cells_mut('A').insert(GridCoord::new(9, 9)).unwrap();
        let cropped = LayoutConfig {
            auto_crop: true,
            ..no_crop()
        };
        let layout = layout_text(&f, "A", &cropped);
        assert!(layout.width > 100.0);
    }
}
