//! Edit command implementation
//!
//! Applies editor operations to one glyph of a font document. Operations run
//! on a copy of the glyph in a fixed order (clear, fill, paint, erase,
//! toggle, stroke, shift); the document is only written if all succeed.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use trigrid_spec::{edit, CellSet, EditOp, GridConfig, GridCoord, Stroke};

use super::common::{load_font, save_font};

/// Operations requested on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOps {
    pub clear: bool,
    pub fill: bool,
    pub paint: Vec<String>,
    pub erase: Vec<String>,
    pub toggle: Vec<String>,
    /// Cells of one drag stroke, in the order they are touched.
    pub stroke: Vec<String>,
    pub shift: (i64, i64),
}

impl EditOps {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Run the edit command
///
/// # Arguments
/// * `font_path` - Font document to edit
/// * `glyph` - Character to edit (defined if it was undefined)
/// * `ops` - Operations to apply
/// * `output` - Output path (default: overwrite the input)
/// * `grid` - Grid the font is drawn on
pub fn run(
    font_path: &str,
    glyph: char,
    ops: &EditOps,
    output: Option<&str>,
    grid: &GridConfig,
) -> Result<ExitCode> {
    let mut font = load_font(font_path, grid)?;

    let before = font.cells(glyph).map_or(0, CellSet::len);
    let mut cells = font
        .cells(glyph)
        .cloned()
        .unwrap_or_else(|| CellSet::for_grid(grid));
    apply_ops(&mut cells, ops).with_context(|| format!("Failed to edit glyph {:?}", glyph))?;
    let after = cells.len();
    *font.cells_mut(glyph) = cells;

    let output_path = output.unwrap_or(font_path);
    save_font(&font, output_path)?;

    println!(
        "{} {:?}: {} -> {} active cell(s), wrote {}",
        "Edited".green().bold(),
        glyph,
        before,
        after,
        output_path
    );
    Ok(ExitCode::SUCCESS)
}

/// Applies `ops` to `cells`.
pub fn apply_ops(cells: &mut CellSet, ops: &EditOps) -> Result<()> {
    if ops.clear {
        edit::apply(cells, EditOp::Clear)?;
    }
    if ops.fill {
        edit::apply(cells, EditOp::Fill)?;
    }
    for key in &ops.paint {
        edit::apply(cells, EditOp::Paint(parse_coord(key)?))?;
    }
    for key in &ops.erase {
        edit::apply(cells, EditOp::Erase(parse_coord(key)?))?;
    }
    for key in &ops.toggle {
        edit::apply(cells, EditOp::Toggle(parse_coord(key)?))?;
    }
    if let Some((first, rest)) = ops.stroke.split_first() {
        let stroke = Stroke::begin(cells, parse_coord(first)?)?;
        log::debug!("stroke mode {:?}", stroke.mode());
        for key in rest {
            stroke.extend(cells, parse_coord(key)?)?;
        }
    }
    let (rows, cols) = ops.shift;
    if rows != 0 || cols != 0 {
        edit::apply(cells, EditOp::Shift { rows, cols })?;
    }
    Ok(())
}

fn parse_coord(key: &str) -> Result<GridCoord> {
    key.parse::<GridCoord>()
        .with_context(|| format!("Invalid cell key: {}", key))
}
