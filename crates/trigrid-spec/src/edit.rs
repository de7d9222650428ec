//! Editor operations on a glyph's active-cell set.
//!
//! Clicks map to [`EditOp::Toggle`]; a click-drag is a [`Stroke`] whose paint
//! or erase mode is decided by the first cell it touches. Every operation
//! either applies fully or leaves the set unchanged.

use thiserror::Error;

use crate::cells::CellSet;
use crate::coord::GridCoord;

/// Errors from applying an edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A coordinate lies outside the grid.
    #[error("cell {0} is outside the grid")]
    OutOfBounds(GridCoord),

    /// A shift would flip every triangle's orientation.
    #[error("shift by ({rows}, {cols}) changes triangle orientation; rows + cols must be even")]
    ParityChange { rows: i64, cols: i64 },
}

/// A single edit to a cell set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Flip one cell.
    Toggle(GridCoord),
    /// Activate one cell.
    Paint(GridCoord),
    /// Deactivate one cell.
    Erase(GridCoord),
    /// Deactivate every cell.
    Clear,
    /// Activate every cell.
    Fill,
    /// Translate every active cell.
    Shift { rows: i64, cols: i64 },
}

/// Applies `op` to `cells`.
pub fn apply(cells: &mut CellSet, op: EditOp) -> Result<(), EditError> {
    match op {
        EditOp::Toggle(coord) => {
            let coord = in_grid(cells, coord)?;
            let _ = cells.toggle(coord);
        }
        EditOp::Paint(coord) => {
            let coord = in_grid(cells, coord)?;
            let _ = cells.insert(coord);
        }
        EditOp::Erase(coord) => {
            let coord = in_grid(cells, coord)?;
            let _ = cells.remove(coord);
        }
        EditOp::Clear => cells.clear(),
        EditOp::Fill => cells.fill(),
        EditOp::Shift { rows, cols } => shift(cells, rows, cols)?,
    }
    Ok(())
}

fn in_grid(cells: &CellSet, coord: GridCoord) -> Result<GridCoord, EditError> {
    if cells.in_bounds(coord) {
        Ok(coord)
    } else {
        Err(EditError::OutOfBounds(coord))
    }
}

fn shift(cells: &mut CellSet, rows: i64, cols: i64) -> Result<(), EditError> {
    if (rows ^ cols) & 1 != 0 {
        return Err(EditError::ParityChange { rows, cols });
    }
    let mut shifted = CellSet::new(cells.rows(), cells.cols());
    for coord in cells.iter() {
        let moved = coord
            .offset(rows, cols)
            .filter(|c| shifted.in_bounds(*c))
            .ok_or(EditError::OutOfBounds(coord))?;
        let _ = shifted.insert(moved);
    }
    *cells = shifted;
    Ok(())
}

/// Whether a drag stroke paints or erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMode {
    Paint,
    Erase,
}

/// A click-drag over several cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    mode: StrokeMode,
}

impl Stroke {
    /// Starts a stroke at `start`: an inactive start cell paints, an active
    /// one erases. The start cell is applied immediately.
    pub fn begin(cells: &mut CellSet, start: GridCoord) -> Result<Self, EditError> {
        let mode = if cells.contains(start) {
            StrokeMode::Erase
        } else {
            StrokeMode::Paint
        };
        let stroke = Self { mode };
        stroke.extend(cells, start)?;
        Ok(stroke)
    }

    /// The stroke's mode.
    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    /// Applies the stroke to another cell.
    pub fn extend(&self, cells: &mut CellSet, coord: GridCoord) -> Result<(), EditError> {
        let op = match self.mode {
            StrokeMode::Paint => EditOp::Paint(coord),
            StrokeMode::Erase => EditOp::Erase(coord),
        };
        apply(cells, op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(keys: &[&str]) -> CellSet {
        CellSet::from_keys(6, 6, keys).unwrap()
    }

    #[test]
    fn test_toggle_paint_erase() {
        let mut cells = set(&[]);
        apply(&mut cells, EditOp::Toggle(GridCoord::new(1, 1))).unwrap();
        apply(&mut cells, EditOp::Paint(GridCoord::new(1, 1))).unwrap();
        assert_eq!(cells.to_keys(), vec!["1-1"]);
        apply(&mut cells, EditOp::Erase(GridCoord::new(1, 1))).unwrap();
        assert!(cells.is_empty());
    }

    #[test]
    fn test_out_of_bounds_op() {
        let mut cells = set(&["0-0"]);
        let err = apply(&mut cells, EditOp::Paint(GridCoord::new(6, 0))).unwrap_err();
        assert_eq!(err, EditError::OutOfBounds(GridCoord::new(6, 0)));
        assert_eq!(cells.to_keys(), vec!["0-0"]);
    }

    #[test]
    fn test_shift_preserves_orientation() {
        let mut cells = set(&["0-0", "0-1"]);
        apply(&mut cells, EditOp::Shift { rows: 1, cols: 1 }).unwrap();
        assert_eq!(cells.to_keys(), vec!["1-1", "1-2"]);
        for coord in cells.iter() {
            let original = coord.offset(-1, -1).unwrap();
            assert_eq!(coord.orientation(), original.orientation());
        }
    }

    #[test]
    fn test_shift_parity_rejected() {
        let mut cells = set(&["2-2"]);
        let err = apply(&mut cells, EditOp::Shift { rows: 0, cols: 1 }).unwrap_err();
        assert_eq!(err, EditError::ParityChange { rows: 0, cols: 1 });
        assert_eq!(cells.to_keys(), vec!["2-2"]);
    }

    #[test]
    fn test_shift_off_grid_rejected() {
        let mut cells = set(&["0-0", "3-3"]);
        let err = apply(&mut cells, EditOp::Shift { rows: 0, cols: -2 }).unwrap_err();
        assert_eq!(err, EditError::OutOfBounds(GridCoord::new(0, 0)));
        assert_eq!(cells.to_keys(), vec!["0-0", "3-3"]);
    }

    #[test]
    fn test_shift_extreme_offsets() {
        let mut cells = set(&["2-2"]);
        let err = apply(&mut cells, EditOp::Shift { rows: i64::MAX, cols: 1 }).unwrap_err();
        assert_eq!(err, EditError::ParityChange { rows: i64::MAX, cols: 1 });

        let err = apply(&mut cells, EditOp::Shift { rows: i64::MAX, cols: -1 }).unwrap_err();
        assert_eq!(err, EditError::OutOfBounds(GridCoord::new(2, 2)));

        let err = apply(&mut cells, EditOp::Shift { rows: i64::MIN, cols: 0 }).unwrap_err();
        assert_eq!(err, EditError::OutOfBounds(GridCoord::new(2, 2)));
        assert_eq!(cells.to_keys(), vec!["2-2"]);
    }

    #[test]
    fn test_stroke_paints_from_empty_start() {
        let mut cells = set(&["0-2"]);
        let stroke = Stroke::begin(&mut cells, GridCoord::new(0, 0)).unwrap();
        assert_eq!(stroke.mode(), StrokeMode::Paint);
        stroke.extend(&mut cells, GridCoord::new(0, 1)).unwrap();
        stroke.extend(&mut cells, GridCoord::new(0, 2)).unwrap();
        assert_eq!(cells.to_keys(), vec!["0-0", "0-1", "0-2"]);
    }

    #[test]
    fn test_stroke_erases_from_active_start() {
        let mut cells = set(&["0-0", "0-1", "5-5"]);
        let stroke = Stroke::begin(&mut cells, GridCoord::new(0, 0)).unwrap();
        assert_eq!(stroke.mode(), StrokeMode::Erase);
        stroke.extend(&mut cells, GridCoord::new(0, 1)).unwrap();
        assert_eq!(cells.to_keys(), vec!["5-5"]);
    }
}
