//! Dense active-cell set.
//!
//! A glyph's filled triangles are stored as a bitset indexed by
//! `(row, col)` over a fixed grid. The external representation is the sorted
//! list of `"{row}-{col}"` keys.

use std::fmt;

use thiserror::Error;

use crate::config::GridConfig;
use crate::coord::{CoordParseError, GridCoord};

/// Errors from building a cell set out of keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellSetError {
    /// A key is not in `"{row}-{col}"` form.
    #[error(transparent)]
    Parse(#[from] CoordParseError),

    /// A key names a cell outside the grid.
    #[error("cell {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: GridCoord, rows: u32, cols: u32 },
}

/// Inclusive bounding box of active cells in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

/// Set of active cells on a `rows x cols` grid.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CellSet {
    rows: u32,
    cols: u32,
    bits: Vec<u64>,
}

impl CellSet {
    /// Creates an empty set for a grid of the given size.
    pub fn new(rows: u32, cols: u32) -> Self {
        let cells = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            bits: vec![0; cells.div_ceil(64)],
        }
    }

    /// Creates an empty set sized for `config`.
    pub fn for_grid(config: &GridConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    /// Number of grid rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns true if `coord` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<(usize, u64)> {
        if !self.in_bounds(coord) {
            return None;
        }
        let i = coord.row as usize * self.cols as usize + coord.col as usize;
        Some((i / 64, 1u64 << (i % 64)))
    }

    fn check(&self, coord: GridCoord) -> Result<(usize, u64), CellSetError> {
        self.index(coord).ok_or(CellSetError::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Returns true if `coord` is active. Out-of-grid coordinates are never active.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        match self.index(coord) {
            Some((word, mask)) => self.bits[word] & mask != 0,
            None => false,
        }
    }

    /// Marks `coord` active. Returns true if it was not active before.
    pub fn insert(&mut self, coord: GridCoord) -> Result<bool, CellSetError> {
        let (word, mask) = self.check(coord)?;
        let was_set = self.bits[word] & mask != 0;
        self.bits[word] |= mask;
        Ok(!was_set)
    }

    /// Marks `coord` inactive. Returns true if it was active before.
    pub fn remove(&mut self, coord: GridCoord) -> Result<bool, CellSetError> {
        let (word, mask) = self.check(coord)?;
        let was_set = self.bits[word] & mask != 0;
        self.bits[word] &= !mask;
        Ok(was_set)
    }

    /// Sets `coord` to `active`.
    pub fn set(&mut self, coord: GridCoord, active: bool) -> Result<(), CellSetError> {
        if active {
            self.insert(coord)?;
        } else {
            self.remove(coord)?;
        }
        Ok(())
    }

    /// Flips `coord`, returning its new state.
    pub fn toggle(&mut self, coord: GridCoord) -> Result<bool, CellSetError> {
        let (word, mask) = self.check(coord)?;
        self.bits[word] ^= mask;
        Ok(self.bits[word] & mask != 0)
    }

    /// Deactivates every cell.
    pub fn clear(&mut self) {
        self.bits.iter_mut().for_each(|w| *w = 0);
    }

    /// Activates every cell in the grid.
    pub fn fill(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                // in range by construction
                let i = row as usize * self.cols as usize + col as usize;
                self.bits[i / 64] |= 1u64 << (i % 64);
            }
        }
    }

    /// Number of active cells.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no cell is active.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Iterates active cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = GridCoord> + '_ {
        let cols = self.cols as usize;
        self.bits.iter().enumerate().flat_map(move |(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                let i = w * 64 + bit;
                Some(GridCoord::new((i / cols) as u32, (i % cols) as u32))
            })
        })
    }

    /// Bounding box of the active cells, or `None` when empty.
    pub fn bounds(&self) -> Option<CellBounds> {
        let mut iter = self.iter();
        let first = iter.next()?;
        let init = CellBounds {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };
        Some(iter.fold(init, |b, c| CellBounds {
            min_row: b.min_row.min(c.row),
            max_row: b.max_row.max(c.row),
            min_col: b.min_col.min(c.col),
            max_col: b.max_col.max(c.col),
        }))
    }

    /// Canonical keys of the active cells, in row-major order.
    pub fn to_keys(&self) -> Vec<String> {
        self.iter().map(|c| c.to_string()).collect()
    }

    /// Builds a set from `"{row}-{col}"` keys. Duplicate keys collapse.
    pub fn from_keys<I, S>(rows: u32, cols: u32, keys: I) -> Result<Self, CellSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(rows, cols);
        for key in keys {
            let coord: GridCoord = key.as_ref().parse()?;
            set.insert(coord)?;
        }
        Ok(set)
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellSet")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("cells", &self.to_keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = CellSet::new(4, 4);
        assert_eq!(set.insert(GridCoord::new(1, 2)), Ok(true));
        assert_eq!(set.insert(GridCoord::new(1, 2)), Ok(false));
        assert_eq!(set.len(), 1);
        assert!(set.contains(GridCoord::new(1, 2)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut set = CellSet::new(2, 3);
        assert!(matches!(
            set.insert(GridCoord::new(2, 0)),
            Err(CellSetError::OutOfBounds { .. })
        ));
        assert!(!set.contains(GridCoord::new(0, 3)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut set = CellSet::new(3, 3);
        assert_eq!(set.toggle(GridCoord::new(0, 0)), Ok(true));
        assert_eq!(set.toggle(GridCoord::new(0, 0)), Ok(false));
        set.insert(GridCoord::new(2, 2)).unwrap();
        assert_eq!(set.remove(GridCoord::new(2, 2)), Ok(true));
        assert_eq!(set.remove(GridCoord::new(2, 2)), Ok(false));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_row_major_across_words() {
        let mut set = CellSet::new(10, 10);
        for coord in [GridCoord::new(9, 9), GridCoord::new(0, 5), GridCoord::new(6, 4)] {
            set.insert(coord).unwrap();
        }
        let cells: Vec<GridCoord> = set.iter().collect();
        assert_eq!(
            cells,
            vec![GridCoord::new(0, 5), GridCoord::new(6, 4), GridCoord::new(9, 9)]
        );
    }

    #[test]
    fn test_fill_and_clear() {
        let mut set = CellSet::new(5, 13);
        set.fill();
        assert_eq!(set.len(), 65);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_bounds() {
        let mut set = CellSet::new(8, 8);
        assert_eq!(set.bounds(), None);
        set.insert(GridCoord::new(2, 5)).unwrap();
        set.insert(GridCoord::new(6, 1)).unwrap();
        assert_eq!(
            set.bounds(),
            Some(CellBounds {
                min_row: 2,
                max_row: 6,
                min_col: 1,
                max_col: 5,
            })
        );
    }

    #[test]
    fn test_keys_roundtrip_order_independent() {
        let a = CellSet::from_keys(10, 10, ["3-4", "0-1", "0-0", "3-4"]).unwrap();
        let b = CellSet::from_keys(10, 10, a.to_keys()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_keys(), vec!["0-0", "0-1", "3-4"]);
    }

    #[test]
    fn test_from_keys_rejects_bad_input() {
        assert!(matches!(
            CellSet::from_keys(4, 4, ["1-x"]),
            Err(CellSetError::Parse(_))
        ));
        assert!(matches!(
            CellSet::from_keys(4, 4, ["4-0"]),
            Err(CellSetError::OutOfBounds { .. })
        ));
    }
}
