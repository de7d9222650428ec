//! Grid coordinates and their canonical `"{row}-{col}"` key form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from parsing a grid coordinate key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordParseError {
    /// Key is not `digits-digits`.
    #[error("invalid cell key '{0}': expected \"<row>-<col>\"")]
    Malformed(String),

    /// A component does not fit in a u32.
    #[error("cell key '{0}' is out of range")]
    Overflow(String),
}

/// Which way a triangular cell points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Apex at the top, base at the bottom.
    Up,
    /// Base at the top, apex at the bottom.
    Down,
}

impl Orientation {
    /// Returns the opposite orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
        }
    }
}

/// A (row, column) pair identifying one triangular cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub row: u32,
    pub col: u32,
}

impl GridCoord {
    /// Creates a coordinate.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Up iff `row + col` is even.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        if (self.row ^ self.col) & 1 == 0 {
            Orientation::Up
        } else {
            Orientation::Down
        }
    }

    /// Offsets the coordinate, returning `None` if it would leave `u32` range.
    pub fn offset(&self, rows: i64, cols: i64) -> Option<Self> {
        let row = u32::try_from(i64::from(self.row).checked_add(rows)?).ok()?;
        let col = u32::try_from(i64::from(self.col).checked_add(cols)?).ok()?;
        Some(Self { row, col })
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for GridCoord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or_else(|| CoordParseError::Malformed(s.to_string()))?;
        let is_decimal = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_decimal(row) || !is_decimal(col) {
            return Err(CoordParseError::Malformed(s.to_string()));
        }
        let row = row
            .parse::<u32>()
            .map_err(|_| CoordParseError::Overflow(s.to_string()))?;
        let col = col
            .parse::<u32>()
            .map_err(|_| CoordParseError::Overflow(s.to_string()))?;
        Ok(Self { row, col })
    }
}

impl Serialize for GridCoord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridCoord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
