//! Glyphs, fonts, and the persisted font document.
//!
//! A [`Font`] maps characters to [`Glyph`]s on one shared grid. Export writes
//! only characters with at least one active cell; import is all-or-nothing and
//! leaves characters absent from the document untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cells::CellSet;
use crate::config::GridConfig;
use crate::error::{FontError, ValidationWarning};
use crate::validation::parse_document;

/// Current font document format version.
pub const FONT_FORMAT_VERSION: u32 = 1;

/// Characters a new font starts with.
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,!?-'\" ";

/// A glyph's geometry: either nothing defined yet, or a set of active cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Glyph {
    /// No geometry has been drawn for this character.
    #[default]
    Undefined,
    /// Geometry defined as a set of active cells (possibly emptied by editing).
    Defined(CellSet),
}

impl Glyph {
    /// Returns the cell set if the glyph is defined.
    pub fn cells(&self) -> Option<&CellSet> {
        match self {
            Glyph::Undefined => None,
            Glyph::Defined(cells) => Some(cells),
        }
    }

    /// Number of active cells (zero when undefined).
    pub fn active_count(&self) -> usize {
        self.cells().map_or(0, CellSet::len)
    }

    /// True if the glyph has at least one active cell.
    pub fn has_geometry(&self) -> bool {
        self.cells().is_some_and(|c| !c.is_empty())
    }

    /// Returns the cell set for editing, defining an empty one on `grid` if
    /// the glyph is undefined.
    pub fn define(&mut self, grid: &GridConfig) -> &mut CellSet {
        match self {
            Glyph::Defined(cells) => cells,
            Glyph::Undefined => {
                *self = Glyph::Defined(CellSet::for_grid(grid));
                self.define(grid)
            }
        }
    }
}

/// On-disk font document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDocument {
    /// Format version, always [`FONT_FORMAT_VERSION`] on export.
    pub version: u32,
    /// ISO-8601 export time.
    pub timestamp: String,
    /// Active cell keys per character.
    pub glyphs: BTreeMap<String, Vec<String>>,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Characters replaced or added by the import, in character order.
    pub imported: Vec<char>,
    /// Non-fatal findings from validation.
    pub warnings: Vec<ValidationWarning>,
}

/// A set of glyphs drawn on one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    grid: GridConfig,
    glyphs: BTreeMap<char, Glyph>,
}

impl Font {
    /// Creates a font with every [`DEFAULT_CHARSET`] character undefined.
    pub fn new(grid: GridConfig) -> Self {
        Self::with_charset(grid, DEFAULT_CHARSET.chars())
    }

    /// Creates a font with the given characters undefined.
    pub fn with_charset(grid: GridConfig, charset: impl IntoIterator<Item = char>) -> Self {
        Self {
            grid,
            glyphs: charset.into_iter().map(|ch| (ch, Glyph::Undefined)).collect(),
        }
    }

    /// Grid shared by every glyph.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the glyph for `ch`, if the character is known.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Returns the cells for `ch` if it is defined.
    pub fn cells(&self, ch: char) -> Option<&CellSet> {
        self.glyph(ch).and_then(Glyph::cells)
    }

    /// Returns the cells for `ch` for editing, defining the glyph if needed.
    pub fn cells_mut(&mut self, ch: char) -> &mut CellSet {
        let grid = self.grid;
        self.glyphs.entry(ch).or_default().define(&grid)
    }

    /// Replaces the glyph for `ch`.
    pub fn set_glyph(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch, glyph);
    }

    /// Iterates known characters and their glyphs in character order.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, &Glyph)> {
        self.glyphs.iter().map(|(&ch, g)| (ch, g))
    }

    /// Number of characters with at least one active cell.
    pub fn drawn_count(&self) -> usize {
        self.glyphs.values().filter(|g| g.has_geometry()).count()
    }

    /// Builds the persisted document for this font.
    pub fn export_document(&self, now: DateTime<Utc>) -> FontDocument {
        let glyphs = self
            .glyphs
            .iter()
            .filter_map(|(ch, glyph)| {
                let cells = glyph.cells().filter(|c| !c.is_empty())?;
                Some((ch.to_string(), cells.to_keys()))
            })
            .collect();
        FontDocument {
            version: FONT_FORMAT_VERSION,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            glyphs,
        }
    }

    /// Serializes the font document as pretty JSON.
    pub fn to_json(&self, now: DateTime<Utc>) -> Result<String, FontError> {
        Ok(serde_json::to_string_pretty(&self.export_document(now))?)
    }

    /// Imports glyphs from a JSON document.
    ///
    /// The whole document is checked before anything is applied: on error no
    /// glyph is modified. Characters in the document replace the current
    /// glyph; all others are left as they are.
    pub fn import_json(&mut self, json: &str) -> Result<ImportSummary, FontError> {
        let parsed = parse_document(json, &self.grid)?;
        let imported: Vec<char> = parsed.glyphs.keys().copied().collect();
        for (ch, cells) in parsed.glyphs {
            self.glyphs.insert(ch, Glyph::Defined(cells));
        }
        log::debug!("imported {} glyph(s)", imported.len());
        Ok(ImportSummary {
            imported,
            warnings: parsed.warnings,
        })
    }

    /// Creates a default-charset font and imports `json` into it.
    pub fn from_json(grid: GridConfig, json: &str) -> Result<Self, FontError> {
        grid.validate()?;
        let mut font = Self::new(grid);
        font.import_json(json)?;
        Ok(font)
    }

    /// Writes the font document to `path`.
    pub fn save(&self, path: &Path, now: DateTime<Utc>) -> Result<(), FontError> {
        fs::write(path, self.to_json(now)?)?;
        log::debug!("wrote font document to {}", path.display());
        Ok(())
    }

    /// Reads a font document from `path`.
    pub fn load(path: &Path, grid: GridConfig) -> Result<Self, FontError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(grid, &json)
    }
}
