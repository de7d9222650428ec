//! trigrid Data Model
//!
//! This crate provides the types behind a triangular-grid glyph designer:
//! grid configuration, grid coordinates and their `"{row}-{col}"` key form,
//! dense active-cell sets, glyphs, fonts, and the persisted JSON font
//! document.
//!
//! # Example
//!
//! ```
//! use trigrid_spec::{Font, GridConfig, GridCoord};
//! use trigrid_spec::edit::{apply, EditOp};
//!
//! let mut font = Font::new(GridConfig::default());
//! let cells = font.cells_mut('A');
//! apply(cells, EditOp::Paint(GridCoord::new(0, 0))).unwrap();
//! apply(cells, EditOp::Paint(GridCoord::new(0, 1))).unwrap();
//!
//! let json = font.to_json(chrono::Utc::now()).unwrap();
//! let restored = trigrid_spec::Font::from_json(GridConfig::default(), &json).unwrap();
//! assert_eq!(restored.cells('A'), font.cells('A'));
//! ```
//!
//! # Modules
//!
//! - [`config`]: Grid and layout configuration
//! - [`coord`]: Grid coordinates, orientation, key parsing
//! - [`cells`]: Bitset of active cells
//! - [`edit`]: Editor operations and drag strokes
//! - [`font`]: Glyph sum type, font, import/export
//! - [`validation`]: Font document validation
//! - [`error`]: Error and warning types
//! - [`hash`]: Geometry content hashes

pub mod cells;
pub mod config;
pub mod coord;
pub mod edit;
pub mod error;
pub mod font;
pub mod hash;
pub mod validation;

// Re-export commonly used types at the crate root
pub use cells::{CellBounds, CellSet, CellSetError};
pub use config::{ConfigError, GridConfig, LayoutConfig, MAX_GRID_DIMENSION, MAX_REPEAT_COUNT};
pub use coord::{CoordParseError, GridCoord, Orientation};
pub use edit::{EditError, EditOp, Stroke, StrokeMode};
pub use error::{
    ErrorCode, FontError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use font::{Font, FontDocument, Glyph, ImportSummary, DEFAULT_CHARSET, FONT_FORMAT_VERSION};
pub use hash::{cells_hash, glyphs_hash};
pub use validation::{parse_document, validate_document, ParsedDocument};
