//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `validate` and `inspect`.

use serde::{Deserialize, Serialize};
use trigrid_spec::{ValidationError, ValidationWarning};

/// Error codes for CLI-level failures. Validation codes (`E0xx`) pass through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E006")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Output of `trigrid validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOutput {
    pub success: bool,
    pub file: String,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

/// One glyph in `trigrid inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlyphInfo {
    /// The character.
    pub glyph: String,
    /// Whether the glyph has been defined at all.
    pub defined: bool,
    /// Number of active cells.
    pub active: usize,
    /// `[min_row, min_col, max_row, max_col]` of the active cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[u32; 4]>,
    /// `[min_x, min_y, width, height]` of the display viewport.
    pub viewport: [f64; 4],
    /// BLAKE3 hash of the canonical cell keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Output of `trigrid inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    pub file: String,
    pub rows: u32,
    pub cols: u32,
    pub drawn: usize,
    pub glyphs_hash: String,
    pub glyphs: Vec<GlyphInfo>,
}
