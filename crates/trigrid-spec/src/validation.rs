//! Font document validation.
//!
//! Checks a JSON document against the persisted font format:
//!
//! ```text
//! { "version": 1, "timestamp": "<ISO-8601>", "glyphs": { "A": ["0-0", ...] } }
//! ```
//!
//! Every problem is collected rather than stopping at the first one, so the
//! same pass serves both `validate` reporting and all-or-nothing import.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::cells::{CellSet, CellSetError};
use crate::config::GridConfig;
use crate::coord::GridCoord;
use crate::error::{
    ErrorCode, FontError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::font::FONT_FORMAT_VERSION;

/// Glyph cell sets decoded from a valid document.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Cell sets keyed by character, in character order.
    pub glyphs: BTreeMap<char, CellSet>,
    /// Non-fatal findings.
    pub warnings: Vec<ValidationWarning>,
}

/// Validates a font document without decoding it for use.
pub fn validate_document(json: &str, grid: &GridConfig) -> ValidationResult {
    check_document(json, grid).1
}

/// Decodes a font document, failing if any error is found.
pub fn parse_document(json: &str, grid: &GridConfig) -> Result<ParsedDocument, FontError> {
    let (glyphs, result) = check_document(json, grid);
    match result.into_result() {
        Ok(warnings) => Ok(ParsedDocument { glyphs, warnings }),
        Err(errors) => Err(FontError::InvalidFormat(errors)),
    }
}

fn check_document(json: &str, grid: &GridConfig) -> (BTreeMap<char, CellSet>, ValidationResult) {
    let mut result = ValidationResult::success();
    let mut glyphs = BTreeMap::new();

    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            result.add_error(ValidationError::new(
                ErrorCode::InvalidJson,
                format!("document is not valid JSON: {}", e),
            ));
            return (glyphs, result);
        }
    };
    let Some(root) = value.as_object() else {
        result.add_error(ValidationError::new(
            ErrorCode::InvalidJson,
            "document must be a JSON object",
        ));
        return (glyphs, result);
    };

    match root.get("version") {
        None => result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingVersion,
            format!("version is missing; assuming {}", FONT_FORMAT_VERSION),
            "version",
        )),
        Some(v) if v.as_u64() == Some(FONT_FORMAT_VERSION as u64) => {}
        Some(v) => result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedVersion,
            format!(
                "unsupported version {} (expected {})",
                v, FONT_FORMAT_VERSION
            ),
            "version",
        )),
    }

    let timestamp_ok = root
        .get("timestamp")
        .and_then(Value::as_str)
        .is_some_and(|ts| chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    if !timestamp_ok {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::InvalidTimestamp,
            "timestamp is missing or not ISO-8601",
            "timestamp",
        ));
    }

    let Some(entries) = root.get("glyphs").and_then(Value::as_object) else {
        result.add_error(ValidationError::with_path(
            ErrorCode::MissingGlyphs,
            "glyphs must be present and be an object",
            "glyphs",
        ));
        return (glyphs, result);
    };

    for (name, entry) in entries {
        let path = format!("glyphs.{}", name);
        let mut chars = name.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidGlyphName,
                    format!("glyph name '{}' must be exactly one character", name),
                    path,
                ));
                continue;
            }
        };

        let Some(keys) = entry.as_array() else {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidGlyphEntry,
                "glyph entry must be an array of cell keys",
                path,
            ));
            continue;
        };

        if keys.is_empty() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::EmptyGlyph,
                "glyph has no active cells",
                path.clone(),
            ));
        }

        let mut cells = CellSet::for_grid(grid);
        let mut entry_ok = true;
        for (i, key) in keys.iter().enumerate() {
            let key_path = format!("{}[{}]", path, i);
            let Some(key) = key.as_str() else {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidGlyphEntry,
                    "cell key must be a string",
                    key_path,
                ));
                entry_ok = false;
                continue;
            };
            let inserted = key
                .parse::<GridCoord>()
                .map_err(CellSetError::from)
                .and_then(|coord| cells.insert(coord));
            match inserted {
                Ok(true) => {}
                Ok(false) => result.add_warning(ValidationWarning::with_path(
                    WarningCode::DuplicateCellKey,
                    format!("cell '{}' listed more than once", key),
                    key_path,
                )),
                Err(CellSetError::Parse(e)) => {
                    result.add_error(ValidationError::with_path(
                        ErrorCode::InvalidCellKey,
                        e.to_string(),
                        key_path,
                    ));
                    entry_ok = false;
                }
                Err(e @ CellSetError::OutOfBounds { .. }) => {
                    result.add_error(ValidationError::with_path(
                        ErrorCode::CellOutOfBounds,
                        e.to_string(),
                        key_path,
                    ));
                    entry_ok = false;
                }
            }
        }
        if entry_ok {
            glyphs.insert(ch, cells);
        }
    }

    (glyphs, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridConfig {
        GridConfig::new(10, 10, 20.0, 17.0)
    }

    fn codes(result: &ValidationResult) -> Vec<&'static str> {
        result.errors.iter().map(|e| e.code.code()).collect()
    }

    #[test]
    fn test_valid_document() {
        let json = r#"{
            "version": 1,
            "timestamp": "2024-03-01T12:00:00.000Z",
            "glyphs": { "A": ["0-0", "0-1"], "b": ["9-9"] }
        }"#;
        let parsed = parse_document(json, &grid()).unwrap();
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.glyphs.len(), 2);
        assert_eq!(parsed.glyphs[&'A'].len(), 2);
    }

    #[test]
    fn test_missing_glyphs() {
        let result = validate_document(r#"{"version": 1}"#, &grid());
        assert_eq!(codes(&result), vec!["E002"]);
    }

    #[test]
    fn test_glyphs_not_object() {
        let result = validate_document(r#"{"version": 1, "glyphs": ["A"]}"#, &grid());
        assert_eq!(codes(&result), vec!["E002"]);
    }

    #[test]
    fn test_not_json() {
        let result = validate_document("not json", &grid());
        assert_eq!(codes(&result), vec!["E001"]);
        let result = validate_document("[1, 2]", &grid());
        assert_eq!(codes(&result), vec!["E001"]);
    }

    #[test]
    fn test_collects_all_errors() {
        let json = r#"{
            "version": 2,
            "glyphs": {
                "AB": ["0-0"],
                "C": "0-0",
                "D": ["0-0", "x", 5, "10-0"]
            }
        }"#;
        let result = validate_document(json, &grid());
        assert_eq!(
            codes(&result),
            vec!["E003", "E004", "E005", "E006", "E005", "E007"]
        );
    }

    #[test]
    fn test_warnings() {
        let json = r#"{"glyphs": {"A": [], "B": ["1-1", "1-1"]}}"#;
        let parsed = parse_document(json, &grid()).unwrap();
        let warnings: Vec<&str> = parsed.warnings.iter().map(|w| w.code.code()).collect();
        assert_eq!(warnings, vec!["W001", "W002", "W003", "W004"]);
        assert!(parsed.glyphs[&'A'].is_empty());
        assert_eq!(parsed.glyphs[&'B'].len(), 1);
    }

    #[test]
    fn test_parse_failure_is_invalid_format() {
        let err = parse_document("{}", &grid()).unwrap_err();
        assert!(matches!(err, FontError::InvalidFormat(ref errs) if errs.len() == 1));
    }
}
