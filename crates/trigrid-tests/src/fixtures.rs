//! Test fixture utilities for font documents on disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::TempDir;
use trigrid_spec::GridConfig;

/// The 10x10 grid with 20x17 triangles used across the suites.
pub fn small_grid() -> GridConfig {
    GridConfig::new(10, 10, 20.0, 17.0)
}

/// A fixed export time so documents compare byte-for-byte.
pub fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
        .map(|t| t.with_timezone(&Utc))
        .expect("valid timestamp")
}

/// Two-glyph document: `A` is the scenario pair `0-0`, `0-1`; `L` is an
/// L-shaped stroke.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "version": 1,
  "timestamp": "2024-01-02T03:04:05.000Z",
  "glyphs": {
    "A": ["0-0", "0-1"],
    "L": ["2-2", "3-2", "4-2", "4-3", "4-4"]
  }
}"#;

/// A temporary directory holding font documents.
pub struct FontFixture {
    pub root: TempDir,
}

impl FontFixture {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `name` inside the fixture.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Write [`SAMPLE_DOCUMENT`] as `font.json`.
    pub fn sample_font(&self) -> PathBuf {
        self.write("font.json", SAMPLE_DOCUMENT)
    }

    /// Path of a file inside the fixture, as a `String` for CLI arguments.
    pub fn arg(&self, name: &str) -> String {
        self.root.path().join(name).to_string_lossy().into_owned()
    }
}

impl Default for FontFixture {
    fn default() -> Self {
        Self::new()
    }
}
