//! Grid and layout configuration.
//!
//! The grid constants (`rows`, `cols`, triangle size and height, canvas size)
//! are fixed for the lifetime of a font. They are carried as a value so the
//! same code can drive the default editor grid and the small grids used in
//! tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of grid rows.
pub const DEFAULT_GRID_ROWS: u32 = 12;
/// Default number of grid columns.
pub const DEFAULT_GRID_COLS: u32 = 14;
/// Default triangle base width in canvas pixels.
pub const DEFAULT_TRIANGLE_SIZE: f64 = 40.0;
/// Default triangle height in canvas pixels (close to `size * sqrt(3) / 2`).
pub const DEFAULT_TRIANGLE_HEIGHT: f64 = 35.0;
/// Default padding applied on each side of a cropped viewport, as a fraction
/// of the cropped extent.
pub const DEFAULT_CROP_PADDING: f64 = 0.1;
/// Largest accepted row or column count.
pub const MAX_GRID_DIMENSION: u32 = 1024;
/// Largest accepted type tester repeat count.
pub const MAX_REPEAT_COUNT: u32 = 256;

/// Errors from configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Grid has zero rows or columns.
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u32, cols: u32 },

    /// Grid exceeds [`MAX_GRID_DIMENSION`] in either direction.
    #[error("grid {rows}x{cols} exceeds the maximum of {max} rows or columns")]
    GridTooLarge { rows: u32, cols: u32, max: u32 },

    /// Triangle dimensions are not positive finite numbers.
    #[error("triangle size and height must be positive (got size={size}, height={height})")]
    InvalidTriangle { size: f64, height: f64 },

    /// Canvas does not bound the grid.
    #[error("canvas {width}x{height} does not bound the grid (expected about {expected_width}x{expected_height})")]
    CanvasMismatch {
        width: f64,
        height: f64,
        expected_width: f64,
        expected_height: f64,
    },

    /// Crop padding out of range.
    #[error("crop padding must be in [0, 1] (got {0})")]
    InvalidPadding(f64),

    /// Layout values out of range.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Fixed geometry of the triangular grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Number of rows (`GRID_ROWS`).
    pub rows: u32,
    /// Number of columns (`GRID_COLS`).
    pub cols: u32,
    /// Triangle base width in canvas pixels (`TRIANGLE_SIZE`).
    pub triangle_size: f64,
    /// Triangle height in canvas pixels (`TRIANGLE_HEIGHT`).
    pub triangle_height: f64,
    /// Full canvas width (`CANVAS_WIDTH`).
    pub canvas_width: f64,
    /// Full canvas height (`CANVAS_HEIGHT`).
    pub canvas_height: f64,
    /// Padding on each side of a cropped viewport, as a fraction of extent.
    #[serde(default = "default_crop_padding")]
    pub crop_padding: f64,
}

fn default_crop_padding() -> f64 {
    DEFAULT_CROP_PADDING
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_GRID_ROWS,
            DEFAULT_GRID_COLS,
            DEFAULT_TRIANGLE_SIZE,
            DEFAULT_TRIANGLE_HEIGHT,
        )
    }
}

impl GridConfig {
    /// Creates a grid config whose canvas exactly bounds the grid.
    pub fn new(rows: u32, cols: u32, triangle_size: f64, triangle_height: f64) -> Self {
        Self {
            rows,
            cols,
            triangle_size,
            triangle_height,
            canvas_width: cols as f64 * triangle_size / 2.0 + triangle_size / 2.0,
            canvas_height: rows as f64 * triangle_height,
            crop_padding: DEFAULT_CROP_PADDING,
        }
    }

    /// Sets the crop padding ratio.
    pub fn with_crop_padding(mut self, padding: f64) -> Self {
        self.crop_padding = padding;
        self
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns true if `(row, col)` lies inside the grid.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Checks the configuration for consistency.
    ///
    /// The canvas width may differ from the exact grid width by less than
    /// half a triangle; the canvas height must match the grid height.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_GRID_DIMENSION || self.cols > MAX_GRID_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_GRID_DIMENSION,
            });
        }
        let size_ok = self.triangle_size.is_finite() && self.triangle_size > 0.0;
        let height_ok = self.triangle_height.is_finite() && self.triangle_height > 0.0;
        if !size_ok || !height_ok {
            return Err(ConfigError::InvalidTriangle {
                size: self.triangle_size,
                height: self.triangle_height,
            });
        }
        if !(0.0..=1.0).contains(&self.crop_padding) {
            return Err(ConfigError::InvalidPadding(self.crop_padding));
        }

        let expected = Self::new(self.rows, self.cols, self.triangle_size, self.triangle_height);
        let width_ok = (self.canvas_width - expected.canvas_width).abs() < self.triangle_size / 2.0;
        let height_ok = (self.canvas_height - expected.canvas_height).abs() < 1e-6;
        if !width_ok || !height_ok {
            return Err(ConfigError::CanvasMismatch {
                width: self.canvas_width,
                height: self.canvas_height,
                expected_width: expected.canvas_width,
                expected_height: expected.canvas_height,
            });
        }
        Ok(())
    }
}

/// Type tester layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Gap between glyphs, as a fraction of the canvas width.
    pub letter_spacing: f64,
    /// Extra gap between lines, as a fraction of the canvas height.
    pub line_spacing: f64,
    /// Advance of a space character, as a fraction of the canvas width.
    pub word_spacing: f64,
    /// How many times the text is repeated in pattern mode.
    pub repeat_count: u32,
    /// Whether each glyph is tightened to its active cells.
    pub auto_crop: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            letter_spacing: 0.1,
            line_spacing: 0.2,
            word_spacing: 0.5,
            repeat_count: 1,
            auto_crop: true,
        }
    }
}

impl LayoutConfig {
    /// Checks spacing and repeat values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("letter_spacing", self.letter_spacing),
            ("line_spacing", self.line_spacing),
            ("word_spacing", self.word_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidLayout(format!(
                    "{} must be a non-negative number (got {})",
                    name, value
                )));
            }
        }
        if self.repeat_count == 0 || self.repeat_count > MAX_REPEAT_COUNT {
            return Err(ConfigError::InvalidLayout(format!(
                "repeat_count must be between 1 and {} (got {})",
                MAX_REPEAT_COUNT, self.repeat_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas_width, 300.0);
        assert_eq!(config.canvas_height, 420.0);
    }

    #[test]
    fn test_small_grid_canvas() {
        let config = GridConfig::new(10, 10, 20.0, 17.0);
        assert_eq!(config.canvas_width, 110.0);
        assert_eq!(config.canvas_height, 170.0);
        assert_eq!(config.cell_count(), 100);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = GridConfig::new(0, 4, 20.0, 17.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn test_canvas_mismatch_rejected() {
        let mut config = GridConfig::new(4, 4, 20.0, 17.0);
        config.canvas_height = 100.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CanvasMismatch { .. })
        ));
    }

    #[test]
    fn test_canvas_width_tolerance() {
        let mut config = GridConfig::new(4, 4, 20.0, 17.0);
        config.canvas_width += 5.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let config = GridConfig::new(u32::MAX, u32::MAX, 20.0, 17.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge { max: MAX_GRID_DIMENSION, .. })
        ));
        let config = GridConfig::new(4, MAX_GRID_DIMENSION + 1, 20.0, 17.0);
        assert!(config.validate().is_err());
        let config = GridConfig::new(MAX_GRID_DIMENSION, MAX_GRID_DIMENSION, 20.0, 17.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_padding_range() {
        let config = GridConfig::default().with_crop_padding(1.5);
        assert_eq!(config.validate(), Err(ConfigError::InvalidPadding(1.5)));
    }

    #[test]
    fn test_grid_config_deserialize_default_padding() {
        let json = r#"{
            "rows": 2, "cols": 3,
            "triangle_size": 20.0, "triangle_height": 17.0,
            "canvas_width": 40.0, "canvas_height": 34.0
        }"#;
        let config: GridConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.crop_padding, DEFAULT_CROP_PADDING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.repeat_count, 1);
        assert!(layout.auto_crop);
    }

    #[test]
    fn test_layout_zero_repeat() {
        let layout = LayoutConfig {
            repeat_count: 0,
            ..LayoutConfig::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_layout_repeat_upper_bound() {
        let layout = LayoutConfig {
            repeat_count: 4_000_000_000,
            ..LayoutConfig::default()
        };
        assert!(matches!(layout.validate(), Err(ConfigError::InvalidLayout(_))));
        let layout = LayoutConfig {
            repeat_count: MAX_REPEAT_COUNT,
            ..LayoutConfig::default()
        };
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_partial_json() {
        let layout: LayoutConfig = serde_json::from_str(r#"{"repeat_count": 4}"#).unwrap();
        assert_eq!(layout.repeat_count, 4);
        assert_eq!(layout.letter_spacing, LayoutConfig::default().letter_spacing);
    }
}
