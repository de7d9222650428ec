//! trigrid Triangular Grid Renderer
//!
//! This crate turns active-cell sets into pictures. Rendering is pure and
//! deterministic: the same cells, grid, and options always produce the same
//! SVG text and byte-identical PNG output.
//!
//! # Features
//!
//! - **Cell geometry**: grid coordinate to triangle vertices, alternating
//!   orientation in a checkerboard
//! - **Viewports**: fixed full canvas or padded auto-crop around active cells
//! - **Rasterization**: sparse coverage masks, only active cells are visited
//! - **Output**: SVG documents and deterministic PNG with BLAKE3 hashes
//! - **Type tester**: composing glyphs into lines and repeated patterns
//!
//! # Example
//!
//! ```
//! use trigrid_render::{compute_viewport, glyph_svg, SvgOptions};
//! use trigrid_spec::{CellSet, GridConfig};
//!
//! let grid = GridConfig::new(10, 10, 20.0, 17.0);
//! let cells = CellSet::from_keys(10, 10, ["0-0", "0-1"]).unwrap();
//! let viewport = compute_viewport(&cells, &grid, true);
//! let svg = glyph_svg(&cells, &grid, &viewport, &SvgOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod buffer;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod png;
pub mod raster;
pub mod svg;
pub mod viewport;

// Re-export main types for convenience
pub use buffer::{Color, GrayscaleBuffer, TextureBuffer};
pub use error::RenderError;
pub use geometry::{cell_origin, cell_triangle, Point, Triangle};
pub use layout::{layout_text, rasterize_layout, PlacedGlyph, TextLayout};
pub use png::{PngConfig, PngError};
pub use raster::{rasterize, rasterize_into, Transform};
pub use svg::{glyph_svg, layout_svg, SvgOptions};
pub use viewport::{compute_viewport, fixed_viewport, Viewport};
