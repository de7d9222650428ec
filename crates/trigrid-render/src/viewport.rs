//! Viewport calculation: the fixed full canvas or a padded crop around the
//! active cells.
//!
//! A cropped viewport is derived from the cells on every call and never
//! cached. Empty sets always fall back to the fixed viewport, so a
//! zero-area viewport is never produced.

use trigrid_spec::{CellSet, GridConfig};

use crate::geometry::Point;

/// A rectangle in canvas space, usable as an SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    /// True if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x() && p.y >= self.min_y && p.y <= self.max_y()
    }

    /// Formats as an SVG `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            fmt_num(self.min_x),
            fmt_num(self.min_y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// The full canvas viewport.
pub fn fixed_viewport(grid: &GridConfig) -> Viewport {
    Viewport::new(0.0, 0.0, grid.canvas_width, grid.canvas_height)
}

/// Viewport for displaying `cells`.
///
/// Without auto-crop, or for an empty set, this is the fixed viewport.
/// Otherwise it is the pixel extent of the active cells' grid bounding box,
/// grown by `grid.crop_padding` of each dimension on every side.
pub fn compute_viewport(cells: &CellSet, grid: &GridConfig, auto_crop: bool) -> Viewport {
    if !auto_crop {
        return fixed_viewport(grid);
    }
    let Some(bounds) = cells.bounds() else {
        return fixed_viewport(grid);
    };

    let half = grid.triangle_size / 2.0;
    let min_x = bounds.min_col as f64 * half;
    let max_x = bounds.max_col as f64 * half + grid.triangle_size;
    let min_y = bounds.min_row as f64 * grid.triangle_height;
    let max_y = (bounds.max_row + 1) as f64 * grid.triangle_height;

    let width = max_x - min_x;
    let height = max_y - min_y;
    let pad = grid.crop_padding;
    Viewport::new(
        min_x - width * pad,
        min_y - height * pad,
        width * (1.0 + 2.0 * pad),
        height * (1.0 + 2.0 * pad),
    )
}
