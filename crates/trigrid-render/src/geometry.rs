//! Cell geometry: grid coordinate to triangle vertices.
//!
//! Columns advance by half a triangle base because neighbouring triangles
//! interlock; rows advance by one triangle height. Orientation alternates in
//! a checkerboard by `row + col` parity.

use trigrid_spec::{GridConfig, GridCoord, Orientation};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Three vertices of a cell's triangle, in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Signed area (positive for clockwise winding in y-down space).
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)) / 2.0
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Centroid (mean of the vertices).
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        let [a, b, c] = self.vertices;
        (
            Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }

    /// True if `p` lies inside or on the edge of the triangle.
    pub fn contains(&self, p: Point) -> bool {
        let [a, b, c] = self.vertices;
        let edge = |u: Point, v: Point| (v.x - u.x) * (p.y - u.y) - (v.y - u.y) * (p.x - u.x);
        let (e0, e1, e2) = (edge(a, b), edge(b, c), edge(c, a));
        (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
    }
}

/// Canvas-space origin of a cell's bounding box.
#[inline]
pub fn cell_origin(coord: GridCoord, grid: &GridConfig) -> Point {
    Point::new(
        coord.col as f64 * grid.triangle_size / 2.0,
        coord.row as f64 * grid.triangle_height,
    )
}

/// Resolves the triangle occupying `coord`.
///
/// Up cells are ordered bottom-left, apex, bottom-right; down cells are
/// ordered top-left, top-right, apex. Coordinates are not range-checked.
pub fn cell_triangle(coord: GridCoord, grid: &GridConfig) -> Triangle {
    let Point { x, y } = cell_origin(coord, grid);
    let s = grid.triangle_size;
    let h = grid.triangle_height;
    let vertices = match coord.orientation() {
        Orientation::Up => [
            Point::new(x, y + h),
            Point::new(x + s / 2.0, y),
            Point::new(x + s, y + h),
        ],
        Orientation::Down => [
            Point::new(x, y),
            Point::new(x + s, y),
            Point::new(x + s / 2.0, y + h),
        ],
    };
    Triangle { vertices }
}
