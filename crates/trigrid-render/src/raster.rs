//! Sparse triangle rasterizer.
//!
//! Only active cells are visited. A pixel is covered when its center lies
//! inside (or on an edge of) an active triangle, so two triangles sharing an
//! edge leave no gap between them.

use trigrid_spec::{CellSet, GridConfig};

use crate::buffer::GrayscaleBuffer;
use crate::error::RenderError;
use crate::geometry::{cell_triangle, Point, Triangle};
use crate::viewport::Viewport;

/// Largest width or height a raster may have.
pub const MAX_RASTER_DIMENSION: u32 = 16_384;

/// Maps canvas space to pixel space: `pixel = canvas * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Transform {
    /// Transform that places `viewport`'s top-left corner at pixel (0, 0).
    pub fn for_viewport(viewport: &Viewport, scale: f64) -> Self {
        Self {
            scale,
            offset_x: -viewport.min_x * scale,
            offset_y: -viewport.min_y * scale,
        }
    }

    /// Same transform moved by a pixel offset.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            scale: self.scale,
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y + dy,
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }
}

/// Pixel size of `viewport` at `scale`.
pub fn raster_size(viewport: &Viewport, scale: f64) -> Result<(u32, u32), RenderError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RenderError::InvalidScale(scale));
    }
    let w = (viewport.width * scale).ceil();
    let h = (viewport.height * scale).ceil();
    let limit = MAX_RASTER_DIMENSION as f64;
    if !(w >= 1.0 && h >= 1.0 && w <= limit && h <= limit) {
        return Err(RenderError::InvalidSize {
            width: w.clamp(0.0, u32::MAX as f64) as u32,
            height: h.clamp(0.0, u32::MAX as f64) as u32,
        });
    }
    Ok((w as u32, h as u32))
}

/// Renders `cells` inside `viewport` at `scale` pixels per canvas unit.
pub fn rasterize(
    cells: &CellSet,
    grid: &GridConfig,
    viewport: &Viewport,
    scale: f64,
) -> Result<GrayscaleBuffer, RenderError> {
    let (width, height) = raster_size(viewport, scale)?;
    let mut buffer = GrayscaleBuffer::new(width, height, 0.0);
    rasterize_into(&mut buffer, cells, grid, Transform::for_viewport(viewport, scale));
    log::debug!(
        "rasterized {} cell(s) into {}x{} ({} px covered)",
        cells.len(),
        width,
        height,
        buffer.covered()
    );
    Ok(buffer)
}

/// Draws `cells` into an existing buffer; pixels outside the buffer are
/// clipped.
pub fn rasterize_into(
    buffer: &mut GrayscaleBuffer,
    cells: &CellSet,
    grid: &GridConfig,
    transform: Transform,
) {
    if buffer.width == 0 || buffer.height == 0 {
        return;
    }
    let max_x = buffer.width as f64 - 1.0;
    let max_y = buffer.height as f64 - 1.0;

    for coord in cells.iter() {
        let tri = cell_triangle(coord, grid);
        let [a, b, c] = tri.vertices.map(|v| transform.apply(v));
        let pixel_tri = Triangle { vertices: [a, b, c] };
        let (lo, hi) = pixel_tri.bounds();

        let x0 = (lo.x - 0.5).ceil().clamp(0.0, max_x);
        let x1 = (hi.x - 0.5).floor().min(max_x);
        let y0 = (lo.y - 0.5).ceil().clamp(0.0, max_y);
        let y1 = (hi.y - 0.5).floor().min(max_y);
        if x1 < x0 || y1 < y0 {
            continue;
        }

        for py in y0 as u32..=y1 as u32 {
            for px in x0 as u32..=x1 as u32 {
                let center = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                if pixel_tri.contains(center) {
                    buffer.set(px, py, 1.0);
                }
            }
        }
    }
}
