//! End-to-end rendering tests: the 10x10 scenario, SVG output, masks and
//! the type tester.
//!
//! ```bash
//! cargo test -p trigrid-tests --test e2e_render
//! ```

use pretty_assertions::assert_eq;
use trigrid_render::{
    cell_triangle, compute_viewport, fixed_viewport, glyph_svg, layout_svg, layout_text,
    rasterize, rasterize_layout, Point, SvgOptions, Viewport,
};
use trigrid_spec::{CellSet, Font, GridCoord, LayoutConfig, Orientation};
use trigrid_tests::fixtures::{small_grid, SAMPLE_DOCUMENT};

// ============================================================================
// Scenario: 10x10 grid, S=20, H=17, cells {0-0, 0-1}
// ============================================================================

#[test]
fn test_scenario_pair_shares_vertices() {
    let grid = small_grid();
    let a = GridCoord::new(0, 0);
    let b = GridCoord::new(0, 1);
    assert_eq!(a.orientation(), Orientation::Up);
    assert_eq!(b.orientation(), Orientation::Down);

    let up = cell_triangle(a, &grid);
    let down = cell_triangle(b, &grid);
    assert_eq!(
        up.vertices,
        [Point::new(0.0, 17.0), Point::new(10.0, 0.0), Point::new(20.0, 17.0)]
    );
    assert_eq!(
        down.vertices,
        [Point::new(10.0, 0.0), Point::new(30.0, 0.0), Point::new(20.0, 17.0)]
    );
    // apex of the up cell and the top-left of the down cell
    assert_eq!(up.vertices[1], down.vertices[0]);
    // bottom-right of the up cell and the apex of the down cell
    assert_eq!(up.vertices[2], down.vertices[2]);
}

#[test]
fn test_scenario_viewports() {
    let grid = small_grid();
    let cells = CellSet::from_keys(10, 10, ["0-0", "0-1"]).unwrap();

    let fixed = compute_viewport(&cells, &grid, false);
    assert_eq!(fixed, Viewport::new(0.0, 0.0, 110.0, 170.0));
    assert_eq!(fixed, fixed_viewport(&grid));

    // extent x 0..30, y 0..17
    let cropped = compute_viewport(&cells, &grid, true);
    assert!((cropped.min_x - -3.0).abs() < 1e-9);
    assert!((cropped.min_y - -1.7).abs() < 1e-9);
    assert!((cropped.width - 36.0).abs() < 1e-9);
    assert!((cropped.height - 20.4).abs() < 1e-9);
}

#[test]
fn test_scenario_svg() {
    let grid = small_grid();
    let cells = CellSet::from_keys(10, 10, ["0-1", "0-0"]).unwrap();
    let svg = glyph_svg(&cells, &grid, &fixed_viewport(&grid), &SvgOptions::default());

    assert!(svg.contains("viewBox=\"0 0 110 170\""));
    let polygons: Vec<&str> = svg.lines().filter(|l| l.contains("<polygon")).collect();
    assert_eq!(polygons.len(), 2);
    assert!(polygons[0].contains("points=\"0,17 10,0 20,17\""));
    assert!(polygons[1].contains("points=\"10,0 30,0 20,17\""));
}

// ============================================================================
// Rasterization
// ============================================================================

#[test]
fn test_full_grid_raster_is_seamless() {
    let grid = small_grid();
    let mut cells = CellSet::for_grid(&grid);
    cells.fill();
    let mask = rasterize(&cells, &grid, &fixed_viewport(&grid), 1.0).unwrap();

    // the left and right edges hold half triangles; everything between is solid
    for y in 0..mask.height {
        for x in 11..99 {
            assert_eq!(mask.get(x, y), 1.0, "gap at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_raster_only_draws_active_cells() {
    let grid = small_grid();
    let cells = CellSet::from_keys(10, 10, ["4-4"]).unwrap();
    let mask = rasterize(&cells, &grid, &fixed_viewport(&grid), 1.0).unwrap();

    let tri = cell_triangle(GridCoord::new(4, 4), &grid);
    let covered = mask.covered() as f64;
    assert!((covered - tri.area()).abs() < tri.area() * 0.2);
    let c = tri.centroid();
    assert_eq!(mask.get(c.x as u32, c.y as u32), 1.0);
    assert_eq!(mask.get(0, 0), 0.0);
}

// ============================================================================
// Type tester
// ============================================================================

#[test]
fn test_tester_layout_and_outputs() {
    let font = Font::from_json(small_grid(), SAMPLE_DOCUMENT).unwrap();
    let config = LayoutConfig {
        repeat_count: 2,
        ..LayoutConfig::default()
    };
    let layout = layout_text(&font, "A L", &config);

    assert_eq!(layout.lines, 2);
    assert_eq!(layout.glyphs.len(), 4);
    assert!(layout.drawn().all(|g| g.ch == 'A' || g.ch == 'L'));

    let svg = layout_svg(&font, &layout, &SvgOptions::default());
    // 2 cells for A and 5 for L, twice
    assert_eq!(svg.matches("data-cell").count(), 14);

    let mask = rasterize_layout(&font, &layout, 2.0).unwrap();
    assert!(mask.covered() > 0);
    assert_eq!(mask.width, (layout.width * 2.0).ceil() as u32);
}
