//! Determinism tests: identical inputs must give byte-identical output.
//!
//! ```bash
//! cargo test -p trigrid-tests --test e2e_determinism
//! ```

use trigrid_render::png::{write_grayscale_to_vec_with_hash, write_rgba_to_vec_with_hash};
use trigrid_render::{
    compute_viewport, glyph_svg, layout_text, rasterize, rasterize_layout, Color, PngConfig,
    SvgOptions, TextureBuffer,
};
use trigrid_spec::{glyphs_hash, CellSet, Font, LayoutConfig};
use trigrid_tests::determinism::verify_determinism;
use trigrid_tests::fixtures::{fixed_time, small_grid, SAMPLE_DOCUMENT};

#[test]
fn test_glyph_png_determinism() {
    let grid = small_grid();
    let cells = CellSet::from_keys(10, 10, ["2-2", "3-2", "4-2", "4-3"]).unwrap();
    let result = verify_determinism(
        || {
            let viewport = compute_viewport(&cells, &grid, true);
            let mask = rasterize(&cells, &grid, &viewport, 4.0).unwrap();
            write_grayscale_to_vec_with_hash(&mask, &PngConfig::default())
                .unwrap()
                .0
        },
        3,
    );
    assert!(result.is_deterministic, "{}", result);
}

#[test]
fn test_colored_tester_png_determinism() {
    let font = Font::from_json(small_grid(), SAMPLE_DOCUMENT).unwrap();
    let result = verify_determinism(
        || {
            let layout = layout_text(&font, "AL\nLA", &LayoutConfig::default());
            let mask = rasterize_layout(&font, &layout, 2.0).unwrap();
            let texture = TextureBuffer::from_mask(&mask, Color::rgb(0.8, 0.1, 0.1), Color::white());
            write_rgba_to_vec_with_hash(&texture, &PngConfig::best_compression())
                .unwrap()
                .0
        },
        3,
    );
    assert!(result.is_deterministic, "{}", result);
}

#[test]
fn test_svg_and_document_determinism() {
    let font = Font::from_json(small_grid(), SAMPLE_DOCUMENT).unwrap();
    let svg = verify_determinism(
        || {
            let cells = font.cells('L').unwrap();
            let viewport = compute_viewport(cells, font.grid(), true);
            glyph_svg(cells, font.grid(), &viewport, &SvgOptions::default()).into_bytes()
        },
        3,
    );
    assert!(svg.is_deterministic, "{}", svg);

    let doc = verify_determinism(|| font.to_json(fixed_time()).unwrap().into_bytes(), 3);
    assert!(doc.is_deterministic, "{}", doc);
}

#[test]
fn test_glyph_hash_ignores_timestamp() {
    let font = Font::from_json(small_grid(), SAMPLE_DOCUMENT).unwrap();
    let restamped = SAMPLE_DOCUMENT.replace("2024-01-02T03:04:05.000Z", "2030-06-07T08:09:10.000Z");
    let other = Font::from_json(small_grid(), &restamped).unwrap();
    assert_eq!(glyphs_hash(&font), glyphs_hash(&other));
}
