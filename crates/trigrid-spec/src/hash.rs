//! Content hashing for fonts.
//!
//! The exported document carries a timestamp, so hashing the file itself
//! changes on every save. These hashes cover only the glyph geometry.

use crate::cells::CellSet;
use crate::font::Font;

/// BLAKE3 hash of one cell set over its canonical keys.
pub fn cells_hash(cells: &CellSet) -> String {
    let mut hasher = blake3::Hasher::new();
    for key in cells.to_keys() {
        hasher.update(key.as_bytes());
        hasher.update(b",");
    }
    hasher.finalize().to_hex().to_string()
}

/// BLAKE3 hash of a font's drawn glyphs.
///
/// Undefined glyphs and defined-but-empty glyphs hash the same, matching the
/// fact that neither is written on export.
pub fn glyphs_hash(font: &Font) -> String {
    let mut hasher = blake3::Hasher::new();
    for (ch, glyph) in font.glyphs() {
        let Some(cells) = glyph.cells().filter(|c| !c.is_empty()) else {
            continue;
        };
        let mut buf = [0u8; 4];
        hasher.update(ch.encode_utf8(&mut buf).as_bytes());
        hasher.update(b":");
        hasher.update(cells_hash(cells).as_bytes());
        hasher.update(b";");
    }
    hasher.finalize().to_hex().to_string()
}
