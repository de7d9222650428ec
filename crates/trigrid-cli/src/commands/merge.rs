//! Merge command implementation
//!
//! Imports glyphs from one or more documents into a base font. Each overlay
//! replaces the characters it defines and leaves the rest alone. Nothing is
//! written unless every overlay imports cleanly.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use trigrid_spec::GridConfig;

use super::common::{load_font, save_font};

/// Run the merge command
///
/// # Arguments
/// * `base` - Font document to merge into
/// * `overlays` - Documents imported in order; later ones win
/// * `output` - Output path (default: overwrite `base`)
/// * `grid` - Grid every document must fit
pub fn run(base: &str, overlays: &[String], output: Option<&str>, grid: &GridConfig) -> Result<ExitCode> {
    println!("{} {}", "Merging into:".cyan().bold(), base);
    let mut font = load_font(base, grid)?;

    for overlay in overlays {
        let json = fs::read_to_string(overlay)
            .with_context(|| format!("Failed to read font file: {}", overlay))?;
        let summary = font
            .import_json(&json)
            .with_context(|| format!("Failed to import: {}", overlay))?;

        let imported: String = summary.imported.iter().collect();
        println!(
            "  {} {} ({} glyph(s): {})",
            "+".green(),
            overlay,
            summary.imported.len(),
            imported.escape_debug()
        );
        for warning in &summary.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }

    let output_path = output.unwrap_or(base);
    save_font(&font, output_path)?;
    println!(
        "{} Wrote {} ({} drawn glyph(s))",
        "SUCCESS".green().bold(),
        output_path,
        font.drawn_count()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use trigrid_spec::{Font, GridCoord};

    fn grid() -> GridConfig {
        GridConfig::new(10, 10, 20.0, 17.0)
    }

    #[test]
    fn test_merge_replaces_only_overlay_glyphs() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.json");
        let overlay = dir.path().join("overlay.json");
        fs::write(&base, r#"{"version": 1, "glyphs": {"A": ["0-0"], "B": ["1-1"]}}"#).unwrap();
        fs::write(&overlay, r#"{"version": 1, "glyphs": {"B": ["2-2", "2-3"]}}"#).unwrap();

        let code = run(
            base.to_str().unwrap(),
            &[overlay.to_str().unwrap().to_string()],
            None,
            &grid(),
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let font = Font::load(&base, grid()).unwrap();
        assert_eq!(font.cells('A').unwrap().to_keys(), vec!["0-0"]);
        assert_eq!(font.cells('B').unwrap().to_keys(), vec!["2-2", "2-3"]);
    }

    #[test]
    fn test_bad_overlay_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.json");
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        let original = r#"{"version": 1, "glyphs": {"A": ["0-0"]}}"#;
        fs::write(&base, original).unwrap();
        fs::write(&good, r#"{"glyphs": {"A": ["5-5"]}}"#).unwrap();
        fs::write(&bad, r#"{"glyphs": {"C": ["99-0"]}}"#).unwrap();

        let overlays = [
            good.to_str().unwrap().to_string(),
            bad.to_str().unwrap().to_string(),
        ];
        assert!(run(base.to_str().unwrap(), &overlays, None, &grid()).is_err());
        assert_eq!(fs::read_to_string(&base).unwrap(), original);

        let font = Font::load(Path::new(&base), grid()).unwrap();
        assert!(font.cells('A').unwrap().contains(GridCoord::new(0, 0)));
    }
}
