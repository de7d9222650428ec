//! New command implementation
//!
//! Writes an empty font document for the configured grid.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use trigrid_spec::{Font, GridConfig};

use super::common::save_font;

/// Run the new command
///
/// # Arguments
/// * `output` - Path of the font document to create
/// * `force` - Overwrite an existing file
/// * `grid` - Grid the font is drawn on
pub fn run(output: &str, force: bool, grid: &GridConfig) -> Result<ExitCode> {
    if Path::new(output).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output);
    }

    let font = Font::new(*grid);
    save_font(&font, output)?;

    println!(
        "{} Created {} ({}x{} grid, {} characters)",
        "SUCCESS".green().bold(),
        output,
        grid.rows,
        grid.cols,
        font.glyphs().count()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.json");
        let path = path.to_str().unwrap();
        let grid = GridConfig::default();

        assert_eq!(run(path, false, &grid).unwrap(), ExitCode::SUCCESS);
        assert!(run(path, false, &grid).is_err());
        assert_eq!(run(path, true, &grid).unwrap(), ExitCode::SUCCESS);

        let font = Font::load(Path::new(path), grid).unwrap();
        assert_eq!(font.drawn_count(), 0);
    }
}
