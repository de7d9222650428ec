//! Validate command implementation
//!
//! Checks a font document against the configured grid without importing it.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use trigrid_spec::{validate_document, GridConfig, ValidationResult};

use super::json_output::{error_codes, JsonError, ValidateOutput};

/// Run the validate command
///
/// # Arguments
/// * `font_path` - Path to the font document
/// * `grid` - Grid the document's cell keys must fit
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(font_path: &str, grid: &GridConfig, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(font_path, grid)
    } else {
        run_human(font_path, grid)
    }
}

fn run_human(font_path: &str, grid: &GridConfig) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), font_path);

    let content = fs::read_to_string(font_path)
        .with_context(|| format!("Failed to read font file: {}", font_path))?;
    let result = validate_document(&content, grid);

    print_validation_results(&result);

    if result.is_ok() {
        println!("\n{} Font document is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Font document has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(font_path: &str, grid: &GridConfig) -> Result<ExitCode> {
    let output = match fs::read_to_string(font_path) {
        Ok(content) => to_output(font_path, &validate_document(&content, grid)),
        Err(e) => ValidateOutput {
            success: false,
            file: font_path.to_string(),
            errors: vec![JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read font file: {}", e),
            )],
            warnings: Vec::new(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn to_output(font_path: &str, result: &ValidationResult) -> ValidateOutput {
    ValidateOutput {
        success: result.is_ok(),
        file: font_path.to_string(),
        errors: result.errors.iter().map(Into::into).collect(),
        warnings: result.warnings.iter().map(Into::into).collect(),
    }
}

fn print_validation_results(result: &ValidationResult) {
    for error in &result.errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code,
            path.dimmed(),
            error.message
        );
    }
    for warning in &result.warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code,
            path.dimmed(),
            warning.message
        );
    }
}
