//! Config command implementation
//!
//! Shows the effective configuration or writes a default config file.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{AppConfig, ConfigSource};

/// Print the effective configuration (API key redacted).
pub fn show(config: &AppConfig, source: &ConfigSource) -> Result<ExitCode> {
    match source {
        ConfigSource::Defaults => println!("{} built-in defaults", "Source:".dimmed()),
        ConfigSource::File(path) => println!("{} {}", "Source:".dimmed(), path.display()),
    }
    println!("{}", config.to_json_redacted()?);
    Ok(ExitCode::SUCCESS)
}

/// Print the per-user config file location.
pub fn path() -> Result<ExitCode> {
    match AppConfig::default_path() {
        Some(path) => {
            let state = if path.is_file() { "exists" } else { "not created" };
            println!("{} ({})", path.display(), state.dimmed());
            Ok(ExitCode::SUCCESS)
        }
        None => bail!("no configuration directory on this platform"),
    }
}

/// Write a default config file to `output` or the per-user location.
pub fn init(output: Option<&str>, force: bool) -> Result<ExitCode> {
    let path: PathBuf = match output {
        Some(path) => PathBuf::from(path),
        None => AppConfig::default_path()
            .context("no configuration directory on this platform; pass --output")?,
    };
    write_default(&path, force)?;
    println!("{} Wrote {}", "SUCCESS".green().bold(), path.display());
    Ok(ExitCode::SUCCESS)
}

fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = AppConfig::default().to_json_redacted()?;
    fs::write(path, json).with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}
