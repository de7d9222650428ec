//! Stylize command implementation
//!
//! Renders a text sample as a white-on-black mask and sends it with a
//! material prompt to the styling service. The credential is checked before
//! anything is rendered or sent.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use trigrid_render::png::write_grayscale_to_vec_with_hash;
use trigrid_render::{layout_text, rasterize_layout, PngConfig};
use trigrid_spec::{Font, GridConfig, LayoutConfig};
use trigrid_style::{
    build_prompt, HttpStyleClient, MaterialPreset, StyleClient, StyleConfig, StyleRequest,
};

use super::common::{load_font, unescape_text};

/// Arguments of the stylize command.
#[derive(Debug, Clone, PartialEq)]
pub struct StylizeArgs {
    pub font: String,
    pub text: String,
    pub output: String,
    /// Material preset name.
    pub material: Option<String>,
    /// Free-form prompt, appended to the material description.
    pub prompt: Option<String>,
    /// Mask pixels per canvas unit.
    pub scale: f64,
    /// Also write the mask sent to the service.
    pub mask_out: Option<String>,
}

/// Run the stylize command
pub fn run(
    args: &StylizeArgs,
    grid: &GridConfig,
    layout: &LayoutConfig,
    style: &StyleConfig,
) -> Result<ExitCode> {
    let prompt = resolve_prompt(args)?;
    let client = HttpStyleClient::new(style.clone())?;
    let font = load_font(&args.font, grid)?;
    stylize_with(&client, &font, &prompt, args, layout)
}

fn resolve_prompt(args: &StylizeArgs) -> Result<String> {
    let material = args
        .material
        .as_deref()
        .map(str::parse::<MaterialPreset>)
        .transpose()?;
    Ok(build_prompt(material, args.prompt.as_deref())?)
}

/// Builds the mask, calls `client` once, and writes the returned image.
pub fn stylize_with(
    client: &dyn StyleClient,
    font: &Font,
    prompt: &str,
    args: &StylizeArgs,
    layout: &LayoutConfig,
) -> Result<ExitCode> {
    let text = unescape_text(&args.text);
    let composed = layout_text(font, &text, layout);
    if composed.drawn().next().is_none() {
        anyhow::bail!("nothing to stylize: no glyph in {:?} has any active cells", args.text);
    }

    let mask = rasterize_layout(font, &composed, args.scale)?;
    let (mask_png, mask_hash) = write_grayscale_to_vec_with_hash(&mask, &PngConfig::default())?;
    if let Some(path) = &args.mask_out {
        fs::write(path, &mask_png).with_context(|| format!("Failed to write mask: {}", path))?;
    }

    println!(
        "{} {}x{} mask ({}) with prompt: {}",
        "Stylizing:".cyan().bold(),
        mask.width,
        mask.height,
        &mask_hash[..16],
        prompt.dimmed()
    );

    let request = StyleRequest {
        prompt: prompt.to_string(),
        mask_png,
    };
    let image = client.stylize(&request).context("Styling request failed")?;
    fs::write(&args.output, &image.data)
        .with_context(|| format!("Failed to write: {}", args.output))?;

    println!(
        "{} Wrote {} ({} bytes)",
        "SUCCESS".green().bold(),
        args.output,
        image.data.len()
    );
    Ok(ExitCode::SUCCESS)
}
