//! Material presets and prompt construction.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// A named visual material applied to the glyph silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialPreset {
    Chrome,
    Gold,
    Wood,
    Marble,
    Neon,
    Glass,
    Stone,
    Ice,
}

impl MaterialPreset {
    /// Every preset, in display order.
    pub const ALL: [MaterialPreset; 8] = [
        MaterialPreset::Chrome,
        MaterialPreset::Gold,
        MaterialPreset::Wood,
        MaterialPreset::Marble,
        MaterialPreset::Neon,
        MaterialPreset::Glass,
        MaterialPreset::Stone,
        MaterialPreset::Ice,
    ];

    /// Preset identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialPreset::Chrome => "chrome",
            MaterialPreset::Gold => "gold",
            MaterialPreset::Wood => "wood",
            MaterialPreset::Marble => "marble",
            MaterialPreset::Neon => "neon",
            MaterialPreset::Glass => "glass",
            MaterialPreset::Stone => "stone",
            MaterialPreset::Ice => "ice",
        }
    }

    /// Surface description used in the prompt.
    pub fn description(&self) -> &'static str {
        match self {
            MaterialPreset::Chrome => "polished mirror chrome with sharp reflections",
            MaterialPreset::Gold => "brushed gold leaf with warm highlights",
            MaterialPreset::Wood => "carved oak wood with visible grain",
            MaterialPreset::Marble => "white veined marble with a soft sheen",
            MaterialPreset::Neon => "glowing neon tubes on a dark wall",
            MaterialPreset::Glass => "clear refractive glass with caustics",
            MaterialPreset::Stone => "rough weathered granite",
            MaterialPreset::Ice => "translucent frosted ice with trapped bubbles",
        }
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialPreset {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| StyleError::UnknownMaterial(s.to_string()))
    }
}

/// Builds the text prompt for a styling request.
///
/// The mask's white shape must be kept exactly; the material only changes
/// its surface. A free-form `extra` prompt is appended, or used alone when no
/// material is given.
pub fn build_prompt(material: Option<MaterialPreset>, extra: Option<&str>) -> Result<String, StyleError> {
    let extra = extra.map(str::trim).filter(|s| !s.is_empty());
    let base = material.map(|m| {
        format!(
            "Render the white letter shapes in this mask as {}. Keep the exact silhouette of every letter; do not add or remove strokes.",
            m.description()
        )
    });
    match (base, extra) {
        (Some(base), Some(extra)) => Ok(format!("{} {}", base, extra)),
        (Some(base), None) => Ok(base),
        (None, Some(extra)) => Ok(extra.to_string()),
        (None, None) => Err(StyleError::EmptyPrompt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        assert_eq!("Chrome".parse::<MaterialPreset>().unwrap(), MaterialPreset::Chrome);
        assert_eq!(" ice ".parse::<MaterialPreset>().unwrap(), MaterialPreset::Ice);
        assert!(matches!(
            "plastic".parse::<MaterialPreset>(),
            Err(StyleError::UnknownMaterial(_))
        ));
        for m in MaterialPreset::ALL {
            assert_eq!(m.to_string().parse::<MaterialPreset>().unwrap(), m);
        }
    }

    #[test]
    fn test_build_prompt() {
        let p = build_prompt(Some(MaterialPreset::Wood), None).unwrap();
        assert!(p.contains("oak wood"));
        let p = build_prompt(Some(MaterialPreset::Wood), Some("at sunset")).unwrap();
        assert!(p.ends_with("at sunset"));
        assert_eq!(build_prompt(None, Some(" pixel art ")).unwrap(), "pixel art");
        assert!(matches!(build_prompt(None, Some("  ")), Err(StyleError::EmptyPrompt)));
    }
}
