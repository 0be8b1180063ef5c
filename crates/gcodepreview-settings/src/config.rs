//! Configuration for a preview run
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Pipeline settings (which categories are handed to the renderer, purge trimming)
//! - Classifier settings (ordered role table, travel-like styles)
//! - Framing settings (camera distance scale and orientation)
//! - Render style (colors, bed, image size)

use crate::error::{SettingsError, SettingsResult};
use crate::render::RenderStyle;
use gcodepreview_core::{RoleRule, StyleTag};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Which series reach the renderer and how the object series is trimmed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Hand the support series to the renderer
    pub include_support: bool,
    /// Hand the travel series to the renderer
    pub include_travel: bool,
    /// Leading object points dropped as purge/priming lines
    pub purge_trim_count: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            include_support: true,
            include_travel: false,
            purge_trim_count: 5,
        }
    }
}

/// Role table and travel override for the segment classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Treat `restore` motions inside object regions as travel
    pub restore_is_travel: bool,
    /// Ordered role rules; the first match wins
    pub rules: Vec<RoleRule>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            restore_is_travel: true,
            rules: RoleRule::standard_table(),
        }
    }
}

impl ClassifierSettings {
    /// Styles that force an object-role segment into the travel category
    pub fn override_styles(&self) -> Vec<StyleTag> {
        let mut styles = vec![StyleTag::Fly, StyleTag::Retract];
        if self.restore_is_travel {
            styles.push(StyleTag::Restore);
        }
        styles
    }
}

/// Camera framing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingSettings {
    /// Distance multiplier applied to the object bounding-box diagonal
    pub scale_k: f64,
    /// Camera azimuth in degrees
    pub azimuth_deg: f64,
    /// Camera elevation in degrees
    pub elevation_deg: f64,
}

impl Default for FramingSettings {
    fn default() -> Self {
        Self {
            scale_k: 2.0,
            azimuth_deg: 225.0,
            elevation_deg: 45.0,
        }
    }
}

/// Complete preview configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    pub pipeline: PipelineSettings,
    pub classifier: ClassifierSettings,
    pub framing: FramingSettings,
    pub render: RenderStyle,
}

impl PreviewConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::io(path, source))?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded preview config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|source| SettingsError::io(path, source))?;

        debug!("Saved preview config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.framing.scale_k.is_finite() || self.framing.scale_k <= 0.0 {
            return Err(SettingsError::invalid(
                "framing.scale_k",
                format!("must be a positive number, got {}", self.framing.scale_k),
            ));
        }

        if !self.framing.azimuth_deg.is_finite() || !self.framing.elevation_deg.is_finite() {
            return Err(SettingsError::invalid("framing", "azimuth and elevation must be finite"));
        }

        for (idx, rule) in self.classifier.rules.iter().enumerate() {
            if rule.patterns.is_empty() {
                return Err(SettingsError::invalid(
                    format!("classifier.rules[{}]", idx),
                    "rule has no patterns",
                ));
            }
            // An empty pattern is a substring of every role.
            if rule.patterns.iter().any(|p| p.is_empty()) {
                return Err(SettingsError::invalid(
                    format!("classifier.rules[{}]", idx),
                    "patterns must not be empty strings",
                ));
            }
        }

        if self.render.image_width == 0 || self.render.image_height == 0 {
            return Err(SettingsError::invalid(
                "render.image_size",
                "image dimensions must be > 0",
            ));
        }

        let bed = &self.render.bed;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(bed.width) || !positive(bed.depth) {
            return Err(SettingsError::invalid(
                "render.bed",
                format!(
                    "bed dimensions must be finite and > 0, got {} x {}",
                    bed.width, bed.depth
                ),
            ));
        }
        if !bed.height.is_finite() {
            return Err(SettingsError::invalid("render.bed.height", "must be finite"));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcodepreview_core::Category;

    #[test]
    fn test_defaults_validate() {
        let config = PreviewConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pipeline.purge_trim_count, 5);
        assert!(config.pipeline.include_support);
        assert!(!config.pipeline.include_travel);
        assert_eq!(config.framing.azimuth_deg, 225.0);
        assert_eq!(config.framing.elevation_deg, 45.0);
        assert_eq!(config.classifier.rules.len(), 3);
    }

    #[test]
    fn test_override_styles_follow_restore_flag() {
        let mut settings = ClassifierSettings::default();
        assert!(settings.override_styles().contains(&StyleTag::Restore));

        settings.restore_is_travel = false;
        let styles = settings.override_styles();
        assert_eq!(styles, vec![StyleTag::Fly, StyleTag::Retract]);
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let mut config = PreviewConfig::default();
        config.framing.scale_k = 0.0;
        assert!(config.validate().is_err());

        config.framing.scale_k = f64::NAN;
        assert!(config.validate().is_err());

        config.framing.scale_k = 1.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_patterns() {
        let mut config = PreviewConfig::default();
        config
            .classifier
            .rules
            .push(RoleRule::new(Vec::<String>::new(), Category::Support));
        assert!(config.validate().is_err());

        let mut config = PreviewConfig::default();
        config.classifier.rules[0].patterns.push(String::new());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("classifier.rules[0]"));
    }

    #[test]
    fn test_rejects_non_finite_bed() {
        let mut config = PreviewConfig::default();
        config.render.bed.width = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = PreviewConfig::default();
        config.render.bed.depth = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = PreviewConfig::default();
        config.render.bed.height = f64::NEG_INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("render.bed.height"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PreviewConfig =
            serde_json::from_str(r#"{"framing": {"scale_k": 1.5}}"#).unwrap();
        assert_eq!(config.framing.scale_k, 1.5);
        assert_eq!(config.framing.azimuth_deg, 225.0);
        assert_eq!(config.pipeline, PipelineSettings::default());
    }
}
