use std::fs;
use std::path::Path;

use egui::{Color32, Rect, Vec2};
use log::info;
use serde::{Deserialize, Serialize};

use crate::element::color_from_hex;
use crate::error::ConfigError;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parameters of the wiggle animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiggleConfig {
    /// Angular speed applied to the animation clock
    pub frequency: f32,
    /// Largest offset, in canvas units, applied to a coordinate
    pub amplitude: f32,
    /// Clock advance per frame tick
    pub time_step: f32,
}

impl Default for WiggleConfig {
    fn default() -> Self {
        Self {
            frequency: 6.0,
            amplitude: 1.5,
            time_step: 0.05,
        }
    }
}

/// Editor settings. Missing fields fall back to their defaults when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Pixel density of PNG exports
    pub export_pixel_ratio: f32,
    /// Stage color; erasers paint with it
    pub background_color: String,
    /// Opaque fill placed behind the drawing while taking a PNG snapshot
    pub export_background: String,
    pub default_color: String,
    pub default_size: f32,
    pub default_eraser_size: f32,
    pub brush_size_multiplier: f32,
    pub marker_size_multiplier: f32,
    /// Imports that expand past this many characters are refused
    pub max_import_chars: usize,
    /// Gray level below which an imported PNG pixel becomes a set bit
    pub binary_threshold: u8,
    pub wiggle: WiggleConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            export_pixel_ratio: 2.0,
            background_color: "#f5f4f2".to_owned(),
            export_background: "#ffffff".to_owned(),
            default_color: "#111111".to_owned(),
            default_size: 4.0,
            default_eraser_size: 24.0,
            brush_size_multiplier: 1.5,
            marker_size_multiplier: 2.0,
            max_import_chars: 16 * 1024 * 1024,
            binary_threshold: 128,
            wiggle: WiggleConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.export_pixel_ratio > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "export pixel ratio must be positive, got {}",
                self.export_pixel_ratio
            )));
        }
        if !(self.wiggle.time_step > 0.0) {
            return Err(ConfigError::Invalid("wiggle time step must be positive".to_owned()));
        }
        for (name, hex) in [
            ("background_color", &self.background_color),
            ("export_background", &self.export_background),
            ("default_color", &self.default_color),
        ] {
            if color_from_hex(hex).is_none() {
                return Err(ConfigError::Invalid(format!("{name} is not a hex color: {hex}")));
            }
        }
        Ok(())
    }

    /// Region captured by PNG export
    pub fn export_region(&self) -> Rect {
        Rect::from_min_size(egui::Pos2::ZERO, Vec2::new(self.canvas_width, self.canvas_height))
    }

    pub fn background(&self) -> Color32 {
        color_from_hex(&self.background_color).unwrap_or(Color32::WHITE)
    }

    pub fn export_background(&self) -> Color32 {
        color_from_hex(&self.export_background).unwrap_or(Color32::WHITE)
    }

    pub fn default_color(&self) -> Color32 {
        color_from_hex(&self.default_color).unwrap_or(Color32::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = EditorConfig::from_json(r#"{ "canvas_width": 1024, "wiggle": { "amplitude": 3 } }"#).unwrap();

        assert_eq!(config.canvas_width, 1024.0);
        assert_eq!(config.canvas_height, 600.0);
        assert_eq!(config.wiggle.amplitude, 3.0);
        assert_eq!(config.wiggle.frequency, 6.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "export_pixel_ratio": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "background_color": "beige" }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(EditorConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_default_export_region() {
        let region = EditorConfig::default().export_region();
        assert_eq!(region.size(), Vec2::new(800.0, 600.0));
    }
}
