//! Enhancement configuration.
//!
//! `pagelift.toml` is optional; every field defaults to the constants the
//! enhancement behavior is specified with, so an absent file configures
//! the stock behavior.
//!
//! # Example
//!
//! ```toml
//! [copy]
//! resting_label = "Copy"      # Control label at rest
//! copied_label = "Copied!"    # Label flashed after a successful copy
//! revert_ms = 2000            # Flash duration in milliseconds
//!
//! [layers]
//! heading_levels = ["h2", "h3"]
//!
//! [search]
//! input_attr = "data-md-component"
//! input_value = "search-query"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EnhanceError, Result};

/// Top-level enhancement settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnhanceConfig {
    pub copy: CopyConfig,
    pub anchor: AnchorConfig,
    pub layers: LayerConfig,
    pub search: SearchConfig,
}

/// `[copy]` section: copy-control appearance and timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CopyConfig {
    /// Control label at rest.
    pub resting_label: String,
    /// Label flashed after a successful copy.
    pub copied_label: String,
    /// How long the flashed label stays, in milliseconds.
    pub revert_ms: u64,
    /// Control opacity at rest.
    pub rest_opacity: f32,
    /// Control opacity while hovered.
    pub hover_opacity: f32,
    /// Class marking an injected control (also the idempotence guard).
    pub control_class: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            resting_label: "Copy".to_string(),
            copied_label: "Copied!".to_string(),
            revert_ms: 2000,
            rest_opacity: 0.7,
            hover_opacity: 1.0,
            control_class: "copy-button".to_string(),
        }
    }
}

/// `[anchor]` section: in-page anchor navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnchorConfig {
    /// Smooth scroll easing (`false` falls back to instant).
    pub smooth: bool,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { smooth: true }
    }
}

/// `[layers]` section: heading classification scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayerConfig {
    /// Heading tags eligible for layer tagging.
    pub heading_levels: Vec<String>,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            heading_levels: vec!["h2".to_string(), "h3".to_string()],
        }
    }
}

/// `[search]` section: how the search input is located.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Attribute name flagging the search input.
    pub input_attr: String,
    /// Expected attribute value.
    pub input_value: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_attr: "data-md-component".to_string(),
            input_value: "search-query".to_string(),
        }
    }
}

impl EnhanceConfig {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            crate::debug!("config"; "no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw =
            std::fs::read_to_string(path).map_err(|e| EnhanceError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Validate field values that serde cannot check.
    pub fn validate(&self) -> Result<()> {
        if self.layers.heading_levels.is_empty() {
            return Err(EnhanceError::Validation(
                "layers.heading_levels must name at least one heading level".to_string(),
            ));
        }
        for level in &self.layers.heading_levels {
            let valid = matches!(level.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6");
            if !valid {
                return Err(EnhanceError::Validation(format!(
                    "layers.heading_levels: `{level}` is not a heading level (h1..h6)"
                )));
            }
        }
        if self.copy.control_class.trim().is_empty() {
            return Err(EnhanceError::Validation(
                "copy.control_class must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> EnhanceConfig {
        toml::from_str(toml_str).expect("config should parse")
    }

    #[test]
    fn test_defaults_match_stock_behavior() {
        let config = parse("");
        assert_eq!(config.copy.resting_label, "Copy");
        assert_eq!(config.copy.copied_label, "Copied!");
        assert_eq!(config.copy.revert_ms, 2000);
        assert_eq!(config.copy.rest_opacity, 0.7);
        assert_eq!(config.copy.hover_opacity, 1.0);
        assert_eq!(config.copy.control_class, "copy-button");
        assert!(config.anchor.smooth);
        assert_eq!(config.layers.heading_levels, vec!["h2", "h3"]);
        assert_eq!(config.search.input_attr, "data-md-component");
        assert_eq!(config.search.input_value, "search-query");
    }

    #[test]
    fn test_partial_override() {
        let config = parse("[copy]\nrevert_ms = 500");
        assert_eq!(config.copy.revert_ms, 500);
        // untouched fields keep defaults
        assert_eq!(config.copy.resting_label, "Copy");
        assert_eq!(config.layers.heading_levels, vec!["h2", "h3"]);
    }

    #[test]
    fn test_validate_defaults_pass() {
        assert!(EnhanceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_heading_level() {
        let config = parse("[layers]\nheading_levels = [\"h2\", \"header\"]");
        assert!(matches!(
            config.validate(),
            Err(EnhanceError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_levels() {
        let config = parse("[layers]\nheading_levels = []");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_control_class() {
        let config = parse("[copy]\ncontrol_class = \" \"");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EnhanceConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config, EnhanceConfig::default());
    }
}
