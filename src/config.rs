//! Configuration for the layout engine, query interpreter and renderers.
//!
//! Loaded from YAML; every field has a default so a partial file is fine.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Margin applied to each side of a region unless suppressed
    /// (fraction of the region extent).
    #[serde(default = "default_margin")]
    pub margin: f32,
}

fn default_margin() -> f32 {
    0.1
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
        }
    }
}

/// Query interpreter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Consult the fallback source when the store misses.
    #[serde(default = "default_fallback")]
    pub fallback: bool,

    /// Apply `<axis>.AxisTitle` metadata entries to projected axes.
    #[serde(default = "default_axis_titles")]
    pub axis_titles: bool,
}

fn default_fallback() -> bool {
    true
}
fn default_axis_titles() -> bool {
    true
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            axis_titles: default_axis_titles(),
        }
    }
}

/// Terminal renderer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Output width in characters.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Output height in lines.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    60
}
fn default_height() -> u32 {
    16
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PainterConfig {
    /// Layout engine settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Query interpreter settings.
    #[serde(default)]
    pub query: QueryConfig,

    /// Terminal renderer settings.
    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl PainterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..0.5).contains(&self.layout.margin) {
            return Err(Error::ConfigInvalid {
                key: "layout.margin".to_string(),
                message: format!("{} is outside [0, 0.5)", self.layout.margin),
            });
        }
        if self.terminal.width == 0 {
            return Err(Error::ConfigInvalid {
                key: "terminal.width".to_string(),
                message: "must be non-zero".to_string(),
            });
        }
        if self.terminal.height == 0 {
            return Err(Error::ConfigInvalid {
                key: "terminal.height".to_string(),
                message: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}
