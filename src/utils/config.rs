//! Application configuration module.
//!
//! This module provides configuration management for spine detection.
//! Configuration is loaded from a JSON file; every field has a default, so a
//! file only needs to name the values it overrides.

use super::error::ConfigError;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::recognition::synthesis::SynthesisParams;
use crate::spine::params::GroupingParams;
use crate::utils::visualization::RenderOptions;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/spinescan.json";

/// Global configuration instance
static CONFIG_INSTANCE: OnceCell<AppConfig> = OnceCell::new();

/// Application configuration structure.
///
/// String fields use `Box<str>` since they are set once and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Thresholds for word, region and spine grouping
    pub grouping: GroupingParams,

    /// Word geometry used when the engine reports text without boxes
    pub synthesis: SynthesisParams,

    /// Overlay rendering options
    pub render: RenderOptions,

    /// Default language hint passed to the recognition engine
    pub language: Box<str>,

    /// Path or name of the tesseract executable
    pub tesseract_binary: Box<str>,

    /// TrueType/OpenType font used for overlay labels
    pub label_font_path: Option<Box<str>>,

    /// Whether the pipeline renders an overlay image
    pub render_visualization: bool,
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration JSON file
    ///
    /// # Returns
    ///
    /// Returns the parsed `AppConfig` or a `ConfigError` if loading fails.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default path.
    ///
    /// This loads configuration from `config/spinescan.json`.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    /// Initialize the global configuration instance.
    ///
    /// This should be called once at application startup. If not called,
    /// `get()` will initialize with default values.
    pub fn init() -> Result<&'static Self, ConfigError> {
        CONFIG_INSTANCE.get_or_try_init(Self::load_default)
    }

    /// Get the global configuration instance.
    ///
    /// If the configuration hasn't been initialized, returns default values.
    #[must_use]
    pub fn get() -> &'static Self {
        CONFIG_INSTANCE.get_or_init(Self::default)
    }

    /// Create a new configuration with default values.
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            grouping: GroupingParams::default(),
            synthesis: SynthesisParams::default(),
            render: RenderOptions::default(),
            language: "eng".into(),
            tesseract_binary: "tesseract".into(),
            label_font_path: None,
            render_visualization: true,
        }
    }

    /// Read the configured label font, if any.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a font path is configured but unreadable.
    pub fn load_label_font(&self) -> Result<Option<Vec<u8>>, ConfigError> {
        match self.label_font_path.as_deref() {
            Some(path) => Ok(Some(fs::read(path)?)),
            None => Ok(None),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl From<&AppConfig> for GroupingParams {
    fn from(config: &AppConfig) -> Self {
        config.grouping
    }
}
