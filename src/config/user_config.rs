//! User configuration for the karaoke album
//!
//! This module handles user-configurable settings stored in settings.json.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Paths;
use crate::core::controller::{EngineOptions, FONT_STEP};
use crate::models::DEFAULT_LANGUAGE;
use crate::render::SEARCH_LIMIT;

/// User configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Song dataset to load instead of the bundled one
    #[serde(default)]
    pub dataset_path: Option<String>,

    /// Maximum number of live search results
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Font scale change per A+/A- press
    #[serde(default = "default_font_step")]
    pub font_step: f64,

    /// Language tag for songs added through the form
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            search_limit: default_search_limit(),
            font_step: default_font_step(),
            default_language: default_language(),
        }
    }
}

impl UserConfig {
    /// Load configuration from the settings file in the config directory
    pub fn load() -> Result<Self> {
        let paths = Paths::get()?;
        Self::load_from(&paths.settings_path())
    }

    /// Load from a specific file, creating it with defaults when missing
    pub fn load_from(settings_path: &Path) -> Result<Self> {
        if settings_path.exists() {
            let content =
                std::fs::read_to_string(settings_path).context("Failed to read settings file")?;
            let config: UserConfig =
                serde_json::from_str(&content).context("Failed to parse settings file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(settings_path)?;
            Ok(config)
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, settings_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(settings_path, content).context("Failed to write settings file")?;
        Ok(())
    }

    /// Dataset path, if one is configured
    pub fn dataset(&self) -> Option<PathBuf> {
        self.dataset_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Engine settings derived from this configuration
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            search_limit: self.search_limit.max(1),
            font_step: self.font_step,
            language: self.default_language.clone(),
        }
    }
}

// Default value functions for serde

fn default_search_limit() -> usize {
    SEARCH_LIMIT
}

fn default_font_step() -> f64 {
    FONT_STEP
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
