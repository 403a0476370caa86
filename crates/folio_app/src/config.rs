//! Folio configuration file handling

use crate::content::{CONTACT, HERO_CADENCE_MS, HERO_TEXT};
use anyhow::{Context, Result};
use folio_core::ConfigError;
use folio_layout::{Threshold, REVEAL_THRESHOLD};
use folio_theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level configuration (folio.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_hero_text")]
    pub hero_text: String,
    #[serde(default = "default_hero_cadence")]
    pub hero_cadence_ms: u32,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
    #[serde(default = "default_email")]
    pub email: String,
}

fn default_hero_text() -> String {
    HERO_TEXT.to_string()
}

fn default_hero_cadence() -> u32 {
    HERO_CADENCE_MS
}

fn default_reveal_threshold() -> f32 {
    REVEAL_THRESHOLD
}

fn default_email() -> String {
    CONTACT.email.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_text: default_hero_text(),
            hero_cadence_ms: default_hero_cadence(),
            reveal_threshold: default_reveal_threshold(),
            email: default_email(),
        }
    }
}

/// Initial theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub initial: ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// CV file served at `/api/view-cv`
    #[serde(default = "default_document_path")]
    pub path: PathBuf,
}

fn default_document_path() -> PathBuf {
    PathBuf::from("assets/Resume-Levi-Mickelson.pdf")
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: default_document_path(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    800.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from a file, or from `folio.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load `folio.toml` from `dir` if present, defaults otherwise
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        if dir.join(CONFIG_FILE).exists() {
            Self::load(dir)
        } else {
            tracing::debug!(dir = %dir.display(), "no folio.toml, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would be configuration errors at mount time
    pub fn validate(&self) -> Result<(), ConfigError> {
        Threshold::new(self.site.reveal_threshold)?;
        if self.site.hero_cadence_ms == 0 {
            return Err(ConfigError::InvalidCadence(0));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
