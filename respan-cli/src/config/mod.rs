//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Extractor configuration
    #[serde(default)]
    pub extractor: ExtractorSection,

    /// Default replacement templates
    #[serde(default)]
    pub templates: TemplateConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty print JSON output
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty_json: default_pretty_json(),
        }
    }
}

/// Where extractor patterns come from
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ExtractorSection {
    /// Extractor TOML file; the bundled patterns are used when unset
    pub config: Option<PathBuf>,
}

/// Replacement template per entity category
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    pub mention: Option<String>,
    /// Falls back to `mention` when unset
    pub list: Option<String>,
    pub hashtag: Option<String>,
    pub url: Option<String>,
    pub emoji: Option<String>,
}

impl TemplateConfig {
    /// Fill every unset template from `defaults`
    pub fn or(self, defaults: TemplateConfig) -> TemplateConfig {
        TemplateConfig {
            mention: self.mention.or(defaults.mention),
            list: self.list.or(defaults.list),
            hashtag: self.hashtag.or(defaults.hashtag),
            url: self.url.or(defaults.url),
            emoji: self.emoji.or(defaults.emoji),
        }
    }

    /// Whether no category has a template
    pub fn is_empty(&self) -> bool {
        self.mention.is_none()
            && self.list.is_none()
            && self.hashtag.is_none()
            && self.url.is_none()
            && self.emoji.is_none()
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("loaded CLI config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
