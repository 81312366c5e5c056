//! Extractor configuration
//!
//! This module defines the TOML schema for extractor patterns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = include_str!("../../configs/extractor.toml");

/// Root extractor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub mentions: PatternSection,
    pub hashtags: PatternSection,
    pub urls: UrlSection,
}

/// A single regex pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSection {
    pub pattern: String,
}

/// URL pattern plus trailing punctuation handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSection {
    pub pattern: String,
    #[serde(default)]
    pub trim_trailing: String,
}

impl ExtractorConfig {
    /// The configuration bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: ExtractorConfig = toml::from_str(toml_str)
            .map_err(|e| Error::Configuration(format!("Failed to parse extractor config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading extractor config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let sections = [
            ("mentions", &self.mentions.pattern),
            ("hashtags", &self.hashtags.pattern),
            ("urls", &self.urls.pattern),
        ];
        for (name, pattern) in sections {
            if pattern.trim().is_empty() {
                return Err(Error::Configuration(format!("{name}.pattern is empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_parses() {
        let config = ExtractorConfig::builtin().unwrap();
        assert!(config.mentions.pattern.contains("screen_name"));
        assert!(config.urls.trim_trailing.contains('.'));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let toml_str = r##"
            [mentions]
            pattern = ""
            [hashtags]
            pattern = "#(?P<hash>#)(?P<hashtag>\\w+)"
            [urls]
            pattern = "(?P<url>https?://\\S+)"
        "##;
        let err = ExtractorConfig::from_toml_str(toml_str).unwrap_err();
        assert!(err.to_string().contains("mentions.pattern is empty"));
    }

    #[test]
    fn test_missing_section_rejected() {
        let err = ExtractorConfig::from_toml_str("[mentions]\npattern = \"@\"").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_trim_trailing_defaults_to_empty() {
        let toml_str = r#"
            [mentions]
            pattern = "(?P<at>@)(?P<screen_name>\\w+)"
            [hashtags]
            pattern = "(?P<hash>#)(?P<hashtag>\\w+)"
            [urls]
            pattern = "(?P<url>https?://\\S+)"
        "#;
        let config = ExtractorConfig::from_toml_str(toml_str).unwrap();
        assert!(config.urls.trim_trailing.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_CONFIG.as_bytes()).unwrap();
        let config = ExtractorConfig::from_file(file.path()).unwrap();
        assert_eq!(config, ExtractorConfig::builtin().unwrap());
    }

    #[test]
    fn test_from_missing_file() {
        let err = ExtractorConfig::from_file("/nonexistent/extractor.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
