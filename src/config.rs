use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::BodyLayout;
use crate::OutputFormat;

/// Configuration for paratext
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the body lives inside the container and which elements to read
    pub layout: BodyLayout,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Cut printed text after this many characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
}

impl Config {
    /// Load config from the config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paratext").join("config.toml"))
    }

    /// Write the default config file and return where it went
    pub fn init_default() -> Result<PathBuf> {
        let path = Self::get_config_path().context("no config directory on this platform")?;
        Config::default().save_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BODY_PART, WORDPROCESSING_NS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout_is_wordprocessingml() {
        let config = Config::default();
        assert_eq!(config.layout.body_part, BODY_PART);
        assert_eq!(config.layout.namespace, WORDPROCESSING_NS);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.max_chars, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [output]
            format = "json"
            max_chars = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.max_chars, Some(500));
        assert_eq!(config.layout, BodyLayout::default());
    }

    #[test]
    fn test_layout_override() {
        let config: Config = toml::from_str(
            r#"
            [layout]
            namespace = "http://purl.oclc.org/ooxml/wordprocessingml/main"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.layout.namespace,
            "http://purl.oclc.org/ooxml/wordprocessingml/main"
        );
        assert_eq!(config.layout.paragraph_tag, "p");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.max_chars = Some(80);
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output\nformat = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
