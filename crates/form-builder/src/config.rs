// File: form-builder/src/config.rs
// Purpose: Configuration parsing from form-builder.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "form-builder.toml";

/// Form builder configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Field extraction settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractConfig {
    /// Reject tag keys other than label/name/type/placeholder
    #[serde(default = "default_false")]
    pub strict_tags: bool,

    /// Input type used when a member has no `type` tag (default: "text")
    #[serde(default = "default_type")]
    pub default_type: String,
}

fn default_false() -> bool {
    false
}

fn default_type() -> String {
    "text".to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            strict_tags: false,
            default_type: default_type(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./form-builder.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    pub fn strict() -> Self {
        Self {
            extract: ExtractConfig {
                strict_tags: true,
                ..ExtractConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(!config.extract.strict_tags);
        assert_eq!(config.extract.default_type, "text");
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(FormConfig::parse("  \n").unwrap(), FormConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [extract]
            strict_tags = true
        "#;
        let config = FormConfig::parse(toml).unwrap();
        assert!(config.extract.strict_tags);
        assert_eq!(config.extract.default_type, "text");
    }

    #[test]
    fn test_invalid_config() {
        assert!(FormConfig::parse("[extract]\nstrict_tags = \"yes\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let config = FormConfig::load("does/not/exist/form-builder.toml").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "form-builder-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[extract]\ndefault_type = \"search\"\n").unwrap();

        let config = FormConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.extract.default_type, "search");
        assert!(!config.extract.strict_tags);
    }
}
