//! Configuration loading and management for aspnet-fmt
//!
//! Every field defaults to the built-in ASP.NET conventions, so an absent or
//! partial YAML file behaves exactly like the fixed rule set.

use crate::domain::violations::{FormatError, FormatResult};
use crate::rules::license_header::{DEFAULT_EXTENSION, DEFAULT_HEADER_LINES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILES: [&str; 3] = [
    "aspnet_fmt.yaml",
    "aspnet_fmt.yml",
    ".aspnet_fmt.yaml",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Configuration format version
    pub version: String,
    /// Directory names skipped at any depth
    pub excluded_directories: Vec<String>,
    /// License header rule settings
    pub license_header: LicenseHeaderConfig,
}

/// Settings for the license header rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseHeaderConfig {
    /// Whether the rule runs at all
    pub enabled: bool,
    /// Extension the header is required on, without the leading dot
    pub extension: String,
    /// Header lines, joined with the platform line ending
    pub lines: Vec<String>,
}

impl Default for LicenseHeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extension: DEFAULT_EXTENSION.to_string(),
            lines: DEFAULT_HEADER_LINES
                .iter()
                .map(|line| line.to_string())
                .collect(),
        }
    }
}

impl FormatterConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FormatResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            FormatError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FormatError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> FormatResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| FormatError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Find a config file in `dir`, falling back to defaults
    pub fn discover_in<P: AsRef<Path>>(dir: P) -> FormatResult<Self> {
        match Self::find_config_file(dir) {
            Some(path) => {
                tracing::debug!("Using configuration from {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Find a config file in the current working directory
    pub fn discover() -> FormatResult<Self> {
        Self::discover_in(".")
    }

    fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> FormatResult<()> {
        if self.version != "1.0" {
            return Err(FormatError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        for name in &self.excluded_directories {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(FormatError::config(format!(
                    "Excluded directory '{name}' must be a single directory name"
                )));
            }
        }

        let header = &self.license_header;
        if header.enabled {
            if header.extension.is_empty() || header.extension.starts_with('.') {
                return Err(FormatError::config(format!(
                    "License header extension '{}' must be non-empty and given without a leading dot",
                    header.extension
                )));
            }
            if header.lines.is_empty() {
                return Err(FormatError::config(
                    "License header must have at least one line",
                ));
            }
        }

        Ok(())
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            excluded_directories: vec![
                ".git".to_string(),
                "bin".to_string(),
                "obj".to_string(),
            ],
            license_header: LicenseHeaderConfig::default(),
        }
    }
}
