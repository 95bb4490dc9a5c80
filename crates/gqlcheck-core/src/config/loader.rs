//! Loading declared bindings from YAML and JSON files
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::CapabilityBindings;
use crate::error::ConfigError;
use serde_json::Value;
use std::path::Path;

/// Supported bindings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Reads declared bindings from disk
#[derive(Debug, Default)]
pub struct BindingsLoader;

impl BindingsLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a bindings file, detecting format from its extension
    pub fn load_file(&self, path: &Path) -> Result<CapabilityBindings, ConfigError> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let bindings = self.parse_content(&content, format, path)?;
        tracing::debug!(path = %path.display(), bindings = bindings.len(), "Loaded bindings file");
        Ok(bindings)
    }

    /// Parse bindings content with explicit format
    pub fn parse_content(
        &self,
        content: &str,
        format: Format,
        path: &Path,
    ) -> Result<CapabilityBindings, ConfigError> {
        let value = match format {
            Format::Yaml => self.parse_yaml(content, path)?,
            Format::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::parse(path.to_path_buf(), e.to_string()))?,
        };

        CapabilityBindings::from_value(value)
            .map_err(|e| ConfigError::parse(path.to_path_buf(), e.to_string()))
    }

    fn parse_yaml(&self, content: &str, path: &Path) -> Result<Value, ConfigError> {
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::parse(path.to_path_buf(), e.to_string()))?;

        // Convert to JSON Value for consistent handling
        serde_json::to_value(yaml_value).map_err(|e| ConfigError::parse(path.to_path_buf(), e.to_string()))
    }
}
