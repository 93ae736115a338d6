//! Config loading and validation.

use super::model::Config;
use crate::error::{Result, ScaffoldError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file, or defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::io("read", path, e))?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Treat an empty file as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ScaffoldError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `build_file` and `templates_file` must be non-empty relative paths
    /// - every layout anchor must be non-empty
    /// - `layout.fallback_example` must be a valid artifact name
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("build_file", &self.build_file),
            ("templates_file", &self.templates_file),
        ] {
            if value.trim().is_empty() {
                return Err(ScaffoldError::Config(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
            if Path::new(value).is_absolute() {
                return Err(ScaffoldError::Config(format!(
                    "config validation failed: {} must be relative to the project root (found '{}')",
                    field, value
                )));
            }
        }

        self.layout.validate()
    }
}
