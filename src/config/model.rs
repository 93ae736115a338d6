//! Config struct definition and default implementation.

use crate::buildfile::BuildFileLayout;
use serde::Deserialize;

/// Configuration for a firmware project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build file path relative to the project root (default: "Makefile").
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Template file path relative to the project root (default: "scripts/templates.json").
    #[serde(default = "default_templates_file")]
    pub templates_file: String,

    /// Anchor patterns used to edit the build file.
    #[serde(default)]
    pub layout: BuildFileLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_file: default_build_file(),
            templates_file: default_templates_file(),
            layout: BuildFileLayout::default(),
        }
    }
}

pub(crate) fn default_build_file() -> String {
    "Makefile".to_string()
}

pub(crate) fn default_templates_file() -> String {
    "scripts/templates.json".to_string()
}
