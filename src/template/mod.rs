//! Template rendering for generated C sources.
//!
//! Templates are plain text with three kinds of placeholder:
//!
//! - `{{driver_name}}` or `{{name}}` - the artifact name
//! - `{{driver_name_upper}}` or `{{NAME_UPPER}}` - the artifact name upper-cased
//! - `{{date}}` - the creation timestamp as `DD/MM/YYYY HH:MM:SS`
//!
//! Unknown `{{...}}` sequences are left as they are. `{{date}}` is expanded
//! before the name placeholders.

use crate::artifact::ArtifactKind;
use crate::error::{Result, ScaffoldError};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

mod builtin;

/// Timestamp format substituted for `{{date}}`.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Substitute the name, upper-case name and date placeholders in `template`.
pub fn render(template: &str, name: &str, now: NaiveDateTime) -> String {
    let upper = name.to_uppercase();
    let date = now.format(DATE_FORMAT).to_string();

    template
        .replace("{{date}}", &date)
        .replace("{{driver_name_upper}}", &upper)
        .replace("{{NAME_UPPER}}", &upper)
        .replace("{{driver_name}}", name)
        .replace("{{name}}", name)
}

/// Header and source templates for drivers and BSPs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairTemplate {
    pub header: String,
    pub source: String,
}

/// Single-file template for examples.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleTemplate {
    pub main: String,
}

/// All templates, as stored in `scripts/templates.json`.
///
/// Sections missing from the file fall back to the built-in templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateSet {
    pub driver_template: PairTemplate,
    pub example_template: ExampleTemplate,
    pub bsp_template: PairTemplate,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            driver_template: PairTemplate {
                header: builtin::DRIVER_HEADER.to_string(),
                source: builtin::DRIVER_SOURCE.to_string(),
            },
            example_template: ExampleTemplate {
                main: builtin::EXAMPLE_MAIN.to_string(),
            },
            bsp_template: PairTemplate {
                header: builtin::BSP_HEADER.to_string(),
                source: builtin::BSP_SOURCE.to_string(),
            },
        }
    }
}

impl TemplateSet {
    /// Load templates from a JSON file, or the built-in set if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "template file not found, using built-in templates");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::io("read", path, e))?;
        Self::from_json(&content).map_err(|e| match e {
            ScaffoldError::Config(msg) => {
                ScaffoldError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse templates from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScaffoldError::Config(format!("failed to parse templates JSON: {}", e)))
    }

    /// Header template for `kind`, if the kind has a header file.
    pub fn header(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Driver => Some(self.driver_template.header.as_str()),
            ArtifactKind::Example => None,
            ArtifactKind::Bsp => Some(self.bsp_template.header.as_str()),
        }
    }

    /// Source template for `kind`.
    pub fn source(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Driver => self.driver_template.source.as_str(),
            ArtifactKind::Example => self.example_template.main.as_str(),
            ArtifactKind::Bsp => self.bsp_template.source.as_str(),
        }
    }
}
