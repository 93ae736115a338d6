//! Create and remove artifacts while keeping the build file in sync.
//!
//! Each request writes or deletes the artifact's files and then applies the
//! matching build-file edit exactly once:
//!
//! - drivers and BSPs are listed in the object list
//! - examples get target variables, a dependency, a summary line and a recipe
//!
//! The build file is loaded, edited in memory and saved once per request.

use crate::artifact::{ArtifactKind, ArtifactStore, FileRole, validate_name};
use crate::buildfile::{BuildFile, BuildFileLayout, Region};
use crate::context::ProjectContext;
use crate::error::{Result, ScaffoldError};
use crate::template::{TemplateSet, render};
use chrono::NaiveDateTime;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, warn};


/// What to do with an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Remove,
}

/// A single create or remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub kind: ArtifactKind,
    pub action: Action,
    pub name: String,
}

impl Request {
    pub fn new(kind: ArtifactKind, action: Action, name: impl Into<String>) -> Self {
        Self {
            kind,
            action,
            name: name.into(),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            Action::Create => "create",
            Action::Remove => "remove",
        };
        write!(f, "{} {} '{}'", verb, self.kind, self.name)
    }
}

/// How a request ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one file was written and the build file updated.
    Created,
    /// Every file already existed; nothing was touched.
    AlreadyExists,
    /// The artifact's files are gone and the build file no longer references it.
    Removed,
    /// None of the artifact's files existed.
    NotFound,
}

/// Outcome plus the status lines to show the user, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub outcome: Outcome,
    pub messages: Vec<String>,
}

/// Sequences artifact file operations and build-file edits.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    store: ArtifactStore,
    templates: TemplateSet,
    build_file: PathBuf,
    layout: BuildFileLayout,
    now: NaiveDateTime,
}

impl Orchestrator {
    /// `now` is the timestamp rendered into `{{date}}` for every generated file.
    pub fn new(ctx: &ProjectContext, templates: TemplateSet, now: NaiveDateTime) -> Self {
        Self {
            store: ctx.store(),
            templates,
            build_file: ctx.build_file_path(),
            layout: ctx.config.layout.clone(),
            now,
        }
    }

    /// Run every request in order. A failed request does not stop later ones.
    pub fn run_all(&self, requests: &[Request]) -> Vec<Result<ActionReport>> {
        requests
            .iter()
            .map(|request| {
                let result = self.run(request);
                if let Err(e) = &result {
                    warn!(%request, error = %e, "request failed");
                }
                result
            })
            .collect()
    }

    pub fn run(&self, request: &Request) -> Result<ActionReport> {
        info!(%request, "processing");
        match request.action {
            Action::Create => self.create(request.kind, &request.name),
            Action::Remove => self.remove(request.kind, &request.name),
        }
    }

    /// Write the artifact's missing files and register it in the build file.
    pub fn create(&self, kind: ArtifactKind, name: &str) -> Result<ActionReport> {
        validate_name(name)?;

        if self.store.exists(kind, name) {
            return Ok(ActionReport {
                outcome: Outcome::AlreadyExists,
                messages: vec![format!("{} {} already exists", kind.label(), name)],
            });
        }

        let header = self
            .templates
            .header(kind)
            .map(|template| render(template, name, self.now));
        let source = render(self.templates.source(kind), name, self.now);

        let written = self.store.write(kind, name, header.as_deref(), &source)?;
        let mut messages: Vec<String> = written
            .iter()
            .map(|(role, path)| created_message(kind, *role, path))
            .collect();

        self.register(kind, name, &mut messages)?;

        Ok(ActionReport {
            outcome: Outcome::Created,
            messages,
        })
    }

    /// Delete the artifact's files and drop its build-file entries.
    pub fn remove(&self, kind: ArtifactKind, name: &str) -> Result<ActionReport> {
        validate_name(name)?;

        let removed = self.store.delete(kind, name)?;
        let mut messages: Vec<String> = removed
            .iter()
            .map(|(role, path)| removed_message(kind, *role, path))
            .collect();

        self.unregister(kind, name, &mut messages)?;

        // delete() either removes every file that exists or fails, so a
        // non-empty `removed` means the artifact is fully cleared.
        let outcome = if removed.is_empty() {
            messages.push(format!("{} {} does not exist", kind.label(), name));
            Outcome::NotFound
        } else {
            messages.push(format!(
                "{} {} has been removed successfully! All files cleared.",
                kind.label(),
                name
            ));
            Outcome::Removed
        };

        Ok(ActionReport { outcome, messages })
    }

    fn register(&self, kind: ArtifactKind, name: &str, messages: &mut Vec<String>) -> Result<()> {
        let mut file = BuildFile::load(&self.build_file)?;
        let build_file = self.build_file_label();

        match kind {
            ArtifactKind::Driver | ArtifactKind::Bsp => {
                if file.add_object_entry(&self.layout, name)? {
                    file.save(&self.build_file)?;
                    messages.push(format!("Added {}.o to the object list in {}", name, build_file));
                } else {
                    messages.push(format!("{}.o is already in the object list", name));
                }
                Ok(())
            }
            ArtifactKind::Example => {
                let report = file.add_example_target(&self.layout, name);
                if report.changed {
                    file.save(&self.build_file)?;
                    messages.push(format!("Added target {}.elf to {}", name, build_file));
                } else {
                    messages.push(format!("Target {}.elf is already in {}", name, build_file));
                }
                if report.skipped.contains(&Region::RecipeBlock) {
                    messages.push(format!(
                        "No example recipe anchor in {}, recipe for {} not written",
                        build_file, name
                    ));
                }
                if report.missing.is_empty() {
                    Ok(())
                } else {
                    Err(ScaffoldError::StructureNotFound {
                        regions: report.missing,
                    })
                }
            }
        }
    }

    fn unregister(&self, kind: ArtifactKind, name: &str, messages: &mut Vec<String>) -> Result<()> {
        let mut file = BuildFile::load(&self.build_file)?;
        let build_file = self.build_file_label();

        let changed = match kind {
            ArtifactKind::Driver | ArtifactKind::Bsp => {
                if let Some(other) = self.object_sharer(kind, name) {
                    debug!(name, %other, "object still used, keeping object list entry");
                    messages.push(format!(
                        "Kept {}.o in {}: {} {} still exists",
                        name,
                        build_file,
                        other.label(),
                        name
                    ));
                    false
                } else {
                    file.remove_object_entry(&self.layout, name) > 0
                }
            }
            ArtifactKind::Example => file.remove_example_target(&self.layout, name),
        };

        if changed {
            file.save(&self.build_file)?;
            messages.push(format!("Removed {} from {}", name, build_file));
        } else {
            debug!(name, "build file has no entries to remove");
        }

        Ok(())
    }

    /// The other object-producing kind, if it still has files named `name`.
    ///
    /// Drivers and BSPs both compile to `<object_dir>/<name>.o`, so they share
    /// one object list entry.
    fn object_sharer(&self, kind: ArtifactKind, name: &str) -> Option<ArtifactKind> {
        let other = match kind {
            ArtifactKind::Driver => ArtifactKind::Bsp,
            ArtifactKind::Bsp => ArtifactKind::Driver,
            ArtifactKind::Example => return None,
        };
        (!self.store.existing(other, name).is_empty()).then_some(other)
    }

    fn build_file_label(&self) -> String {
        self.build_file
            .strip_prefix(self.store.root())
            .unwrap_or(&self.build_file)
            .display()
            .to_string()
    }
}

fn created_message(kind: ArtifactKind, role: FileRole, path: &std::path::Path) -> String {
    match (kind, role) {
        (ArtifactKind::Example, _) => format!("Created example: {}", path.display()),
        (ArtifactKind::Bsp, role) => format!("Created BSP {}: {}", role, path.display()),
        (ArtifactKind::Driver, role) => format!("Created {} file: {}", role, path.display()),
    }
}

fn removed_message(kind: ArtifactKind, role: FileRole, path: &std::path::Path) -> String {
    match (kind, role) {
        (ArtifactKind::Example, _) => format!("Removed example file: {}", path.display()),
        (ArtifactKind::Bsp, role) => format!("Removed BSP {} file: {}", role, path.display()),
        (ArtifactKind::Driver, role) => format!("Removed {} file: {}", role, path.display()),
    }
}
