//! CLI argument parsing for prjmgr.
//!
//! Uses clap derive macros for declarative argument definitions. Each
//! (kind, action) pair is a flag taking the artifact name; several flags may
//! be combined in one invocation.

use crate::artifact::ArtifactKind;
use crate::orchestrator::{Action, Request};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// prjmgr: scaffold drivers, BSPs and examples for the firmware project.
///
/// Generated files come from the project's templates, and the Makefile is
/// updated so the object list, default target and example recipes match
/// what exists on disk.
#[derive(Parser, Debug)]
#[command(name = "prjmgr")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("actions")
        .required(true)
        .multiple(true)
        .args([
            "create_driver",
            "remove_driver",
            "create_example",
            "remove_example",
            "create_bsp",
            "remove_bsp",
        ])
))]
pub struct Cli {
    /// Create a new driver with the given name.
    #[arg(long, value_name = "NAME")]
    pub create_driver: Option<String>,

    /// Remove an existing driver by name.
    #[arg(long, value_name = "NAME")]
    pub remove_driver: Option<String>,

    /// Create a new example with the given name.
    #[arg(long, value_name = "NAME")]
    pub create_example: Option<String>,

    /// Remove an existing example by name.
    #[arg(long, value_name = "NAME")]
    pub remove_example: Option<String>,

    /// Create a new BSP with the given name.
    #[arg(long, value_name = "NAME")]
    pub create_bsp: Option<String>,

    /// Remove an existing BSP by name.
    #[arg(long, value_name = "NAME")]
    pub remove_bsp: Option<String>,

    /// Project root. Defaults to the nearest directory holding prjmgr.yaml or a Makefile.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Requested actions, always in the order create-driver, remove-driver,
    /// create-example, remove-example, create-bsp, remove-bsp.
    pub fn requests(&self) -> Vec<Request> {
        [
            (ArtifactKind::Driver, Action::Create, &self.create_driver),
            (ArtifactKind::Driver, Action::Remove, &self.remove_driver),
            (ArtifactKind::Example, Action::Create, &self.create_example),
            (ArtifactKind::Example, Action::Remove, &self.remove_example),
            (ArtifactKind::Bsp, Action::Create, &self.create_bsp),
            (ArtifactKind::Bsp, Action::Remove, &self.remove_bsp),
        ]
        .into_iter()
        .filter_map(|(kind, action, name)| {
            name.as_ref()
                .map(|name| Request::new(kind, action, name.clone()))
        })
        .collect()
    }
}
