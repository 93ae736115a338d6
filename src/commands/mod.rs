//! Command execution for prjmgr.
//!
//! Resolves the project, loads templates, runs every requested action and
//! prints one status line per sub-step. Failures are reported as they happen
//! and do not stop the remaining actions.

use crate::cli::Cli;
use crate::context::ProjectContext;
use crate::error::{Result, ScaffoldError};
use crate::orchestrator::Orchestrator;
use crate::template::TemplateSet;
use chrono::Local;
use tracing::debug;

/// Run every action requested on the command line.
pub fn dispatch(cli: Cli) -> Result<()> {
    let requests = cli.requests();

    let ctx = ProjectContext::resolve(cli.root.as_deref())?;
    debug!(
        root = %ctx.root.display(),
        config = %ctx.config_path().display(),
        build_file = %ctx.build_file_path().display(),
        "project resolved"
    );

    let templates = TemplateSet::load(ctx.templates_path())?;
    let orchestrator = Orchestrator::new(&ctx, templates, Local::now().naive_local());

    let results = orchestrator.run_all(&requests);

    let total = results.len();
    let mut failures = Vec::new();
    for (request, result) in requests.iter().zip(results) {
        match result {
            Ok(report) => {
                debug!(%request, outcome = ?report.outcome, "request finished");
                for message in &report.messages {
                    println!("{}", message);
                }
            }
            Err(err) => {
                eprintln!("Failed to {}: {}", request, err);
                failures.push(err);
            }
        }
    }

    let failed = failures.len();
    match failures.into_iter().next() {
        None => Ok(()),
        Some(first) if total == 1 => Err(first),
        Some(first) => Err(ScaffoldError::ActionsFailed {
            failed,
            total,
            first: Box::new(first),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::{DirGuard, SAMPLE_MAKEFILE, create_test_project, read};
    use clap::Parser;
    use serial_test::serial;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("prjmgr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_dispatch_with_explicit_root() {
        let project = create_test_project();
        let root = project.path().to_str().unwrap();

        dispatch(cli(&["--root", root, "--create-driver", "uart2", "--create-example", "blink"]))
            .unwrap();

        assert!(project.path().join("drivers/inc/uart2.h").exists());
        assert!(project.path().join("src/blink.c").exists());
        let makefile = read(&project.path().join("Makefile"));
        assert!(makefile.contains("$(OBJDIR)/uart2.o"));
        assert!(makefile.contains("# Example: blink"));
    }

    #[test]
    #[serial]
    fn test_dispatch_from_current_directory() {
        let project = create_test_project();
        let _guard = DirGuard::new(&project.path().join("drivers"));

        dispatch(cli(&["--create-bsp", "lcd"])).unwrap();
        dispatch(cli(&["--remove-bsp", "lcd"])).unwrap();

        assert!(!project.path().join("bsp/lcd.h").exists());
        assert_eq!(read(&project.path().join("Makefile")), SAMPLE_MAKEFILE);
    }

    #[test]
    fn test_dispatch_uses_project_templates() {
        let project = create_test_project();
        std::fs::write(
            project.path().join("scripts/templates.json"),
            r#"{"example_template": {"main": "/* {{driver_name}} by template */\n"}}"#,
        )
        .unwrap();
        let root = project.path().to_str().unwrap();

        dispatch(cli(&["--root", root, "--create-example", "blink"])).unwrap();

        assert_eq!(
            read(&project.path().join("src/blink.c")),
            "/* blink by template */\n"
        );
    }

    #[test]
    fn test_dispatch_single_failure_keeps_its_exit_code() {
        let project = create_test_project();
        std::fs::write(project.path().join("Makefile"), "all:\n").unwrap();
        let root = project.path().to_str().unwrap();

        let err = dispatch(cli(&["--root", root, "--create-driver", "uart2"])).unwrap_err();

        assert!(matches!(err, ScaffoldError::StructureNotFound { .. }));
        assert_eq!(err.exit_code(), exit_codes::STRUCTURE_FAILURE);
    }

    #[test]
    fn test_dispatch_reports_partial_failure() {
        let project = create_test_project();
        let root = project.path().to_str().unwrap();

        let err = dispatch(cli(&[
            "--root",
            root,
            "--create-driver",
            "bad/name",
            "--create-bsp",
            "lcd",
        ]))
        .unwrap_err();

        match &err {
            ScaffoldError::ActionsFailed { failed, total, .. } => {
                assert_eq!((*failed, *total), (1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(project.path().join("bsp/lcd.c").exists());
    }
}
