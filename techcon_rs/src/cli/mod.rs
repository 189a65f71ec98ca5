//! `techcon` command line: lint and export page content.
//!
//! Content editors swap `content/catalog.json` for real data; this tool checks
//! a replacement before it ships.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::section::SectionId;
use crate::validate::Severity;

#[derive(Parser, Debug)]
#[command(name = "techcon")]
#[command(about = "Content tooling for the TechCon landing page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a catalog file (the embedded one when no path is given)
    Check {
        /// Catalog JSON to validate
        path: Option<PathBuf>,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Print the embedded catalog as pretty JSON
    Dump,
    /// Print the nav label to anchor map of a catalog
    Nav {
        /// Catalog JSON to read (the embedded one when omitted)
        path: Option<PathBuf>,
    },
}

/// Runs one command, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    match &cli.command {
        Command::Check { path, strict } => check(path.as_ref(), *strict, out),
        Command::Dump => {
            let catalog = Catalog::builtin().context("embedded catalog is invalid")?;
            writeln!(out, "{}", catalog.to_json_pretty()?)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Nav { path } => nav(path.as_ref(), out),
    }
}

fn load(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog");
            Catalog::load_from_path(path)
                .with_context(|| format!("cannot load catalog from {}", path.display()))
        }
        None => Catalog::builtin().context("embedded catalog is invalid"),
    }
}

fn check(path: Option<&PathBuf>, strict: bool, out: &mut impl Write) -> Result<ExitCode> {
    let catalog = load(path)?;
    let report = catalog.validate();

    for issue in &report.issues {
        let tag = match issue.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        writeln!(out, "{tag}: {issue}")?;
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    info!(errors, warnings, "catalog checked");
    writeln!(out, "{errors} error(s), {warnings} warning(s)")?;

    let failed = errors > 0 || (strict && warnings > 0);
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn nav(path: Option<&PathBuf>, out: &mut impl Write) -> Result<ExitCode> {
    let catalog = load(path)?;
    let mut dangling = false;

    for label in &catalog.nav {
        match SectionId::from_nav_label(label) {
            Ok(section) => writeln!(out, "{label:<10} -> {}", section.href().unwrap_or_default())?,
            Err(err) => {
                dangling = true;
                writeln!(out, "{label:<10} -> (dangling) {err}")?;
            }
        }
    }

    Ok(if dangling {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> (ExitCode, String) {
        let cli = Cli::try_parse_from(args).expect("valid args");
        let mut out = Vec::new();
        let code = run(&cli, &mut out).expect("command runs");
        (code, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn check_builtin_reports_clean() {
        let (code, out) = run_to_string(&["techcon", "check"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("0 error(s), 0 warning(s)"));
    }

    #[test]
    fn nav_lists_every_anchor() {
        let (code, out) = run_to_string(&["techcon", "nav"]);
        assert_eq!(code, ExitCode::SUCCESS);
        for anchor in ["#about", "#speakers", "#schedule", "#pricing", "#venue", "#faq"] {
            assert!(out.contains(anchor), "missing {anchor} in {out}");
        }
    }

    #[test]
    fn dump_is_valid_catalog_json() {
        let (_, out) = run_to_string(&["techcon", "dump"]);
        let catalog = Catalog::from_json(&out).expect("dump parses back");
        assert_eq!(catalog.speakers.len(), 6);
    }

    #[test]
    fn missing_file_is_an_error() {
        let cli = Cli::try_parse_from(["techcon", "check", "/definitely/not/here.json"])
            .expect("valid args");
        let err = run(&cli, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("cannot load catalog"));
    }
}
