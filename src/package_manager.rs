//! Package runner integration for installing and executing habitat packages
//!
//! This module provides:
//! - Translation of a package name and resolved version into a package identifier
//! - Execution of `hab pkg install` and `hab pkg exec` through the shell

use crate::error::RunnerError;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;
use tracing::debug;

/// Default location of the hab binary on build hosts
pub const DEFAULT_HAB_PATH: &str = "/opt/sd/bin/hab";

/// Versions accepted by `hab pkg install <origin>/<name>/<version>`
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*$").unwrap());

/// Build the identifier passed to the package manager.
///
/// An empty version leaves the choice to the package manager (latest).
pub fn package_ident(name: &str, version: &str) -> Result<String, RunnerError> {
    if version.is_empty() {
        Ok(name.to_string())
    } else if VERSION_RE.is_match(version) {
        Ok(format!("{}/{}", name, version))
    } else {
        Err(RunnerError::invalid_version(version))
    }
}

/// Trait for running package manager commands
pub trait PackageRunner {
    /// Install the package identified by `ident`
    fn install(&self, ident: &str) -> Result<(), RunnerError>;

    /// Run `command` inside the environment of the installed package
    fn exec(&self, ident: &str, command: &[String]) -> Result<(), RunnerError>;
}

/// Runner that shells out to the hab binary
#[derive(Debug, Clone)]
pub struct HabRunner {
    hab_path: PathBuf,
}

impl HabRunner {
    /// Create a runner for the hab binary at `hab_path`
    pub fn new(hab_path: impl Into<PathBuf>) -> Self {
        Self {
            hab_path: hab_path.into(),
        }
    }

    /// Path of the hab binary
    pub fn hab_path(&self) -> &Path {
        &self.hab_path
    }

    fn install_command(&self, ident: &str) -> String {
        format!("{} pkg install {} >/dev/null", self.hab_path.display(), ident)
    }

    fn exec_command(&self, ident: &str, command: &[String]) -> String {
        let mut parts = vec![
            self.hab_path.display().to_string(),
            "pkg".to_string(),
            "exec".to_string(),
            ident.to_string(),
        ];
        parts.extend(command.iter().cloned());
        parts.join(" ")
    }

    /// Run a command line through `sh -c`, inheriting stdout and stderr
    fn run_shell(&self, command: &str) -> Result<(), RunnerError> {
        debug!(command, "running");

        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|source| RunnerError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunnerError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

impl Default for HabRunner {
    fn default() -> Self {
        Self::new(DEFAULT_HAB_PATH)
    }
}

impl PackageRunner for HabRunner {
    fn install(&self, ident: &str) -> Result<(), RunnerError> {
        self.run_shell(&self.install_command(ident))
    }

    fn exec(&self, ident: &str, command: &[String]) -> Result<(), RunnerError> {
        self.run_shell(&self.exec_command(ident, command))
    }
}

/// Install `name` at `version`, then run `command` inside it
pub fn run_step<R: PackageRunner>(
    runner: &R,
    name: &str,
    version: &str,
    command: &[String],
) -> Result<(), RunnerError> {
    let ident = package_ident(name, version)?;
    runner.install(&ident)?;
    runner.exec(&ident, command)
}
