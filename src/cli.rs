//! CLI argument parsing module for sd-step

use crate::package_manager::DEFAULT_HAB_PATH;
use crate::registry::{DEFAULT_TIMEOUT, HAB_DEPOT_URL};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wrapper command of habitat for Screwdriver
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sd-step",
    version,
    about = "Wrapper command of habitat for Screwdriver",
    override_usage = "sd-step command arguments [options]"
)]
pub struct CliArgs {
    /// Package version which also accepts semver expression
    #[arg(long = "pkg-version", global = true, default_value = "")]
    pub pkg_version: String,

    /// Base URL of the habitat depot
    #[arg(long, global = true, env = "SD_STEP_DEPOT_URL", default_value = HAB_DEPOT_URL)]
    pub depot_url: String,

    /// Path of the hab binary
    #[arg(long, global = true, env = "SD_STEP_HAB_PATH", default_value = DEFAULT_HAB_PATH)]
    pub hab_path: PathBuf,

    /// Per-request timeout for depot queries, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable quiet mode - no progress spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Install and exec habitat package with pkg_name and command...
    Exec(ExecArgs),
}

/// Arguments of `sd-step exec`
#[derive(Args, Debug, Clone)]
pub struct ExecArgs {
    /// Package name (e.g. core/git)
    pub pkg_name: String,

    /// Command to execute inside the package
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
