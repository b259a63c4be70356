//! sd-step - wrapper command of habitat for Screwdriver
//!
//! Installs a habitat package, optionally at the highest version matching a
//! semver expression, and executes a command inside it.

use clap::Parser;
use colored::Colorize;
use sd_step::cli::{CliArgs, Commands};
use sd_step::config::Settings;
use sd_step::logging::init_logging;
use sd_step::orchestrator::Orchestrator;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let settings = Settings::from_cli(&args)?;

    match &args.command {
        Commands::Exec(exec) => {
            let orchestrator = Orchestrator::from_settings(&settings)?;
            orchestrator
                .exec(&exec.pkg_name, &args.pkg_version, &exec.command)
                .await?;
        }
    }

    Ok(())
}
