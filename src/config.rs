//! Runtime settings derived from the command line

use crate::cli::CliArgs;
use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Validated settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Depot base URL without trailing slash
    pub depot_url: String,
    /// Path of the hab binary
    pub hab_path: PathBuf,
    /// Per-request timeout for depot queries
    pub timeout: Duration,
    /// Show the resolution spinner
    pub show_progress: bool,
}

impl Settings {
    /// Build settings from parsed CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let depot_url = args.depot_url.trim().trim_end_matches('/').to_string();
        if !(depot_url.starts_with("http://") || depot_url.starts_with("https://")) {
            return Err(ConfigError::InvalidDepotUrl {
                value: args.depot_url.clone(),
            });
        }

        if args.timeout == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: args.timeout,
            });
        }

        Ok(Self {
            depot_url,
            hab_path: args.hab_path.clone(),
            timeout: Duration::from_secs(args.timeout),
            show_progress: !args.quiet,
        })
    }
}
