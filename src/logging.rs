//! Logging setup for the sd-step binary
//!
//! Diagnostics go to stderr so they never mix with the output of the
//! executed package command. `RUST_LOG` takes precedence over the CLI level.

use tracing_subscriber::EnvFilter;

/// Default filter directive
const DEFAULT_LEVEL: &str = "warn";

/// Filter directive used with `--verbose`
const VERBOSE_LEVEL: &str = "sd_step=debug";

/// Pick the filter directive for the requested verbosity
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
